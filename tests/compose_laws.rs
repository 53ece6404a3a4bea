#![cfg(feature = "compose")]
//! Property-based tests for function composition laws.
//!
//! Verifies the category laws of composition:
//! - Associativity: compose(f, compose(g, h)) == compose(compose(f, g), h)
//! - Left Identity: compose(identity, f) == f
//! - Right Identity: compose(f, identity) == f
//!
//! plus the flip involution and the pipe/compose duality.

use funcore::compose::{compose, flip, identity, pipe};
use proptest::prelude::*;

proptest! {
    /// Associativity: grouping of composition does not matter
    #[test]
    fn prop_compose_associativity(value: i32) {
        let f = |x: i32| x.wrapping_add(1);
        let g = |x: i32| x.wrapping_mul(2);
        let h = |x: i32| x.wrapping_sub(3);

        let left = compose(f, compose(g, h));
        let right = compose(compose(f, g), h);

        prop_assert_eq!(left(value), right(value));
    }

    /// Left identity: identity . f == f
    #[test]
    fn prop_compose_left_identity(value: i32) {
        let f = |x: i32| x.wrapping_mul(2);

        prop_assert_eq!(compose(identity, f)(value), f(value));
    }

    /// Right identity: f . identity == f
    #[test]
    fn prop_compose_right_identity(value: i32) {
        let f = |x: i32| x.wrapping_mul(2);

        prop_assert_eq!(compose(f, identity)(value), f(value));
    }

    /// Duality: threading a value with pipe equals applying the reversed
    /// composition
    #[test]
    fn prop_pipe_compose_duality(value: i32) {
        let f = |x: i32| x.wrapping_add(1);
        let g = |x: i32| x.wrapping_mul(2);

        let piped = pipe(pipe(value, f), g);
        let composed = compose(g, f)(value);

        prop_assert_eq!(piped, composed);
    }

    /// Double flip identity: flip(flip(f)) == f
    #[test]
    fn prop_double_flip_identity(a: i32, b: i32) {
        let f = |x: i32, y: i32| x.wrapping_sub(y);

        prop_assert_eq!(flip(flip(f))(a, b), f(a, b));
    }

    /// Flip definition: flip(f)(a, b) == f(b, a)
    #[test]
    fn prop_flip_definition(a: i32, b: i32) {
        let f = |x: i32, y: i32| x.wrapping_sub(y);

        prop_assert_eq!(flip(f)(a, b), f(b, a));
    }
}
