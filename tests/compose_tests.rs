//! Unit tests for function composition utilities.
//!
//! Tests for the compose function, the compose! macro, and the identity,
//! constant, and flip helpers.

#![cfg(feature = "compose")]

use funcore::compose;
use funcore::compose::{compose, constant, flip, identity};

// =============================================================================
// compose function tests
// =============================================================================

#[test]
fn test_compose_applies_right_then_left() {
    fn add_one(x: i32) -> i32 {
        x + 1
    }
    fn double(x: i32) -> i32 {
        x * 2
    }

    // compose(f, g)(x) = f(g(x)) = double(add_one(1)) = 4
    let composed = compose(double, add_one);
    assert_eq!(composed(1), 4);
}

#[test]
fn test_compose_defers_execution() {
    use std::cell::Cell;

    let calls = Cell::new(0);
    let record = |x: i32| {
        calls.set(calls.get() + 1);
        x
    };

    let composed = compose(record, |x: i32| x * 2);
    assert_eq!(calls.get(), 0, "neither function runs until invoked");
    assert_eq!(composed(5), 10);
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_compose_changes_types() {
    let composed = compose(|s: String| s.len(), |x: i32| x.to_string());
    assert_eq!(composed(12345), 5);
}

#[test]
fn test_compose_with_closures_capturing_environment() {
    let multiplier = 3;
    let multiply = move |x: i32| x * multiplier;
    let add_ten = |x: i32| x + 10;

    let composed = compose(add_ten, multiply);
    assert_eq!(composed(5), 25); // add_ten(multiply(5)) = 25
}

#[test]
fn test_compose_reusable() {
    let composed = compose(|x: i32| x + 1, |x: i32| x * 2);
    assert_eq!(composed(1), 3);
    assert_eq!(composed(2), 5);
}

// =============================================================================
// compose! macro tests
// =============================================================================

#[test]
fn test_compose_macro_single() {
    let double = |x: i32| x * 2;
    let composed = compose!(double);
    assert_eq!(composed(5), 10);
}

#[test]
fn test_compose_macro_two() {
    fn add_one(x: i32) -> i32 {
        x + 1
    }
    fn double(x: i32) -> i32 {
        x * 2
    }

    let composed = compose!(double, add_one);
    assert_eq!(composed(1), 4);
}

#[test]
fn test_compose_macro_three() {
    let add_one = |x: i32| x + 1;
    let double = |x: i32| x * 2;
    let square = |x: i32| x * x;

    // add_one(double(square(3))) = add_one(18) = 19
    let composed = compose!(add_one, double, square);
    assert_eq!(composed(3), 19);
}

#[test]
fn test_compose_macro_matches_function() {
    fn f(x: i32) -> i32 {
        x + 1
    }
    fn g(x: i32) -> i32 {
        x * 2
    }

    assert_eq!(compose!(f, g)(10), compose(f, g)(10));
}

// =============================================================================
// identity function tests
// =============================================================================

#[test]
fn test_identity_returns_same_value() {
    assert_eq!(identity(42), 42);
    assert_eq!(identity("hello"), "hello");
    assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
}

#[test]
fn test_identity_is_composition_unit() {
    fn double(x: i32) -> i32 {
        x * 2
    }

    let left = compose(identity, double);
    let right = compose(double, identity);
    assert_eq!(left(7), double(7));
    assert_eq!(right(7), double(7));
}

// =============================================================================
// constant function tests
// =============================================================================

#[test]
fn test_constant_ignores_input() {
    let always_five = constant::<_, i32>(5);
    assert_eq!(always_five(100), 5);
    assert_eq!(always_five(-50), 5);
}

#[test]
fn test_constant_with_iterators() {
    let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
    assert_eq!(zeros, vec![0, 0, 0]);
}

// =============================================================================
// flip function tests
// =============================================================================

#[test]
fn test_flip_swaps_arguments() {
    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    let flipped = flip(subtract);
    assert_eq!(flipped(3, 10), 7); // subtract(10, 3)
}

#[test]
fn test_double_flip_is_identity() {
    fn subtract(minuend: i32, subtrahend: i32) -> i32 {
        minuend - subtrahend
    }

    let flipped_twice = flip(flip(subtract));
    assert_eq!(flipped_twice(10, 3), subtract(10, 3));
}
