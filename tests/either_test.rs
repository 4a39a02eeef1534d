// konsa - Either integration tests
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Integration tests for the right-biased union: folding, mapping,
//! chaining with short-circuit on `Left`, swapping, and conversion to
//! `Maybe`.

use konsa::{either, elim, Either, Maybe};

// =============================================================================
// Construction and predicates
// =============================================================================

#[test]
fn test_left_and_right() {
    let l: Either<&str, i32> = Either::left("oops");
    let r: Either<&str, i32> = Either::right(42);

    assert!(l.is_left());
    assert!(!l.is_right());
    assert!(r.is_right());
    assert!(!r.is_left());
}

#[test]
fn test_get_yields_only_right_payloads() {
    let r: Either<&str, i32> = Either::right(42);
    assert_eq!(r.get(), Some(42));

    let l: Either<&str, i32> = Either::left("oops");
    assert_eq!(l.get(), None);
}

#[test]
fn test_either_picks_a_branch_from_the_condition() {
    let r: Either<String, i32> = either(2 > 1, || 10, || "impossible".to_string());
    assert_eq!(r, Either::right(10));

    let l: Either<String, i32> = either(1 > 2, || 10, || "as expected".to_string());
    assert_eq!(l, Either::left("as expected".to_string()));
}

// =============================================================================
// Folding
// =============================================================================

#[test]
fn test_fold_invokes_exactly_the_active_branch() {
    let r: Either<String, i32> = Either::right(20);
    assert_eq!(r.fold(|_| unreachable!(), |n| n + 1), 21);

    let l: Either<String, i32> = Either::left("len4".to_string());
    assert_eq!(l.fold(|s| s.len(), |_| unreachable!()), 4);
}

#[test]
fn test_elim_is_fold_as_a_free_function() {
    let r: Either<String, i32> = Either::right(6);
    assert_eq!(elim(|_| 0, |n| n * 7, r), 42);
}

// =============================================================================
// Mapping and chaining
// =============================================================================

#[test]
fn test_map_transforms_right() {
    let r: Either<String, i32> = Either::right(2);
    assert_eq!(r.map(|n| n * 3), Either::right(6));
}

#[test]
fn test_map_passes_left_through() {
    let l: Either<String, i32> = Either::left("e".to_string());
    // The payload type widens; the left value is untouched.
    assert_eq!(l.map(|n| n.to_string()), Either::left("e".to_string()));
}

#[test]
fn test_and_then_chains_successes() {
    let r: Either<String, i32> = Either::right(42);
    let result = r
        .and_then(|n| Either::right(n * 2))
        .and_then(|n| Either::right(n + 1));
    assert_eq!(result, Either::right(85));
}

#[test]
fn test_and_then_short_circuits_on_left() {
    let l: Either<String, i32> = Either::left("e".to_string());
    let result = l.and_then(|n| Either::right(n * 2));
    assert_eq!(result, Either::left("e".to_string()));
}

#[test]
fn test_and_then_aborts_a_pipeline_at_the_first_failure() {
    let safe_div = |n: i32, d: i32| -> Either<String, i32> {
        if d == 0 {
            Either::left("division by zero".to_string())
        } else {
            Either::right(n / d)
        }
    };

    let result = safe_div(100, 2)
        .and_then(|n| safe_div(n, 0))
        .and_then(|n| safe_div(n, 5));
    assert_eq!(result, Either::left("division by zero".to_string()));
}

// =============================================================================
// Swap and conversion
// =============================================================================

#[test]
fn test_swap_exchanges_the_alternatives() {
    let r: Either<&str, i32> = Either::right(1);
    assert_eq!(r.swap(), Either::left(1));

    let l: Either<&str, i32> = Either::left("e");
    assert_eq!(l.swap(), Either::right("e"));
}

#[test]
fn test_swap_twice_is_identity() {
    let r: Either<&str, i32> = Either::right(1);
    assert_eq!(r.clone().swap().swap(), r);
}

#[test]
fn test_to_maybe_round_trip() {
    let r: Either<&str, i32> = Either::right(9);
    assert_eq!(r.to_maybe(), Maybe::just(9));

    let l: Either<&str, i32> = Either::left("gone");
    assert_eq!(l.to_maybe(), Maybe::<i32>::nothing());
}

// =============================================================================
// Display and equality
// =============================================================================

#[test]
fn test_display() {
    let r: Either<&str, i32> = Either::right(42);
    assert_eq!(r.to_string(), "Right(42)");

    let l: Either<&str, i32> = Either::left("oops");
    assert_eq!(l.to_string(), "Left(oops)");
}

#[test]
fn test_equality_requires_same_variant_and_payload() {
    let a: Either<&str, i32> = Either::right(1);
    let b: Either<&str, i32> = Either::right(1);
    let c: Either<&str, i32> = Either::left("1");
    assert_eq!(a, b);
    assert_ne!(a, c);
}
