// konsa - Persistent functional data types
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # konsa
//!
//! Small immutable building blocks for functional programming in Rust:
//!
//! - [`Maybe`]: an optional value, `Just(v)` or `Nothing`
//! - [`Either`]: a right-biased union of two alternatives
//! - [`List`]: a persistent singly-linked list with structural sharing
//! - [`Fraction`]: an exact rational on `i64`, always in lowest terms
//!
//! All four are immutable value types: "modification" returns a new value
//! and never touches the original. `List` goes further and shares its
//! unchanged tail segments between versions, so prepending is O(1).
//!
//! ## Quick start
//!
//! ```rust
//! use konsa::{list, Fraction, List};
//!
//! let xs: List<i64> = list![1, 2, 3, 4, 5];
//! assert_eq!(xs.fold_left(0, |acc, x| acc + x), 15);
//! assert_eq!(xs.to_string(), "[1, 2, 3, 4, 5]");
//!
//! let sum = Fraction::new(1, 2).unwrap() + Fraction::new(2, 3).unwrap();
//! assert_eq!(sum, Fraction::new(7, 6).unwrap());
//! ```

pub mod either;
pub mod error;
pub mod fraction;
pub mod list;
pub mod maybe;

pub use either::{either, elim, Either};
pub use error::{Error, Result};
pub use fraction::Fraction;
pub use list::{Iter, List};
pub use maybe::Maybe;
