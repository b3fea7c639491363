//! handrank: five-card poker hand classification and ranking
//!
//! Hands are classified through two bit-level encodings instead of
//! combinatorial enumeration: a 13-bit rank-presence mask for straight and
//! flush detection, and a nibble-per-rank multiplicity accumulator whose
//! mod-15 reduction fingerprints every duplicate shape (pair through
//! quads) without knowing which ranks are duplicated.
//!
//! Goals:
//! - Deterministic classification and a total order over five-card hands
//! - Small, well-documented public API
//! - No panics for invalid input; `Result` at the construction boundary
//!
//! ## Quick start: classify and compare
//! ```
//! use handrank::evaluator::{classify_five, compare_five, Category};
//! use handrank::hand::Hand;
//! use std::cmp::Ordering;
//!
//! let quads: Hand = "Jh Jc Jd Js 2h".parse().unwrap();
//! let boat: Hand = "8h 8c 8d 9s 9h".parse().unwrap();
//!
//! assert_eq!(classify_five(&quads).category, Category::FourOfAKind);
//! assert_eq!(classify_five(&boat).category, Category::FullHouse);
//! assert_eq!(compare_five(&quads, &boat), Ordering::Greater);
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
