//! Quotemine Distance - sequence distances used to spot single-word changes.
//!
//! Three primitives, each generic over sequences in [`seq`] and exposed for
//! strings ([`chars`]) and token sequences ([`words`]):
//!
//! - **hamming**: index-wise mismatches between equal-length sequences
//! - **subhamming**: minimum Hamming distance of a short sequence against every
//!   same-length window of a longer one, with the leftmost best offset
//! - **levenshtein**: edit distance with unit costs
//!
//! Calling `hamming` on unequal lengths, or `subhamming` with the longer
//! sequence second, is a usage error reported as [`DistanceError`].

#![deny(unsafe_code)]

pub mod chars;
mod error;
pub mod seq;
pub mod words;

pub use error::{DistanceError, DistanceResult};
pub use seq::SubMatch;
