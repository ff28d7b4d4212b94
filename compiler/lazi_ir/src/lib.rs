//! Lazi IR - shared data types
//!
//! This crate contains the data structures every stage of the lazi pipeline
//! agrees on:
//! - `GrowBuffer<T>`, the amortized-growth sequence used as storage everywhere
//! - `StringInterner` and `Name` for deduplicated identifiers
//! - `Span` for source locations
//! - `Token`, `TokenKind` and `TokenTag` for lexer output
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifier text becomes `Name(u32)`, compared by identity
//! - **Tag, Don't Union**: token payloads live in a sum type, so reading the
//!   wrong payload is a compile error rather than garbage

mod grow_buffer;
mod interner;
mod name;
mod span;
mod token;

pub use grow_buffer::GrowBuffer;
pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind, TokenTag};
