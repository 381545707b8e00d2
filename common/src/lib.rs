//! fxquote Common Types
//!
//! This crate contains the currency identifiers shared by the FX core and
//! the HTTP gateway.

pub mod monetary;

pub use monetary::*;
