//! Storage HTML input
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` ecosystem for HTML parsing:
//! - `html5ever`: Browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! Storage format is not strict XHTML in practice (pages copied from the
//! editor regularly contain HTML entities and unbalanced markup), so a
//! forgiving HTML5 parser is preferred over an XML one.
//!
//! The parsed DOM is consumed by the Markdown serializer
//! ([`crate::formats::markdown`]).

pub mod parser;

pub use parser::{parse_storage, StorageDocument};
