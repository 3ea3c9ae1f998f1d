//! Markdown format tests
//!
//! Tests for storage HTML → Markdown conversion, and for round trips through
//! both directions.

mod publish;
mod reverse;
mod round_trip;
