//! Format implementations
//!
//! This module contains the conversions between Markdown and the wiki's
//! storage format:
//! - [`storage`]: Markdown → storage HTML
//! - [`html`]: storage HTML parsing
//! - [`markdown`]: storage HTML → Markdown

pub mod html;
pub mod markdown;
pub mod storage;
