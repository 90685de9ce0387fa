//! Parsed page representation
//!
//! A fetched dictionary page is converted once into a small typed tree of
//! elements and text nodes. Extraction only ever reads from this tree.

pub(crate) mod loader;
pub mod models;
pub mod query;

pub use loader::{DomError, MAX_DEPTH};
pub use models::*;
