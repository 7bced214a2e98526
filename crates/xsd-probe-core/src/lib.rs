//! xsd-probe Core Schema Model
//!
//! This crate provides the in-memory schema representation shared by the
//! xsd-probe schema loader and diagnostic engine. It includes:
//!
//! - **Qualified names**: Efficient string-interned XML qualified names
//!   ([`qname::QName`])
//! - **Elements**: Declared schema elements with their attribute sets
//!   ([`element::SchemaElement`])
//! - **Graph**: The element registry with delegation (aliasing) between
//!   elements ([`graph::SchemaGraph`])
//! - **Errors**: Error types for graph construction ([`error`] module)

pub mod element;
pub mod error;
pub mod graph;
pub mod qname;

pub use element::SchemaElement;
pub use error::DelegateError;
pub use graph::{ElementId, SchemaGraph};
pub use qname::QName;
