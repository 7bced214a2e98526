//! Error types for schema graph construction.
//!
//! Delegation is the only fallible operation in this crate; every other
//! operation is a set insertion or a pure read. Misuse of an [`ElementId`]
//! from a different graph is a programming error on the producer's side and
//! panics at the point of use rather than being modeled here.
//!
//! [`ElementId`]: crate::graph::ElementId

use thiserror::Error;

use crate::qname::QName;

/// Errors raised when installing a delegate between schema elements.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DelegateError {
    /// The requested delegate resolves back to the delegating element's own
    /// canonical slot, so installing it would make redirect resolution
    /// non-terminating.
    #[error("delegating `{element}` to `{target}` would form a cycle")]
    WouldCycle {
        /// Qualified name of the element being redirected.
        element: QName,
        /// Qualified name of the requested delegate.
        target: QName,
    },
}
