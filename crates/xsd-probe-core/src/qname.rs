//! Qualified name management using string interning for efficient storage and comparison
//!
//! This module provides the [`QName`] type, pairing a namespace URI with a
//! local name. Both parts are interned, so a `QName` is a cheap `Copy` value
//! whose equality and hashing match value equality of the underlying strings.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for qualified name parts.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// An XML qualified name: a namespace URI paired with a local name.
///
/// Qualified names are opaque identity values in the schema model; this crate
/// performs no namespace resolution. Two `QName`s are equal exactly when both
/// their namespace URIs and their local parts are equal as strings. The empty
/// namespace URI denotes an unqualified name.
///
/// # Examples
///
/// ```
/// use xsd_probe_core::qname::QName;
///
/// let server = QName::new("urn:jboss:domain:1.0", "server");
/// let bare = QName::unqualified("server");
///
/// assert_ne!(server, bare);
/// assert_eq!(server.local_part(), bare.local_part());
/// assert_eq!(server.to_string(), "{urn:jboss:domain:1.0}server");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QName {
    namespace: DefaultSymbol,
    local: DefaultSymbol,
}

impl QName {
    /// Creates a qualified name from a namespace URI and a local part.
    ///
    /// An empty `namespace_uri` is equivalent to [`QName::unqualified`].
    pub fn new(namespace_uri: &str, local_part: &str) -> Self {
        let mut interner = interner().lock().expect("Failed to acquire interner lock");
        let namespace = interner.get_or_intern(namespace_uri);
        let local = interner.get_or_intern(local_part);
        Self { namespace, local }
    }

    /// Creates a qualified name with no namespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use xsd_probe_core::qname::QName;
    ///
    /// let name = QName::unqualified("datasource");
    /// assert_eq!(name.namespace_uri(), None);
    /// assert_eq!(name.local_part(), "datasource");
    /// ```
    pub fn unqualified(local_part: &str) -> Self {
        Self::new("", local_part)
    }

    /// Returns the namespace URI, or `None` for an unqualified name.
    pub fn namespace_uri(&self) -> Option<String> {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let uri = interner
            .resolve(self.namespace)
            .expect("Namespace symbol should exist in interner");
        if uri.is_empty() {
            None
        } else {
            Some(uri.to_string())
        }
    }

    /// Returns the local part of the name.
    pub fn local_part(&self) -> String {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        interner
            .resolve(self.local)
            .expect("Local symbol should exist in interner")
            .to_string()
    }
}

impl fmt::Display for QName {
    /// Formats as `{namespace}local` when qualified, `local` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let uri = interner
            .resolve(self.namespace)
            .expect("Namespace symbol should exist in interner");
        let local = interner
            .resolve(self.local)
            .expect("Local symbol should exist in interner");
        if uri.is_empty() {
            write!(f, "{}", local)
        } else {
            write!(f, "{{{}}}{}", uri, local)
        }
    }
}

impl From<&str> for QName {
    /// Creates an unqualified `QName` from a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use xsd_probe_core::qname::QName;
    ///
    /// let name: QName = "subsystem".into();
    /// assert_eq!(name, QName::unqualified("subsystem"));
    /// ```
    fn from(local_part: &str) -> Self {
        Self::unqualified(local_part)
    }
}

impl PartialEq<str> for QName {
    /// Allows direct comparison with the `{namespace}local` rendering:
    /// `qname == "{urn:example}foo"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use xsd_probe_core::qname::QName;
    ///
    /// let name = QName::new("urn:example", "foo");
    /// assert!(name == "{urn:example}foo");
    /// ```
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for QName {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
