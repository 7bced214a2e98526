//! Declared schema elements and their attribute sets.
//!
//! A [`SchemaElement`] is one element declaration discovered in a schema
//! document: its qualified name, its declared or base type, and the attribute
//! local names declared directly on it. Elements are owned by a
//! [`SchemaGraph`](crate::graph::SchemaGraph), which also implements the
//! delegation (aliasing) protocol between them; everything in this module is
//! delegation-unaware and operates on the element's own storage.

use std::{
    collections::{BTreeSet, HashSet},
    fmt,
    hash::{Hash, Hasher},
};

use crate::qname::QName;

/// A single declared element within a schema.
///
/// Identity is *shape-based*: two elements compare equal when their qualified
/// names and attribute sets match, regardless of declared type, base type, or
/// the reference flag. The diagnostic engine de-duplicates candidate elements
/// by shape, not by full declaration.
///
/// Attributes are kept in a [`BTreeSet`], so [`attributes`](Self::attributes)
/// always iterates deduplicated names in lexicographic order.
#[derive(Debug, Clone)]
pub struct SchemaElement {
    name: QName,
    element_type: Option<QName>,
    reference: bool,
    base: Option<QName>,
    attributes: BTreeSet<String>,
    applied_types: HashSet<QName>,
}

impl SchemaElement {
    /// Creates an element declared with an explicit type.
    ///
    /// # Examples
    ///
    /// ```
    /// use xsd_probe_core::{QName, SchemaElement};
    ///
    /// let element = SchemaElement::with_type(
    ///     QName::unqualified("timeout"),
    ///     Some(QName::new("http://www.w3.org/2001/XMLSchema", "int")),
    /// );
    /// assert!(!element.is_reference());
    /// ```
    pub fn with_type(name: QName, element_type: Option<QName>) -> Self {
        Self {
            name,
            element_type,
            reference: false,
            base: None,
            attributes: BTreeSet::new(),
            applied_types: HashSet::new(),
        }
    }

    /// Creates an element that references a globally declared element rather
    /// than carrying its own type.
    pub fn reference(name: QName, reference: bool) -> Self {
        Self {
            name,
            element_type: None,
            reference,
            base: None,
            attributes: BTreeSet::new(),
            applied_types: HashSet::new(),
        }
    }

    /// Creates an element with neither a declared type nor a reference.
    pub fn new(name: QName) -> Self {
        Self::with_type(name, None)
    }

    /// Returns the local part of the element's qualified name.
    pub fn name(&self) -> String {
        self.name.local_part()
    }

    /// Returns the element's qualified name.
    pub fn qname(&self) -> QName {
        self.name
    }

    /// Returns the declared type, if any.
    pub fn element_type(&self) -> Option<QName> {
        self.element_type
    }

    /// Returns the base type, if one has been set.
    pub fn base(&self) -> Option<QName> {
        self.base
    }

    /// Sets the base type, returning `self` for chaining.
    pub fn set_base(&mut self, base: QName) -> &mut Self {
        self.base = Some(base);
        self
    }

    /// Returns whether this element stands in for a globally declared
    /// element.
    ///
    /// This reads the element's own flag. Unlike every other accessor, the
    /// owning [`SchemaGraph`](crate::graph::SchemaGraph) never forwards it
    /// through delegation: a delegating element is not itself a reference,
    /// whatever it was before the delegate was installed.
    pub fn is_reference(&self) -> bool {
        self.reference
    }

    pub(crate) fn clear_reference(&mut self) {
        self.reference = false;
    }

    /// Adds one attribute local name to the element's attribute set.
    ///
    /// Re-adding an existing name is a no-op.
    pub fn add_attribute(&mut self, attribute: impl Into<String>) {
        self.attributes.insert(attribute.into());
    }

    /// Adds a collection of attribute local names to the element's attribute
    /// set.
    pub fn add_attributes<I, S>(&mut self, attributes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes
            .extend(attributes.into_iter().map(Into::into));
    }

    /// Returns the attribute local names declared on this element, in
    /// lexicographic order.
    pub fn attributes(&self) -> &BTreeSet<String> {
        &self.attributes
    }

    /// Records that `element_type`'s attributes have been merged into this
    /// element.
    ///
    /// Membership is monotonic; recording the same type twice is a no-op.
    pub fn add_applied_type(&mut self, element_type: QName) {
        self.applied_types.insert(element_type);
    }

    /// Returns whether `element_type`'s attributes have already been merged
    /// into this element.
    ///
    /// Used by the loader when flattening type hierarchies, so each type
    /// contributes its attributes to an element at most once even when it is
    /// reachable through several extension or substitution paths.
    pub fn is_type_applied(&self, element_type: QName) -> bool {
        self.applied_types.contains(&element_type)
    }
}

impl PartialEq for SchemaElement {
    /// Shape equality: qualified name and attribute set only.
    ///
    /// `element_type`, `base`, `reference`, and the applied-type markers are
    /// deliberately excluded.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.attributes == other.attributes
    }
}

impl Eq for SchemaElement {}

impl Hash for SchemaElement {
    /// Hashes the qualified name and attribute set, consistent with
    /// [`PartialEq`].
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.attributes.hash(state);
    }
}

impl fmt::Display for SchemaElement {
    /// Fixed debug rendering for logs:
    /// `<SchemaElement name=server, attributes=[a, b]>`.
    ///
    /// Not a parseable or versioned format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<SchemaElement name={}, attributes=[", self.name())?;
        for (i, attribute) in self.attributes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", attribute)?;
        }
        write!(f, "]>")
    }
}
