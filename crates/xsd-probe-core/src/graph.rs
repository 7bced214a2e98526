//! The schema element graph: an arena of elements with delegation between
//! them.
//!
//! The schema loader discovers the same logical element through multiple
//! paths: duplicate top-level declarations, forward references resolved after
//! the fact, substitution-group members. Rather than rewriting every existing
//! handle when two discoveries turn out to name one element, the graph keeps
//! a redirect per slot. [`SchemaGraph::delegate`] points the non-canonical
//! slot at the canonical one, and every holder of the old [`ElementId`]
//! transparently observes the canonical element's data from then on.
//!
//! Redirects resolve transitively (a chain `a -> b -> c` reads `c`'s data
//! when querying `a`) and are kept acyclic: installing a redirect whose
//! target already resolves to the same root is rejected with
//! [`DelegateError::WouldCycle`]. Each slot stores the delegate it was given,
//! not that delegate's root at install time, so re-delegating an element is
//! observed by everything that delegated into it. Accessors never mutate the
//! redirect table, which keeps a fully built graph safe to share across
//! threads during the diagnostic phase.

use log::{debug, trace};

use crate::{element::SchemaElement, error::DelegateError, qname::QName};

/// A stable handle to an element slot in a [`SchemaGraph`].
///
/// Holders keep `ElementId`s rather than references, so installing a
/// delegate on a slot is visible to every holder without invalidation.
/// An id is only meaningful for the graph that issued it; using it with
/// another graph panics or addresses an unrelated slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(u32);

impl ElementId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug)]
struct Slot {
    element: SchemaElement,
    redirect: Option<ElementId>,
}

/// The registry of schema elements, owning their storage and the delegation
/// links between them.
///
/// # Examples
///
/// ```
/// use xsd_probe_core::{QName, SchemaElement, SchemaGraph};
///
/// let mut graph = SchemaGraph::new();
/// let duplicate = graph.insert(SchemaElement::new(QName::unqualified("server")));
/// let canonical = graph.insert(SchemaElement::new(QName::unqualified("server")));
/// graph.add_attribute(canonical, "name");
///
/// graph.delegate(duplicate, canonical).unwrap();
/// assert!(graph.element(duplicate).attributes().contains("name"));
/// ```
#[derive(Debug, Default)]
pub struct SchemaGraph {
    slots: Vec<Slot>,
}

impl SchemaGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element to the graph, returning its handle.
    pub fn insert(&mut self, element: SchemaElement) -> ElementId {
        let id = ElementId(self.slots.len() as u32);
        trace!(element:? = id, qname:% = element.qname(); "Inserting schema element");
        self.slots.push(Slot {
            element,
            redirect: None,
        });
        id
    }

    /// Returns the number of element slots, delegated slots included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns whether the graph holds no elements.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns an iterator over every element handle in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = ElementId> + use<> {
        (0..self.slots.len() as u32).map(ElementId)
    }

    /// Follows redirects from `id` to the canonical slot.
    ///
    /// The redirect chain is acyclic by construction, so this always
    /// terminates. Read-only: repeated calls on a shared graph are safe.
    pub fn resolve(&self, id: ElementId) -> ElementId {
        let mut current = id;
        while let Some(next) = self.slots[current.index()].redirect {
            current = next;
        }
        current
    }

    /// Installs `target` as `element`'s delegate and clears `element`'s
    /// reference flag, returning `element` for chaining.
    ///
    /// From this point on all reads and writes through `element` operate on
    /// `target` (or, transitively, on whatever `target` itself delegates to
    /// at read time, even when that link changes later). Re-delegating an
    /// already-delegated element replaces the previous link. Installing a
    /// delegate that resolves back to `element`'s own canonical slot,
    /// including `delegate(e, e)`, is rejected and leaves the graph
    /// unchanged.
    pub fn delegate(
        &mut self,
        element: ElementId,
        target: ElementId,
    ) -> Result<ElementId, DelegateError> {
        // A target whose chain passes through `element` continues into
        // `element`'s own chain, so comparing roots catches every would-be
        // cycle, re-delegation included.
        let element_root = self.resolve(element);
        let target_root = self.resolve(target);
        if element_root == target_root {
            debug!(
                element:? = element,
                target:? = target;
                "Rejecting delegate that would form a cycle",
            );
            return Err(DelegateError::WouldCycle {
                element: self.slots[element.index()].element.qname(),
                target: self.slots[target.index()].element.qname(),
            });
        }

        debug!(
            element:? = element,
            target:? = target,
            canonical:? = target_root;
            "Installing delegate",
        );
        let slot = &mut self.slots[element.index()];
        slot.redirect = Some(target);
        slot.element.clear_reference();
        Ok(element)
    }

    /// Returns the element `id` resolves to.
    ///
    /// All name, type, base, and attribute reads go through the returned
    /// element, as does shape equality and hashing.
    pub fn element(&self, id: ElementId) -> &SchemaElement {
        let root = self.resolve(id);
        &self.slots[root.index()].element
    }

    /// Returns the element `id` resolves to, mutably.
    ///
    /// Writes through the returned element land on the delegate when one is
    /// installed.
    pub fn element_mut(&mut self, id: ElementId) -> &mut SchemaElement {
        let root = self.resolve(id);
        &mut self.slots[root.index()].element
    }

    /// Adds one attribute local name to the element `id` resolves to.
    pub fn add_attribute(&mut self, id: ElementId, attribute: impl Into<String>) {
        self.element_mut(id).add_attribute(attribute);
    }

    /// Adds a collection of attribute local names to the element `id`
    /// resolves to.
    pub fn add_attributes<I, S>(&mut self, id: ElementId, attributes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.element_mut(id).add_attributes(attributes);
    }

    /// Sets the base type on the element `id` resolves to, returning `id`
    /// for chaining.
    pub fn set_base(&mut self, id: ElementId, base: QName) -> ElementId {
        self.element_mut(id).set_base(base);
        id
    }

    /// Returns the reference flag of `id`'s own slot.
    ///
    /// Deliberately not forwarded through delegation: a delegating element
    /// is not itself a reference, whatever its flag was before the delegate
    /// was installed, and [`delegate`](Self::delegate) forces the local flag
    /// to `false` on installation.
    pub fn is_reference(&self, id: ElementId) -> bool {
        self.slots[id.index()].element.is_reference()
    }

    /// Records on `id`'s own slot that `element_type`'s attributes have been
    /// merged.
    ///
    /// Applied-type markers are per-slot and independent of delegation,
    /// unlike the attribute set they guard.
    pub fn add_applied_type(&mut self, id: ElementId, element_type: QName) {
        self.slots[id.index()].element.add_applied_type(element_type);
    }

    /// Returns whether `id`'s own slot has `element_type` marked as applied.
    pub fn is_type_applied(&self, id: ElementId, element_type: QName) -> bool {
        self.slots[id.index()].element.is_type_applied(element_type)
    }

    /// Returns whether `a` and `b` resolve to elements of equal shape.
    ///
    /// Both sides resolve through their redirect chains first, so a
    /// delegating element compares exactly as its delegate does.
    pub fn elements_equal(&self, a: ElementId, b: ElementId) -> bool {
        self.element(a) == self.element(b)
    }
}
