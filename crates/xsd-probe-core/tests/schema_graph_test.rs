//! Integration tests for the schema element graph API
//!
//! These tests drive the crate the way its two collaborators do: a loader
//! pass that constructs elements, merges duplicate declarations through
//! delegation, and flattens type attributes guarded by applied-type markers,
//! followed by read-only queries in the diagnostic engine's style.

use xsd_probe_core::{QName, SchemaElement, SchemaGraph};

const NS: &str = "urn:jboss:domain:1.0";
const XS: &str = "http://www.w3.org/2001/XMLSchema";

#[test]
fn test_typed_element_has_no_attributes_and_is_not_a_reference() {
    let mut graph = SchemaGraph::new();
    let a = graph.insert(SchemaElement::with_type(
        QName::new(NS, "foo"),
        Some(QName::new(XS, "string")),
    ));

    assert_eq!(graph.element(a).element_type(), Some(QName::new(XS, "string")));
    assert!(graph.element(a).attributes().is_empty());
    assert!(!graph.is_reference(a));
}

#[test]
fn test_reference_element_equals_typed_element_of_same_shape() {
    let mut graph = SchemaGraph::new();
    let a = graph.insert(SchemaElement::with_type(
        QName::new(NS, "foo"),
        Some(QName::new(XS, "string")),
    ));
    let b = graph.insert(SchemaElement::reference(QName::new(NS, "foo"), true));

    assert_eq!(graph.element(b).element_type(), None);
    assert!(graph.is_reference(b));
    // Same name, both attribute sets empty: equal despite differing
    // type/reference.
    assert!(graph.elements_equal(a, b));
}

#[test]
fn test_delegated_element_reads_delegate_data() {
    let mut graph = SchemaGraph::new();
    let a = graph.insert(SchemaElement::with_type(
        QName::new(NS, "foo"),
        Some(QName::new(XS, "string")),
    ));
    let c = graph.insert(SchemaElement::with_type(
        QName::new(NS, "bar"),
        Some(QName::new(XS, "int")),
    ));

    graph.delegate(a, c).unwrap();

    assert_eq!(graph.element(a).name(), "bar");
    assert_eq!(graph.element(a).element_type(), Some(QName::new(XS, "int")));
    assert!(!graph.is_reference(a));
}

#[test]
fn test_applied_types_are_per_element() {
    let mut graph = SchemaGraph::new();
    let d = graph.insert(SchemaElement::new(QName::new(NS, "d")));
    let t1 = QName::new(NS, "t1");

    graph.add_applied_type(d, t1);
    graph.add_applied_type(d, t1);

    let e = graph.insert(SchemaElement::new(QName::new(NS, "e")));
    assert!(graph.is_type_applied(d, t1));
    assert!(!graph.is_type_applied(e, t1));
}

#[test]
fn test_loader_flattening_pass() {
    // A derived element picks up its own attributes plus its base type's,
    // with the applied-type set making the merge idempotent across
    // traversal paths.
    let mut graph = SchemaGraph::new();
    let server_type = QName::new(NS, "serverType");
    let base_type = QName::new(NS, "baseServerType");
    let server = graph.insert(SchemaElement::with_type(
        QName::new(NS, "server"),
        Some(server_type),
    ));
    graph.set_base(server, base_type);

    for ty in [server_type, base_type, server_type] {
        if !graph.is_type_applied(server, ty) {
            graph.add_applied_type(server, ty);
            let attrs: &[&str] = if ty == server_type {
                &["name", "zone"]
            } else {
                &["id"]
            };
            graph.add_attributes(server, attrs.iter().copied());
        }
    }

    let attrs: Vec<_> = graph.element(server).attributes().iter().cloned().collect();
    assert_eq!(attrs, ["id", "name", "zone"]);
    assert_eq!(graph.element(server).base(), Some(base_type));
}

#[test]
fn test_merging_duplicate_declarations() {
    // Two discovery paths produce two slots for one logical element; the
    // loader merges them and every holder of the stale id observes the
    // canonical data.
    let mut graph = SchemaGraph::new();
    let forward = graph.insert(SchemaElement::reference(QName::new(NS, "datasource"), true));
    let concrete = graph.insert(SchemaElement::with_type(
        QName::new(NS, "datasource"),
        Some(QName::new(NS, "datasourceType")),
    ));
    graph.add_attribute(concrete, "jndi-name");

    graph.delegate(forward, concrete).unwrap();
    graph.add_attribute(forward, "pool-name");

    for id in [forward, concrete] {
        let element = graph.element(id);
        assert_eq!(element.name(), "datasource");
        assert!(element.attributes().contains("jndi-name"));
        assert!(element.attributes().contains("pool-name"));
    }
    assert!(graph.elements_equal(forward, concrete));
}

#[test]
fn test_display_is_log_friendly() {
    let mut graph = SchemaGraph::new();
    let id = graph.insert(SchemaElement::new(QName::new(NS, "server")));
    graph.add_attributes(id, ["name", "zone"]);

    assert_eq!(
        graph.element(id).to_string(),
        "<SchemaElement name=server, attributes=[name, zone]>"
    );
}
