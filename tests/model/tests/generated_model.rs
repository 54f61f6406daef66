use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use attrgen_model::{
    Attribute, ClusterAttributes, EdgeAttributes, GraphAttributes, SubgraphAttributes,
    VertexAttributes,
};

fn pairs<I: IntoIterator<Item = Attribute>>(attributes: I) -> Vec<(String, String)> {
    attributes.into_iter().map(Into::into).collect()
}

fn hash_of(attribute: &Attribute) -> u64 {
    let mut hasher = DefaultHasher::new();
    attribute.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_equality_is_by_variant_only() {
    let red = Attribute::Color("red".into());
    let blue = Attribute::Color("blue".into());
    let label = Attribute::Label("red".into());

    assert_eq!(red, blue);
    assert_eq!(hash_of(&red), hash_of(&blue));
    assert_ne!(red, label);

    let set: HashSet<Attribute> = [red, blue, label].into_iter().collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_projection_uses_original_key() {
    let pair: (String, String) = Attribute::Background("xdot".into()).into();
    assert_eq!(pair, ("_background".to_string(), "xdot".to_string()));

    let pair: (String, String) = Attribute::Edgeurl("https://example.org".into()).into();
    assert_eq!(pair, ("edgeURL".to_string(), "https://example.org".to_string()));

    let pair: (String, String) = Attribute::HeadLp("1,2".into()).into();
    assert_eq!(pair.0, "head_lp");
}

#[test]
fn test_set_replaces_by_identity() {
    let mut edge = EdgeAttributes::default();

    assert!(edge.set_color("red"));
    assert!(!edge.set_color("blue"));

    assert_eq!(edge.len(), 1);
    assert_eq!(pairs(edge), vec![("color".to_string(), "blue".to_string())]);
}

#[test]
fn test_insert_raw_parts_quotes_values() {
    let mut vertex = VertexAttributes::default();

    assert!(vertex.insert_raw_parts("label", "deep sky blue"));
    assert!(!vertex.insert_raw_parts("label", "\"already quoted\""));
    assert!(vertex.insert_raw_parts("shape", "box"));

    assert_eq!(
        pairs(vertex),
        vec![
            ("label".to_string(), "\"already quoted\"".to_string()),
            ("shape".to_string(), "box".to_string()),
        ]
    );
}

#[test]
fn test_typed_setters_quote_values() {
    let mut graph = GraphAttributes::default();
    graph.set_fontname("Helvetica Neue");
    assert_eq!(pairs(graph), vec![("fontname".to_string(), "\"Helvetica Neue\"".to_string())]);
}

#[test]
fn test_unset_roundtrip() {
    let mut cluster = ClusterAttributes::default();
    cluster.set_k("0.3");

    assert!(cluster.unset_k());
    assert!(cluster.is_empty());
    assert_eq!(cluster.len(), 0);
    assert!(!cluster.unset_k());
}

#[test]
fn test_unset_keeps_remaining_order() {
    let mut edge = EdgeAttributes::default();
    edge.set_arrowhead("normal");
    edge.set_lhead("cluster_0");
    edge.set_xlabel("x");

    assert!(edge.unset_lhead());

    let keys: Vec<String> = pairs(edge).into_iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["arrowhead", "xlabel"]);
}

#[test]
fn test_iteration_follows_insertion_order() {
    let mut graph = GraphAttributes::default();
    graph.set_rankdir("LR");
    graph.insert_raw_parts("URL", "https://graphviz.org");
    graph.set_background("xdot");
    // Replacing keeps the original position
    graph.set_rankdir("TB");

    let borrowed: Vec<(String, String)> = graph.iter().cloned().map(Into::into).collect();
    let again: Vec<(String, String)> = graph.iter().cloned().map(Into::into).collect();
    assert_eq!(borrowed, again);

    assert_eq!(
        pairs(graph),
        vec![
            ("rankdir".to_string(), "TB".to_string()),
            ("URL".to_string(), "https://graphviz.org".to_string()),
            ("_background".to_string(), "xdot".to_string()),
        ]
    );
}

#[test]
fn test_subgraph_attributes() {
    let mut subgraph = SubgraphAttributes::default();
    assert!(subgraph.is_empty());
    assert!(subgraph.set_rank("same"));
    assert!(subgraph.set_cluster("true"));
    assert_eq!(subgraph.len(), 2);
}

#[test]
fn test_into_iter_yields_each_entry_once() {
    let mut vertex = VertexAttributes::default();
    vertex.set_shape("box");
    vertex.set_area("2.0");

    let mut iter = vertex.into_iter();
    assert!(iter.next().is_some());
    assert!(iter.next().is_some());
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
}

#[test]
#[should_panic(expected = "Invalid attribute key `shape` for EdgeAttributes")]
fn test_insert_raw_parts_rejects_foreign_key() {
    let mut edge = EdgeAttributes::default();
    edge.insert_raw_parts("shape", "box");
}

#[test]
#[should_panic(expected = "Invalid attribute key `Color` for VertexAttributes")]
fn test_insert_raw_parts_is_case_sensitive() {
    let mut vertex = VertexAttributes::default();
    vertex.insert_raw_parts("Color", "red");
}
