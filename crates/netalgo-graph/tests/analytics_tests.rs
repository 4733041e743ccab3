//! Integration tests for the analytics layer.

use netalgo_core::{Node, NodeId};
use netalgo_graph::analytics::{
    ConnectedComponents, ConnectedComponentsConfig, DegreeCentrality, DegreeCentralityConfig,
};
use netalgo_graph::traversal::Direction;
use netalgo_graph::{Graph, GraphError};

/// Diamond fixture: a -> b, a -> c, b -> d, c -> d.
fn diamond() -> (Graph<&'static str>, NodeId, NodeId, NodeId, NodeId) {
    let mut graph = Graph::new();
    let (a, _) = graph.add_node(Node::new("a"));
    let (b, _) = graph.add_node(Node::new("b"));
    let (c, _) = graph.add_node(Node::new("c"));
    let (d, _) = graph.add_node(Node::new("d"));

    graph.add_edge(&"a", &"b").expect("endpoints exist");
    graph.add_edge(&"a", &"c").expect("endpoints exist");
    graph.add_edge(&"b", &"d").expect("endpoints exist");
    graph.add_edge(&"c", &"d").expect("endpoints exist");

    (graph, a, b, c, d)
}

#[test]
fn out_degree_centrality() {
    let (graph, a, b, _, d) = diamond();

    let config = DegreeCentralityConfig::new().with_direction(Direction::Outgoing);
    let result = DegreeCentrality::compute(&graph, &config).expect("graph is small");

    assert_eq!(result.get(a), Some(2.0));
    assert_eq!(result.get(b), Some(1.0));
    assert_eq!(result.get(d), Some(0.0));
}

#[test]
fn in_degree_centrality() {
    let (graph, a, _, _, d) = diamond();

    let config = DegreeCentralityConfig::new().with_direction(Direction::Incoming);
    let result = DegreeCentrality::compute(&graph, &config).expect("graph is small");

    assert_eq!(result.get(a), Some(0.0));
    assert_eq!(result.get(d), Some(2.0));
}

#[test]
fn total_degree_is_normalizable() {
    let (graph, a, ..) = diamond();

    let config = DegreeCentralityConfig::new().with_normalize(true);
    let result = DegreeCentrality::compute(&graph, &config).expect("graph is small");

    // Every diamond node touches two edges; normalized by n - 1 = 3
    assert_eq!(result.get(a), Some(2.0 / 3.0));
}

#[test]
fn top_n_ranks_by_degree() {
    let (graph, _, _, _, d) = diamond();

    let config = DegreeCentralityConfig::new().with_direction(Direction::Incoming);
    let result = DegreeCentrality::compute(&graph, &config).expect("graph is small");

    let top = result.top_n(1);
    assert_eq!(top, vec![(d, 2.0)]);
}

#[test]
fn degree_rejects_oversized_graph() {
    let (graph, ..) = diamond();

    let config = DegreeCentralityConfig::new().with_max_graph_nodes(Some(2));
    let result = DegreeCentrality::compute(&graph, &config);

    assert!(matches!(result, Err(GraphError::GraphTooLarge { nodes: 4, limit: 2 })));
}

#[test]
fn weakly_connected_components() {
    let mut graph = Graph::new();
    let (a, _) = graph.add_node(Node::new("a"));
    let (b, _) = graph.add_node(Node::new("b"));
    let (c, _) = graph.add_node(Node::new("c"));
    graph.add_edge(&"a", &"b").expect("endpoints exist");

    let result =
        ConnectedComponents::weakly_connected(&graph, &ConnectedComponentsConfig::default())
            .expect("graph is small");

    assert_eq!(result.num_components, 2);
    assert!(result.same_component(a, b));
    assert!(!result.same_component(a, c));
}

#[test]
fn weak_components_ignore_direction() {
    let mut graph = Graph::new();
    let (a, _) = graph.add_node(Node::new("a"));
    let (b, _) = graph.add_node(Node::new("b"));
    let (c, _) = graph.add_node(Node::new("c"));
    // b has only incoming edges; still joins the component
    graph.add_edge(&"a", &"b").expect("endpoints exist");
    graph.add_edge(&"c", &"b").expect("endpoints exist");

    let result =
        ConnectedComponents::weakly_connected(&graph, &ConnectedComponentsConfig::default())
            .expect("graph is small");

    assert_eq!(result.num_components, 1);
    assert!(result.same_component(a, c));
}

#[test]
fn strongly_connected_cycle_collapses() {
    let mut graph = Graph::new();
    let (a, _) = graph.add_node(Node::new("a"));
    let (b, _) = graph.add_node(Node::new("b"));
    let (c, _) = graph.add_node(Node::new("c"));
    let (d, _) = graph.add_node(Node::new("d"));

    // a -> b -> c -> a forms a cycle; d hangs off it
    graph.add_edge(&"a", &"b").expect("endpoints exist");
    graph.add_edge(&"b", &"c").expect("endpoints exist");
    graph.add_edge(&"c", &"a").expect("endpoints exist");
    graph.add_edge(&"c", &"d").expect("endpoints exist");

    let result =
        ConnectedComponents::strongly_connected(&graph, &ConnectedComponentsConfig::default())
            .expect("graph is small");

    assert_eq!(result.num_components, 2);
    assert!(result.same_component(a, b));
    assert!(result.same_component(b, c));
    assert!(!result.same_component(a, d));
}

#[test]
fn strongly_connected_dag_keeps_nodes_apart() {
    let (graph, a, b, c, d) = diamond();

    let result =
        ConnectedComponents::strongly_connected(&graph, &ConnectedComponentsConfig::default())
            .expect("graph is small");

    assert_eq!(result.num_components, 4);
    for (x, y) in [(a, b), (b, c), (c, d)] {
        assert!(!result.same_component(x, y));
    }
}

#[test]
fn component_sizes_and_ranking() {
    let mut graph = Graph::new();
    graph.add_node(Node::new("a"));
    graph.add_node(Node::new("b"));
    graph.add_node(Node::new("c"));
    graph.add_node(Node::new("lonely"));
    graph.add_edge(&"a", &"b").expect("endpoints exist");
    graph.add_edge(&"b", &"c").expect("endpoints exist");

    let result =
        ConnectedComponents::weakly_connected(&graph, &ConnectedComponentsConfig::default())
            .expect("graph is small");

    assert_eq!(result.num_components, 2);
    let (largest, size) = result.largest_component().expect("components exist");
    assert_eq!(size, 3);
    assert_eq!(result.component_size(largest), 3);
    assert_eq!(result.nodes_in_component(largest).len(), 3);
}

#[test]
fn components_of_empty_graph() {
    let graph: Graph<&str> = Graph::new();

    let weak = ConnectedComponents::weakly_connected(&graph, &ConnectedComponentsConfig::default())
        .expect("empty graph is fine");
    let strong =
        ConnectedComponents::strongly_connected(&graph, &ConnectedComponentsConfig::default())
            .expect("empty graph is fine");

    assert_eq!(weak.num_components, 0);
    assert_eq!(strong.num_components, 0);
}
