//! Edge case tests for adapters, traces, and playback
//!
//! Tests for boundary conditions and unusual inputs.

// =============================================================================
// Empty Input Tests
// =============================================================================

mod empty_inputs {
    use algotrace::playback::{PlaybackController, PlaybackState};
    use algotrace::{trace, StructureKind, TraceParams};
    use std::time::Instant;

    #[test]
    fn test_traversals_and_sorts_yield_empty_traces() {
        let cases = [
            (StructureKind::Array, "bubble-sort", ""),
            (StructureKind::Array, "quick-sort", "   "),
            (StructureKind::LinkedList, "traverse", ""),
            (StructureKind::LinkedList, "reverse", ""),
            (StructureKind::Tree, "inorder", ""),
            (StructureKind::Tree, "preorder", "null"),
            (StructureKind::Graph, "bfs", "[]"),
            (StructureKind::Graph, "dfs", r#"{"nodes": [], "edges": []}"#),
        ];
        for (kind, algorithm, raw) in cases {
            let trace = trace(kind, algorithm, raw, &TraceParams::new()).unwrap();
            assert!(trace.is_empty(), "{} produced steps", algorithm);
        }
    }

    #[test]
    fn test_binary_search_empty_is_single_step() {
        let trace = trace(
            StructureKind::Array,
            "binary-search",
            "",
            &TraceParams::with_target(1.0),
        )
        .unwrap();
        assert_eq!(trace.len(), 1);
        assert!(trace.get(0).unwrap().active_nodes().is_empty());
    }

    #[test]
    fn test_controller_tolerates_empty_trace() {
        let mut controller = PlaybackController::default();
        controller.load(trace(StructureKind::Tree, "inorder", "", &TraceParams::new()).unwrap());
        let now = Instant::now();
        assert_eq!(controller.state(), PlaybackState::Idle);
        assert!(!controller.play(now));
        assert!(!controller.step_back(now));
        controller.reset();
        assert_eq!(controller.state(), PlaybackState::Idle);
        assert!(controller.current_step().is_none());
    }
}

// =============================================================================
// Unusual Values
// =============================================================================

mod unusual_values {
    use algotrace::{trace, StructureKind, TraceParams};

    #[test]
    fn test_duplicates_and_negatives_sort() {
        let trace = trace(
            StructureKind::Array,
            "quick-sort",
            "0, -1.5, 3, -1.5, 0",
            &TraceParams::new(),
        )
        .unwrap();
        assert_eq!(
            trace.last().unwrap().snapshot_values(),
            Some(vec![-1.5, -1.5, 0.0, 0.0, 3.0])
        );
    }

    #[test]
    fn test_fractional_values_in_descriptions() {
        let trace = trace(
            StructureKind::LinkedList,
            "traverse",
            "0.25; 1e3",
            &TraceParams::new(),
        )
        .unwrap();
        assert_eq!(
            trace.get(1).unwrap().description(),
            "Visiting node with value 1000"
        );
    }

    #[test]
    fn test_graph_self_loop_and_duplicate_edges() {
        let trace = trace(
            StructureKind::Graph,
            "bfs",
            r#"{"nodes": [1, 2], "edges": [[0, 0], [0, 1], [0, 1]]}"#,
            &TraceParams::new(),
        )
        .unwrap();
        let visits = trace
            .iter()
            .filter(|s| s.description().starts_with("Visiting"))
            .count();
        assert_eq!(visits, 2);
    }

    #[test]
    fn test_single_element_inputs() {
        for (kind, algorithm) in [
            (StructureKind::Array, "bubble-sort"),
            (StructureKind::Array, "quick-sort"),
            (StructureKind::LinkedList, "traverse"),
            (StructureKind::Tree, "postorder"),
        ] {
            let trace = trace(kind, algorithm, "42", &TraceParams::new()).unwrap();
            assert_eq!(trace.len(), 1, "{}", algorithm);
        }
        let trace = trace(StructureKind::LinkedList, "reverse", "42", &TraceParams::new()).unwrap();
        assert!(trace.is_empty());
    }
}

// =============================================================================
// Large Inputs
// =============================================================================

mod large_inputs {
    use algotrace::core::GraphNode;
    use algotrace::plugins::graph::dfs;
    use algotrace::plugins::tree::{traverse_tree, TraversalOrder};

    #[test]
    fn test_deep_graph_chain() {
        let n = 2_000;
        let graph: Vec<GraphNode> = (0..n)
            .map(|i| {
                let next = if i + 1 < n { vec![i + 1] } else { vec![] };
                GraphNode::with_connections(i as f64, next)
            })
            .collect();
        assert_eq!(dfs(&graph).len(), 2 * n - 1);
    }

    #[test]
    fn test_large_tree() {
        let slots: Vec<Option<f64>> = (0..1023).map(|i| Some(i as f64)).collect();
        let trace = traverse_tree(&slots, TraversalOrder::Inorder);
        assert_eq!(trace.len(), 1023);
        assert_eq!(trace.get(0).unwrap().active_nodes(), &[511]);
    }
}
