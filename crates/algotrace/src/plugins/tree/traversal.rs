//! Depth-first tree traversal traces

use std::fmt;

use crate::core::{
    format_value, Algorithm, Result, Step, Structure, StructureKind, Trace, TraceError,
    TraceParams, TraceRecorder,
};
use tracing::{debug, span, Level};

/// When a node is visited relative to its subtrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Left subtree, node, right subtree
    Inorder,
    /// Node, left subtree, right subtree
    Preorder,
    /// Left subtree, right subtree, node
    Postorder,
}

impl TraversalOrder {
    pub fn name(&self) -> &'static str {
        match self {
            TraversalOrder::Inorder => "inorder",
            TraversalOrder::Preorder => "preorder",
            TraversalOrder::Postorder => "postorder",
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tree traversal algorithm for one visit order
pub struct TreeTraversal {
    order: TraversalOrder,
}

impl TreeTraversal {
    pub fn new(order: TraversalOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> TraversalOrder {
        self.order
    }
}

impl Algorithm for TreeTraversal {
    fn name(&self) -> &'static str {
        self.order.name()
    }

    fn structure(&self) -> StructureKind {
        StructureKind::Tree
    }

    fn summary(&self) -> &'static str {
        match self.order {
            TraversalOrder::Inorder => "Visit left subtree, node, then right subtree",
            TraversalOrder::Preorder => "Visit node, then left and right subtrees",
            TraversalOrder::Postorder => "Visit left and right subtrees, then node",
        }
    }

    fn trace(&self, structure: &Structure, _params: &TraceParams) -> Result<Trace> {
        match structure {
            Structure::Tree(slots) => Ok(traverse_tree(slots, self.order)),
            other => Err(TraceError::structure_mismatch(
                self.name(),
                StructureKind::Tree,
                other.kind(),
            )),
        }
    }
}

/// Trace a traversal of the complete binary tree stored in `slots`
///
/// Exactly one step per present node. Recursion depth is bounded by the
/// tree height, which is logarithmic in the slot count.
pub fn traverse_tree(slots: &[Option<f64>], order: TraversalOrder) -> Trace {
    let traversal_span = span!(Level::DEBUG, "traverse_tree", order = order.name(), slots = slots.len());
    let _enter = traversal_span.enter();

    let mut walk = Walk {
        slots,
        order,
        visited: Vec::new(),
        recorder: TraceRecorder::new(StructureKind::Tree, order.name(), slots.len()),
    };
    walk.descend(0);

    debug!(visits = walk.visited.len(), "Tree traversal trace built");
    walk.recorder.finish()
}

struct Walk<'a> {
    slots: &'a [Option<f64>],
    order: TraversalOrder,
    visited: Vec<usize>,
    recorder: TraceRecorder,
}

impl Walk<'_> {
    fn descend(&mut self, index: usize) {
        let Some(Some(value)) = self.slots.get(index).copied() else {
            return;
        };
        let (left, right) = (2 * index + 1, 2 * index + 2);

        match self.order {
            TraversalOrder::Preorder => {
                self.visit(index, value);
                self.descend(left);
                self.descend(right);
            }
            TraversalOrder::Inorder => {
                self.descend(left);
                self.visit(index, value);
                self.descend(right);
            }
            TraversalOrder::Postorder => {
                self.descend(left);
                self.descend(right);
                self.visit(index, value);
            }
        }
    }

    fn visit(&mut self, index: usize, value: f64) {
        self.recorder.record(
            Step::new(format!("Visiting node {}", format_value(value)))
                .active([index])
                .highlighted(self.visited.iter().copied()),
        );
        self.visited.push(index);
    }
}
