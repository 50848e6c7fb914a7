//! Tree plugin
//!
//! Complete binary trees stored level by level, with `inorder`, `preorder`,
//! and `postorder` traversals.

mod adapter;
mod traversal;

pub use adapter::{to_tree, TreeAdapter};
pub use traversal::{traverse_tree, TraversalOrder, TreeTraversal};

use crate::plugins::AlgorithmRegistry;

/// Register the tree adapter and traversals
pub fn register(registry: &mut AlgorithmRegistry) {
    registry.register_adapter(Box::new(TreeAdapter::new()));
    for order in [
        TraversalOrder::Inorder,
        TraversalOrder::Preorder,
        TraversalOrder::Postorder,
    ] {
        registry.register_algorithm(Box::new(TreeTraversal::new(order)));
    }
}
