use bst_view::layout::{self, LayoutConfig, Position};
use bst_view::tree::Tree;

use quickcheck_macros::quickcheck;

use crate::Op;

fn build(ops: &[Op]) -> Tree {
    let mut tree = Tree::new();
    for op in ops {
        match *op {
            Op::Insert(k) => tree.insert(k),
            Op::Delete(k) => tree.delete(k),
        };
    }
    tree
}

#[quickcheck]
fn one_position_per_node(ops: Vec<Op>) -> bool {
    let tree = build(&ops);
    let positions = tree.get_positions();

    positions.len() == tree.len() && positions.keys().copied().eq(tree.iter())
}

#[quickcheck]
fn root_at_origin(ops: Vec<Op>) -> bool {
    let tree = build(&ops);
    let positions = tree.get_positions();

    match tree.root() {
        Some(root) => positions[&root.value()] == Position::new(0.0, 0.0),
        None => positions.is_empty(),
    }
}

#[quickcheck]
fn children_one_level_below(ops: Vec<Op>) -> bool {
    let tree = build(&ops);
    let positions = layout::positions(&tree, &LayoutConfig::default());
    let edges = layout::edges(&tree, &positions);

    // Every node but the root has exactly one incoming edge.
    edges.len() == tree.len().saturating_sub(1)
        && edges.iter().all(|e| {
            e.to.y == e.from.y - 1.0
                && (if e.child < e.parent {
                    e.to.x <= e.from.x
                } else {
                    e.to.x >= e.from.x
                })
                && positions[&e.parent] == e.from
                && positions[&e.child] == e.to
        })
}
