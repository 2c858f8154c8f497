//! Plain-text views of a [`Snapshot`].

use crate::session::Snapshot;
use crate::tree::Key;

/// The sorted keys separated by single spaces.
///
/// # Examples
///
/// ```
/// use bst_view::render::sorted_line;
///
/// assert_eq!(sorted_line(&[1, 3, 4]), "1 3 4");
/// assert_eq!(sorted_line(&[]), "");
/// ```
pub fn sorted_line(keys: &[Key]) -> String {
    keys.iter()
        .map(Key::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One `key (x, y)` line per node, by ascending key.
pub fn positions_table(snapshot: &Snapshot) -> String {
    snapshot
        .positions
        .iter()
        .map(|(key, position)| format!("{key} {position}\n"))
        .collect()
}

/// One `parent -> child` line per edge.
pub fn edges_list(snapshot: &Snapshot) -> String {
    snapshot
        .edges
        .iter()
        .map(|edge| format!("{} -> {}\n", edge.parent, edge.child))
        .collect()
}

/// The full view printed after every change.
pub fn snapshot(snapshot: &Snapshot) -> String {
    if snapshot.sorted.is_empty() {
        return "sorted: (empty)\n".to_string();
    }

    format!(
        "sorted: {}\npositions:\n{}edges:\n{}",
        sorted_line(&snapshot.sorted),
        indent(&positions_table(snapshot)),
        indent(&edges_list(snapshot)),
    )
}

fn indent(block: &str) -> String {
    block.lines().map(|line| format!("  {line}\n")).collect()
}
