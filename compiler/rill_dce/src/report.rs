//! Grouping and representative selection.

use rill_ir::{pretty, IrArena, NodeId, NodeKind};
use rustc_hash::FxHashMap;

use crate::signature::grouping_key;

/// One record of the size report.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportEntry {
    /// Grouping key the entry survived under.
    pub key: String,
    /// The representative declaration: largest rendering in its group.
    pub node: NodeId,
    /// Character length of the representative's canonical rendering.
    pub size: usize,
    /// Human-readable declaration kind.
    pub label: &'static str,
}

/// Group declarations by key and keep one entry per key.
///
/// Groups appear in first-seen order. Within a group the declaration with
/// the longest canonical rendering wins; on equal lengths the first one
/// encountered is kept, so output is deterministic for a fixed traversal
/// order.
pub fn resolve_entries(arena: &IrArena, declarations: &[NodeId]) -> Vec<ReportEntry> {
    let mut groups: Vec<(String, Vec<NodeId>)> = Vec::new();
    let mut group_index: FxHashMap<String, usize> = FxHashMap::default();

    for &id in declarations {
        let key = grouping_key(arena, id);
        match group_index.get(&key) {
            Some(&slot) => groups[slot].1.push(id),
            None => {
                group_index.insert(key.clone(), groups.len());
                groups.push((key, vec![id]));
            }
        }
    }

    groups
        .into_iter()
        .map(|(key, members)| {
            let mut best = members[0];
            let mut best_size = rendered_len(arena, best);
            for &id in &members[1..] {
                let size = rendered_len(arena, id);
                if size > best_size {
                    best = id;
                    best_size = size;
                }
            }
            ReportEntry {
                key,
                node: best,
                size: best_size,
                label: kind_label(&arena.node(best).kind),
            }
        })
        .collect()
}

fn rendered_len(arena: &IrArena, id: NodeId) -> usize {
    pretty::render(arena, id).chars().count()
}

/// Fixed label vocabulary of the report format.
fn kind_label(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Function(_) => "function",
        NodeKind::Property(_) => "property",
        NodeKind::Field(_) => "field",
        NodeKind::AnonymousInitializer(_) => "anonymousInitializer",
        NodeKind::Class(_) => "class",
        // The collector only hands us declarations; keep the mapping total.
        NodeKind::Block(_)
        | NodeKind::Call(_)
        | NodeKind::Return(_)
        | NodeKind::Literal(_)
        | NodeKind::VarRef(_) => "unknown",
    }
}
