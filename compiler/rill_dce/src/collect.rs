//! Declaration discovery over the lowered IR forest.

use rill_ir::visitor::{walk_node, Visitor};
use rill_ir::{IrArena, ModuleFragment, NodeId, NodeKind};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Collect every declaration of interest from the module forest.
///
/// Declarations are recorded in encounter order; a node reachable through
/// more than one path (shared after cross-module inlining, or both a root
/// and a member) is recorded once. Descent never stops at a match, so
/// declarations nested inside other declarations are found too.
pub fn collect_declarations(arena: &IrArena, modules: &[ModuleFragment]) -> Vec<NodeId> {
    let mut collector = DeclarationCollector {
        seen: FxHashSet::default(),
        declarations: Vec::new(),
    };
    for module in modules {
        collector.visit_module(module, arena);
    }
    debug!(
        modules = modules.len(),
        declarations = collector.declarations.len(),
        "collected declarations"
    );
    collector.declarations
}

/// Visitor accumulating declaration ids; state lives here, not in globals.
struct DeclarationCollector {
    seen: FxHashSet<NodeId>,
    declarations: Vec<NodeId>,
}

impl Visitor for DeclarationCollector {
    fn visit_node(&mut self, id: NodeId, arena: &IrArena) {
        let is_declaration = matches!(
            arena.node(id).kind,
            NodeKind::Function(_)
                | NodeKind::Property(_)
                | NodeKind::Field(_)
                | NodeKind::AnonymousInitializer(_)
                | NodeKind::Class(_)
        );
        if is_declaration && self.seen.insert(id) {
            self.declarations.push(id);
        }
        walk_node(self, id, arena);
    }
}
