//! IR Visitor Pattern
//!
//! Provides generic traversal of the lowered tree. Based on the
//! arena-allocated structure where nodes are referenced by `NodeId`
//! indices.
//!
//! # Design
//!
//! A single `Visitor` trait is provided for IR traversal. The visitor can
//! mutate its own state during traversal, but the tree remains immutable.
//!
//! Default implementations call `walk_*` functions that traverse children.
//! Override `visit_*` methods to add custom behavior at specific nodes,
//! and call the matching `walk_*` to keep descending.
//!
//! # Example
//!
//! ```text
//! struct CountCalls {
//!     count: usize,
//! }
//!
//! impl Visitor for CountCalls {
//!     fn visit_node(&mut self, id: NodeId, arena: &IrArena) {
//!         if matches!(arena.node(id).kind, NodeKind::Call(_)) {
//!             self.count += 1;
//!         }
//!         walk_node(self, id, arena);
//!     }
//! }
//! ```

use crate::arena::{IrArena, NodeId};
use crate::node::{ModuleFragment, NodeKind};

/// IR Visitor trait.
///
/// Override `visit_*` methods to add custom behavior at specific nodes.
/// Call `walk_*` functions to continue traversal into children.
pub trait Visitor {
    /// Visit a module fragment.
    fn visit_module(&mut self, module: &ModuleFragment, arena: &IrArena) {
        walk_module(self, module, arena);
    }

    /// Visit a node by id.
    fn visit_node(&mut self, id: NodeId, arena: &IrArena) {
        walk_node(self, id, arena);
    }
}

// Walk Functions
//
// All walk functions traverse children in stored order, depth-first.

/// Walk a module fragment's root declarations.
pub fn walk_module<V: Visitor + ?Sized>(
    visitor: &mut V,
    module: &ModuleFragment,
    arena: &IrArena,
) {
    for &declaration in &module.declarations {
        visitor.visit_node(declaration, arena);
    }
}

/// Walk a node's children.
pub fn walk_node<V: Visitor + ?Sized>(visitor: &mut V, id: NodeId, arena: &IrArena) {
    match &arena.node(id).kind {
        NodeKind::Function(function) => {
            for &stmt in &function.body {
                visitor.visit_node(stmt, arena);
            }
        }
        NodeKind::Property(property) => {
            if let Some(getter) = property.getter {
                visitor.visit_node(getter, arena);
            }
            if let Some(setter) = property.setter {
                visitor.visit_node(setter, arena);
            }
            if let Some(backing_field) = property.backing_field {
                visitor.visit_node(backing_field, arena);
            }
        }
        NodeKind::Field(field) => {
            if let Some(initializer) = field.initializer {
                visitor.visit_node(initializer, arena);
            }
        }
        NodeKind::AnonymousInitializer(init) => {
            for &stmt in &init.body {
                visitor.visit_node(stmt, arena);
            }
        }
        NodeKind::Class(class) => {
            for &member in &class.members {
                visitor.visit_node(member, arena);
            }
        }
        NodeKind::Block(block) => {
            for &stmt in &block.statements {
                visitor.visit_node(stmt, arena);
            }
        }
        NodeKind::Call(call) => {
            for &argument in &call.arguments {
                visitor.visit_node(argument, arena);
            }
        }
        NodeKind::Return(ret) => {
            if let Some(value) = ret.value {
                visitor.visit_node(value, arena);
            }
        }
        // Leaves
        NodeKind::Literal(_) | NodeKind::VarRef(_) => {}
    }
}
