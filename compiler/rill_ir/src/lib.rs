//! Rill IR - Lowered Intermediate Representation Types
//!
//! This crate contains the tree the Rill backend passes operate on after
//! lowering:
//! - Qualified names (`FqName`) for declarations
//! - Rendered-form types (`Ty`) for parameters and fields
//! - Arena allocation for IR nodes (`IrArena` + `NodeId` indices)
//! - The node model (`Node`/`NodeKind`), a tagged union over declaration
//!   and body kinds
//! - Generic traversal (`visitor`) and canonical text rendering (`pretty`)
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: no `Box<Node>` trees; nodes live in one arena
//!   and refer to each other by `NodeId(u32)` indices
//! - **Tagged Dispatch**: passes branch on `NodeKind`, never on trait
//!   objects, so match exhaustiveness covers the whole node set
//! - **Read-Only Passes**: diagnostics and analyses borrow the arena
//!   immutably; only lowering allocates

mod arena;
mod name;
mod node;
mod origin;
pub mod pretty;
mod ty;
pub mod visitor;

pub use arena::{IrArena, NodeId};
pub use name::FqName;
pub use node::{
    AnonymousInitializer, Block, Call, Class, Field, Function, Literal, ModuleFragment, Node,
    NodeKind, Param, Property, Return, VarRef,
};
pub use origin::DeclOrigin;
pub use ty::Ty;
