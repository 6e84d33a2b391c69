//! Canonical text rendering for lowered IR.
//!
//! Produces a deterministic, source-like rendering of any node or type.
//! The output is for humans and diagnostics: snapshot tests compare it,
//! and the size report uses its character length as a proxy for how much
//! of the emitted program a declaration accounts for. It is not the JS
//! emitter and carries no formatting configuration; one construct per
//! line, 4-space indentation.

use crate::arena::{IrArena, NodeId};
use crate::name::FqName;
use crate::node::{Literal, NodeKind, Param};
use crate::ty::Ty;

/// Render a node (and everything beneath it) to canonical text.
///
/// Rendering is pure: the same node in the same arena always yields the
/// same string.
pub fn render(arena: &IrArena, id: NodeId) -> String {
    let mut printer = Printer {
        arena,
        buffer: String::new(),
        indent: 0,
    };
    printer.node(id);
    printer.buffer
}

/// Render a lowered type to canonical text.
pub fn render_ty(ty: &Ty) -> String {
    match ty {
        Ty::Simple(name) => name.clone(),
        Ty::Generic(name, args) => format!("{name}<{}>", join_types(args)),
        Ty::Function(params, ret) => {
            format!("({}) -> {}", join_types(params), render_ty(ret))
        }
        Ty::Nullable(inner) => match **inner {
            // Parenthesize function types so the `?` binds to the whole type.
            Ty::Function(..) => format!("({})?", render_ty(inner)),
            _ => format!("{}?", render_ty(inner)),
        },
    }
}

fn join_types(types: &[Ty]) -> String {
    types.iter().map(render_ty).collect::<Vec<_>>().join(", ")
}

fn display_name(name: Option<&FqName>) -> String {
    name.map_or_else(|| "<anonymous>".to_owned(), ToString::to_string)
}

fn display_param(param: &Param) -> String {
    let ty = render_ty(&param.ty);
    match &param.name {
        Some(name) => format!("{name}: {ty}"),
        None => format!("_: {ty}"),
    }
}

/// Stateful line printer over one arena.
struct Printer<'ir> {
    arena: &'ir IrArena,
    buffer: String,
    indent: usize,
}

impl Printer<'_> {
    fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.buffer.push_str("    ");
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn open(&mut self, header: &str) {
        self.line(&format!("{header} {{"));
        self.indent += 1;
    }

    fn close(&mut self) {
        self.indent -= 1;
        self.line("}");
    }

    fn node(&mut self, id: NodeId) {
        match &self.arena.node(id).kind {
            NodeKind::Function(function) => {
                let params: Vec<String> = function.params.iter().map(display_param).collect();
                let header = format!(
                    "fun {}({})",
                    display_name(function.name.as_ref()),
                    params.join(", ")
                );
                let body = function.body.clone();
                self.open(&header);
                for stmt in body {
                    self.statement(stmt);
                }
                self.close();
            }
            NodeKind::Property(property) => {
                let header = format!("prop {}", display_name(property.name.as_ref()));
                let members = [property.getter, property.setter, property.backing_field];
                self.open(&header);
                for member in members.into_iter().flatten() {
                    self.node(member);
                }
                self.close();
            }
            NodeKind::Field(field) => {
                let mut text = format!(
                    "field {}: {}",
                    display_name(field.name.as_ref()),
                    render_ty(&field.ty)
                );
                if let Some(initializer) = field.initializer {
                    let value = self.expr(initializer);
                    text.push_str(" = ");
                    text.push_str(&value);
                }
                self.line(&text);
            }
            NodeKind::AnonymousInitializer(init) => {
                let body = init.body.clone();
                self.open("init");
                for stmt in body {
                    self.statement(stmt);
                }
                self.close();
            }
            NodeKind::Class(class) => {
                let header = format!("class {}", display_name(class.name.as_ref()));
                let members = class.members.clone();
                self.open(&header);
                for member in members {
                    self.node(member);
                }
                self.close();
            }
            NodeKind::Block(block) => {
                let statements = block.statements.clone();
                self.open("do");
                for stmt in statements {
                    self.statement(stmt);
                }
                self.close();
            }
            NodeKind::Call(_) | NodeKind::Return(_) | NodeKind::Literal(_) | NodeKind::VarRef(_) => {
                self.statement(id);
            }
        }
    }

    fn statement(&mut self, id: NodeId) {
        match &self.arena.node(id).kind {
            NodeKind::Literal(_) | NodeKind::VarRef(_) | NodeKind::Call(_) => {
                let text = self.expr(id);
                self.line(&text);
            }
            NodeKind::Return(ret) => match ret.value {
                Some(value) => {
                    let text = self.expr(value);
                    self.line(&format!("return {text}"));
                }
                None => self.line("return"),
            },
            // Nested declarations and blocks print as their own constructs.
            _ => self.node(id),
        }
    }

    fn expr(&self, id: NodeId) -> String {
        match &self.arena.node(id).kind {
            NodeKind::Literal(Literal::Int(value)) => value.to_string(),
            NodeKind::Literal(Literal::Bool(value)) => value.to_string(),
            NodeKind::Literal(Literal::Str(value)) => format!("\"{value}\""),
            NodeKind::Literal(Literal::Unit) => "()".to_owned(),
            NodeKind::VarRef(var) => var.name.clone(),
            NodeKind::Call(call) => {
                let args: Vec<String> = call.arguments.iter().map(|&a| self.expr(a)).collect();
                format!("{}({})", call.callee, args.join(", "))
            }
            // Lowering never places statement nodes in expression position;
            // keep rendering total anyway.
            _ => "<stmt>".to_owned(),
        }
    }
}
