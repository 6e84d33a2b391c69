//! Grouping-key derivation for report entries.

use rill_ir::{pretty, DeclOrigin, IrArena, NodeId, NodeKind};

/// Key a declaration without a usable qualified name groups under.
const UNKNOWN_NAME: &str = "<unknown>";

/// Suffix marking declarations inserted by the primary-constructor lowering.
const SYNTHETIC_SUFFIX: &str = "[synthetic]";

/// Derive the stable grouping key for a declaration.
///
/// The key is `qualifiedName` plus, for functions, the parenthesized
/// parameter-type list in canonical rendering, plus `[synthetic]` when the
/// declaration came from the primary-constructor lowering. Overloads get
/// distinct keys; repeated lowerings of the same signature get the same
/// key and are merged by the resolver. The key depends only on name,
/// signature, and origin, never on the declaration's size.
pub fn grouping_key(arena: &IrArena, id: NodeId) -> String {
    let kind = &arena.node(id).kind;

    let name = kind
        .name()
        .map_or_else(|| UNKNOWN_NAME.to_owned(), ToString::to_string);

    let signature = match kind {
        NodeKind::Function(function) => {
            let params: Vec<String> = function
                .params
                .iter()
                .map(|param| pretty::render_ty(&param.ty))
                .collect();
            format!("({})", params.join(", "))
        }
        _ => String::new(),
    };

    let synthetic = match kind.origin() {
        Some(DeclOrigin::SyntheticPrimaryConstructor) => SYNTHETIC_SUFFIX,
        _ => "",
    };

    format!("{name}{signature}{synthetic}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rill_ir::{Field, FqName, Function, Node, Param, Ty};

    fn alloc_function(
        arena: &mut IrArena,
        name: Option<&str>,
        param_tys: Vec<Ty>,
        origin: DeclOrigin,
    ) -> NodeId {
        arena.alloc(Node::new(NodeKind::Function(Function {
            name: name.map(FqName::from_dotted),
            params: param_tys
                .into_iter()
                .map(|ty| Param { name: None, ty })
                .collect(),
            origin,
            body: vec![],
        })))
    }

    #[test]
    fn function_key_includes_parameter_types() {
        let mut arena = IrArena::new();
        let id = alloc_function(
            &mut arena,
            Some("pkg.Foo"),
            vec![Ty::simple("Int"), Ty::simple("String")],
            DeclOrigin::Defined,
        );
        assert_eq!(grouping_key(&arena, id), "pkg.Foo(Int, String)");
    }

    #[test]
    fn zero_parameter_function_keeps_parens() {
        let mut arena = IrArena::new();
        let id = alloc_function(&mut arena, Some("pkg.run"), vec![], DeclOrigin::Defined);
        assert_eq!(grouping_key(&arena, id), "pkg.run()");
    }

    #[test]
    fn non_function_has_no_signature_segment() {
        let mut arena = IrArena::new();
        let id = arena.alloc(Node::new(NodeKind::Field(Field {
            name: Some(FqName::from_dotted("pkg.count")),
            ty: Ty::simple("Int"),
            origin: DeclOrigin::Defined,
            initializer: None,
        })));
        assert_eq!(grouping_key(&arena, id), "pkg.count");
    }

    #[test]
    fn synthetic_origin_appends_marker() {
        let mut arena = IrArena::new();
        let id = alloc_function(
            &mut arena,
            Some("pkg.Foo"),
            vec![Ty::simple("Int")],
            DeclOrigin::SyntheticPrimaryConstructor,
        );
        assert_eq!(grouping_key(&arena, id), "pkg.Foo(Int)[synthetic]");
    }

    #[test]
    fn synthetic_and_plain_keys_differ() {
        let mut arena = IrArena::new();
        let plain = alloc_function(
            &mut arena,
            Some("pkg.Foo"),
            vec![Ty::simple("Int")],
            DeclOrigin::Defined,
        );
        let synthetic = alloc_function(
            &mut arena,
            Some("pkg.Foo"),
            vec![Ty::simple("Int")],
            DeclOrigin::SyntheticPrimaryConstructor,
        );
        assert_eq!(grouping_key(&arena, plain), "pkg.Foo(Int)");
        assert_eq!(grouping_key(&arena, synthetic), "pkg.Foo(Int)[synthetic]");
    }

    #[test]
    fn missing_name_uses_placeholder() {
        let mut arena = IrArena::new();
        let id = alloc_function(&mut arena, None, vec![], DeclOrigin::Defined);
        assert_eq!(grouping_key(&arena, id), "<unknown>()");
    }

    #[test]
    fn key_is_stable_across_computations() {
        let mut arena = IrArena::new();
        let id = alloc_function(
            &mut arena,
            Some("pkg.f"),
            vec![Ty::Generic("List".to_owned(), vec![Ty::simple("Int")])],
            DeclOrigin::Defined,
        );
        assert_eq!(grouping_key(&arena, id), grouping_key(&arena, id));
    }
}
