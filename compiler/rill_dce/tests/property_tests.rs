//! Property-based tests for the declaration size report.
//!
//! These use proptest to generate declaration names over the full
//! printable-ASCII range (quotes and backslashes included) and verify:
//! 1. Grouping: one entry per distinct key, never more than the input
//! 2. Sanitization: serialized JSON always parses, keys carry no quotes
//! 3. Idempotence: rendering the same entries twice is byte-identical

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::uninlined_format_args,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use std::collections::HashSet;

use proptest::prelude::*;
use rill_dce::serialize::{render_report, ReportFormat};
use rill_dce::{collect_declarations, resolve_entries};
use rill_ir::{DeclOrigin, Field, FqName, IrArena, ModuleFragment, Node, NodeKind, Ty};

/// Printable ASCII, quote and backslash characters included.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{1,12}").expect("valid regex")
}

/// One module of standalone fields, one per generated name.
fn program(names: &[String]) -> (IrArena, Vec<ModuleFragment>) {
    let mut arena = IrArena::new();
    let declarations = names
        .iter()
        .map(|name| {
            arena.alloc(Node::new(NodeKind::Field(Field {
                name: Some(FqName::new(vec![name.clone()])),
                ty: Ty::simple("Int"),
                origin: DeclOrigin::Defined,
                initializer: None,
            })))
        })
        .collect();
    let module = ModuleFragment {
        name: FqName::from_dotted("gen"),
        declarations,
    };
    (arena, vec![module])
}

proptest! {
    #[test]
    fn one_entry_per_distinct_key(names in prop::collection::vec(name_strategy(), 0..16)) {
        let (arena, modules) = program(&names);
        let collected = collect_declarations(&arena, &modules);
        let entries = resolve_entries(&arena, &collected);

        prop_assert!(entries.len() <= collected.len());

        let keys: HashSet<&str> = entries.iter().map(|e| e.key.as_str()).collect();
        prop_assert_eq!(keys.len(), entries.len());
    }

    #[test]
    fn json_report_always_parses(names in prop::collection::vec(name_strategy(), 0..16)) {
        let (arena, modules) = program(&names);
        let collected = collect_declarations(&arena, &modules);
        let entries = resolve_entries(&arena, &collected);

        let report = render_report(ReportFormat::Json, &entries);
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        let object = value.as_object().unwrap();

        // sanitization deletes quotes; colliding keys may shrink the object
        prop_assert!(object.len() <= entries.len());
        for key in object.keys() {
            prop_assert!(!key.contains('"'));
            prop_assert!(!key.contains('\''));
        }
    }

    #[test]
    fn report_rendering_is_idempotent(names in prop::collection::vec(name_strategy(), 0..16)) {
        let (arena, modules) = program(&names);
        let collected = collect_declarations(&arena, &modules);
        let entries = resolve_entries(&arena, &collected);

        prop_assert_eq!(
            render_report(ReportFormat::Js, &entries),
            render_report(ReportFormat::Js, &entries)
        );
    }
}
