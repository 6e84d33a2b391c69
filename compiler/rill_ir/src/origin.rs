//! Provenance markers for lowered declarations.

/// Where a declaration came from.
///
/// Most declarations are `Defined` (written by the user). Lowering passes
/// tag the declarations they insert so later passes and diagnostics can
/// distinguish them; the primary-constructor lowering is the one origin
/// the size report keys on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DeclOrigin {
    /// Written by the user.
    Defined,
    /// Accessor generated for a property without an explicit one.
    DefaultPropertyAccessor,
    /// Zero-argument constructor inserted by the primary-constructor lowering.
    SyntheticPrimaryConstructor,
}
