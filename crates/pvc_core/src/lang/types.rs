//! Type-annotation vocabulary.
//!
//! Maps the names users write after `:` in a parameter list to a stable id, and each id to the keyword the
//! code generator prints in IR text.
//!
//! ## Examples
//! ```rust
//! use pvc_core::lang::types::{self, TypeNameId};
//!
//! assert_eq!(types::from_str("i32"), Some(TypeNameId::I32));
//! assert_eq!(types::info_for(TypeNameId::F32).ir_keyword, "float");
//! ```

/// Stable identifier for every builtin type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeNameId {
    I32,
    F32,
}

/// Metadata for a builtin type name.
#[derive(Debug, Clone, Copy)]
pub struct TypeNameInfo {
    pub id: TypeNameId,
    /// Spelling accepted in source annotations.
    pub spelling: &'static str,
    /// Keyword printed in IR text.
    pub ir_keyword: &'static str,
}

/// Registry of builtin type names.
pub const TYPE_NAMES: &[TypeNameInfo] = &[
    TypeNameInfo {
        id: TypeNameId::I32,
        spelling: "i32",
        ir_keyword: "i32",
    },
    TypeNameInfo {
        id: TypeNameId::F32,
        spelling: "f32",
        ir_keyword: "float",
    },
];

/// IR keyword for a value with no known type.
pub const VOID_IR_KEYWORD: &str = "void";

/// Return the full metadata entry for a type name.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: TypeNameId) -> &'static TypeNameInfo {
    TYPE_NAMES.iter().find(|t| t.id == id).expect("type name info missing")
}

/// Resolve an annotation spelling to its identifier (case-sensitive).
pub fn from_str(spelling: &str) -> Option<TypeNameId> {
    TYPE_NAMES.iter().find(|t| t.spelling == spelling).map(|t| t.id)
}
