//! Declarations
//!
//! QuakeC definitions share one shape: a type specifier followed by one or
//! more names, each with an optional initializer.
//!
//! ```text
//! float health, armor = 100;
//! .vector origin;
//! void(entity e, ...) bprint = #23;
//! void() main = { ... };
//! local float i = 0;
//! ```

use super::{Expr, Ident, Stmt};
use crate::Span;

/// The five QuakeC base types.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseType {
    Float,
    Void,
    Vector,
    Entity,
    String,
}

impl BaseType {
    /// Map a type keyword lexeme to its base type.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "float" => Some(BaseType::Float),
            "void" => Some(BaseType::Void),
            "vector" => Some(BaseType::Vector),
            "entity" => Some(BaseType::Entity),
            "string" => Some(BaseType::String),
            _ => None,
        }
    }

    pub const fn keyword(self) -> &'static str {
        match self {
            BaseType::Float => "float",
            BaseType::Void => "void",
            BaseType::Vector => "vector",
            BaseType::Entity => "entity",
            BaseType::String => "string",
        }
    }
}

/// A type specifier: `[.] base [(params)]`.
///
/// `params` is `Some` for function types, including `void()` with an empty
/// list. `field` marks entity field types (`.float`).
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeSpec {
    pub field: bool,
    pub base: BaseType,
    pub params: Option<Vec<Param>>,
    pub span: Span,
}

impl TypeSpec {
    pub fn is_function(&self) -> bool {
        self.params.is_some()
    }
}

/// Function type parameter.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Param {
    Named { ty: TypeSpec, name: Ident },
    /// `...` (builtins only)
    Variadic(Span),
}

/// Initializer of a declared name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Init {
    /// `= expr`
    Expr(Expr),
    /// `= #n`, an engine builtin
    Builtin(u32),
    /// `= { ... }`, a function body
    Body(Vec<Stmt>),
}

/// One declared name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarDef {
    pub name: Ident,
    pub init: Option<Init>,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decl {
    pub ty: TypeSpec,
    /// Declared with `local`
    pub local: bool,
    pub vars: Vec<VarDef>,
}

impl Decl {
    /// Whether any declared name carries a function body.
    pub fn defines_function(&self) -> bool {
        self.vars
            .iter()
            .any(|var| matches!(var.init, Some(Init::Body(_))))
    }
}
