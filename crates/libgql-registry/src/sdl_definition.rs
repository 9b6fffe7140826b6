use libgql_ast::ast::Definition;
use libgql_ast::ast::DirectiveDefinition;
use libgql_ast::ast::SchemaDefinition;
use libgql_ast::ast::SourceLocation;
use libgql_ast::ast::TypeDefinition;
use libgql_ast::ast::TypeKind;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// A type-system definition: the part of a [`Definition`] a [`Registry`]
/// can hold.
///
/// [`Registry`]: crate::Registry
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum SdlDefinition {
    Schema(Arc<SchemaDefinition>),
    Directive(Arc<DirectiveDefinition>),
    Type(TypeDefinition),
}

/// What an [`SdlDefinition`] defines, ignoring base vs extension form.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum SdlDefinitionKind {
    Schema,
    Directive,
    Type(TypeKind),
}

impl std::fmt::Display for SdlDefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SdlDefinitionKind::Schema => f.write_str("schema"),
            SdlDefinitionKind::Directive => f.write_str("directive"),
            SdlDefinitionKind::Type(kind) => write!(f, "{kind} type"),
        }
    }
}

impl SdlDefinition {
    /// Extracts the type-system part of `definition`; operations and
    /// fragments yield `None`.
    pub fn from_definition(definition: &Definition) -> Option<Self> {
        match definition {
            Definition::Schema(def) => Some(SdlDefinition::Schema(def.clone())),
            Definition::Directive(def) => Some(SdlDefinition::Directive(def.clone())),
            Definition::Type(def) => Some(SdlDefinition::Type(def.clone())),
            Definition::Operation(_) | Definition::Fragment(_) => None,
        }
    }

    /// The declared name. Schema definitions have none.
    pub fn name(&self) -> Option<&str> {
        match self {
            SdlDefinition::Schema(_) => None,
            SdlDefinition::Directive(def) => Some(&def.name),
            SdlDefinition::Type(def) => Some(def.name()),
        }
    }

    pub fn kind(&self) -> SdlDefinitionKind {
        match self {
            SdlDefinition::Schema(_) => SdlDefinitionKind::Schema,
            SdlDefinition::Directive(_) => SdlDefinitionKind::Directive,
            SdlDefinition::Type(def) => SdlDefinitionKind::Type(def.type_kind()),
        }
    }

    /// Directive definitions cannot be extended, so they are never
    /// extensions.
    pub fn is_extension(&self) -> bool {
        match self {
            SdlDefinition::Schema(def) => def.form.is_extension(),
            SdlDefinition::Directive(_) => false,
            SdlDefinition::Type(def) => def.is_extension(),
        }
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            SdlDefinition::Schema(def) => def.meta.location.as_ref(),
            SdlDefinition::Directive(def) => def.meta.location.as_ref(),
            SdlDefinition::Type(def) => def.location(),
        }
    }
}

impl From<SdlDefinition> for Definition {
    fn from(value: SdlDefinition) -> Self {
        match value {
            SdlDefinition::Schema(def) => Definition::Schema(def),
            SdlDefinition::Directive(def) => Definition::Directive(def),
            SdlDefinition::Type(def) => Definition::Type(def),
        }
    }
}

impl From<TypeDefinition> for SdlDefinition {
    fn from(value: TypeDefinition) -> Self {
        SdlDefinition::Type(value)
    }
}
