use crate::SdlDefinitionKind;
use libgql_ast::ast::SourceLocation;
use libgql_ast::ast::TypeKind;
use serde::Deserialize;
use serde::Serialize;

/// A definition the [`Registry`](crate::Registry) refused to add.
///
/// Every variant records where the already-registered definition lives
/// (when known) and where the rejected one does; see
/// [`locations`](RegistryError::locations).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize, thiserror::Error)]
pub enum RegistryError {
    #[error("Duplicate definition of type `{type_name}`")]
    DuplicateTypeDefinition {
        type_name: String,
        first_location: Option<SourceLocation>,
        duplicate_location: Option<SourceLocation>,
    },

    #[error(
        "`{type_name}` is declared as {expected} but {} it as {found}",
        mismatch_source(.is_extension),
    )]
    TypeKindMismatch {
        type_name: String,
        expected: SdlDefinitionKind,
        found: SdlDefinitionKind,
        is_extension: bool,
        first_location: Option<SourceLocation>,
        mismatch_location: Option<SourceLocation>,
    },

    #[error("Duplicate definition of directive `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        first_location: Option<SourceLocation>,
        duplicate_location: Option<SourceLocation>,
    },

    #[error("Duplicate schema definition")]
    DuplicateSchemaDefinition {
        first_location: Option<SourceLocation>,
        duplicate_location: Option<SourceLocation>,
    },
}

impl RegistryError {
    pub(crate) fn type_kind_mismatch(
        type_name: &str,
        expected: TypeKind,
        found: TypeKind,
        is_extension: bool,
        first_location: Option<&SourceLocation>,
        mismatch_location: Option<&SourceLocation>,
    ) -> Self {
        RegistryError::TypeKindMismatch {
            type_name: type_name.to_string(),
            expected: SdlDefinitionKind::Type(expected),
            found: SdlDefinitionKind::Type(found),
            is_extension,
            first_location: first_location.cloned(),
            mismatch_location: mismatch_location.cloned(),
        }
    }

    /// The known locations involved, the earlier definition first.
    pub fn locations(&self) -> Vec<&SourceLocation> {
        let (first, second) = match self {
            RegistryError::DuplicateTypeDefinition {
                first_location,
                duplicate_location,
                ..
            }
            | RegistryError::DuplicateDirectiveDefinition {
                first_location,
                duplicate_location,
                ..
            }
            | RegistryError::DuplicateSchemaDefinition {
                first_location,
                duplicate_location,
            } => (first_location, duplicate_location),
            RegistryError::TypeKindMismatch {
                first_location,
                mismatch_location,
                ..
            } => (first_location, mismatch_location),
        };
        first.iter().chain(second.iter()).collect()
    }

    /// The location of the definition that was rejected.
    pub fn rejected_location(&self) -> Option<&SourceLocation> {
        match self {
            RegistryError::DuplicateTypeDefinition { duplicate_location, .. }
            | RegistryError::DuplicateDirectiveDefinition { duplicate_location, .. }
            | RegistryError::DuplicateSchemaDefinition { duplicate_location, .. } => {
                duplicate_location.as_ref()
            },
            RegistryError::TypeKindMismatch { mismatch_location, .. } => {
                mismatch_location.as_ref()
            },
        }
    }
}

fn mismatch_source(is_extension: &bool) -> &'static str {
    if *is_extension {
        "an extension declares"
    } else {
        "a later definition declares"
    }
}
