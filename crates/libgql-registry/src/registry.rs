use crate::RegistryError;
use crate::SdlDefinition;
use indexmap::IndexMap;
use libgql_ast::AstNode;
use libgql_ast::ast::Definition;
use libgql_ast::ast::DirectiveDefinition;
use libgql_ast::ast::Document;
use libgql_ast::ast::NodeMeta;
use libgql_ast::ast::SchemaDefinition;
use libgql_ast::ast::TypeDefinition;
use libgql_ast::ast::TypeKind;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// Name-indexed store of type-system definitions.
///
/// Holds at most one base definition per type name, per directive name and
/// for the schema, plus every accepted extension in the order it was added.
/// Extensions of types with no base definition are kept too (see
/// [`orphan_extensions`](Registry::orphan_extensions)).
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Registry {
    types: IndexMap<String, TypeDefinition>,
    type_extensions: IndexMap<String, Vec<TypeDefinition>>,
    directives: IndexMap<String, Arc<DirectiveDefinition>>,
    schema: Option<Arc<SchemaDefinition>>,
    schema_extensions: Vec<Arc<SchemaDefinition>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one definition, or explains why it cannot be added. A rejected
    /// definition leaves the registry unchanged.
    pub fn add(&mut self, definition: SdlDefinition) -> Result<(), RegistryError> {
        match definition {
            SdlDefinition::Type(def) if def.is_extension() => self.add_type_extension(def),
            SdlDefinition::Type(def) => self.add_type(def),
            SdlDefinition::Directive(def) => self.add_directive(def),
            SdlDefinition::Schema(def) if def.form.is_extension() => {
                self.schema_extensions.push(def);
                Ok(())
            },
            SdlDefinition::Schema(def) => self.add_schema(def),
        }
    }

    fn add_type(&mut self, def: TypeDefinition) -> Result<(), RegistryError> {
        if let Some(existing) = self.types.get(def.name()) {
            if existing.type_kind() == def.type_kind() {
                return Err(RegistryError::DuplicateTypeDefinition {
                    type_name: def.name().to_string(),
                    first_location: existing.location().cloned(),
                    duplicate_location: def.location().cloned(),
                });
            }
            return Err(RegistryError::type_kind_mismatch(
                def.name(),
                existing.type_kind(),
                def.type_kind(),
                false,
                existing.location(),
                def.location(),
            ));
        }

        // Extensions may arrive before their base; the base must agree with
        // them.
        if let Some(first_extension) = self
            .type_extensions
            .get(def.name())
            .and_then(|extensions| extensions.first())
            && first_extension.type_kind() != def.type_kind()
        {
            return Err(RegistryError::type_kind_mismatch(
                def.name(),
                first_extension.type_kind(),
                def.type_kind(),
                false,
                first_extension.location(),
                def.location(),
            ));
        }

        self.types.insert(def.name().to_string(), def);
        Ok(())
    }

    fn add_type_extension(&mut self, def: TypeDefinition) -> Result<(), RegistryError> {
        let established = self.types.get(def.name()).or_else(|| {
            self.type_extensions
                .get(def.name())
                .and_then(|extensions| extensions.first())
        });
        if let Some(established) = established
            && established.type_kind() != def.type_kind()
        {
            return Err(RegistryError::type_kind_mismatch(
                def.name(),
                established.type_kind(),
                def.type_kind(),
                true,
                established.location(),
                def.location(),
            ));
        }

        self.type_extensions
            .entry(def.name().to_string())
            .or_default()
            .push(def);
        Ok(())
    }

    fn add_directive(&mut self, def: Arc<DirectiveDefinition>) -> Result<(), RegistryError> {
        if let Some(existing) = self.directives.get(&def.name) {
            return Err(RegistryError::DuplicateDirectiveDefinition {
                directive_name: def.name.clone(),
                first_location: existing.location().cloned(),
                duplicate_location: def.location().cloned(),
            });
        }
        self.directives.insert(def.name.clone(), def);
        Ok(())
    }

    fn add_schema(&mut self, def: Arc<SchemaDefinition>) -> Result<(), RegistryError> {
        if let Some(existing) = &self.schema {
            return Err(RegistryError::DuplicateSchemaDefinition {
                first_location: existing.location().cloned(),
                duplicate_location: def.location().cloned(),
            });
        }
        self.schema = Some(def);
        Ok(())
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The base definition of the named type.
    pub fn type_definition(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.get(name)
    }

    /// Base type definitions in the order they were added.
    pub fn types(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.types.values()
    }

    pub fn type_kind(&self, name: &str) -> Option<TypeKind> {
        self.types.get(name).map(TypeDefinition::type_kind)
    }

    /// Every accepted extension of the named type, in the order added.
    pub fn type_extensions(&self, name: &str) -> &[TypeDefinition] {
        self.type_extensions.get(name).map_or(&[], Vec::as_slice)
    }

    /// Extensions whose type has no base definition.
    pub fn orphan_extensions(&self) -> impl Iterator<Item = &TypeDefinition> {
        self.type_extensions
            .iter()
            .filter(|(name, _)| !self.types.contains_key(*name))
            .flat_map(|(_, extensions)| extensions)
    }

    /// The named type's base definition with the directives, fields,
    /// implemented interfaces, union members and enum values of all its
    /// extensions appended. The base's description, location and other
    /// metadata are kept. Returns `None` when there is no base definition.
    pub fn merged_type_definition(&self, name: &str) -> Option<TypeDefinition> {
        let base = self.types.get(name)?;
        let extensions = self.type_extensions(name);
        if extensions.is_empty() {
            return Some(base.clone());
        }
        Some(merge_extensions(base, extensions))
    }

    pub fn directive_definition(&self, name: &str) -> Option<&Arc<DirectiveDefinition>> {
        self.directives.get(name)
    }

    pub fn directive_definitions(&self) -> impl Iterator<Item = &Arc<DirectiveDefinition>> {
        self.directives.values()
    }

    pub fn schema_definition(&self) -> Option<&Arc<SchemaDefinition>> {
        self.schema.as_ref()
    }

    pub fn schema_extensions(&self) -> &[Arc<SchemaDefinition>] {
        &self.schema_extensions
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
            && self.type_extensions.is_empty()
            && self.directives.is_empty()
            && self.schema.is_none()
            && self.schema_extensions.is_empty()
    }

    /// Every definition held, as one document: the schema and its
    /// extensions, then directives, then each type followed by its
    /// extensions, then orphan extensions.
    pub fn to_document(&self) -> Document {
        let mut definitions = vec![];
        definitions.extend(self.schema.iter().cloned().map(Definition::Schema));
        definitions.extend(self.schema_extensions.iter().cloned().map(Definition::Schema));
        definitions.extend(self.directives.values().cloned().map(Definition::Directive));
        for (name, def) in &self.types {
            definitions.push(Definition::Type(def.clone()));
            definitions.extend(self.type_extensions(name).iter().cloned().map(Definition::Type));
        }
        definitions.extend(self.orphan_extensions().cloned().map(Definition::Type));
        Document {
            meta: NodeMeta::default(),
            definitions,
        }
    }
}

fn merge_extensions(base: &TypeDefinition, extensions: &[TypeDefinition]) -> TypeDefinition {
    match base {
        TypeDefinition::Object(def) => TypeDefinition::Object(def.transform(|staged| {
            for extension in extensions {
                if let TypeDefinition::Object(ext) = extension {
                    staged.implements.extend(ext.implements.iter().cloned());
                    staged.directives.extend(ext.directives.iter().cloned());
                    staged.fields.extend(ext.fields.iter().cloned());
                }
            }
        })),
        TypeDefinition::Interface(def) => TypeDefinition::Interface(def.transform(|staged| {
            for extension in extensions {
                if let TypeDefinition::Interface(ext) = extension {
                    staged.implements.extend(ext.implements.iter().cloned());
                    staged.directives.extend(ext.directives.iter().cloned());
                    staged.fields.extend(ext.fields.iter().cloned());
                }
            }
        })),
        TypeDefinition::Union(def) => TypeDefinition::Union(def.transform(|staged| {
            for extension in extensions {
                if let TypeDefinition::Union(ext) = extension {
                    staged.directives.extend(ext.directives.iter().cloned());
                    staged.members.extend(ext.members.iter().cloned());
                }
            }
        })),
        TypeDefinition::Enum(def) => TypeDefinition::Enum(def.transform(|staged| {
            for extension in extensions {
                if let TypeDefinition::Enum(ext) = extension {
                    staged.directives.extend(ext.directives.iter().cloned());
                    staged.values.extend(ext.values.iter().cloned());
                }
            }
        })),
        TypeDefinition::Scalar(def) => TypeDefinition::Scalar(def.transform(|staged| {
            for extension in extensions {
                if let TypeDefinition::Scalar(ext) = extension {
                    staged.directives.extend(ext.directives.iter().cloned());
                }
            }
        })),
        TypeDefinition::InputObject(def) => TypeDefinition::InputObject(def.transform(|staged| {
            for extension in extensions {
                if let TypeDefinition::InputObject(ext) = extension {
                    staged.directives.extend(ext.directives.iter().cloned());
                    staged.fields.extend(ext.fields.iter().cloned());
                }
            }
        })),
    }
}
