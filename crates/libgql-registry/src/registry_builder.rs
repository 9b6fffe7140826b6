use crate::CompositeDefinitionBuilder;
use crate::Registry;
use crate::RegistryError;
use crate::SdlDefinition;
use crate::SdlDefinitionKind;
use indexmap::IndexMap;
use libgql_ast::ast::Definition;
use libgql_ast::ast::DirectiveDefinition;
use libgql_ast::ast::Document;
use libgql_ast::ast::EnumTypeDefinition;
use libgql_ast::ast::InputObjectTypeDefinition;
use libgql_ast::ast::InterfaceTypeDefinition;
use libgql_ast::ast::ObjectTypeDefinition;
use libgql_ast::ast::ScalarTypeDefinition;
use libgql_ast::ast::SchemaDefinition;
use libgql_ast::ast::TypeDefinition;
use libgql_ast::ast::TypeKind;
use libgql_ast::ast::UnionTypeDefinition;
use std::sync::Arc;

/// The key an accumulator is stored under. Types and directives live in
/// separate namespaces.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum DefinitionName {
    Type(String),
    Directive(String),
}

impl DefinitionName {
    fn of(def: &SdlDefinition) -> Option<Self> {
        match def {
            SdlDefinition::Schema(_) => None,
            SdlDefinition::Directive(def) => Some(DefinitionName::Directive(def.name.clone())),
            SdlDefinition::Type(def) => Some(DefinitionName::Type(def.name().to_string())),
        }
    }
}

impl std::fmt::Display for DefinitionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefinitionName::Type(name) => f.write_str(name),
            DefinitionName::Directive(name) => write!(f, "@{name}"),
        }
    }
}

/// The accumulator for one declared name. Its variant is fixed by the first
/// definition seen for that name.
#[derive(Clone, Debug, PartialEq)]
pub enum NamedCompositeBuilder {
    Object(CompositeDefinitionBuilder<ObjectTypeDefinition>),
    Interface(CompositeDefinitionBuilder<InterfaceTypeDefinition>),
    Union(CompositeDefinitionBuilder<UnionTypeDefinition>),
    Enum(CompositeDefinitionBuilder<EnumTypeDefinition>),
    Scalar(CompositeDefinitionBuilder<ScalarTypeDefinition>),
    InputObject(CompositeDefinitionBuilder<InputObjectTypeDefinition>),
    Directive(CompositeDefinitionBuilder<DirectiveDefinition>),
}

macro_rules! each_builder {
    ($self:expr, $builder:ident => $body:expr) => {
        match $self {
            NamedCompositeBuilder::Object($builder) => $body,
            NamedCompositeBuilder::Interface($builder) => $body,
            NamedCompositeBuilder::Union($builder) => $body,
            NamedCompositeBuilder::Enum($builder) => $body,
            NamedCompositeBuilder::Scalar($builder) => $body,
            NamedCompositeBuilder::InputObject($builder) => $body,
            NamedCompositeBuilder::Directive($builder) => $body,
        }
    };
}

impl NamedCompositeBuilder {
    fn for_kind(kind: SdlDefinitionKind) -> Option<Self> {
        Some(match kind {
            SdlDefinitionKind::Schema => return None,
            SdlDefinitionKind::Directive => NamedCompositeBuilder::Directive(Default::default()),
            SdlDefinitionKind::Type(TypeKind::Object) => NamedCompositeBuilder::Object(Default::default()),
            SdlDefinitionKind::Type(TypeKind::Interface) => NamedCompositeBuilder::Interface(Default::default()),
            SdlDefinitionKind::Type(TypeKind::Union) => NamedCompositeBuilder::Union(Default::default()),
            SdlDefinitionKind::Type(TypeKind::Enum) => NamedCompositeBuilder::Enum(Default::default()),
            SdlDefinitionKind::Type(TypeKind::Scalar) => NamedCompositeBuilder::Scalar(Default::default()),
            SdlDefinitionKind::Type(TypeKind::InputObject) => NamedCompositeBuilder::InputObject(Default::default()),
        })
    }

    pub fn kind(&self) -> SdlDefinitionKind {
        match self {
            NamedCompositeBuilder::Object(_) => SdlDefinitionKind::Type(TypeKind::Object),
            NamedCompositeBuilder::Interface(_) => SdlDefinitionKind::Type(TypeKind::Interface),
            NamedCompositeBuilder::Union(_) => SdlDefinitionKind::Type(TypeKind::Union),
            NamedCompositeBuilder::Enum(_) => SdlDefinitionKind::Type(TypeKind::Enum),
            NamedCompositeBuilder::Scalar(_) => SdlDefinitionKind::Type(TypeKind::Scalar),
            NamedCompositeBuilder::InputObject(_) => SdlDefinitionKind::Type(TypeKind::InputObject),
            NamedCompositeBuilder::Directive(_) => SdlDefinitionKind::Directive,
        }
    }

    /// Routes `def` to the base, the extensions or (when its kind differs
    /// from this accumulator's) the mismatched definitions.
    fn accept(&mut self, def: SdlDefinition) {
        let is_extension = def.is_extension();
        match (self, def) {
            (NamedCompositeBuilder::Object(builder), SdlDefinition::Type(TypeDefinition::Object(def))) => {
                route(builder, def, is_extension)
            },
            (NamedCompositeBuilder::Interface(builder), SdlDefinition::Type(TypeDefinition::Interface(def))) => {
                route(builder, def, is_extension)
            },
            (NamedCompositeBuilder::Union(builder), SdlDefinition::Type(TypeDefinition::Union(def))) => {
                route(builder, def, is_extension)
            },
            (NamedCompositeBuilder::Enum(builder), SdlDefinition::Type(TypeDefinition::Enum(def))) => {
                route(builder, def, is_extension)
            },
            (NamedCompositeBuilder::Scalar(builder), SdlDefinition::Type(TypeDefinition::Scalar(def))) => {
                route(builder, def, is_extension)
            },
            (NamedCompositeBuilder::InputObject(builder), SdlDefinition::Type(TypeDefinition::InputObject(def))) => {
                route(builder, def, is_extension)
            },
            (NamedCompositeBuilder::Directive(builder), SdlDefinition::Directive(def)) => {
                route(builder, def, false)
            },
            (this, other) => {
                log::debug!(
                    "`{}` was first seen as {} but is also declared as {}",
                    other.name().unwrap_or_default(),
                    this.kind(),
                    other.kind(),
                );
                each_builder!(this, builder => builder.add_mismatched(other))
            },
        }
    }

    fn into_definitions(self) -> Vec<SdlDefinition> {
        match self {
            NamedCompositeBuilder::Object(builder) => {
                builder.into_definitions(|def| TypeDefinition::Object(def).into())
            },
            NamedCompositeBuilder::Interface(builder) => {
                builder.into_definitions(|def| TypeDefinition::Interface(def).into())
            },
            NamedCompositeBuilder::Union(builder) => {
                builder.into_definitions(|def| TypeDefinition::Union(def).into())
            },
            NamedCompositeBuilder::Enum(builder) => {
                builder.into_definitions(|def| TypeDefinition::Enum(def).into())
            },
            NamedCompositeBuilder::Scalar(builder) => {
                builder.into_definitions(|def| TypeDefinition::Scalar(def).into())
            },
            NamedCompositeBuilder::InputObject(builder) => {
                builder.into_definitions(|def| TypeDefinition::InputObject(def).into())
            },
            NamedCompositeBuilder::Directive(builder) => {
                builder.into_definitions(SdlDefinition::Directive)
            },
        }
    }
}

fn route<T>(builder: &mut CompositeDefinitionBuilder<T>, def: Arc<T>, is_extension: bool) {
    if is_extension {
        builder.add_extension(def);
    } else {
        if builder.base().is_some() {
            log::debug!("duplicate base definition accumulated");
        }
        builder.set_base(def);
    }
}

/// Two-phase registry assembly.
///
/// Definitions may arrive in any order across any number of documents:
/// [`add_document`](Self::add_document) only accumulates them by declared
/// name, so an extension seen before its base is not an error.
/// [`build`](Self::build) then adds, per name in first-seen order, the base,
/// any duplicates, every extension and finally any mismatched definitions to
/// a fresh [`Registry`], collecting one [`RegistryError`] per rejected add.
#[derive(Clone, Debug, Default)]
pub struct CompositeRegistryBuilder {
    named: IndexMap<DefinitionName, NamedCompositeBuilder>,
    schema: CompositeDefinitionBuilder<SchemaDefinition>,
}

impl CompositeRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulates every type-system definition of `document`. Operations
    /// and fragments are ignored.
    pub fn add_document(&mut self, document: &Document) {
        for definition in &document.definitions {
            self.add_definition(definition);
        }
    }

    pub fn add_definition(&mut self, definition: &Definition) {
        if let Some(def) = SdlDefinition::from_definition(definition) {
            self.add_sdl_definition(def);
        }
    }

    pub fn add_sdl_definition(&mut self, def: SdlDefinition) {
        let Some(name) = DefinitionName::of(&def) else {
            if let SdlDefinition::Schema(schema) = def {
                let is_extension = schema.form.is_extension();
                route(&mut self.schema, schema, is_extension);
            }
            return;
        };

        if let Some(builder) = self.named.get_mut(&name) {
            builder.accept(def);
        } else if let Some(mut builder) = NamedCompositeBuilder::for_kind(def.kind()) {
            builder.accept(def);
            self.named.insert(name, builder);
        }
    }

    /// The accumulator for `name`, if any definition used that name.
    pub fn accumulator(&self, name: &DefinitionName) -> Option<&NamedCompositeBuilder> {
        self.named.get(name)
    }

    pub fn schema_accumulator(&self) -> &CompositeDefinitionBuilder<SchemaDefinition> {
        &self.schema
    }

    pub fn build(self) -> RegistryBuildResult {
        let mut registry = Registry::new();
        let mut errors = vec![];

        let definitions = self
            .schema
            .into_definitions(SdlDefinition::Schema)
            .into_iter()
            .chain(
                self.named
                    .into_values()
                    .flat_map(NamedCompositeBuilder::into_definitions),
            );
        for def in definitions {
            if let Err(err) = registry.add(def) {
                log::debug!("Registry rejected a definition: {err}");
                errors.push(err);
            }
        }

        RegistryBuildResult { registry, errors }
    }
}

/// A best-effort [`Registry`] and every error hit while assembling it.
///
/// Whether errors are fatal is the caller's decision: use
/// [`into_result`](Self::into_result) to require a clean build.
#[derive(Clone, Debug, PartialEq)]
pub struct RegistryBuildResult {
    pub registry: Registry,
    pub errors: Vec<RegistryError>,
}

impl RegistryBuildResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<Registry, Vec<RegistryError>> {
        if self.errors.is_empty() {
            Ok(self.registry)
        } else {
            Err(self.errors)
        }
    }
}
