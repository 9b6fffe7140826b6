use crate::ast::DefinitionForm;
use crate::ast::Description;
use crate::ast::Directive;
use crate::ast::EnumTypeDefinition;
use crate::ast::FieldDefinition;
use crate::ast::FromNode;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::Node;
use crate::ast::NodeMeta;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SourceLocation;
use crate::ast::TypeName;
use crate::ast::UnionTypeDefinition;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// The kinds of named type a schema can define.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum TypeKind {
    Object,
    Interface,
    Union,
    Enum,
    Scalar,
    InputObject,
}

impl TypeKind {
    /// The SDL keyword that introduces this kind of type.
    pub fn keyword(&self) -> &'static str {
        match self {
            TypeKind::Object => "type",
            TypeKind::Interface => "interface",
            TypeKind::Union => "union",
            TypeKind::Enum => "enum",
            TypeKind::Scalar => "scalar",
            TypeKind::InputObject => "input",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TypeKind::Object => "object",
            TypeKind::Interface => "interface",
            TypeKind::Union => "union",
            TypeKind::Enum => "enum",
            TypeKind::Scalar => "scalar",
            TypeKind::InputObject => "input object",
        })
    }
}

/// Types that declare implemented interfaces and output fields.
pub trait ImplementingType {
    fn implements(&self) -> &[Arc<TypeName>];

    fn fields(&self) -> &[Arc<FieldDefinition>];

    fn field(&self, name: &str) -> Option<&Arc<FieldDefinition>> {
        self.fields().iter().find(|field| field.name == name)
    }

    fn implements_interface(&self, name: &str) -> bool {
        self.implements().iter().any(|iface| iface.name == name)
    }
}

/// A named type definition or extension of any kind.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum TypeDefinition {
    Object(Arc<ObjectTypeDefinition>),
    Interface(Arc<InterfaceTypeDefinition>),
    Union(Arc<UnionTypeDefinition>),
    Enum(Arc<EnumTypeDefinition>),
    Scalar(Arc<ScalarTypeDefinition>),
    InputObject(Arc<InputObjectTypeDefinition>),
}

macro_rules! each_type_definition {
    ($self:expr, $def:ident => $body:expr) => {
        match $self {
            TypeDefinition::Object($def) => $body,
            TypeDefinition::Interface($def) => $body,
            TypeDefinition::Union($def) => $body,
            TypeDefinition::Enum($def) => $body,
            TypeDefinition::Scalar($def) => $body,
            TypeDefinition::InputObject($def) => $body,
        }
    };
}

impl TypeDefinition {
    pub fn name(&self) -> &str {
        each_type_definition!(self, def => &def.name)
    }

    pub fn form(&self) -> DefinitionForm {
        each_type_definition!(self, def => def.form)
    }

    pub fn is_extension(&self) -> bool {
        self.form().is_extension()
    }

    pub fn description(&self) -> Option<&Description> {
        each_type_definition!(self, def => def.description.as_ref())
    }

    pub fn directives(&self) -> &[Arc<Directive>] {
        each_type_definition!(self, def => &def.directives)
    }

    pub fn meta(&self) -> &NodeMeta {
        each_type_definition!(self, def => &def.meta)
    }

    pub fn location(&self) -> Option<&SourceLocation> {
        self.meta().location.as_ref()
    }

    pub fn type_kind(&self) -> TypeKind {
        match self {
            TypeDefinition::Object(_) => TypeKind::Object,
            TypeDefinition::Interface(_) => TypeKind::Interface,
            TypeDefinition::Union(_) => TypeKind::Union,
            TypeDefinition::Enum(_) => TypeKind::Enum,
            TypeDefinition::Scalar(_) => TypeKind::Scalar,
            TypeDefinition::InputObject(_) => TypeKind::InputObject,
        }
    }

    /// The object or interface view of this definition, if it has one.
    pub fn as_implementing_type(&self) -> Option<&dyn ImplementingType> {
        match self {
            TypeDefinition::Object(def) => Some(def.as_ref()),
            TypeDefinition::Interface(def) => Some(def.as_ref()),
            _ => None,
        }
    }

    pub fn to_source(&self) -> String {
        Node::from(self.clone()).to_source()
    }
}

impl From<TypeDefinition> for Node {
    fn from(value: TypeDefinition) -> Self {
        match value {
            TypeDefinition::Object(def) => Node::ObjectTypeDefinition(def),
            TypeDefinition::Interface(def) => Node::InterfaceTypeDefinition(def),
            TypeDefinition::Union(def) => Node::UnionTypeDefinition(def),
            TypeDefinition::Enum(def) => Node::EnumTypeDefinition(def),
            TypeDefinition::Scalar(def) => Node::ScalarTypeDefinition(def),
            TypeDefinition::InputObject(def) => Node::InputObjectTypeDefinition(def),
        }
    }
}

impl FromNode for TypeDefinition {
    fn from_node(node: Node) -> Result<Self, Node> {
        Ok(match node {
            Node::ObjectTypeDefinition(def) => TypeDefinition::Object(def),
            Node::InterfaceTypeDefinition(def) => TypeDefinition::Interface(def),
            Node::UnionTypeDefinition(def) => TypeDefinition::Union(def),
            Node::EnumTypeDefinition(def) => TypeDefinition::Enum(def),
            Node::ScalarTypeDefinition(def) => TypeDefinition::Scalar(def),
            Node::InputObjectTypeDefinition(def) => TypeDefinition::InputObject(def),
            other => return Err(other),
        })
    }
}
