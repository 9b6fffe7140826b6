//! The immutable GraphQL AST.
//!
//! Every node is a plain struct with public fields and a [`NodeMeta`]
//! record (location, leading comments, provenance, free-form tags). Children
//! are held behind `Arc`, so cloning a subtree is cheap and transformations
//! share every untouched subtree with their input.
//!
//! Type-system definitions and their `extend` forms share one struct per
//! kind, told apart by [`DefinitionForm`].
//!
//! Nodes are built with [`Builder`] and changed copy-on-write with
//! [`AstNode::transform`] or [`AstNode::with_new_children`].

mod argument;
mod array_value;
mod ast_node;
mod boolean_value;
mod builder;
mod definition;
mod definition_form;
pub(crate) mod description;
mod directive;
mod directive_definition;
mod directive_location;
mod document;
mod enum_type_definition;
mod enum_value;
mod enum_value_definition;
mod field;
mod field_definition;
mod float_value;
mod fragment_definition;
mod fragment_spread;
mod inline_fragment;
mod input_object_type_definition;
mod input_value_definition;
pub(crate) mod int_value;
mod interface_type_definition;
mod list_type;
mod node;
mod node_children;
mod node_meta;
mod non_null_type;
mod null_value;
mod object_field;
mod object_type_definition;
mod object_value;
mod operation_definition;
mod operation_kind;
mod operation_type_definition;
mod scalar_type_definition;
mod schema_definition;
mod selection;
mod selection_set;
mod string_value;
mod type_annotation;
mod type_definition;
mod type_name;
mod union_type_definition;
mod value;
mod variable_definition;
mod variable_reference;

pub use argument::Argument;
pub use array_value::ArrayValue;
pub use ast_node::AstNode;
pub use boolean_value::BooleanValue;
pub use builder::Builder;
pub use definition::Definition;
pub use definition_form::DefinitionForm;
pub use description::Description;
pub use directive::Directive;
pub use directive_definition::DirectiveDefinition;
pub use directive_location::DirectiveLocation;
pub use document::Document;
pub use enum_type_definition::EnumTypeDefinition;
pub use enum_value::EnumValue;
pub use enum_value_definition::EnumValueDefinition;
pub use field::Field;
pub use field_definition::FieldDefinition;
pub use float_value::FloatValue;
pub use fragment_definition::FragmentDefinition;
pub use fragment_spread::FragmentSpread;
pub use inline_fragment::InlineFragment;
pub use input_object_type_definition::InputObjectTypeDefinition;
pub use input_value_definition::InputValueDefinition;
pub use int_value::IntValue;
pub use interface_type_definition::InterfaceTypeDefinition;
pub use list_type::ListType;
pub use node::deep_equal;
pub use node::FromNode;
pub use node::Node;
pub use node::NodeCategory;
pub use node::NodeKind;
pub use node_children::child_keys;
pub use node_children::ChildrenContractError;
pub use node_children::NodeChildrenContainer;
pub use node_meta::Comment;
pub use node_meta::NodeMeta;
pub use node_meta::Provenance;
pub use node_meta::SourceLocation;
pub use non_null_type::NonNullType;
pub use null_value::NullValue;
pub use object_field::ObjectField;
pub use object_type_definition::ObjectTypeDefinition;
pub use object_value::ObjectValue;
pub use operation_definition::OperationDefinition;
pub use operation_kind::OperationKind;
pub use operation_type_definition::OperationTypeDefinition;
pub use scalar_type_definition::ScalarTypeDefinition;
pub use schema_definition::SchemaDefinition;
pub use selection::Selection;
pub use selection_set::SelectionSet;
pub use string_value::StringValue;
pub use type_annotation::NullableType;
pub use type_annotation::Type;
pub use type_definition::ImplementingType;
pub use type_definition::TypeDefinition;
pub use type_definition::TypeKind;
pub use type_name::TypeName;
pub use union_type_definition::UnionTypeDefinition;
pub use value::Value;
pub use variable_definition::VariableDefinition;
pub use variable_reference::VariableReference;
