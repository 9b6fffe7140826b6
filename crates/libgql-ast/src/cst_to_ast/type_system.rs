use crate::ast::DefinitionForm;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveLocation;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OperationKind;
use crate::ast::OperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::TypeName;
use crate::ast::UnionTypeDefinition;
use crate::ast::Value;
use crate::cst_to_ast::child_of_kind;
use crate::cst_to_ast::children_of_kind;
use crate::cst_to_ast::describe_position;
use crate::cst_to_ast::has_keyword;
use crate::cst_to_ast::Converter;
use libgql_syntax::ConcreteSyntaxNode;
use libgql_syntax::SyntaxKind;
use std::sync::Arc;

impl Converter<'_> {
    pub(crate) fn schema_definition<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
        form: DefinitionForm,
    ) -> Option<Arc<SchemaDefinition>> {
        Some(Arc::new(SchemaDefinition {
            meta: self.meta(node),
            form,
            description: self.description(node),
            directives: self.directives(node),
            operation_types: children_of_kind(node, SyntaxKind::OperationTypeDefinition)
                .filter_map(|child| self.operation_type_definition(child))
                .collect(),
        }))
    }

    fn operation_type_definition<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
    ) -> Option<Arc<OperationTypeDefinition>> {
        let keyword = child_of_kind(node, SyntaxKind::Keyword)?;
        let Some(operation) = OperationKind::from_keyword(&keyword.text()) else {
            log::trace!(
                "dropping operation type with unknown operation `{}`{}",
                keyword.text(),
                describe_position(node),
            );
            return None;
        };
        let Some(type_name) = child_of_kind(node, SyntaxKind::NamedType)
            .and_then(|named| self.type_name(named)) else {
            log::trace!(
                "dropping `{operation}` operation type without a type name{}",
                describe_position(node),
            );
            return None;
        };
        Some(Arc::new(OperationTypeDefinition {
            meta: self.meta(node),
            operation,
            type_name,
        }))
    }

    pub(crate) fn directive_definition<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
    ) -> Option<Arc<DirectiveDefinition>> {
        Some(Arc::new(DirectiveDefinition {
            meta: self.meta(node),
            description: self.description(node),
            name: Self::required_name(node)?,
            arguments: self.input_value_definitions(node),
            repeatable: has_keyword(node, "repeatable"),
            locations: children_of_kind(node, SyntaxKind::DirectiveLocation)
                .map(|location| Arc::new(DirectiveLocation {
                    meta: self.meta(location),
                    name: location.text().into_owned(),
                }))
                .collect(),
        }))
    }

    pub(crate) fn object_type_definition<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
        form: DefinitionForm,
    ) -> Option<Arc<ObjectTypeDefinition>> {
        Some(Arc::new(ObjectTypeDefinition {
            meta: self.meta(node),
            form,
            description: self.description(node),
            name: Self::required_name(node)?,
            implements: self.named_type_children(node),
            directives: self.directives(node),
            fields: self.field_definitions(node),
        }))
    }

    pub(crate) fn interface_type_definition<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
        form: DefinitionForm,
    ) -> Option<Arc<InterfaceTypeDefinition>> {
        Some(Arc::new(InterfaceTypeDefinition {
            meta: self.meta(node),
            form,
            description: self.description(node),
            name: Self::required_name(node)?,
            implements: self.named_type_children(node),
            directives: self.directives(node),
            fields: self.field_definitions(node),
        }))
    }

    pub(crate) fn union_type_definition<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
        form: DefinitionForm,
    ) -> Option<Arc<UnionTypeDefinition>> {
        Some(Arc::new(UnionTypeDefinition {
            meta: self.meta(node),
            form,
            description: self.description(node),
            name: Self::required_name(node)?,
            directives: self.directives(node),
            members: self.named_type_children(node),
        }))
    }

    pub(crate) fn enum_type_definition<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
        form: DefinitionForm,
    ) -> Option<Arc<EnumTypeDefinition>> {
        Some(Arc::new(EnumTypeDefinition {
            meta: self.meta(node),
            form,
            description: self.description(node),
            name: Self::required_name(node)?,
            directives: self.directives(node),
            values: children_of_kind(node, SyntaxKind::EnumValueDefinition)
                .filter_map(|child| self.enum_value_definition(child))
                .collect(),
        }))
    }

    fn enum_value_definition<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
    ) -> Option<Arc<EnumValueDefinition>> {
        Some(Arc::new(EnumValueDefinition {
            meta: self.meta(node),
            description: self.description(node),
            name: Self::required_name(node)?,
            directives: self.directives(node),
        }))
    }

    pub(crate) fn scalar_type_definition<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
        form: DefinitionForm,
    ) -> Option<Arc<ScalarTypeDefinition>> {
        Some(Arc::new(ScalarTypeDefinition {
            meta: self.meta(node),
            form,
            description: self.description(node),
            name: Self::required_name(node)?,
            directives: self.directives(node),
        }))
    }

    pub(crate) fn input_object_type_definition<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
        form: DefinitionForm,
    ) -> Option<Arc<InputObjectTypeDefinition>> {
        Some(Arc::new(InputObjectTypeDefinition {
            meta: self.meta(node),
            form,
            description: self.description(node),
            name: Self::required_name(node)?,
            directives: self.directives(node),
            fields: self.input_value_definitions(node),
        }))
    }

    // =========================================================================
    // Members
    // =========================================================================

    /// Direct `NamedType` children: implemented interfaces of object and
    /// interface types, members of unions.
    fn named_type_children<N: ConcreteSyntaxNode>(&self, node: &N) -> Vec<Arc<TypeName>> {
        children_of_kind(node, SyntaxKind::NamedType)
            .filter_map(|child| self.type_name(child))
            .collect()
    }

    fn field_definitions<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
    ) -> Vec<Arc<FieldDefinition>> {
        children_of_kind(node, SyntaxKind::FieldDefinition)
            .filter_map(|child| self.field_definition(child))
            .collect()
    }

    fn field_definition<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
    ) -> Option<Arc<FieldDefinition>> {
        let name = Self::required_name(node)?;
        let Some(field_type) = self.type_child(node) else {
            log::trace!(
                "dropping field definition `{name}` without a type{}",
                describe_position(node),
            );
            return None;
        };
        Some(Arc::new(FieldDefinition {
            meta: self.meta(node),
            description: self.description(node),
            name,
            arguments: self.input_value_definitions(node),
            field_type,
            directives: self.directives(node),
        }))
    }

    /// Direct `InputValueDefinition` children: arguments of fields and
    /// directives, fields of input objects.
    fn input_value_definitions<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
    ) -> Vec<Arc<InputValueDefinition>> {
        children_of_kind(node, SyntaxKind::InputValueDefinition)
            .filter_map(|child| self.input_value_definition(child))
            .collect()
    }

    fn input_value_definition<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
    ) -> Option<Arc<InputValueDefinition>> {
        let name = Self::required_name(node)?;
        let Some(value_type) = self.type_child(node) else {
            log::trace!(
                "dropping input value `{name}` without a type{}",
                describe_position(node),
            );
            return None;
        };
        Some(Arc::new(InputValueDefinition {
            meta: self.meta(node),
            description: self.description(node),
            name,
            value_type,
            default_value: self.default_value(node),
            directives: self.directives(node),
        }))
    }

    pub(crate) fn default_value<N: ConcreteSyntaxNode>(&self, node: &N) -> Option<Value> {
        self.value_child(child_of_kind(node, SyntaxKind::DefaultValue)?)
    }
}
