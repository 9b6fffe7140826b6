use crate::ast::Argument;
use crate::ast::Directive;
use crate::ast::Field;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::cst_to_ast::child_of_kind;
use crate::cst_to_ast::children_of_kind;
use crate::cst_to_ast::describe_position;
use crate::cst_to_ast::Converter;
use libgql_syntax::ConcreteSyntaxNode;
use libgql_syntax::SyntaxKind;
use std::sync::Arc;

impl Converter<'_> {
    /// Operations without an operation keyword are `query` shorthands.
    pub(crate) fn operation_definition<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
    ) -> Option<Arc<OperationDefinition>> {
        let operation = match child_of_kind(node, SyntaxKind::Keyword) {
            None => OperationKind::Query,
            Some(keyword) => match OperationKind::from_keyword(&keyword.text()) {
                Some(operation) => operation,
                None => {
                    log::trace!(
                        "dropping operation with unknown keyword `{}`{}",
                        keyword.text(),
                        describe_position(node),
                    );
                    return None;
                },
            },
        };
        Some(Arc::new(OperationDefinition {
            meta: self.meta(node),
            operation,
            name: Self::name(node),
            variable_definitions: children_of_kind(node, SyntaxKind::VariableDefinition)
                .filter_map(|child| self.variable_definition(child))
                .collect(),
            directives: self.directives(node),
            selection_set: self.selection_set(node),
        }))
    }

    pub(crate) fn fragment_definition<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
    ) -> Option<Arc<FragmentDefinition>> {
        let name = Self::required_name(node)?;
        let Some(type_condition) = self.type_condition(node) else {
            log::trace!(
                "dropping fragment `{name}` without a type condition{}",
                describe_position(node),
            );
            return None;
        };
        Some(Arc::new(FragmentDefinition {
            meta: self.meta(node),
            name,
            type_condition,
            directives: self.directives(node),
            selection_set: self.selection_set(node),
        }))
    }

    fn variable_definition<N: ConcreteSyntaxNode>(
        &self,
        node: &N,
    ) -> Option<Arc<VariableDefinition>> {
        let name = Self::required_name(child_of_kind(node, SyntaxKind::Variable)?)?;
        let Some(var_type) = self.type_child(node) else {
            log::trace!(
                "dropping variable `${name}` without a type{}",
                describe_position(node),
            );
            return None;
        };
        Some(Arc::new(VariableDefinition {
            meta: self.meta(node),
            name,
            var_type,
            default_value: self.default_value(node),
            directives: self.directives(node),
        }))
    }

    // =========================================================================
    // Selections
    // =========================================================================

    /// Converts the `SelectionSet` child of `node`, if it has one.
    fn selection_set<N: ConcreteSyntaxNode>(&self, node: &N) -> Option<Arc<SelectionSet>> {
        let set = child_of_kind(node, SyntaxKind::SelectionSet)?;
        let selections = set
            .children()
            .filter_map(|child| match child.kind() {
                SyntaxKind::Field => self.field(child).map(Selection::Field),
                SyntaxKind::FragmentSpread => {
                    self.fragment_spread(child).map(Selection::FragmentSpread)
                },
                SyntaxKind::InlineFragment => {
                    self.inline_fragment(child).map(Selection::InlineFragment)
                },
                _ => None,
            })
            .collect();
        Some(Arc::new(SelectionSet {
            meta: self.meta(set),
            selections,
        }))
    }

    fn field<N: ConcreteSyntaxNode>(&self, node: &N) -> Option<Arc<Field>> {
        Some(Arc::new(Field {
            meta: self.meta(node),
            alias: child_of_kind(node, SyntaxKind::Alias).and_then(Self::name),
            name: Self::required_name(node)?,
            arguments: self.arguments(node),
            directives: self.directives(node),
            selection_set: self.selection_set(node),
        }))
    }

    fn fragment_spread<N: ConcreteSyntaxNode>(&self, node: &N) -> Option<Arc<FragmentSpread>> {
        Some(Arc::new(FragmentSpread {
            meta: self.meta(node),
            name: Self::required_name(node)?,
            directives: self.directives(node),
        }))
    }

    fn inline_fragment<N: ConcreteSyntaxNode>(&self, node: &N) -> Option<Arc<InlineFragment>> {
        Some(Arc::new(InlineFragment {
            meta: self.meta(node),
            type_condition: self.type_condition(node),
            directives: self.directives(node),
            selection_set: self.selection_set(node),
        }))
    }

    // =========================================================================
    // Directives & arguments
    // =========================================================================

    pub(crate) fn directive<N: ConcreteSyntaxNode>(&self, node: &N) -> Option<Arc<Directive>> {
        Some(Arc::new(Directive {
            meta: self.meta(node),
            name: Self::required_name(node)?,
            arguments: self.arguments(node),
        }))
    }

    fn arguments<N: ConcreteSyntaxNode>(&self, node: &N) -> Vec<Arc<Argument>> {
        children_of_kind(node, SyntaxKind::Argument)
            .filter_map(|child| self.argument(child))
            .collect()
    }

    fn argument<N: ConcreteSyntaxNode>(&self, node: &N) -> Option<Arc<Argument>> {
        let name = Self::required_name(node)?;
        let Some(value) = self.value_child(node) else {
            log::trace!(
                "dropping argument `{name}` without a value{}",
                describe_position(node),
            );
            return None;
        };
        Some(Arc::new(Argument {
            meta: self.meta(node),
            name,
            value,
        }))
    }
}
