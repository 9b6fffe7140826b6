/// The kind tag of a concrete syntax node.
///
/// Token-level kinds (`Name`, `Keyword`, `Punctuation`, `Comment`, and the
/// scalar literal kinds) are always leaves and carry raw source text. Every
/// other kind is a composite whose meaning is given by its ordered children.
///
/// Lists (arguments, directives, field definitions, union members, ...) are
/// flattened: their elements are direct children of the owning node,
/// interleaved with the punctuation that delimits them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SyntaxKind {
    // Tokens
    Comment,
    Keyword,
    Name,
    Punctuation,

    // Scalar literals (leaves)
    BooleanValue,
    EnumValue,
    FloatValue,
    IntValue,
    NullValue,
    StringValue,

    // Composite values
    ListValue,
    ObjectField,
    ObjectValue,
    Variable,

    // Types
    ListType,
    NamedType,
    NonNullType,

    // Shared
    Alias,
    Argument,
    DefaultValue,
    Description,
    Directive,
    TypeCondition,

    // Executable definitions
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    OperationDefinition,
    SelectionSet,
    VariableDefinition,

    // Type-system definitions
    DirectiveDefinition,
    DirectiveLocation,
    EnumTypeDefinition,
    EnumTypeExtension,
    EnumValueDefinition,
    FieldDefinition,
    InputObjectTypeDefinition,
    InputObjectTypeExtension,
    InputValueDefinition,
    InterfaceTypeDefinition,
    InterfaceTypeExtension,
    ObjectTypeDefinition,
    ObjectTypeExtension,
    OperationTypeDefinition,
    ScalarTypeDefinition,
    ScalarTypeExtension,
    SchemaDefinition,
    SchemaExtension,
    UnionTypeDefinition,
    UnionTypeExtension,

    Document,

    /// Tokens the parser could not place. Always a composite.
    Error,
}

impl SyntaxKind {
    /// Whether nodes of this kind are leaves carrying token text.
    pub fn is_token(&self) -> bool {
        matches!(
            self,
            Self::BooleanValue
                | Self::Comment
                | Self::DirectiveLocation
                | Self::EnumValue
                | Self::FloatValue
                | Self::IntValue
                | Self::Keyword
                | Self::Name
                | Self::NullValue
                | Self::Punctuation
                | Self::StringValue
        )
    }

    /// Whether this kind is a top-level definition or extension.
    pub fn is_definition(&self) -> bool {
        matches!(
            self,
            Self::DirectiveDefinition
                | Self::EnumTypeDefinition
                | Self::EnumTypeExtension
                | Self::FragmentDefinition
                | Self::InputObjectTypeDefinition
                | Self::InputObjectTypeExtension
                | Self::InterfaceTypeDefinition
                | Self::InterfaceTypeExtension
                | Self::ObjectTypeDefinition
                | Self::ObjectTypeExtension
                | Self::OperationDefinition
                | Self::ScalarTypeDefinition
                | Self::ScalarTypeExtension
                | Self::SchemaDefinition
                | Self::SchemaExtension
                | Self::UnionTypeDefinition
                | Self::UnionTypeExtension
        )
    }

    /// Whether this kind denotes a type reference.
    pub fn is_type(&self) -> bool {
        matches!(self, Self::ListType | Self::NamedType | Self::NonNullType)
    }

    /// Whether this kind denotes an input value literal.
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            Self::BooleanValue
                | Self::EnumValue
                | Self::FloatValue
                | Self::IntValue
                | Self::ListValue
                | Self::NullValue
                | Self::ObjectValue
                | Self::StringValue
                | Self::Variable
        )
    }
}
