use crate::ast::ArrayValue;
use crate::ast::BooleanValue;
use crate::ast::EnumValue;
use crate::ast::FloatValue;
use crate::ast::FromNode;
use crate::ast::IntValue;
use crate::ast::Node;
use crate::ast::NullValue;
use crate::ast::ObjectValue;
use crate::ast::StringValue;
use crate::ast::VariableReference;
use crate::printer::SdlPrinter;
use serde::Deserialize;
use serde::Serialize;
use std::sync::Arc;

/// A GraphQL input value.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Value {
    Int(Arc<IntValue>),
    Float(Arc<FloatValue>),
    String(Arc<StringValue>),
    Boolean(Arc<BooleanValue>),
    Null(Arc<NullValue>),
    Enum(Arc<EnumValue>),
    Array(Arc<ArrayValue>),
    Object(Arc<ObjectValue>),
    Variable(Arc<VariableReference>),
}

impl Value {
    pub fn print_to(&self, printer: &mut SdlPrinter) {
        Node::from(self.clone()).print_to(printer);
    }

    /// Whether this value (or any value nested in it) references a variable.
    pub fn contains_variables(&self) -> bool {
        match self {
            Value::Variable(_) => true,
            Value::Array(array) => array.values.iter().any(Value::contains_variables),
            Value::Object(object) => {
                object.fields.iter().any(|field| field.value.contains_variables())
            },
            _ => false,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null(Arc::default())
    }
}

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Int(v) => Node::IntValue(v),
            Value::Float(v) => Node::FloatValue(v),
            Value::String(v) => Node::StringValue(v),
            Value::Boolean(v) => Node::BooleanValue(v),
            Value::Null(v) => Node::NullValue(v),
            Value::Enum(v) => Node::EnumValue(v),
            Value::Array(v) => Node::ArrayValue(v),
            Value::Object(v) => Node::ObjectValue(v),
            Value::Variable(v) => Node::VariableReference(v),
        }
    }
}

impl FromNode for Value {
    fn from_node(node: Node) -> Result<Self, Node> {
        Ok(match node {
            Node::IntValue(v) => Value::Int(v),
            Node::FloatValue(v) => Value::Float(v),
            Node::StringValue(v) => Value::String(v),
            Node::BooleanValue(v) => Value::Boolean(v),
            Node::NullValue(v) => Value::Null(v),
            Node::EnumValue(v) => Value::Enum(v),
            Node::ArrayValue(v) => Value::Array(v),
            Node::ObjectValue(v) => Value::Object(v),
            Node::VariableReference(v) => Value::Variable(v),
            other => return Err(other),
        })
    }
}
