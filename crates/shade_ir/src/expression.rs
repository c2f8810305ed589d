use shade_type::{
  definition::{ConstantId, LiteralId, ParameterId, TextureId, VariableId},
  types::DataType,
  value::LiteralValue,
};

use crate::operation::{AssignmentOperation, BinaryOperation, UnaryOperation};

/// Built-in shader operations recognized by call shape.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum IntrinsicFunction {
  /// `texture.Sample(coords)`
  Sample,
  /// `texture.Sample(coords, level)`
  SampleLevel,
}

impl IntrinsicFunction {
  pub fn name(&self) -> &'static str {
    match self {
      IntrinsicFunction::Sample => "Sample",
      IntrinsicFunction::SampleLevel => "SampleLevel",
    }
  }
}

/// A bound symbol. The id is the identity of the registered entry, never its name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VariableReference {
  Variable(VariableId),
  Parameter(ParameterId),
  Constant(ConstantId),
  Literal(LiteralId),
  Texture(TextureId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
  Assignment {
    left: Box<Expression>,
    operator: AssignmentOperation,
    right: Box<Expression>,
  },
  Binary {
    left: Box<Expression>,
    left_type: DataType,
    operator: BinaryOperation,
    right: Box<Expression>,
    right_type: DataType,
  },
  Unary {
    operand: Box<Expression>,
    operand_type: DataType,
    operator: UnaryOperation,
  },
  Indexer {
    target: Box<Expression>,
    arguments: Vec<Expression>,
  },
  Intrinsic {
    target: Option<Box<Expression>>,
    function: IntrinsicFunction,
    arguments: Vec<Expression>,
  },
  MemberReference {
    target: Box<Expression>,
    target_type: DataType,
    member: String,
  },
  ObjectCreation {
    data_type: DataType,
    arguments: Vec<Expression>,
  },
  Literal(LiteralValue),
  Variable(VariableReference),
  Cast {
    data_type: DataType,
    operand: Box<Expression>,
  },
  Conditional {
    condition: Box<Expression>,
    then_expression: Box<Expression>,
    else_expression: Box<Expression>,
  },
}

impl Expression {
  pub fn kind_name(&self) -> &'static str {
    match self {
      Expression::Assignment { .. } => "Assignment",
      Expression::Binary { .. } => "Binary",
      Expression::Unary { .. } => "Unary",
      Expression::Indexer { .. } => "Indexer",
      Expression::Intrinsic { .. } => "Intrinsic",
      Expression::MemberReference { .. } => "MemberReference",
      Expression::ObjectCreation { .. } => "ObjectCreation",
      Expression::Literal(_) => "Literal",
      Expression::Variable(_) => "Variable",
      Expression::Cast { .. } => "Cast",
      Expression::Conditional { .. } => "Conditional",
    }
  }
}
