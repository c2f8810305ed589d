#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AssignmentOperation {
  Assign,
  Add,
  Sub,
  Mul,
  Div,
  Mod,
  BitShiftLeft,
  BitShiftRight,
  BitAnd,
  BitOr,
  BitXor,
}

impl AssignmentOperation {
  pub fn symbol(&self) -> &'static str {
    match self {
      AssignmentOperation::Assign => "=",
      AssignmentOperation::Add => "+=",
      AssignmentOperation::Sub => "-=",
      AssignmentOperation::Mul => "*=",
      AssignmentOperation::Div => "/=",
      AssignmentOperation::Mod => "%=",
      AssignmentOperation::BitShiftLeft => "<<=",
      AssignmentOperation::BitShiftRight => ">>=",
      AssignmentOperation::BitAnd => "&=",
      AssignmentOperation::BitOr => "|=",
      AssignmentOperation::BitXor => "^=",
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperation {
  // Arithmetic
  Add,
  Sub,
  Mul,
  Div,
  Mod,

  // Logical
  And,
  Or,

  // Comparison
  Equal,
  NotEqual,
  LessThan,
  LessEqual,
  GreaterThan,
  GreaterEqual,

  // Bitwise
  BitAnd,
  BitOr,
  BitXor,
  BitShiftLeft,
  BitShiftRight,
}

impl BinaryOperation {
  pub fn symbol(&self) -> &'static str {
    match self {
      BinaryOperation::Add => "+",
      BinaryOperation::Sub => "-",
      BinaryOperation::Mul => "*",
      BinaryOperation::Div => "/",
      BinaryOperation::Mod => "%",
      BinaryOperation::And => "&&",
      BinaryOperation::Or => "||",
      BinaryOperation::Equal => "==",
      BinaryOperation::NotEqual => "!=",
      BinaryOperation::LessThan => "<",
      BinaryOperation::LessEqual => "<=",
      BinaryOperation::GreaterThan => ">",
      BinaryOperation::GreaterEqual => ">=",
      BinaryOperation::BitAnd => "&",
      BinaryOperation::BitOr => "|",
      BinaryOperation::BitXor => "^",
      BinaryOperation::BitShiftLeft => "<<",
      BinaryOperation::BitShiftRight => ">>",
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperation {
  Not,
  Neg,
  Plus,
  BitNot,
  PreIncrement,
  PreDecrement,
  PostIncrement,
  PostDecrement,
}

impl UnaryOperation {
  pub fn symbol(&self) -> &'static str {
    match self {
      UnaryOperation::Not => "!",
      UnaryOperation::Neg => "-",
      UnaryOperation::Plus => "+",
      UnaryOperation::BitNot => "~",
      UnaryOperation::PreIncrement | UnaryOperation::PostIncrement => "++",
      UnaryOperation::PreDecrement | UnaryOperation::PostDecrement => "--",
    }
  }

  pub fn is_postfix(&self) -> bool {
    matches!(self, UnaryOperation::PostIncrement | UnaryOperation::PostDecrement)
  }
}
