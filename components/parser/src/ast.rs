//! Abstract Syntax Tree node definitions
//!
//! Nodes own their children by value and carry the [`Location`] they were
//! parsed from. Serialization writes a `"type"` field naming the node kind,
//! and leaves are written as the token they wrap.

use crate::lexer::{Token, TokenKind};
use core_types::Location;
use serde::Serialize;
use std::fmt;

/// AST node for Oreo statements and expressions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all_fields = "camelCase")]
pub enum Node {
    /// `{ statements }`
    BlockStatement {
        /// Statements in source order
        body: Vec<Node>,
        /// Source location
        loc: Location,
    },

    /// `let x = value` / `var x`
    VariableDeclaration {
        /// Declared name
        identifier: Token,
        /// Initializer
        value: Option<Box<Node>>,
        /// Source location
        loc: Location,
    },

    /// `if test body [else body | elseif ...]`
    IfStatement {
        /// Condition
        test: Box<Node>,
        /// Block or single statement
        consequent: Box<Node>,
        /// Block or chained `IfStatement`
        alternate: Option<Box<Node>>,
        /// Source location
        loc: Location,
    },

    /// `while test body`
    WhileStatement {
        /// Condition
        test: Box<Node>,
        /// Block or single statement
        consequent: Box<Node>,
        /// Source location
        loc: Location,
    },

    /// `do body while test`
    DoWhileStatement {
        /// Condition
        test: Box<Node>,
        /// Block or single statement
        body: Box<Node>,
        /// Source location
        loc: Location,
    },

    /// `for init, test[, update] body`
    ForStatement {
        /// Initializer statement
        init: Box<Node>,
        /// Loop condition
        test: Box<Node>,
        /// Update statement, `name++` when omitted in source
        update: Box<Node>,
        /// Block or single statement
        body: Box<Node>,
        /// Source location
        loc: Location,
    },

    /// `switch value { case ... }`
    SwitchStatement {
        /// Value being switched on
        identifier: Box<Node>,
        /// Cases in source order
        body: Vec<CaseStatement>,
        /// Source location
        loc: Location,
    },

    /// `fn name(params) body`
    FunctionDeclaration {
        /// Name, possibly a member chain such as `obj.method`
        identifier: Box<Node>,
        /// Parameter names
        arguments: Vec<Token>,
        /// Block or single statement
        body: Box<Node>,
        /// Source location
        loc: Location,
    },

    /// `fn (params) body`
    AnonymousFunctionDeclaration {
        /// Parameter names
        arguments: Vec<Token>,
        /// Block or single statement
        body: Box<Node>,
        /// Source location
        loc: Location,
    },

    /// `return [value]`
    ReturnStatement {
        /// Returned value
        statement: Option<Box<Node>>,
        /// Source location
        loc: Location,
    },

    /// `left op right`
    BinaryExpression {
        /// Operator
        operator: BinaryOperator,
        /// Left operand
        left: Box<Node>,
        /// Right operand
        right: Box<Node>,
        /// Source location
        loc: Location,
    },

    /// `!expression`
    UnaryExpression {
        /// Negated expression
        expression: Box<Node>,
        /// Source location
        loc: Location,
    },

    /// `x++` / `x--`
    UpdateExpression {
        /// Updated variable
        identifier: Token,
        /// `++` or `--`
        operator: UpdateOperator,
        /// Source location
        loc: Location,
    },

    /// `x = value`, `x += value`, ...
    AssignmentExpression {
        /// Assigned variable
        identifier: Token,
        /// Assignment operator
        operator: AssignmentOperator,
        /// Assigned value
        value: Box<Node>,
        /// Source location
        loc: Location,
    },

    /// `callee(arguments)`
    FunctionCall {
        /// Called expression
        identifier: Box<Node>,
        /// Argument expressions
        arguments: Vec<Node>,
        /// Source location
        loc: Location,
    },

    /// `target[index]`
    PropertyAccess {
        /// Indexed expression
        identifier: Box<Node>,
        /// Index expression
        index: Box<Node>,
        /// Source location
        loc: Location,
    },

    /// `target[index] = value`
    PropertyAssignment {
        /// Indexed expression
        identifier: Box<Node>,
        /// Index expression
        index: Box<Node>,
        /// Assigned value
        value: Box<Node>,
        /// Source location
        loc: Location,
    },

    /// `object.property` / `object:property`
    ObjectExpression {
        /// Accessed object
        object: Box<Node>,
        /// Property, possibly itself a call or further access
        property: Box<Node>,
        /// Separator used
        expression_type: MemberSeparator,
        /// Source location
        loc: Location,
    },

    /// `[a, b, c]`
    ArrayExpression {
        /// Element expressions
        elements: Vec<Node>,
        /// Source location
        loc: Location,
    },

    /// `{ [key] = value, name = value, item }`
    ObjectLiteralExpression {
        /// Entries in source order
        entries: Vec<ObjectEntry>,
        /// Source location
        loc: Location,
    },

    /// `()`
    EmptyExpression {
        /// Source location
        loc: Location,
    },

    /// `case`/`default` entry
    #[serde(untagged)]
    CaseStatement(CaseStatement),

    /// Literal, identifier, operator or comment passed through unchanged
    #[serde(untagged)]
    Leaf(Token),
}

impl Node {
    /// Source location of the node
    pub fn loc(&self) -> Location {
        match self {
            Node::BlockStatement { loc, .. }
            | Node::VariableDeclaration { loc, .. }
            | Node::IfStatement { loc, .. }
            | Node::WhileStatement { loc, .. }
            | Node::DoWhileStatement { loc, .. }
            | Node::ForStatement { loc, .. }
            | Node::SwitchStatement { loc, .. }
            | Node::FunctionDeclaration { loc, .. }
            | Node::AnonymousFunctionDeclaration { loc, .. }
            | Node::ReturnStatement { loc, .. }
            | Node::BinaryExpression { loc, .. }
            | Node::UnaryExpression { loc, .. }
            | Node::UpdateExpression { loc, .. }
            | Node::AssignmentExpression { loc, .. }
            | Node::FunctionCall { loc, .. }
            | Node::PropertyAccess { loc, .. }
            | Node::PropertyAssignment { loc, .. }
            | Node::ObjectExpression { loc, .. }
            | Node::ArrayExpression { loc, .. }
            | Node::ObjectLiteralExpression { loc, .. }
            | Node::EmptyExpression { loc } => *loc,
            Node::CaseStatement(case) => case.loc,
            Node::Leaf(token) => token.loc,
        }
    }

    /// Name of the node kind, as written to the `"type"` field
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::BlockStatement { .. } => "BlockStatement",
            Node::VariableDeclaration { .. } => "VariableDeclaration",
            Node::IfStatement { .. } => "IfStatement",
            Node::WhileStatement { .. } => "WhileStatement",
            Node::DoWhileStatement { .. } => "DoWhileStatement",
            Node::ForStatement { .. } => "ForStatement",
            Node::SwitchStatement { .. } => "SwitchStatement",
            Node::FunctionDeclaration { .. } => "FunctionDeclaration",
            Node::AnonymousFunctionDeclaration { .. } => "AnonymousFunctionDeclaration",
            Node::ReturnStatement { .. } => "ReturnStatement",
            Node::BinaryExpression { .. } => "BinaryExpression",
            Node::UnaryExpression { .. } => "UnaryExpression",
            Node::UpdateExpression { .. } => "UpdateExpression",
            Node::AssignmentExpression { .. } => "AssignmentExpression",
            Node::FunctionCall { .. } => "FunctionCall",
            Node::PropertyAccess { .. } => "PropertyAccess",
            Node::PropertyAssignment { .. } => "PropertyAssignment",
            Node::ObjectExpression { .. } => "ObjectExpression",
            Node::ArrayExpression { .. } => "ArrayExpression",
            Node::ObjectLiteralExpression { .. } => "ObjectLiteralExpression",
            Node::EmptyExpression { .. } => "EmptyExpression",
            Node::CaseStatement(_) => "CaseStatement",
            Node::Leaf(token) => match token.kind {
                TokenKind::Identifier(_) => "Identifier",
                TokenKind::Keyword(_) => "Keyword",
                TokenKind::NumberLiteral(_) => "NumberLiteral",
                TokenKind::StringLiteral { .. } => "StringLiteral",
                TokenKind::BooleanLiteral(_) => "BooleanLiteral",
                TokenKind::Operator(_) => "Operator",
                TokenKind::Punctuation(_) => "Punctuation",
                TokenKind::CommentLine(_) => "CommentLine",
                TokenKind::MultiLineComment(_) => "MultiLineComment",
            },
        }
    }

    /// Token text for leaves, the kind name otherwise
    pub fn summary(&self) -> String {
        match self {
            Node::Leaf(token) => token.text(),
            Node::ObjectExpression {
                object,
                property,
                expression_type,
                ..
            } => format!("{}{}{}", object.summary(), expression_type, property.summary()),
            Node::CaseStatement(case) => case.summary(),
            other => other.kind_name().to_string(),
        }
    }

    /// The wrapped token of a leaf
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Node::Leaf(token) => Some(token),
            _ => None,
        }
    }

    /// True for a leaf wrapping an identifier
    pub fn is_identifier(&self) -> bool {
        self.as_token().is_some_and(Token::is_identifier)
    }
}

impl From<Token> for Node {
    fn from(token: Token) -> Self {
        Node::Leaf(token)
    }
}

/// A `case` or `default` entry of a switch
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub struct CaseStatement {
    /// `case` or `default`
    pub case_type: CaseType,
    /// Matched value(s)
    pub identifier: CaseMatch,
    /// Block or single statement
    pub body: Box<Node>,
    /// Source location
    pub loc: Location,
}

impl CaseStatement {
    /// Short rendering such as `case 1` or `default`
    pub fn summary(&self) -> String {
        match &self.identifier {
            CaseMatch::None => self.case_type.to_string(),
            CaseMatch::Single(value) => format!("{} {}", self.case_type, value.summary()),
            CaseMatch::Alternatives(values) => {
                let values: Vec<String> = values.iter().map(Node::summary).collect();
                format!("{} {}", self.case_type, values.join(" | "))
            }
        }
    }
}

/// Which keyword introduced a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseType {
    /// `case value`
    Case,
    /// `default`
    Default,
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseType::Case => f.write_str("case"),
            CaseType::Default => f.write_str("default"),
        }
    }
}

/// Values matched by a case
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CaseMatch {
    /// `default` matches nothing explicitly
    None,
    /// `case value`
    Single(Box<Node>),
    /// `case a | b | c`
    Alternatives(Vec<Node>),
}

/// One entry of an object literal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectEntry {
    /// Key expression, or the value itself for array-style entries
    pub identifier: Node,
    /// Key was written as `[expr]`
    pub computed: bool,
    /// No `= value` was given
    pub is_array_style: bool,
    /// Value after `=`
    pub value: Option<Node>,
}

/// Binary operators, in increasing binding strength
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOperator {
    /// `=`
    #[serde(rename = "=")]
    Assign,
    /// `||`
    #[serde(rename = "||")]
    Or,
    /// `&&`
    #[serde(rename = "&&")]
    And,
    /// `<`
    #[serde(rename = "<")]
    Less,
    /// `>`
    #[serde(rename = ">")]
    Greater,
    /// `<=`
    #[serde(rename = "<=")]
    LessEqual,
    /// `>=`
    #[serde(rename = ">=")]
    GreaterEqual,
    /// `==`
    #[serde(rename = "==")]
    Equal,
    /// `!=`
    #[serde(rename = "!=")]
    NotEqual,
    /// `+`
    #[serde(rename = "+")]
    Add,
    /// `-`
    #[serde(rename = "-")]
    Subtract,
    /// `^`
    #[serde(rename = "^")]
    Power,
    /// `*`
    #[serde(rename = "*")]
    Multiply,
    /// `/`
    #[serde(rename = "/")]
    Divide,
    /// `%`
    #[serde(rename = "%")]
    Modulo,
    /// `..`
    #[serde(rename = "..")]
    Concat,
}

impl BinaryOperator {
    /// Operator spelled `symbol`
    pub fn from_symbol(symbol: &str) -> Option<BinaryOperator> {
        let operator = match symbol {
            "=" => BinaryOperator::Assign,
            "||" => BinaryOperator::Or,
            "&&" => BinaryOperator::And,
            "<" => BinaryOperator::Less,
            ">" => BinaryOperator::Greater,
            "<=" => BinaryOperator::LessEqual,
            ">=" => BinaryOperator::GreaterEqual,
            "==" => BinaryOperator::Equal,
            "!=" => BinaryOperator::NotEqual,
            "+" => BinaryOperator::Add,
            "-" => BinaryOperator::Subtract,
            "^" => BinaryOperator::Power,
            "*" => BinaryOperator::Multiply,
            "/" => BinaryOperator::Divide,
            "%" => BinaryOperator::Modulo,
            ".." => BinaryOperator::Concat,
            _ => return None,
        };
        Some(operator)
    }

    /// Source spelling
    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Assign => "=",
            BinaryOperator::Or => "||",
            BinaryOperator::And => "&&",
            BinaryOperator::Less => "<",
            BinaryOperator::Greater => ">",
            BinaryOperator::LessEqual => "<=",
            BinaryOperator::GreaterEqual => ">=",
            BinaryOperator::Equal => "==",
            BinaryOperator::NotEqual => "!=",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Power => "^",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
            BinaryOperator::Concat => "..",
        }
    }

    /// Binding strength; higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Assign => 1,
            BinaryOperator::Or => 2,
            BinaryOperator::And => 3,
            BinaryOperator::Less
            | BinaryOperator::Greater
            | BinaryOperator::LessEqual
            | BinaryOperator::GreaterEqual
            | BinaryOperator::Equal
            | BinaryOperator::NotEqual => 7,
            BinaryOperator::Add | BinaryOperator::Subtract => 10,
            BinaryOperator::Power => 15,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulo => 20,
            BinaryOperator::Concat => 30,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assignment operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssignmentOperator {
    /// `=`
    #[serde(rename = "=")]
    Assign,
    /// `+=`
    #[serde(rename = "+=")]
    AddAssign,
    /// `-=`
    #[serde(rename = "-=")]
    SubAssign,
    /// `*=`
    #[serde(rename = "*=")]
    MulAssign,
    /// `/=`
    #[serde(rename = "/=")]
    DivAssign,
}

impl AssignmentOperator {
    /// Compound operator whose arithmetic part is `symbol`
    pub fn compound(symbol: &str) -> Option<AssignmentOperator> {
        match symbol {
            "+" => Some(AssignmentOperator::AddAssign),
            "-" => Some(AssignmentOperator::SubAssign),
            "*" => Some(AssignmentOperator::MulAssign),
            "/" => Some(AssignmentOperator::DivAssign),
            _ => None,
        }
    }

    /// Source spelling
    pub fn as_str(self) -> &'static str {
        match self {
            AssignmentOperator::Assign => "=",
            AssignmentOperator::AddAssign => "+=",
            AssignmentOperator::SubAssign => "-=",
            AssignmentOperator::MulAssign => "*=",
            AssignmentOperator::DivAssign => "/=",
        }
    }
}

/// `++` or `--`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UpdateOperator {
    /// `++`
    #[serde(rename = "++")]
    Increment,
    /// `--`
    #[serde(rename = "--")]
    Decrement,
}

/// Separator of a member access
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MemberSeparator {
    /// `object.property`
    #[serde(rename = ".")]
    Dot,
    /// `object:method`
    #[serde(rename = ":")]
    Colon,
}

impl MemberSeparator {
    /// Separator spelled `c`
    pub fn from_char(c: char) -> Option<MemberSeparator> {
        match c {
            '.' => Some(MemberSeparator::Dot),
            ':' => Some(MemberSeparator::Colon),
            _ => None,
        }
    }
}

impl fmt::Display for MemberSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemberSeparator::Dot => f.write_str("."),
            MemberSeparator::Colon => f.write_str(":"),
        }
    }
}
