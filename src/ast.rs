use std::fmt;

use crate::interpreter::lexer::Token;

/// The root of a parsed source file: an ordered list of top-level statements.
///
/// Rendering a program with `Display` concatenates the canonical rendering of
/// each statement. Expressions render fully parenthesized, which makes the
/// rendering a faithful picture of the precedence the parser applied.
///
/// # Example
/// ```
/// use capuchin::interpreter::parser::core::Parser;
///
/// let (program, errors) = Parser::from_source("a + b * c; -a * b").parse_program();
///
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "(a + (b * c))((-a) * b)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A statement node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The `let` token.
        token: Token,
        /// The bound name.
        name:  Identifier,
        /// The initializer.
        value: Expression,
    },
    /// `return [<value>];`
    Return {
        /// The `return` token.
        token: Token,
        /// The returned expression, if any.
        value: Option<Expression>,
    },
    /// An expression evaluated for its value.
    Expression {
        /// The first token of the expression.
        token:      Token,
        /// The expression itself.
        expression: Expression,
    },
}

impl Statement {
    /// The token the statement was parsed from.
    #[must_use]
    pub const fn token(&self) -> &Token {
        match self {
            Self::Let { token, .. } | Self::Return { token, .. } | Self::Expression { token, .. } => {
                token
            },
        }
    }
}

/// A brace-delimited sequence of statements, used as the body of `if`,
/// `else` and function literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStatement {
    /// The opening `{` token.
    pub token:      Token,
    /// Statements inside the block.
    pub statements: Vec<Statement>,
}

/// A name reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// The identifier token.
    pub token: Token,
    /// The name, identical to the token literal.
    pub value: String,
}

impl Identifier {
    /// Builds an identifier from its token.
    #[must_use]
    pub fn from_token(token: Token) -> Self {
        let value = token.literal.clone();
        Self { token, value }
    }
}

/// An expression node.
///
/// Every variant keeps the token it started from. Children are owned
/// outright, so the tree has no sharing and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// An integer literal.
    Integer {
        /// The literal token.
        token: Token,
        /// The parsed value.
        value: i64,
    },
    /// `true` or `false`.
    Boolean {
        /// The literal token.
        token: Token,
        /// The parsed value.
        value: bool,
    },
    /// A string literal.
    Str {
        /// The literal token; its literal excludes the quotes.
        token: Token,
        /// The string contents.
        value: String,
    },
    /// A prefix operation such as `-x` or `!ok`.
    Prefix {
        /// The operator token.
        token:    Token,
        /// The operator.
        operator: PrefixOperator,
        /// The operand.
        right:    Box<Self>,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// The operator token.
        token:    Token,
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right:    Box<Self>,
    },
    /// `if (<condition>) { ... } else { ... }`
    If {
        /// The `if` token.
        token:       Token,
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated otherwise, when present.
        alternative: Option<BlockStatement>,
    },
    /// `fn(<params>) { <body> }`
    Function {
        /// The `fn` token.
        token:      Token,
        /// Parameter names, in order.
        parameters: Vec<Identifier>,
        /// The function body.
        body:       BlockStatement,
    },
    /// `<function>(<arguments>)`
    Call {
        /// The `(` token.
        token:     Token,
        /// The callee expression.
        function:  Box<Self>,
        /// Arguments, in order.
        arguments: Vec<Self>,
    },
    /// `[<elements>]`
    Array {
        /// The `[` token.
        token:    Token,
        /// Elements, in order.
        elements: Vec<Self>,
    },
    /// `{<key>: <value>, ...}`
    Hash {
        /// The `{` token.
        token: Token,
        /// Key/value pairs in source order.
        pairs: Vec<(Self, Self)>,
    },
    /// `<left>[<index>]`
    Index {
        /// The `[` token.
        token: Token,
        /// The indexed expression.
        left:  Box<Self>,
        /// The index expression.
        index: Box<Self>,
    },
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical NOT (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
            Self::Negate => write!(f, "-"),
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use InfixOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

/// Writes `items` separated by `", "`.
fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|s| write!(f, "{s}"))
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.statements.iter().try_for_each(|s| write!(f, "{s}"))
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::Return { value: Some(value),
                           .. } => write!(f, "return {value};"),
            Self::Return { value: None, .. } => write!(f, "return;"),
            Self::Expression { expression, .. } => write!(f, "{expression}"),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(ident) => write!(f, "{ident}"),
            Self::Integer { token, .. } | Self::Boolean { token, .. } | Self::Str { token, .. } => {
                write!(f, "{}", token.literal)
            },
            Self::Prefix { operator, right, .. } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right,
                          .. } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if {condition} {{ {consequence} }}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {alternative} }}")?;
                }
                Ok(())
            },
            Self::Function { parameters, body, .. } => {
                write!(f, "fn(")?;
                write_joined(f, parameters)?;
                write!(f, ") {{ {body} }}")
            },
            Self::Call { function,
                         arguments,
                         .. } => {
                write!(f, "{function}(")?;
                write_joined(f, arguments)?;
                write!(f, ")")
            },
            Self::Array { elements, .. } => {
                write!(f, "[")?;
                write_joined(f, elements)?;
                write!(f, "]")
            },
            Self::Hash { pairs, .. } => {
                write!(f, "{{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Index { left, index, .. } => write!(f, "({left}[{index}])"),
        }
    }
}
