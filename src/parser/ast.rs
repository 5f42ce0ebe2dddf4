// AST (Abstract Syntax Tree) definitions for the minimal C subset

/// Function parameter: a (type, name) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub type_name: String,
    pub name: String,
}

/// Discriminant of [`Node`] variants, for kind-agnostic consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Block,
    VarDecl,
    FunctionDef,
    Call,
    If,
    For,
    Return,
    Empty,
    Literal,
    Identifier,
    BinaryOp,
    UnaryOp,
}

/// AST nodes representing statements and expressions.
///
/// The tree is strictly ownership-shaped: every node owns its children
/// exclusively through `Box`/`Vec`, no sharing and no back-references, so
/// dropping the root releases every node exactly once. Nodes are immutable
/// after construction; there is no mutation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Ordered sequence of statements. Doubles as the parse root and as
    /// function/loop bodies; may be empty.
    Block { statements: Vec<Node> },
    /// `int name [= init];` — the type is always `"int"` today.
    VarDecl {
        type_name: String,
        name: String,
        init: Option<Box<Node>>,
    },
    /// `int name(params) { body }` — exactly one body block.
    FunctionDef {
        return_type: String,
        name: String,
        params: Vec<Param>,
        body: Box<Node>,
    },
    /// Call expression; argument count is not checked against any
    /// declaration.
    Call { name: String, args: Vec<Node> },
    If {
        condition: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Option<Box<Node>>,
    },
    /// All four clauses are required by the grammar.
    For {
        init: Box<Node>,
        condition: Box<Node>,
        update: Box<Node>,
        body: Box<Node>,
    },
    Return { expr: Option<Box<Node>> },
    /// Reserved statement kind from the original node set; the current
    /// grammar never produces it.
    Empty,
    Literal { value: String },
    Identifier { name: String },
    /// Binary operator keyed by its token text. `left` is `None` only for
    /// unary `!`, which the original models as a binary operator with an
    /// absent left operand; that shape is preserved for consumers.
    BinaryOp {
        op: String,
        left: Option<Box<Node>>,
        right: Box<Node>,
    },
    /// Postfix `++` with exactly one operand.
    UnaryOp { op: String, operand: Box<Node> },
}

impl Node {
    /// The kind tag of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Block { .. } => NodeKind::Block,
            Node::VarDecl { .. } => NodeKind::VarDecl,
            Node::FunctionDef { .. } => NodeKind::FunctionDef,
            Node::Call { .. } => NodeKind::Call,
            Node::If { .. } => NodeKind::If,
            Node::For { .. } => NodeKind::For,
            Node::Return { .. } => NodeKind::Return,
            Node::Empty => NodeKind::Empty,
            Node::Literal { .. } => NodeKind::Literal,
            Node::Identifier { .. } => NodeKind::Identifier,
            Node::BinaryOp { .. } => NodeKind::BinaryOp,
            Node::UnaryOp { .. } => NodeKind::UnaryOp,
        }
    }

    /// Generic child list for kind-agnostic traversal.
    ///
    /// Only statement blocks expose untyped children; every other variant
    /// is accessed through its typed fields.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Block { statements } => statements,
            _ => &[],
        }
    }
}
