//! Read-only AST printer
//!
//! Renders a parsed tree as an indented structural dump, one node per line
//! with two-space indentation per depth level, framed by banner lines.
//! Traversal is pure: kind dispatch plus typed field access, no mutation,
//! so rendering the same tree twice yields identical output.

use crate::parser::ast::Node;

/// Renders [`Node`] trees into their structural dump.
pub struct AstPrinter {
    out: String,
}

impl AstPrinter {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    /// Render the whole tree, consuming the printer.
    pub fn render(mut self, root: &Node) -> String {
        self.out.push_str("===== AST Structure =====\n");
        self.node(root, 0);
        self.out.push_str("=========================\n");
        self.out
    }

    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.out.push_str("  ");
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn node(&mut self, node: &Node, depth: usize) {
        match node {
            Node::Block { statements } => {
                self.line(depth, "StatementBlock");
                for statement in statements {
                    self.node(statement, depth + 1);
                }
            }
            Node::FunctionDef {
                return_type,
                name,
                params,
                body,
            } => {
                let params = params
                    .iter()
                    .map(|p| format!("{} {}", p.type_name, p.name))
                    .collect::<Vec<_>>()
                    .join(", ");
                self.line(
                    depth,
                    &format!("FunctionDeclaration: {} {}({})", return_type, name, params),
                );
                self.node(body, depth + 1);
            }
            Node::VarDecl {
                type_name,
                name,
                init,
            } => match init {
                Some(expr) => {
                    self.line(depth, &format!("VariableDeclaration: {} {} =", type_name, name));
                    self.node(expr, depth + 1);
                }
                None => {
                    self.line(depth, &format!("VariableDeclaration: {} {}", type_name, name));
                }
            },
            Node::Return { expr } => {
                self.line(depth, "ReturnStatement");
                if let Some(expr) = expr {
                    self.node(expr, depth + 1);
                }
            }
            Node::Empty => self.line(depth, "EmptyStatement"),
            Node::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.line(depth, "IfStatement");
                self.line(depth + 1, "Condition:");
                self.node(condition, depth + 2);
                self.line(depth + 1, "ThenBlock:");
                self.node(then_branch, depth + 2);
                if let Some(else_branch) = else_branch {
                    self.line(depth + 1, "ElseBlock:");
                    self.node(else_branch, depth + 2);
                }
            }
            Node::For {
                init,
                condition,
                update,
                body,
            } => {
                self.line(depth, "ForStatement");
                self.line(depth + 1, "Initializer:");
                self.node(init, depth + 2);
                self.line(depth + 1, "Condition:");
                self.node(condition, depth + 2);
                self.line(depth + 1, "Update:");
                self.node(update, depth + 2);
                self.line(depth + 1, "Body:");
                self.node(body, depth + 2);
            }
            Node::Call { name, args } => {
                self.line(depth, &format!("FunctionCall: {}", name));
                for arg in args {
                    self.node(arg, depth + 1);
                }
            }
            Node::Literal { value } => {
                self.line(depth, &format!("LiteralExpression: {}", value));
            }
            Node::Identifier { name } => {
                self.line(depth, &format!("IdentifierExpression: {}", name));
            }
            Node::BinaryOp { op, left, right } => {
                self.line(depth, &format!("BinaryOperator: {}", op));
                if let Some(left) = left {
                    self.node(left, depth + 1);
                }
                self.node(right, depth + 1);
            }
            Node::UnaryOp { op, operand } => {
                self.line(depth, &format!("UnaryOperator: {}", op));
                self.line(depth + 1, "Operand:");
                self.node(operand, depth + 2);
            }
        }
    }
}

impl Default for AstPrinter {
    fn default() -> Self {
        Self::new()
    }
}
