/// AST (Abstract Syntax Tree) module
/// Contains every node the parser can produce. Sugar never reaches this
/// module: `for`, `op=` and `++`/`--` are lowered before nodes are built.
///
/// Submodules:
/// - ast: The program root and the `Decl`, `Stmt` and `Expr` sum types
/// - expressions: Expression nodes and operator enums
/// - statements: Statement and declaration nodes
/// - printer: Canonical source and S-expression printers
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;

#[cfg(test)]
mod tests;
