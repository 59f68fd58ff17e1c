/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the tree the parser produces
///
/// Submodules:
/// - ast: Node ids, the node tagged union and the session arena
/// - expressions: Expression payloads and their constructors
/// - statements: Statement payloads and their constructors
/// - visitor: The before/on/after traversal protocol
/// - replace: In-place subtree substitution
pub mod ast;
pub mod expressions;
pub mod replace;
pub mod statements;
pub mod visitor;

#[cfg(test)]
mod tests;
