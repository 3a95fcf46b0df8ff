/// Syntax tree module
/// Contains the raw (undecorated) tree produced by the parser
///
/// Submodules:
/// - ast: Core node traits, wrappers and node-kind tags
/// - expressions: Definitions for the expression node types
/// - statements: Definitions for the statement node types
pub mod ast;
pub mod expressions;
pub mod statements;
