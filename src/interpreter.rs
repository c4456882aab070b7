/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the expression tree against an environment of variable
/// bindings, reducing each node as far as it can. Integer arithmetic is
/// applied to fully reduced operands; unbound variables survive evaluation
/// unchanged under the symbolic policy, so a result is itself an expression.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Manages variable bindings, unbound-name policy and cycle guarding.
/// - Reports runtime errors such as division by zero or symbolic operands in
///   strict positions.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful calculator elements such as
/// integers, identifiers and operator symbols. This is the first stage of
/// interpretation; both notations share it.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Classifies each token into the category the RPN builder dispatches on.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Two parsers share the token stream produced by the lexer: a stack-based
/// builder for postfix (RPN) input, and a recursive-descent parser for infix
/// input. Both produce the same `Expr` trees, so everything downstream is
/// notation-agnostic.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates operand counts and assignment targets, reporting errors with
///   location info.
pub mod parser;
