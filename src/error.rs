use thiserror::Error;

/// Raised by the compile stages (annotation, postfix conversion, automaton
/// construction). A pattern that fails to compile never yields an automaton.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("unbalanced group parentheses")]
    UnbalancedGroup,

    #[error("{0} operator is missing an operand")]
    MissingOperand(&'static str),

    #[error("pattern does not reduce to a single expression")]
    UnresolvedExpression,
}
