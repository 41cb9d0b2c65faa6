use log::trace;

use super::token::Token;
use crate::error::PatternError;

pub struct Parser;

impl Parser {
    /// Turns a pattern string into a postfix token stream ready for
    /// automaton construction.
    pub fn parse(pattern: &str) -> Result<Vec<Token>, PatternError> {
        let tokens = pattern.chars().map(Token::from).collect();
        let tokens = Self::annotate_concat(tokens);
        let postfix = Self::into_postfix(tokens)?;

        trace!("pattern {:?} converted to postfix {:?}", pattern, postfix);
        Ok(postfix)
    }

    /// Makes every implied concatenation explicit. No marker after a
    /// group-open or union, none before a token that binds to the preceding
    /// operand (repetitions, group-close, union).
    pub fn annotate_concat(tokens: Vec<Token>) -> Vec<Token> {
        let mut output = Vec::with_capacity(tokens.len() * 2);

        for (i, token) in tokens.iter().enumerate() {
            output.push(*token);

            if matches!(token, Token::GroupOpen | Token::Union) {
                continue;
            }

            if let Some(lookahead) = tokens.get(i + 1) {
                if matches!(
                    lookahead,
                    Token::Closure
                        | Token::ZeroOrOne
                        | Token::OneOrMore
                        | Token::GroupClose
                        | Token::Union
                ) {
                    continue;
                }

                output.push(Token::Concat);
            }
        }

        output
    }

    /// Shunting-yard reorder of the annotated stream into postfix. All
    /// operators are left-associative; ties pop the stack first.
    pub fn into_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, PatternError> {
        let mut output = Vec::with_capacity(tokens.len());
        let mut stack: Vec<Token> = Vec::new();

        for token in tokens {
            match token {
                Token::Literal(_) => output.push(token),
                Token::GroupOpen => stack.push(token),
                Token::GroupClose => loop {
                    match stack.pop() {
                        Some(Token::GroupOpen) => break,
                        Some(operator) => output.push(operator),
                        None => return Err(PatternError::UnbalancedGroup),
                    }
                },
                _ => {
                    while let Some(top) = stack.last().copied() {
                        if top.priority() < token.priority() {
                            break;
                        }
                        output.push(top);
                        stack.pop();
                    }
                    stack.push(token);
                }
            }
        }

        while let Some(operator) = stack.pop() {
            if matches!(operator, Token::GroupOpen) {
                return Err(PatternError::UnbalancedGroup);
            }
            output.push(operator);
        }

        Ok(output)
    }
}
