use std::collections::{HashMap, VecDeque};

use super::{Nfa, State, StateSet};
use crate::error::PatternError;
use crate::parser::Token;

// Thompson construction: folds the postfix stream into one automaton through
// a stack of partial automata over a shared state arena.
pub(crate) struct Builder {
    states: Vec<State>,
    stack: Vec<Fragment>,
}

// a partial automaton; its states already live in the arena
#[derive(Clone, Copy)]
struct Fragment {
    start_id: usize,
    end_id: usize,
}

impl Builder {
    pub fn build(postfix: &[Token]) -> Result<Nfa, PatternError> {
        let mut builder = Builder {
            states: vec![],
            stack: vec![],
        };

        for token in postfix {
            match *token {
                Token::Literal(symbol) => builder.push_literal(symbol),
                Token::Union => builder.apply_union()?,
                Token::Concat => builder.apply_concat()?,
                Token::Closure => builder.apply_closure()?,
                Token::ZeroOrOne => builder.apply_zero_or_one()?,
                Token::OneOrMore => builder.apply_one_or_more()?,
                // the parser never emits group brackets into postfix
                Token::GroupOpen | Token::GroupClose => unreachable!(),
            }
        }

        // an empty pattern accepts exactly the empty string
        if builder.stack.is_empty() {
            builder.push_empty();
        }

        let fragment = match builder.stack.pop() {
            Some(fragment) if builder.stack.is_empty() => fragment,
            _ => return Err(PatternError::UnresolvedExpression),
        };

        let closures = builder.freeze_closures();
        Ok(Nfa {
            states: builder.states,
            start_id: fragment.start_id,
            end_id: fragment.end_id,
            closures,
        })
    }

    fn push_state(&mut self) -> usize {
        let id = self.states.len();
        self.states.push(State {
            is_end: false,
            transitions: HashMap::new(),
            epsilons: Vec::new(),
        });
        id
    }

    fn pop_operand(&mut self, operator: Token) -> Result<Fragment, PatternError> {
        self.stack
            .pop()
            .ok_or(PatternError::MissingOperand(operator.name()))
    }

    // demote an operand's accepting end and wire it into the new structure
    fn retire_end(&mut self, end_id: usize, to_id: usize) {
        self.states[end_id].is_end = false;
        self.states[end_id].epsilons.push(to_id);
    }

    fn push_literal(&mut self, symbol: char) {
        let start_id = self.push_state();
        let end_id = self.push_state();

        self.states[start_id].transitions.insert(symbol, end_id);
        self.states[end_id].is_end = true;

        self.stack.push(Fragment { start_id, end_id });
    }

    fn push_empty(&mut self) {
        let start_id = self.push_state();
        let end_id = self.push_state();

        self.states[start_id].epsilons.push(end_id);
        self.states[end_id].is_end = true;

        self.stack.push(Fragment { start_id, end_id });
    }

    fn apply_union(&mut self) -> Result<(), PatternError> {
        let b = self.pop_operand(Token::Union)?;
        let a = self.pop_operand(Token::Union)?;

        let start_id = self.push_state();
        let end_id = self.push_state();

        self.states[start_id].epsilons.push(a.start_id);
        self.states[start_id].epsilons.push(b.start_id);
        self.retire_end(a.end_id, end_id);
        self.retire_end(b.end_id, end_id);
        self.states[end_id].is_end = true;

        self.stack.push(Fragment { start_id, end_id });
        Ok(())
    }

    fn apply_concat(&mut self) -> Result<(), PatternError> {
        let b = self.pop_operand(Token::Concat)?;
        let a = self.pop_operand(Token::Concat)?;

        self.retire_end(a.end_id, b.start_id);

        self.stack.push(Fragment {
            start_id: a.start_id,
            end_id: b.end_id,
        });
        Ok(())
    }

    fn apply_closure(&mut self) -> Result<(), PatternError> {
        let inner = self.pop_operand(Token::Closure)?;

        let start_id = self.push_state();
        let end_id = self.push_state();

        self.states[start_id].epsilons.push(inner.start_id);
        self.states[start_id].epsilons.push(end_id);
        // loop back first, then leave
        self.states[inner.end_id].epsilons.push(inner.start_id);
        self.retire_end(inner.end_id, end_id);
        self.states[end_id].is_end = true;

        self.stack.push(Fragment { start_id, end_id });
        Ok(())
    }

    fn apply_zero_or_one(&mut self) -> Result<(), PatternError> {
        let inner = self.pop_operand(Token::ZeroOrOne)?;

        let start_id = self.push_state();
        let end_id = self.push_state();

        self.states[start_id].epsilons.push(inner.start_id);
        self.states[start_id].epsilons.push(end_id);
        // no loop back
        self.retire_end(inner.end_id, end_id);
        self.states[end_id].is_end = true;

        self.stack.push(Fragment { start_id, end_id });
        Ok(())
    }

    fn apply_one_or_more(&mut self) -> Result<(), PatternError> {
        let inner = self.pop_operand(Token::OneOrMore)?;

        let start_id = self.push_state();
        let end_id = self.push_state();

        // no bypass edge: at least one pass through the operand
        self.states[start_id].epsilons.push(inner.start_id);
        self.states[inner.end_id].epsilons.push(inner.start_id);
        self.retire_end(inner.end_id, end_id);
        self.states[end_id].is_end = true;

        self.stack.push(Fragment { start_id, end_id });
        Ok(())
    }

    fn freeze_closures(&self) -> Vec<StateSet> {
        (0..self.states.len())
            .map(|id| self.epsilon_closure(id))
            .collect()
    }

    // reachability over epsilon edges; the visited set bounds the walk even
    // when repetition operators have made the graph cyclic
    fn epsilon_closure(&self, start_id: usize) -> StateSet {
        let mut visited = StateSet::new();
        visited.insert(start_id);

        let mut q = VecDeque::new();
        q.push_back(start_id);

        while let Some(id) = q.pop_front() {
            for next_id in self.states[id].epsilons.iter() {
                if visited.insert(*next_id) {
                    q.push_back(*next_id);
                }
            }
        }

        visited
    }
}
