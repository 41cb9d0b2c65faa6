use std::collections::{BTreeSet, HashMap};

use log::debug;

use self::{builder::Builder, matcher::Matcher};
use crate::error::PatternError;
use crate::parser::Parser;
use crate::Engine;

mod builder;
mod matcher;


/// Automaton engine: compiles the pattern into a state graph once, then
/// matches candidates by multi-state simulation. Whole-string semantics.
/// Immutable after construction, so one automaton may serve any number of
/// concurrent match calls.
#[derive(Clone)]
pub struct Nfa {
    pub(crate) states: Vec<State>,
    pub(crate) start_id: usize,
    pub(crate) end_id: usize,
    // epsilon closure of every state, frozen at build time
    pub(crate) closures: Vec<StateSet>,
}

impl Nfa {
    pub fn new(pattern: &str) -> Result<Nfa, PatternError> {
        let postfix = Parser::parse(pattern)?;
        let nfa = Builder::build(&postfix)?;

        debug!(
            "compiled pattern {:?} into an automaton of {} states",
            pattern,
            nfa.states.len()
        );
        Ok(nfa)
    }

    pub fn is_match(&self, str: &str) -> bool {
        let matcher = Matcher::new(self);
        matcher.execute(str)
    }
}

impl Engine for Nfa {
    fn is_match(&self, str: &str) -> bool {
        Nfa::is_match(self, str)
    }
}

#[derive(Clone)]
pub(crate) struct State {
    pub is_end: bool,
    pub transitions: HashMap<char, usize>,
    pub epsilons: Vec<usize>,
}

pub(crate) type StateSet = BTreeSet<usize>;
