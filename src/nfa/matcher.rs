use super::{Nfa, StateSet};

pub(crate) struct Matcher<'a> {
    nfa: &'a Nfa,
}

impl<'a> Matcher<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        Matcher { nfa }
    }

    pub fn execute(&self, str: &str) -> bool {
        let mut current = self.nfa.closures[self.nfa.start_id].clone();

        for token in str.chars() {
            let mut next = StateSet::new();

            for id in current.iter() {
                if let Some(to_id) = self.nfa.states[*id].transitions.get(&token) {
                    next.extend(self.nfa.closures[*to_id].iter());
                }
            }

            current = next;
        }

        current.iter().any(|id| self.nfa.states[*id].is_end)
    }
}
