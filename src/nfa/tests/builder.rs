use super::super::*;

#[cfg(test)]
mod shape {
    use super::*;

    #[test]
    fn literal_is_two_states() {
        let nfa = Nfa::new("a").unwrap();

        assert_eq!(nfa.states.len(), 2);
        assert_eq!(nfa.states[nfa.start_id].transitions.len(), 1);
    }

    #[test]
    fn concat_reuses_operand_states() {
        // two literals joined by one epsilon edge, no extra states
        let nfa = Nfa::new("ab").unwrap();

        assert_eq!(nfa.states.len(), 4);
    }

    #[test]
    fn union_adds_fork_and_join() {
        let nfa = Nfa::new("a|b").unwrap();

        assert_eq!(nfa.states.len(), 6);
        assert_eq!(nfa.states[nfa.start_id].epsilons.len(), 2);
    }

    #[test]
    fn closure_allows_empty_entry() {
        let nfa = Nfa::new("a*").unwrap();

        assert_eq!(nfa.states.len(), 4);
        assert!(nfa.closures[nfa.start_id].contains(&nfa.end_id));
    }

    #[test]
    fn one_or_more_has_no_bypass() {
        let nfa = Nfa::new("a+").unwrap();

        assert_eq!(nfa.states.len(), 4);
        assert!(!nfa.closures[nfa.start_id].contains(&nfa.end_id));
    }

    #[test]
    fn group_brackets_add_no_states() {
        let grouped = Nfa::new("(ab)").unwrap();
        let plain = Nfa::new("ab").unwrap();

        assert_eq!(grouped.states.len(), plain.states.len());
    }

    #[test]
    fn exactly_one_accepting_state() {
        for pattern in ["a", "ab", "a|b", "a*", "a+b?", "(a|b)*c", ""] {
            let nfa = Nfa::new(pattern).unwrap();
            let accepting: Vec<usize> = (0..nfa.states.len())
                .filter(|id| nfa.states[*id].is_end)
                .collect();

            assert_eq!(accepting, vec![nfa.end_id]);
        }
    }

    #[test]
    fn closures_cover_cyclic_graphs() {
        // repetition introduces epsilon cycles; every closure must still be
        // finite and include its own state
        let nfa = Nfa::new("(a*)*").unwrap();

        for id in 0..nfa.states.len() {
            assert!(nfa.closures[id].contains(&id));
            assert!(nfa.closures[id].len() <= nfa.states.len());
        }
    }
}

#[cfg(test)]
mod malformed {
    use super::*;
    use crate::error::PatternError;

    fn run(pattern: &str) -> PatternError {
        Nfa::new(pattern).err().unwrap()
    }

    #[test]
    fn unbalanced_group() {
        assert_eq!(run("(a|b"), PatternError::UnbalancedGroup);
        assert_eq!(run("a)"), PatternError::UnbalancedGroup);
    }

    #[test]
    fn repetition_without_operand() {
        assert_eq!(run("*a"), PatternError::MissingOperand("closure"));
        assert_eq!(run("?"), PatternError::MissingOperand("zero-or-one"));
        assert_eq!(run("+"), PatternError::MissingOperand("one-or-more"));
    }

    #[test]
    fn union_without_operand() {
        assert_eq!(run("|"), PatternError::MissingOperand("union"));
        assert_eq!(run("a|"), PatternError::MissingOperand("union"));
        assert_eq!(run("|a"), PatternError::MissingOperand("union"));
    }
}
