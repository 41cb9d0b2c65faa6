mod error;
mod nfa;
mod parser;
mod searcher;

pub use error::PatternError;
pub use nfa::Nfa;
pub use searcher::Searcher;

/// Shared surface of the two matching engines. [`Nfa`] matches the whole
/// candidate by automaton simulation; [`Searcher`] scans for an anchor-aware
/// match by recursive backtracking. Callers select an engine explicitly.
pub trait Engine {
    fn is_match(&self, str: &str) -> bool;
}

/// Compiles `pattern` and tests `str` against it in one call. Compile the
/// pattern once with [`Nfa::new`] when matching many candidates.
pub fn is_match(pattern: &str, str: &str) -> Result<bool, PatternError> {
    let nfa = Nfa::new(pattern)?;
    Ok(nfa.is_match(str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_match() {
        assert_eq!(is_match("a|b", "a"), Ok(true));
        assert_eq!(is_match("a|b", "b"), Ok(true));
        assert_eq!(is_match("a|b", "c"), Ok(false));
    }

    #[test]
    fn one_shot_malformed() {
        assert_eq!(is_match("(a|b", "a"), Err(PatternError::UnbalancedGroup));
    }

    #[test]
    fn engines_are_selected_explicitly() {
        let engines: Vec<Box<dyn Engine>> = vec![
            Box::new(Nfa::new("^ab$").unwrap()),
            Box::new(Searcher::new("^ab$")),
        ];

        // '^' and '$' are literals to the automaton engine but anchors to
        // the searcher; the same pattern means different things per engine
        assert_eq!(engines[0].is_match("^ab$"), true);
        assert_eq!(engines[0].is_match("ab"), false);
        assert_eq!(engines[1].is_match("ab"), true);
    }
}
