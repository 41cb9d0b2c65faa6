use crate::Engine;

// syntax
//
// '^'  anchor to start of text (leading only)
// '$'  anchor to end of text (trailing only)
// '.'  any single character
// '*'  zero-or-more of the preceding element, greedy
// '?'  zero-or-one of the preceding element, greedy
// '()' group; may carry '*' or '?', matched one body-width per round

/// Recursive backtracking engine. Unlike [`crate::Nfa`] this one has SEARCH
/// semantics: an unanchored pattern may match anywhere in the text. The two
/// engines are never combined; callers pick one by constructing it.
pub struct Searcher {
    pattern: Vec<char>,
}

impl Searcher {
    pub fn new(pattern: &str) -> Searcher {
        Searcher {
            pattern: pattern.chars().collect(),
        }
    }

    pub fn is_match(&self, str: &str) -> bool {
        let text: Vec<char> = str.chars().collect();

        match self.pattern.split_first() {
            Some((&'^', pattern)) => self.match_here(pattern, &text),
            _ => (0..=text.len()).any(|i| self.match_here(&self.pattern, &text[i..])),
        }
    }

    fn match_here(&self, pattern: &[char], text: &[char]) -> bool {
        if pattern.is_empty() {
            return true;
        }
        if text.is_empty() && pattern == ['$'] {
            return true;
        }
        if pattern.get(1) == Some(&'?') {
            return self.match_question(pattern, text);
        }
        if pattern.get(1) == Some(&'*') {
            return self.match_star(pattern, text);
        }
        if pattern[0] == '(' {
            return self.match_group(pattern, text);
        }

        Self::match_one(pattern.first(), text.first())
            && self.match_here(&pattern[1..], &text[1..])
    }

    fn match_one(pattern: Option<&char>, text: Option<&char>) -> bool {
        match (pattern, text) {
            (None, _) => true,
            (_, None) => false,
            (Some(p), Some(t)) => *p == '.' || p == t,
        }
    }

    fn match_question(&self, pattern: &[char], text: &[char]) -> bool {
        (Self::match_one(pattern.first(), text.first())
            && self.match_here(&pattern[2..], &text[1..]))
            || self.match_here(&pattern[2..], text)
    }

    fn match_star(&self, pattern: &[char], text: &[char]) -> bool {
        (Self::match_one(pattern.first(), text.first()) && self.match_here(pattern, &text[1..]))
            || self.match_here(&pattern[2..], text)
    }

    fn match_group(&self, pattern: &[char], text: &[char]) -> bool {
        let Some(group_end) = pattern.iter().position(|c| *c == ')') else {
            return false;
        };

        let group = &pattern[1..group_end];
        // each round consumes one body-width of text
        let (head, tail) = text.split_at(group.len().min(text.len()));

        match pattern.get(group_end + 1) {
            Some('?') => {
                let rest = &pattern[group_end + 2..];
                if group.is_empty() {
                    return self.match_here(rest, text);
                }
                (self.match_here(group, head) && self.match_here(rest, tail))
                    || self.match_here(rest, text)
            }
            Some('*') => {
                let rest = &pattern[group_end + 2..];
                if group.is_empty() {
                    return self.match_here(rest, text);
                }
                (self.match_here(group, head) && self.match_here(pattern, tail))
                    || self.match_here(rest, text)
            }
            _ => {
                let rest = &pattern[group_end + 1..];
                self.match_here(group, head) && self.match_here(rest, tail)
            }
        }
    }
}

impl Engine for Searcher {
    fn is_match(&self, str: &str) -> bool {
        Searcher::is_match(self, str)
    }
}
