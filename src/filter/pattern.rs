// Filter pattern compilation
//
// A filter is a space-separated list of terms, each one a full regular
// expression. Terms are OR-ed: a name matches if any term matches it.
// Matching is unanchored, so `alph` matches `alpha`.

use regex::Regex;

/// A compiled set of filter terms
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    terms: Vec<Regex>,
}

impl PatternSet {
    /// Compile a filter string into its terms
    ///
    /// Splits on runs of whitespace and discards empty tokens. A token that
    /// is not a valid regular expression is skipped with a warning rather
    /// than aborting the whole filter - a keystroke must never crash the
    /// handler. A non-empty filter whose every term is invalid matches
    /// nothing.
    pub fn compile(pattern: &str) -> Self {
        let mut terms = Vec::new();

        for token in pattern.split_whitespace() {
            match Regex::new(token) {
                Ok(re) => terms.push(re),
                Err(e) => {
                    tracing::warn!("skipping invalid filter term {:?}: {}", token, e);
                }
            }
        }

        Self { terms }
    }

    /// Whether any term matches the given name
    pub fn matches(&self, name: &str) -> bool {
        self.terms.iter().any(|re| re.is_match(name))
    }

    /// Number of successfully compiled terms
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_term_substring_match() {
        let set = PatternSet::compile("alph");
        assert!(set.matches("alpha"));
        assert!(!set.matches("beta"));
    }

    #[test]
    fn test_multi_term_is_or() {
        let set = PatternSet::compile("foo bar");
        assert!(set.matches("foo"));
        assert!(set.matches("bar"));
        assert!(set.matches("rebar"));
        assert!(!set.matches("baz"));
    }

    #[test]
    fn test_whitespace_runs_and_empty_tokens() {
        let set = PatternSet::compile("  foo \t  bar  ");
        assert_eq!(set.len(), 2);

        let blank = PatternSet::compile("   ");
        assert!(blank.is_empty());
    }

    #[test]
    fn test_terms_are_real_regexes() {
        let set = PatternSet::compile("^al.*a$");
        assert!(set.matches("alpha"));
        assert!(!set.matches("alphabet"));
    }

    #[test]
    fn test_invalid_term_is_skipped() {
        // `(` alone is not a valid regex; the valid term still works
        let set = PatternSet::compile("( alpha");
        assert_eq!(set.len(), 1);
        assert!(set.matches("alpha"));
        assert!(!set.matches("beta"));
    }

    #[test]
    fn test_all_terms_invalid_matches_nothing() {
        let set = PatternSet::compile("( [");
        assert!(set.is_empty());
        assert!(!set.matches("alpha"));
    }

    #[test]
    fn test_match_all_pattern() {
        let set = PatternSet::compile(".*");
        assert!(set.matches("anything"));
        assert!(set.matches(""));
    }
}
