// Tab filter widget
//
// Owns the tab registry, the filter text, and the injected persistence
// collaborator. Keyboard input arrives as resolved `KeyInput` values; every
// edit re-runs `update_styles`, which persists the trimmed filter and
// recomputes group visibility.
//
// The filter text lives here and nowhere else. The rendered input bar
// displays exactly this string, so there is no second live value that could
// drift out of sync with what is being matched.

pub mod key;
pub mod pattern;
pub mod registry;
pub mod store;

pub use key::{Handled, KeyInput};
pub use registry::{RegistryError, TabGroup, TabRegistry};
pub use store::FilterStore;

use pattern::PatternSet;

/// Compute per-group visibility in registry order
///
/// A group is visible when it carries the active marker (manually pinned
/// tabs stay visible during filtering) or when any filter term matches its
/// name. Pure: callers apply the result to whatever is displaying the tabs.
pub fn compute_visibility<'a, I>(tabs: I, patterns: &PatternSet) -> Vec<bool>
where
    I: IntoIterator<Item = (&'a str, bool)>,
{
    tabs.into_iter()
        .map(|(name, active)| active || patterns.matches(name))
        .collect()
}

/// The tab filter widget
pub struct TabFilter {
    registry: TabRegistry,
    filter: String,
    store: Box<dyn FilterStore>,
}

impl TabFilter {
    pub fn new(registry: TabRegistry, store: Box<dyn FilterStore>) -> Self {
        Self {
            registry,
            filter: String::new(),
            store,
        }
    }

    /// Current filter text, exactly as typed
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn registry(&self) -> &TabRegistry {
        &self.registry
    }

    pub fn groups(&self) -> &[TabGroup] {
        self.registry.groups()
    }

    /// Offer a resolved key input to the widget
    ///
    /// Modifier chords, Tab and non-text keys pass through untouched so the
    /// application can use them for focus and navigation. Everything else
    /// edits the filter and triggers a style update.
    pub fn handle_input(&mut self, input: KeyInput) -> Handled {
        match input {
            KeyInput::Modifier | KeyInput::Tab | KeyInput::Other => Handled::No,
            KeyInput::Enter => {
                self.filter.clear();
                self.update_styles();
                Handled::Yes
            }
            KeyInput::Backspace => {
                self.filter.pop();
                self.update_styles();
                Handled::Yes
            }
            KeyInput::Char(c) => {
                self.filter.push(c);
                self.update_styles();
                Handled::Yes
            }
        }
    }

    /// Replace the filter text wholesale and re-run the update
    ///
    /// Used by the application to apply a restored filter at startup.
    pub fn set_filter(&mut self, pattern: &str) {
        self.filter = pattern.to_string();
        self.update_styles();
    }

    /// Persist the trimmed filter and recompute group visibility
    ///
    /// The trimmed value is handed to the store on every update, even when
    /// empty. An empty filter matches everything; the match-all substitute
    /// is never persisted.
    pub fn update_styles(&mut self) {
        let trimmed = self.filter.trim().to_string();
        self.store.set_tab_filter(&trimmed);

        let effective = if trimmed.is_empty() {
            ".*"
        } else {
            trimmed.as_str()
        };
        let patterns = PatternSet::compile(effective);

        let visibility = compute_visibility(
            self.registry
                .groups()
                .iter()
                .map(|g| (g.name.as_str(), g.active)),
            &patterns,
        );

        for (group, visible) in self.registry.groups_mut().iter_mut().zip(visibility) {
            group.visible = visible;
        }
    }

    /// Move the active marker to the next visible tab
    ///
    /// Cycling is restricted to visible tabs. Moving the marker does not
    /// itself recompute visibility: a pinned-but-unmatched tab that loses
    /// the marker stays on screen until the next filter edit.
    pub fn cycle_active(&mut self) {
        let groups = self.registry.groups_mut();
        if groups.is_empty() {
            return;
        }

        let current = groups.iter().position(|g| g.active);
        let len = groups.len();
        let start = current.map(|i| i + 1).unwrap_or(0);

        for offset in 0..len {
            let idx = (start + offset) % len;
            if groups[idx].visible {
                if let Some(cur) = current {
                    groups[cur].active = false;
                }
                groups[idx].active = true;
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tabs::TabSpec;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Test double that records every persisted value
    #[derive(Default)]
    struct RecordingStore {
        calls: Rc<RefCell<Vec<String>>>,
    }

    impl FilterStore for RecordingStore {
        fn set_tab_filter(&mut self, pattern: &str) {
            self.calls.borrow_mut().push(pattern.to_string());
        }
    }

    fn widget(names: &[&str]) -> (TabFilter, Rc<RefCell<Vec<String>>>) {
        let specs: Vec<TabSpec> = names
            .iter()
            .map(|n| TabSpec {
                id: format!("tab-{}", n),
                title: None,
                body: None,
            })
            .collect();
        let registry = TabRegistry::build(&specs).unwrap();

        let calls = Rc::new(RefCell::new(Vec::new()));
        let store = RecordingStore {
            calls: calls.clone(),
        };
        (TabFilter::new(registry, Box::new(store)), calls)
    }

    fn visible_names(filter: &TabFilter) -> Vec<&str> {
        filter
            .groups()
            .iter()
            .filter(|g| g.visible)
            .map(|g| g.name.as_str())
            .collect()
    }

    #[test]
    fn test_empty_pattern_shows_everything() {
        let (mut filter, calls) = widget(&["alpha", "beta", "gamma"]);
        filter.set_filter("");
        assert_eq!(visible_names(&filter), vec!["alpha", "beta", "gamma"]);
        assert_eq!(calls.borrow().as_slice(), &["".to_string()]);
    }

    #[test]
    fn test_matching_visible_nonmatching_hidden() {
        let (mut filter, _) = widget(&["alpha", "beta"]);
        // beta matches; alpha stays visible only because it is pinned
        filter.set_filter("bet");
        assert_eq!(visible_names(&filter), vec!["alpha", "beta"]);

        let (mut filter, _) = widget(&["alpha", "beta", "gamma"]);
        filter.set_filter("gam");
        assert_eq!(visible_names(&filter), vec!["alpha", "gamma"]);
    }

    #[test]
    fn test_sticky_active_survives_any_pattern() {
        let (mut filter, _) = widget(&["alpha", "beta"]);
        filter.set_filter("zzz-no-match");
        // alpha is the pinned tab; nothing matches, it stays anyway
        assert_eq!(visible_names(&filter), vec!["alpha"]);
    }

    #[test]
    fn test_multi_term_or_semantics() {
        let (mut filter, _) = widget(&["alpha", "beta", "gamma", "delta"]);
        filter.set_filter("beta delta");
        assert_eq!(visible_names(&filter), vec!["alpha", "beta", "delta"]);
    }

    #[test]
    fn test_update_is_idempotent() {
        let (mut filter, _) = widget(&["alpha", "beta", "gamma"]);
        filter.set_filter("bet");
        let first: Vec<String> = visible_names(&filter)
            .into_iter()
            .map(String::from)
            .collect();
        filter.update_styles();
        assert_eq!(visible_names(&filter), first);
    }

    #[test]
    fn test_trimmed_value_is_persisted_not_the_substitute() {
        let (mut filter, calls) = widget(&["alpha"]);
        filter.set_filter("  alpha  ");
        // Trimmed before persisting; matching also uses the trimmed text
        assert_eq!(calls.borrow().last().unwrap(), "alpha");
        assert_eq!(visible_names(&filter), vec!["alpha"]);

        filter.set_filter("   ");
        // Whitespace-only trims to empty; the `.*` substitute is match-only
        assert_eq!(calls.borrow().last().unwrap(), "");
        assert_eq!(visible_names(&filter), vec!["alpha"]);
    }

    #[test]
    fn test_key_sequence_with_enter_reset() {
        let (mut filter, calls) = widget(&["alpha", "beta"]);

        for input in [
            KeyInput::Char('a'),
            KeyInput::Char('l'),
            KeyInput::Char('p'),
            KeyInput::Char('h'),
            KeyInput::Enter,
            KeyInput::Char('b'),
        ] {
            assert!(filter.handle_input(input).was_handled());
        }

        assert_eq!(filter.filter(), "b");
        assert_eq!(
            calls.borrow().as_slice(),
            &["a", "al", "alp", "alph", "", "b"]
        );
        // `b` matches beta; alpha remains pinned
        assert_eq!(visible_names(&filter), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_backspace_partial_match() {
        let (mut filter, _) = widget(&["alpha", "beta"]);
        filter.set_filter("alpha");
        filter.handle_input(KeyInput::Backspace);
        assert_eq!(filter.filter(), "alph");
        // Unanchored match: `alph` still matches `alpha`
        assert!(filter.groups()[0].visible);
    }

    #[test]
    fn test_backspace_on_empty_filter() {
        let (mut filter, calls) = widget(&["alpha"]);
        assert!(filter.handle_input(KeyInput::Backspace).was_handled());
        assert_eq!(filter.filter(), "");
        assert_eq!(calls.borrow().as_slice(), &["".to_string()]);
    }

    #[test]
    fn test_malformed_pattern_does_not_crash() {
        let (mut filter, calls) = widget(&["alpha", "beta"]);
        filter.set_filter("(");
        // The raw text is still persisted; with no valid terms only the
        // pinned tab survives
        assert_eq!(calls.borrow().last().unwrap(), "(");
        assert_eq!(visible_names(&filter), vec!["alpha"]);

        // A later valid edit recovers fully
        filter.set_filter("beta");
        assert_eq!(visible_names(&filter), vec!["alpha", "beta"]);
    }

    #[test]
    fn test_passthrough_inputs_do_not_touch_state() {
        let (mut filter, calls) = widget(&["alpha"]);
        for input in [KeyInput::Modifier, KeyInput::Tab, KeyInput::Other] {
            assert!(!filter.handle_input(input).was_handled());
        }
        assert_eq!(filter.filter(), "");
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_cycle_active_skips_hidden_tabs() {
        let (mut filter, _) = widget(&["alpha", "beta", "gamma"]);
        filter.set_filter("gamma");
        // beta is hidden; cycling from alpha must land on gamma
        filter.cycle_active();
        assert_eq!(filter.registry().active_index(), Some(2));

        // alpha lost the marker but stays on screen until the next edit
        assert!(filter.groups()[0].visible);
        filter.update_styles();
        assert_eq!(visible_names(&filter), vec!["gamma"]);
    }

    #[test]
    fn test_cycle_active_wraps_around() {
        let (mut filter, _) = widget(&["alpha", "beta"]);
        filter.set_filter("");
        filter.cycle_active();
        assert_eq!(filter.registry().active_index(), Some(1));
        filter.cycle_active();
        assert_eq!(filter.registry().active_index(), Some(0));
    }
}
