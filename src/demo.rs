// Built-in demo workspace
//
// Used when no tabs file is configured so the binary is runnable out of the
// box: a handful of tabs with distinct names to filter against.

use crate::tabs::TabSpec;

fn tab(id: &str, title: &str, body: &str) -> TabSpec {
    TabSpec {
        id: id.to_string(),
        title: Some(title.to_string()),
        body: Some(body.to_string()),
    }
}

/// The demo tab set
pub fn demo_tabs() -> Vec<TabSpec> {
    vec![
        tab(
            "tab-overview",
            "Overview",
            "Welcome to the demo workspace.\n\n\
             Type to filter the tabs above by name. Terms are regular\n\
             expressions, separated by spaces and OR-ed together.\n\n\
             Enter clears the filter. Tab cycles the pinned tab across\n\
             whatever is visible. Esc quits.",
        ),
        tab(
            "tab-channels",
            "Channels",
            "Channel table placeholder.\n\n\
             Try typing `chan` in the filter bar: this tab matches while\n\
             most of the others disappear.",
        ),
        tab(
            "tab-plots",
            "Plots",
            "Plot area placeholder.\n\n\
             Multi-term filters work too: `plots settings` keeps both of\n\
             those tabs visible.",
        ),
        tab(
            "tab-telemetry",
            "Telemetry",
            "Telemetry stream placeholder.\n\n\
             Anchors are honored: `^tele` matches this tab, and `metry$`\n\
             does as well.",
        ),
        tab(
            "tab-settings",
            "Settings",
            "Settings placeholder.\n\n\
             The pinned tab never disappears, no matter what you type.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::TabRegistry;

    #[test]
    fn test_demo_tabs_build_a_registry() {
        let specs = demo_tabs();
        assert!(!specs.is_empty());

        let registry = TabRegistry::build(&specs).unwrap();
        assert_eq!(registry.len(), specs.len());
        assert_eq!(registry.active_index(), Some(0));
    }

    #[test]
    fn test_demo_names_are_distinct() {
        let specs = demo_tabs();
        let registry = TabRegistry::build(&specs).unwrap();
        // Shadowed names would collapse entries
        assert_eq!(registry.len(), specs.len());
    }
}
