// Tab workspace definitions
//
// Tabs are declared in a TOML file as `[[tab]]` entries. Only the id is
// required; it must follow the `<prefix>-<name>` form the registry expects.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// A declared tab, before registry construction
#[derive(Debug, Clone, Deserialize)]
pub struct TabSpec {
    /// Hyphen-delimited identifier, e.g. `tab-channels`
    pub id: String,

    /// Button label; defaults to the parsed name
    pub title: Option<String>,

    /// Content pane text
    pub body: Option<String>,
}

/// Tabs file structure
#[derive(Debug, Deserialize)]
struct TabsFile {
    #[serde(default)]
    tab: Vec<TabSpec>,
}

/// Load tab declarations from a TOML file
pub fn load_tabs(path: &Path) -> Result<Vec<TabSpec>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("could not read tabs file {}", path.display()))?;

    let file: TabsFile = toml::from_str(&contents)
        .with_context(|| format!("could not parse tabs file {}", path.display()))?;

    Ok(file.tab)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tabs_document() {
        let doc = r#"
[[tab]]
id = "tab-alpha"
title = "Alpha"
body = "First tab."

[[tab]]
id = "tab-beta"
"#;
        let file: TabsFile = toml::from_str(doc).unwrap();
        assert_eq!(file.tab.len(), 2);
        assert_eq!(file.tab[0].id, "tab-alpha");
        assert_eq!(file.tab[0].title.as_deref(), Some("Alpha"));
        assert_eq!(file.tab[1].title, None);
        assert_eq!(file.tab[1].body, None);
    }

    #[test]
    fn test_empty_document_has_no_tabs() {
        let file: TabsFile = toml::from_str("").unwrap();
        assert!(file.tab.is_empty());
    }
}
