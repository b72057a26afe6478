// Tab registry - the name-to-group mapping behind the filter
//
// Built once at construction from the declared tabs and never mutated
// afterwards (the set of groups is static for the widget's lifetime).
// Only the per-group `active` and `visible` markers change at runtime.

use crate::tabs::TabSpec;
use std::fmt;

/// A single tab group: the button in the tab bar plus its content pane.
/// Both toggle visibility together.
#[derive(Debug, Clone)]
pub struct TabGroup {
    /// Declared identifier, e.g. `tab-channels`
    pub id: String,

    /// Filter key: second hyphen-delimited segment of the id
    pub name: String,

    /// Label shown on the tab button
    pub title: String,

    /// Content pane text
    pub body: String,

    /// Manually pinned tab - stays visible during filtering
    pub active: bool,

    /// Set by the filter on every update; hidden groups do not render
    pub visible: bool,
}

/// Construction-time registry failures
#[derive(Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// Tab id has no non-empty second hyphen-delimited segment
    MalformedId { id: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::MalformedId { id } => {
                write!(
                    f,
                    "tab id {:?} is malformed: expected `<prefix>-<name>` with a non-empty name",
                    id
                )
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Ordered collection of tab groups, keyed by name
///
/// Declaration order is preserved. A duplicate name replaces the earlier
/// entry in place, so the last declaration wins.
#[derive(Debug, Clone, Default)]
pub struct TabRegistry {
    groups: Vec<TabGroup>,
}

impl TabRegistry {
    /// Build the registry from declared tabs
    ///
    /// Fails on the first malformed id rather than silently producing a
    /// group that can never be matched.
    pub fn build(specs: &[TabSpec]) -> Result<Self, RegistryError> {
        let mut groups: Vec<TabGroup> = Vec::with_capacity(specs.len());

        for spec in specs {
            let name = parse_name(&spec.id).ok_or_else(|| RegistryError::MalformedId {
                id: spec.id.clone(),
            })?;

            let group = TabGroup {
                id: spec.id.clone(),
                name: name.to_string(),
                title: spec
                    .title
                    .clone()
                    .unwrap_or_else(|| name.to_string()),
                body: spec.body.clone().unwrap_or_default(),
                active: false,
                visible: true,
            };

            match groups.iter().position(|g| g.name == group.name) {
                Some(idx) => {
                    tracing::debug!(
                        "tab {:?} replaces earlier {:?} for name {:?}",
                        group.id,
                        groups[idx].id,
                        group.name
                    );
                    groups[idx] = group;
                }
                None => groups.push(group),
            }
        }

        // One tab ships pinned, like the markup this models
        if let Some(first) = groups.first_mut() {
            first.active = true;
        }

        Ok(Self { groups })
    }

    pub fn groups(&self) -> &[TabGroup] {
        &self.groups
    }

    pub(crate) fn groups_mut(&mut self) -> &mut [TabGroup] {
        &mut self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Index of the tab currently carrying the active marker
    #[allow(dead_code)]
    pub fn active_index(&self) -> Option<usize> {
        self.groups.iter().position(|g| g.active)
    }

    /// Number of currently visible groups
    pub fn visible_count(&self) -> usize {
        self.groups.iter().filter(|g| g.visible).count()
    }
}

/// Extract the filter name from a tab id: split on `-`, take the second segment
fn parse_name(id: &str) -> Option<&str> {
    id.split('-').nth(1).filter(|s| !s.is_empty())
}
