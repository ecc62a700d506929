//! Discovery of the nodes a library provides.

use std::collections::{HashMap, hash_map::Entry};

use thiserror::Error;

use crate::{Describe, NodeInfo};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("node `{id}` is already registered")]
    Duplicate { id: String },
}

/// The set of nodes a host can place in a patch, keyed by [`NodeInfo::id()`].
#[derive(Debug, Default)]
pub struct NodeCatalog {
    nodes: HashMap<String, NodeInfo>,
}

impl NodeCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node type by its self-description.
    ///
    /// # Errors
    ///
    /// Fails with [`CatalogError::Duplicate`] if a node with the same id is
    /// already registered.
    pub fn register<N: Describe>(&mut self) -> Result<(), CatalogError> {
        self.insert(N::info())
    }

    /// Registers a node description.
    ///
    /// # Errors
    ///
    /// Fails with [`CatalogError::Duplicate`] if a node with the same id is
    /// already registered.
    pub fn insert(&mut self, info: NodeInfo) -> Result<(), CatalogError> {
        match self.nodes.entry(info.id()) {
            Entry::Occupied(entry) => Err(CatalogError::Duplicate {
                id: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                log::debug!("registered node `{}`", entry.key());
                entry.insert(info);
                Ok(())
            }
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&NodeInfo> {
        self.nodes.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the nodes in `category`, sorted by name.
    #[must_use]
    pub fn in_category(&self, category: &str) -> Vec<&NodeInfo> {
        let mut found: Vec<_> = self
            .nodes
            .values()
            .filter(|info| info.category == category)
            .collect();
        found.sort_by_key(|info| info.name);
        found
    }

    /// Returns the nodes whose name or any tag matches `term`, ignoring case.
    /// Results are sorted by id.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&NodeInfo> {
        let matches = |text: &str| text.eq_ignore_ascii_case(term);

        let mut found: Vec<_> = self
            .nodes
            .iter()
            .filter(|(_, info)| {
                matches(info.name) || info.tags.iter().any(|&tag| matches(tag))
            })
            .collect();
        found.sort_by(|(a, _), (b, _)| a.cmp(b));
        found.into_iter().map(|(_, info)| info).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::PinInfo;

    struct Reverse;

    impl Describe for Reverse {
        fn info() -> NodeInfo {
            NodeInfo::new("Reverse", "Spreads")
                .with_tags(&["order", "flip"])
                .with_pin(PinInfo::input("Input", "Spread<f64>"))
                .with_pin(PinInfo::output("Output", "Spread<f64>"))
        }
    }

    fn catalog() -> NodeCatalog {
        let mut catalog = NodeCatalog::new();
        catalog.register::<Reverse>().unwrap();
        catalog.insert(NodeInfo::new("Count", "Spreads")).unwrap();
        catalog
            .insert(NodeInfo::new("Reverse", "String").with_tags(&["text"]))
            .unwrap();
        catalog
    }

    #[test]
    fn registers_by_id() {
        let catalog = catalog();

        assert_eq!(catalog.len(), 3);
        assert!(catalog.get("Reverse (Spreads)").is_some());
        assert!(catalog.get("Reverse").is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut catalog = catalog();

        assert_eq!(
            catalog.register::<Reverse>(),
            Err(CatalogError::Duplicate {
                id: "Reverse (Spreads)".into()
            })
        );
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn lists_a_category_by_name() {
        let catalog = catalog();

        let names: Vec<_> = catalog
            .in_category("Spreads")
            .into_iter()
            .map(|info| info.name)
            .collect();

        assert_eq!(names, vec!["Count", "Reverse"]);
        assert!(catalog.in_category("Color").is_empty());
    }

    #[test]
    fn search_matches_names_and_tags_ignoring_case() {
        let catalog = catalog();

        let ids = |term| {
            catalog
                .search(term)
                .into_iter()
                .map(NodeInfo::id)
                .collect::<Vec<_>>()
        };

        assert_eq!(ids("reverse"), vec!["Reverse (Spreads)", "Reverse (String)"]);
        assert_eq!(ids("FLIP"), vec!["Reverse (Spreads)"]);
        assert!(ids("zip").is_empty());
    }
}
