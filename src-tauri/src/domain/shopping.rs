//! Shopping List
//!
//! Ordered list of unique, trimmed item strings.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult};

/// Result of adding an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList(Vec<String>);

impl ShoppingList {
    pub fn new(items: Vec<String>) -> Self {
        let mut list = Self::default();
        for item in items {
            // Files edited by hand may contain blanks or duplicates
            let _ = list.add(&item);
        }
        list
    }

    /// Append `item` unless an identical entry exists
    pub fn add(&mut self, item: &str) -> DomainResult<AddOutcome> {
        let item = item.trim();
        if item.is_empty() {
            return Err(DomainError::InvalidInput("Item is empty".to_string()));
        }
        if self.contains(item) {
            return Ok(AddOutcome::AlreadyPresent);
        }
        self.0.push(item.to_string());
        Ok(AddOutcome::Added)
    }

    /// Remove an exact match, returning whether anything changed
    pub fn remove(&mut self, item: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|i| i != item);
        self.0.len() != before
    }

    pub fn contains(&self, item: &str) -> bool {
        self.0.iter().any(|i| i == item)
    }

    pub fn items(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_trims_and_deduplicates() {
        let mut list = ShoppingList::default();
        assert_eq!(list.add(" Lime ").unwrap(), AddOutcome::Added);
        assert_eq!(list.add("Lime").unwrap(), AddOutcome::AlreadyPresent);
        assert_eq!(list.add("Mint").unwrap(), AddOutcome::Added);
        assert_eq!(list.items(), ["Lime", "Mint"]);
    }

    #[test]
    fn test_add_rejects_blank() {
        let mut list = ShoppingList::default();
        assert!(matches!(list.add("   "), Err(DomainError::InvalidInput(_))));
        assert!(list.is_empty());
    }

    #[test]
    fn test_remove_exact_match() {
        let mut list = ShoppingList::new(vec!["Eggs".into(), "Milk".into()]);
        assert!(!list.remove("eggs"));
        assert!(list.remove("Eggs"));
        assert_eq!(list.items(), ["Milk"]);
    }

    #[test]
    fn test_new_normalizes_loaded_items() {
        let list = ShoppingList::new(vec!["Salt".into(), "".into(), "Salt".into()]);
        assert_eq!(list.len(), 1);
    }
}
