//! The set of apps chosen for the ERD view.

use crate::models::BranchId;

/// Insertion-ordered set of branch identifiers.
///
/// Membership is what matters; order only decides how the apps are listed
/// in the navigation payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectedApps {
    apps: Vec<BranchId>,
}

impl SelectedApps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` unless it is already present. Returns `true` if it was added.
    pub fn insert(&mut self, id: impl Into<BranchId>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.apps.push(id);
        true
    }

    /// Remove every occurrence of `id`. Returns `true` if anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.apps.len();
        self.apps.retain(|app| app != id);
        self.apps.len() != before
    }

    pub fn contains(&self, id: &str) -> bool {
        self.apps.iter().any(|app| app == id)
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.apps.iter().map(String::as_str)
    }

    /// Apps in insertion order.
    pub fn to_vec(&self) -> Vec<BranchId> {
        self.apps.clone()
    }
}

impl FromIterator<BranchId> for SelectedApps {
    fn from_iter<I: IntoIterator<Item = BranchId>>(iter: I) -> Self {
        let mut selected = Self::new();
        for id in iter {
            selected.insert(id);
        }
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// # Idempotent Insert
    ///
    /// Tests that inserting an id twice keeps a single entry.
    ///
    /// ## Test Scenario
    /// - Inserts "main" twice and "dev" once
    ///
    /// ## Expected Outcome
    /// - Second insert of "main" reports false
    /// - Set holds exactly two ids in insertion order
    #[test]
    fn test_insert_is_idempotent() {
        let mut selected = SelectedApps::new();

        assert!(selected.insert("main"));
        assert!(selected.insert("dev"));
        assert!(!selected.insert("main"));

        assert_eq!(selected.len(), 2);
        assert_eq!(selected.to_vec(), vec!["main".to_string(), "dev".to_string()]);
    }

    /// # Remove
    ///
    /// Tests removing present and absent ids.
    ///
    /// ## Test Scenario
    /// - Removes an id that is present, then again, then one never added
    ///
    /// ## Expected Outcome
    /// - Only the first removal reports true
    /// - Remaining order is preserved
    #[test]
    fn test_remove() {
        let mut selected: SelectedApps = ["a", "b", "c"]
            .into_iter()
            .map(String::from)
            .collect();

        assert!(selected.remove("b"));
        assert!(!selected.remove("b"));
        assert!(!selected.remove("zzz"));
        assert_eq!(selected.iter().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_from_iter_drops_duplicates() {
        let selected: SelectedApps = ["x", "y", "x"].into_iter().map(String::from).collect();

        assert_eq!(selected.len(), 2);
        assert!(selected.contains("x"));
        assert!(!selected.contains("z"));
        assert!(!selected.is_empty());
    }
}
