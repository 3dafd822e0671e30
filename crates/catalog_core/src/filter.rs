use crate::record::DisplayRecord;

/// Current search predicate. `search_term` is stored trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_term: String,
    pub category: String,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty() && self.category.is_empty()
    }

    pub fn matches(&self, record: &DisplayRecord) -> bool {
        if !self.category.is_empty() && !record.categories.iter().any(|c| *c == self.category) {
            return false;
        }
        if self.search_term.is_empty() {
            return true;
        }
        let term = self.search_term.as_str();
        record.name.to_lowercase().contains(term)
            || record.id.to_string().contains(term)
            || record
                .categories
                .iter()
                .any(|category| category.to_lowercase().contains(term))
    }
}

pub fn normalize_search_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Owns the working set and the cached filtered subsequence.
///
/// Every mutator recomputes the filtered set before returning.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterEngine {
    working_set: Vec<DisplayRecord>,
    state: FilterState,
    filtered: Vec<DisplayRecord>,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the working set wholesale. The current predicate is kept.
    pub fn set_working_set(&mut self, records: Vec<DisplayRecord>) {
        self.working_set = records;
        self.apply();
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.state.search_term = normalize_search_term(term);
        self.apply();
    }

    pub fn set_category(&mut self, category: &str) {
        self.state.category = category.to_string();
        self.apply();
    }

    pub fn filtered(&self) -> &[DisplayRecord] {
        &self.filtered
    }

    pub fn working_set(&self) -> &[DisplayRecord] {
        &self.working_set
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn find(&self, id: u32) -> Option<&DisplayRecord> {
        self.working_set.iter().find(|record| record.id == id)
    }

    /// Distinct categories of the working set, ascending.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .working_set
            .iter()
            .flat_map(|record| record.categories.iter().cloned())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    fn apply(&mut self) {
        self.filtered = if self.state.is_empty() {
            self.working_set.clone()
        } else {
            self.working_set
                .iter()
                .filter(|record| self.state.matches(record))
                .cloned()
                .collect()
        };
    }
}
