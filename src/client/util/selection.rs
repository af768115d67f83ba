use std::collections::BTreeSet;

/// Ids staged in a multi-select before they are sent as one assignment
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    /// Start from the ids currently assigned
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Add the id when absent, remove it when present
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Whether the staged ids differ from `current`
    pub fn differs_from<'a>(&self, current: impl IntoIterator<Item = &'a str>) -> bool {
        let current: BTreeSet<&str> = current.into_iter().collect();

        current.len() != self.ids.len() || !self.ids.iter().all(|id| current.contains(id.as_str()))
    }

    pub fn into_ids(self) -> Vec<String> {
        self.ids.into_iter().collect()
    }
}
