//! Ordered `(label, count)` tables.

use std::collections::HashMap;

use serde::Serialize;

/// One row of a [`FrequencyTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyRow {
    pub label: String,
    pub count: usize,
}

/// Labels with their occurrence counts, most frequent first.
///
/// Labels with equal counts keep the order in which they were first seen.
///
/// # Example
///
/// ```rust
/// use chatstat::analysis::FrequencyTable;
///
/// let table = FrequencyTable::from_labels(["b", "a", "b", "c", "a", "b"]);
/// assert_eq!(table.labels(), vec!["b", "a", "c"]);
/// assert_eq!(table.count("a"), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    /// Counts every label yielded by `labels`.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut rows: Vec<FrequencyRow> = Vec::new();

        for label in labels {
            let label = label.as_ref();
            match index.get(label) {
                Some(&i) => rows[i].count += 1,
                None => {
                    index.insert(label.to_string(), rows.len());
                    rows.push(FrequencyRow {
                        label: label.to_string(),
                        count: 1,
                    });
                }
            }
        }

        // stable: ties stay in first-seen order
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        Self { rows }
    }

    /// Keeps only the `n` most frequent rows.
    #[must_use]
    pub fn top(mut self, n: usize) -> Self {
        self.rows.truncate(n);
        self
    }

    pub fn rows(&self) -> &[FrequencyRow] {
        &self.rows
    }

    pub fn iter(&self) -> impl Iterator<Item = &FrequencyRow> {
        self.rows.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.label.as_str()).collect()
    }

    /// Returns the count for `label`, or 0 if it never occurred.
    pub fn count(&self, label: &str) -> usize {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map_or(0, |r| r.count)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.rows.iter().map(|r| r.count).sum()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = &'a FrequencyRow;
    type IntoIter = std::slice::Iter<'a, FrequencyRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
