//! Participation tally keyed by society or event name

use rustc_hash::FxHashMap;

/// Counts how often each name has been created or joined
#[derive(Debug, Clone, Default)]
pub struct ReportCounter {
    counts: FxHashMap<String, u64>,
}

impl ReportCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `name`, starting from zero
    pub fn record(&mut self, name: &str) {
        match self.counts.get_mut(name) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(name.to_string(), 1);
            }
        }
    }

    pub fn count(&self, name: &str) -> u64 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Snapshot sorted by descending count, ties broken by name
    pub fn entries(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(name, count)| (name.clone(), *count))
            .collect();
        entries.sort_by(|(a_name, a_count), (b_name, b_count)| {
            b_count.cmp(a_count).then_with(|| a_name.cmp(b_name))
        });
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_increments() {
        let mut report = ReportCounter::new();
        report.record("Chess Club");
        report.record("Chess Club");
        report.record("Robotics");
        assert_eq!(report.count("Chess Club"), 2);
        assert_eq!(report.count("Robotics"), 1);
        assert_eq!(report.count("Drama"), 0);
        assert_eq!(report.total(), 3);
        assert_eq!(report.len(), 2);
    }

    #[test]
    fn test_entries_sorted() {
        let mut report = ReportCounter::new();
        for name in ["b", "a", "c", "c", "b", "c"] {
            report.record(name);
        }
        report.record("d");
        assert_eq!(
            report.entries(),
            vec![
                ("c".to_string(), 3),
                ("b".to_string(), 2),
                ("a".to_string(), 1),
                ("d".to_string(), 1),
            ]
        );
    }
}
