//! Profile update history

use std::collections::VecDeque;

use crate::domain::account::ProfileSnapshot;

/// Append-only log of post-update profile snapshots, shared by all accounts
///
/// With a non-zero capacity the oldest snapshots are dropped once the log is
/// full. A capacity of zero keeps every snapshot for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct ProfileHistory {
    entries: VecDeque<ProfileSnapshot>,
    capacity: usize,
}

impl ProfileHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity,
        }
    }

    /// Unbounded history
    pub fn unbounded() -> Self {
        Self::new(0)
    }

    #[cfg(test)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn record(&mut self, snapshot: ProfileSnapshot) {
        if self.capacity > 0 && self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(snapshot);
    }

    /// Snapshots oldest first
    pub fn entries(&self) -> Vec<ProfileSnapshot> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(nickname: &str) -> ProfileSnapshot {
        ProfileSnapshot {
            nickname: nickname.to_string(),
            comment: String::new(),
        }
    }

    #[test]
    fn test_unbounded_history_grows() {
        let mut history = ProfileHistory::unbounded();
        assert!(history.is_empty());

        for i in 0..100 {
            history.record(snapshot(&format!("nick{}", i)));
        }

        assert_eq!(history.len(), 100);
        assert_eq!(history.entries()[0].nickname, "nick0");
    }

    #[test]
    fn test_capped_history_drops_oldest() {
        let mut history = ProfileHistory::new(2);

        history.record(snapshot("a"));
        history.record(snapshot("b"));
        history.record(snapshot("c"));

        let nicknames: Vec<String> = history.entries().into_iter().map(|s| s.nickname).collect();
        assert_eq!(nicknames, ["b", "c"]);
        assert_eq!(history.capacity(), 2);
    }
}
