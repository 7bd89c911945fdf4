use strum_macros::{Display, EnumIter};

/// How a pending modification reached the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum CommitKind {
    /// The scheduler clock reached the modification's effective time
    Scheduled,
    /// Committed by the end-of-run flush once every game had been scored
    Flushed
}

#[cfg(test)]
mod tests {
    use super::CommitKind;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display() {
        assert_eq!(CommitKind::Scheduled.to_string(), "scheduled");
        assert_eq!(CommitKind::Flushed.to_string(), "flushed");
    }

    #[test]
    fn test_enumerate() {
        let kinds = CommitKind::iter().collect::<Vec<_>>();
        assert_eq!(kinds, vec![CommitKind::Scheduled, CommitKind::Flushed]);
    }
}
