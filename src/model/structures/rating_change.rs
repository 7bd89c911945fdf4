use std::fmt;

/// A single line of a game's rating report: the player's rating immediately
/// before and after the game's modification was committed.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingChange {
    pub player: String,
    pub rating_before: f64,
    pub rating_after: f64,
    pub delta: f64,
    pub performance: Option<f64>
}

impl fmt::Display for RatingChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{:?}\t{:?}\t{:+.6}",
            self.player, self.rating_before, self.rating_after, self.delta
        )?;

        match self.performance {
            Some(performance) => write!(f, "\t{:?}", performance),
            None => Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RatingChange;

    #[test]
    fn test_display_with_performance() {
        let change = RatingChange {
            player: "alice#0001".to_string(),
            rating_before: 1000.0,
            rating_after: 1012.5,
            delta: 12.5,
            performance: Some(31.0)
        };

        assert_eq!(change.to_string(), "alice#0001\t1000.0\t1012.5\t+12.500000\t31.0");
    }

    #[test]
    fn test_display_negative_without_performance() {
        let change = RatingChange {
            player: "bob".to_string(),
            rating_before: 1000.0,
            rating_after: 996.75,
            delta: -3.25,
            performance: None
        };

        assert_eq!(change.to_string(), "bob\t1000.0\t996.75\t-3.250000");
    }
}
