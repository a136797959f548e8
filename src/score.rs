//! Score, verdict and evaluation result types.

use std::fmt;
use std::ops::AddAssign;

/// Lowest score classified as [`Verdict::Strong`].
pub const STRONG_THRESHOLD: i64 = 5;
/// Lowest score classified as [`Verdict::Moderate`].
pub const MODERATE_THRESHOLD: i64 = 2;

/// Signed heuristic strength score. Unbounded in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(i64);

impl Score {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    pub fn verdict(self) -> Verdict {
        Verdict::from_score(self)
    }
}

impl AddAssign<i64> for Score {
    fn add_assign(&mut self, delta: i64) {
        self.0 += delta;
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Overall classification of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Weak,
    Moderate,
    Strong,
}

impl Verdict {
    /// Maps a score to its verdict.
    ///
    /// - `>= 5` is `Strong`
    /// - `2..5` is `Moderate`
    /// - anything below 2 is `Weak`
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            s if s >= STRONG_THRESHOLD => Verdict::Strong,
            s if s >= MODERATE_THRESHOLD => Verdict::Moderate,
            _ => Verdict::Weak,
        }
    }

    /// User-facing verdict line.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Strong => "Strong Password!",
            Verdict::Moderate => "Moderate Password. Consider improving it.",
            Verdict::Weak => "Weak Password. Change it immediately!",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of evaluating one password.
///
/// `feedback` keeps the order in which the rules produced it: length,
/// variety (followed by its missing-class hints), dictionary, patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub score: Score,
    pub feedback: Vec<String>,
}

impl Evaluation {
    pub fn verdict(&self) -> Verdict {
        self.score.verdict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_boundaries() {
        assert_eq!(Verdict::from_score(Score::new(5)), Verdict::Strong);
        assert_eq!(Verdict::from_score(Score::new(4)), Verdict::Moderate);
        assert_eq!(Verdict::from_score(Score::new(2)), Verdict::Moderate);
        assert_eq!(Verdict::from_score(Score::new(1)), Verdict::Weak);
    }

    #[test]
    fn test_verdict_extremes() {
        assert_eq!(Verdict::from_score(Score::new(i64::MAX)), Verdict::Strong);
        assert_eq!(Verdict::from_score(Score::new(i64::MIN)), Verdict::Weak);
        assert_eq!(Verdict::from_score(Score::new(-9)), Verdict::Weak);
        assert_eq!(Verdict::from_score(Score::new(0)), Verdict::Weak);
    }

    #[test]
    fn test_verdict_messages() {
        assert_eq!(Verdict::Strong.to_string(), "Strong Password!");
        assert_eq!(
            Verdict::Moderate.to_string(),
            "Moderate Password. Consider improving it."
        );
        assert_eq!(
            Verdict::Weak.to_string(),
            "Weak Password. Change it immediately!"
        );
    }

    #[test]
    fn test_score_accumulates_negative() {
        let mut score = Score::default();
        score += 2;
        score += -5;
        score += -2;
        assert_eq!(score.value(), -5);
        assert_eq!(score.to_string(), "-5");
    }
}
