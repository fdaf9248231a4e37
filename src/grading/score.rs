use std::ops::{Add, AddAssign};

/// Confusion matrix of one trial: detected results compared to expected ones.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialScore {
    pub true_positive: usize,
    pub false_positive: usize,
    pub true_negative: usize,
    pub false_negative: usize,
}

impl TrialScore {
    /// Counts one grid cell.
    pub fn record(&mut self, detected: bool, expected: bool) {
        match (detected, expected) {
            (true, true) => self.true_positive += 1,
            (true, false) => self.false_positive += 1,
            (false, false) => self.true_negative += 1,
            (false, true) => self.false_negative += 1,
        }
    }

    /// Number of cells counted.
    pub fn total(&self) -> usize {
        self.true_positive + self.false_positive + self.true_negative + self.false_negative
    }

    /// Share of detected collisions which were expected: `TP / (TP + FP)`.
    /// `None` if nothing was detected.
    pub fn positive_rate(&self) -> Option<f64> {
        rate(self.true_positive, self.false_positive)
    }

    /// Share of missed collisions which were expected to miss: `TN / (TN + FN)`.
    /// `None` if everything was detected.
    pub fn negative_rate(&self) -> Option<f64> {
        rate(self.true_negative, self.false_negative)
    }

    /// Product of both rates, a rate without samples counting as 1.
    ///
    /// Each class is normalized on its own, so a grid that is mostly empty space does
    /// not hide missed collisions.
    ///
    /// # Examples
    /// ```
    /// use geocollide::grading::TrialScore;
    ///
    /// let mut score = TrialScore::default();
    /// score.record(true, true);
    /// score.record(true, false);
    ///
    /// assert_eq!(score.negative_rate(), None);
    /// assert_eq!(score.grade(), 0.5);
    /// ```
    pub fn grade(&self) -> f64 {
        self.positive_rate().unwrap_or(1.0) * self.negative_rate().unwrap_or(1.0)
    }
}

fn rate(hits: usize, misses: usize) -> Option<f64> {
    let total = hits + misses;
    if total == 0 {
        None
    } else {
        Some(hits as f64 / total as f64)
    }
}

impl Add for TrialScore {
    type Output = TrialScore;

    fn add(mut self, other: TrialScore) -> TrialScore {
        self += other;
        self
    }
}

impl AddAssign for TrialScore {
    fn add_assign(&mut self, other: TrialScore) {
        self.true_positive += other.true_positive;
        self.false_positive += other.false_positive;
        self.true_negative += other.true_negative;
        self.false_negative += other.false_negative;
    }
}
