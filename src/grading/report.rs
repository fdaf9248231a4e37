use std::fmt::{self, Display, Formatter};

use super::{GradingConfig, TrialScore};
use crate::fixture::TestGroup;

/// Scores of every trial in one group.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupReport {
    pub group: TestGroup,
    pub scores: Vec<TrialScore>,
}

impl GroupReport {
    /// Mean of the trial grades. A group without trials grades 1.
    pub fn grade(&self) -> f64 {
        if self.scores.is_empty() {
            return 1.0;
        }
        let sum: f64 = self.scores.iter().map(TrialScore::grade).sum();
        sum / self.scores.len() as f64
    }

    /// Counters of all trials added up.
    pub fn totals(&self) -> TrialScore {
        self.scores
            .iter()
            .fold(TrialScore::default(), |total, score| total + *score)
    }
}

/// Result of grading a whole fixture.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradeReport {
    pub groups: Vec<GroupReport>,
    pub config: GradingConfig,
}

impl GradeReport {
    /// Weighted mean of the group grades.
    pub fn overall(&self) -> f64 {
        let (weighted, weights) = self
            .groups
            .iter()
            .map(|g| {
                let weight = self.config.weight(g.group);
                (g.grade() * weight, weight)
            })
            .fold((0.0, 0.0), |(a, b), (c, d)| (a + c, b + d));
        if weights > 0.0 {
            weighted / weights
        } else {
            1.0
        }
    }

    /// The overall grade scaled to [`GradingConfig::max_score`] and rounded.
    pub fn score(&self) -> u32 {
        let max = self.config.max_score;
        let score = (self.overall() * f64::from(max)).round();
        score.clamp(0.0, f64::from(max)) as u32
    }
}

const RULE: &str =
    "-------+-------------------------+-------------------------+--------";

fn percent(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{:.1}%", rate * 100.0),
        None => "N/A".to_string(),
    }
}

impl Display for GroupReport {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(f, "{}", self.group)?;
        writeln!(
            f,
            "{:>6} | {:>7} {:>7} {:>7} | {:>7} {:>7} {:>7} | {:>6}",
            "Trial", "True+", "False+", "Rate", "True-", "False-", "Rate", "Grade"
        )?;
        writeln!(f, "{}", RULE)?;
        for (i, score) in self.scores.iter().enumerate() {
            writeln!(
                f,
                "{:>6} | {:>7} {:>7} {:>7} | {:>7} {:>7} {:>7} | {:>6}",
                i + 1,
                score.true_positive,
                score.false_positive,
                percent(score.positive_rate()),
                score.true_negative,
                score.false_negative,
                percent(score.negative_rate()),
                percent(Some(score.grade())),
            )?;
        }
        writeln!(f, "{}", RULE)?;
        if self.scores.is_empty() {
            writeln!(f, "{:>6}   (no trials){:>47}", "Avg", percent(Some(self.grade())))
        } else {
            let totals = self.totals();
            writeln!(
                f,
                "{:>6} | {:>7} {:>7} {:>7} | {:>7} {:>7} {:>7} | {:>6}",
                "Avg",
                totals.true_positive,
                totals.false_positive,
                "",
                totals.true_negative,
                totals.false_negative,
                "",
                percent(Some(self.grade())),
            )
        }
    }
}

impl Display for GradeReport {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        for group in &self.groups {
            writeln!(f, "{}", group)?;
        }
        writeln!(f, "Group grades:")?;
        for group in &self.groups {
            writeln!(
                f,
                "  {:<20} {:>6}  x{}",
                group.group.to_string(),
                percent(Some(group.grade())),
                self.config.weight(group.group)
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Overall: {}", percent(Some(self.overall())))?;
        writeln!(f, "Score:   {} / {}", self.score(), self.config.max_score)
    }
}
