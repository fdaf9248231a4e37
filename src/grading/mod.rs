//! Grading collision predicates against a [`Fixture`].
//!
//! Every trial sweeps the second shape over its grid, compares the predicate with the
//! expected bit of each cell and keeps a [`TrialScore`]. Trial grades are averaged per
//! group, and group grades are combined with per-group weights into one overall grade.

mod report;
mod score;

pub use self::report::*;
pub use self::score::*;

use log::{trace, warn};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::collision::Intersects;
use crate::fixture::{ExpectedResults, Fixture, PositionRange, TestGroup, Trial, TrialGroup};
use crate::Point3;

/// Knobs of the grade computation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradingConfig {
    /// Integer score awarded for a perfect overall grade.
    pub max_score: u32,
    /// Weight of each group in the overall grade, indexed by [`TestGroup::index`].
    pub group_weights: [f64; 5],
}

impl Default for GradingConfig {
    /// Eight points, sphere vs. cuboid counting twice.
    fn default() -> Self {
        GradingConfig {
            max_score: 8,
            group_weights: [1.0, 1.0, 1.0, 1.0, 2.0],
        }
    }
}

impl GradingConfig {
    pub fn weight(&self, group: TestGroup) -> f64 {
        self.group_weights[group.index()]
    }
}

/// Sweeps `range` and scores `detect` against `expected`, cell by cell.
///
/// # Panics
/// Panics if `expected` was laid out for a grid other than `range`.
///
/// # Examples
/// ```
/// use geocollide::fixture::{ExpectedResults, PositionRange};
/// use geocollide::grading::score_trial;
/// use nalgebra::{Point3, Vector3};
///
/// let range = PositionRange::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0), [2, 1, 1]);
/// let expected = ExpectedResults::new(vec![true, false], [2, 1, 1]);
///
/// let score = score_trial(&range, &expected, |_| true);
/// assert_eq!((score.true_positive, score.false_positive), (1, 1));
/// assert_eq!(score.grade(), 0.5);
/// ```
pub fn score_trial<F>(range: &PositionRange, expected: &ExpectedResults, detect: F) -> TrialScore
where
    F: Fn(&Point3<f64>) -> bool,
{
    assert_eq!(
        range.counts,
        expected.counts(),
        "expected results were laid out for a different grid"
    );
    let mut score = TrialScore::default();
    for (x, y, z) in range.cells() {
        let position = range.position(x, y, z);
        let detected = detect(&position);
        trace!("cell ({}, {}, {}) at {:?}: {}", x, y, z, position, detected);
        score.record(detected, expected.get(x, y, z));
    }
    score
}

/// Scores the collision predicates on one fixture trial.
pub fn grade_trial(trial: &Trial) -> TrialScore {
    let first = trial.first_shape();
    score_trial(&trial.range, &trial.expected, |position| {
        first.intersects(&trial.second_size.at(*position))
    })
}

/// Scores every trial of `group`.
pub fn grade_group(group: &TrialGroup) -> GroupReport {
    #[cfg(feature = "rayon")]
    let scores: Vec<TrialScore> = group.trials.par_iter().map(grade_trial).collect();
    #[cfg(not(feature = "rayon"))]
    let scores: Vec<TrialScore> = group.trials.iter().map(grade_trial).collect();

    for (i, score) in scores.iter().enumerate() {
        if score.positive_rate().is_none() || score.negative_rate().is_none() {
            warn!(
                "{} trial {}: a rate has no samples and counts as 100%",
                group.group,
                i + 1
            );
        }
    }

    GroupReport {
        group: group.group,
        scores,
    }
}

/// Grades every group of `fixture`.
pub fn grade_fixture(fixture: &Fixture, config: &GradingConfig) -> GradeReport {
    GradeReport {
        groups: fixture.groups.iter().map(grade_group).collect(),
        config: config.clone(),
    }
}
