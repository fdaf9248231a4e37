//! Common utilities shared by unit tests.
#![cfg(test)]

use proptest::prelude::*;

use crate::fixture::TestGroup;
use crate::{Point3, Vector3};

/// A vector represented as a tuple
pub type TupleVec = (f64, f64, f64);

/// Generate a `TupleVec` for [`proptest::strategy::Strategy`] from -1e3 to 1e3.
/// Positions in fixtures stay well inside this range.
pub fn point_strategy() -> impl Strategy<Value = TupleVec> {
    (-1e3_f64..1e3_f64, -1e3_f64..1e3_f64, -1e3_f64..1e3_f64)
}

/// Generate a radius or a single half-extent from 0 to 1e3.
pub fn non_negative_strategy() -> impl Strategy<Value = f64> {
    0.0_f64..1e3_f64
}

/// Generate non-negative half-extents.
pub fn tuplevec_extent_strategy() -> impl Strategy<Value = TupleVec> {
    (
        non_negative_strategy(),
        non_negative_strategy(),
        non_negative_strategy(),
    )
}

/// Convert a `TupleVec` to a [`Point3`].
pub fn tuple_to_point(tpl: &TupleVec) -> Point3<f64> {
    Point3::new(tpl.0, tpl.1, tpl.2)
}

/// Convert a `TupleVec` to a [`Vector3`].
pub fn tuple_to_vector(tpl: &TupleVec) -> Vector3<f64> {
    Vector3::new(tpl.0, tpl.1, tpl.2)
}

/// Assembles fixture text group by group. Groups which are never set get zero trials.
#[derive(Default)]
pub struct FixtureBuilder {
    groups: [Vec<String>; 5],
}

impl FixtureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trials of `group`, each given as the text following the trial count.
    pub fn group(mut self, group: TestGroup, trials: &[&str]) -> Self {
        self.groups[group.index()] = trials.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn build(&self) -> String {
        let mut text = String::new();
        for trials in &self.groups {
            text.push_str(&format!("{}\n", trials.len()));
            for trial in trials {
                text.push_str(trial);
                text.push('\n');
            }
        }
        text
    }
}

/// Fixture text with no trials in any group.
pub fn empty_groups() -> String {
    FixtureBuilder::new().build()
}
