//! Reading grading fixtures.
//!
//! A fixture holds five groups of trials in a fixed order. Each group starts with its
//! trial count, followed by that many trials of the form
//!
//! ```text
//! pos1: <x> <y> <z>
//! size1: [nothing | <radius> | <hx> <hy> <hz>]
//! x2: <min_x> <inc_x> <count_x>
//! y2: <min_y> <inc_y> <count_y>
//! z2: <min_z> <inc_z> <count_z>
//! size2: [nothing | <radius> | <hx> <hy> <hz>]
//! result: <one 0/1 bit per grid cell, x fastest, then y, then z>
//! ```
//!
//! Tokens are separated by any whitespace, line breaks carry no meaning.

mod error;
mod tokenizer;

pub use self::error::*;
pub use self::tokenizer::*;

use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::axis::Axis;
use crate::shapes::{Cuboid, Shape, Sphere};
use crate::{Point3, Real, Vector3};

/// The kind of shape a size descriptor belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeKind {
    /// A bare position.
    Point,
    /// A center and a radius.
    Sphere,
    /// A center and three half-extents.
    Cuboid,
}

/// The five groups of a fixture, in file order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TestGroup {
    /// A fixed point against a grid of spheres.
    PointSphere,
    /// A fixed sphere against a grid of spheres.
    SphereSphere,
    /// A fixed point against a grid of cuboids.
    PointCuboid,
    /// A fixed cuboid against a grid of cuboids.
    CuboidCuboid,
    /// A fixed sphere against a grid of cuboids. Weighted double.
    SphereCuboid,
}

impl TestGroup {
    /// All groups in the order they appear in a fixture.
    pub const ALL: [TestGroup; 5] = [
        TestGroup::PointSphere,
        TestGroup::SphereSphere,
        TestGroup::PointCuboid,
        TestGroup::CuboidCuboid,
        TestGroup::SphereCuboid,
    ];

    /// Position of this group within a fixture.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kinds of the fixed first shape and of the swept second shape.
    pub fn shapes(self) -> (ShapeKind, ShapeKind) {
        match self {
            TestGroup::PointSphere => (ShapeKind::Point, ShapeKind::Sphere),
            TestGroup::SphereSphere => (ShapeKind::Sphere, ShapeKind::Sphere),
            TestGroup::PointCuboid => (ShapeKind::Point, ShapeKind::Cuboid),
            TestGroup::CuboidCuboid => (ShapeKind::Cuboid, ShapeKind::Cuboid),
            TestGroup::SphereCuboid => (ShapeKind::Sphere, ShapeKind::Cuboid),
        }
    }
}

impl Display for TestGroup {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match *self {
            TestGroup::PointSphere => "Point vs. Sphere",
            TestGroup::SphereSphere => "Sphere vs. Sphere",
            TestGroup::PointCuboid => "Point vs. Cuboid",
            TestGroup::CuboidCuboid => "Cuboid vs. Cuboid",
            TestGroup::SphereCuboid => "Sphere vs. Cuboid",
        })
    }
}

/// Size of a shape as read from a `size1:`/`size2:` line.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapeSize {
    /// Empty size line.
    Point,
    /// One non-negative value.
    Radius(f64),
    /// Three non-negative values.
    HalfExtents(Vector3<f64>),
}

impl ShapeSize {
    /// Places a shape of this size at `position`.
    pub fn at(&self, position: Point3<f64>) -> Shape<f64> {
        match *self {
            ShapeSize::Point => Shape::Point(position),
            ShapeSize::Radius(radius) => Shape::Sphere(Sphere::new(position, radius)),
            ShapeSize::HalfExtents(half_extents) => {
                Shape::Cuboid(Cuboid::new(position, half_extents))
            }
        }
    }
}

/// Returns `min + inc * (x, y, z)`, component-wise.
///
/// # Examples
/// ```
/// use geocollide::fixture::calculate_position;
/// use nalgebra::{Point3, Vector3};
///
/// let min = Point3::new(-1.0, 0.0, 10.0);
/// let inc = Vector3::new(0.5, 2.0, -1.0);
///
/// assert_eq!(calculate_position(&min, &inc, 2, 1, 3), Point3::new(0.0, 2.0, 7.0));
/// ```
pub fn calculate_position<T: Real>(
    min: &Point3<T>,
    inc: &Vector3<T>,
    x: usize,
    y: usize,
    z: usize,
) -> Point3<T> {
    let steps = Vector3::new(x as f64, y as f64, z as f64).map(nalgebra::convert::<f64, T>);
    min + inc.component_mul(&steps)
}

/// A grid of positions for the second shape of a trial.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionRange {
    pub min: Point3<f64>,
    pub increment: Vector3<f64>,
    pub counts: [usize; 3],
}

impl PositionRange {
    /// Creates a new [`PositionRange`].
    ///
    /// # Panics
    /// Panics, in debug mode, if a count or an increment is zero.
    pub fn new(min: Point3<f64>, increment: Vector3<f64>, counts: [usize; 3]) -> Self {
        debug_assert!(counts.iter().all(|c| *c > 0), "grid counts must be positive");
        debug_assert!(
            increment.iter().all(|i| *i != 0.0),
            "grid increments must not be zero"
        );
        PositionRange {
            min,
            increment,
            counts,
        }
    }

    /// Number of grid cells.
    pub fn cell_count(&self) -> usize {
        self.counts.iter().product()
    }

    /// Position of the cell at grid offsets `(x, y, z)`.
    pub fn position(&self, x: usize, y: usize, z: usize) -> Point3<f64> {
        calculate_position(&self.min, &self.increment, x, y, z)
    }

    /// Grid offsets of every cell, z outermost and x fastest.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, usize)> {
        let [cx, cy, cz] = self.counts;
        (0..cz).flat_map(move |z| (0..cy).flat_map(move |y| (0..cx).map(move |x| (x, y, z))))
    }
}

/// Ground-truth collision bits for the cells of a [`PositionRange`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpectedResults {
    bits: Vec<bool>,
    counts: [usize; 3],
}

impl ExpectedResults {
    /// Wraps `bits` laid out x fastest, then y, then z.
    ///
    /// # Panics
    /// Panics, in debug mode, if the length does not match `counts`.
    pub fn new(bits: Vec<bool>, counts: [usize; 3]) -> Self {
        debug_assert_eq!(bits.len(), counts.iter().product::<usize>());
        ExpectedResults { bits, counts }
    }

    /// The expected result for grid offsets `(x, y, z)`.
    pub fn get(&self, x: usize, y: usize, z: usize) -> bool {
        let [cx, cy, _] = self.counts;
        self.bits[x + cx * (y + cy * z)]
    }

    /// Number of cells, one bit each.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of cells expected to collide.
    pub fn positives(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    /// Grid dimensions the bits were laid out for.
    pub fn counts(&self) -> [usize; 3] {
        self.counts
    }
}

/// One trial: a fixed first shape, a grid of second shapes and one expected bit per cell.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trial {
    pub first_position: Point3<f64>,
    pub first_size: ShapeSize,
    pub range: PositionRange,
    pub second_size: ShapeSize,
    pub expected: ExpectedResults,
}

impl Trial {
    /// The fixed first shape.
    pub fn first_shape(&self) -> Shape<f64> {
        self.first_size.at(self.first_position)
    }
}

/// All trials of one [`TestGroup`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialGroup {
    pub group: TestGroup,
    pub trials: Vec<Trial>,
}

/// A parsed fixture: one [`TrialGroup`] per [`TestGroup`], in [`TestGroup::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fixture {
    pub groups: Vec<TrialGroup>,
}

impl Fixture {
    /// Parses the five groups of a fixture from `input`.
    ///
    /// # Examples
    /// ```
    /// use geocollide::fixture::Fixture;
    ///
    /// let fixture = Fixture::parse("0 0 0 0 0").unwrap();
    /// assert_eq!(fixture.groups.len(), 5);
    /// assert!(fixture.groups.iter().all(|g| g.trials.is_empty()));
    ///
    /// assert!(Fixture::parse("0 0 0").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Fixture, FixtureFormatError> {
        let mut reader = FixtureReader::new(input);
        let groups = TestGroup::ALL
            .iter()
            .map(|group| reader.read_group(*group))
            .collect::<Result<Vec<_>, _>>()?;
        if let Some(token) = reader.tokens.next() {
            warn!(
                "ignoring trailing fixture content starting at {}: `{}`",
                token.location, token.text
            );
        }
        Ok(Fixture { groups })
    }

    /// Reads and parses the fixture file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Fixture, LoadError> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("read {} bytes from {}", input.len(), path.display());
        Fixture::parse(&input).map_err(|source| LoadError::Format {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The trials of `group`, if the fixture has them.
    pub fn group(&self, group: TestGroup) -> Option<&TrialGroup> {
        self.groups.iter().find(|g| g.group == group)
    }
}

/// Strict, sequential reader for fixture text. Every literal label must match exactly,
/// and the first deviation is reported with its location.
#[derive(Debug, Clone)]
pub struct FixtureReader<'a> {
    tokens: Tokenizer<'a>,
}

type ParseResult<T> = Result<T, FixtureFormatError>;

impl<'a> FixtureReader<'a> {
    /// Starts reading at the beginning of `input`.
    pub fn new(input: &'a str) -> Self {
        FixtureReader {
            tokens: Tokenizer::new(input),
        }
    }

    /// Reads a trial count followed by that many trials for `group`.
    pub fn read_group(&mut self, group: TestGroup) -> ParseResult<TrialGroup> {
        let count_token = self.next_token("trial count")?;
        let count = count_token
            .text
            .parse::<usize>()
            .map_err(|_| invalid_number(&count_token, "trial count"))?;
        debug!("{}: reading {} trials", group, count);

        let trials = (0..count)
            .map(|_| self.read_trial(group))
            .collect::<ParseResult<Vec<_>>>()?;
        Ok(TrialGroup { group, trials })
    }

    /// Reads a single trial for `group`.
    pub fn read_trial(&mut self, group: TestGroup) -> ParseResult<Trial> {
        let (first_kind, second_kind) = group.shapes();

        self.expect_literal("pos1:")?;
        let first_position = Point3::from(self.read_vector()?);
        let first_size = self.read_size("size1:", first_kind)?;
        let range = self.read_range()?;
        let second_size = self.read_size("size2:", second_kind)?;
        self.expect_literal("result:")?;
        let expected = self.read_results(range.counts)?;

        debug!(
            "{}: trial at {:?} sweeping {} cells",
            group,
            first_position,
            range.cell_count()
        );
        Ok(Trial {
            first_position,
            first_size,
            range,
            second_size,
            expected,
        })
    }

    fn next_token(&mut self, expected: &str) -> ParseResult<Token<'a>> {
        let location = self.tokens.location();
        self.tokens.next().ok_or_else(|| {
            FixtureFormatError::new(
                location,
                FormatErrorKind::UnexpectedEof {
                    expected: expected.to_string(),
                },
            )
        })
    }

    fn expect_literal(&mut self, literal: &str) -> ParseResult<()> {
        let token = self.next_token(literal)?;
        if token.text == literal {
            Ok(())
        } else {
            Err(FixtureFormatError::new(
                token.location,
                FormatErrorKind::UnexpectedToken {
                    expected: literal.to_string(),
                    found: token.text.to_string(),
                },
            ))
        }
    }

    fn read_real(&mut self) -> ParseResult<(f64, Token<'a>)> {
        let token = self.next_token("number")?;
        let value = token
            .text
            .parse::<f64>()
            .map_err(|_| invalid_number(&token, "number"))?;
        if !value.is_finite() {
            return Err(FixtureFormatError::new(
                token.location,
                FormatErrorKind::NonFinite {
                    token: token.text.to_string(),
                },
            ));
        }
        Ok((value, token))
    }

    fn read_vector(&mut self) -> ParseResult<Vector3<f64>> {
        let (x, _) = self.read_real()?;
        let (y, _) = self.read_real()?;
        let (z, _) = self.read_real()?;
        Ok(Vector3::new(x, y, z))
    }

    fn read_size_value(&mut self) -> ParseResult<f64> {
        let (value, token) = self.read_real()?;
        if value < 0.0 {
            return Err(FixtureFormatError::new(
                token.location,
                FormatErrorKind::NegativeSize { value },
            ));
        }
        Ok(value)
    }

    fn read_size(&mut self, label: &str, kind: ShapeKind) -> ParseResult<ShapeSize> {
        self.expect_literal(label)?;
        Ok(match kind {
            ShapeKind::Point => ShapeSize::Point,
            ShapeKind::Sphere => ShapeSize::Radius(self.read_size_value()?),
            ShapeKind::Cuboid => ShapeSize::HalfExtents(Vector3::new(
                self.read_size_value()?,
                self.read_size_value()?,
                self.read_size_value()?,
            )),
        })
    }

    fn read_range(&mut self) -> ParseResult<PositionRange> {
        let mut min = Point3::origin();
        let mut increment = Vector3::zeros();
        let mut counts = [0; 3];

        for axis in Axis::ALL {
            let i = axis.index();
            let label = format!("{}2:", axis);
            self.expect_literal(&label)?;

            min[i] = self.read_real()?.0;

            let (inc, inc_token) = self.read_real()?;
            if inc == 0.0 {
                return Err(FixtureFormatError::new(
                    inc_token.location,
                    FormatErrorKind::ZeroIncrement { axis: label },
                ));
            }
            increment[i] = inc;

            let count_token = self.next_token("step count")?;
            let count = count_token
                .text
                .parse::<i64>()
                .map_err(|_| invalid_number(&count_token, "step count"))?;
            if count <= 0 {
                return Err(FixtureFormatError::new(
                    count_token.location,
                    FormatErrorKind::NonPositiveCount { axis: label, count },
                ));
            }
            counts[i] = usize::try_from(count)
                .map_err(|_| invalid_number(&count_token, "step count"))?;
        }

        Ok(PositionRange::new(min, increment, counts))
    }

    fn read_results(&mut self, counts: [usize; 3]) -> ParseResult<ExpectedResults> {
        let token = self.next_token("result bits")?;
        let expected_len = counts
            .iter()
            .try_fold(1usize, |len, count| len.checked_mul(*count))
            .ok_or_else(|| {
                FixtureFormatError::new(token.location, FormatErrorKind::GridTooLarge)
            })?;

        let bits = token
            .text
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                found => Err(FixtureFormatError::new(
                    token.location,
                    FormatErrorKind::InvalidResultBit { found },
                )),
            })
            .collect::<ParseResult<Vec<_>>>()?;

        if bits.len() != expected_len {
            return Err(FixtureFormatError::new(
                token.location,
                FormatErrorKind::ResultLength {
                    expected: expected_len,
                    found: bits.len(),
                },
            ));
        }
        Ok(ExpectedResults::new(bits, counts))
    }
}

fn invalid_number(token: &Token, expected: &'static str) -> FixtureFormatError {
    FixtureFormatError::new(
        token.location,
        FormatErrorKind::InvalidNumber {
            token: token.text.to_string(),
            expected,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testbase::{empty_groups, FixtureBuilder};

    const SPHERE_TRIAL: &str = "pos1: 0 0 0
size1:
x2: -1 1 3
y2: 0 1 1
z2: 0 1 2
size2: 1.5
result: 111000";

    fn read_single(group: TestGroup, trial: &str) -> ParseResult<Trial> {
        FixtureReader::new(trial).read_trial(group)
    }

    #[test]
    fn test_read_point_sphere_trial() {
        let trial = read_single(TestGroup::PointSphere, SPHERE_TRIAL).unwrap();

        assert_eq!(trial.first_position, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(trial.first_size, ShapeSize::Point);
        assert_eq!(trial.range.min, Point3::new(-1.0, 0.0, 0.0));
        assert_eq!(trial.range.increment, Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(trial.range.counts, [3, 1, 2]);
        assert_eq!(trial.second_size, ShapeSize::Radius(1.5));
        assert_eq!(trial.expected.len(), 6);
        assert_eq!(trial.expected.positives(), 3);
        assert!(trial.expected.get(2, 0, 0));
        assert!(!trial.expected.get(0, 0, 1));
    }

    #[test]
    fn test_read_cuboid_trial_is_whitespace_insensitive() {
        let text = "pos1: 1 2 3 size1: 0.5 0.5 0.5 x2: 0 1 1 y2: 0 1 1 z2: 0 1 1 \
                    size2:\n1\n2\n3\nresult:\n1";
        let trial = read_single(TestGroup::CuboidCuboid, text).unwrap();
        assert_eq!(trial.first_size, ShapeSize::HalfExtents(Vector3::new(0.5, 0.5, 0.5)));
        assert_eq!(trial.second_size, ShapeSize::HalfExtents(Vector3::new(1.0, 2.0, 3.0)));
        assert!(trial.expected.get(0, 0, 0));
    }

    #[test]
    fn test_wrong_literal() {
        let text = SPHERE_TRIAL.replace("y2:", "y:");
        let err = read_single(TestGroup::PointSphere, &text).unwrap_err();
        assert_eq!(
            err.kind,
            FormatErrorKind::UnexpectedToken {
                expected: "y2:".to_string(),
                found: "y:".to_string()
            }
        );
        assert_eq!(err.location.line, 4);
        assert_eq!(err.location.column, 1);
    }

    #[test]
    fn test_zero_increment() {
        let text = SPHERE_TRIAL.replace("z2: 0 1 2", "z2: 0 0 2");
        let err = read_single(TestGroup::PointSphere, &text).unwrap_err();
        assert_eq!(
            err.kind,
            FormatErrorKind::ZeroIncrement {
                axis: "z2:".to_string()
            }
        );
    }

    #[test]
    fn test_non_positive_count() {
        let text = SPHERE_TRIAL.replace("x2: -1 1 3", "x2: -1 1 0");
        let err = read_single(TestGroup::PointSphere, &text).unwrap_err();
        assert_eq!(
            err.kind,
            FormatErrorKind::NonPositiveCount {
                axis: "x2:".to_string(),
                count: 0
            }
        );

        let text = SPHERE_TRIAL.replace("x2: -1 1 3", "x2: -1 1 -4");
        let err = read_single(TestGroup::PointSphere, &text).unwrap_err();
        assert!(matches!(err.kind, FormatErrorKind::NonPositiveCount { count: -4, .. }));
    }

    #[test]
    fn test_negative_size() {
        let text = SPHERE_TRIAL.replace("size2: 1.5", "size2: -1.5");
        let err = read_single(TestGroup::PointSphere, &text).unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::NegativeSize { value: -1.5 });
    }

    #[test]
    fn test_invalid_result_bit() {
        let text = SPHERE_TRIAL.replace("111000", "1110x0");
        let err = read_single(TestGroup::PointSphere, &text).unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::InvalidResultBit { found: 'x' });
        assert_eq!(err.location.line, 7);
    }

    #[test]
    fn test_result_length_mismatch() {
        let text = SPHERE_TRIAL.replace("111000", "11100");
        let err = read_single(TestGroup::PointSphere, &text).unwrap_err();
        assert_eq!(
            err.kind,
            FormatErrorKind::ResultLength {
                expected: 6,
                found: 5
            }
        );
    }

    #[test]
    fn test_grid_too_large() {
        let huge = i64::MAX.to_string();
        let text = SPHERE_TRIAL
            .replace("x2: -1 1 3", &format!("x2: -1 1 {}", huge))
            .replace("z2: 0 1 2", &format!("z2: 0 1 {}", huge));
        let err = read_single(TestGroup::PointSphere, &text).unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::GridTooLarge);
    }

    #[test]
    fn test_invalid_and_non_finite_numbers() {
        let text = SPHERE_TRIAL.replace("pos1: 0 0 0", "pos1: 0 zero 0");
        let err = read_single(TestGroup::PointSphere, &text).unwrap_err();
        assert!(matches!(err.kind, FormatErrorKind::InvalidNumber { .. }));

        let text = SPHERE_TRIAL.replace("pos1: 0 0 0", "pos1: 0 inf 0");
        let err = read_single(TestGroup::PointSphere, &text).unwrap_err();
        assert!(matches!(err.kind, FormatErrorKind::NonFinite { .. }));
    }

    #[test]
    fn test_unexpected_eof() {
        let text = SPHERE_TRIAL.replace("result: 111000", "result:");
        let err = read_single(TestGroup::PointSphere, &text).unwrap_err();
        assert_eq!(
            err.kind,
            FormatErrorKind::UnexpectedEof {
                expected: "result bits".to_string()
            }
        );
    }

    #[test]
    fn test_error_message_names_location() {
        let err = Fixture::parse("0 0 x").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("line 1, column 5"), "{}", message);
    }

    #[test]
    fn test_parse_full_fixture() {
        let text = FixtureBuilder::new()
            .group(TestGroup::PointSphere, &[SPHERE_TRIAL])
            .build();
        let fixture = Fixture::parse(&text).unwrap();

        assert_eq!(fixture.groups.len(), 5);
        for (group, expected) in fixture.groups.iter().zip(TestGroup::ALL) {
            assert_eq!(group.group, expected);
        }
        assert_eq!(fixture.group(TestGroup::PointSphere).unwrap().trials.len(), 1);
        assert!(fixture.group(TestGroup::SphereCuboid).unwrap().trials.is_empty());
    }

    #[test]
    fn test_parse_empty_groups() {
        let fixture = Fixture::parse(&empty_groups()).unwrap();
        assert!(fixture.groups.iter().all(|g| g.trials.is_empty()));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Fixture::load("no/such/fixture.txt").unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }

    #[test]
    fn test_load_malformed_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/zero_increment.txt");
        match Fixture::load(path).unwrap_err() {
            LoadError::Format { source, .. } => {
                assert_eq!(
                    source.location,
                    Location {
                        line: 4,
                        column: 8,
                        offset: 28,
                    }
                );
                assert_eq!(
                    source.kind,
                    FormatErrorKind::ZeroIncrement {
                        axis: "x2:".to_string()
                    }
                );
            }
            err => panic!("expected a format error, got {}", err),
        }
    }

    #[test]
    fn test_cells_iterate_x_fastest() {
        let range = PositionRange::new(
            Point3::new(0.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
            [2, 2, 2],
        );
        let cells: Vec<_> = range.cells().collect();
        assert_eq!(cells.len(), range.cell_count());
        assert_eq!(cells[0], (0, 0, 0));
        assert_eq!(cells[1], (1, 0, 0));
        assert_eq!(cells[2], (0, 1, 0));
        assert_eq!(cells[4], (0, 0, 1));
        assert_eq!(cells[7], (1, 1, 1));
    }

    #[test]
    fn test_expected_results_index_matches_cell_order() {
        let counts = [3, 2, 2];
        let bits: Vec<bool> = (0..12).map(|i| i % 5 == 0).collect();
        let expected = ExpectedResults::new(bits.clone(), counts);
        let range = PositionRange::new(Point3::origin(), Vector3::new(1.0, 1.0, 1.0), counts);

        for (i, (x, y, z)) in range.cells().enumerate() {
            assert_eq!(expected.get(x, y, z), bits[i]);
        }
    }

    #[test]
    fn test_calculate_position_negative_increment() {
        let position = calculate_position(
            &Point3::new(1.0, 1.0, 1.0),
            &Vector3::new(-0.5, 0.25, 2.0),
            4,
            4,
            0,
        );
        assert_eq!(position, Point3::new(-1.0, 2.0, 1.0));
    }
}
