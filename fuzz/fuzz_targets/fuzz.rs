#![no_main]
use std::fmt::{self, Debug, Formatter};

use arbitrary::Arbitrary;
use geocollide::collision::{cuboid_vs_cuboid, sphere_vs_cuboid, sphere_vs_sphere, Intersects};
use geocollide::fixture::{Fixture, TestGroup};
use geocollide::grading::{grade_fixture, GradingConfig};
use geocollide::shapes::{Cuboid, Sphere};
use libfuzzer_sys::fuzz_target;
use nalgebra::{Point3, Vector3};
use ordered_float::NotNan;

type Float = f64;
const LIMIT: Float = 1_000_000.0;

fuzz_target!(|workload: Workload| {
    workload.fuzz();
});

#[derive(Arbitrary)]
struct ArbitraryPoint {
    coordinates: [NotNan<Float>; 3],
}

impl ArbitraryPoint {
    fn point(&self) -> Point3<Float> {
        Point3::from_slice(&self.coordinates).map(|f| f.into_inner().clamp(-LIMIT, LIMIT))
    }

    fn extents(&self) -> Vector3<Float> {
        self.point().coords.map(Float::abs)
    }
}

impl Debug for ArbitraryPoint {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Debug::fmt(&self.point(), f)
    }
}

#[derive(Debug, Arbitrary)]
struct ArbitraryShapes {
    a: ArbitraryPoint,
    b: ArbitraryPoint,
    half_a: ArbitraryPoint,
    half_b: ArbitraryPoint,
    radius_a: NotNan<Float>,
    radius_b: NotNan<Float>,
}

#[derive(Debug, Arbitrary)]
struct Workload {
    shapes: ArbitraryShapes,
    fixture: String,
}

impl Workload {
    fn fuzz(self) {
        let s = &self.shapes;
        let (a, b) = (s.a.point(), s.b.point());
        let (half_a, half_b) = (s.half_a.extents(), s.half_b.extents());
        let radius_a = s.radius_a.into_inner().abs().min(LIMIT);
        let radius_b = s.radius_b.into_inner().abs().min(LIMIT);

        assert_eq!(
            sphere_vs_sphere(&a, radius_a, &b, radius_b),
            sphere_vs_sphere(&b, radius_b, &a, radius_a)
        );
        assert_eq!(
            cuboid_vs_cuboid(&a, &half_a, &b, &half_b),
            cuboid_vs_cuboid(&b, &half_b, &a, &half_a)
        );

        let sphere = Sphere::new(a, radius_a);
        let cuboid = Cuboid::new(b, half_b);
        assert_eq!(
            sphere_vs_cuboid(&a, radius_a, &b, &half_b),
            cuboid.intersects(&sphere)
        );
        // Enlarging the sphere cannot remove a hit.
        if sphere.intersects(&cuboid) {
            assert!(Sphere::new(a, radius_a * 2.0).intersects(&cuboid));
        }

        // Malformed fixtures must come back as errors, never as panics.
        if let Ok(fixture) = Fixture::parse(&self.fixture) {
            let cells: usize = fixture
                .groups
                .iter()
                .flat_map(|g| &g.trials)
                .map(|t| t.range.cell_count())
                .sum();
            if cells <= 4096 {
                let report = grade_fixture(&fixture, &GradingConfig::default());
                assert_eq!(report.groups.len(), TestGroup::ALL.len());
                assert!(report.score() <= 8);
            }
        }
    }
}
