use crate::{vec3, Plane, Sphere, Vec3};
use quickcheck::{Arbitrary, Gen, TestResult};

#[derive(Debug, Copy, Clone)]
struct F3201(f32);

impl Arbitrary for F3201 {
    fn arbitrary(g: &mut Gen) -> Self {
        let v = <u32 as Arbitrary>::arbitrary(g);
        F3201(v as f32 / u32::MAX as f32)
    }
}

/// A sphere and a plane crossing or missing it by at most half a radius.
#[derive(Debug, Clone)]
struct Cut {
    sphere: Sphere,
    plane: Plane,
}

impl Arbitrary for Cut {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut unit = || F3201::arbitrary(g).0;
        let radius = 0.01 + unit() * 5.0;
        let n = vec3(unit() - 0.5, unit() - 0.5, unit() - 0.5)
            .try_normalize()
            .unwrap_or(Vec3::Z);
        let o = (unit() * 2.0 - 1.0) * 1.5 * radius;
        Cut {
            sphere: Sphere::new(radius),
            plane: Plane::new(n, o),
        }
    }
}

#[test]
fn quickcheck_weighted_centers_cancel() {
    let mut q = quickcheck::QuickCheck::new().tests(500);
    q.quickcheck(
        (|cut: Cut| -> TestResult {
            let Cut { sphere, plane } = cut;
            let flipped = plane.flipped();

            let (c1, c2) = match (
                sphere.center_of_volume_below(&plane),
                sphere.center_of_volume_below(&flipped),
            ) {
                (Some(c1), Some(c2)) => (c1, c2),
                (None, None) => return TestResult::discard(),
                _ => return TestResult::error("only one side has a centroid"),
            };

            let sum = c1 * sphere.volume_below(&plane) + c2 * sphere.volume_below(&flipped);
            let scale = sphere.volume() * sphere.radius();
            if sum.mag() <= 1e-5 * scale {
                TestResult::passed()
            } else {
                TestResult::error(format!("{:?} -> {:?}", cut_str(&sphere, &plane), sum))
            }
        }) as fn(_) -> TestResult,
    );
}

#[test]
fn quickcheck_complementary_volumes_fill_sphere() {
    let mut q = quickcheck::QuickCheck::new().tests(500);
    q.quickcheck(
        (|cut: Cut| -> TestResult {
            let Cut { sphere, plane } = cut;
            let other_side = Plane::new(-plane.n, -plane.o);

            let total = sphere.volume_below(&plane) + sphere.volume_below(&other_side);
            let full = sphere.volume();
            if (total - full).abs() <= 1e-4 * full {
                TestResult::passed()
            } else {
                TestResult::error(format!(
                    "{}: {} != {}",
                    cut_str(&sphere, &plane),
                    total,
                    full
                ))
            }
        }) as fn(_) -> TestResult,
    );
}

#[test]
fn quickcheck_centroid_is_moment_of_slices() {
    let mut q = quickcheck::QuickCheck::new().tests(100);
    q.quickcheck(
        (|cut: Cut| -> TestResult {
            let Cut { sphere, plane } = cut;
            let r = sphere.radius();
            let Some(c) = sphere.center_of_volume_below(&plane) else {
                return TestResult::discard();
            };

            // integrate the axial moment of thin disks stacked along -n up to the plane
            let top = plane.o.min(r);
            let steps = 2000;
            let dt = (top + r) / steps as f32;
            let (mut vol, mut moment) = (0.0f64, 0.0f64);
            for i in 0..steps {
                let t = -r + (i as f32 + 0.5) * dt;
                let area = std::f32::consts::PI * (r * r - t * t).max(0.0);
                vol += (area * dt) as f64;
                moment += (area * dt * t) as f64;
            }
            if vol <= 0.0 {
                return TestResult::discard();
            }
            let expected = plane.n * (moment / vol) as f32;

            if c.is_close(expected, 1e-2 * r) {
                TestResult::passed()
            } else {
                TestResult::error(format!(
                    "{}: {:?} != {:?}",
                    cut_str(&sphere, &plane),
                    c,
                    expected
                ))
            }
        }) as fn(_) -> TestResult,
    );
}

#[test]
fn quickcheck_volume_grows_with_offset() {
    let mut q = quickcheck::QuickCheck::new().tests(300);
    q.quickcheck(
        (|cut: Cut, delta: F3201| -> TestResult {
            let Cut { sphere, plane } = cut;
            let higher = Plane::new(plane.n, plane.o + delta.0 * sphere.radius());

            let v1 = sphere.volume_below(&plane);
            let v2 = sphere.volume_below(&higher);
            if v1 <= v2 + 1e-5 * sphere.volume() && v2 <= sphere.volume() {
                TestResult::passed()
            } else {
                TestResult::error(format!("{}: {} > {}", cut_str(&sphere, &plane), v1, v2))
            }
        }) as fn(_, _) -> TestResult,
    );
}

fn cut_str(sphere: &Sphere, plane: &Plane) -> String {
    format!("r={} n={} o={}", sphere.radius(), plane.n, plane.o)
}
