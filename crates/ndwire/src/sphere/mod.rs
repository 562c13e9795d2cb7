//! Point sampling on the unit (N−1)-sphere in R^N.
//!
//! Purpose
//! - Produce a requested number of unit-norm points per dimension, using the
//!   best construction available at that dimension.
//!
//! Why three strategies
//! - N = 2 and N = 3 have closed-form low-discrepancy placements (golden-angle
//!   circle, Fibonacci sphere) that avoid the clustering of random sampling.
//! - No closed form generalizes beyond 3 dimensions, so every other dimension
//!   normalizes iid Gaussian draws instead. That branch is the only one using
//!   randomness; the seed is an explicit parameter (default `DEFAULT_SEED`)
//!   so runs replay bit-for-bit.
//!
//! The output is a `PointCloud`: no edges, so it bypasses wireframe expansion.

use nalgebra::DVector;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};
use std::fmt;

use crate::shape::{Point, PointCloud};

/// Seed used when the caller passes none; kept at the reference value so
/// default runs stay comparable across ports.
pub const DEFAULT_SEED: u64 = 42;

/// Error type for sphere sampling.
#[derive(Debug)]
pub enum SampleError {
    InvalidParams { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Sampling strategy, selected once per call by dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SphereStrategy {
    /// N = 2: deterministic golden-angle walk around the circle.
    GoldenAngleCircle,
    /// N = 3: deterministic Fibonacci sphere (linear latitude sweep).
    FibonacciSphere,
    /// Every other N: normalized iid standard-normal draws.
    GaussianNormalized,
}

impl SphereStrategy {
    /// Pick the strategy for an ambient dimension.
    #[inline]
    pub fn for_dimension(dimension: usize) -> Self {
        match dimension {
            2 => Self::GoldenAngleCircle,
            3 => Self::FibonacciSphere,
            _ => Self::GaussianNormalized,
        }
    }
}

/// Golden angle 2π(1 − 1/φ), φ = (1 + √5)/2.
#[inline]
pub fn golden_angle() -> f64 {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    2.0 * std::f64::consts::PI * (1.0 - 1.0 / phi)
}

/// Sample `count` unit-norm points on the (dimension−1)-sphere.
///
/// `seed` feeds the Gaussian branch only; `None` means [`DEFAULT_SEED`]. The
/// deterministic branches ignore it.
///
/// Errors (`InvalidParams`): `count == 0`, `dimension == 0`, and the
/// Fibonacci branch with `count == 1` (its latitude sweep divides by
/// `count − 1`).
pub fn sample_hypersphere(
    count: usize,
    dimension: usize,
    seed: Option<u64>,
) -> Result<PointCloud, SampleError> {
    if count == 0 {
        return Err(SampleError::invalid("count must be > 0"));
    }
    if dimension == 0 {
        return Err(SampleError::invalid("dimension must be >= 1"));
    }
    match SphereStrategy::for_dimension(dimension) {
        SphereStrategy::GoldenAngleCircle => Ok(golden_angle_circle(count)),
        SphereStrategy::FibonacciSphere => fibonacci_sphere(count),
        SphereStrategy::GaussianNormalized => Ok(gaussian_normalized(
            count,
            dimension,
            seed.unwrap_or(DEFAULT_SEED),
        )),
    }
}

/// N = 2: θ_k = k · golden_angle, point_k = (cos θ_k, sin θ_k).
fn golden_angle_circle(count: usize) -> PointCloud {
    let ga = golden_angle();
    let points = (0..count)
        .map(|k| {
            let theta = k as f64 * ga;
            DVector::from_vec(vec![theta.cos(), theta.sin()])
        })
        .collect();
    PointCloud { points }
}

/// N = 3: y sweeps 1 → −1 linearly, longitude advances by the golden angle.
fn fibonacci_sphere(count: usize) -> Result<PointCloud, SampleError> {
    if count < 2 {
        return Err(SampleError::invalid(
            "Fibonacci sphere needs count >= 2 (latitude step divides by count - 1)",
        ));
    }
    let ga = golden_angle();
    let points = (0..count)
        .map(|k| {
            let y = 1.0 - 2.0 * k as f64 / (count - 1) as f64;
            let radius = (1.0 - y * y).sqrt();
            let theta = k as f64 * ga;
            DVector::from_vec(vec![theta.cos() * radius, y, theta.sin() * radius])
        })
        .collect();
    Ok(PointCloud { points })
}

/// General N: draw iid standard normals and normalize (uniform in the limit).
fn gaussian_normalized(count: usize, dimension: usize, seed: u64) -> PointCloud {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(count);
    while points.len() < count {
        let v: Point = DVector::from_fn(dimension, |_, _| {
            let x: f64 = StandardNormal.sample(&mut rng);
            x
        });
        let norm = v.norm();
        // A zero draw is astronomically unlikely; redraw keeps the output
        // well-defined without disturbing determinism.
        if norm > 1e-12 {
            points.push(v / norm);
        }
    }
    PointCloud { points }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAU: f64 = 2.0 * std::f64::consts::PI;

    #[test]
    fn circle_points_sit_on_unit_circle_with_golden_spacing() {
        let cloud = sample_hypersphere(64, 2, None).unwrap();
        assert_eq!(cloud.len(), 64);
        let ga = golden_angle();
        let mut prev_angle: Option<f64> = None;
        for p in &cloud.points {
            assert!((p.norm() - 1.0).abs() < 1e-9);
            let angle = p[1].atan2(p[0]);
            if let Some(prev) = prev_angle {
                let step = (angle - prev).rem_euclid(TAU);
                assert!((step - ga).abs() < 1e-9, "step {step} vs golden {ga}");
            }
            prev_angle = Some(angle);
        }
    }

    #[test]
    fn fibonacci_sphere_sweeps_latitude_monotonically() {
        let cloud = sample_hypersphere(100, 3, None).unwrap();
        assert_eq!(cloud.len(), 100);
        assert!((cloud.points[0][1] - 1.0).abs() < 1e-12);
        assert!((cloud.points[99][1] + 1.0).abs() < 1e-12);
        for pair in cloud.points.windows(2) {
            assert!(pair[1][1] < pair[0][1]);
        }
        for p in &cloud.points {
            assert!((p.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn fibonacci_sphere_rejects_single_point() {
        let err = sample_hypersphere(1, 3, None).unwrap_err();
        assert!(matches!(err, SampleError::InvalidParams { .. }));
    }

    #[test]
    fn zero_count_and_zero_dimension_are_rejected() {
        assert!(sample_hypersphere(0, 4, None).is_err());
        assert!(sample_hypersphere(10, 0, None).is_err());
    }

    #[test]
    fn gaussian_branch_is_unit_norm_and_reproducible() {
        for dim in [1, 4, 5, 7] {
            let a = sample_hypersphere(50, dim, Some(2025)).unwrap();
            let b = sample_hypersphere(50, dim, Some(2025)).unwrap();
            assert_eq!(a.len(), 50);
            for (pa, pb) in a.points.iter().zip(&b.points) {
                assert!((pa.norm() - 1.0).abs() < 1e-9);
                assert_eq!(pa, pb, "fixed seed must replay bit-for-bit");
            }
        }
    }

    #[test]
    fn default_seed_matches_explicit_default() {
        let a = sample_hypersphere(20, 6, None).unwrap();
        let b = sample_hypersphere(20, 6, Some(DEFAULT_SEED)).unwrap();
        for (pa, pb) in a.points.iter().zip(&b.points) {
            assert_eq!(pa, pb);
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let a = sample_hypersphere(8, 4, Some(1)).unwrap();
        let b = sample_hypersphere(8, 4, Some(2)).unwrap();
        assert!(a.points.iter().zip(&b.points).any(|(pa, pb)| pa != pb));
    }

    #[test]
    fn strategy_dispatch_by_dimension() {
        assert_eq!(
            SphereStrategy::for_dimension(2),
            SphereStrategy::GoldenAngleCircle
        );
        assert_eq!(
            SphereStrategy::for_dimension(3),
            SphereStrategy::FibonacciSphere
        );
        for dim in [1, 4, 5, 9] {
            assert_eq!(
                SphereStrategy::for_dimension(dim),
                SphereStrategy::GaussianNormalized
            );
        }
    }
}
