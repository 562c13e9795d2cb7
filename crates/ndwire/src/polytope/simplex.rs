//! Regular simplex generator (SVD embedding into N dimensions).
//!
//! Construction
//! - The N+1 standard basis vectors of R^(N+1) are mutually equidistant, so
//!   they form a regular simplex sitting in the hyperplane x·1 = 1.
//! - Subtracting the centroid centers it at the origin; the centered vertex
//!   matrix then has rank N, and an SVD of it (vertices as columns) rotates
//!   the simplex into the span of the first N left singular vectors without
//!   distorting pairwise distances.
//! - Dropping the (always-near-zero) last coordinate and scaling by √2 gives
//!   edge length 2, matching the ±1 cube convention.
//!
//! Sign and ordering of singular vectors are implementation-defined; only
//! pairwise distances and counts are contractual.

use nalgebra::DMatrix;

use crate::shape::{Edge, Point, Shape};

/// Generate the regular N-simplex: N+1 equidistant vertices in R^N, complete
/// edge graph in lexicographic pair order.
///
/// `dimension == 0` yields a single zero-length point and no edges.
pub fn simplex(dimension: usize) -> Shape {
    let count = dimension + 1;

    // Centered basis matrix, vertices as columns: A = I − 1/(N+1).
    let a = DMatrix::from_fn(count, count, |r, c| {
        let identity = if r == c { 1.0 } else { 0.0 };
        identity - 1.0 / count as f64
    });

    // Singular values come back sorted descending, so the rank-deficient
    // direction (the all-ones normal introduced by centering) is last and the
    // first N columns of U frame the simplex's own hyperplane.
    let svd = a.svd(true, false);
    let u = svd.u.expect("SVD computed with compute_u must yield U");

    // Row k of U restricted to the first N columns is vertex k; rows of U are
    // orthonormal, so all pairwise distances equal √2 before rescaling.
    let scale = std::f64::consts::SQRT_2;
    let vertices: Vec<Point> = (0..count)
        .map(|k| Point::from_fn(dimension, |i, _| u[(k, i)] * scale))
        .collect();

    let mut edges = Vec::with_capacity(count * dimension / 2);
    for i in 0..count {
        for j in (i + 1)..count {
            edges.push(Edge::new(i, j));
        }
    }

    Shape::new(vertices, edges)
}
