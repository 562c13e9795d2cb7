//! Vertex and edge data for canonical N-dimensional shapes.
//!
//! Four dimension-generic generators share one output contract:
//! - [`polytope::cross_polytope`] — 2N axis vertices, complete graph minus
//!   antipodes.
//! - [`polytope::hypercube`] — 2^N bit-decoded corners, Hamming-1 edges.
//! - [`polytope::simplex`] — N+1 equidistant vertices via an SVD embedding.
//! - [`sphere::sample_hypersphere`] — unit-norm point clouds, strategy picked
//!   by dimension (golden-angle circle, Fibonacci sphere, normalized
//!   Gaussians).
//!
//! The first three return a [`shape::Shape`]; [`shape::expand_wireframe`]
//! flattens it into renderer-ready line-segment endpoint pairs. The sphere
//! sampler emits a bare [`shape::PointCloud`] (no edges, nothing to expand).
//!
//! Everything here is pure and single-threaded; formatting and I/O live in
//! the `cli` crate.

pub mod api;
pub mod polytope;
pub mod shape;
pub mod sphere;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use shape::{expand_wireframe, Edge, Point, PointCloud, Shape, Wireframe};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::polytope::{cross_polytope, hypercube, simplex};
    pub use crate::shape::{expand_wireframe, Edge, Point, PointCloud, Shape, Wireframe};
    pub use crate::sphere::{sample_hypersphere, SampleError, SphereStrategy, DEFAULT_SEED};
}
