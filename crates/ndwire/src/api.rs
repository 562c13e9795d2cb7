//! Curated re-export surface for downstream crates (the `cli` formatter and
//! ad-hoc experiments). Prefer these imports for consistency.

// Data model + wireframe expansion
pub use crate::shape::{expand_wireframe, Edge, Point, PointCloud, Shape, Wireframe};
// Polytope generators
pub use crate::polytope::{cross_polytope, hypercube, simplex};
// Sphere sampling
pub use crate::sphere::{
    golden_angle, sample_hypersphere, SampleError, SphereStrategy, DEFAULT_SEED,
};
