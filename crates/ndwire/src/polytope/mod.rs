//! Dimension-generic generators for the three canonical polytope families.
//!
//! Purpose
//! - Produce `Shape`s (vertices + edges) for cross-polytopes, hypercubes, and
//!   regular simplices at any requested dimension.
//! - Keep each generator a pure function of its dimension; callers picking
//!   large N own the O(N²) / O(N·2^N) output cost.
//!
//! Conventions
//! - Vertex indices are dense, zero-based, assigned in generation order; the
//!   exact order is part of the contract (edges refer to it).
//! - Scaling follows the ±1 hypercube convention: cube corners at ±1, simplex
//!   edge length 2, cross-polytope vertices on the unit axes.

mod cross;
mod cube;
mod simplex;

pub use cross::cross_polytope;
pub use cube::hypercube;
pub use simplex::simplex;
