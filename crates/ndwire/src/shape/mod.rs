//! Shared vertex/edge data model and wireframe expansion.
//!
//! Purpose
//! - Provide the one output contract all generators share: a dense, zero-based
//!   vertex list plus an unordered edge-index list (`Shape`), and the flat
//!   GL_LINES-style endpoint stream derived from it (`Wireframe`).
//! - Keep the API minimal: shapes are built once per (family, dimension)
//!   request and never mutated; a new dimension means a new `Shape`.
//!
//! Conventions
//! - Points are `DVector<f64>` of length N; they carry no identity beyond
//!   their coordinates. The vertex index (position in `vertices`) is the sole
//!   handle used by edges.
//! - Edges store `i < j` and never repeat within one shape. Generators uphold
//!   this by construction; `Edge::new` normalizes the order.

use nalgebra::DVector;

/// A point in R^N: ordered, fixed-length coordinate tuple.
pub type Point = DVector<f64>;

/// Unordered pair of distinct vertex indices, stored with `i < j`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub i: usize,
    pub j: usize,
}

impl Edge {
    /// Build an edge from two distinct indices, normalizing the order.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        debug_assert_ne!(a, b, "edge endpoints must be distinct");
        if a < b {
            Self { i: a, j: b }
        } else {
            Self { i: b, j: a }
        }
    }
}

/// Vertex set plus edge set for one shape at one dimension.
///
/// Invariants:
/// - Edge indices are valid positions in `vertices`.
/// - No duplicate edges (in either orientation).
#[derive(Clone, Debug, Default)]
pub struct Shape {
    pub vertices: Vec<Point>,
    pub edges: Vec<Edge>,
}

impl Shape {
    #[inline]
    pub fn new(vertices: Vec<Point>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    /// Ambient dimension, taken from the first vertex (0 for an empty shape).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.vertices.first().map_or(0, |v| v.len())
    }

    /// Number of edges incident to vertex `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.edges.iter().filter(|e| e.i == v || e.j == v).count()
    }
}

/// Flat endpoint stream: elements (2k, 2k+1) are the endpoints of edge k.
///
/// Always even-length; owns copies of the source shape's points.
#[derive(Clone, Debug, Default)]
pub struct Wireframe {
    pub points: Vec<Point>,
}

impl Wireframe {
    /// Number of line segments (half the point count).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len() / 2
    }

    /// Iterate endpoint pairs in edge order.
    pub fn segments(&self) -> impl Iterator<Item = (&Point, &Point)> {
        self.points.chunks_exact(2).map(|c| (&c[0], &c[1]))
    }

    /// Interleaved coordinate stream (the layout a line-renderer consumes).
    pub fn flatten(&self) -> Vec<f64> {
        let dim = self.points.first().map_or(0, |p| p.len());
        let mut out = Vec::with_capacity(self.points.len() * dim);
        for p in &self.points {
            out.extend(p.iter().copied());
        }
        out
    }
}

/// Bare point sequence (sphere sampler output): no edges, no order guarantee.
#[derive(Clone, Debug, Default)]
pub struct PointCloud {
    pub points: Vec<Point>,
}

impl PointCloud {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Interleaved coordinate stream.
    pub fn flatten(&self) -> Vec<f64> {
        let dim = self.points.first().map_or(0, |p| p.len());
        let mut out = Vec::with_capacity(self.points.len() * dim);
        for p in &self.points {
            out.extend(p.iter().copied());
        }
        out
    }
}

/// Expand a shape's edges into the flat endpoint stream.
///
/// For each edge (i, j) in edge order, appends vertex i then vertex j. Pure;
/// edge indices are valid by construction of the generators.
pub fn expand_wireframe(shape: &Shape) -> Wireframe {
    let mut points = Vec::with_capacity(shape.edges.len() * 2);
    for e in &shape.edges {
        points.push(shape.vertices[e.i].clone());
        points.push(shape.vertices[e.j].clone());
    }
    Wireframe { points }
}
