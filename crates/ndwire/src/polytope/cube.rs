//! Hypercube generator (bit-decoded corners, Hamming-distance-1 edges).

use crate::shape::{Edge, Point, Shape};

/// Generate the N-dimensional ±1 hypercube: 2^N corners, N·2^(N−1) edges.
///
/// Vertex index a decodes to coordinates by its bits: bit i set → coordinate
/// i is +1.0, clear → −1.0. Two corners are adjacent iff their indices differ
/// in exactly one bit; each adjacency is kept once by flipping every bit of a
/// corner in turn and keeping only the numerically greater neighbor.
/// `dimension == 0` yields a single zero-length point and no edges.
///
/// Index arithmetic uses `usize`, so `dimension` must stay below the pointer
/// width; the 2^N output dwarfs that limit long before it binds.
pub fn hypercube(dimension: usize) -> Shape {
    let count: usize = 1 << dimension;

    let mut vertices: Vec<Point> = Vec::with_capacity(count);
    for corner in 0..count {
        let v = Point::from_fn(dimension, |i, _| {
            if corner & (1 << i) != 0 {
                1.0
            } else {
                -1.0
            }
        });
        vertices.push(v);
    }

    let mut edges = Vec::with_capacity(dimension * (count / 2));
    for corner in 0..count {
        for bit in 0..dimension {
            let neighbor = corner ^ (1 << bit);
            if neighbor > corner {
                edges.push(Edge::new(corner, neighbor));
            }
        }
    }

    Shape::new(vertices, edges)
}
