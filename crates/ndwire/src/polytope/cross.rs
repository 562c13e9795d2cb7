//! Cross-polytope generator (N-dimensional octahedron analogue).

use crate::shape::{Edge, Point, Shape};

/// Generate the N-dimensional cross-polytope: 2N unit vertices on the
/// coordinate axes, fully connected except the N antipodal pairs.
///
/// Vertex order: for axis a, index 2a is +e_a and index 2a+1 is −e_a. Edge
/// count is N(2N−2). `dimension == 0` yields an empty shape.
pub fn cross_polytope(dimension: usize) -> Shape {
    let mut vertices: Vec<Point> = Vec::with_capacity(2 * dimension);
    for axis in 0..dimension {
        let mut pos = Point::zeros(dimension);
        pos[axis] = 1.0;
        let mut neg = Point::zeros(dimension);
        neg[axis] = -1.0;
        vertices.push(pos);
        vertices.push(neg);
    }

    // Complete graph minus antipodes. Indices 2a and 2a+1 are the ± pair on
    // axis a, so skip exactly (i, i+1) with i even.
    let n = vertices.len();
    let mut edges = Vec::with_capacity(2 * dimension * dimension.saturating_sub(1));
    for i in 0..n {
        for j in (i + 1)..n {
            if j == i + 1 && i % 2 == 0 {
                continue;
            }
            edges.push(Edge::new(i, j));
        }
    }

    Shape::new(vertices, edges)
}
