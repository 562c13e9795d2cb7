//! Print vertex/edge/wireframe counts for a sweep of dimensions.
//!
//! Usage:
//!   cargo run -p ndwire --example shape_counts -- [max_dim]
//!
//! Quick sanity on the combinatorics: counts should read 2N / N(2N−2) for the
//! cross-polytope, 2^N / N·2^(N−1) for the cube, N+1 / N(N+1)/2 for the
//! simplex.

use ndwire::polytope::{cross_polytope, hypercube, simplex};
use ndwire::shape::expand_wireframe;

fn main() {
    let max_dim: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(8);

    println!("{:>4} {:>24} {:>24} {:>24}", "dim", "cross (V/E/W)", "cube (V/E/W)", "simplex (V/E/W)");
    for dim in 1..=max_dim {
        let row: Vec<String> = [cross_polytope(dim), hypercube(dim), simplex(dim)]
            .iter()
            .map(|shape| {
                let wf = expand_wireframe(shape);
                format!(
                    "{}/{}/{}",
                    shape.vertices.len(),
                    shape.edges.len(),
                    wf.points.len()
                )
            })
            .collect();
        println!("{:>4} {:>24} {:>24} {:>24}", dim, row[0], row[1], row[2]);
    }
}
