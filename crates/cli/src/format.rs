//! Fixed-precision float array literal formatting.
//!
//! The emission format mirrors the generator scripts this tool replaces: a
//! comment header with family/dimension/counts, then a C-style `float`
//! initializer list, one point per line, each coordinate printed with a fixed
//! number of decimals and an `f` suffix.

use serde::Serialize;

/// One renderable document: header metadata plus the point rows to print.
pub struct ArrayDoc {
    /// Human label, e.g. "Regular 4-Cross-Polytope (Wireframe Pairs)".
    pub label: String,
    /// Identifier for the array, e.g. "crossPolytopeVerts_4D".
    pub array_name: String,
    pub dimension: usize,
    /// Logical vertex count of the source shape (not the emitted row count).
    pub vertex_count: usize,
    /// `None` for point clouds (no edge set).
    pub edge_count: Option<usize>,
    /// Emitted rows, one point each, `dimension` coordinates per row.
    pub points: Vec<Vec<f64>>,
}

impl ArrayDoc {
    /// Render the full literal with `precision` decimal places per coordinate.
    pub fn render(&self, precision: usize) -> String {
        let mut out = String::new();
        out.push_str(&format!("// {}\n", self.label));
        out.push_str(&format!("// Dimension: {}\n", self.dimension));
        out.push_str(&format!("// Total Vertices: {}\n", self.vertex_count));
        if let Some(edges) = self.edge_count {
            out.push_str(&format!("// Total Edges: {}\n", edges));
        }
        out.push_str(&format!("float {}[] = {{\n", self.array_name));
        for (i, point) in self.points.iter().enumerate() {
            let coords: Vec<String> = point
                .iter()
                .map(|c| format!("{c:.precision$}f"))
                .collect();
            let sep = if i + 1 < self.points.len() { "," } else { "" };
            out.push_str(&format!("    {}{}\n", coords.join(", "), sep));
        }
        out.push_str("};\n");
        out
    }
}

/// Sidecar stats written next to file outputs.
#[derive(Serialize)]
pub struct Stats {
    pub family: String,
    pub dimension: usize,
    pub vertex_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_count: Option<usize>,
    /// Rows emitted into the array (wireframe endpoints or cloud points).
    pub emitted_points: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}
