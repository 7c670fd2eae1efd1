//! The node constellation — a second decorative scene.
//!
//! A fixed number of nodes laid out on a Fibonacci sphere, linked wherever
//! two nodes sit closer than [`LINK_DISTANCE`].  Layout and edges are
//! computed once; per-frame motion is the same deterministic elapsed-time
//! mapping the particle field uses.

pub const NODE_COUNT: usize = 15;
pub const RADIUS: f64 = 4.0;
pub const LINK_DISTANCE: f64 = 3.5;

/// Every third node gets the accent colour.
pub const ACCENT_STRIDE: usize = 3;

#[derive(Debug, Clone)]
pub struct Constellation {
    nodes: Vec<[f64; 3]>,
    /// Index pairs (i < j) of nodes within link distance.
    edges: Vec<(usize, usize)>,
}

impl Constellation {
    pub fn new() -> Self {
        let nodes: Vec<[f64; 3]> = (0..NODE_COUNT)
            .map(|i| {
                // Fibonacci sphere: even angular coverage from a golden-ratio
                // spiral over the polar angle.
                let phi = (-1.0 + 2.0 * i as f64 / NODE_COUNT as f64).acos();
                let theta = (NODE_COUNT as f64 * std::f64::consts::PI).sqrt() * phi;
                [
                    RADIUS * theta.cos() * phi.sin(),
                    RADIUS * theta.sin() * phi.sin(),
                    RADIUS * phi.cos(),
                ]
            })
            .collect();

        let mut edges = Vec::new();
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                if distance(nodes[i], nodes[j]) < LINK_DISTANCE {
                    edges.push((i, j));
                }
            }
        }

        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[[f64; 3]] {
        &self.nodes
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    pub fn is_accent(index: usize) -> bool {
        index % ACCENT_STRIDE == 0
    }

    /// Slow yaw spin plus a pitch sway; pure in `t`.
    pub fn pose(t: f64) -> (f64, f64) {
        (t * 0.12, (t * 0.2).sin() * 0.1)
    }

    /// Rotate a node by the pose returned from [`Self::pose`].
    pub fn apply(node: [f64; 3], yaw: f64, pitch: f64) -> [f64; 3] {
        let [x, y, z] = node;
        let (sin_p, cos_p) = pitch.sin_cos();
        let y1 = y * cos_p - z * sin_p;
        let z1 = y * sin_p + z * cos_p;
        let (sin_y, cos_y) = yaw.sin_cos();
        [x * cos_y + z1 * sin_y, y1, -x * sin_y + z1 * cos_y]
    }
}

impl Default for Constellation {
    fn default() -> Self {
        Self::new()
    }
}

fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_count_and_radius_are_exact() {
        let c = Constellation::new();
        assert_eq!(c.nodes().len(), NODE_COUNT);
        for n in c.nodes() {
            let r = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((r - RADIUS).abs() < 1e-9);
        }
    }

    #[test]
    fn every_edge_joins_nodes_within_link_distance() {
        let c = Constellation::new();
        assert!(!c.edges().is_empty());
        for &(i, j) in c.edges() {
            assert!(i < j);
            assert!(distance(c.nodes()[i], c.nodes()[j]) < LINK_DISTANCE);
        }
    }

    #[test]
    fn pose_is_deterministic_and_rotation_preserves_radius() {
        let (yaw, pitch) = Constellation::pose(5.0);
        assert_eq!((yaw, pitch), Constellation::pose(5.0));

        let c = Constellation::new();
        let rotated = Constellation::apply(c.nodes()[0], yaw, pitch);
        let r = (rotated[0] * rotated[0] + rotated[1] * rotated[1] + rotated[2] * rotated[2])
            .sqrt();
        assert!((r - RADIUS).abs() < 1e-9);
    }
}
