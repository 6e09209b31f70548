//! Mesh and lattice value types.

use nalgebra::Point3;

/// A position on the block lattice.
///
/// Mesh vertices stay in `Point3<f64>` until they go through the rasterizer;
/// everything the rasterizer emits lives on this integer lattice.
pub type BlockPos = Point3<i32>;

/// Widen a lattice position back into mesh-space coordinates.
///
/// Exact for every `i32`, so equality checks against raw vertex coordinates
/// behave the same before and after rasterization.
pub fn block_to_point(p: BlockPos) -> Point3<f64> {
    Point3::new(p.x as f64, p.y as f64, p.z as f64)
}

/// A triangle face defined by three vertices.
///
/// Vertex order matters to the sweep: the `v0`-`v1` edge is rasterized first
/// and `v2` is the apex every edge point connects to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Point3<f64>; 3],
}

impl Triangle {
    pub fn new(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }
}

/// A 3D mesh composed of triangles, kept in file order.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(capacity),
        }
    }

    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Create a square pyramid mesh for demos and tests.
    ///
    /// Base is centered on the origin in the y = 0 plane, apex on the y axis.
    pub fn pyramid(base: f64, height: f64) -> Self {
        let half = base / 2.0;
        let apex = Point3::new(0.0, height, 0.0);
        let corners = [
            Point3::new(-half, 0.0, -half),
            Point3::new(half, 0.0, -half),
            Point3::new(half, 0.0, half),
            Point3::new(-half, 0.0, half),
        ];

        let mut mesh = Self::with_capacity(6);
        // Four sides
        mesh.add_triangle(Triangle::new(corners[0], corners[1], apex));
        mesh.add_triangle(Triangle::new(corners[1], corners[2], apex));
        mesh.add_triangle(Triangle::new(corners[2], corners[3], apex));
        mesh.add_triangle(Triangle::new(corners[3], corners[0], apex));
        // Base
        mesh.add_triangle(Triangle::new(corners[0], corners[2], corners[1]));
        mesh.add_triangle(Triangle::new(corners[0], corners[3], corners[2]));
        mesh
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}
