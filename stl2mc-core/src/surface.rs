//! Triangle sweep: cover a face by raking lines from one edge to the apex.

use std::collections::HashSet;

use log::{debug, trace};

use crate::geometry::{block_to_point, BlockPos, Mesh, Triangle};
use crate::raster::connect;

/// Rasterize a triangular face into lattice points.
///
/// The `v0`-`v1` edge is rasterized first, then a line is drawn from every
/// edge point to the apex `v2`. The result keeps first-seen order and never
/// repeats a point. Coverage depends entirely on how finely the first edge
/// rasterizes: this is a fan over the face, not a scanline fill, and thin
/// gaps between rakes are expected for some triangle shapes.
pub fn rasterize_triangle(triangle: &Triangle) -> Vec<BlockPos> {
    let [v0, v1, v2] = triangle.vertices;
    trace!("sweep {:?} -> {:?} -> {:?}", v0, v1, v2);

    let edge = connect(v0, v1);
    let mut points = Vec::with_capacity(edge.len());
    let mut seen: HashSet<BlockPos> = HashSet::with_capacity(edge.len());
    for &point in &edge {
        if seen.insert(point) {
            points.push(point);
        }
    }

    for &point in &edge {
        // An edge point sitting exactly on the apex has no line to draw.
        if block_to_point(point) == v2 {
            continue;
        }
        for raked in connect(block_to_point(point), v2) {
            if seen.insert(raked) {
                points.push(raked);
            }
        }
    }
    points
}

/// Rasterize every triangle of a mesh into one point sequence.
///
/// Triangles are processed in mesh order and their outputs concatenated.
/// Points shared between neighbouring faces appear once per face;
/// deduplicating across faces is left to the consumer.
pub fn rasterize_mesh(mesh: &Mesh) -> Vec<BlockPos> {
    let mut all = Vec::new();
    for triangle in &mesh.triangles {
        all.extend(rasterize_triangle(triangle));
    }
    debug!(
        "rasterized {} triangles into {} points",
        mesh.triangles.len(),
        all.len()
    );
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcfunction::write_fill_commands;
    use crate::transform::translate;
    use nalgebra::{Point3, Vector3};

    fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    fn b(x: i32, y: i32, z: i32) -> BlockPos {
        BlockPos::new(x, y, z)
    }

    fn unique_count(points: &[BlockPos]) -> usize {
        points.iter().copied().collect::<HashSet<_>>().len()
    }

    #[test]
    fn test_triangle_contains_first_edge() {
        let triangle = Triangle::new(p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0), p(10.0, 10.0, 0.0));
        let covered = rasterize_triangle(&triangle);
        for point in connect(p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0)) {
            assert!(covered.contains(&point), "edge point {:?} missing", point);
        }
    }

    #[test]
    fn test_triangle_has_no_duplicates() {
        let triangle = Triangle::new(p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0), p(10.0, 10.0, 0.0));
        let covered = rasterize_triangle(&triangle);
        assert_eq!(covered.len(), unique_count(&covered));
    }

    #[test]
    fn test_triangle_contains_corners() {
        let triangle = Triangle::new(p(0.0, 0.0, 0.0), p(10.0, 0.0, 0.0), p(10.0, 10.0, 0.0));
        let covered = rasterize_triangle(&triangle);
        for corner in [b(0, 0, 0), b(10, 0, 0), b(10, 10, 0)] {
            assert!(covered.contains(&corner), "corner {:?} missing", corner);
        }
    }

    #[test]
    fn test_degenerate_edge_collapses_to_single_rake() {
        // v0 == v1: the edge is one point and the fan is one line to the apex.
        let triangle = Triangle::new(p(0.0, 0.0, 0.0), p(0.0, 0.0, 0.0), p(3.0, 0.0, 0.0));
        let covered = rasterize_triangle(&triangle);
        assert_eq!(
            covered,
            vec![b(0, 0, 0), b(1, 0, 0), b(2, 0, 0), b(3, 0, 0)]
        );
    }

    #[test]
    fn test_apex_on_edge_is_skipped() {
        let triangle = Triangle::new(p(0.0, 0.0, 0.0), p(4.0, 0.0, 0.0), p(2.0, 0.0, 0.0));
        let covered = rasterize_triangle(&triangle);
        assert_eq!(covered.len(), 5);
        assert_eq!(covered.len(), unique_count(&covered));
    }

    #[test]
    fn test_large_face_to_commands() {
        let triangle = Triangle::new(
            p(-30.0, -10.0, 20.0),
            p(-20.0, -20.0, 0.0),
            p(-20.0, 0.0, 0.0),
        );
        let covered = rasterize_triangle(&triangle);
        assert!(!covered.is_empty());
        assert_eq!(covered.len(), unique_count(&covered));

        // Lift to build height: nothing may end up below y = 80.
        let placed = translate(&covered, Vector3::new(0, 100, 0));
        assert!(placed.iter().all(|point| point.y >= 80));

        let mut out = Vec::new();
        write_fill_commands(&mut out, &placed, "minecraft:stone").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), placed.len());
        for line in text.lines() {
            assert!(line.starts_with("fill "));
            assert!(line.ends_with(" minecraft:stone"));
        }
    }

    #[test]
    fn test_mesh_keeps_cross_face_duplicates() {
        let mut mesh = Mesh::new();
        mesh.add_triangle(Triangle::new(
            p(0.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(2.0, 2.0, 0.0),
        ));
        mesh.add_triangle(Triangle::new(
            p(0.0, 0.0, 0.0),
            p(2.0, 2.0, 0.0),
            p(0.0, 2.0, 0.0),
        ));

        let first = rasterize_triangle(&mesh.triangles[0]);
        let second = rasterize_triangle(&mesh.triangles[1]);
        let all = rasterize_mesh(&mesh);

        // Plain concatenation: the shared corner points show up twice.
        assert_eq!(all.len(), first.len() + second.len());
        assert!(unique_count(&all) < all.len());
    }

    #[test]
    fn test_pyramid_mesh_covers_every_vertex() {
        let covered = rasterize_mesh(&Mesh::pyramid(10.0, 8.0));
        assert!(!covered.is_empty());
        for vertex in [
            b(0, 8, 0),
            b(-5, 0, -5),
            b(5, 0, -5),
            b(5, 0, 5),
            b(-5, 0, 5),
        ] {
            assert!(covered.contains(&vertex), "vertex {:?} missing", vertex);
        }
    }
}
