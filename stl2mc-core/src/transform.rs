//! Lattice point set transforms.

use nalgebra::Vector3;

use crate::geometry::BlockPos;

/// Translate every point by a fixed offset.
///
/// Used to drop a rasterized model at its target spot in the world, for
/// example lifting it to build height. Purely elementwise and total; the law
/// `translate(translate(s, a), b) == translate(s, a + b)` holds exactly.
pub fn translate(points: &[BlockPos], offset: Vector3<i32>) -> Vec<BlockPos> {
    points.iter().map(|point| point + offset).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(x: i32, y: i32, z: i32) -> BlockPos {
        BlockPos::new(x, y, z)
    }

    #[test]
    fn test_translate_elementwise() {
        let points = vec![b(0, 0, 0), b(1, -2, 3)];
        assert_eq!(
            translate(&points, Vector3::new(10, 100, -1)),
            vec![b(10, 100, -1), b(11, 98, 2)]
        );
    }

    #[test]
    fn test_translate_composes() {
        let points = vec![b(0, 0, 0), b(-7, 4, 19), b(3, 3, 3)];
        let a = Vector3::new(5, -2, 0);
        let c = Vector3::new(-1, 100, 42);
        assert_eq!(
            translate(&translate(&points, a), c),
            translate(&points, a + c)
        );
    }

    #[test]
    fn test_translate_empty() {
        assert!(translate(&[], Vector3::new(1, 2, 3)).is_empty());
    }
}
