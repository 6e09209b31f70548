//! Dominant-axis line rasterization.
//!
//! A segment is walked along whichever axis spans the most distance, one
//! lattice step at a time, interpolating the remaining two coordinates. The
//! walk itself only knows how to step the first coordinate, so both
//! endpoints are permuted to put the dominant axis in front and every
//! produced point is swapped back afterwards.

use log::trace;
use nalgebra::{Point3, Scalar};

use crate::geometry::BlockPos;

/// Coordinate axis of the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Swap this axis into the first coordinate slot.
    ///
    /// X leaves the point untouched, Y swaps x and y, Z swaps x and z. Each
    /// swap is its own inverse; [`Axis::restore`] relies on that.
    ///
    /// Generic over the scalar so the same permutation serves mesh-space
    /// `f64` points and lattice `i32` points.
    pub fn to_front<T: Scalar + Copy>(self, p: Point3<T>) -> Point3<T> {
        match self {
            Axis::X => p,
            Axis::Y => Point3::new(p.y, p.x, p.z),
            Axis::Z => Point3::new(p.z, p.y, p.x),
        }
    }

    /// Undo [`Axis::to_front`], returning a point to its original axis order.
    pub fn restore<T: Scalar + Copy>(self, p: Point3<T>) -> Point3<T> {
        // The swaps are involutions, so restoring is the same swap again.
        self.to_front(p)
    }
}

/// Pick the axis along which two points are farthest apart.
///
/// Ties go to the later axis: Y beats X, Z beats Y. Coincident points
/// therefore report Z, and the rasterizer treats the resulting zero-length
/// span as an early exit rather than dividing by it.
pub fn dominant_axis(a: Point3<f64>, b: Point3<f64>) -> Axis {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let dz = (a.z - b.z).abs();
    if dx > dy && dx > dz {
        Axis::X
    } else if dy > dz {
        Axis::Y
    } else {
        Axis::Z
    }
}

/// Round to the nearest lattice coordinate, halves away from zero.
fn round_coord(v: f64) -> i32 {
    v.round() as i32
}

/// Rasterize a segment whose dominant axis is already in the first slot.
///
/// Walks every integer value of the first coordinate between the endpoints,
/// ascending, and interpolates the other two coordinates. Interpolation
/// always starts from the endpoint whose first coordinate is smaller and
/// uses that endpoint's other coordinates as the base, which keeps the
/// output independent of argument order.
///
/// The walk bounds come from truncating each endpoint's first coordinate:
/// a span from 0.7 to 5.2 walks x = 0..=5. Interpolated coordinates round
/// half away from zero.
///
/// A zero span on the first coordinate returns just the two rounded
/// endpoints, even when they coincide.
pub fn rasterize_span(a: Point3<f64>, b: Point3<f64>) -> Vec<BlockPos> {
    if a.x == b.x {
        return vec![
            BlockPos::new(round_coord(a.x), round_coord(a.y), round_coord(a.z)),
            BlockPos::new(round_coord(b.x), round_coord(b.y), round_coord(b.z)),
        ];
    }

    let min_x = (a.x as i32).min(b.x as i32);
    let max_x = (a.x as i32).max(b.x as i32);
    let slope_y = (b.y - a.y) / (b.x - a.x);
    let slope_z = (b.z - a.z) / (b.x - a.x);
    let (base_y, base_z) = if a.x < b.x { (a.y, a.z) } else { (b.y, b.z) };
    trace!(
        "span x in {}..={}, slopes {} {}",
        min_x,
        max_x,
        slope_y,
        slope_z
    );

    let mut points = Vec::with_capacity((max_x as i64 - min_x as i64) as usize + 1);
    for (i, x) in (min_x..=max_x).enumerate() {
        let t = i as f64;
        points.push(BlockPos::new(
            x,
            round_coord(base_y + t * slope_y),
            round_coord(base_z + t * slope_z),
        ));
    }
    points
}

/// Connect two mesh-space points with a line of lattice points.
///
/// Selects the dominant axis once for the segment, permutes both endpoints
/// so the walker can step the first coordinate, and swaps every produced
/// point back into place.
pub fn connect(a: Point3<f64>, b: Point3<f64>) -> Vec<BlockPos> {
    let axis = dominant_axis(a, b);
    let span = rasterize_span(axis.to_front(a), axis.to_front(b));
    span.into_iter().map(|p| axis.restore(p)).collect()
}
