//! Core library for stl2mc: approximate a triangle mesh surface with points
//! on the block lattice.
//!
//! The pipeline is stateless end to end: [`stl`] loads a [`Mesh`],
//! [`surface`] rasterizes its faces into block positions using the
//! dominant-axis walker in [`raster`], [`transform`] drops the result at its
//! target spot in the world, and [`mcfunction`] serializes it as
//! world-editing commands.
//!
//! ```
//! use nalgebra::Point3;
//! use stl2mc_core::{connect, BlockPos};
//!
//! let line = connect(Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 2.0, 0.0));
//! assert_eq!(
//!     line,
//!     vec![
//!         BlockPos::new(0, 0, 0),
//!         BlockPos::new(1, 1, 0),
//!         BlockPos::new(2, 2, 0),
//!     ]
//! );
//! ```

pub mod geometry;
pub mod mcfunction;
pub mod raster;
pub mod stl;
pub mod surface;
pub mod transform;

// Re-export commonly used types
pub use geometry::{BlockPos, Mesh, Triangle};
pub use raster::{connect, dominant_axis, rasterize_span, Axis};
pub use surface::{rasterize_mesh, rasterize_triangle};
pub use transform::translate;
