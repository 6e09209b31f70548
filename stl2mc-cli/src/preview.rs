//! One-shot ASCII scatter views of a block point set.
//!
//! Stands in for a real 3D plot: three orthographic projections binned onto
//! a character grid, denser cells drawn with brighter glyphs. Advisory
//! output only; nothing downstream consumes it.

use std::io::{self, Write};

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use stl2mc_core::BlockPos;

/// Character ramp from sparse to dense cells.
const DENSITY_RAMP: &[char] = &['.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Largest grid a single view may occupy.
const MAX_GRID_WIDTH: usize = 72;
const MAX_GRID_HEIGHT: usize = 24;

/// Which pair of lattice axes a view projects onto.
#[derive(Debug, Clone, Copy)]
pub enum ViewPlane {
    /// x across, z down the rows; looking along -y.
    Top,
    /// x across, y up; looking along +z.
    Front,
    /// z across, y up; looking along -x.
    Side,
}

impl ViewPlane {
    fn label(self) -> &'static str {
        match self {
            ViewPlane::Top => "top (x/z)",
            ViewPlane::Front => "front (x/y)",
            ViewPlane::Side => "side (z/y)",
        }
    }

    /// Project a block position onto (across, down) view coordinates.
    fn project(self, p: BlockPos) -> (i64, i64) {
        match self {
            ViewPlane::Top => (i64::from(p.x), i64::from(p.z)),
            // Rows grow downward, so y is negated to keep up upright.
            ViewPlane::Front => (i64::from(p.x), -i64::from(p.y)),
            ViewPlane::Side => (i64::from(p.z), -i64::from(p.y)),
        }
    }
}

/// A point set binned onto a character grid.
pub struct ScatterGrid {
    width: usize,
    height: usize,
    counts: Vec<u32>,
    max_count: u32,
}

impl ScatterGrid {
    /// Bin a point set onto a grid no larger than the fixed preview size.
    ///
    /// Returns `None` for an empty point set.
    pub fn project(points: &[BlockPos], plane: ViewPlane) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (mut min_a, mut min_d) = plane.project(*first);
        let (mut max_a, mut max_d) = (min_a, min_d);
        for &point in rest {
            let (a, d) = plane.project(point);
            min_a = min_a.min(a);
            max_a = max_a.max(a);
            min_d = min_d.min(d);
            max_d = max_d.max(d);
        }

        let span_a = max_a - min_a + 1;
        let span_d = max_d - min_d + 1;
        let width = span_a.min(MAX_GRID_WIDTH as i64) as usize;
        let height = span_d.min(MAX_GRID_HEIGHT as i64) as usize;

        let mut grid = Self {
            width,
            height,
            counts: vec![0; width * height],
            max_count: 0,
        };
        for &point in points {
            let (a, d) = plane.project(point);
            let col = scale(a - min_a, span_a, width);
            let row = scale(d - min_d, span_d, height);
            let cell = &mut grid.counts[row * width + col];
            *cell = cell.saturating_add(1);
            grid.max_count = grid.max_count.max(*cell);
        }
        Some(grid)
    }

    /// Draw the grid, one glyph per cell, denser cells brighter.
    pub fn draw<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for row in 0..self.height {
            for col in 0..self.width {
                let count = self.counts[row * self.width + col];
                if count == 0 {
                    writer.queue(Print(' '))?;
                    continue;
                }

                let glyph = self.glyph_for(count);
                let color = match glyph {
                    '.' | ':' => Color::DarkGrey,
                    '-' | '=' => Color::Grey,
                    '+' | '*' => Color::White,
                    _ => Color::Cyan,
                };
                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(glyph))?;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }

    fn glyph_for(&self, count: u32) -> char {
        if self.max_count <= 1 {
            return DENSITY_RAMP[0];
        }
        let top = (DENSITY_RAMP.len() - 1) as u64;
        let idx = u64::from(count - 1) * top / u64::from(self.max_count - 1);
        DENSITY_RAMP[idx as usize]
    }
}

/// Map an offset within a span onto a grid of `cells` columns or rows.
fn scale(offset: i64, span: i64, cells: usize) -> usize {
    (offset * cells as i64 / span) as usize
}

/// Draw all three orthographic views of the point set.
pub fn print_views<W: Write>(writer: &mut W, points: &[BlockPos]) -> io::Result<()> {
    writer.queue(Print(format!("preview of {} points\n", points.len())))?;
    for plane in [ViewPlane::Top, ViewPlane::Front, ViewPlane::Side] {
        writer.queue(Print(format!("{}\n", plane.label())))?;
        if let Some(grid) = ScatterGrid::project(points, plane) {
            grid.draw(writer)?;
        }
        writer.queue(Print('\n'))?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_has_no_grid() {
        assert!(ScatterGrid::project(&[], ViewPlane::Top).is_none());
    }

    #[test]
    fn test_single_point_draws_one_glyph() {
        let grid = ScatterGrid::project(&[BlockPos::new(3, 4, 5)], ViewPlane::Top).unwrap();
        assert_eq!((grid.width, grid.height), (1, 1));

        let mut out = Vec::new();
        grid.draw(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('.'));
    }

    #[test]
    fn test_front_view_keeps_up_upright() {
        let points = [BlockPos::new(0, 0, 0), BlockPos::new(0, 5, 0)];
        let grid = ScatterGrid::project(&points, ViewPlane::Front).unwrap();
        assert_eq!((grid.width, grid.height), (1, 6));
        // The higher point lands on the first row.
        assert_eq!(grid.counts[0], 1);
        assert_eq!(grid.counts[5], 1);
    }

    #[test]
    fn test_grid_clamps_to_preview_size() {
        let points = [BlockPos::new(0, 0, 0), BlockPos::new(1000, 0, 2000)];
        let grid = ScatterGrid::project(&points, ViewPlane::Top).unwrap();
        assert_eq!((grid.width, grid.height), (MAX_GRID_WIDTH, MAX_GRID_HEIGHT));
        assert_eq!(grid.counts[0], 1);
        assert_eq!(grid.counts[23 * MAX_GRID_WIDTH + 71], 1);
    }
}
