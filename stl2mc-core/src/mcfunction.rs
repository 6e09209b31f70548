//! Writing point sets as Minecraft function files.
//!
//! Every lattice point becomes one `fill` command covering exactly that
//! block. Commands are emitted in point order, one per line, never merged
//! into coordinate ranges, so the output is deterministic and diffs cleanly.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::debug;

use crate::geometry::BlockPos;

/// Write one `fill` command per point to the given writer.
///
/// The line format is `fill x y z x y z <block>`: both corners of the fill
/// region name the same position, so each command places exactly one block.
pub fn write_fill_commands<W: Write>(
    writer: &mut W,
    points: &[BlockPos],
    block: &str,
) -> io::Result<()> {
    for p in points {
        writeln!(
            writer,
            "fill {} {} {} {} {} {} {}",
            p.x, p.y, p.z, p.x, p.y, p.z, block
        )?;
    }
    Ok(())
}

/// Write a `.mcfunction` file containing one `fill` command per point.
///
/// The file handle lives only inside this call and is flushed and closed on
/// every exit path, including errors.
pub fn write_function_file(path: &Path, points: &[BlockPos], block: &str) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_fill_commands(&mut writer, points, block)?;
    writer.flush()?;
    debug!("wrote {} fill commands to {}", points.len(), path.display());
    Ok(())
}
