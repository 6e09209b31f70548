//! Rasterize the built-in pyramid mesh and print its fill commands.
//!
//! Usage: cargo run --example pyramid > pyramid.mcfunction

use std::io::{self, Write};

use stl2mc_core::{mcfunction, rasterize_mesh, Mesh};

fn main() -> io::Result<()> {
    let mesh = Mesh::pyramid(10.0, 8.0);
    let points = rasterize_mesh(&mesh);
    eprintln!("pyramid rasterized to {} block positions", points.len());

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    mcfunction::write_fill_commands(&mut handle, &points, "minecraft:sandstone")?;
    handle.flush()
}
