//! stl2mc - convert STL meshes into Minecraft fill commands.
//!
//! Loads a triangle mesh, rasterizes every face onto the block lattice,
//! optionally translates the result, and writes one `fill` command per
//! block position. Pointing `--output` at a datapack's functions directory
//! makes the model buildable in-game with a single `/function` call.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use nalgebra::Vector3;

use stl2mc_core::{mcfunction, rasterize_mesh, stl, translate};

mod preview;

#[derive(Parser, Debug)]
#[command(name = "stl2mc")]
#[command(about = "Convert STL meshes into Minecraft fill commands", long_about = None)]
struct Cli {
    /// Input STL file (binary or ASCII)
    input: PathBuf,

    /// Output .mcfunction file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Block placed at every generated position
    #[arg(short, long, default_value = "minecraft:oak_planks")]
    block: String,

    /// Offset added to every position, as dx,dy,dz
    #[arg(long, default_value = "0,0,0", value_parser = parse_offset)]
    offset: Vector3<i32>,

    /// Draw ASCII scatter views of the result on stderr
    #[arg(long)]
    preview: bool,
}

fn parse_offset(s: &str) -> Result<Vector3<i32>, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected dx,dy,dz, got {:?}", s));
    }
    let mut coords = [0i32; 3];
    for (slot, part) in coords.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|_| format!("invalid offset component {:?}", part))?;
    }
    Ok(Vector3::new(coords[0], coords[1], coords[2]))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mesh = stl::load_mesh(&cli.input)
        .with_context(|| format!("failed to load mesh from {}", cli.input.display()))?;
    info!("loaded {} triangles", mesh.triangles.len());

    let points = translate(&rasterize_mesh(&mesh), cli.offset);
    info!("rasterized {} block positions", points.len());

    match &cli.output {
        Some(path) => mcfunction::write_function_file(path, &points, &cli.block)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            mcfunction::write_fill_commands(&mut handle, &points, &cli.block)
                .context("failed to write fill commands to stdout")?;
            handle.flush()?;
        }
    }

    if cli.preview {
        preview::print_views(&mut io::stderr(), &points).context("failed to draw preview")?;
    }

    Ok(())
}
