//! STL file parser for binary and ASCII formats.
//!
//! Vertex coordinates are widened to `f64` on the way in. Facet normals are
//! parsed and discarded: rasterization never reads them.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use nalgebra::Point3;
use nom::{
    bytes::complete::tag,
    character::complete::{multispace0, multispace1, not_line_ending},
    multi::many0,
    number::complete::double,
    sequence::preceded,
    IResult,
};
use thiserror::Error;

use crate::geometry::{Mesh, Triangle};

/// Failure while loading a mesh.
///
/// A malformed file aborts the whole conversion; there is no partial-mesh
/// recovery.
#[derive(Debug, Error)]
pub enum StlError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("file too small to be a valid STL ({0} bytes)")]
    TooSmall(usize),
    #[error("unexpected end of file in binary STL")]
    Truncated,
    #[error("malformed ASCII STL: {0}")]
    Ascii(String),
}

/// Parse a binary STL file.
pub fn parse_binary_stl(data: &[u8]) -> Result<Mesh, StlError> {
    if data.len() < 84 {
        return Err(StlError::TooSmall(data.len()));
    }

    // Skip the 80-byte header, then read the triangle count (little-endian).
    let data = &data[80..];
    let triangle_count = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;

    let mut mesh = Mesh::with_capacity(triangle_count);
    let mut offset = 4;

    for _ in 0..triangle_count {
        if offset + 50 > data.len() {
            return Err(StlError::Truncated);
        }

        // 12 bytes of facet normal, unused here.
        offset += 12;

        let mut vertices = [Point3::origin(); 3];
        for vertex in &mut vertices {
            *vertex = read_vertex(&data[offset..offset + 12]);
            offset += 12;
        }

        // Skip the attribute byte count.
        offset += 2;

        mesh.add_triangle(Triangle::new(vertices[0], vertices[1], vertices[2]));
    }

    Ok(mesh)
}

fn read_vertex(bytes: &[u8]) -> Point3<f64> {
    let x = f32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let y = f32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    let z = f32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
    Point3::new(x as f64, y as f64, z as f64)
}

/// Parse an ASCII STL file.
pub fn parse_ascii_stl(input: &str) -> Result<Mesh, StlError> {
    match parse_ascii_stl_impl(input) {
        Ok((_, mesh)) => Ok(mesh),
        Err(e) => Err(StlError::Ascii(format!("{:?}", e))),
    }
}

fn parse_ascii_stl_impl(input: &str) -> IResult<&str, Mesh> {
    let (input, _) = preceded(multispace0, tag("solid"))(input)?;
    // Optional solid name: the rest of the line.
    let (input, _) = not_line_ending(input)?;
    let (input, triangles) = many0(parse_facet)(input)?;
    let (input, _) = preceded(multispace0, tag("endsolid"))(input)?;

    let mut mesh = Mesh::with_capacity(triangles.len());
    for triangle in triangles {
        mesh.add_triangle(triangle);
    }

    Ok((input, mesh))
}

fn parse_facet(input: &str) -> IResult<&str, Triangle> {
    let (input, _) = preceded(multispace0, tag("facet"))(input)?;
    let (input, _) = preceded(multispace1, tag("normal"))(input)?;
    let (input, _normal) = parse_vector3(input)?;
    let (input, _) = preceded(multispace0, tag("outer"))(input)?;
    let (input, _) = preceded(multispace1, tag("loop"))(input)?;
    let (input, v0) = parse_vertex(input)?;
    let (input, v1) = parse_vertex(input)?;
    let (input, v2) = parse_vertex(input)?;
    let (input, _) = preceded(multispace0, tag("endloop"))(input)?;
    let (input, _) = preceded(multispace0, tag("endfacet"))(input)?;

    Ok((input, Triangle::new(v0, v1, v2)))
}

fn parse_vertex(input: &str) -> IResult<&str, Point3<f64>> {
    let (input, _) = preceded(multispace0, tag("vertex"))(input)?;
    parse_vector3(input)
}

fn parse_vector3(input: &str) -> IResult<&str, Point3<f64>> {
    let (input, _) = multispace0(input)?;
    let (input, x) = double(input)?;
    let (input, _) = multispace1(input)?;
    let (input, y) = double(input)?;
    let (input, _) = multispace1(input)?;
    let (input, z) = double(input)?;
    Ok((input, Point3::new(x, y, z)))
}

/// Detect and parse an STL file (binary or ASCII).
pub fn parse_stl(data: &[u8]) -> Result<Mesh, StlError> {
    if data.len() > 5 && &data[0..5] == b"solid" {
        // Probably ASCII, but some binary exporters start with "solid" too.
        if let Ok(text) = std::str::from_utf8(data) {
            if let Ok(mesh) = parse_ascii_stl(text) {
                return Ok(mesh);
            }
        }
    }

    parse_binary_stl(data)
}

/// Read and parse a mesh from disk.
pub fn load_mesh(path: &Path) -> Result<Mesh, StlError> {
    let data = fs::read(path).map_err(|source| StlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mesh = parse_stl(&data)?;
    debug!(
        "loaded {} triangles from {}",
        mesh.triangles.len(),
        path.display()
    );
    Ok(mesh)
}
