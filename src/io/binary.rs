//! The `.mesh` binary format.
//!
//! A `.mesh` file is a direct dump of a [`TriangleMesh`]:
//!
//! | Offset | Field | Size |
//! |--------|-------|------|
//! | 0 | vertex count `V` (`u32`) | 4 |
//! | 4 | triangle count `T` (`u32`) | 4 |
//! | 8 | vertex records | `32 * V` |
//! | `8 + 32 * V` | triangle records | `12 * T` |
//!
//! Fields are native-endian with no padding, magic number or version tag.
//! Vertex records are eight `f32`s (position, texture coordinate, normal);
//! triangle records are three `u32` indices.
//!
//! Only byte counts are checked when reading. Triangle indices are taken as
//! they are; call [`TriangleMesh::validate`] on meshes from untrusted sources.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use bytemuck::{Pod, Zeroable};

use crate::error::{MeshError, Result, Section};
use crate::mesh::{Triangle, TriangleMesh, Vertex};

/// Size of the count header in bytes.
pub const HEADER_SIZE: usize = 8;

/// Size of one vertex record in bytes.
pub const VERTEX_SIZE: usize = std::mem::size_of::<Vertex>();

/// Size of one triangle record in bytes.
pub const TRIANGLE_SIZE: usize = std::mem::size_of::<Triangle>();

/// Records read per allocation step. A declared count larger than the
/// stream fails on the short read after at most one chunk past the data.
const CHUNK_RECORDS: usize = 64 * 1024;

/// Load a mesh from a `.mesh` file.
///
/// # Example
///
/// ```no_run
/// use parasurf::io::binary;
///
/// let mesh = binary::load("sphere.mesh").unwrap();
/// println!("{} vertices", mesh.num_vertices());
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<TriangleMesh> {
    let path = path.as_ref();
    log::info!("Loading mesh file '{}'", path.display());

    let file = File::open(path).map_err(|source| MeshError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mesh = read_from(BufReader::new(file))?;

    log::debug!(
        "Loaded {} vertices, {} triangles from '{}'",
        mesh.num_vertices(),
        mesh.num_triangles(),
        path.display()
    );
    Ok(mesh)
}

/// Save a mesh to a `.mesh` file, replacing any existing file.
pub fn save<P: AsRef<Path>>(mesh: &TriangleMesh, path: P) -> Result<()> {
    let path = path.as_ref();
    log::info!(
        "Writing mesh file '{}' ({} vertices, {} triangles)",
        path.display(),
        mesh.num_vertices(),
        mesh.num_triangles()
    );

    let file = File::create(path).map_err(|source| MeshError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    write_to(mesh, BufWriter::new(file))
}

/// Read a mesh from any byte stream.
///
/// Stops at the first failure; a partially read mesh is never returned.
pub fn read_from<R: Read>(mut reader: R) -> Result<TriangleMesh> {
    let nv = read_count(&mut reader, Section::VertexCount)?;
    let nt = read_count(&mut reader, Section::TriangleCount)?;

    let vertices: Vec<Vertex> = read_records(&mut reader, nv, Section::Vertices)?;
    let triangles: Vec<Triangle> = read_records(&mut reader, nt, Section::Triangles)?;

    Ok(TriangleMesh::from_parts(vertices, triangles))
}

/// Write a mesh to any byte sink.
///
/// The sink is flushed after every section, so a failure inside a buffered
/// writer is still reported against the section that caused it.
pub fn write_to<W: Write>(mesh: &TriangleMesh, mut writer: W) -> Result<()> {
    let nv = count_field(mesh.num_vertices(), Section::VertexCount)?;
    let nt = count_field(mesh.num_triangles(), Section::TriangleCount)?;

    write_section(&mut writer, &nv.to_ne_bytes(), Section::VertexCount)?;
    write_section(&mut writer, &nt.to_ne_bytes(), Section::TriangleCount)?;
    write_section(
        &mut writer,
        bytemuck::cast_slice(mesh.vertices()),
        Section::Vertices,
    )?;
    write_section(
        &mut writer,
        bytemuck::cast_slice(mesh.triangles()),
        Section::Triangles,
    )?;

    Ok(())
}

/// Number of bytes a mesh occupies on disk.
pub fn encoded_len(mesh: &TriangleMesh) -> usize {
    HEADER_SIZE + mesh.num_vertices() * VERTEX_SIZE + mesh.num_triangles() * TRIANGLE_SIZE
}

fn read_count<R: Read>(reader: &mut R, section: Section) -> Result<usize> {
    let mut buf = [0u8; 4];
    let filled = fill(reader, &mut buf)?;
    if filled < buf.len() {
        return Err(MeshError::ShortRead {
            section,
            expected: buf.len(),
            actual: filled,
        });
    }
    Ok(u32::from_ne_bytes(buf) as usize)
}

fn count_field(len: usize, section: Section) -> Result<u32> {
    u32::try_from(len).map_err(|_| MeshError::ShortWrite {
        section,
        source: io::Error::new(
            ErrorKind::InvalidInput,
            format!("{} elements do not fit in a 32-bit count", len),
        ),
    })
}

/// Read `count` records, growing the storage one chunk at a time.
fn read_records<T: Pod, R: Read>(reader: &mut R, count: usize, section: Section) -> Result<Vec<T>> {
    let record_size = std::mem::size_of::<T>();
    let expected = count
        .checked_mul(record_size)
        .ok_or(MeshError::Allocation { section, count })?;

    let mut records: Vec<T> = Vec::new();
    while records.len() < count {
        let start = records.len();
        let chunk = (count - start).min(CHUNK_RECORDS);
        records
            .try_reserve(chunk)
            .map_err(|_| MeshError::Allocation { section, count })?;
        records.resize(start + chunk, Zeroable::zeroed());

        let filled = fill(reader, bytemuck::cast_slice_mut(&mut records[start..]))?;
        if filled < chunk * record_size {
            return Err(MeshError::ShortRead {
                section,
                expected,
                actual: start * record_size + filled,
            });
        }
    }
    Ok(records)
}

/// Read until `buf` is full or the stream ends, returning the bytes read.
fn fill<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(MeshError::Io(e)),
        }
    }
    Ok(filled)
}

fn write_section<W: Write>(writer: &mut W, bytes: &[u8], section: Section) -> Result<()> {
    writer
        .write_all(bytes)
        .and_then(|()| writer.flush())
        .map_err(|source| MeshError::ShortWrite { section, source })
}
