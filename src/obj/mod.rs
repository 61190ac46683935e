//! Wavefront OBJ decoding and encoding.
//!
//! Decoding is a two-pass, single-scan pipeline: pass 1
//! ([`collector`]) classifies lines and accumulates raw component arrays
//! while buffering every line, pass 2 ([`welder`]) replays the buffer,
//! resolving absolute/relative indices, welding duplicate component
//! combinations and driving the group state machine ([`groups`]). The
//! stride layout is derived once at the end, when the set of present
//! components is known. [`writer`] is the exact inverse.
//!
//! # Example
//!
//! ```
//! use objmesh::{decode_obj_str, DecodeOptions};
//!
//! let text = "\
//! v 0 0 0
//! v 1 0 0
//! v 0 1 0
//! f 1 2 3
//! ";
//! let mesh = decode_obj_str(text, &mut DecodeOptions::default()).unwrap();
//! assert_eq!(mesh.indices, vec![0, 1, 2]);
//! assert_eq!(mesh.stride_size, 12);
//! ```

mod collector;
mod error;
mod groups;
#[cfg(test)]
mod tests;
mod welder;
mod writer;

pub use error::{DecodeError, EncodeError};

use std::io::{BufRead, Write};

use crate::mesh::{Mesh, StrideLayout};
use crate::options::DecodeOptions;

use collector::RawGeometry;
use groups::GroupTracker;
use welder::Welder;

/// Decode OBJ text from a buffered reader.
///
/// Non-fatal problems are reported through the options' diagnostic sink
/// and decoding continues; only an I/O failure of `reader` aborts, and
/// the error then carries the partial mesh.
pub fn decode_obj<R: BufRead>(
    reader: R,
    options: &mut DecodeOptions<'_>,
) -> Result<Mesh, DecodeError> {
    let raw = RawGeometry::collect(reader, options)?;

    let mut mesh = Mesh::default();
    let mut tracker = GroupTracker::new();
    let mut welder = Welder::new(&raw);
    welder.replay(&mut mesh, &mut tracker, options);

    mesh.groups = tracker.finish(options);
    mesh.apply_stride(StrideLayout::for_components(
        mesh.texture_coord_found,
        mesh.normal_coord_found,
    ));

    log::debug!(
        "obj decode: {} unified vertices, {} indices, {} groups",
        welder.unified_count(),
        mesh.indices.len(),
        mesh.groups.len()
    );

    if options.emit_statistics {
        emit_statistics(&mesh, &raw, &welder, options);
    }

    Ok(mesh)
}

/// Decode OBJ text from a byte slice.
pub fn decode_obj_slice(
    data: &[u8],
    options: &mut DecodeOptions<'_>,
) -> Result<Mesh, DecodeError> {
    decode_obj(data, options)
}

/// Decode OBJ text from a string.
pub fn decode_obj_str(text: &str, options: &mut DecodeOptions<'_>) -> Result<Mesh, DecodeError> {
    decode_obj_slice(text.as_bytes(), options)
}

/// Encode a mesh as OBJ text into a writer.
///
/// Fails if any group's index count is not a multiple of 3; output
/// written before the failure stays flushed.
pub fn encode_obj<W: Write>(mesh: &Mesh, writer: W) -> Result<(), EncodeError> {
    writer::write_obj(mesh, writer)
}

/// Encode a mesh as an OBJ string.
pub fn encode_obj_string(mesh: &Mesh) -> Result<String, EncodeError> {
    let mut buf = Vec::new();
    writer::write_obj(mesh, &mut buf)?;
    // the writer only emits ASCII
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Emit the post-decode statistics summary through the diagnostic sink.
fn emit_statistics(
    mesh: &Mesh,
    raw: &RawGeometry,
    welder: &Welder<'_>,
    options: &mut DecodeOptions<'_>,
) {
    let (position_lines, texture_lines, normal_lines) = welder.line_counts();
    options.report(format!(
        "decode stats: lines={} v={} vt={} vn={} f={} triangles={}",
        raw.lines.len(),
        position_lines,
        texture_lines,
        normal_lines,
        welder.face_lines,
        welder.triangles
    ));
    options.report(format!(
        "decode stats: elements={} indices={} bigIndex={} groups={}",
        welder.unified_count(),
        mesh.indices.len(),
        mesh.big_index_found,
        mesh.groups.len()
    ));
    options.report(format!(
        "decode stats: textureFound={} normalFound={} stride={} textureOffset={} normalOffset={}",
        mesh.texture_coord_found,
        mesh.normal_coord_found,
        mesh.stride_size,
        mesh.stride_offset_texture,
        mesh.stride_offset_normal
    ));
    for group in &mesh.groups {
        options.report(format!(
            "decode stats: group name={:?} start={} count={}",
            group.name.as_deref().unwrap_or(""),
            group.index_start,
            group.index_count
        ));
    }
}
