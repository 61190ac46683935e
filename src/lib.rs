//! # objmesh
//!
//! Decoder and encoder for line-oriented Wavefront OBJ geometry.
//!
//! Decoding produces a [`mesh::Mesh`]: a flat interleaved `f32` vertex
//! buffer, a triangle index list, and directive-driven group metadata.
//! Face references are welded so that every distinct
//! position/texture/normal combination becomes exactly one buffer entry.
//! Encoding is the inverse and reproduces the textual form.
//!
//! Forward references (faces listed before the vertices they point at) and
//! relative negative indices are both supported through a two-pass scan:
//! the first pass collects raw component arrays and buffers every line, the
//! second pass replays the buffered lines to resolve indices.

pub mod mesh;
pub mod mtl;
pub mod obj;
pub mod options;
pub mod parse;

pub use mesh::{Group, IndexFormat, Mesh};
pub use obj::{decode_obj, decode_obj_slice, decode_obj_str, encode_obj, encode_obj_string};
pub use options::DecodeOptions;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
