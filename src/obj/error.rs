//! Error types for OBJ decoding and encoding.

use thiserror::Error;

use crate::mesh::Mesh;

/// Fatal decode failure.
///
/// Malformed directives, bad numeric fields, out-of-range indices and
/// unrecognized lines are all non-fatal: they are reported through the
/// diagnostic sink and the offending line is skipped. Only a failure of
/// the input source itself aborts decoding.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The input source failed mid-stream. Carries whatever partial mesh
    /// had been built when the failure surfaced.
    #[error("read error at line {line}: {source}")]
    Read {
        /// 1-based line number being read when the failure occurred.
        line: usize,
        /// Partial decode result.
        partial: Box<Mesh>,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}

/// Encode failure.
///
/// Anything already written stays flushed to the destination; the caller
/// is responsible for discarding partial output.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The output destination failed.
    #[error("write error: {0}")]
    Io(#[from] std::io::Error),
    /// A group's index count violates the triangle-list invariant. Only
    /// meshes built directly from vertex data can reach this state; the
    /// decoder always emits whole triangles.
    #[error("group {group:?} index count {count} is not a multiple of 3")]
    GroupNotTriangles {
        /// Name of the offending group.
        group: Option<String>,
        /// Its index count.
        count: usize,
    },
}
