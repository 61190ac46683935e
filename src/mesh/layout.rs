//! Interleaved stride layout derivation.

/// Byte layout of one interleaved vertex record.
///
/// Position always occupies the first 12 bytes. Texture coordinates, when
/// any were recorded, take the next 8 bytes; normals, when any were
/// recorded, take the 12 bytes after that. Offsets of absent components
/// stay 0.
///
/// The layout is a function of the two component found-flags, which are
/// only known once every face reference has been resolved, so it is
/// derived exactly once at the end of decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrideLayout {
    /// Total bytes per vertex record.
    pub stride_size: usize,
    /// Byte offset of the position component (always 0).
    pub position_offset: usize,
    /// Byte offset of the texture component, 0 when absent.
    pub texture_offset: usize,
    /// Byte offset of the normal component, 0 when absent.
    pub normal_offset: usize,
}

const POSITION_BYTES: usize = 3 * 4;
const TEXTURE_BYTES: usize = 2 * 4;
const NORMAL_BYTES: usize = 3 * 4;

impl StrideLayout {
    /// Derive the record layout from the component found-flags.
    pub fn for_components(texture: bool, normal: bool) -> Self {
        let mut stride_size = POSITION_BYTES;
        let mut texture_offset = 0;
        let mut normal_offset = 0;

        if texture {
            texture_offset = stride_size;
            stride_size += TEXTURE_BYTES;
        }
        if normal {
            normal_offset = stride_size;
            stride_size += NORMAL_BYTES;
        }

        Self {
            stride_size,
            position_offset: 0,
            texture_offset,
            normal_offset,
        }
    }
}
