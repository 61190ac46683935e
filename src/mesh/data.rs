//! Mesh and group result types.

use super::layout::StrideLayout;

/// Index data format for downstream GPU upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IndexFormat {
    /// 16-bit unsigned integers (max unified index 65535).
    #[default]
    Uint16,
    /// 32-bit unsigned integers.
    Uint32,
}

impl IndexFormat {
    /// Get the size in bytes of each index.
    pub fn size(&self) -> usize {
        match self {
            Self::Uint16 => 2,
            Self::Uint32 => 4,
        }
    }
}

/// One directive-driven group: a contiguous range of the index list with a
/// name, material, and smoothing value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    /// Group or object name (`g`/`o`), unset until a name directive.
    pub name: Option<String>,
    /// Active material name (`usemtl`), unset until a material directive.
    pub material: Option<String>,
    /// Smoothing group id (`s`), 0 meaning off.
    pub smoothing: u32,
    /// First index belonging to this group.
    pub index_start: usize,
    /// Number of indices in this group.
    pub index_count: usize,
}

/// Decoded OBJ geometry.
///
/// `vertex_buffer` is a flat sequence of interleaved records of
/// `stride_size` bytes each, laid out `{position(3), [texture(2)],
/// [normal(3)]}`; `indices` is a triangle list into those records. The
/// stride fields are derived once after decoding finishes, since the
/// presence of texture/normal components is only known then.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Unified vertex indices, three per triangle.
    pub indices: Vec<u32>,
    /// Interleaved vertex records as raw floats.
    pub vertex_buffer: Vec<f32>,
    /// File name from the first `mtllib` directive.
    pub material_library: Option<String>,
    /// Directive-driven groups, in input order.
    pub groups: Vec<Group>,

    /// Any unified index exceeded 65535; a 16-bit index type is
    /// insufficient downstream.
    pub big_index_found: bool,
    /// Any face reference carried a texture coordinate.
    pub texture_coord_found: bool,
    /// Any face reference carried (and stored) a normal.
    pub normal_coord_found: bool,

    /// Bytes per interleaved vertex record.
    pub stride_size: usize,
    /// Byte offset of the position component (always 0).
    pub stride_offset_position: usize,
    /// Byte offset of the texture component, 0 when absent.
    pub stride_offset_texture: usize,
    /// Byte offset of the normal component, 0 when absent.
    pub stride_offset_normal: usize,
}

impl Mesh {
    /// Build a mesh directly from position-only vertex data and an index
    /// list, bypassing the parser.
    ///
    /// The result holds a single unnamed group covering all indices. This
    /// is the only path that can produce a group whose index count is not
    /// a multiple of 3; the encoder rejects such a mesh.
    pub fn from_vertex_data(coords: &[f32], indices: &[u32]) -> Self {
        if indices.len() % 3 != 0 {
            log::warn!(
                "mesh built from vertex data with {} indices, not a multiple of 3",
                indices.len()
            );
        }

        let mut mesh = Mesh {
            vertex_buffer: coords.to_vec(),
            ..Default::default()
        };
        mesh.groups.push(Group {
            index_count: indices.len(),
            ..Default::default()
        });
        for &index in indices {
            if index > 65535 {
                mesh.big_index_found = true;
            }
            mesh.indices.push(index);
        }
        mesh.apply_stride(StrideLayout::for_components(false, false));
        mesh
    }

    /// Copy a computed stride layout into the mesh fields.
    pub(crate) fn apply_stride(&mut self, layout: StrideLayout) {
        self.stride_size = layout.stride_size;
        self.stride_offset_position = layout.position_offset;
        self.stride_offset_texture = layout.texture_offset;
        self.stride_offset_normal = layout.normal_offset;
    }

    /// Number of interleaved vertex records in the buffer.
    pub fn element_count(&self) -> usize {
        if self.stride_size == 0 {
            return 0;
        }
        4 * self.vertex_buffer.len() / self.stride_size
    }

    /// Position components of one vertex record.
    pub fn position(&self, element: usize) -> [f32; 3] {
        let floats_per_record = self.stride_size / 4;
        let base = element * floats_per_record + self.stride_offset_position / 4;
        [
            self.vertex_buffer[base],
            self.vertex_buffer[base + 1],
            self.vertex_buffer[base + 2],
        ]
    }

    /// The vertex buffer as raw bytes, ready for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertex_buffer)
    }

    /// Smallest index format able to address every unified vertex.
    pub fn index_format(&self) -> IndexFormat {
        if self.big_index_found {
            IndexFormat::Uint32
        } else {
            IndexFormat::Uint16
        }
    }
}
