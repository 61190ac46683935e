//! OBJ text serialization, the inverse of decoding.

use std::io::Write;

use crate::mesh::Mesh;

use super::error::EncodeError;

/// Serialize a mesh to line-oriented OBJ text.
///
/// Emits a header comment, the material library reference, one `v` line
/// (plus `vt`/`vn` lines when the mesh carries those components) per
/// unified vertex in buffer order, then each group's directives and
/// triangle faces. Face references are 1-based and use the slash form
/// matching the component found-flags.
pub(crate) fn write_obj<W: Write>(mesh: &Mesh, mut writer: W) -> Result<(), EncodeError> {
    writeln!(writer, "# OBJ exported by objmesh")?;
    writeln!(writer)?;

    if let Some(library) = &mesh.material_library {
        writeln!(writer, "mtllib {library}")?;
    }

    let floats_per_record = mesh.stride_size / 4;
    for element in 0..mesh.element_count() {
        let record = element * floats_per_record;

        let v = record + mesh.stride_offset_position / 4;
        writeln!(
            writer,
            "v {:.6} {:.6} {:.6}",
            mesh.vertex_buffer[v],
            mesh.vertex_buffer[v + 1],
            mesh.vertex_buffer[v + 2]
        )?;

        if mesh.texture_coord_found {
            let t = record + mesh.stride_offset_texture / 4;
            writeln!(
                writer,
                "vt {:.6} {:.6}",
                mesh.vertex_buffer[t],
                mesh.vertex_buffer[t + 1]
            )?;
        }

        if mesh.normal_coord_found {
            let n = record + mesh.stride_offset_normal / 4;
            writeln!(
                writer,
                "vn {:.6} {:.6} {:.6}",
                mesh.vertex_buffer[n],
                mesh.vertex_buffer[n + 1],
                mesh.vertex_buffer[n + 2]
            )?;
        }
    }

    for group in &mesh.groups {
        if let Some(name) = &group.name {
            writeln!(writer, "g {name}")?;
        }
        if let Some(material) = &group.material {
            writeln!(writer, "usemtl {material}")?;
        }
        writeln!(writer, "s {}", group.smoothing)?;

        if group.index_count % 3 != 0 {
            return Err(EncodeError::GroupNotTriangles {
                group: group.name.clone(),
                count: group.index_count,
            });
        }

        let range = &mesh.indices[group.index_start..group.index_start + group.index_count];
        for triangle in range.chunks_exact(3) {
            write!(writer, "f")?;
            for &index in triangle {
                let reference = index + 1;
                match (mesh.texture_coord_found, mesh.normal_coord_found) {
                    (true, true) => write!(writer, " {reference}/{reference}/{reference}")?,
                    (true, false) => write!(writer, " {reference}/{reference}")?,
                    (false, true) => write!(writer, " {reference}//{reference}")?,
                    (false, false) => write!(writer, " {reference}")?,
                }
            }
            writeln!(writer)?;
        }
    }

    Ok(())
}
