//! Second-pass index resolution and vertex welding.
//!
//! Replays the buffered lines from pass 1. Face references are resolved
//! against running per-kind directive counts (so relative negative indices
//! mean "counting back from here"), welded through a composite-key table
//! so each distinct position/texture/normal combination is emitted once,
//! and appended to the interleaved vertex buffer.

use std::collections::HashMap;

use crate::mesh::Mesh;
use crate::options::DecodeOptions;

use super::collector::RawGeometry;
use super::groups::{self, GroupTracker};

/// Absent-component sentinel for the weld key. Input indices are parsed
/// from i32 text, so no real component index can reach this value and the
/// sentinel never collides with component index 0.
const NO_COMPONENT: u32 = u32::MAX;

/// Replay state for the welding pass.
pub(crate) struct Welder<'a> {
    raw: &'a RawGeometry,
    /// resolved (position, texture, normal) -> unified vertex index
    weld_table: HashMap<(u32, u32, u32), u32>,
    unified_count: u32,
    line_no: usize,

    // running counts of directive lines seen so far in the replay;
    // relative indices resolve against these, not the final totals
    position_lines: usize,
    texture_lines: usize,
    normal_lines: usize,

    // stat-only
    pub face_lines: usize,
    pub triangles: usize,
}

impl<'a> Welder<'a> {
    pub fn new(raw: &'a RawGeometry) -> Self {
        Self {
            raw,
            weld_table: HashMap::new(),
            unified_count: 0,
            line_no: 0,
            position_lines: 0,
            texture_lines: 0,
            normal_lines: 0,
            face_lines: 0,
            triangles: 0,
        }
    }

    /// Number of unified vertices emitted.
    pub fn unified_count(&self) -> u32 {
        self.unified_count
    }

    /// Counts of directive lines seen, for statistics.
    pub fn line_counts(&self) -> (usize, usize, usize) {
        (self.position_lines, self.texture_lines, self.normal_lines)
    }

    /// Replay every buffered line, populating mesh and groups.
    pub fn replay(
        &mut self,
        mesh: &mut Mesh,
        tracker: &mut GroupTracker,
        options: &mut DecodeOptions<'_>,
    ) {
        for line in &self.raw.lines {
            self.line_no += 1;
            if let Err(diagnostic) = self.replay_line(line, mesh, tracker, options) {
                options.report(diagnostic);
            }
        }
    }

    fn replay_line(
        &mut self,
        line: &str,
        mesh: &mut Mesh,
        tracker: &mut GroupTracker,
        options: &mut DecodeOptions<'_>,
    ) -> Result<(), String> {
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        if let Some(rest) = line.strip_prefix("f ") {
            return self.replay_face(rest, mesh, tracker, options);
        }

        if line.starts_with("v ") {
            self.position_lines += 1;
        } else if line.starts_with("vt ") {
            self.texture_lines += 1;
        } else if line.starts_with("vn ") {
            self.normal_lines += 1;
        } else if let Some(rest) = line.strip_prefix("s ") {
            match groups::parse_smoothing(rest) {
                Some(smoothing) => tracker.on_smoothing(smoothing, mesh.indices.len()),
                None => {
                    return Err(format!(
                        "line {}: bad smoothing value [{}]",
                        self.line_no, rest
                    ))
                }
            }
        } else if let Some(rest) = line.strip_prefix("o ").or_else(|| line.strip_prefix("g ")) {
            tracker.on_name(rest, mesh.indices.len());
        } else if let Some(rest) = line.strip_prefix("usemtl ") {
            tracker.on_material(rest, mesh.indices.len());
        } else if let Some(rest) = line.strip_prefix("mtllib ") {
            // first library reference wins; later ones only get diagnosed
            match &mesh.material_library {
                Some(current) => {
                    return Err(format!(
                        "line {}: mtllib redefinition kept={} ignored={}",
                        self.line_no, current, rest
                    ))
                }
                None => mesh.material_library = Some(rest.to_string()),
            }
        }
        // anything else was already diagnosed by pass 1

        Ok(())
    }

    /// Resolve one face directive: 3 references form a triangle, 4 form a
    /// quad triangulated as (v0,v1,v2),(v2,v3,v0).
    fn replay_face(
        &mut self,
        face: &str,
        mesh: &mut Mesh,
        tracker: &mut GroupTracker,
        options: &mut DecodeOptions<'_>,
    ) -> Result<(), String> {
        self.face_lines += 1;

        let refs: Vec<&str> = face.split_whitespace().collect();
        if !(3..=4).contains(&refs.len()) {
            return Err(format!(
                "line {}: bad face [{}]: {} references",
                self.line_no,
                face,
                refs.len()
            ));
        }

        self.triangles += 1;
        for vertex_ref in &refs[..3] {
            self.add_vertex(vertex_ref, mesh, tracker, options)
                .map_err(|e| format!("line {}: face [{}]: {}", self.line_no, face, e))?;
        }

        if refs.len() == 4 {
            self.triangles += 1;
            for vertex_ref in [refs[2], refs[3], refs[0]] {
                self.add_vertex(vertex_ref, mesh, tracker, options)
                    .map_err(|e| format!("line {}: face [{}]: {}", self.line_no, face, e))?;
            }
        }

        Ok(())
    }

    /// Resolve one vertex reference and append its unified index.
    ///
    /// A reference is `p`, `p/t`, `p//n` or `p/t/n`. Each present
    /// component resolves against its own running count, then the resolved
    /// triple is looked up in the weld table; a hit reuses the existing
    /// unified vertex, a miss appends a new interleaved record.
    fn add_vertex(
        &mut self,
        vertex_ref: &str,
        mesh: &mut Mesh,
        tracker: &mut GroupTracker,
        options: &mut DecodeOptions<'_>,
    ) -> Result<(), String> {
        let fields: Vec<&str> = vertex_ref.split('/').collect();
        if fields.len() > 3 {
            return Err(format!(
                "bad reference [{}]: {} fields",
                vertex_ref,
                fields.len()
            ));
        }

        let position = resolve_component(
            fields[0],
            self.position_lines,
            self.raw.positions.len() / 3,
            "position",
        )?;
        let texture = match fields.get(1).copied().filter(|f| !f.is_empty()) {
            Some(field) => Some(resolve_component(
                field,
                self.texture_lines,
                self.raw.tex_coords.len() / 2,
                "texture",
            )?),
            None => None,
        };
        let normal = match fields.get(2).copied().filter(|f| !f.is_empty()) {
            Some(field) => Some(resolve_component(
                field,
                self.normal_lines,
                self.raw.normals.len() / 3,
                "normal",
            )?),
            None => None,
        };

        let key = (
            position,
            texture.unwrap_or(NO_COMPONENT),
            normal.unwrap_or(NO_COMPONENT),
        );
        if let Some(&unified) = self.weld_table.get(&key) {
            push_index(mesh, tracker, unified);
            return Ok(());
        }

        let p = position as usize * 3;
        mesh.vertex_buffer
            .extend_from_slice(&self.raw.positions[p..p + 3]);

        if let Some(texture) = texture {
            let t = texture as usize * 2;
            mesh.vertex_buffer
                .extend_from_slice(&self.raw.tex_coords[t..t + 2]);
            mesh.texture_coord_found = true;
        }

        if let Some(normal) = normal {
            if !options.ignore_normals {
                let n = normal as usize * 3;
                mesh.vertex_buffer
                    .extend_from_slice(&self.raw.normals[n..n + 3]);
                mesh.normal_coord_found = true;
            }
        }

        let unified = self.unified_count;
        push_index(mesh, tracker, unified);
        self.weld_table.insert(key, unified);
        self.unified_count += 1;

        Ok(())
    }
}

/// Resolve one signed index field against its running directive count.
///
/// Positive indices are 1-based absolute; non-positive indices are
/// relative to the running count. The result must land inside the
/// component array collected in pass 1.
fn resolve_component(
    field: &str,
    running_count: usize,
    available: usize,
    what: &str,
) -> Result<u32, String> {
    let value: i64 = field
        .trim()
        .parse()
        .map_err(|_| format!("bad integer {what} index [{field}]"))?;

    let resolved = if value > 0 {
        value - 1
    } else {
        running_count as i64 + value
    };

    if resolved < 0 || resolved as usize >= available {
        return Err(format!("invalid {what} index [{field}]"));
    }
    Ok(resolved as u32)
}

/// Append a unified index to the mesh and the active group.
fn push_index(mesh: &mut Mesh, tracker: &mut GroupTracker, unified: u32) {
    if unified > 65535 {
        mesh.big_index_found = true;
    }
    mesh.indices.push(unified);
    tracker.record_index();
}
