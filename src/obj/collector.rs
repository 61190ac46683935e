//! Pass-1 line collection.
//!
//! The first pass scans every input line once, accumulating raw
//! per-component float arrays and buffering every trimmed line verbatim.
//! The buffered lines are what make forward references possible: by the
//! time the second pass resolves a face, every `v`/`vt`/`vn` in the file
//! has already been collected, so an absolute index may point past the
//! current position in the stream.

use std::io::BufRead;

use crate::mesh::Mesh;
use crate::options::DecodeOptions;
use crate::parse;

use super::error::DecodeError;

/// Tolerance below which a third texture coordinate is considered zero.
const VT_W_EPSILON: f32 = 1e-6;

/// Raw component arrays and the replay buffer produced by the first pass.
#[derive(Debug, Default)]
pub(crate) struct RawGeometry {
    /// `v` components, three per directive (homogeneous form pre-divided).
    pub positions: Vec<f32>,
    /// `vt` components, two per directive.
    pub tex_coords: Vec<f32>,
    /// `vn` components, three per directive.
    pub normals: Vec<f32>,
    /// Every trimmed input line, in order, for the second pass.
    pub lines: Vec<String>,
}

impl RawGeometry {
    /// Scan the whole input.
    ///
    /// Non-fatal problems are reported through the sink and scanning
    /// continues; an I/O failure aborts immediately.
    pub fn collect<R: BufRead>(
        mut reader: R,
        options: &mut DecodeOptions<'_>,
    ) -> Result<Self, DecodeError> {
        let mut raw = RawGeometry::default();
        let mut buf = String::new();
        let mut line_no = 0;

        loop {
            line_no += 1;
            buf.clear();
            match reader.read_line(&mut buf) {
                Ok(0) => break,
                Ok(_) => raw.collect_line(buf.trim(), line_no, options),
                Err(source) => {
                    return Err(DecodeError::Read {
                        line: line_no,
                        partial: Box::new(Mesh::default()),
                        source,
                    })
                }
            }
        }

        Ok(raw)
    }

    /// Classify one trimmed line, accumulating component data.
    ///
    /// The line is buffered for replay regardless of outcome.
    fn collect_line(&mut self, line: &str, line_no: usize, options: &mut DecodeOptions<'_>) {
        self.lines.push(line.to_string());

        if line.is_empty() || line.starts_with('#') {
            return;
        }

        if let Some(rest) = line.strip_prefix("v ") {
            match parse::parse_floats_space(rest) {
                Ok(coords) => match coords.len() {
                    3 => self.positions.extend_from_slice(&coords),
                    4 => {
                        // homogeneous form: divide x,y,z by w
                        let w = coords[3];
                        self.positions
                            .extend([coords[0] / w, coords[1] / w, coords[2] / w]);
                    }
                    n => options.report(format!(
                        "line {line_no}: [{line}]: bad number of coords: {n}"
                    )),
                },
                Err(e) => options.report(format!("line {line_no}: bad vertex [{line}]: {e}")),
            }
        } else if let Some(rest) = line.strip_prefix("vt ") {
            match parse::parse_floats_space(rest) {
                Ok(coords) if (2..=3).contains(&coords.len()) => {
                    if coords.len() == 3 && coords[2].abs() >= VT_W_EPSILON {
                        options.report(format!(
                            "line {line_no}: non-zero third texture coordinate w={}: [{line}]",
                            coords[2]
                        ));
                    }
                    self.tex_coords.extend([coords[0], coords[1]]);
                }
                Ok(coords) => options.report(format!(
                    "line {line_no}: bad vertex texture [{line}] size={}",
                    coords.len()
                )),
                Err(e) => options.report(format!(
                    "line {line_no}: bad vertex texture [{line}]: {e}"
                )),
            }
        } else if let Some(rest) = line.strip_prefix("vn ") {
            match parse::parse_vector3_space(rest) {
                Ok(normal) => self.normals.extend_from_slice(&normal),
                Err(e) => options.report(format!(
                    "line {line_no}: bad vertex normal [{line}]: {e}"
                )),
            }
        } else if Self::is_deferred_directive(line) {
            // interpreted by the second pass
        } else {
            options.report(format!("line {line_no}: [{line}]: unexpected"));
        }
    }

    /// Directives carried through to the replay pass uninterpreted.
    fn is_deferred_directive(line: &str) -> bool {
        ["o ", "g ", "s ", "usemtl ", "mtllib ", "f "]
            .iter()
            .any(|prefix| line.starts_with(prefix))
    }
}
