//! Material library (`.mtl`) decoding.
//!
//! The OBJ decoder only records material *names*; this module resolves
//! those names to diffuse color and texture-map data. Only the `newmtl`,
//! `Kd` and `map_Kd` directives are interpreted; other well-known
//! statements are skipped silently and unknown lines are diagnosed.

use std::collections::HashMap;
use std::io::BufRead;

use crate::options::DecodeOptions;
use crate::parse;

/// One material entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Material {
    /// Material name, as referenced by `usemtl`.
    pub name: String,
    /// Diffuse color (`Kd`).
    pub diffuse_color: [f32; 3],
    /// Diffuse texture map path (`map_Kd`).
    pub diffuse_map: Option<String>,
}

/// Materials keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MaterialLib {
    materials: HashMap<String, Material>,
}

impl MaterialLib {
    /// Look up a material by name.
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.get(name)
    }

    /// Number of materials in the library.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the library holds no materials.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Iterate over all materials.
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.values()
    }
}

/// Statements recognized but not interpreted.
const SKIPPED_STATEMENTS: [&str; 12] = [
    "map_Ka ", "map_d ", "map_Bump ", "Ns ", "Ka ", "Ke ", "Ks ", "Ni ", "d ", "illum ", "Tf ",
    "Tr ",
];

/// Decode a material library from a buffered reader.
///
/// The same error model as OBJ decoding applies: malformed statements are
/// diagnosed and skipped, only an I/O failure is fatal.
pub fn decode_mtl<R: BufRead>(
    mut reader: R,
    options: &mut DecodeOptions<'_>,
) -> Result<MaterialLib, std::io::Error> {
    let mut lib = MaterialLib::default();
    let mut current: Option<String> = None;
    let mut buf = String::new();
    let mut line_no = 0;

    loop {
        line_no += 1;
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        decode_line(buf.trim(), line_no, &mut lib, &mut current, options);
    }

    log::debug!("mtl decode: {} materials", lib.len());
    Ok(lib)
}

/// Decode a material library from a byte slice.
pub fn decode_mtl_slice(
    data: &[u8],
    options: &mut DecodeOptions<'_>,
) -> Result<MaterialLib, std::io::Error> {
    decode_mtl(data, options)
}

fn decode_line(
    line: &str,
    line_no: usize,
    lib: &mut MaterialLib,
    current: &mut Option<String>,
    options: &mut DecodeOptions<'_>,
) {
    if line.is_empty() || line.starts_with('#') {
        return;
    }

    if let Some(name) = line.strip_prefix("newmtl ") {
        lib.materials
            .entry(name.to_string())
            .or_insert_with(|| Material {
                name: name.to_string(),
                ..Default::default()
            });
        *current = Some(name.to_string());
    } else if let Some(rest) = line.strip_prefix("Kd ") {
        let Some(material) = current.as_ref().and_then(|n| lib.materials.get_mut(n)) else {
            options.report(format!("line {line_no}: Kd before any newmtl: [{line}]"));
            return;
        };
        match parse::parse_vector3_space(rest) {
            Ok(color) => material.diffuse_color = [color[0], color[1], color[2]],
            Err(e) => options.report(format!("line {line_no}: bad Kd [{line}]: {e}")),
        }
    } else if let Some(path) = line.strip_prefix("map_Kd ") {
        let Some(material) = current.as_ref().and_then(|n| lib.materials.get_mut(n)) else {
            options.report(format!(
                "line {line_no}: map_Kd before any newmtl: [{line}]"
            ));
            return;
        };
        material.diffuse_map = Some(path.to_string());
    } else if SKIPPED_STATEMENTS
        .iter()
        .any(|prefix| line.starts_with(prefix))
    {
        // recognized, not needed
    } else {
        options.report(format!("line {line_no}: [{line}]: unexpected"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIB: &str = "\
# sample library
newmtl steel
Ns 96.078431
Ka 1.000000 1.000000 1.000000
Kd 0.640000 0.640000 0.640000
map_Kd steel_diffuse.png

newmtl flat
Kd 1 0 0
";

    fn decode(text: &str) -> (MaterialLib, Vec<String>) {
        let mut seen = Vec::new();
        let mut sink = |msg: &str| seen.push(msg.to_string());
        let mut options = DecodeOptions {
            diagnostics: Some(&mut sink),
            ..Default::default()
        };
        let lib = decode_mtl_slice(text.as_bytes(), &mut options).unwrap();
        drop(options);
        (lib, seen)
    }

    #[test]
    fn test_lookup_by_name() {
        let (lib, seen) = decode(LIB);
        assert!(seen.is_empty());
        assert_eq!(lib.len(), 2);

        let steel = lib.get("steel").unwrap();
        assert_eq!(steel.diffuse_color, [0.64, 0.64, 0.64]);
        assert_eq!(steel.diffuse_map.as_deref(), Some("steel_diffuse.png"));

        let flat = lib.get("flat").unwrap();
        assert_eq!(flat.diffuse_color, [1.0, 0.0, 0.0]);
        assert_eq!(flat.diffuse_map, None);

        assert!(lib.get("missing").is_none());
    }

    #[test]
    fn test_kd_without_material_is_diagnosed() {
        let (lib, seen) = decode("Kd 1 1 1\n");
        assert!(lib.is_empty());
        assert_eq!(seen.len(), 1);
        assert!(seen[0].contains("before any newmtl"));
    }

    #[test]
    fn test_bad_kd_arity_is_diagnosed() {
        let (lib, seen) = decode("newmtl m\nKd 1 1\n");
        assert_eq!(lib.get("m").unwrap().diffuse_color, [0.0, 0.0, 0.0]);
        assert_eq!(seen.len(), 1);
        assert!(seen[0].contains("bad Kd"));
    }

    #[test]
    fn test_unknown_statement_is_diagnosed() {
        let (_, seen) = decode("newmtl m\nshiny yes\n");
        assert_eq!(seen.len(), 1);
        assert!(seen[0].contains("unexpected"));
    }

    #[test]
    fn test_redefinition_reuses_entry() {
        let (lib, _) = decode("newmtl m\nKd 1 0 0\nnewmtl m\nmap_Kd m.png\n");
        assert_eq!(lib.len(), 1);
        let m = lib.get("m").unwrap();
        assert_eq!(m.diffuse_color, [1.0, 0.0, 0.0]);
        assert_eq!(m.diffuse_map.as_deref(), Some("m.png"));
    }
}
