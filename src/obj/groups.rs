//! Directive-driven group state tracking.
//!
//! Group transitions form a small state machine: the active group is
//! identified by index into an append-only list, and each directive either
//! mutates an unset attribute of the active group or starts a new group
//! carrying the remaining attributes forward. Decoding starts with one
//! implicit unnamed group.

use crate::mesh::Group;
use crate::options::DecodeOptions;

/// Internal group state.
///
/// `index_count` is signed: a material switch away from a group that never
/// received an index marks it with -1 so the terminal pass can discard it.
#[derive(Debug, Clone, Default)]
struct GroupState {
    name: Option<String>,
    material: Option<String>,
    smoothing: u32,
    index_start: usize,
    index_count: i64,
}

/// Tracks the active group across the replay pass.
pub(crate) struct GroupTracker {
    groups: Vec<GroupState>,
    current: usize,
}

impl GroupTracker {
    /// Start with the implicit initial group.
    pub fn new() -> Self {
        Self {
            groups: vec![GroupState::default()],
            current: 0,
        }
    }

    fn start_group(&mut self, state: GroupState) {
        self.groups.push(state);
        self.current = self.groups.len() - 1;
    }

    /// Handle an `o`/`g` directive at the given index-list length.
    pub fn on_name(&mut self, name: &str, index_len: usize) {
        let active = &mut self.groups[self.current];
        match &active.name {
            None => active.name = Some(name.to_string()),
            Some(current) if current == name => {}
            Some(_) => {
                let state = GroupState {
                    name: Some(name.to_string()),
                    material: active.material.clone(),
                    smoothing: active.smoothing,
                    index_start: index_len,
                    index_count: 0,
                };
                self.start_group(state);
            }
        }
    }

    /// Handle a `usemtl` directive at the given index-list length.
    pub fn on_material(&mut self, material: &str, index_len: usize) {
        let active = &mut self.groups[self.current];
        match &active.material {
            None => active.material = Some(material.to_string()),
            Some(current) if current == material => {}
            Some(_) => {
                if active.index_count == 0 {
                    // never received an index; discard it at the end
                    active.index_count = -1;
                }
                let state = GroupState {
                    name: active.name.clone(),
                    material: Some(material.to_string()),
                    smoothing: active.smoothing,
                    index_start: index_len,
                    index_count: 0,
                };
                self.start_group(state);
            }
        }
    }

    /// Handle an `s` directive at the given index-list length.
    pub fn on_smoothing(&mut self, smoothing: u32, index_len: usize) {
        let active = &mut self.groups[self.current];
        if active.smoothing != smoothing {
            let state = GroupState {
                name: active.name.clone(),
                material: active.material.clone(),
                smoothing,
                index_start: index_len,
                index_count: 0,
            };
            self.start_group(state);
        }
    }

    /// Count one index pushed while this group is active.
    pub fn record_index(&mut self) {
        self.groups[self.current].index_count += 1;
    }

    /// Discard sentinel-marked groups and diagnose groups too small to
    /// hold a triangle; returns the final ordered groups.
    pub fn finish(self, options: &mut DecodeOptions<'_>) -> Vec<Group> {
        let mut result = Vec::new();
        for state in self.groups {
            if state.index_count < 0 {
                continue;
            }
            if state.index_count < 3 && state.index_count > 0 {
                options.report(format!(
                    "group {:?} has {} indices, fewer than one triangle",
                    state.name.as_deref().unwrap_or(""),
                    state.index_count
                ));
            }
            result.push(Group {
                name: state.name,
                material: state.material,
                smoothing: state.smoothing,
                index_start: state.index_start,
                index_count: state.index_count as usize,
            });
        }
        result
    }
}

/// Parse an `s` directive value: `off` means 0, anything else is an
/// integer, decimal or base-prefixed (`0x`, `0o`, `0b`).
pub(crate) fn parse_smoothing(token: &str) -> Option<u32> {
    let token = token.trim().to_ascii_lowercase();
    if token == "off" {
        return Some(0);
    }
    let (digits, radix) = if let Some(hex) = token.strip_prefix("0x") {
        (hex, 16)
    } else if let Some(oct) = token.strip_prefix("0o") {
        (oct, 8)
    } else if let Some(bin) = token.strip_prefix("0b") {
        (bin, 2)
    } else {
        (token.as_str(), 10)
    };
    u32::from_str_radix(digits, radix).ok()
}
