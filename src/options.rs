//! Decode configuration and the diagnostic sink capability.
//!
//! Non-fatal parse problems are reported as human-readable strings through
//! an explicit sink carried in [`DecodeOptions`]. The sink is threaded
//! through every decode operation rather than living in ambient state, so
//! concurrent decodes of independent inputs stay isolated.

/// Options controlling OBJ and MTL decoding.
pub struct DecodeOptions<'a> {
    /// Emit a statistics summary through the diagnostic sink after decoding.
    pub emit_statistics: bool,
    /// Suppress normal-component storage even when normals are present in
    /// the input.
    pub ignore_normals: bool,
    /// Sink for human-readable diagnostics. When `None`, diagnostics are
    /// silently dropped.
    pub diagnostics: Option<&'a mut dyn FnMut(&str)>,
}

impl Default for DecodeOptions<'_> {
    fn default() -> Self {
        Self {
            emit_statistics: false,
            ignore_normals: false,
            diagnostics: None,
        }
    }
}

impl DecodeOptions<'_> {
    /// Report one diagnostic message through the sink, if any.
    pub(crate) fn report(&mut self, message: impl AsRef<str>) {
        if let Some(sink) = self.diagnostics.as_mut() {
            sink(message.as_ref());
        }
    }
}
