/// One block range as listed in the UCD, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRecord {
    /// Display name as given in the source, e.g. "Basic Latin".
    pub name: String,
    /// First code point of the block.
    pub start: u32,
    /// Last code point of the block, inclusive. `end >= start`.
    pub end: u32,
}

impl BlockRecord {
    /// The generated-source identifier for this block: spaces and hyphens
    /// become underscores, nothing else is touched. Names are expected to
    /// contain only letters, digits, spaces, and hyphens; anything else
    /// passes through and yields an invalid identifier.
    pub fn identifier(&self) -> String {
        self.name
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c })
            .collect()
    }

    /// Inclusive size of the block.
    pub fn size(&self) -> u32 {
        self.end - self.start + 1
    }
}

/// Filename-safe form of the UCD version string: keep the part after the
/// last space ("Unicode 9.0.0" -> "9.0.0"), then dots become underscores.
/// Used only for the versioned output filename; the emitted `version_str`
/// constant keeps the raw text.
pub fn version_slug(version: &str) -> String {
    let tail = version.rsplit(' ').next().unwrap_or(version);
    tail.replace('.', "_")
}
