//! Renders the block list as a C++ header and writes it out. Rendering is
//! pure and fully deterministic: the same version and block list always
//! produce the same bytes, and nothing touches the filesystem until the
//! whole header exists in memory.

use std::fs;
use std::path::{Path, PathBuf};

use itertools::Itertools;

use crate::block::{version_slug, BlockRecord};
use crate::consts;
use crate::error::Result;

/// Fixed templates and mode switches for one render.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub banner: String,
    pub guard: String,
    pub namespace: String,
    /// Emit `getBlockSize` as a per-block table of precomputed sizes
    /// instead of a single derived expression.
    pub blocksize_table: bool,
    /// Qualify the output filename with the UCD version.
    pub versioned_filename: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            banner: consts::LICENSE_BANNER.to_owned(),
            guard: consts::HEADER_GUARD.to_owned(),
            namespace: consts::NAMESPACE.to_owned(),
            blocksize_table: false,
            versioned_filename: false,
        }
    }
}

/// Builds the complete header text.
///
/// Block sizes are inclusive (`last - first + 1`) in both modes; the table
/// mode precomputes them per block, the default mode derives the same value
/// from the two code-point accessors at the call site.
pub fn render_header(version: &str, blocks: &[BlockRecord], config: &RenderConfig) -> String {
    let identifiers: Vec<String> = blocks.iter().map(BlockRecord::identifier).collect();

    let mut out = String::new();
    out.push_str(&config.banner);
    out.push_str(&format!(
        "\n\n#ifndef {guard}\n#define {guard}\n",
        guard = config.guard
    ));
    out.push_str("\n#include <cstdint>\n");
    out.push_str(&format!("\nnamespace {} {{\n", config.namespace));
    out.push_str(&format!(
        "\n// The Unicode version this is based on.\nconstexpr char const *version_str = \"{version}\";\n"
    ));

    out.push_str("\nenum class Block : uint32_t {\n");
    for (idx, identifier) in identifiers.iter().enumerate() {
        // The first entry is pinned to zero, the rest auto-increment.
        // Callers must not read code-point meaning into these values.
        if idx == 0 {
            out.push_str(&format!("    {identifier} = 0x0,\n"));
        } else {
            out.push_str(&format!("    {identifier},\n"));
        }
    }
    out.push_str("};\n");

    out.push_str(&switch_fn(
        "getFirstCodePoint",
        &identifiers,
        blocks.iter().map(|b| format!("0x{:X}", b.start)),
    ));
    out.push_str(&switch_fn(
        "getLastCodePoint",
        &identifiers,
        blocks.iter().map(|b| format!("0x{:X}", b.end)),
    ));

    if config.blocksize_table {
        out.push_str(&switch_fn(
            "getBlockSize",
            &identifiers,
            blocks.iter().map(|b| b.size().to_string()),
        ));
    } else {
        out.push_str(
            "\nconstexpr uint32_t getBlockSize(Block unicode_block) {\n    \
             return getLastCodePoint(unicode_block) - getFirstCodePoint(unicode_block) + 1;\n}\n",
        );
    }

    out.push_str(&format!("\n}} // namespace {}\n", config.namespace));
    out.push_str(&format!("\n#endif // {}\n", config.guard));
    out
}

/// One exhaustive switch over every declared Block value. Used for all
/// accessor functions so the per-block case shape is written exactly once.
/// No default case: the switch covers the enum by construction.
fn switch_fn<I>(name: &str, identifiers: &[String], values: I) -> String
where
    I: Iterator<Item = String>,
{
    let cases = identifiers
        .iter()
        .zip(values)
        .map(|(identifier, value)| {
            format!("    case Block::{identifier}:\n        return {value};")
        })
        .join("\n");
    let body = if cases.is_empty() {
        String::new()
    } else {
        format!("{cases}\n")
    };
    format!(
        "\nconstexpr uint32_t {name}(Block unicode_block) {{\n    \
         switch (unicode_block) {{\n{body}    }}\n}}\n"
    )
}

/// Name of the output file: fixed by default, version-qualified on request.
pub fn output_filename(version: &str, config: &RenderConfig) -> String {
    if config.versioned_filename {
        format!("unicode_blocks_{}.hpp", version_slug(version))
    } else {
        consts::DEFAULT_FILENAME.to_owned()
    }
}

/// Writes the rendered header into `out_dir` and returns the full path.
pub fn write_header(
    out_dir: &Path,
    version: &str,
    header: &str,
    config: &RenderConfig,
) -> Result<PathBuf> {
    let path = out_dir.join(output_filename(version, config));
    fs::write(&path, header)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_blocks() -> Vec<BlockRecord> {
        vec![
            BlockRecord {
                name: "Basic Latin".to_owned(),
                start: 0x0,
                end: 0x7F,
            },
            BlockRecord {
                name: "Latin-1 Supplement".to_owned(),
                start: 0x80,
                end: 0xFF,
            },
        ]
    }

    #[test]
    fn enum_lists_sanitized_names_in_input_order() {
        let header = render_header("Unicode 9.0.0", &sample_blocks(), &RenderConfig::default());
        let basic = header.find("Basic_Latin = 0x0,").unwrap();
        let latin1 = header.find("Latin_1_Supplement,").unwrap();
        assert!(basic < latin1);
    }

    #[test]
    fn accessors_emit_uppercase_hex_code_points() {
        let header = render_header("Unicode 9.0.0", &sample_blocks(), &RenderConfig::default());
        assert!(header.contains("constexpr uint32_t getFirstCodePoint(Block unicode_block)"));
        assert!(header.contains("case Block::Basic_Latin:\n        return 0x0;"));
        assert!(header.contains("case Block::Basic_Latin:\n        return 0x7F;"));
        assert!(header.contains("case Block::Latin_1_Supplement:\n        return 0x80;"));
        assert!(header.contains("case Block::Latin_1_Supplement:\n        return 0xFF;"));
    }

    #[test]
    fn version_constant_keeps_raw_text() {
        let header = render_header("Unicode 9.0.0", &sample_blocks(), &RenderConfig::default());
        assert!(header.contains("constexpr char const *version_str = \"Unicode 9.0.0\";"));
    }

    #[test]
    fn blocksize_table_precomputes_inclusive_sizes() {
        let config = RenderConfig {
            blocksize_table: true,
            ..RenderConfig::default()
        };
        let header = render_header("Unicode 9.0.0", &sample_blocks(), &config);
        assert!(header.contains("constexpr uint32_t getBlockSize(Block unicode_block)"));
        assert!(header.contains("case Block::Basic_Latin:\n        return 128;"));
    }

    #[test]
    fn default_blocksize_is_the_inclusive_derived_expression() {
        let header = render_header("Unicode 9.0.0", &sample_blocks(), &RenderConfig::default());
        assert!(header.contains(
            "return getLastCodePoint(unicode_block) - getFirstCodePoint(unicode_block) + 1;"
        ));
        assert!(!header.contains("return 128;"));
    }

    #[test]
    fn guard_namespace_and_banner_come_from_config() {
        let config = RenderConfig {
            banner: "// test banner".to_owned(),
            guard: "TEST_GUARD_H".to_owned(),
            namespace: "testns".to_owned(),
            ..RenderConfig::default()
        };
        let header = render_header("x", &[], &config);
        assert!(header.starts_with("// test banner"));
        assert!(header.contains("#ifndef TEST_GUARD_H\n#define TEST_GUARD_H"));
        assert!(header.contains("namespace testns {"));
        assert!(header.contains("} // namespace testns"));
        assert!(header.trim_end().ends_with("#endif // TEST_GUARD_H"));
    }

    #[test]
    fn zero_blocks_still_render_a_complete_header() {
        let header = render_header("Unicode 9.0.0", &[], &RenderConfig::default());
        assert!(header.contains("enum class Block : uint32_t {\n};"));
        assert!(header.contains(
            "constexpr uint32_t getFirstCodePoint(Block unicode_block) {\n    \
             switch (unicode_block) {\n    }\n}"
        ));
        assert!(header.contains("#endif // UNICODE_BLOCKS_HPP"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let blocks = sample_blocks();
        let config = RenderConfig::default();
        let a = render_header("Unicode 9.0.0", &blocks, &config);
        let b = render_header("Unicode 9.0.0", &blocks, &config);
        assert_eq!(a, b);
    }

    #[test]
    fn output_filename_variants() {
        let fixed = RenderConfig::default();
        assert_eq!(output_filename("Unicode 9.0.0", &fixed), "unicode_blocks.h");

        let versioned = RenderConfig {
            versioned_filename: true,
            ..RenderConfig::default()
        };
        assert_eq!(
            output_filename("Unicode 9.0.0", &versioned),
            "unicode_blocks_9_0_0.hpp"
        );
    }
}
