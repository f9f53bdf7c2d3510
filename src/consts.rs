//! Fixed text templates for the generated header. The renderer receives
//! these through `RenderConfig`, so tests can substitute their own.

pub const LICENSE_BANNER: &str = "\
/*  This header was auto-generated by ucd-block-gen from a Unicode
 *  Character Database XML export. Do not edit it by hand; regenerate
 *  it from the desired UCD version instead.
 */";

pub const HEADER_GUARD: &str = "UNICODE_BLOCKS_HPP";

pub const NAMESPACE: &str = "unicode";

pub const DEFAULT_FILENAME: &str = "unicode_blocks.h";
