//! Pretty-printed JSON tree output

use crate::output::traits::{ensure_parent_dir, OutputHandler, OutputResult};
use crate::tree::ResultMapping;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Writes the result mapping as a nested JSON object, indented four spaces
///
/// Shape: `{ "<link text>": { "name", "children": { "texts", "codeBlocks",
/// "children"? } } }`, with each child node as `{ "name", "data": {...} }`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonOutput;

impl OutputHandler for JsonOutput {
    fn format_name(&self) -> &'static str {
        "json"
    }

    fn write(&self, results: &ResultMapping, path: &Path) -> OutputResult<()> {
        ensure_parent_dir(path)?;

        let mut writer = BufWriter::new(File::create(path)?);
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        results.serialize(&mut serializer)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        Ok(())
    }
}
