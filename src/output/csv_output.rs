//! Flat CSV output
//!
//! One record per crawled page: the top-level entry first, followed by its
//! descendants depth-first in tree order.

use crate::output::traits::{ensure_parent_dir, OutputHandler, OutputResult};
use crate::tree::{ContentRecord, PageNode, ResultMapping};
use serde::Serialize;
use std::path::Path;

/// A single row of the CSV file
#[derive(Debug, Serialize)]
struct CsvRecord<'a> {
    section: &'a str,
    subsection: &'a str,
    url: &'a str,
    data: String,
}

/// Writes one `section,subsection,url,data` record per crawled page
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvOutput;

impl OutputHandler for CsvOutput {
    fn format_name(&self) -> &'static str {
        "csv"
    }

    fn write(&self, results: &ResultMapping, path: &Path) -> OutputResult<()> {
        ensure_parent_dir(path)?;

        let mut writer = csv::Writer::from_path(path)?;

        // The header comes from the record fields; write it explicitly so an
        // empty result still produces a well-formed file
        if results.is_empty() {
            writer.write_record(["section", "subsection", "url", "data"])?;
        }

        for entry in results.iter() {
            writer.serialize(CsvRecord {
                section: &entry.section,
                subsection: &entry.name,
                url: &entry.url,
                data: page_text(&entry.body.content),
            })?;
            write_descendants(&mut writer, &entry.section, entry.body.children())?;
        }

        writer.flush()?;
        Ok(())
    }
}

fn write_descendants<W: std::io::Write>(
    writer: &mut csv::Writer<W>,
    section: &str,
    nodes: &[PageNode],
) -> OutputResult<()> {
    for node in nodes {
        writer.serialize(CsvRecord {
            section,
            subsection: &node.name,
            url: &node.url,
            data: page_text(&node.body.content),
        })?;
        write_descendants(writer, section, node.body.children())?;
    }
    Ok(())
}

/// Paragraph texts followed by code blocks, one per line
fn page_text(content: &ContentRecord) -> String {
    content
        .texts
        .iter()
        .chain(&content.code_blocks)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n")
}
