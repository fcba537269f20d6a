/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use super::entry::EntryLine;
use super::template::{self, TemplateError};
use super::util;

#[derive(Error, Debug)]
pub enum AnnotateError
{
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("cannot format description for line {line}")]
    Template
    {
        line: usize,
        #[source]
        source: TemplateError,
    },

    #[error("cannot replace target file")]
    Persist(#[from] tempfile::PersistError),
}

/// What to look for and what to write above it.
#[derive(Debug)]
pub struct Annotation
{
    pub tag: String,
    pub mnemonic: String,
    pub description: String,
    pub reg_count: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct AnnotateSummary
{
    pub lines: usize,
    pub annotated: usize,
}

impl Annotation
{
    pub fn new(opcode: &str, description: &str, reg_count: usize) -> Self
    {
        Self
        {
            tag: util::capitalize(opcode),
            mnemonic: opcode.to_uppercase(),
            description: description.to_string(),
            reg_count: reg_count,
        }
    }

    /// Doc comment for `entry`, without line terminator.
    pub fn comment_for(&self, entry: &EntryLine) -> Result<String, TemplateError>
    {
        let regs: Vec<String> = entry.regs.iter().map(|reg| reg.to_string()).collect();
        let desc = template::format_positional(&self.description, &regs)?;

        let operands = if regs.is_empty() {
            String::new()
        } else {
            format!(" {}", regs.join(", "))
        };

        Ok(format!("{}/// `{}{}`: {}", entry.indent, self.mnemonic, operands, desc))
    }

    /// Returns `text` with a comment line inserted above every matching entry line. Other lines,
    /// line terminators included, are copied as is.
    pub fn annotate_text(&self, text: &str) -> Result<(String, AnnotateSummary), AnnotateError>
    {
        let mut result = String::with_capacity(text.len());
        let mut summary = AnnotateSummary::default();

        for (i, line) in text.split_inclusive('\n').enumerate()
        {
            summary.lines += 1;

            if let Some(entry) = EntryLine::parse(line, &self.tag, self.reg_count)
            {
                debug!("line {}: {:?}", i + 1, line.trim_end());
                debug!("tag={}, regs={:?}, val={:#04x}", entry.tag, entry.regs, entry.value);

                let comment = self.comment_for(&entry)
                    .map_err(|source| AnnotateError::Template { line: i + 1, source: source })?;

                debug!("desc={:?}", comment);

                result.push_str(&comment);
                result.push_str(if line.ends_with("\r\n") { "\r\n" } else { "\n" });
                summary.annotated += 1;
            }

            result.push_str(line);
        }

        Ok((result, summary))
    }
}

/// Annotates the file at `path` in place.
///
/// The new content is written to a temporary file next to `path` and renamed over it, so the
/// target is left untouched when any line fails to format.
pub fn annotate_file(path: &Path, annotation: &Annotation) -> Result<AnnotateSummary, AnnotateError>
{
    let text = fs::read_to_string(path)?;
    let (annotated, summary) = annotation.annotate_text(&text)?;

    let dir = match path.parent()
    {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(annotated.as_bytes())?;
    tmp.as_file().set_permissions(fs::metadata(path)?.permissions())?;
    tmp.persist(path)?;

    info!("{}: annotated {} of {} lines", path.display(), summary.annotated, summary.lines);

    Ok(summary)
}

#[cfg(test)]
mod tests
{
    use super::*;

    const ENUM_TEXT: &str = "\
pub enum Opcode {
    LdBB = 0x40,
    LdBC = 0x41,
    LdBHL = 0x46,
    LdHLB = 0x70,
    Halt = 0x76,
    IncB = 0x04,
}
";

    #[test]
    fn derives_tag_and_mnemonic()
    {
        let annotation = Annotation::new("lD", "", 1);

        assert_eq!(annotation.tag, "Ld");
        assert_eq!(annotation.mnemonic, "LD");
    }

    #[test]
    fn inserts_comment_before_each_match()
    {
        let annotation = Annotation::new("ld", "Load {1} into {0}", 2);
        let (text, summary) = annotation.annotate_text(ENUM_TEXT).unwrap();

        assert_eq!(summary, AnnotateSummary { lines: 8, annotated: 4 });
        assert_eq!(text, "\
pub enum Opcode {
    /// `LD B, B`: Load B into B
    LdBB = 0x40,
    /// `LD B, C`: Load C into B
    LdBC = 0x41,
    /// `LD B, (HL)`: Load (HL) into B
    LdBHL = 0x46,
    /// `LD (HL), B`: Load B into (HL)
    LdHLB = 0x70,
    Halt = 0x76,
    IncB = 0x04,
}
");
    }

    #[test]
    fn zero_registers_matches_bare_tag()
    {
        let annotation = Annotation::new("halt", "Stop until interrupt", 0);
        let (text, summary) = annotation.annotate_text(ENUM_TEXT).unwrap();

        assert_eq!(summary.annotated, 1);
        assert!(text.contains("    /// `HALT`: Stop until interrupt\n    Halt = 0x76,\n"));
    }

    #[test]
    fn keeps_crlf_and_missing_final_newline()
    {
        let annotation = Annotation::new("inc", "Increment {}", 1);
        let (text, _) = annotation.annotate_text("    IncB = 0x04,\r\n    IncC = 0x0c,").unwrap();

        assert_eq!(text, "    /// `INC B`: Increment B\r\n    IncB = 0x04,\r\n    /// `INC C`: Increment C\n    IncC = 0x0c,");
    }

    #[test]
    fn template_error_reports_line()
    {
        let annotation = Annotation::new("inc", "{} {}", 1);

        match annotation.annotate_text(ENUM_TEXT)
        {
            Err(AnnotateError::Template { line, source }) =>
            {
                assert_eq!(line, 7);
                assert_eq!(source, TemplateError::Arity { index: 1, available: 1 });
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn no_match_leaves_text_unchanged()
    {
        let annotation = Annotation::new("xor", "Xor {}", 1);
        let (text, summary) = annotation.annotate_text(ENUM_TEXT).unwrap();

        assert_eq!(text, ENUM_TEXT);
        assert_eq!(summary.annotated, 0);
    }
}
