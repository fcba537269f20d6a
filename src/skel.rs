/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::io::Write;

use log::{debug, trace};
use thiserror::Error;

use super::opcode_db::{Mode, OpcodeDb, OpcodeRecord};
use super::util;

#[derive(Error, Debug)]
pub enum SkelError
{
    #[error("missing list type {mode} in database: no {key:?} key")]
    MissingMode { mode: Mode, key: &'static str },

    #[error("begin index {begin:#04x} is past end index {end:#04x}")]
    InvalidRange { begin: u8, end: u8 },

    #[error("index {index:#04x} out of range, {mode} table has {len} entries")]
    IndexOutOfRange { mode: Mode, index: u8, len: usize },

    #[error("IO error")]
    Io(#[from] std::io::Error),
}

/// Enum identifier for an opcode name, e.g. "LD (HL+),A" -> "LdHlA".
pub fn derive_tag(name: &str) -> String
{
    let mut stripped = String::with_capacity(name.len());
    let mut rest = name;

    // "[iu](16|8)" -> digits only
    while let Some(c) = rest.chars().next()
    {
        let tail = &rest[c.len_utf8()..];

        if (c == 'i' || c == 'u') && (tail.starts_with("16") || tail.starts_with('8')) {
            rest = tail;
            continue; }

        stripped.push(match c {
            '(' | ')' | '+' | ',' => ' ',
            c => c,
        });
        rest = tail;
    }

    util::strip_whitespace(&util::title_case(&stripped))
}

/// Machine cycle annotation, "<n>m" or "<no branch>-<branch>m".
pub fn timing_label(t_cycles_branch: u32, t_cycles_no_branch: u32) -> String
{
    if t_cycles_branch == t_cycles_no_branch {
        format!("{}m", t_cycles_branch / 4)
    } else {
        format!("{}-{}m", t_cycles_no_branch / 4, t_cycles_branch / 4)
    }
}

pub fn write_entry<W>(out: &mut W, index: u8, record: &OpcodeRecord) -> std::io::Result<()>
    where W: Write
{
    let tag = derive_tag(&record.name);
    let timing = timing_label(record.t_cycles_branch, record.t_cycles_no_branch);

    debug!("name={}, pascal={}, value={:#04x}", record.name, tag, index);

    writeln!(out, "/// `{}`: Foo . {}", record.name, timing)?;
    writeln!(out, "{} = {:#04x},", tag, index)
}

/// Writes skeleton entries for `begin..=end` of the `mode` table. The range is checked before
/// anything is written.
pub fn generate<W>(db: &OpcodeDb, mode: Mode, begin: u8, end: u8, out: &mut W) -> Result<(), SkelError>
    where W: Write
{
    let table = db.table(mode).ok_or(SkelError::MissingMode { mode: mode, key: mode.key() })?;

    debug!("elements_number={}", table.len());

    if begin > end {
        return Err(SkelError::InvalidRange { begin: begin, end: end }); }

    if end as usize >= table.len() {
        return Err(SkelError::IndexOutOfRange { mode: mode, index: end, len: table.len() }); }

    for index in begin..=end
    {
        let record = &table[index as usize];

        if record.is_unused() {
            trace!("skipping unused opcode {:#04x}", index);
            continue; }

        write_entry(out, index, record)?;
    }

    Ok(())
}
