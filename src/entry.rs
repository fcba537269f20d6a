/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use super::regs::prelude::*;

pub const ENTRY_INDENT: &str = "    ";
const VALUE_SEPARATOR: &str = " = 0x";

/// A matched enum entry line, `    <Tag><Regs> = 0x<hh>,`
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct EntryLine<'a>
{
    pub indent: &'a str,
    pub tag: &'a str,
    pub regs: Vec<Reg>,
    pub value: u8,
}

impl<'a> EntryLine<'a>
{
    /// Matches `line` against the entry grammar for `tag` followed by exactly `reg_count`
    /// register tokens. Text after the trailing comma is not inspected.
    pub fn parse(line: &'a str, tag: &'a str, reg_count: usize) -> Option<Self>
    {
        let rest = line.strip_prefix(ENTRY_INDENT)?;
        let rest = rest.strip_prefix(tag)?;

        let sep = rest.find(VALUE_SEPARATOR)?;
        let regs = split_regs(&rest[..sep], reg_count)?;

        let rest = &rest[sep + VALUE_SEPARATOR.len()..];
        let digits = rest.get(..2)?;

        if !digits.bytes().all(is_lower_hex) || !rest[2..].starts_with(',') {
            return None; }

        let value = u8::from_str_radix(digits, 16).ok()?;

        Some(Self
        {
            indent: ENTRY_INDENT,
            tag: tag,
            regs: regs,
            value: value,
        })
    }
}

fn is_lower_hex(b: u8) -> bool
{
    matches!(b, b'0'..=b'9' | b'a'..=b'f')
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn matches_register_entry()
    {
        let entry = EntryLine::parse("    LdBC = 0x41,", "Ld", 2).unwrap();

        assert_eq!(entry.tag, "Ld");
        assert_eq!(entry.regs, vec![Reg::B, Reg::C]);
        assert_eq!(entry.value, 0x41);
    }

    #[test]
    fn matches_indirect_entry()
    {
        let entry = EntryLine::parse("    LdHLB = 0x70,", "Ld", 2).unwrap();
        assert_eq!(entry.regs, vec![Reg::HL, Reg::B]);
    }

    #[test]
    fn matches_without_operands()
    {
        let entry = EntryLine::parse("    Nop = 0x00,", "Nop", 0).unwrap();

        assert!(entry.regs.is_empty());
        assert_eq!(entry.value, 0);
    }

    #[test]
    fn ignores_trailing_text()
    {
        assert!(EntryLine::parse("    IncA = 0x3c, // inc\n", "Inc", 1).is_some());
    }

    #[test]
    fn rejects_wrong_register_count()
    {
        assert_eq!(EntryLine::parse("    LdBC = 0x41,", "Ld", 1), None);
        assert_eq!(EntryLine::parse("    LdB = 0x06,", "Ld", 2), None);
    }

    #[test]
    fn rejects_other_layouts()
    {
        // indentation
        assert_eq!(EntryLine::parse("  LdB = 0x06,", "Ld", 1), None);
        assert_eq!(EntryLine::parse("     LdB = 0x06,", "Ld", 1), None);
        // tag case
        assert_eq!(EntryLine::parse("    LDB = 0x06,", "Ld", 1), None);
        // value
        assert_eq!(EntryLine::parse("    LdB = 0x0A,", "Ld", 1), None);
        assert_eq!(EntryLine::parse("    LdB = 0x6,", "Ld", 1), None);
        assert_eq!(EntryLine::parse("    LdB = 0x06", "Ld", 1), None);
        assert_eq!(EntryLine::parse("    LdB = 0x066,", "Ld", 1), None);
        // operand
        assert_eq!(EntryLine::parse("    LdSP = 0x06,", "Ld", 1), None);
    }
}
