/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

#[derive(Clone, Copy, Hash, PartialEq, Eq, Debug)]
pub enum Reg
{
    A,
    B,
    C,
    D,
    E,
    H,
    L,
    HL,
}

impl Reg
{
    pub fn from_letter(c: u8) -> Option<Self>
    {
        match c
        {
            b'A' => Some(Reg::A),
            b'B' => Some(Reg::B),
            b'C' => Some(Reg::C),
            b'D' => Some(Reg::D),
            b'E' => Some(Reg::E),
            b'H' => Some(Reg::H),
            b'L' => Some(Reg::L),
            _ => None,
        }
    }

    /// Spelling as it appears in an enum identifier.
    pub fn token(&self) -> &'static str
    {
        match self
        {
            Reg::A => "A",
            Reg::B => "B",
            Reg::C => "C",
            Reg::D => "D",
            Reg::E => "E",
            Reg::H => "H",
            Reg::L => "L",
            Reg::HL => "HL",
        }
    }
}

/// Human-readable form, `HL` is the indirect operand `(HL)`.
impl std::fmt::Display for Reg
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Reg::HL => write!(f, "(HL)"),
            reg => write!(f, "{}", reg.token()),
        }
    }
}

/// Splits `span` into exactly `count` register tokens.
///
/// `HL` is tried before `H` at every position, backtracking to the single letter split when the
/// longer choice leaves a remainder that can't be tokenized. `"HL"` with a count of 2 therefore
/// yields `[H, L]`, and with a count of 1 yields `[HL]`.
pub fn split_regs(span: &str, count: usize) -> Option<Vec<Reg>>
{
    let bytes = span.as_bytes();

    // every token is one or two bytes long
    if bytes.len() < count || bytes.len() > count * 2 {
        return None; }

    let mut regs = Vec::with_capacity(count);

    if split_from(bytes, count, &mut regs) {
        Some(regs) }
    else {
        None }
}

fn split_from(bytes: &[u8], count: usize, regs: &mut Vec<Reg>) -> bool
{
    if count == 0 {
        return bytes.is_empty(); }

    if bytes.starts_with(b"HL")
    {
        regs.push(Reg::HL);

        if split_from(&bytes[2..], count - 1, regs) {
            return true; }

        regs.pop();
    }

    match bytes.first().copied().and_then(Reg::from_letter)
    {
        Some(reg) =>
        {
            regs.push(reg);

            if split_from(&bytes[1..], count - 1, regs) {
                return true; }

            regs.pop();
            false
        }

        None => false,
    }
}

pub mod prelude
{
    pub use super::Reg;
    pub use super::split_regs;
}
