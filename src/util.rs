/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

/// First character upper-cased, the rest lower-cased ("lD" -> "Ld").
pub fn capitalize(s: &str) -> String
{
    let mut chars = s.chars();

    match chars.next()
    {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}

/// Title-cases every word, where a word is a run of letters. Digits and punctuation start a new
/// word, so "ff00+8bit" becomes "Ff00+8Bit".
pub fn title_case(s: &str) -> String
{
    let mut result = String::with_capacity(s.len());
    let mut prev_cased = false;

    for c in s.chars()
    {
        if c.is_alphabetic()
        {
            if prev_cased {
                result.extend(c.to_lowercase()); }
            else {
                result.extend(c.to_uppercase()); }

            prev_cased = true;
        }
        else
        {
            result.push(c);
            prev_cased = false;
        }
    }

    result
}

pub fn strip_whitespace(s: &str) -> String
{
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn capitalize_lowers_tail()
    {
        assert_eq!(capitalize("ld"), "Ld");
        assert_eq!(capitalize("LD"), "Ld");
        assert_eq!(capitalize("rlcA"), "Rlca");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn title_case_splits_on_non_letters()
    {
        assert_eq!(title_case("LD  HL  A"), "Ld  Hl  A");
        assert_eq!(title_case("ff00 8bit"), "Ff00 8Bit");
        assert_eq!(title_case("jr nz 8"), "Jr Nz 8");
    }

    #[test]
    fn strip_whitespace_removes_all_kinds()
    {
        assert_eq!(strip_whitespace(" Ld \tHl\nA "), "LdHlA");
    }
}
