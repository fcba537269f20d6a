/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt::Display;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError
{
    #[error("placeholder {index} needs {} argument(s), only {available} available", .index + 1)]
    Arity { index: usize, available: usize },

    #[error("cannot mix automatic and manual field numbering")]
    MixedNumbering,

    #[error("invalid field name {0:?}, only positional fields are supported")]
    InvalidField(String),

    #[error("unbalanced brace at byte {0}")]
    UnbalancedBrace(usize),
}

#[derive(Clone, Copy, PartialEq)]
enum Numbering
{
    Unknown,
    Auto,
    Manual,
}

/// Substitutes `{}` and `{N}` fields with `args`. `{{` and `}}` produce literal braces.
///
/// Unused arguments are ignored; a field past the end of `args` is an error.
pub fn format_positional<T>(template: &str, args: &[T]) -> Result<String, TemplateError>
    where T: Display
{
    let mut result = String::with_capacity(template.len());
    let mut numbering = Numbering::Unknown;
    let mut next_auto = 0;
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next()
    {
        match c
        {
            '{' =>
            {
                if let Some(&(_, '{')) = chars.peek()
                {
                    chars.next();
                    result.push('{');
                    continue;
                }

                let mut field = String::new();
                let mut closed = false;

                for (_, c) in &mut chars
                {
                    if c == '}' {
                        closed = true;
                        break; }

                    if c == '{' {
                        return Err(TemplateError::UnbalancedBrace(pos)); }

                    field.push(c);
                }

                if !closed {
                    return Err(TemplateError::UnbalancedBrace(pos)); }

                let index = if field.is_empty()
                {
                    if numbering == Numbering::Manual {
                        return Err(TemplateError::MixedNumbering); }

                    numbering = Numbering::Auto;
                    next_auto += 1;
                    next_auto - 1
                }
                else
                {
                    let index = field.parse::<usize>()
                        .map_err(|_| TemplateError::InvalidField(field.clone()))?;

                    if numbering == Numbering::Auto {
                        return Err(TemplateError::MixedNumbering); }

                    numbering = Numbering::Manual;
                    index
                };

                match args.get(index)
                {
                    Some(arg) => result.push_str(&arg.to_string()),
                    None => return Err(TemplateError::Arity { index: index, available: args.len() }),
                }
            }

            '}' =>
            {
                match chars.next()
                {
                    Some((_, '}')) => result.push('}'),
                    _ => return Err(TemplateError::UnbalancedBrace(pos)),
                }
            }

            c => result.push(c),
        }
    }

    Ok(result)
}
