/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

pub const UNUSED_NAME: &str = "UNUSED";

#[derive(Error, Debug)]
pub enum DbError
{
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("malformed opcode database")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OpcodeRecord
{
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "TCyclesBranch")]
    pub t_cycles_branch: u32,

    #[serde(rename = "TCyclesNoBranch")]
    pub t_cycles_no_branch: u32,
}

impl OpcodeRecord
{
    pub fn is_unused(&self) -> bool
    {
        self.name == UNUSED_NAME
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode
{
    Unprefixed,
    Cbprefixed,
}

impl Mode
{
    pub const VARIANTS: &'static [&'static str] = &["unprefixed", "cbprefixed"];

    pub fn name(&self) -> &'static str
    {
        match self
        {
            Mode::Unprefixed => "unprefixed",
            Mode::Cbprefixed => "cbprefixed",
        }
    }

    /// Database key holding this mode's table.
    pub fn key(&self) -> &'static str
    {
        match self
        {
            Mode::Unprefixed => "Unprefixed",
            Mode::Cbprefixed => "Cbprefixed",
        }
    }
}

impl std::fmt::Display for Mode
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.name())
    }
}

#[derive(Error, Debug)]
#[error("unknown mode {0:?}, expected unprefixed or cbprefixed")]
pub struct ParseModeError(String);

impl std::str::FromStr for Mode
{
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s
        {
            "unprefixed" => Ok(Mode::Unprefixed),
            "cbprefixed" => Ok(Mode::Cbprefixed),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

/// Opcode tables keyed by mode. Keys other than the two mode tables are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct OpcodeDb
{
    #[serde(rename = "Unprefixed")]
    unprefixed: Option<Vec<OpcodeRecord>>,

    #[serde(rename = "Cbprefixed")]
    cbprefixed: Option<Vec<OpcodeRecord>>,
}

impl OpcodeDb
{
    pub fn load(path: &Path) -> Result<Self, DbError>
    {
        let mut data = String::new();
        BufReader::new(File::open(path)?).read_to_string(&mut data)?;

        Self::from_json(&data)
    }

    pub fn from_json(data: &str) -> Result<Self, DbError>
    {
        Ok(serde_json::from_str(data)?)
    }

    pub fn table(&self, mode: Mode) -> Option<&[OpcodeRecord]>
    {
        match mode
        {
            Mode::Unprefixed => self.unprefixed.as_deref(),
            Mode::Cbprefixed => self.cbprefixed.as_deref(),
        }
    }
}
