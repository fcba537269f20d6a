/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::path::PathBuf;
use structopt::StructOpt;

use opcode_helper::opcode_db::{Mode, OpcodeDb};
use opcode_helper::skel;

/// Prints skeleton opcode enum entries from a json opcode database.
#[derive(StructOpt)]
#[structopt(name = "helper-opcode")]
struct Opt {
    /// json opcode database
    #[structopt(long, parse(from_os_str), default_value = "opcode_db.json")]
    db: PathBuf,

    /// beginning index
    #[structopt(short, long, default_value = "0")]
    begin: u8,

    /// ending index, inclusive
    #[structopt(short, long, default_value = "255")]
    end: u8,

    /// opcode list to use
    #[structopt(long, default_value = "unprefixed", possible_values = Mode::VARIANTS)]
    mode: Mode,

    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    opcode_helper::init_logger(opt.verbose);

    info!(
        "db={}, begin={}, end={}, mode={}",
        opt.db.display(),
        opt.begin,
        opt.end,
        opt.mode
    );

    let db = OpcodeDb::load(&opt.db)
        .with_context(|| format!("cannot load opcode database {}", opt.db.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    skel::generate(&db, opt.mode, opt.begin, opt.end, &mut out)?;
    out.flush()?;

    Ok(())
}
