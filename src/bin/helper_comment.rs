/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;
use structopt::StructOpt;

use opcode_helper::annotate::{self, Annotation};

/// Puts a doc comment above every opcode enum entry matching OPCODE and the register count.
#[derive(StructOpt)]
#[structopt(name = "helper-comment")]
struct Opt {
    /// file to operate substitution
    #[structopt(name = "file", parse(from_os_str))]
    file: PathBuf,

    /// opcode name
    #[structopt(name = "opcode")]
    opcode: String,

    /// opcode description, `{}` or `{N}` is replaced with the registers
    #[structopt(name = "description")]
    description: String,

    /// number of regs to catch
    #[structopt(short = "r", long, default_value = "1")]
    num_regs: usize,

    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn main() -> Result<()> {
    let opt = Opt::from_args();

    opcode_helper::init_logger(opt.verbose);

    debug!(
        "file={}, opcode={}, description={}, reg_count={}",
        opt.file.display(),
        opt.opcode,
        opt.description,
        opt.num_regs
    );

    let annotation = Annotation::new(&opt.opcode, &opt.description, opt.num_regs);

    annotate::annotate_file(&opt.file, &annotation)
        .with_context(|| format!("cannot annotate {}", opt.file.display()))?;

    Ok(())
}
