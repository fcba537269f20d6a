/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

pub mod annotate;
pub mod entry;
pub mod opcode_db;
pub mod regs;
pub mod skel;
pub mod template;
pub mod util;

/// Logs to stderr at info level, or debug/trace with one/two `-v`. `RUST_LOG` takes precedence.
pub fn init_logger(verbose: u8)
{
    let level = match verbose
    {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
