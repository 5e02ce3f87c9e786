use std::thread;
use std::time::Duration;

use clap::{arg, command, ArgMatches, Command};

use super::{config_from_args, CommandType};
use crate::totp::{GetTime, Totp};
use crate::utils::is_base32_key;
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Watch.as_str())
        .about("Print the one-time password every time step, like a hardware token")
        .args(&[
            arg!(-k --key <KEY> "Base32 secret key")
                .required(true)
                .validator(is_base32_key),
            arg!(-s --step <SECONDS> "Time step in seconds (default 30)").required(false),
            arg!(-n --digits <COUNT> "Number of code digits (default 6)").required(false),
            arg!(-a --algorithm <ALGORITHM> "HMAC digest: sha1, sha256 or sha512")
                .required(false),
        ])
}

pub fn run_watch<W>(watch_args: &ArgMatches, clock: &impl GetTime, writer: &mut W)
where
    W: OutErr,
{
    let key = match watch_args.value_of("key") {
        Some(key) => key,
        _ => {
            writer.write_err("Secret key is required\n");
            return;
        }
    };

    let config = match config_from_args(watch_args) {
        Ok(config) => config,
        Err(err) => {
            writer.write_err(&format!("{}\n", err));
            return;
        }
    };

    let engine = match Totp::with_config(key, config) {
        Ok(engine) => engine,
        Err(err) => {
            writer.write_err(&format!("{}\n", err));
            return;
        }
    };

    // Print a code per window until interrupted, sleeping across the
    // boundary rather than polling.
    loop {
        writer.write(&format!("{}\n", engine.current_code_with(clock)));
        thread::sleep(Duration::from_secs(engine.seconds_until_refresh(clock)));
    }
}
