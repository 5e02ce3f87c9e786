use clap::command;

use totp::cmd::{generate, get, validate, watch, CommandType};
use totp::totp::Clock;
use totp::writer::OtpWriter;

fn main() {
    let matches = command!()
        .about("Generate and verify time-based one-time passwords (RFC 6238)")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommands(vec![
            get::subcommand(),
            validate::subcommand(),
            watch::subcommand(),
            generate::subcommand(),
        ])
        .get_matches();

    let clock = Clock::new();
    let mut writer = OtpWriter::new();

    match matches.subcommand() {
        Some((cmd, cmd_args)) if cmd == CommandType::Get.as_str() => {
            get::run_get(cmd_args, &clock, &mut writer);
        }
        Some((cmd, cmd_args)) if cmd == CommandType::Validate.as_str() => {
            validate::run_validate(cmd_args, &clock, &mut writer);
        }
        Some((cmd, cmd_args)) if cmd == CommandType::Watch.as_str() => {
            watch::run_watch(cmd_args, &clock, &mut writer);
        }
        Some((cmd, cmd_args)) if cmd == CommandType::Generate.as_str() => {
            generate::run_generate(cmd_args, &mut writer);
        }
        _ => unreachable!("subcommand is required"),
    }
}
