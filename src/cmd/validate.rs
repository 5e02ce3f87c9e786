use clap::{arg, command, ArgMatches, Command};

use super::{config_from_args, CommandType};
use crate::totp::{GetTime, Totp};
use crate::utils::is_base32_key;
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Validate.as_str())
        .about("Validate a one-time password")
        .args(&[
            arg!(-k --key <KEY> "Base32 secret key")
                .required(true)
                .validator(is_base32_key),
            arg!(-t --token <TOKEN> "One-time password to validate").required(true),
            arg!(-w --drift <STEPS> "Accepted clock drift in whole time steps (default 0)")
                .required(false),
            arg!(-s --step <SECONDS> "Time step in seconds (default 30)").required(false),
            arg!(-n --digits <COUNT> "Number of code digits (default 6)").required(false),
            arg!(-a --algorithm <ALGORITHM> "HMAC digest: sha1, sha256 or sha512")
                .required(false),
        ])
}

pub fn run_validate<W>(validate_args: &ArgMatches, clock: &impl GetTime, writer: &mut W)
where
    W: OutErr,
{
    let (key, token) = match (
        validate_args.value_of("key"),
        validate_args.value_of("token"),
    ) {
        (Some(key), Some(token)) => (key, token),
        _ => {
            writer.write_err("Secret key and token are required\n");
            return;
        }
    };

    let drift = match validate_args.value_of("drift") {
        Some(drift) => match drift.parse::<u64>() {
            Ok(drift) => drift,
            Err(err) => {
                writer.write_err(&format!("Unable to parse drift: {}\n", err));
                return;
            }
        },
        None => 0,
    };

    let config = match config_from_args(validate_args) {
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

    // The token is compared as a string: leading zeros matter, and a
    // rejection reveals nothing about which window was close.
    if engine.verify_with(token, drift, clock) {
        writer.write(&format!("{} valid\n", token));
    } else {
        writer.write_err("Invalid code\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::CommandType::Validate;
    use crate::tests::constants::*;
    use crate::tests::mocks::*;
    use crate::tests::utils::get_cmd_args;

    fn validate_token(token: &str, drift_args: &[&str], now_secs: u64) -> MockOtpWriter {
        let mut writer = MockOtpWriter::new();

        let mut arg_vec = vec![
            "totp",
            Validate.as_str(),
            "-k",
            RFC_SECRET_BASE32,
            "-n",
            "8",
            "-t",
            token,
        ];
        arg_vec.extend_from_slice(drift_args);
        let validate_args = get_cmd_args(Validate.as_str(), subcommand(), &arg_vec).unwrap();

        run_validate(&validate_args, &MockClock::at(now_secs), &mut writer);
        writer
    }

    #[test]
    fn accepts_the_current_code() {
        let writer = validate_token("94287082", &[], 59);

        assert_eq!(String::from_utf8(writer.out).unwrap(), "94287082 valid\n");
        assert_eq!(writer.err, Vec::new());
    }

    #[test]
    fn rejects_a_wrong_code() {
        let writer = validate_token("00000000", &[], 59);

        assert_eq!(writer.out, Vec::new());
        assert_eq!(String::from_utf8(writer.err).unwrap(), "Invalid code\n");
    }

    #[test]
    fn accepts_the_previous_window_inside_the_drift() {
        // 94287082 belongs to T = 59s; at T = 61s it is one step stale.
        let writer = validate_token("94287082", &["-w", "1"], 61);

        assert_eq!(String::from_utf8(writer.out).unwrap(), "94287082 valid\n");
        assert_eq!(writer.err, Vec::new());
    }

    #[test]
    fn rejects_a_stale_code_without_drift() {
        let writer = validate_token("94287082", &[], 61);

        assert_eq!(writer.out, Vec::new());
        assert_eq!(String::from_utf8(writer.err).unwrap(), "Invalid code\n");
    }

    #[test]
    fn rejects_an_unparseable_drift() {
        let writer = validate_token("94287082", &["-w", "lots"], 59);

        assert_eq!(writer.out, Vec::new());
        assert!(String::from_utf8(writer.err)
            .unwrap()
            .starts_with("Unable to parse drift"));
    }

    #[test]
    fn requires_a_token() {
        let arg_vec = vec!["totp", Validate.as_str(), "-k", DEMO_KEY];
        let validate_args = get_cmd_args(Validate.as_str(), subcommand(), &arg_vec);

        assert!(validate_args.is_err());
    }
}
