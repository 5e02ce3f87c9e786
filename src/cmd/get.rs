use clap::{arg, command, ArgMatches, Command};

use super::{config_from_args, CommandType};
use crate::totp::{GetTime, Totp};
use crate::utils::is_base32_key;
use crate::writer::OutErr;

pub fn subcommand() -> Command<'static> {
    command!(CommandType::Get.as_str())
        .about("Print the current one-time password")
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

pub fn run_get<W>(get_args: &ArgMatches, clock: &impl GetTime, writer: &mut W)
where
    W: OutErr,
{
    let key = match get_args.value_of("key") {
        Some(key) => key,
        _ => {
            writer.write_err("Secret key is required\n");
            return;
        }
    };

    let config = match config_from_args(get_args) {
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

    writer.write(&format!("{}\n", engine.current_code_with(clock)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd::CommandType::Get;
    use crate::tests::constants::*;
    use crate::tests::mocks::*;
    use crate::tests::utils::get_cmd_args;

    #[test]
    fn prints_the_rfc_reference_code() {
        let mut writer = MockOtpWriter::new();

        // T = 59s with the RFC seed and 8 digits is the published 94287082.
        let arg_vec = vec![
            "totp",
            Get.as_str(),
            "-k",
            RFC_SECRET_BASE32,
            "-n",
            "8",
        ];
        let get_args = get_cmd_args(Get.as_str(), subcommand(), &arg_vec).unwrap();

        run_get(&get_args, &MockClock::at(59), &mut writer);

        assert_eq!(String::from_utf8(writer.out).unwrap(), "94287082\n");
        assert_eq!(writer.err, Vec::new());
    }

    #[test]
    fn prints_a_six_digit_code_by_default() {
        let mut writer = MockOtpWriter::new();

        let arg_vec = vec!["totp", Get.as_str(), "-k", DEMO_KEY];
        let get_args = get_cmd_args(Get.as_str(), subcommand(), &arg_vec).unwrap();

        run_get(&get_args, &MockClock::new(), &mut writer);

        let output = String::from_utf8(writer.out).unwrap();
        let code = output.trim_end();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(writer.err, Vec::new());
    }

    #[test]
    fn validates_key_encoding() {
        let arg_vec = vec!["totp", Get.as_str(), "-k", "invalid-key!"];
        let get_args = get_cmd_args(Get.as_str(), subcommand(), &arg_vec);

        assert!(get_args.is_err());

        let err = get_args.unwrap_err();

        assert!(
            err.to_string()
                .contains("the key is not a valid base32 encoding"),
            "{}",
            err
        );
    }

    #[test]
    fn reports_an_unsupported_digit_count() {
        let mut writer = MockOtpWriter::new();

        let arg_vec = vec!["totp", Get.as_str(), "-k", DEMO_KEY, "-n", "10"];
        let get_args = get_cmd_args(Get.as_str(), subcommand(), &arg_vec).unwrap();

        run_get(&get_args, &MockClock::new(), &mut writer);

        assert_eq!(writer.out, Vec::new());
        assert_eq!(
            String::from_utf8(writer.err).unwrap(),
            "digit count must be between 1 and 9\n"
        );
    }
}
