use clap::ArgMatches;

use crate::hotp::Algorithm;
use crate::totp::TotpConfig;

pub mod generate;
pub mod get;
pub mod validate;
pub mod watch;

pub enum CommandType {
    Generate,
    Get,
    Validate,
    Watch,
}

impl CommandType {
    pub fn as_str(&self) -> &str {
        match self {
            CommandType::Generate => "generate",
            CommandType::Get => "get",
            CommandType::Validate => "validate",
            CommandType::Watch => "watch",
        }
    }
}

// Read the engine options shared by get, validate and watch, falling back
// to the standard defaults for anything not given.
pub fn config_from_args(args: &ArgMatches) -> Result<TotpConfig, String> {
    let mut config = TotpConfig::default();

    if let Some(step) = args.value_of("step") {
        config.time_step = step
            .parse::<u64>()
            .map_err(|err| format!("Unable to parse step: {}", err))?;
    }
    if let Some(digits) = args.value_of("digits") {
        config.digits = digits
            .parse::<u32>()
            .map_err(|err| format!("Unable to parse digits: {}", err))?;
    }
    if let Some(algorithm) = args.value_of("algorithm") {
        config.algorithm = algorithm.parse::<Algorithm>()?;
    }

    Ok(config)
}
