use std::time::SystemTime;

use crate::error::OtpError;
use crate::hotp::{get_hotp, Algorithm};
use crate::utils::decode_secret;

// TOTP https://datatracker.ietf.org/doc/html/rfc6238

// uses HOTP with a time-based moving factor derived from system time

const DEFAULT_TIME_STEP: u64 = 30;
const DEFAULT_DIGITS: u32 = 6;

// 10^9 still fits the truncated 31-bit value; anything wider would stop
// masking and change the code semantics.
const MAX_DIGITS: u32 = 9;

/// Source of "now" for the engine, so tests can pin the clock.
pub trait GetTime {
    fn get_now(&self) -> SystemTime;
}

/// System clock.
pub struct Clock {}

impl Clock {
    pub fn new() -> Self {
        Clock {}
    }
}

impl GetTime for Clock {
    fn get_now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Engine configuration. The defaults are the interoperable standard ones:
/// a 30 second time step, 6 digits, HMAC-SHA1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TotpConfig {
    pub time_step: u64,
    pub digits: u32,
    pub algorithm: Algorithm,
}

impl Default for TotpConfig {
    fn default() -> Self {
        TotpConfig {
            time_step: DEFAULT_TIME_STEP,
            digits: DEFAULT_DIGITS,
            algorithm: Algorithm::Sha1,
        }
    }
}

/// Time-based OTP engine: a decoded secret plus fixed configuration.
///
/// Holds no mutable state, so one instance can generate and verify codes
/// from any number of threads.
pub struct Totp {
    secret: Vec<u8>,
    time_step: u64,
    digits: u32,
    algorithm: Algorithm,
}

impl Totp {
    /// Build an engine with the default configuration.
    pub fn new(secret: &str) -> Result<Totp, OtpError> {
        Totp::with_config(secret, TotpConfig::default())
    }

    /// Build an engine from a base32 secret and an explicit configuration.
    /// Fails on a malformed secret or out-of-range configuration; no
    /// partially initialized engine is ever returned.
    pub fn with_config(secret: &str, config: TotpConfig) -> Result<Totp, OtpError> {
        if config.digits < 1 || config.digits > MAX_DIGITS {
            return Err(OtpError::UnsupportedDigits);
        }
        if config.time_step == 0 {
            return Err(OtpError::InvalidTimeStep);
        }

        let secret = decode_secret(secret)?;

        Ok(Totp {
            secret,
            time_step: config.time_step,
            digits: config.digits,
            algorithm: config.algorithm,
        })
    }

    /// Number of whole time steps since the unix epoch, per the given clock.
    pub fn moving_factor(&self, clock: &impl GetTime) -> u64 {
        unix_seconds(clock) / self.time_step
    }

    /// The code for one moving factor, zero-padded to the configured width.
    pub fn code_at(&self, moving_factor: u64) -> String {
        let code = get_hotp(&self.secret, moving_factor, self.digits, self.algorithm);

        format!("{:0width$}", code, width = self.digits as usize)
    }

    /// The code for the current system time.
    pub fn current_code(&self) -> String {
        self.current_code_with(&Clock::new())
    }

    pub fn current_code_with(&self, clock: &impl GetTime) -> String {
        self.code_at(self.moving_factor(clock))
    }

    /// Check a candidate code against the current time window, accepting
    /// `drift` adjacent steps on either side. Exact string comparison, so
    /// leading zeros are significant.
    pub fn verify(&self, candidate: &str, drift: u64) -> bool {
        self.verify_with(candidate, drift, &Clock::new())
    }

    pub fn verify_with(&self, candidate: &str, drift: u64, clock: &impl GetTime) -> bool {
        let current = self.moving_factor(clock);

        // The window wraps modulo 2^64 like the moving factor itself.
        let start = current.wrapping_sub(drift);
        for offset in 0..=drift.saturating_mul(2) {
            if self.code_at(start.wrapping_add(offset)) == candidate {
                return true;
            }
        }

        false
    }

    /// Seconds left in the current time window, in `1..=time_step`.
    pub fn seconds_until_refresh(&self, clock: &impl GetTime) -> u64 {
        self.time_step - (unix_seconds(clock) % self.time_step)
    }
}

fn unix_seconds(clock: &impl GetTime) -> u64 {
    let time = clock.get_now().duration_since(SystemTime::UNIX_EPOCH);

    // A clock before the unix epoch is unrecoverable here.
    time.expect("system clock is set before the unix epoch")
        .as_secs()
}
