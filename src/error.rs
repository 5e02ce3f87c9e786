/// Errors surfaced while constructing an OTP engine.
///
/// Code generation and verification themselves cannot fail: a wrong code is
/// a normal `false` from `verify`, not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OtpError {
    #[error("secret is not a valid base32 encoding")]
    InvalidSecret,
    #[error("digit count must be between 1 and 9")]
    UnsupportedDigits,
    #[error("time step must be greater than zero")]
    InvalidTimeStep,
}
