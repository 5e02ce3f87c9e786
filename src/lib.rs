pub mod cmd;
pub mod error;
pub mod hotp;
pub mod totp;
pub mod utils;
pub mod writer;

#[cfg(test)]
pub mod tests;
