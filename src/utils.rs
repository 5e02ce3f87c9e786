use data_encoding::BASE32_NOPAD;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::OtpError;

// Generate a 20 byte random base32 string
pub fn generate_secret() -> String {
    let mut dest = [0u8; 20];
    OsRng.fill_bytes(&mut dest);
    BASE32_NOPAD.encode(&dest)
}

/// Decode a base32 secret into raw key bytes. Decoding is case-insensitive
/// and tolerates trailing `=` padding; any character outside the RFC 4648
/// alphabet fails.
pub fn decode_secret(secret: &str) -> Result<Vec<u8>, OtpError> {
    let normalized = secret.to_uppercase();
    let normalized = normalized.trim_end_matches('=');

    BASE32_NOPAD
        .decode(normalized.as_bytes())
        .map_err(|_| OtpError::InvalidSecret)
}

// Validate key provided in arguments is a valid base32 encoding
pub fn is_base32_key(value: &str) -> Result<(), String> {
    match decode_secret(value) {
        Ok(_) => Ok(()),
        Err(_) => Err(String::from("the key is not a valid base32 encoding")),
    }
}
