use std::str::FromStr;

use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

// HOTP https://datatracker.ietf.org/doc/html/rfc4226

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

/// Keyed-hash functions supported for the HMAC step. RFC 4226 specifies
/// SHA-1; SHA-256 and SHA-512 are the RFC 6238 extensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Sha1,
    Sha256,
    Sha512,
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sha1" => Ok(Algorithm::Sha1),
            "sha256" => Ok(Algorithm::Sha256),
            "sha512" => Ok(Algorithm::Sha512),
            _ => Err(format!("unsupported algorithm: {}", s)),
        }
    }
}

/// Compute the HOTP value for one counter: HMAC over the 8-byte big-endian
/// counter, dynamic truncation, then reduction mod 10^digits.
pub fn get_hotp(secret: &[u8], counter: u64, digits: u32, algorithm: Algorithm) -> u32 {
    let hmac = make_hmac(secret, counter, algorithm);
    truncate(hmac, digits)
}

// HMAC output length depends on the digest: 20 bytes for SHA-1, 32 for
// SHA-256, 64 for SHA-512.
fn make_hmac(secret: &[u8], counter: u64, algorithm: Algorithm) -> Vec<u8> {
    match algorithm {
        Algorithm::Sha1 => {
            let mut mac = HmacSha1::new_from_slice(secret)
                .expect("Problem with secret, failed to initialize HMAC");
            mac.update(&counter.to_be_bytes());
            mac.finalize().into_bytes().to_vec()
        }
        Algorithm::Sha256 => {
            let mut mac = HmacSha256::new_from_slice(secret)
                .expect("Problem with secret, failed to initialize HMAC");
            mac.update(&counter.to_be_bytes());
            mac.finalize().into_bytes().to_vec()
        }
        Algorithm::Sha512 => {
            let mut mac = HmacSha512::new_from_slice(secret)
                .expect("Problem with secret, failed to initialize HMAC");
            mac.update(&counter.to_be_bytes());
            mac.finalize().into_bytes().to_vec()
        }
    }
}

// reduce to 4 byte string
// then s to num mod 10^Digit
fn truncate(hmac: Vec<u8>, digits: u32) -> u32 {
    let base_code = dynamic_truncation(hmac);

    base_code % u32::pow(10, digits)
}

// DT(String) // String = String[0]...String[19]
// Let OffsetBits be the low-order 4 bits of String[19]
// Offset = StToNum(OffsetBits) // 0 <= OffSet <= 15
// Let P = String[OffSet]...String[OffSet+3]
// Return the Last 31 bits of P
fn dynamic_truncation(hmac: Vec<u8>) -> u32 {
    let offset = (hmac[hmac.len() - 1] & 0xf) as usize;

    (hmac[offset] as u32 & 0x7f) << 24
        | (hmac[offset + 1] as u32 & 0xff) << 16
        | (hmac[offset + 2] as u32 & 0xff) << 8
        | (hmac[offset + 3] as u32 & 0xff)
}
