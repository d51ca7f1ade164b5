use data_encoding::Specification;

use crate::config::{F1_CHECKSUM_LEN, F1_PAYLOAD_LEN};
use crate::error::{Error, Result};

// Lowercase RFC 4648 alphabet, used unpadded by Filecoin addresses.
const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz234567";

/// A decoded Filecoin protocol-1 (secp256k1) address.
///
/// The payload is the blake2b-160 hash of the public key and is what gets
/// walked. The checksum is kept for display only and is not verified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Address {
    pub payload: Vec<u8>,
    pub checksum: Vec<u8>,
}

impl Address {
    /// Parses an `f1...` address.
    pub fn parse_f1(addr: &str) -> Result<Self> {
        let encoded = addr
            .trim()
            .strip_prefix("f1")
            .ok_or_else(|| Error::InvalidAddress("only f1 addresses are supported".into()))?;

        let mut bytes = decode_base32(encoded)?;
        let want = F1_PAYLOAD_LEN + F1_CHECKSUM_LEN;
        if bytes.len() != want {
            return Err(Error::InvalidAddress(format!(
                "expected {want} bytes of payload, got {}",
                bytes.len()
            )));
        }
        let checksum = bytes.split_off(F1_PAYLOAD_LEN);
        Ok(Self {
            payload: bytes,
            checksum,
        })
    }
}

fn decode_base32(text: &str) -> Result<Vec<u8>> {
    let mut symbols = Specification::new();
    symbols.symbols.push_str(ALPHABET);
    let low32 = symbols
        .encoding()
        .map_err(|e| Error::InvalidAddress(format!("base32 alphabet: {e}")))?;
    low32
        .decode(text.as_bytes())
        .map_err(|e| Error::InvalidAddress(format!("bad base32 payload: {e}")))
}
