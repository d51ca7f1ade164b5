mod fcaddr;

use rand::RngCore;

use crate::error::Result;

pub use fcaddr::Address;

/// Parses a hex fingerprint, either plain (`9b4c7b...`) or colon separated
/// the way `ssh-keygen -l` prints it (`9b:4c:7b:...`).
pub fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let digits: String = text.trim().split(':').collect();
    Ok(hex::decode(digits)?)
}

/// Fresh random bytes, for demos.
pub fn random_fingerprint(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes
}
