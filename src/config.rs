// Shared defaults for the CLI and viewer.
pub const DEFAULT_WIDTH: i32 = 17; // OpenSSH randomart box
pub const DEFAULT_HEIGHT: i32 = 9;
pub const DEFAULT_TILES: &str = "openssh";
pub const RANDOM_FINGERPRINT_LEN: usize = 16;
// Filecoin protocol-1 address: blake2b-160 payload followed by a blake2b-32 checksum.
pub const F1_PAYLOAD_LEN: usize = 20;
pub const F1_CHECKSUM_LEN: usize = 4;
pub const VIEWER_POLL_MS: u64 = 50;
