// Constants for the crane executor

/// Default memory budget for the snapshot history (256 MiB)
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 256 * 1024 * 1024;

/// Bytes per MiB, for converting command-line limits
pub const BYTES_PER_MIB: usize = 1024 * 1024;
