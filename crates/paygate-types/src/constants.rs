//! System-wide constants for the PayGate settlement processor.

/// Maximum fee rate in basis points (10%). The boundary is inclusive.
pub const MAX_FEE_BASIS_POINTS: u16 = 1000;

/// Basis-point denominator: 10000 basis points = 100%.
pub const BASIS_POINT_SCALE: u128 = 10_000;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "PayGate";
