// Exchange profile names and the payload layout versions they ship with.
// Config files and the CLI refer to profiles by these names.
pub const EXCHANGE_BINANCE: &str = "binance";

// Binance spot REST API v3 order payload
pub const BINANCE_SPOT_LAYOUT_VERSION: u32 = 3;
