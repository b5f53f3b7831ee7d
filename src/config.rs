//! Engine configuration loaded from environment variables.
//!
//! - `DEXLENS_ACCOUNT` — optional active account address; when set, the
//!   engine computes the per-account views for it from the start. The
//!   presentation layer can still switch accounts at runtime.

use crate::error::DexlensError;
use crate::models::Address;

/// Top-level engine configuration.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Active account for the per-account views, if any.
    pub account: Option<Address>,
}

/// Loads the engine configuration from environment variables.
///
/// # Errors
///
/// Returns [`DexlensError::Config`] if `DEXLENS_ACCOUNT` is set to
/// something that is not a 0x-prefixed 40-digit hex address.
pub fn fetch_config() -> crate::Result<EngineConfig> {
    let account = match non_empty_var("DEXLENS_ACCOUNT") {
        Some(raw) => {
            if !is_hex_address(&raw) {
                return Err(DexlensError::Config(format!(
                    "DEXLENS_ACCOUNT is not a 0x-prefixed 40-digit hex address: {raw}"
                )));
            }
            Some(Address::new(raw))
        }
        None => None,
    };

    Ok(EngineConfig { account })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn is_hex_address(raw: &str) -> bool {
    raw.len() == 42
        && raw.starts_with("0x")
        && raw[2..].chars().all(|c| c.is_ascii_hexdigit())
}
