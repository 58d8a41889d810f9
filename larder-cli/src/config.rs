//! Configuration module
//!
//! Handles CLI configuration including server URL and caller identity.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the Larder server
    pub server_url: String,
    /// User the requests are made as
    pub user: String,
    /// Print raw JSON instead of formatted output
    pub json: bool,
}
