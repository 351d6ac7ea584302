use gencdf_common::Config;
use serde::{Deserialize, Serialize};

/// Fully-resolved pipeline options. Constructed once before ingestion
/// from whatever sources the caller uses (flags, config file, defaults);
/// the core only ever sees this value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CdfOptions {
    /// 0-based index into the whitespace-split tokens of each line.
    pub column: usize,
    /// Emit zero-frequency filler rows between sparse values.
    pub padding: bool,
    /// Pad down to this bound when it lies below the observed minimum.
    pub pad_start: Option<f64>,
    /// Pad up to this bound when it lies above the observed maximum.
    pub pad_stop: Option<f64>,
    /// Step between filler rows. Only meaningful when `padding` is set.
    pub pad_increment: f64,
    /// Lines starting with this prefix (after trimming) are ignored.
    pub comment_prefix: String,
}

impl CdfOptions {
    /// Options with config-file defaults applied: first column, no
    /// padding, increment and comment prefix from the config.
    pub fn from_config(config: &Config) -> Self {
        Self {
            column: 0,
            padding: false,
            pad_start: None,
            pad_stop: None,
            pad_increment: config.padding.default_increment,
            comment_prefix: config.input.comment_prefix.clone(),
        }
    }
}

impl Default for CdfOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
