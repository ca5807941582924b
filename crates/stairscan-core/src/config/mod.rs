//! Scan configuration.
//!
//! - [`ResyncPolicy`] - how the pattern buffer recovers after a wrong step
//! - [`ScanConfig`] - per-scan options shared by every chart file

use encoding_rs::Encoding;
use serde::{Deserialize, Serialize};
use strum::{Display, IntoStaticStr};

use crate::error::{Error, Result};

/// Default text encoding for chart files.
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Strategy used to trim the pattern buffer once it stops being a staircase
/// prefix.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ResyncPolicy {
    /// Walk the buffer once, cutting at every `L`/`R` found while the index
    /// keeps advancing over the shortened buffer. Reports the same matches as
    /// the classic double-stair finder script.
    #[default]
    Compatible,
    /// Keep the longest suffix that is still a staircase prefix.
    LongestSuffix,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub resync: ResyncPolicy,
    /// WHATWG encoding label used to decode chart files.
    pub encoding: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            resync: ResyncPolicy::default(),
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

impl ScanConfig {
    pub fn with_resync(mut self, resync: ResyncPolicy) -> Self {
        self.resync = resync;
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    /// Resolve the configured encoding label.
    pub fn text_encoding(&self) -> Result<&'static Encoding> {
        Encoding::for_label(self.encoding.trim().as_bytes())
            .ok_or_else(|| Error::UnknownEncoding(self.encoding.clone()))
    }
}
