//! receiptgen
//!
//! Turns life-event records (a night of sleep, a day of coffee, a shopping
//! trip, a concert...) into stylized receipt images.
//!
//! The pipeline is:
//!
//! - a [`record::ReceiptRecord`] edited through [`session::ReceiptSession`]
//! - pure calculators in [`calc`] and [`barcode`], collected by
//!   [`derived::DerivedMetrics`]
//! - a schema-driven renderer in [`rendering`] producing a laid out
//!   [`rendering::RenderTarget`]
//! - the [`export::ExportService`], which rasterizes a target to PNG and
//!   hands it to a download sink
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use receiptgen::export::{ExportService, FsDownloads};
//! use receiptgen::labels::{BundledLabels, Language};
//! use receiptgen::record::ReceiptKind;
//! use receiptgen::session::ReceiptSession;
//! use receiptgen::ExportConfig;
//!
//! # async fn run() -> receiptgen::Result<()> {
//! let exporter = ExportService::new(ExportConfig::default(), Arc::new(FsDownloads::new("out")))?;
//! let mut session = ReceiptSession::new(
//!     ReceiptKind::Sleep,
//!     Language::En,
//!     Arc::new(BundledLabels),
//!     Arc::new(exporter),
//! );
//! session.on_change("metrics.quality", serde_json::json!(90))?;
//! session.render();
//! session.export().await?;
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, ExportErrorKind, ExportFailure, Result};

pub mod barcode;
pub mod calc;
pub mod derived;
pub mod labels;
pub mod record;
pub mod schema;

// Document, layout, paint and raster stages
pub mod rendering;

// Host capabilities: device metrics and font readiness
pub mod platform;

pub mod export;
pub mod session;

/// Logical width of the receipt paper, shared by every receipt kind
pub const RECEIPT_WIDTH: u32 = 380;

/// Viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Configuration for exports
///
/// Every field has a default, so a config file only needs to name the values
/// it changes.
///
/// # Examples
///
/// ```
/// let cfg: receiptgen::ExportConfig = serde_json::from_str(r#"{"timeout_ms": 5000}"#).unwrap();
/// assert_eq!(cfg.timeout_ms, 5000);
/// assert_eq!(cfg.receipt_width, 380);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Logical paper width in units
    pub receipt_width: u32,
    /// Pause after fonts are ready and before rasterizing
    pub stabilization_delay_ms: u64,
    /// Wait used instead of font readiness when the host cannot report it
    pub font_fallback_delay_ms: u64,
    /// Budget for one whole export
    pub timeout_ms: u64,
    /// Pixel-ratio cap when the device gives no concurrency hint
    pub default_pixel_ratio: f64,
    /// Upper bound on any pixel ratio
    pub max_pixel_ratio: f64,
    /// Largest pixel buffer the rasterizer will allocate
    pub max_output_pixels: u64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            receipt_width: RECEIPT_WIDTH,
            stabilization_delay_ms: 100,
            font_fallback_delay_ms: 300,
            timeout_ms: 10_000,
            default_pixel_ratio: 2.0,
            max_pixel_ratio: 3.0,
            max_output_pixels: 16_000_000,
        }
    }
}

impl ExportConfig {
    /// Load a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let cfg: ExportConfig = serde_json::from_str(&text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.receipt_width == 0 {
            return Err(Error::ConfigError("receipt_width must be positive".into()));
        }
        if self.timeout_ms == 0 {
            return Err(Error::ConfigError("timeout_ms must be positive".into()));
        }
        if !(self.max_pixel_ratio.is_finite() && self.max_pixel_ratio >= 1.0) {
            return Err(Error::ConfigError(format!(
                "max_pixel_ratio must be at least 1, got {}",
                self.max_pixel_ratio
            )));
        }
        if !(self.default_pixel_ratio.is_finite()
            && self.default_pixel_ratio >= 1.0
            && self.default_pixel_ratio <= self.max_pixel_ratio)
        {
            return Err(Error::ConfigError(format!(
                "default_pixel_ratio must lie in [1, {}], got {}",
                self.max_pixel_ratio, self.default_pixel_ratio
            )));
        }
        if self.max_output_pixels == 0 {
            return Err(Error::ConfigError("max_output_pixels must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExportConfig::default();
        assert_eq!(config.receipt_width, 380);
        assert_eq!(config.default_pixel_ratio, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_viewport() {
        let viewport = Viewport::default();
        assert_eq!(viewport.width, 1280);
        assert_eq!(viewport.height, 720);
    }

    #[test]
    fn zero_delays_are_allowed() {
        let cfg = ExportConfig {
            stabilization_delay_ms: 0,
            font_fallback_delay_ms: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_bad_ratios() {
        let cfg = ExportConfig {
            default_pixel_ratio: 4.0,
            ..Default::default()
        };
        assert!(matches!(cfg.validate(), Err(Error::ConfigError(_))));
        let cfg = ExportConfig {
            max_pixel_ratio: f64::NAN,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: ExportConfig = serde_json::from_str(r#"{"max_pixel_ratio": 2.5}"#).unwrap();
        assert_eq!(cfg.max_pixel_ratio, 2.5);
        assert_eq!(cfg.stabilization_delay_ms, 100);
    }
}
