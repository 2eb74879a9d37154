/// Font readiness signals

use futures::future::BoxFuture;

use crate::error::{Error, Result};
use crate::rendering::font;

/// Tells an export when display fonts have finished loading.
pub trait FontReadiness: Send + Sync {
    /// A future resolving once fonts are loaded, or `None` when the host has
    /// no way to tell. Callers then wait a fixed delay instead.
    fn ready(&self) -> Option<BoxFuture<'static, Result<()>>>;
}

/// The font compiled into the crate; ready once its glyph table is parsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledFonts;

impl FontReadiness for BundledFonts {
    fn ready(&self) -> Option<BoxFuture<'static, Result<()>>> {
        Some(Box::pin(async {
            if font::is_loaded() {
                return font::load().map(|_| ());
            }
            let glyphs = tokio::task::spawn_blocking(font::load)
                .await
                .map_err(|e| Error::FontError(format!("font loading task failed: {}", e)))??;
            log::debug!("bundled font ready with {} glyphs", glyphs);
            Ok(())
        }))
    }
}

/// A host without any readiness API
#[derive(Debug, Clone, Copy, Default)]
pub struct NoReadinessApi;

impl FontReadiness for NoReadinessApi {
    fn ready(&self) -> Option<BoxFuture<'static, Result<()>>> {
        None
    }
}
