//! Receipt rendering: document, layout, paint and raster stages
//!
//! A record becomes a [`document::ReceiptDocument`], which is laid out on a
//! fixed-width paper strip, turned into paint commands and finally
//! rasterized to PNG. A [`RenderTarget`] holds the laid out result of one
//! preview and is what exports read from.

pub mod document;
pub mod font;
pub mod layout;
pub mod paint;
pub mod raster;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use base64::Engine as _;

use crate::error::Result;
use document::ReceiptDocument;
use layout::{layout_document, PageLayout};
use paint::{paint_layout, PaintCommand};

#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl Screenshot {
    /// `data:image/png;base64,...` form of the image
    pub fn to_data_url(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png_data)
        )
    }
}

#[derive(Debug)]
struct TargetInner {
    document: ReceiptDocument,
    layout: PageLayout,
    mounted: AtomicBool,
}

/// Handle to the live rendered receipt of one preview.
///
/// Clones share state: detaching any clone detaches them all. A detached
/// target measures as zero-sized and is never rasterized.
#[derive(Debug, Clone)]
pub struct RenderTarget {
    inner: Arc<TargetInner>,
}

impl RenderTarget {
    /// Lay out `document` on paper `width` units wide and mount the result.
    pub fn mount(document: ReceiptDocument, width: u32) -> Self {
        let layout = layout_document(&document, width);
        Self {
            inner: Arc::new(TargetInner {
                document,
                layout,
                mounted: AtomicBool::new(true),
            }),
        }
    }

    pub fn document(&self) -> &ReceiptDocument {
        &self.inner.document
    }

    pub fn layout(&self) -> &PageLayout {
        &self.inner.layout
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.load(Ordering::Acquire)
    }

    pub fn detach(&self) {
        self.inner.mounted.store(false, Ordering::Release);
    }

    /// Rendered size in logical units; `(0, 0)` once detached.
    pub fn measured_size(&self) -> (u32, u32) {
        if !self.is_mounted() {
            return (0, 0);
        }
        (self.inner.layout.width(), self.inner.layout.height())
    }

    pub fn is_visible(&self) -> bool {
        let (w, h) = self.measured_size();
        w > 0 && h > 0
    }

    pub fn paint(&self) -> Vec<PaintCommand> {
        paint_layout(&self.inner.layout)
    }

    /// Rasterize the current layout at `pixel_ratio`.
    pub fn rasterize(&self, pixel_ratio: f64, max_pixels: u64) -> Result<Screenshot> {
        let layout = &self.inner.layout;
        raster::rasterize(
            &self.paint(),
            layout.width(),
            layout.height(),
            pixel_ratio,
            max_pixels,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::labels::{BundledLabels, Language};
    use crate::record::{ReceiptKind, ReceiptRecord};

    fn target(width: u32) -> RenderTarget {
        let r = ReceiptRecord::seeded(ReceiptKind::Coffee, "2025/01/01");
        let doc = document::render_receipt(&r, &BundledLabels, Language::En, 0);
        RenderTarget::mount(doc, width)
    }

    #[test]
    fn detaching_zeroes_the_size() {
        let t = target(380);
        let other = t.clone();
        assert!(t.is_visible());
        other.detach();
        assert!(!t.is_mounted());
        assert_eq!(t.measured_size(), (0, 0));
        assert!(!t.is_visible());
    }

    #[test]
    fn zero_width_target_is_not_visible() {
        assert!(!target(0).is_visible());
    }

    #[test]
    fn data_url_prefix() {
        let shot = target(380).rasterize(1.0, 10_000_000).unwrap();
        assert!(shot.to_data_url().starts_with("data:image/png;base64,iVBORw0KGgo"));
    }
}
