//! Host capabilities an export depends on
//!
//! Device metrics drive the pixel-ratio choice and font readiness gates
//! rasterization. Both are traits so hosts without a capability can supply a
//! fallback and tests can supply fakes.

pub mod device;
pub mod fonts;

use std::sync::Arc;

pub use device::{choose_pixel_ratio, DeviceEmulation, DeviceMetrics, EmulatedDevice, SystemDevice};
pub use fonts::{BundledFonts, FontReadiness, NoReadinessApi};

/// The set of capabilities a host offers.
pub trait PlatformApi: Send + Sync {
    fn device_emulation(&self) -> Arc<dyn DeviceEmulation>;
    fn font_readiness(&self) -> Arc<dyn FontReadiness>;
}

/// The local machine with the bundled glyph set.
pub struct NativePlatform {
    device: Arc<SystemDevice>,
}

impl NativePlatform {
    pub fn new() -> Self {
        NativePlatform {
            device: Arc::new(SystemDevice::new()),
        }
    }
}

impl Default for NativePlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformApi for NativePlatform {
    fn device_emulation(&self) -> Arc<dyn DeviceEmulation> {
        self.device.clone()
    }

    fn font_readiness(&self) -> Arc<dyn FontReadiness> {
        Arc::new(BundledFonts)
    }
}
