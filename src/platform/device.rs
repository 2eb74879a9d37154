/// Device metrics and the export pixel-ratio policy

use serde::{Deserialize, Serialize};

use crate::{ExportConfig, Viewport};

/// Viewports narrower than this count as constrained
pub const NARROW_VIEWPORT: u32 = 768;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceMetrics {
    pub viewport: Viewport,
    /// Natural device pixel ratio
    pub dpr: f64,
    /// Logical core count, when the host reports one
    pub hardware_concurrency: Option<usize>,
}

impl Default for DeviceMetrics {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            dpr: 1.0,
            hardware_concurrency: None,
        }
    }
}

pub trait DeviceEmulation: Send + Sync {
    fn set_metrics(&self, m: DeviceMetrics);
    fn metrics(&self) -> DeviceMetrics;
}

/// Device whose metrics are whatever was last set
pub struct EmulatedDevice {
    metrics: std::sync::Mutex<DeviceMetrics>,
}

impl EmulatedDevice {
    pub fn new(metrics: DeviceMetrics) -> Self {
        EmulatedDevice {
            metrics: std::sync::Mutex::new(metrics),
        }
    }
}

impl Default for EmulatedDevice {
    fn default() -> Self {
        Self::new(DeviceMetrics::default())
    }
}

impl DeviceEmulation for EmulatedDevice {
    fn set_metrics(&self, m: DeviceMetrics) {
        let mut g = self.metrics.lock().unwrap_or_else(|e| e.into_inner());
        *g = m;
    }

    fn metrics(&self) -> DeviceMetrics {
        self.metrics.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

/// The machine this process runs on. The core count comes from the OS; the
/// viewport and ratio can be overridden.
pub struct SystemDevice {
    inner: EmulatedDevice,
}

impl SystemDevice {
    pub fn new() -> Self {
        let metrics = DeviceMetrics {
            hardware_concurrency: Some(num_cpus::get()),
            ..DeviceMetrics::default()
        };
        SystemDevice {
            inner: EmulatedDevice::new(metrics),
        }
    }
}

impl Default for SystemDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceEmulation for SystemDevice {
    fn set_metrics(&self, m: DeviceMetrics) {
        let cores = self.inner.metrics().hardware_concurrency;
        self.inner.set_metrics(DeviceMetrics {
            hardware_concurrency: m.hardware_concurrency.or(cores),
            ..m
        });
    }

    fn metrics(&self) -> DeviceMetrics {
        self.inner.metrics()
    }
}

/// Pick the export pixel ratio for `device`.
///
/// Twice the natural ratio, clamped to `[1, cap]`. The cap falls back to
/// `config.default_pixel_ratio` when no core count is known, is 2.0 on small
/// or low-core devices, 2.5 up to four cores and `config.max_pixel_ratio`
/// otherwise.
pub fn choose_pixel_ratio(device: &DeviceMetrics, config: &ExportConfig) -> f64 {
    let natural = if device.dpr.is_finite() && device.dpr > 0.0 {
        device.dpr
    } else {
        1.0
    };
    let cap = match device.hardware_concurrency {
        None => config.default_pixel_ratio,
        Some(cores) if cores <= 2 || device.viewport.width < NARROW_VIEWPORT => 2.0,
        Some(cores) if cores <= 4 => 2.5,
        Some(_) => config.max_pixel_ratio,
    };
    let cap = cap.min(config.max_pixel_ratio).max(1.0);
    (natural * 2.0).clamp(1.0, cap)
}
