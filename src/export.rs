//! Export of a rendered receipt to a PNG download
//!
//! [`ExportService::export`] runs one strictly ordered sequence:
//!
//! 1. reject re-entry while another export is in flight
//! 2. fail fast if the target is detached or zero-sized
//! 3. initialize the rasterizer (once, shared by later exports)
//! 4. wait for fonts, or a fixed delay when readiness cannot be observed
//! 5. wait a short stabilization delay, then re-check visibility
//! 6. rasterize on the blocking pool at the device-appropriate ratio
//! 7. hand the PNG to the download sink as `{prefix}_{epochMillis}.png`
//!
//! Steps 2-7 share a single time budget. Failures are returned as errors; the
//! in-flight flag is cleared on every exit path so the caller can retry.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::BoxFuture;
use serde::Serialize;
use tokio::sync::OnceCell;

use crate::error::{Error, Result};
use crate::platform::{
    choose_pixel_ratio, BundledFonts, DeviceEmulation, FontReadiness, PlatformApi, SystemDevice,
};
use crate::rendering::{RenderTarget, Screenshot};
use crate::ExportConfig;

/// Turns a mounted render target into pixels.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, target: &RenderTarget, pixel_ratio: f64) -> Result<Screenshot>;
}

/// Produces the rasterizer on first use.
pub trait RasterizerLoader: Send + Sync {
    fn load(&self) -> BoxFuture<'static, Result<Arc<dyn Rasterizer>>>;
}

/// The built-in CPU rasterizer
#[derive(Debug, Clone, Copy)]
pub struct PixmapRasterizer {
    pub max_output_pixels: u64,
}

impl Rasterizer for PixmapRasterizer {
    fn rasterize(&self, target: &RenderTarget, pixel_ratio: f64) -> Result<Screenshot> {
        target.rasterize(pixel_ratio, self.max_output_pixels)
    }
}

impl RasterizerLoader for PixmapRasterizer {
    fn load(&self) -> BoxFuture<'static, Result<Arc<dyn Rasterizer>>> {
        let r: Arc<dyn Rasterizer> = Arc::new(*self);
        Box::pin(async move { Ok(r) })
    }
}

/// Where finished images go.
pub trait DownloadSink: Send + Sync {
    /// Store `data` under `filename` and return where it ended up.
    fn save(&self, filename: &str, data: &[u8]) -> Result<PathBuf>;
}

/// Writes downloads into a directory. Data goes to a `.part` file first and
/// is renamed into place, so a failed write leaves no image behind.
#[derive(Debug, Clone)]
pub struct FsDownloads {
    dir: PathBuf,
}

impl FsDownloads {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DownloadSink for FsDownloads {
    fn save(&self, filename: &str, data: &[u8]) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        let partial = self.dir.join(format!("{}.part", filename));
        if let Err(e) = std::fs::write(&partial, data) {
            let _ = std::fs::remove_file(&partial);
            return Err(e.into());
        }
        std::fs::rename(&partial, &path)?;
        Ok(path)
    }
}

/// Keeps downloads in memory
#[derive(Debug, Default)]
pub struct MemoryDownloads {
    files: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemoryDownloads {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> Vec<(String, Vec<u8>)> {
        self.files.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn len(&self) -> usize {
        self.files.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DownloadSink for MemoryDownloads {
    fn save(&self, filename: &str, data: &[u8]) -> Result<PathBuf> {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push((filename.to_string(), data.to_vec()));
        Ok(PathBuf::from(filename))
    }
}

/// A finished export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportedFile {
    pub filename: String,
    pub location: PathBuf,
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f64,
    pub bytes: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    Saved(ExportedFile),
    /// Another export was still running; nothing was done
    AlreadyInFlight,
}

/// Clears the in-flight flag when dropped. Owned so a raster job that outlives
/// its export can hold it until the job ends.
struct InFlight(Arc<AtomicBool>);

impl InFlight {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlight(flag.clone()))
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn ensure_visible(target: &RenderTarget, stage: &str) -> Result<()> {
    if target.is_visible() {
        return Ok(());
    }
    let (w, h) = target.measured_size();
    Err(Error::NotVisible(format!(
        "receipt measured {}x{} {} (mounted: {})",
        w,
        h,
        stage,
        target.is_mounted()
    )))
}

fn epoch_millis() -> u128 {
    u128::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Download file name for `prefix` at `millis`.
pub fn export_filename(prefix: &str, millis: u128) -> String {
    format!("{}_{}.png", prefix, millis)
}

/// Rasterizes render targets and hands the images to a download sink.
///
/// Share one service per preview (wrap it in an `Arc`); it allows a single
/// export at a time.
pub struct ExportService {
    config: ExportConfig,
    device: Arc<dyn DeviceEmulation>,
    fonts: Arc<dyn FontReadiness>,
    loader: Arc<dyn RasterizerLoader>,
    rasterizer: OnceCell<Arc<dyn Rasterizer>>,
    sink: Arc<dyn DownloadSink>,
    in_flight: Arc<AtomicBool>,
}

impl ExportService {
    /// Service on the local machine with the built-in rasterizer.
    pub fn new(config: ExportConfig, sink: Arc<dyn DownloadSink>) -> Result<Self> {
        config.validate()?;
        let loader = Arc::new(PixmapRasterizer {
            max_output_pixels: config.max_output_pixels,
        });
        Ok(Self {
            config,
            device: Arc::new(SystemDevice::new()),
            fonts: Arc::new(BundledFonts),
            loader,
            rasterizer: OnceCell::new(),
            sink,
            in_flight: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn with_platform(mut self, platform: &dyn PlatformApi) -> Self {
        self.device = platform.device_emulation();
        self.fonts = platform.font_readiness();
        self
    }

    pub fn with_device(mut self, device: Arc<dyn DeviceEmulation>) -> Self {
        self.device = device;
        self
    }

    pub fn with_fonts(mut self, fonts: Arc<dyn FontReadiness>) -> Self {
        self.fonts = fonts;
        self
    }

    /// Replace the rasterizer. Only effective before the first export.
    pub fn with_rasterizer(mut self, loader: Arc<dyn RasterizerLoader>) -> Self {
        self.loader = loader;
        self.rasterizer = OnceCell::new();
        self
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Whether an export, or a raster job left behind by a timed out one, is
    /// running right now
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Pixel ratio an export would use on the current device
    pub fn pixel_ratio(&self) -> f64 {
        choose_pixel_ratio(&self.device.metrics(), &self.config)
    }

    /// Export `target` as `{prefix}_{epochMillis}.png`.
    pub async fn export(&self, target: &RenderTarget, prefix: &str) -> Result<ExportOutcome> {
        let Some(guard) = InFlight::acquire(&self.in_flight) else {
            log::warn!("export: {} requested while another export is running", prefix);
            return Ok(ExportOutcome::AlreadyInFlight);
        };
        log::info!("export: starting {}", prefix);

        let budget = Duration::from_millis(self.config.timeout_ms);
        let result = match tokio::time::timeout(budget, self.run(target, prefix, guard)).await {
            Ok(r) => r,
            Err(_) => Err(Error::Timeout(self.config.timeout_ms)),
        };
        match &result {
            Ok(file) => log::info!(
                "export: saved {} ({}x{} @{}x, {} bytes)",
                file.filename,
                file.width,
                file.height,
                file.pixel_ratio,
                file.bytes
            ),
            Err(e) => log::warn!("export: {} failed: {}", prefix, e),
        }
        result.map(ExportOutcome::Saved)
    }

    async fn run(
        &self,
        target: &RenderTarget,
        prefix: &str,
        guard: InFlight,
    ) -> Result<ExportedFile> {
        ensure_visible(target, "before export")?;

        let rasterizer = self
            .rasterizer
            .get_or_try_init(|| {
                log::debug!("export: initializing rasterizer");
                self.loader.load()
            })
            .await
            .map_err(|e| match e {
                Error::InitializationError(_) => e,
                other => Error::InitializationError(other.to_string()),
            })?
            .clone();

        match self.fonts.ready() {
            Some(ready) => ready.await?,
            None => {
                log::debug!(
                    "export: no font readiness signal, waiting {}ms",
                    self.config.font_fallback_delay_ms
                );
                tokio::time::sleep(Duration::from_millis(self.config.font_fallback_delay_ms)).await;
            }
        }
        tokio::time::sleep(Duration::from_millis(self.config.stabilization_delay_ms)).await;
        ensure_visible(target, "after stabilization")?;

        let ratio = self.pixel_ratio();
        log::debug!("export: pixel ratio {}", ratio);
        let job_target = target.clone();
        // the job owns the guard: if the export times out, the service stays
        // busy until the detached job returns and its output is dropped
        let (shot, _guard) = tokio::task::spawn_blocking(move || {
            (rasterizer.rasterize(&job_target, ratio), guard)
        })
        .await
        .map_err(|e| Error::RasterError(format!("rasterizer task failed: {}", e)))?;
        let shot = shot?;

        let filename = export_filename(prefix, epoch_millis());
        let location = self.sink.save(&filename, &shot.png_data)?;
        Ok(ExportedFile {
            filename,
            location,
            width: shot.width,
            height: shot.height,
            pixel_ratio: ratio,
            bytes: shot.png_data.len(),
        })
    }
}
