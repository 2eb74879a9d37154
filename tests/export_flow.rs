use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use futures::future::BoxFuture;

use receiptgen::export::{
    DownloadSink, ExportOutcome, ExportService, FsDownloads, MemoryDownloads, PixmapRasterizer,
    Rasterizer, RasterizerLoader,
};
use receiptgen::labels::{BundledLabels, Language};
use receiptgen::platform::{DeviceMetrics, EmulatedDevice, FontReadiness, NoReadinessApi};
use receiptgen::record::{ReceiptKind, ReceiptRecord};
use receiptgen::rendering::document::render_receipt;
use receiptgen::rendering::{RenderTarget, Screenshot};
use receiptgen::{Error, ExportConfig, ExportErrorKind, ExportFailure, Viewport, RECEIPT_WIDTH};

fn fast_config() -> ExportConfig {
    ExportConfig {
        stabilization_delay_ms: 0,
        font_fallback_delay_ms: 0,
        ..Default::default()
    }
}

fn target(kind: ReceiptKind) -> RenderTarget {
    let record = ReceiptRecord::seeded(kind, "2025/01/01");
    let doc = render_receipt(&record, &BundledLabels, Language::En, 1_700_000_000_000);
    RenderTarget::mount(doc, RECEIPT_WIDTH)
}

fn desktop(dpr: f64, cores: usize) -> Arc<EmulatedDevice> {
    Arc::new(EmulatedDevice::new(DeviceMetrics {
        viewport: Viewport {
            width: 1440,
            height: 900,
        },
        dpr,
        hardware_concurrency: Some(cores),
    }))
}

/// Counts calls and blocks each one until the test releases it.
#[derive(Clone)]
struct GatedRasterizer {
    calls: Arc<AtomicUsize>,
    gate: Arc<Mutex<Receiver<()>>>,
}

impl Rasterizer for GatedRasterizer {
    fn rasterize(&self, target: &RenderTarget, pixel_ratio: f64) -> receiptgen::Result<Screenshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gate.lock().unwrap();
        let _ = gate.recv_timeout(Duration::from_secs(5));
        target.rasterize(pixel_ratio, 50_000_000)
    }
}

impl RasterizerLoader for GatedRasterizer {
    fn load(&self) -> BoxFuture<'static, receiptgen::Result<Arc<dyn Rasterizer>>> {
        let r: Arc<dyn Rasterizer> = Arc::new(self.clone());
        Box::pin(async move { Ok(r) })
    }
}

/// Counts loads and rasterize calls; can fail the first load.
#[derive(Clone, Default)]
struct CountingLoader {
    loads: Arc<AtomicUsize>,
    calls: Arc<AtomicUsize>,
    fail_first_load: bool,
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl Rasterizer for CountingLoader {
    fn rasterize(&self, target: &RenderTarget, pixel_ratio: f64) -> receiptgen::Result<Screenshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.events.lock().unwrap().push("raster");
        target.rasterize(pixel_ratio, 50_000_000)
    }
}

impl RasterizerLoader for CountingLoader {
    fn load(&self) -> BoxFuture<'static, receiptgen::Result<Arc<dyn Rasterizer>>> {
        let n = self.loads.fetch_add(1, Ordering::SeqCst);
        let fail = self.fail_first_load && n == 0;
        let r: Arc<dyn Rasterizer> = Arc::new(self.clone());
        Box::pin(async move {
            if fail {
                Err(Error::Other("canvas backend unavailable".into()))
            } else {
                Ok(r)
            }
        })
    }
}

/// Font set that loads after a short delay and records when it is done.
struct SlowFonts {
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl FontReadiness for SlowFonts {
    fn ready(&self) -> Option<BoxFuture<'static, receiptgen::Result<()>>> {
        let events = self.events.clone();
        Some(Box::pin(async move {
            tokio::time::sleep(Duration::from_millis(30)).await;
            events.lock().unwrap().push("fonts");
            Ok(())
        }))
    }
}

/// Font set that never finishes loading.
struct StuckFonts;

impl FontReadiness for StuckFonts {
    fn ready(&self) -> Option<BoxFuture<'static, receiptgen::Result<()>>> {
        Some(Box::pin(futures::future::pending()))
    }
}

struct BrokenFonts;

impl FontReadiness for BrokenFonts {
    fn ready(&self) -> Option<BoxFuture<'static, receiptgen::Result<()>>> {
        Some(Box::pin(async { Err(Error::FontError("noto-sans-sc.woff2".into())) }))
    }
}

/// Holds its first call for `first_delay`, tracking how many calls overlap.
#[derive(Clone)]
struct SlowRasterizer {
    first_delay: Duration,
    calls: Arc<AtomicUsize>,
    running: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
}

impl SlowRasterizer {
    fn new(first_delay: Duration) -> Self {
        Self {
            first_delay,
            calls: Arc::new(AtomicUsize::new(0)),
            running: Arc::new(AtomicUsize::new(0)),
            peak: Arc::new(AtomicUsize::new(0)),
        }
    }
}

impl Rasterizer for SlowRasterizer {
    fn rasterize(&self, target: &RenderTarget, pixel_ratio: f64) -> receiptgen::Result<Screenshot> {
        let now = self.running.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            std::thread::sleep(self.first_delay);
        }
        let shot = target.rasterize(pixel_ratio, 50_000_000);
        self.running.fetch_sub(1, Ordering::SeqCst);
        shot
    }
}

impl RasterizerLoader for SlowRasterizer {
    fn load(&self) -> BoxFuture<'static, receiptgen::Result<Arc<dyn Rasterizer>>> {
        let r: Arc<dyn Rasterizer> = Arc::new(self.clone());
        Box::pin(async move { Ok(r) })
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn second_export_while_in_flight_is_rejected() {
    let (release, gate) = channel();
    let raster = GatedRasterizer {
        calls: Arc::new(AtomicUsize::new(0)),
        gate: Arc::new(Mutex::new(gate)),
    };
    let sink = Arc::new(MemoryDownloads::new());
    let service = Arc::new(
        ExportService::new(fast_config(), sink.clone())
            .unwrap()
            .with_rasterizer(Arc::new(raster.clone())),
    );
    let t = target(ReceiptKind::Sleep);

    let first = {
        let service = service.clone();
        let t = t.clone();
        tokio::spawn(async move { service.export(&t, "SLEEP_LOG").await })
    };
    while raster.calls.load(Ordering::SeqCst) == 0 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert!(service.is_busy());

    let second = service.export(&t, "SLEEP_LOG").await.unwrap();
    assert_eq!(second, ExportOutcome::AlreadyInFlight);

    release.send(()).unwrap();
    let first = first.await.unwrap().unwrap();
    assert!(matches!(first, ExportOutcome::Saved(_)));
    assert_eq!(raster.calls.load(Ordering::SeqCst), 1);
    assert_eq!(sink.len(), 1);
    assert!(!service.is_busy());
}

#[tokio::test]
async fn detached_target_fails_without_rasterizing() {
    let loader = CountingLoader::default();
    let sink = Arc::new(MemoryDownloads::new());
    let service = ExportService::new(fast_config(), sink.clone())
        .unwrap()
        .with_rasterizer(Arc::new(loader.clone()));
    let t = target(ReceiptKind::Movie);
    t.detach();

    let err = service.export(&t, "MOVIE_RECEIPT").await.unwrap_err();
    assert!(matches!(err, Error::NotVisible(_)));
    assert!(err.to_string().contains("not visible"));
    assert_eq!(ExportFailure::from(&err).kind, ExportErrorKind::NotVisible);
    assert_eq!(loader.calls.load(Ordering::SeqCst), 0);
    assert!(sink.is_empty());
    assert!(!service.is_busy());
}

#[tokio::test]
async fn zero_width_target_is_not_visible() {
    let record = ReceiptRecord::seeded(ReceiptKind::Life, "2025/01/01");
    let doc = render_receipt(&record, &BundledLabels, Language::En, 0);
    let t = RenderTarget::mount(doc, 0);
    let service = ExportService::new(fast_config(), Arc::new(MemoryDownloads::new())).unwrap();
    let err = service.export(&t, "LIFE_LOG").await.unwrap_err();
    assert_eq!(err.export_kind(), ExportErrorKind::NotVisible);
}

#[tokio::test]
async fn memory_budget_failure_suggests_closing_tabs() {
    let cfg = ExportConfig {
        max_output_pixels: 1_000,
        ..fast_config()
    };
    let sink = Arc::new(MemoryDownloads::new());
    let service = ExportService::new(cfg, sink.clone()).unwrap();
    let err = service
        .export(&target(ReceiptKind::Shopping), "SPENDING_LOG")
        .await
        .unwrap_err();

    let failure = ExportFailure::from(&err);
    assert_eq!(failure.kind, ExportErrorKind::OutOfMemory);
    let msg = failure.user_message(&BundledLabels, Language::En);
    assert!(msg.to_lowercase().contains("close other tabs"), "{}", msg);
    assert!(sink.is_empty());
    assert!(!service.is_busy());
}

#[tokio::test]
async fn saved_file_is_named_after_prefix_and_time() {
    let sink = Arc::new(MemoryDownloads::new());
    let service = ExportService::new(fast_config(), sink.clone()).unwrap();
    let before = chrono::Utc::now().timestamp_millis();
    let outcome = service
        .export(&target(ReceiptKind::Sleep), "SLEEP_LOG")
        .await
        .unwrap();
    let after = chrono::Utc::now().timestamp_millis();

    let ExportOutcome::Saved(file) = outcome else {
        panic!("expected a saved file");
    };
    let stamp = file
        .filename
        .strip_prefix("SLEEP_LOG_")
        .and_then(|s| s.strip_suffix(".png"))
        .expect("filename pattern");
    let millis: i64 = stamp.parse().expect("epoch millis");
    assert!(before <= millis && millis <= after);

    let files = sink.files();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].0, file.filename);
    assert_eq!(files[0].1.len(), file.bytes);
}

#[tokio::test]
async fn pixel_ratio_follows_device() {
    let dir = std::env::temp_dir().join(format!("receiptgen-export-{}", std::process::id()));
    let sink: Arc<dyn DownloadSink> = Arc::new(FsDownloads::new(&dir));
    let service = ExportService::new(fast_config(), sink)
        .unwrap()
        .with_device(desktop(2.0, 4));
    let ExportOutcome::Saved(file) = service
        .export(&target(ReceiptKind::Coffee), "CAFFEINE_LOG")
        .await
        .unwrap()
    else {
        panic!("expected a saved file");
    };
    assert_eq!(file.pixel_ratio, 2.5);
    assert_eq!(file.width, 950);

    let data = std::fs::read(&file.location).unwrap();
    let reader = png::Decoder::new(data.as_slice()).read_info().unwrap();
    assert_eq!(reader.info().width, 950);
    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn rasterizes_only_after_fonts_are_ready() {
    let loader = CountingLoader::default();
    let events = loader.events.clone();
    let service = ExportService::new(fast_config(), Arc::new(MemoryDownloads::new()))
        .unwrap()
        .with_rasterizer(Arc::new(loader))
        .with_fonts(Arc::new(SlowFonts {
            events: events.clone(),
        }));
    service
        .export(&target(ReceiptKind::Idol), "IDOL_LOG")
        .await
        .unwrap();
    assert_eq!(*events.lock().unwrap(), vec!["fonts", "raster"]);
}

#[tokio::test]
async fn missing_readiness_api_waits_fixed_delay() {
    let cfg = ExportConfig {
        font_fallback_delay_ms: 150,
        ..fast_config()
    };
    let service = ExportService::new(cfg, Arc::new(MemoryDownloads::new()))
        .unwrap()
        .with_fonts(Arc::new(NoReadinessApi));
    let start = Instant::now();
    service
        .export(&target(ReceiptKind::Reading), "READING_LOG")
        .await
        .unwrap();
    assert!(start.elapsed() >= Duration::from_millis(150));
}

#[tokio::test]
async fn font_failure_is_a_rasterization_error() {
    let service = ExportService::new(fast_config(), Arc::new(MemoryDownloads::new()))
        .unwrap()
        .with_fonts(Arc::new(BrokenFonts));
    let err = service
        .export(&target(ReceiptKind::Music), "CONCERT_LOG")
        .await
        .unwrap_err();
    assert_eq!(err.export_kind(), ExportErrorKind::Rasterization);
    assert!(!service.is_busy());
}

#[tokio::test]
async fn stuck_export_times_out_and_can_retry() {
    let cfg = ExportConfig {
        timeout_ms: 50,
        ..fast_config()
    };
    let sink = Arc::new(MemoryDownloads::new());
    let service = ExportService::new(cfg, sink.clone())
        .unwrap()
        .with_fonts(Arc::new(StuckFonts));
    let t = target(ReceiptKind::Travel);

    let err = service.export(&t, "BOARDING_PASS").await.unwrap_err();
    assert!(matches!(err, Error::Timeout(50)));
    assert_eq!(ExportFailure::from(&err).kind, ExportErrorKind::Timeout);
    assert!(!service.is_busy());

    let service = service.with_fonts(Arc::new(NoReadinessApi));
    assert!(matches!(
        service.export(&t, "BOARDING_PASS").await.unwrap(),
        ExportOutcome::Saved(_)
    ));
    assert_eq!(sink.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn timed_out_raster_job_keeps_the_service_busy() {
    let raster = SlowRasterizer::new(Duration::from_millis(400));
    let sink = Arc::new(MemoryDownloads::new());
    let service = ExportService::new(
        ExportConfig {
            timeout_ms: 100,
            ..fast_config()
        },
        sink.clone(),
    )
    .unwrap()
    .with_device(desktop(0.5, 8))
    .with_fonts(Arc::new(NoReadinessApi))
    .with_rasterizer(Arc::new(raster.clone()));
    let t = target(ReceiptKind::Sleep);

    let err = service.export(&t, "SLEEP_LOG").await.unwrap_err();
    assert!(matches!(err, Error::Timeout(100)));
    // the abandoned job is still rasterizing
    assert!(service.is_busy());
    assert!(matches!(
        service.export(&t, "SLEEP_LOG").await.unwrap(),
        ExportOutcome::AlreadyInFlight
    ));
    assert_eq!(raster.calls.load(Ordering::SeqCst), 1);

    let deadline = Instant::now() + Duration::from_secs(5);
    while service.is_busy() && Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert!(!service.is_busy());
    assert!(matches!(
        service.export(&t, "SLEEP_LOG").await.unwrap(),
        ExportOutcome::Saved(_)
    ));
    assert_eq!(raster.calls.load(Ordering::SeqCst), 2);
    assert_eq!(raster.peak.load(Ordering::SeqCst), 1);
    assert_eq!(sink.len(), 1);
}

#[tokio::test]
async fn rasterizer_is_initialized_once() {
    let loader = CountingLoader::default();
    let service = ExportService::new(fast_config(), Arc::new(MemoryDownloads::new()))
        .unwrap()
        .with_rasterizer(Arc::new(loader.clone()));
    let t = target(ReceiptKind::Fitness);
    for _ in 0..3 {
        service.export(&t, "FITNESS_LOG").await.unwrap();
    }
    assert_eq!(loader.loads.load(Ordering::SeqCst), 1);
    assert_eq!(loader.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn failed_initialization_is_retried_next_time() {
    let loader = CountingLoader {
        fail_first_load: true,
        ..Default::default()
    };
    let service = ExportService::new(fast_config(), Arc::new(MemoryDownloads::new()))
        .unwrap()
        .with_rasterizer(Arc::new(loader.clone()));
    let t = target(ReceiptKind::Social);

    let err = service.export(&t, "SOCIAL_LOG").await.unwrap_err();
    assert!(matches!(err, Error::InitializationError(_)));
    assert_eq!(err.export_kind(), ExportErrorKind::Rasterization);

    assert!(service.export(&t, "SOCIAL_LOG").await.is_ok());
    assert_eq!(loader.loads.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn builtin_rasterizer_matches_target_output() {
    let t = target(ReceiptKind::Game);
    let direct = t.rasterize(2.0, 50_000_000).unwrap();
    let via = PixmapRasterizer {
        max_output_pixels: 50_000_000,
    }
    .rasterize(&t, 2.0)
    .unwrap();
    assert_eq!(direct.png_data, via.png_data);
}
