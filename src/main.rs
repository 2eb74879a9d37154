use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use receiptgen::derived::DerivedMetrics;
use receiptgen::export::{ExportOutcome, ExportService, FsDownloads};
use receiptgen::labels::{BundledLabels, Language};
use receiptgen::platform::{DeviceEmulation, SystemDevice};
use receiptgen::record::{ReceiptKind, ReceiptRecord};
use receiptgen::session::{ReceiptSession, SEED_DATE_FORMAT};
use receiptgen::ExportConfig;

#[derive(Parser)]
#[command(name = "receiptgen", version, about = "Render life-event records as receipt images")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List receipt kinds and their file prefixes
    Kinds,
    /// Print the sample record of a kind as JSON
    Sample {
        #[arg(long)]
        kind: ReceiptKind,
    },
    /// Print the derived metrics of a record as JSON
    Summary {
        #[arg(long)]
        kind: ReceiptKind,
        /// Record JSON; the sample record when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, default_value = "zh")]
        lang: Language,
    },
    /// Render a record to PNG
    Render {
        #[arg(long)]
        kind: ReceiptKind,
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, default_value = "zh")]
        lang: Language,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Natural device pixel ratio to emulate
        #[arg(long)]
        dpr: Option<f64>,
        /// Export config JSON
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn load_record(kind: ReceiptKind, input: Option<&PathBuf>) -> anyhow::Result<Option<ReceiptRecord>> {
    let Some(path) = input else {
        return Ok(None);
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading record from {}", path.display()))?;
    let record: ReceiptRecord = serde_json::from_str(&text)
        .with_context(|| format!("parsing record in {}", path.display()))?;
    if record.kind != kind {
        bail!("{} holds a {} record, not {}", path.display(), record.kind, kind);
    }
    Ok(Some(record))
}

fn today() -> String {
    chrono::Local::now().format(SEED_DATE_FORMAT).to_string()
}

fn open_session(
    kind: ReceiptKind,
    record: Option<ReceiptRecord>,
    lang: Language,
    exporter: ExportService,
) -> ReceiptSession {
    let labels = Arc::new(BundledLabels);
    match record {
        Some(r) => ReceiptSession::with_record(r, lang, labels, Arc::new(exporter)),
        None => ReceiptSession::new(kind, lang, labels, Arc::new(exporter)),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Kinds => {
            for kind in ReceiptKind::ALL {
                println!("{:<10} {}", kind.slug(), kind.file_prefix());
            }
        }
        Command::Sample { kind } => {
            let record = ReceiptRecord::seeded(kind, &today());
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Summary { kind, input, lang } => {
            let record = match load_record(kind, input.as_ref())? {
                Some(r) => r,
                None => ReceiptRecord::seeded(kind, &today()),
            };
            let derived = DerivedMetrics::compute(&record, &BundledLabels, lang);
            println!("{}", serde_json::to_string_pretty(&derived)?);
        }
        Command::Render {
            kind,
            input,
            lang,
            out_dir,
            dpr,
            config,
        } => {
            let cfg = match &config {
                Some(p) => ExportConfig::from_json_file(p)
                    .with_context(|| format!("loading config from {}", p.display()))?,
                None => ExportConfig::default(),
            };
            let device = Arc::new(SystemDevice::new());
            if let Some(dpr) = dpr {
                let mut m = device.metrics();
                m.dpr = dpr;
                device.set_metrics(m);
            }
            let exporter = ExportService::new(cfg, Arc::new(FsDownloads::new(&out_dir)))?
                .with_device(device);
            let record = load_record(kind, input.as_ref())?;
            let mut session = open_session(kind, record, lang, exporter);
            session.render();
            match session.export().await {
                Ok(ExportOutcome::Saved(file)) => {
                    println!(
                        "{} ({}x{} @{}x)",
                        file.location.display(),
                        file.width,
                        file.height,
                        file.pixel_ratio
                    );
                }
                Ok(ExportOutcome::AlreadyInFlight) => bail!("an export is already running"),
                Err(e) => {
                    let msg = session.last_error_message().unwrap_or_default();
                    return Err(anyhow::Error::new(e).context(msg));
                }
            }
        }
    }
    Ok(())
}
