//! One receipt page: the record being edited and its live preview
//!
//! A [`ReceiptSession`] exclusively owns its record. Edits come in through
//! [`ReceiptSession::on_change`] or [`ReceiptSession::apply`]; everything else
//! reads the record. At most one render target is live at a time: rendering
//! again detaches the previous one, so a stale preview can never be exported.

use std::sync::Arc;

use serde_json::Value;

use crate::derived::DerivedMetrics;
use crate::error::{ExportFailure, Result};
use crate::export::{ExportOutcome, ExportService};
use crate::labels::{LabelLookup, Language};
use crate::record::{Edit, ReceiptKind, ReceiptRecord};
use crate::rendering::document::render_with;
use crate::rendering::RenderTarget;

/// Date format of seeded records
pub const SEED_DATE_FORMAT: &str = "%Y/%m/%d";

pub struct ReceiptSession {
    record: ReceiptRecord,
    language: Language,
    labels: Arc<dyn LabelLookup>,
    target: Option<RenderTarget>,
    exporter: Arc<ExportService>,
    last_error: Option<ExportFailure>,
}

impl ReceiptSession {
    /// Open a page for `kind`, seeded with sample data dated today.
    pub fn new(
        kind: ReceiptKind,
        language: Language,
        labels: Arc<dyn LabelLookup>,
        exporter: Arc<ExportService>,
    ) -> Self {
        let today = chrono::Local::now().format(SEED_DATE_FORMAT).to_string();
        Self::with_record(ReceiptRecord::seeded(kind, &today), language, labels, exporter)
    }

    /// Open a page for an existing record.
    pub fn with_record(
        record: ReceiptRecord,
        language: Language,
        labels: Arc<dyn LabelLookup>,
        exporter: Arc<ExportService>,
    ) -> Self {
        log::debug!("session: opened {} ({})", record.kind, language);
        Self {
            record,
            language,
            labels,
            target: None,
            exporter,
            last_error: None,
        }
    }

    pub fn kind(&self) -> ReceiptKind {
        self.record.kind
    }

    pub fn record(&self) -> &ReceiptRecord {
        &self.record
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Flip between the two languages and return the new one.
    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggled();
        self.language
    }

    /// Form callback: `path` names the field (or part of it) that changed.
    pub fn on_change(&mut self, path: &str, value: Value) -> Result<()> {
        self.record.apply_change(path, value)
    }

    pub fn apply(&mut self, edit: Edit) -> Result<()> {
        self.record.apply(edit)
    }

    /// Metrics for the record as it is now
    pub fn derived(&self) -> DerivedMetrics {
        DerivedMetrics::compute(&self.record, self.labels.as_ref(), self.language)
    }

    /// Render the current record, stamped with the current time.
    pub fn render(&mut self) -> RenderTarget {
        let now = u128::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
        self.render_at(now)
    }

    /// Render the current record stamped with `timestamp_millis`, replacing
    /// the live target.
    pub fn render_at(&mut self, timestamp_millis: u128) -> RenderTarget {
        if let Some(old) = self.target.take() {
            old.detach();
        }
        let derived = self.derived();
        let doc = render_with(
            &self.record,
            &derived,
            self.labels.as_ref(),
            self.language,
            timestamp_millis,
        );
        let target = RenderTarget::mount(doc, self.exporter.config().receipt_width);
        self.target = Some(target.clone());
        target
    }

    /// The live render target, if any
    pub fn target(&self) -> Option<&RenderTarget> {
        self.target.as_ref()
    }

    /// Close the preview. Later exports fail as not visible.
    pub fn unmount(&mut self) {
        if let Some(t) = self.target.take() {
            t.detach();
        }
    }

    /// Export the live preview. Renders first when nothing is mounted yet.
    ///
    /// A failure is also kept as [`ReceiptSession::last_error`] until the
    /// next attempt.
    pub async fn export(&mut self) -> Result<ExportOutcome> {
        let target = match &self.target {
            Some(t) => t.clone(),
            None => self.render(),
        };
        self.export_target(&target).await
    }

    /// Export a specific target, live or not.
    pub async fn export_target(&mut self, target: &RenderTarget) -> Result<ExportOutcome> {
        let prefix = self.record.kind.file_prefix();
        let result = self.exporter.export(target, prefix).await;
        match &result {
            Ok(ExportOutcome::Saved(_)) => self.last_error = None,
            Ok(ExportOutcome::AlreadyInFlight) => {}
            Err(e) => self.last_error = Some(ExportFailure::from(e)),
        }
        result
    }

    /// Whether the export control should be disabled
    pub fn is_exporting(&self) -> bool {
        self.exporter.is_busy()
    }

    pub fn last_error(&self) -> Option<&ExportFailure> {
        self.last_error.as_ref()
    }

    /// The last failure as text for the current language
    pub fn last_error_message(&self) -> Option<String> {
        self.last_error
            .as_ref()
            .map(|f| f.user_message(self.labels.as_ref(), self.language))
    }
}
