//! Receipt document: the block tree one record renders to
//!
//! [`render_receipt`] is the single renderer for every kind. It walks the
//! kind's schema and turns each field into blocks, pulling derived values
//! from [`DerivedMetrics`] and all display text from the label lookup. The
//! footer timestamp is an input, so the same arguments always give the same
//! document.

use serde::Serialize;

use crate::barcode::{timestamp_tail, BarSegment};
use crate::derived::DerivedMetrics;
use crate::labels::{LabelLookup, Language};
use crate::record::{ReceiptKind, ReceiptRecord};
use crate::schema::{schema_for, FieldSpec, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// One vertical slice of the receipt
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum Block {
    /// Wrapped text at an integer glyph scale
    Text { text: String, align: Align, scale: u32 },
    /// Label on the left, value flush right
    Row { label: String, value: String },
    Rule { dashed: bool },
    /// Labeled meter; `fill` is already clamped to `[0, 1]`
    Meter { label: String, fill: f64, value: String },
    /// Outlined chips flowing left to right
    Chips { items: Vec<String> },
    /// Framed, centered lines; the middle line is drawn large
    ScoreBox { caption: String, score: String, tier: String },
    Barcode { bars: Vec<BarSegment> },
    Spacer { height: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptDocument {
    pub kind: ReceiptKind,
    pub language: Language,
    pub blocks: Vec<Block>,
}

/// Format a number without a trailing `.0` for whole values.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "0".to_string();
    }
    let s = if n.fract() == 0.0 {
        // whole values of any magnitude, without going through an integer type
        format!("{:.0}", n)
    } else {
        let s = format!("{:.2}", n);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    };
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}

/// Text shown next to a meter: `85%` on a 100 scale, `7/10` otherwise.
pub fn meter_text(value: f64, max: f64) -> String {
    let v = clamp_metric(value, max);
    if max == 100.0 {
        format!("{}%", format_number(v))
    } else {
        format!("{}/{}", format_number(v), format_number(max))
    }
}

/// Clamp a stored metric into its display range `[0, max]`.
pub fn clamp_metric(value: f64, max: f64) -> f64 {
    if !value.is_finite() || max <= 0.0 {
        return 0.0;
    }
    value.clamp(0.0, max)
}

fn meter_fill(value: f64, max: f64) -> f64 {
    if max <= 0.0 {
        0.0
    } else {
        clamp_metric(value, max) / max
    }
}

fn stars(value: f64, max: u32) -> String {
    let filled = clamp_metric(value.round(), max as f64) as usize;
    let max = max as usize;
    format!("{}{}", "*".repeat(filled), "-".repeat(max - filled))
}

fn text(text: impl Into<String>, align: Align, scale: u32) -> Block {
    Block::Text {
        text: text.into(),
        align,
        scale,
    }
}

struct Renderer<'a> {
    record: &'a ReceiptRecord,
    derived: &'a DerivedMetrics,
    labels: &'a dyn LabelLookup,
    lang: Language,
    blocks: Vec<Block>,
}

impl Renderer<'_> {
    fn label(&self, key: &str) -> String {
        self.labels.lookup(key, self.lang)
    }

    fn option(&self, dict: &str, value: &str) -> String {
        self.label(&format!("{}.{}", dict, value))
    }

    fn field(&mut self, spec: &FieldSpec) {
        let (r, derived) = (self.record, self.derived);
        match spec.view {
            View::Row => {
                let value = r.text(spec.key).trim();
                if !value.is_empty() {
                    self.row(spec.label, value.to_string());
                }
            }
            View::NumberRow { unit } => {
                if let Some(n) = r.number(spec.key) {
                    self.row(spec.label, format!("{} {}", format_number(n), unit));
                }
            }
            View::PriceRow { currency } => {
                if let Some(p) = r.number(spec.key).filter(|p| p.is_finite()) {
                    self.row(spec.label, format!("{}{}", currency, format_number(p)));
                }
            }
            View::ChoiceRow { options } => {
                let value = r.text(spec.key);
                if !value.is_empty() {
                    let shown = self.option(options, value);
                    self.row(spec.label, shown);
                }
            }
            View::Highlight => {
                let value = r.text(spec.key).trim().to_string();
                if !value.is_empty() {
                    self.highlight(spec.label, value);
                }
            }
            View::HighlightChoice { options } => {
                let value = r.text(spec.key);
                if !value.is_empty() {
                    let shown = self.option(options, value);
                    self.highlight(spec.label, shown);
                }
            }
            View::Bars { max, labels } => {
                if let Some(metrics) = r.metrics(spec.key) {
                    for (key, value) in metrics {
                        let block = Block::Meter {
                            label: self.option(labels, key),
                            fill: meter_fill(*value, max),
                            value: meter_text(*value, max),
                        };
                        self.blocks.push(block);
                    }
                }
            }
            View::Bar { max } => {
                if let Some(value) = r.number(spec.key) {
                    let block = Block::Meter {
                        label: self.label(spec.label),
                        fill: meter_fill(value, max),
                        value: meter_text(value, max),
                    };
                    self.blocks.push(block);
                }
            }
            View::Stars { max } => {
                if let Some(value) = r.number(spec.key) {
                    self.row(spec.label, stars(value, max));
                }
            }
            View::Paragraph => self.paragraph(spec, false),
            View::Quote => self.paragraph(spec, true),
            View::Items { currency } => self.items(spec.key, currency),
            View::Chips { labels } => {
                let Some(toggles) = r.toggles(spec.key) else {
                    return;
                };
                let items: Vec<String> = toggles
                    .iter()
                    .filter(|(_, on)| **on)
                    .map(|(key, _)| match labels {
                        Some(dict) => self.option(dict, key),
                        None => key.clone(),
                    })
                    .collect();
                if !items.is_empty() {
                    self.blocks.push(Block::Chips { items });
                }
            }
            View::List => {
                let entries = r
                    .list(spec.key)
                    .iter()
                    .map(|e| e.trim())
                    .filter(|e| !e.is_empty())
                    .enumerate()
                    .map(|(i, e)| text(format!("{}. {}", i + 1, e), Align::Left, 1))
                    .collect::<Vec<_>>();
                self.blocks.extend(entries);
            }
            View::SleepDuration { .. } => {
                if let Some(d) = &derived.sleep_duration {
                    self.row(spec.label, d.clone());
                }
            }
            View::SleepScore => {
                if let Some(s) = &derived.sleep_score {
                    let block = Block::ScoreBox {
                        caption: self.label(spec.label),
                        score: s.score.to_string(),
                        tier: s.label.clone(),
                    };
                    self.blocks.push(block);
                }
            }
            View::CaffeineStatus => {
                if let Some(c) = &derived.caffeine {
                    self.row(spec.label, format!("{} {}", c.icon, c.label));
                }
            }
        }
    }

    fn row(&mut self, label_key: &str, value: String) {
        let label = self.label(label_key);
        self.blocks.push(Block::Row { label, value });
    }

    fn highlight(&mut self, label_key: &str, value: String) {
        self.blocks.push(Block::Rule { dashed: true });
        if !label_key.is_empty() {
            let label = self.label(label_key);
            self.blocks.push(text(label, Align::Center, 1));
        }
        self.blocks.push(text(value, Align::Center, 2));
        self.blocks.push(Block::Rule { dashed: true });
    }

    fn paragraph(&mut self, spec: &FieldSpec, quoted: bool) {
        let body = self.record.text(spec.key).trim();
        if body.is_empty() {
            return;
        }
        let body = if quoted {
            format!("\"{}\"", body)
        } else {
            body.to_string()
        };
        if !spec.label.is_empty() {
            let label = self.label(spec.label);
            self.blocks.push(text(format!("{}:", label), Align::Left, 1));
        }
        self.blocks.push(text(body, Align::Left, 1));
        self.blocks.push(Block::Spacer { height: 4 });
    }

    fn items(&mut self, field: &str, currency: &str) {
        let (record, derived) = (self.record, self.derived);
        for item in record.items(field).iter().filter(|i| i.is_displayable()) {
            let value = match item.price.filter(|p| p.is_finite()) {
                Some(p) => format!("{}{}", currency, format_number(p)),
                None => "-".to_string(),
            };
            self.blocks.push(Block::Row {
                label: item.name.trim().to_string(),
                value,
            });
        }
        if let Some(total) = derived.total(field).filter(|t| t.has_total) {
            let amount = format!("{}{}", currency, format_number(total.total));
            self.blocks.push(Block::Rule { dashed: true });
            self.row("common.total", amount);
        }
    }
}

/// Render `record` into a receipt document.
///
/// `timestamp_millis` is the epoch-millisecond stamp printed under the
/// barcode; only its last 8 digits appear.
pub fn render_receipt(
    record: &ReceiptRecord,
    labels: &dyn LabelLookup,
    lang: Language,
    timestamp_millis: u128,
) -> ReceiptDocument {
    let derived = DerivedMetrics::compute(record, labels, lang);
    render_with(record, &derived, labels, lang, timestamp_millis)
}

/// Render with metrics already derived for the same record and language.
pub fn render_with(
    record: &ReceiptRecord,
    derived: &DerivedMetrics,
    labels: &dyn LabelLookup,
    lang: Language,
    timestamp_millis: u128,
) -> ReceiptDocument {
    let schema = schema_for(record.kind);
    let mut r = Renderer {
        record,
        derived,
        labels,
        lang,
        blocks: Vec::new(),
    };

    let title = r.label(&schema.title_key());
    let subtitle = r.label(&schema.subtitle_key());
    r.blocks.push(text(title, Align::Center, 2));
    r.blocks.push(text(subtitle, Align::Center, 1));
    r.blocks.push(Block::Rule { dashed: false });

    for section in schema.sections {
        if let Some(heading) = section.heading {
            let h = format!("-- {} --", r.label(heading));
            r.blocks.push(Block::Spacer { height: 4 });
            r.blocks.push(text(h, Align::Center, 1));
        }
        for spec in section.fields {
            r.field(spec);
        }
    }

    let tagline = r.label(&schema.tagline_key());
    r.blocks.push(Block::Rule { dashed: false });
    r.blocks.push(text(tagline, Align::Center, 1));
    r.blocks.push(Block::Barcode {
        bars: derived.barcode.clone(),
    });
    r.blocks
        .push(text(timestamp_tail(timestamp_millis), Align::Center, 1));

    ReceiptDocument {
        kind: record.kind,
        language: lang,
        blocks: r.blocks,
    }
}
