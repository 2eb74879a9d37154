/// Block layout on a fixed-width paper strip

use crate::rendering::document::{Align, Block, ReceiptDocument};
use crate::rendering::font::{self, CELL_WIDTH, GLYPH_HEIGHT};

/// Inner padding of the paper on every side
pub const PAPER_PADDING: u32 = 24;
/// Depth of the torn top and bottom edges
pub const EDGE_DEPTH: u32 = 4;
/// Extra vertical space after each text line
pub const LINE_GAP: u32 = 4;

const METER_HEIGHT: u32 = 6;
const CHIP_PAD: u32 = 4;
const CHIP_GAP: u32 = 6;
const BARCODE_HEIGHT: u32 = 40;
const BARCODE_GAP: u32 = 2;
const SCORE_SCALE: u32 = 3;
const BOX_PAD: u32 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxModel {
    pub margin: u32,
    pub border: u32,
    pub padding: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutBox {
    pub rect: Rect,
    pub box_model: BoxModel,
}

impl LayoutBox {
    pub fn content_width(&self) -> u32 {
        let total = self.box_model.margin + self.box_model.border + self.box_model.padding;
        self.rect.width.saturating_sub(total * 2)
    }

    pub fn content_x(&self) -> i32 {
        let inset = self.box_model.margin + self.box_model.border + self.box_model.padding;
        self.rect.x + inset as i32
    }
}

/// What a positioned node draws
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Text { text: String, scale: u32 },
    Rule { dashed: bool },
    /// Meter track; `fill` in `[0, 1]`
    Track { fill: f64 },
    Frame,
    /// Solid ink block (barcode bar)
    Bar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub rect: Rect,
    pub element: Element,
}

/// A laid out receipt: the paper box and everything placed on it
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub paper: LayoutBox,
    pub nodes: Vec<LayoutNode>,
}

impl PageLayout {
    pub fn width(&self) -> u32 {
        self.paper.rect.width
    }

    pub fn height(&self) -> u32 {
        self.paper.rect.height
    }
}

/// Greedy word wrap to `cols` narrow cells; wide glyphs take two. Words
/// longer than a line are split between characters, which also covers
/// scripts written without spaces.
pub fn wrap_text(text: &str, cols: usize) -> Vec<String> {
    let cols = cols.max(1);
    let mut lines = Vec::new();
    for para in text.split('\n') {
        let mut cur = String::new();
        let mut cur_len = 0usize;
        for word in para.split_whitespace() {
            let word_len = font::text_cells(word);
            let room = if cur_len == 0 { cols } else { cols.saturating_sub(cur_len + 1) };
            if word_len <= room {
                if cur_len > 0 {
                    cur.push(' ');
                    cur_len += 1;
                }
                cur.push_str(word);
                cur_len += word_len;
                continue;
            }
            if cur_len > 0 {
                lines.push(std::mem::take(&mut cur));
                cur_len = 0;
            }
            for ch in word.chars() {
                let w = font::cells(ch);
                if cur_len > 0 && cur_len + w > cols {
                    lines.push(std::mem::take(&mut cur));
                    cur_len = 0;
                }
                cur.push(ch);
                cur_len += w;
            }
        }
        if cur_len > 0 || lines.is_empty() {
            lines.push(cur);
        }
    }
    lines
}

fn text_width(text: &str, scale: u32) -> u32 {
    font::text_cells(text) as u32 * CELL_WIDTH * scale
}

struct Cursor {
    x: i32,
    width: u32,
    y: u32,
    nodes: Vec<LayoutNode>,
}

impl Cursor {
    fn cols(&self, scale: u32) -> usize {
        (self.width / (CELL_WIDTH * scale)).max(1) as usize
    }

    fn aligned_x(&self, w: u32, align: Align) -> i32 {
        match align {
            Align::Left => self.x,
            Align::Center => self.x + (self.width.saturating_sub(w) / 2) as i32,
            Align::Right => self.x + self.width.saturating_sub(w) as i32,
        }
    }

    fn put_text(&mut self, line: String, x: i32, scale: u32) {
        let rect = Rect {
            x,
            y: self.y as i32,
            width: text_width(&line, scale),
            height: GLYPH_HEIGHT * scale,
        };
        self.nodes.push(LayoutNode {
            rect,
            element: Element::Text { text: line, scale },
        });
    }

    fn advance_line(&mut self, scale: u32) {
        self.y += GLYPH_HEIGHT * scale + LINE_GAP;
    }

    fn text(&mut self, text: &str, align: Align, scale: u32) {
        for line in wrap_text(text, self.cols(scale)) {
            let x = self.aligned_x(text_width(&line, scale), align);
            self.put_text(line, x, scale);
            self.advance_line(scale);
        }
    }

    fn row(&mut self, label: &str, value: &str) {
        let cols = self.cols(1);
        let (lc, vc) = (font::text_cells(label), font::text_cells(value));
        if lc + vc < cols {
            self.put_text(label.to_string(), self.x, 1);
            let x = self.aligned_x(text_width(value, 1), Align::Right);
            self.put_text(value.to_string(), x, 1);
            self.advance_line(1);
        } else {
            self.text(label, Align::Left, 1);
            self.text(value, Align::Right, 1);
        }
    }

    fn rule(&mut self, dashed: bool) {
        self.y += LINE_GAP;
        self.nodes.push(LayoutNode {
            rect: Rect {
                x: self.x,
                y: self.y as i32,
                width: self.width,
                height: 1,
            },
            element: Element::Rule { dashed },
        });
        self.y += 1 + LINE_GAP + 2;
    }

    fn meter(&mut self, label: &str, fill: f64, value: &str) {
        self.row(label, value);
        self.nodes.push(LayoutNode {
            rect: Rect {
                x: self.x,
                y: self.y as i32,
                width: self.width,
                height: METER_HEIGHT,
            },
            element: Element::Track {
                fill: fill.clamp(0.0, 1.0),
            },
        });
        self.y += METER_HEIGHT + LINE_GAP + 2;
    }

    fn chips(&mut self, items: &[String]) {
        let chip_h = GLYPH_HEIGHT + CHIP_PAD * 2 - 2;
        let right = self.x + self.width as i32;
        let mut x = self.x;
        for item in items {
            let w = text_width(item, 1).min(self.width.saturating_sub(CHIP_PAD * 2)) + CHIP_PAD * 2;
            if x != self.x && x + w as i32 > right {
                x = self.x;
                self.y += chip_h + CHIP_GAP;
            }
            self.nodes.push(LayoutNode {
                rect: Rect {
                    x,
                    y: self.y as i32,
                    width: w,
                    height: chip_h,
                },
                element: Element::Frame,
            });
            let max_cells = (w.saturating_sub(CHIP_PAD * 2) / CELL_WIDTH) as usize;
            let mut used = 0;
            let label: String = item
                .chars()
                .take_while(|c| {
                    used += font::cells(*c);
                    used <= max_cells
                })
                .collect();
            let rect = Rect {
                x: x + CHIP_PAD as i32,
                y: self.y as i32 + (CHIP_PAD as i32 - 1),
                width: text_width(&label, 1),
                height: GLYPH_HEIGHT,
            };
            self.nodes.push(LayoutNode {
                rect,
                element: Element::Text { text: label, scale: 1 },
            });
            x += (w + CHIP_GAP) as i32;
        }
        self.y += chip_h + LINE_GAP + 2;
    }

    fn score_box(&mut self, caption: &str, score: &str, tier: &str) {
        let top = self.y;
        self.y += BOX_PAD;
        self.text(caption, Align::Center, 1);
        self.text(score, Align::Center, SCORE_SCALE);
        self.text(tier, Align::Center, 1);
        self.y += BOX_PAD - LINE_GAP;
        self.nodes.push(LayoutNode {
            rect: Rect {
                x: self.x,
                y: top as i32,
                width: self.width,
                height: self.y - top,
            },
            element: Element::Frame,
        });
        self.y += LINE_GAP * 2;
    }

    fn barcode(&mut self, widths: impl Iterator<Item = u32> + Clone) {
        let count = widths.clone().count() as u32;
        let total: u32 = widths.clone().sum::<u32>() + BARCODE_GAP * count.saturating_sub(1);
        let mut x = self.aligned_x(total.min(self.width), Align::Center);
        for w in widths {
            self.nodes.push(LayoutNode {
                rect: Rect {
                    x,
                    y: self.y as i32,
                    width: w,
                    height: BARCODE_HEIGHT,
                },
                element: Element::Bar,
            });
            x += (w + BARCODE_GAP) as i32;
        }
        self.y += BARCODE_HEIGHT + LINE_GAP;
    }
}

/// Lay `doc` out on paper `width` units wide. Paper too narrow to hold any
/// content yields an empty, zero-sized layout.
pub fn layout_document(doc: &ReceiptDocument, width: u32) -> PageLayout {
    let box_model = BoxModel {
        margin: 0,
        border: 0,
        padding: PAPER_PADDING,
    };
    let mut paper = LayoutBox {
        rect: Rect {
            x: 0,
            y: 0,
            width,
            height: 0,
        },
        box_model,
    };
    if paper.content_width() < CELL_WIDTH * 2 {
        paper.rect.width = 0;
        return PageLayout {
            paper,
            nodes: Vec::new(),
        };
    }

    let mut c = Cursor {
        x: paper.content_x(),
        width: paper.content_width(),
        y: EDGE_DEPTH + PAPER_PADDING,
        nodes: Vec::new(),
    };
    for block in &doc.blocks {
        match block {
            Block::Text { text, align, scale } => c.text(text, *align, (*scale).max(1)),
            Block::Row { label, value } => c.row(label, value),
            Block::Rule { dashed } => c.rule(*dashed),
            Block::Meter { label, fill, value } => c.meter(label, *fill, value),
            Block::Chips { items } => c.chips(items),
            Block::ScoreBox {
                caption,
                score,
                tier,
            } => c.score_box(caption, score, tier),
            Block::Barcode { bars } => c.barcode(bars.iter().map(|b| b.width)),
            Block::Spacer { height } => c.y += height,
        }
    }

    paper.rect.height = c.y + PAPER_PADDING + EDGE_DEPTH;
    PageLayout {
        paper,
        nodes: c.nodes,
    }
}
