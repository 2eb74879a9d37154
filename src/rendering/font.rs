//! Bitmap glyphs from GNU Unifont
//!
//! The font ships as its `.hex` source under `assets/fonts` (SIL OFL 1.1): one
//! line per code point, `XXXX:` then 32 hex digits for a narrow 8x16 glyph or
//! 64 for a wide 16x16 one, most significant bit leftmost. It covers the Basic
//! Multilingual Plane, CJK included, so both label languages draw real glyphs.
//!
//! The table is parsed once, on first use. Characters it lacks draw as an
//! outlined box so missing coverage is visible on the receipt.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::{Error, Result};

/// Narrow cell width in logical units at scale 1; wide glyphs take two cells
pub const CELL_WIDTH: u32 = 8;

/// Glyph height in logical units at scale 1
pub const GLYPH_HEIGHT: u32 = 16;

const UNIFONT_HEX: &str = include_str!("../../assets/fonts/unifont-13.0.06.hex");

static TABLE: OnceLock<GlyphTable> = OnceLock::new();

/// One 16-row bitmap, 8 or 16 pixels wide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    width: u32,
    rows: [u16; 16],
}

impl Glyph {
    const BLANK: Glyph = Glyph {
        width: CELL_WIDTH,
        rows: [0; 16],
    };

    const TOFU: Glyph = Glyph {
        width: CELL_WIDTH,
        rows: [
            0x0000, 0x7E00, 0x4200, 0x4200, 0x4200, 0x4200, 0x4200, 0x4200, 0x4200, 0x4200,
            0x4200, 0x4200, 0x4200, 0x7E00, 0x0000, 0x0000,
        ],
    };

    /// Decode the bitmap half of a `.hex` line.
    fn from_hex(digits: &str) -> Option<Glyph> {
        let bytes = hex::decode(digits).ok()?;
        let mut rows = [0u16; 16];
        let width = match bytes.len() {
            16 => {
                for (row, b) in rows.iter_mut().zip(&bytes) {
                    *row = u16::from(*b) << 8;
                }
                CELL_WIDTH
            }
            32 => {
                for (row, pair) in rows.iter_mut().zip(bytes.chunks_exact(2)) {
                    *row = u16::from_be_bytes([pair[0], pair[1]]);
                }
                CELL_WIDTH * 2
            }
            _ => return None,
        };
        Some(Glyph { width, rows })
    }

    /// Advance width in logical units at scale 1.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of narrow cells the glyph occupies.
    pub fn cells(&self) -> usize {
        (self.width / CELL_WIDTH) as usize
    }

    /// Whether the pixel at column `x`, row `y` is inked.
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        x < self.width && y < GLYPH_HEIGHT && self.rows[y as usize] & (0x8000 >> x) != 0
    }
}

/// Code point to bitmap map parsed from a `.hex` source
#[derive(Debug, Default)]
pub struct GlyphTable {
    glyphs: HashMap<char, Glyph>,
}

impl GlyphTable {
    /// Parse `.hex` text, skipping lines that do not decode.
    pub fn parse(src: &str) -> Self {
        let mut glyphs = HashMap::with_capacity(src.len() / 60);
        let mut skipped = 0usize;
        for line in src.lines().filter(|l| !l.trim().is_empty()) {
            let parsed = line.split_once(':').and_then(|(cp, bits)| {
                let c = u32::from_str_radix(cp.trim(), 16).ok().and_then(char::from_u32)?;
                Some((c, Glyph::from_hex(bits.trim())?))
            });
            match parsed {
                Some((c, g)) => {
                    glyphs.insert(c, g);
                }
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            log::warn!("skipped {} malformed glyph lines", skipped);
        }
        GlyphTable { glyphs }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn get(&self, c: char) -> Option<Glyph> {
        self.glyphs.get(&c).copied()
    }
}

fn table() -> &'static GlyphTable {
    TABLE.get_or_init(|| {
        let table = GlyphTable::parse(UNIFONT_HEX);
        log::debug!("loaded {} bundled glyphs", table.len());
        table
    })
}

/// Parse the bundled font if that has not happened yet, returning its glyph count.
pub fn load() -> Result<usize> {
    let table = table();
    if table.is_empty() {
        return Err(Error::FontError("bundled font has no glyphs".into()));
    }
    Ok(table.len())
}

/// Whether the bundled font has been parsed.
pub fn is_loaded() -> bool {
    TABLE.get().is_some()
}

/// Bitmap for `c`, if the font covers it.
pub fn lookup(c: char) -> Option<Glyph> {
    table().get(c)
}

/// Bitmap for `c`, falling back to the missing-glyph box.
pub fn glyph(c: char) -> Glyph {
    if c.is_whitespace() {
        return Glyph::BLANK;
    }
    lookup(c).unwrap_or(Glyph::TOFU)
}

/// Narrow cells `c` occupies when drawn.
pub fn cells(c: char) -> usize {
    glyph(c).cells()
}

/// Narrow cells `text` occupies when drawn on one line.
pub fn text_cells(text: &str) -> usize {
    text.chars().map(cells).sum()
}

/// Whether every character of `text` has a real glyph.
pub fn covers(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || lookup(c).is_some())
}

/// Characters of `text` that would draw as the missing-glyph box.
pub fn missing(text: &str) -> Vec<char> {
    text.chars()
        .filter(|c| !c.is_whitespace() && lookup(*c).is_none())
        .collect()
}
