/// CPU rasterizer for receipt paint commands

use crate::error::{Error, Result};
use crate::rendering::font::{glyph, GLYPH_HEIGHT};
use crate::rendering::paint::{PaintCommand, Rgba};
use crate::rendering::Screenshot;

/// RGBA8 pixel buffer, straight alpha, fully transparent when created
#[derive(Debug, Clone)]
pub struct Pixmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Pixmap {
    /// Allocate a pixmap, refusing sizes above `max_pixels` and reporting a
    /// failed allocation as `OutOfMemory` instead of aborting.
    pub fn try_new(width: u32, height: u32, max_pixels: u64) -> Result<Self> {
        let pixels = u64::from(width) * u64::from(height);
        if pixels > max_pixels {
            return Err(Error::OutOfMemory(format!(
                "{}x{} output exceeds the {} pixel budget",
                width, height, max_pixels
            )));
        }
        let len = usize::try_from(pixels)
            .ok()
            .and_then(|p| p.checked_mul(4))
            .ok_or_else(|| Error::OutOfMemory(format!("{}x{} output is not addressable", width, height)))?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|e| Error::OutOfMemory(format!("pixel buffer of {} bytes: {}", len, e)))?;
        data.resize(len, 0);
        Ok(Self { width, height, data })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some((self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]))
    }

    /// Fill the device-space half-open box `[x0, x1) x [y0, y1)`.
    fn fill(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, rgba: Rgba) {
        let x0 = x0.clamp(0, self.width as i64) as usize;
        let x1 = x1.clamp(0, self.width as i64) as usize;
        let y0 = y0.clamp(0, self.height as i64) as usize;
        let y1 = y1.clamp(0, self.height as i64) as usize;
        let stride = self.width as usize * 4;
        let px = [rgba.0, rgba.1, rgba.2, rgba.3];
        for y in y0..y1 {
            let row = &mut self.data[y * stride + x0 * 4..y * stride + x1 * 4];
            for chunk in row.chunks_exact_mut(4) {
                chunk.copy_from_slice(&px);
            }
        }
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder
                .write_header()
                .map_err(|e| Error::RasterError(format!("png header: {}", e)))?;
            writer
                .write_image_data(&self.data)
                .map_err(|e| Error::RasterError(format!("png data: {}", e)))?;
            writer
                .finish()
                .map_err(|e| Error::RasterError(format!("png finish: {}", e)))?;
        }
        Ok(out)
    }
}

/// Device size of a logical extent at `ratio`, rounded up.
pub fn device_len(logical: u32, ratio: f64) -> u32 {
    // the epsilon keeps 380 * 1.1 from spilling into an extra column
    ((logical as f64) * ratio - 1e-9).ceil().max(0.0) as u32
}

/// Draws logical-unit commands onto a pixmap scaled by a pixel ratio.
struct Canvas<'a> {
    pixmap: &'a mut Pixmap,
    ratio: f64,
}

impl Canvas<'_> {
    fn map(&self, v: f64) -> i64 {
        (v * self.ratio).round() as i64
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, rgba: Rgba) {
        let (x0, y0) = (self.map(x), self.map(y));
        let (x1, y1) = (self.map(x + w), self.map(y + h));
        // keep hairlines visible at ratios below 1
        let x1 = x1.max(x0 + i64::from(w > 0.0));
        let y1 = y1.max(y0 + i64::from(h > 0.0));
        self.pixmap.fill(x0, y0, x1, y1, rgba);
    }

    fn stroke(&mut self, x: f64, y: f64, w: f64, h: f64, rgba: Rgba) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        self.rect(x, y, w, 1.0, rgba);
        self.rect(x, y + h - 1.0, w, 1.0, rgba);
        self.rect(x, y, 1.0, h, rgba);
        self.rect(x + w - 1.0, y, 1.0, h, rgba);
    }

    fn text(&mut self, x: f64, y: f64, text: &str, scale: u32, rgba: Rgba) {
        let s = scale.max(1) as f64;
        let mut gx = x;
        for c in text.chars() {
            let g = glyph(c);
            for row in 0..GLYPH_HEIGHT {
                let gy = y + row as f64 * s;
                // draw horizontal runs of set bits as one rect
                let mut col = 0u32;
                while col < g.width() {
                    if !g.is_set(col, row) {
                        col += 1;
                        continue;
                    }
                    let start = col;
                    while g.is_set(col, row) {
                        col += 1;
                    }
                    let run = (col - start) as f64;
                    self.rect(gx + start as f64 * s, gy, run * s, s, rgba);
                }
            }
            gx += g.width() as f64 * s;
        }
    }

    fn draw(&mut self, cmd: &PaintCommand) {
        match cmd {
            PaintCommand::SolidRect {
                x,
                y,
                width,
                height,
                rgba,
            } => self.rect(*x as f64, *y as f64, *width as f64, *height as f64, *rgba),
            PaintCommand::StrokeRect {
                x,
                y,
                width,
                height,
                rgba,
            } => self.stroke(*x as f64, *y as f64, *width as f64, *height as f64, *rgba),
            PaintCommand::Text {
                x,
                y,
                text,
                scale,
                rgba,
            } => self.text(*x as f64, *y as f64, text, *scale, *rgba),
        }
    }
}

/// Rasterize `commands` for a `width` x `height` logical page at
/// `pixel_ratio` and encode the result as PNG.
pub fn rasterize(
    commands: &[PaintCommand],
    width: u32,
    height: u32,
    pixel_ratio: f64,
    max_pixels: u64,
) -> Result<Screenshot> {
    if !pixel_ratio.is_finite() || pixel_ratio <= 0.0 {
        return Err(Error::RasterError(format!("invalid pixel ratio {}", pixel_ratio)));
    }
    let (dw, dh) = (device_len(width, pixel_ratio), device_len(height, pixel_ratio));
    if dw == 0 || dh == 0 {
        return Err(Error::RasterError(format!("empty {}x{} canvas", dw, dh)));
    }
    let mut pixmap = Pixmap::try_new(dw, dh, max_pixels)?;
    let mut canvas = Canvas {
        pixmap: &mut pixmap,
        ratio: pixel_ratio,
    };
    for cmd in commands {
        canvas.draw(cmd);
    }
    log::debug!(
        "raster: {} commands at {}x -> {}x{}",
        commands.len(),
        pixel_ratio,
        dw,
        dh
    );
    Ok(Screenshot {
        width: dw,
        height: dh,
        png_data: pixmap.encode_png()?,
    })
}
