// Software stroke rendering, shared by the on-screen surface and the
// exported bitmap. Both replay the same rule: consecutive points of a stroke
// are joined by straight segments drawn with a square 2-pixel pen.

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::Error;
use crate::types::{FrameBuffer, Point, Rect, Signature, Stroke};

/// Pen width in pixels, on screen and in the export.
pub const STROKE_WIDTH: i32 = 2;
/// Stroke color, 0x00RRGGBB (black).
pub const INK: u32 = 0x00_00_00_00;
/// Surface color behind the strokes on screen.
pub const PAPER: u32 = 0x00_FF_FF_FF;
const INK_RGBA: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[inline]
fn snap(v: f32) -> i32 {
    v.round() as i32
}

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

pub fn fill_rect(fb: &mut FrameBuffer, r: Rect, color: u32) {
    for y in r.y..r.y + r.h {
        for x in r.x..r.x + r.w {
            put_pixel(fb, x, y, color);
        }
    }
}

/// 1-pixel outline just outside `r`.
/// Visual: the thin frame around the signature pad and the editor box.
pub fn outline_rect(fb: &mut FrameBuffer, r: Rect, color: u32) {
    let (x0, y0, x1, y1) = (r.x - 1, r.y - 1, r.x + r.w, r.y + r.h);
    for x in x0..=x1 {
        put_pixel(fb, x, y0, color);
        put_pixel(fb, x, y1, color);
    }
    for y in y0..=y1 {
        put_pixel(fb, x0, y, color);
        put_pixel(fb, x1, y, color);
    }
}

/// Bresenham from (x0,y0) to (x1,y1); `plot` sees every pixel, endpoints included.
fn for_each_line_pixel(x0: i32, y0: i32, x1: i32, y1: i32, plot: &mut impl FnMut(i32, i32)) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        plot(x0, y0);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/// Square pen centred on the pixel corner at (x, y).
/// Visual: every point of a line becomes a 2x2 dot, so strokes read as 2 px wide.
fn pen(x: i32, y: i32, plot: &mut impl FnMut(i32, i32)) {
    let lo = -(STROKE_WIDTH / 2);
    for dy in 0..STROKE_WIDTH {
        for dx in 0..STROKE_WIDTH {
            plot(x + lo + dx, y + lo + dy);
        }
    }
}

/// Join consecutive points with straight segments. A one-point stroke has
/// no segments and leaves no mark.
pub fn trace_polyline(points: &[Point], plot: &mut impl FnMut(i32, i32)) {
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        for_each_line_pixel(snap(a.x), snap(a.y), snap(b.x), snap(b.y), &mut |x, y| {
            pen(x, y, &mut *plot)
        });
    }
}

/// Draw the surface at `area`: white paper, committed strokes, then the
/// stroke still being dragged. Ink never leaves `area`.
/// Visual: the line follows your pointer while you drag, and stays after release.
pub fn render_live(fb: &mut FrameBuffer, area: Rect, strokes: &[Stroke], in_progress: Option<&[Point]>) {
    fill_rect(fb, area, PAPER);
    let mut plot = |x: i32, y: i32| {
        if x >= 0 && y >= 0 && x < area.w && y < area.h {
            put_pixel(fb, area.x + x, area.y + y, INK);
        }
    };
    for stroke in strokes {
        trace_polyline(stroke.points(), &mut plot);
    }
    if let Some(points) = in_progress {
        trace_polyline(points, &mut plot);
    }
}

/// Render the signature into a fresh `width` x `height` bitmap: transparent
/// background, black 2-pixel strokes at their stored coordinates. Anything
/// past the edges is simply not drawn.
pub fn export_raster(signature: &Signature, width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(width, height);
    let mut plot = |x: i32, y: i32| {
        if x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
            img.put_pixel(x as u32, y as u32, INK_RGBA);
        }
    };
    for stroke in signature.strokes() {
        trace_polyline(stroke.points(), &mut plot);
    }
    img
}

/// Write an exported signature to disk as PNG.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<(), Error> {
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
