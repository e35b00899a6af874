//! Runtime configuration for the signature pad.

use std::path::PathBuf;

use minifb::Scale;

/// Drawing surface width; also the exported raster width.
const DEFAULT_CANVAS_WIDTH: usize = 300;
/// Drawing surface height; also the exported raster height.
const DEFAULT_CANVAS_HEIGHT: usize = 150;
/// Default window pixel scale.
const DEFAULT_SCALE: u32 = 2;
/// Redraw rate of the main loop.
const DEFAULT_TARGET_FPS: usize = 60;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Drawing surface size in surface units (1 unit = 1 buffer pixel).
    pub canvas_width: usize,
    pub canvas_height: usize,
    /// Window pixel scale: 1, 2 or 4.
    pub scale: u32,
    /// When set, "Copy Signature" also writes the raster here as PNG.
    pub export_path: Option<PathBuf>,
    pub target_fps: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            scale: std::env::var("DIGISIGN_SCALE")
                .ok()
                .and_then(|s| parse_scale(&s))
                .unwrap_or(DEFAULT_SCALE),
            export_path: std::env::var_os("DIGISIGN_EXPORT_PATH")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            target_fps: DEFAULT_TARGET_FPS,
        }
    }
}

impl AppConfig {
    pub fn window_scale(&self) -> Scale {
        match self.scale {
            1 => Scale::X1,
            4 => Scale::X4,
            _ => Scale::X2,
        }
    }
}

fn parse_scale(raw: &str) -> Option<u32> {
    match raw.trim().parse::<u32>().ok()? {
        s @ (1 | 2 | 4) => Some(s),
        _ => None,
    }
}
