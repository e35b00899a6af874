// What you SEE:
// • A white signature pad. Drag with the left mouse button to sign.
// • CLEAR (or C) wipes the signature; COPY SIGNATURE (or Y) puts it on the
//   clipboard as a 300x150 image.
// • SUN/MOON (or T) flips light/dark; NOTES (or N) opens the notepad.
// • Notepad: type, ENTER adds, click rows + DEL deletes them, ESC goes back.
// • ESC on the signature screen quits.

mod app;
mod canvas;
mod clipboard;
mod config;
mod draw;
mod error;
mod font;
mod input;
mod notes;
mod raster;
mod recorder;
mod signature;
mod types;
mod ui;

use app::App;
use clipboard::Clipboard;
use config::AppConfig;
use draw::Drawer;
use error::Error;
use types::FrameBuffer;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(
        env_logger::DEFAULT_FILTER_ENV,
        if cfg!(debug_assertions) { "debug" } else { "info" },
    ))
    .init();

    let config = AppConfig::default();
    log::info!(
        "canvas {}x{}, scale x{}, export to {}",
        config.canvas_width,
        config.canvas_height,
        config.scale,
        config
            .export_path
            .as_deref()
            .map_or_else(|| "clipboard only".to_string(), |p| p.display().to_string()),
    );

    let clipboard = Clipboard::new();
    if !clipboard.is_available() {
        log::warn!("running without an OS clipboard; Copy Signature will do nothing");
    }

    let scale = config.window_scale();
    let fps = config.target_fps;
    let mut app = App::new(config, clipboard);
    let (w, h) = app.frame_size();
    let mut drawer = Drawer::new("Digital Signatures", w, h, scale, fps)?;
    let mut screen = FrameBuffer::new(w, h);

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !app.should_quit() {
        let input = drawer.frame_input();
        app.update(&input);
        app.render(&mut screen);
        drawer.present(&screen)?;
    }

    Ok(())
}
