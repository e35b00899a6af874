// Crate-wide error type. Every variant states *where* things went wrong.
// The silent no-ops (copy with no signature, empty note, stray pointer-up)
// never come through here.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("window init error: {0}")]
    WindowInit(String),
    #[error("window update error: {0}")]
    WindowUpdate(String),
    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
    #[error("image export error: {0}")]
    ImageExport(#[from] image::ImageError),
}
