// OS clipboard access for "Copy Signature".
// If the OS clipboard can't be reached (headless session, no display server),
// copies are logged and dropped instead of failing the app.

use std::borrow::Cow;

use image::RgbaImage;

use crate::error::Error;

pub struct Clipboard {
    arboard: Option<arboard::Clipboard>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self { arboard: init_arboard() }
    }

    /// A clipboard that drops every copy.
    #[cfg(test)]
    pub fn disabled() -> Self {
        Self { arboard: None }
    }

    pub fn is_available(&self) -> bool {
        self.arboard.is_some()
    }

    /// Place `img` on the clipboard. Ok(false) when no OS clipboard is available.
    pub fn set_image(&mut self, img: &RgbaImage) -> Result<bool, Error> {
        let Some(clipboard) = &mut self.arboard else {
            log::warn!("no OS clipboard; signature not copied");
            return Ok(false);
        };
        clipboard.set_image(to_image_data(img))?;
        Ok(true)
    }
}

/// RGBA8 bytes in row order, as arboard expects them.
pub fn to_image_data(img: &RgbaImage) -> arboard::ImageData<'_> {
    arboard::ImageData {
        width: img.width() as usize,
        height: img.height() as usize,
        bytes: Cow::Borrowed(img.as_raw()),
    }
}

fn init_arboard() -> Option<arboard::Clipboard> {
    log::debug!("Initializing arboard clipboard…");
    match arboard::Clipboard::new() {
        Ok(clipboard) => Some(clipboard),
        Err(err) => {
            log::warn!("Failed to initialize arboard clipboard: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_data_keeps_dimensions_and_bytes() {
        let mut img = RgbaImage::new(3, 2);
        img.put_pixel(2, 1, image::Rgba([0, 0, 0, 255]));
        let data = to_image_data(&img);
        assert_eq!((data.width, data.height), (3, 2));
        assert_eq!(data.bytes.len(), 3 * 2 * 4);
        assert_eq!(&data.bytes[(1 * 3 + 2) * 4..], &[0, 0, 0, 255]);
    }

    #[test]
    fn disabled_clipboard_drops_copies() {
        let mut cb = Clipboard::disabled();
        assert!(!cb.is_available());
        assert!(!cb.set_image(&RgbaImage::new(4, 4)).unwrap());
    }
}
