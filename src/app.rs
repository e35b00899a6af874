// Application state: which screen is showing, the theme, and the signature
// canvas. `update` consumes one frame of input; `render` draws the frame.

use minifb::Key;

use crate::canvas::SignatureCanvas;
use crate::clipboard::Clipboard;
use crate::config::AppConfig;
use crate::draw::FrameInput;
use crate::input::{GestureTracker, PointerEvent};
use crate::notes::Notepad;
use crate::raster::{export_raster, save_png};
use crate::types::FrameBuffer;
use crate::ui::{self, Action, Layout, Theme};

/// The notepad owns its notes; leaving the screen drops them.
pub enum Screen {
    Signature,
    Notepad(Notepad),
}

pub struct App {
    config: AppConfig,
    layout: Layout,
    theme: Theme,
    screen: Screen,
    canvas: SignatureCanvas,
    gestures: GestureTracker,
    clipboard: Clipboard,
    quit: bool,
}

impl App {
    pub fn new(config: AppConfig, clipboard: Clipboard) -> Self {
        let layout = Layout::new(config.canvas_width, config.canvas_height);
        let canvas = SignatureCanvas::new(layout.canvas);
        Self {
            config,
            layout,
            theme: Theme::default(),
            screen: Screen::Signature,
            canvas,
            gestures: GestureTracker::new(),
            clipboard,
            quit: false,
        }
    }

    pub fn frame_size(&self) -> (usize, usize) {
        (self.layout.width, self.layout.height)
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    #[cfg(test)]
    pub fn canvas(&self) -> &SignatureCanvas {
        &self.canvas
    }

    #[cfg(test)]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[cfg(test)]
    pub fn notepad(&self) -> Option<&Notepad> {
        match &self.screen {
            Screen::Notepad(pad) => Some(pad),
            Screen::Signature => None,
        }
    }

    pub fn update(&mut self, input: &FrameInput) {
        // Text goes to the draft only on the notepad; elsewhere letters are shortcuts.
        if let Screen::Notepad(pad) = &mut self.screen {
            for &ch in &input.typed {
                pad.type_char(ch);
            }
        }

        if let Some(event) = self.gestures.sample(input.pointer_down, input.pointer, input.focused) {
            self.pointer(event);
        }

        for &key in &input.pressed {
            if let Some(action) = self.key_action(key) {
                self.apply(action);
            }
        }
    }

    fn pointer(&mut self, event: PointerEvent) {
        if let PointerEvent::Down(p) = event {
            let hit = match &self.screen {
                Screen::Signature => self.layout.signature_hit(p),
                Screen::Notepad(pad) => self.layout.notepad_hit(p, pad),
            };
            if let Some(action) = hit {
                self.apply(action);
                return;
            }
        }
        if let Screen::Signature = self.screen {
            self.canvas.handle(event);
        }
    }

    fn key_action(&self, key: Key) -> Option<Action> {
        match self.screen {
            Screen::Signature => match key {
                Key::C => Some(Action::Clear),
                Key::Y => Some(Action::Copy),
                Key::T => Some(Action::ToggleTheme),
                Key::N => Some(Action::OpenNotepad),
                Key::Escape => Some(Action::Quit),
                _ => None,
            },
            Screen::Notepad(_) => match key {
                Key::Enter | Key::NumPadEnter => Some(Action::AddNote),
                Key::Backspace => Some(Action::EraseChar),
                Key::Delete => Some(Action::DeleteSelected),
                Key::Up => Some(Action::Scroll(-1)),
                Key::Down => Some(Action::Scroll(1)),
                Key::Escape => Some(Action::CloseNotepad),
                _ => None,
            },
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Clear => {
                self.canvas.clear();
                log::info!("signature cleared");
            }
            Action::Copy => self.copy_signature(),
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                log::info!("theme: {:?}", self.theme);
            }
            Action::OpenNotepad => {
                if let Screen::Signature = self.screen {
                    // A drag still open here never gets its pointer-up.
                    if let Some(event) = self.gestures.cancel() {
                        self.canvas.handle(event);
                    }
                    self.screen = Screen::Notepad(Notepad::new());
                    log::info!("notepad opened");
                }
            }
            Action::CloseNotepad => {
                if let Screen::Notepad(pad) = &self.screen {
                    if pad.notes().is_empty() {
                        log::info!("notepad closed");
                    } else {
                        log::info!("notepad closed; {} notes discarded", pad.notes().len());
                    }
                    self.gestures.cancel();
                    self.screen = Screen::Signature;
                }
            }
            Action::Quit => self.quit = true,
            _ => {
                if let Screen::Notepad(pad) = &mut self.screen {
                    notepad_action(pad, action, self.layout.visible_rows());
                }
            }
        }
    }

    /// Export the signature and put it on the clipboard; nothing to do when
    /// there is no signature.
    fn copy_signature(&mut self) {
        let Some(signature) = self.canvas.store().signature() else {
            log::debug!("copy requested with no signature");
            return;
        };
        let (w, h) = (self.config.canvas_width as u32, self.config.canvas_height as u32);
        let img = export_raster(signature, w, h);

        match self.clipboard.set_image(&img) {
            Ok(true) => log::info!("signature copied to clipboard ({w}x{h})"),
            Ok(false) => {}
            Err(err) => log::error!("{err}"),
        }
        if let Some(path) = &self.config.export_path {
            match save_png(&img, path) {
                Ok(()) => log::info!("signature written to {}", path.display()),
                Err(err) => log::error!("{err}"),
            }
        }
    }

    pub fn render(&self, fb: &mut FrameBuffer) {
        match &self.screen {
            Screen::Signature => ui::draw_signature_screen(fb, &self.layout, self.theme, &self.canvas),
            Screen::Notepad(pad) => ui::draw_notepad_screen(fb, &self.layout, self.theme, pad),
        }
    }
}

fn notepad_action(pad: &mut Notepad, action: Action, visible_rows: usize) {
    match action {
        Action::AddNote => {
            if pad.submit_draft() {
                pad.reveal_last(visible_rows);
                log::info!("note added ({} total)", pad.notes().len());
            }
        }
        Action::EraseChar => pad.backspace(),
        Action::ToggleNote(index) => pad.toggle_selected(index),
        Action::DeleteSelected => {
            let removed = pad.delete_selected();
            if removed > 0 {
                log::info!("{removed} notes deleted");
            }
        }
        Action::Scroll(delta) => pad.scroll_by(delta),
        _ => {}
    }
}
