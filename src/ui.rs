// Screen layout, theme colors, hit-testing and drawing of the two screens.

use crate::canvas::SignatureCanvas;
use crate::font::{self, ADVANCE, GLYPH_HEIGHT};
use crate::notes::Notepad;
use crate::raster::{fill_rect, outline_rect, render_live};
use crate::types::{FrameBuffer, Point, Rect};

const MARGIN: i32 = 20;
const BUTTON_HEIGHT: i32 = 18;
const BUTTON_PAD: i32 = 12;
const ROW_HEIGHT: i32 = 11;
const EDITOR_HEIGHT: i32 = 40;
const MIN_WINDOW_HEIGHT: i32 = 220;

const RED: u32 = 0x00_E5_39_35;
const BLUE: u32 = 0x00_1E_88_E5;
const GRAY: u32 = 0x00_9E_9E_9E;
const WHITE: u32 = 0x00_FF_FF_FF;

pub const PLACEHOLDER: &str = "ADD NOTES HERE";
const SIGNATURE_HINT: &str = "C CLEAR  Y COPY  T THEME  N NOTES";
const NOTEPAD_HINT: &str = "ENTER ADD  DEL DELETE  ESC BACK";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn background(self) -> u32 {
        match self {
            Theme::Light => 0x00_FF_FF_FF,
            Theme::Dark => 0x00_00_00_00,
        }
    }

    pub fn foreground(self) -> u32 {
        match self {
            Theme::Light => 0x00_00_00_00,
            Theme::Dark => 0x00_FF_FF_FF,
        }
    }

    fn border(self) -> u32 {
        match self {
            Theme::Light => 0x00_00_00_00,
            Theme::Dark => 0x00_5A_5A_5A,
        }
    }

    fn field(self) -> u32 {
        match self {
            Theme::Light => 0x00_EE_EE_EE,
            Theme::Dark => 0x00_1C_1C_1C,
        }
    }

    fn highlight(self) -> u32 {
        match self {
            Theme::Light => 0x00_D6_E4_FF,
            Theme::Dark => 0x00_23_32_4D,
        }
    }

    /// Label on the theme button: the icon of the current mode.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "SUN",
            Theme::Dark => "MOON",
        }
    }
}

/// Everything a click or a key can ask the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Clear,
    Copy,
    ToggleTheme,
    OpenNotepad,
    CloseNotepad,
    AddNote,
    EraseChar,
    ToggleNote(usize),
    DeleteSelected,
    Scroll(isize),
    Quit,
}

fn button_width(label: &str) -> i32 {
    font::text_width(label) + BUTTON_PAD
}

fn centered_x(total: i32, width: i32) -> i32 {
    (total - width) / 2
}

#[derive(Debug, Clone)]
pub struct Layout {
    pub width: usize,
    pub height: usize,
    pub canvas: Rect,
    theme_button: Rect,
    notes_button: Rect,
    clear_button: Rect,
    copy_button: Rect,
    back_button: Rect,
    editor: Rect,
    add_button: Rect,
    list: Rect,
}

impl Layout {
    pub fn new(canvas_width: usize, canvas_height: usize) -> Self {
        let (cw, ch) = (canvas_width as i32, canvas_height as i32);
        let w = cw + 2 * MARGIN;
        let h = (ch + 110).max(MIN_WINDOW_HEIGHT);

        let theme_w = button_width("MOON");
        let notes_w = button_width("NOTES");
        let canvas = Rect::new(MARGIN, 36, cw, ch);

        let clear_w = button_width("CLEAR");
        let copy_w = button_width("COPY SIGNATURE");
        let row_x = centered_x(w, clear_w + BUTTON_PAD + copy_w);
        let row_y = canvas.y + ch + 14;

        let editor = Rect::new(MARGIN, 30, w - 2 * MARGIN, EDITOR_HEIGHT);
        let add_w = button_width("ADD NOTES");
        let add_button = Rect::new(centered_x(w, add_w), editor.y + editor.h + 6, add_w, BUTTON_HEIGHT);
        let list_y = add_button.y + BUTTON_HEIGHT + 8;

        Self {
            width: w as usize,
            height: h as usize,
            canvas,
            theme_button: Rect::new(8, 6, theme_w, BUTTON_HEIGHT),
            notes_button: Rect::new(w - 8 - notes_w, 6, notes_w, BUTTON_HEIGHT),
            clear_button: Rect::new(row_x, row_y, clear_w, BUTTON_HEIGHT),
            copy_button: Rect::new(row_x + clear_w + BUTTON_PAD, row_y, copy_w, BUTTON_HEIGHT),
            back_button: Rect::new(8, 6, button_width("BACK"), BUTTON_HEIGHT),
            editor,
            add_button,
            list: Rect::new(MARGIN, list_y, w - 2 * MARGIN, h - list_y - 16),
        }
    }

    pub fn signature_hit(&self, p: Point) -> Option<Action> {
        [
            (self.theme_button, Action::ToggleTheme),
            (self.notes_button, Action::OpenNotepad),
            (self.clear_button, Action::Clear),
            (self.copy_button, Action::Copy),
        ]
        .into_iter()
        .find(|(r, _)| r.contains(p))
        .map(|(_, a)| a)
    }

    pub fn notepad_hit(&self, p: Point, pad: &Notepad) -> Option<Action> {
        if self.back_button.contains(p) {
            return Some(Action::CloseNotepad);
        }
        if self.add_button.contains(p) {
            return Some(Action::AddNote);
        }
        if self.list.contains(p) {
            let row = ((p.y as i32 - self.list.y) / ROW_HEIGHT) as usize;
            let index = pad.scroll() + row;
            if row < self.visible_rows() && index < pad.notes().len() {
                return Some(Action::ToggleNote(index));
            }
        }
        None
    }

    pub fn visible_rows(&self) -> usize {
        (self.list.h / ROW_HEIGHT).max(0) as usize
    }

    fn text_cols(&self, r: Rect) -> usize {
        ((r.w - 8) / ADVANCE).max(1) as usize
    }

    /// Top-left of the `row`-th visible list row.
    pub fn row_origin(&self, row: usize) -> Point {
        Point::new(self.list.x as f32, (self.list.y + row as i32 * ROW_HEIGHT) as f32)
    }
}

fn draw_button(fb: &mut FrameBuffer, r: Rect, label: &str, fill: u32, text: u32) {
    fill_rect(fb, r, fill);
    let x = r.x + centered_x(r.w, font::text_width(label)) + 1;
    let y = r.y + (r.h - GLYPH_HEIGHT) / 2;
    font::draw_text(fb, x, y, label, text);
}

/// Outlined button in the theme's colors, for the top-bar icons.
/// Visual: black-on-white in light mode, white-on-black in dark mode.
fn draw_bar_button(fb: &mut FrameBuffer, r: Rect, label: &str, theme: Theme) {
    draw_button(fb, r, label, theme.background(), theme.foreground());
    outline_rect(fb, Rect::new(r.x + 1, r.y + 1, r.w - 2, r.h - 2), theme.foreground());
}

fn draw_title(fb: &mut FrameBuffer, layout: &Layout, title: &str, theme: Theme) {
    let x = centered_x(layout.width as i32, font::text_width(title));
    font::draw_text(fb, x, 11, title, theme.foreground());
}

fn draw_hint(fb: &mut FrameBuffer, layout: &Layout, hint: &str) {
    let x = centered_x(layout.width as i32, font::text_width(hint));
    font::draw_text(fb, x, layout.height as i32 - 12, hint, GRAY);
}

pub fn draw_signature_screen(fb: &mut FrameBuffer, layout: &Layout, theme: Theme, canvas: &SignatureCanvas) {
    fb.fill(theme.background());
    draw_bar_button(fb, layout.theme_button, theme.label(), theme);
    draw_bar_button(fb, layout.notes_button, "NOTES", theme);
    draw_title(fb, layout, "DIGITAL SIGNATURES", theme);

    outline_rect(fb, canvas.area(), theme.border());
    render_live(fb, canvas.area(), canvas.strokes(), canvas.in_progress());

    draw_button(fb, layout.clear_button, "CLEAR", RED, WHITE);
    draw_button(fb, layout.copy_button, "COPY SIGNATURE", BLUE, WHITE);
    draw_hint(fb, layout, SIGNATURE_HINT);
}

pub fn draw_notepad_screen(fb: &mut FrameBuffer, layout: &Layout, theme: Theme, pad: &Notepad) {
    fb.fill(theme.background());
    draw_bar_button(fb, layout.back_button, "BACK", theme);
    draw_title(fb, layout, "NOTEPAD", theme);

    // Editor: wrapped draft, latest lines visible, or the placeholder.
    // Visual: blue "ADD NOTES HERE" until you type; then your text with a "_" caret.
    let editor = layout.editor;
    fill_rect(fb, editor, theme.field());
    outline_rect(fb, editor, GRAY);
    if pad.draft().is_empty() {
        font::draw_text(fb, editor.x + 4, editor.y + 4, PLACEHOLDER, BLUE);
    } else {
        let mut text = pad.draft().to_string();
        text.push('_');
        let lines = font::wrap(&text, layout.text_cols(editor));
        let fit = ((editor.h - 4) / (GLYPH_HEIGHT + 2)).max(1) as usize;
        let first = lines.len().saturating_sub(fit);
        for (i, line) in lines[first..].iter().enumerate() {
            let y = editor.y + 4 + i as i32 * (GLYPH_HEIGHT + 2);
            font::draw_text(fb, editor.x + 4, y, line, theme.foreground());
        }
    }

    let add_fill = if pad.draft().is_empty() { GRAY } else { BLUE }; // visual: gray = disabled
    draw_button(fb, layout.add_button, "ADD NOTES", add_fill, WHITE);

    let cols = layout.text_cols(layout.list);
    let notes = pad.notes().as_slice();
    for (row, index) in (pad.scroll()..notes.len()).take(layout.visible_rows()).enumerate() {
        let origin = layout.row_origin(row);
        let (x, y) = (origin.x as i32, origin.y as i32);
        if pad.selected().contains(&index) {
            fill_rect(fb, Rect::new(x, y, layout.list.w, ROW_HEIGHT - 1), theme.highlight());
        }
        font::draw_text(fb, x + 4, y + 2, &font::truncate(&notes[index], cols), theme.foreground());
        fill_rect(fb, Rect::new(x, y + ROW_HEIGHT - 1, layout.list.w, 1), theme.field());
    }
    draw_hint(fb, layout, NOTEPAD_HINT);
}
