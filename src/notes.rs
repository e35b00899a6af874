// Notepad state: a draft being typed, the list of added notes, and which
// rows are picked for deletion. All of it lives only while the notepad
// screen is open.

use std::collections::BTreeSet;

/// Ordered plain-text notes. Grows by appending; shrinks by positional removal.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NoteList {
    notes: Vec<String>,
}

impl NoteList {
    /// Append `note`. Empty strings are ignored (returns false).
    pub fn add(&mut self, note: String) -> bool {
        if note.is_empty() {
            return false;
        }
        self.notes.push(note);
        true
    }

    /// Remove every note whose index is in `offsets`; the rest keep their
    /// relative order. Indices past the end are ignored. Returns how many
    /// notes were removed.
    pub fn remove_offsets(&mut self, offsets: &BTreeSet<usize>) -> usize {
        let before = self.notes.len();
        let mut idx = 0;
        self.notes.retain(|_| {
            let keep = !offsets.contains(&idx);
            idx += 1;
            keep
        });
        before - self.notes.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct Notepad {
    draft: String,
    notes: NoteList,
    selected: BTreeSet<usize>,
    scroll: usize,
}

impl Notepad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn notes(&self) -> &NoteList {
        &self.notes
    }

    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn type_char(&mut self, ch: char) {
        if !ch.is_control() {
            self.draft.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        self.draft.pop();
    }

    /// "Add Notes": move the draft into the list. No-op while the draft is empty.
    pub fn submit_draft(&mut self) -> bool {
        if self.draft.is_empty() {
            return false;
        }
        let note = std::mem::take(&mut self.draft);
        self.notes.add(note)
    }

    pub fn toggle_selected(&mut self, index: usize) {
        if index >= self.notes.len() {
            return;
        }
        if !self.selected.remove(&index) {
            self.selected.insert(index);
        }
    }

    /// Delete every selected note at once and clear the selection.
    pub fn delete_selected(&mut self) -> usize {
        let removed = self.notes.remove_offsets(&self.selected);
        self.selected.clear();
        self.scroll = self.scroll.min(self.notes.len().saturating_sub(1));
        removed
    }

    /// Scroll just far enough that the last note is inside a window of
    /// `visible_rows` rows.
    pub fn reveal_last(&mut self, visible_rows: usize) {
        let first_of_last_page = self.notes.len().saturating_sub(visible_rows.max(1));
        self.scroll = self.scroll.max(first_of_last_page);
    }

    /// Move the first visible row by `delta`, staying within the list.
    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.notes.len().saturating_sub(1);
        self.scroll = self.scroll.saturating_add_signed(delta).min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> NoteList {
        let mut l = NoteList::default();
        for i in items {
            l.add(i.to_string());
        }
        l
    }

    #[test]
    fn add_ignores_empty_notes() {
        let mut l = NoteList::default();
        assert!(!l.add(String::new()));
        assert!(l.add("  ".into()));
        assert_eq!(l.len(), 1);
    }

    #[test]
    fn duplicates_are_kept() {
        let l = list(&["same", "same"]);
        assert_eq!(l.as_slice(), &["same", "same"]);
    }

    #[test]
    fn remove_one_keeps_relative_order() {
        let names = ["a", "b", "c", "d", "e"];
        for i in 0..names.len() {
            let mut l = list(&names);
            assert_eq!(l.remove_offsets(&BTreeSet::from([i])), 1);
            let expected: Vec<&str> = names.iter().enumerate().filter(|(j, _)| *j != i).map(|(_, n)| *n).collect();
            assert_eq!(l.as_slice(), expected.as_slice());
        }
    }

    #[test]
    fn remove_index_set_ignores_out_of_range() {
        let mut l = list(&["a", "b", "c", "d"]);
        assert_eq!(l.remove_offsets(&BTreeSet::from([0, 2, 9])), 2);
        assert_eq!(l.as_slice(), &["b", "d"]);
    }

    #[test]
    fn submit_moves_draft_into_list() {
        let mut pad = Notepad::new();
        assert!(!pad.submit_draft());
        for ch in "hi\u{8}".chars() {
            pad.type_char(ch);
        }
        assert_eq!(pad.draft(), "hi");
        assert!(pad.submit_draft());
        assert_eq!(pad.draft(), "");
        assert_eq!(pad.notes().as_slice(), &["hi"]);
    }

    #[test]
    fn backspace_edits_draft() {
        let mut pad = Notepad::new();
        pad.type_char('o');
        pad.type_char('k');
        pad.backspace();
        assert_eq!(pad.draft(), "o");
        pad.backspace();
        pad.backspace();
        assert_eq!(pad.draft(), "");
    }

    #[test]
    fn delete_selected_removes_all_picked_rows() {
        let mut pad = Notepad::new();
        for n in ["one", "two", "three"] {
            n.chars().for_each(|c| pad.type_char(c));
            pad.submit_draft();
        }
        pad.toggle_selected(0);
        pad.toggle_selected(2);
        pad.toggle_selected(1);
        pad.toggle_selected(1);
        pad.toggle_selected(7);
        assert_eq!(pad.selected(), &BTreeSet::from([0, 2]));
        assert_eq!(pad.delete_selected(), 2);
        assert_eq!(pad.notes().as_slice(), &["two"]);
        assert!(pad.selected().is_empty());
    }

    #[test]
    fn reveal_last_keeps_newest_note_on_screen() {
        let mut pad = Notepad::new();
        for i in 0..5 {
            pad.type_char(char::from(b'a' + i));
            pad.submit_draft();
            pad.reveal_last(3);
        }
        assert_eq!(pad.scroll(), 2);
        // Scrolled further down already: left alone.
        pad.scroll_by(2);
        pad.reveal_last(3);
        assert_eq!(pad.scroll(), 4);
        // Everything fits: no scrolling.
        let mut short = Notepad::new();
        short.type_char('x');
        short.submit_draft();
        short.reveal_last(3);
        assert_eq!(short.scroll(), 0);
    }

    #[test]
    fn scroll_stays_in_range() {
        let mut pad = Notepad::new();
        pad.scroll_by(3);
        assert_eq!(pad.scroll(), 0);
        for n in ["a", "b", "c"] {
            pad.type_char(n.chars().next().unwrap());
            pad.submit_draft();
        }
        pad.scroll_by(5);
        assert_eq!(pad.scroll(), 2);
        pad.scroll_by(-1);
        assert_eq!(pad.scroll(), 1);
        pad.scroll_by(-9);
        assert_eq!(pad.scroll(), 0);
    }
}
