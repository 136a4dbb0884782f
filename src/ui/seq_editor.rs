// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Editable text buffer behind one sequence input, with a hard character cap.

pub const MAX_SEQ_CHARS: usize = 10_000;

#[derive(Clone, Debug, PartialEq)]
pub struct SeqEditor {
    chars: Vec<char>,
    cursor: usize,
    max_chars: usize,
}

impl SeqEditor {
    pub fn new(max_chars: usize) -> Self {
        Self {
            chars: Vec::new(),
            cursor: 0,
            max_chars,
        }
    }

    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    pub fn remaining(&self) -> usize {
        self.max_chars.saturating_sub(self.chars.len())
    }

    // Returns false (and leaves the buffer untouched) if the buffer is full.
    pub fn insert_char(&mut self, c: char) -> bool {
        if self.remaining() == 0 {
            return false;
        }
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
        true
    }

    // Inserts as much of `s` as fits; returns the number of characters dropped. Carriage returns
    // are skipped (pasted text may come with CRLF line ends).
    pub fn insert_str(&mut self, s: &str) -> usize {
        let incoming: Vec<char> = s.chars().filter(|&c| c != '\r').collect();
        let kept = incoming.len().min(self.remaining());
        let tail = self.chars.split_off(self.cursor);
        self.chars.extend_from_slice(&incoming[..kept]);
        self.chars.extend(tail);
        self.cursor += kept;
        incoming.len() - kept
    }

    pub fn set_text(&mut self, s: &str) -> usize {
        self.clear();
        self.insert_str(s)
    }

    pub fn clear(&mut self) {
        self.chars.clear();
        self.cursor = 0;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.chars.remove(self.cursor);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.chars.len() {
            self.chars.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.chars.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.chars.len();
    }

    /// Lays the text out in rows of at most `width` chars, breaking at newlines and hard-wrapping
    /// long lines (sequences have no word boundaries to speak of). Returns the rows and the
    /// (row, col) of the cursor.
    pub fn wrap_rows(&self, width: usize) -> (Vec<String>, (usize, usize)) {
        let width = width.max(1);
        let mut rows: Vec<String> = vec![String::new()];
        let mut col = 0;
        let mut cursor_pos = (0, 0);
        for (i, &c) in self.chars.iter().enumerate() {
            if i == self.cursor {
                // A newline right after a full row has no cell of its own: keep the cursor on
                // the last column.
                cursor_pos = (rows.len() - 1, col.min(width - 1));
            }
            if c == '\n' {
                rows.push(String::new());
                col = 0;
                continue;
            }
            if col == width {
                rows.push(String::new());
                col = 0;
                if i == self.cursor {
                    cursor_pos = (rows.len() - 1, 0);
                }
            }
            if let Some(row) = rows.last_mut() {
                row.push(c);
            }
            col += 1;
        }
        if self.cursor == self.chars.len() {
            if col == width {
                rows.push(String::new());
                col = 0;
            }
            cursor_pos = (rows.len() - 1, col);
        }
        (rows, cursor_pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace() {
        let mut editor = SeqEditor::new(MAX_SEQ_CHARS);
        editor.insert_char('a');
        editor.insert_char('b');
        editor.move_left();
        editor.insert_char('c');
        assert_eq!(editor.text(), "acb");
        editor.backspace();
        assert_eq!(editor.text(), "ab");
        editor.move_home();
        editor.delete();
        assert_eq!(editor.text(), "b");
    }

    #[test]
    fn move_home_end() {
        let mut editor = SeqEditor::new(MAX_SEQ_CHARS);
        editor.insert_str("abc");
        editor.move_home();
        editor.insert_char('z');
        assert_eq!(editor.text(), "zabc");
        editor.move_end();
        editor.insert_char('x');
        assert_eq!(editor.text(), "zabcx");
    }

    #[test]
    fn cap_refuses_typing() {
        let mut editor = SeqEditor::new(3);
        assert!(editor.insert_char('a'));
        assert!(editor.insert_char('b'));
        assert!(editor.insert_char('c'));
        assert!(!editor.insert_char('d'));
        assert_eq!(editor.text(), "abc");
    }

    #[test]
    fn paste_is_truncated_at_cap() {
        let mut editor = SeqEditor::new(5);
        editor.insert_str("AA");
        let dropped = editor.insert_str("MKT\r\nAYIAK");
        assert_eq!(dropped, 6);
        assert_eq!(editor.text(), "AAMKT");
        assert_eq!(editor.remaining(), 0);
    }

    #[test]
    fn full_size_input_is_kept() {
        let mut editor = SeqEditor::new(MAX_SEQ_CHARS);
        let long: String = "ACDEFGHIKL".repeat(MAX_SEQ_CHARS / 10);
        assert_eq!(editor.set_text(&long), 0);
        assert_eq!(editor.len(), MAX_SEQ_CHARS);
        assert_eq!(editor.text(), long);
    }

    #[test]
    fn wrap_rows_hard_wraps() {
        let mut editor = SeqEditor::new(MAX_SEQ_CHARS);
        editor.insert_str("ABCDEFG\nHI");
        let (rows, cursor) = editor.wrap_rows(3);
        assert_eq!(rows, vec!["ABC", "DEF", "G", "HI"]);
        assert_eq!(cursor, (3, 2));
        editor.move_home();
        assert_eq!(editor.wrap_rows(3).1, (0, 0));
    }

    #[test]
    fn wrap_rows_cursor_at_full_row() {
        let mut editor = SeqEditor::new(MAX_SEQ_CHARS);
        editor.insert_str("ABCDEF");
        let (rows, cursor) = editor.wrap_rows(3);
        assert_eq!(rows, vec!["ABC", "DEF", ""]);
        assert_eq!(cursor, (2, 0));
        editor.move_left();
        editor.move_left();
        editor.move_left();
        // On 'D', first char of the second row.
        assert_eq!(editor.wrap_rows(3).1, (1, 0));
    }

    #[test]
    fn wrap_rows_cursor_on_newline_after_full_row() {
        let mut editor = SeqEditor::new(MAX_SEQ_CHARS);
        editor.insert_str("ABC\nD");
        editor.move_home();
        editor.move_right();
        editor.move_right();
        editor.move_right();
        let (rows, cursor) = editor.wrap_rows(3);
        assert_eq!(rows, vec!["ABC", "D"]);
        assert_eq!(cursor, (0, 2));
        // Short row: the newline gets its own cell.
        editor.set_text("AB\nD");
        editor.move_home();
        editor.move_right();
        editor.move_right();
        assert_eq!(editor.wrap_rows(3).1, (0, 2));
    }

    #[test]
    fn wrap_rows_empty() {
        let editor = SeqEditor::new(MAX_SEQ_CHARS);
        assert_eq!(editor.wrap_rows(10), (vec![String::new()], (0, 0)));
    }
}
