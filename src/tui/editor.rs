//! Code editor — simple text buffer with cursor.
//!
//! Columns count characters, not bytes, so multi-byte text edits cleanly.

/// A minimal line-based text editor.
#[derive(Debug, Clone)]
pub struct Editor {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
    scroll_offset: usize,
    viewport_height: usize,
}

/// Split on `\r\n`, `\n` or a lone `\r`, the same terminators the lexer
/// emits as breaks.
fn split_content(content: &str) -> Vec<String> {
    let mut lines = vec![String::new()];
    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                chars.next_if_eq(&'\n');
                lines.push(String::new());
            }
            '\n' => lines.push(String::new()),
            _ => {
                if let Some(line) = lines.last_mut() {
                    line.push(c);
                }
            }
        }
    }
    lines
}

/// Byte index of the `col`-th character of `line`, clamped to its end.
fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(i, _)| i)
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

impl Editor {
    /// Create an editor with initial content.
    pub fn new(content: &str) -> Self {
        Self {
            lines: split_content(content),
            cursor_row: 0,
            cursor_col: 0,
            scroll_offset: 0,
            viewport_height: 20,
        }
    }

    /// Full text, lines joined with `\n`.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cursor position (row, col) in characters.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    /// First visible line.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn set_viewport_height(&mut self, h: usize) {
        self.viewport_height = h.max(1);
        self.ensure_cursor_visible();
    }

    fn ensure_cursor_visible(&mut self) {
        if self.cursor_row < self.scroll_offset {
            self.scroll_offset = self.cursor_row;
        } else if self.cursor_row >= self.scroll_offset + self.viewport_height {
            self.scroll_offset = self.cursor_row + 1 - self.viewport_height;
        }
    }

    fn current_len(&self) -> usize {
        char_len(&self.lines[self.cursor_row])
    }

    pub fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.cursor_row];
        let col = self.cursor_col.min(char_len(line));
        line.insert(byte_index(line, col), c);
        self.cursor_col = col + 1;
    }

    /// Split the current line at the cursor.
    pub fn newline(&mut self) {
        let line = &mut self.lines[self.cursor_row];
        let at = byte_index(line, self.cursor_col);
        let rest = line.split_off(at);
        self.cursor_row += 1;
        self.lines.insert(self.cursor_row, rest);
        self.cursor_col = 0;
        self.ensure_cursor_visible();
    }

    /// Delete the character before the cursor, joining lines at column 0.
    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            let line = &mut self.lines[self.cursor_row];
            let col = self.cursor_col.min(char_len(line));
            if col > 0 {
                line.remove(byte_index(line, col - 1));
            }
            self.cursor_col = col.saturating_sub(1);
        } else if self.cursor_row > 0 {
            let current = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            self.cursor_col = self.current_len();
            self.lines[self.cursor_row].push_str(&current);
            self.ensure_cursor_visible();
        }
    }

    /// Delete the character at the cursor, joining the next line at the end.
    pub fn delete(&mut self) {
        if self.cursor_col < self.current_len() {
            let line = &mut self.lines[self.cursor_row];
            line.remove(byte_index(line, self.cursor_col));
        } else if self.cursor_row + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_row + 1);
            self.lines[self.cursor_row].push_str(&next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col = self.cursor_col.min(self.current_len()).saturating_sub(1);
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.current_len();
            self.ensure_cursor_visible();
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor_col < self.current_len() {
            self.cursor_col += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
            self.ensure_cursor_visible();
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.cursor_col.min(self.current_len());
            self.ensure_cursor_visible();
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = self.cursor_col.min(self.current_len());
            self.ensure_cursor_visible();
        }
    }

    pub fn home(&mut self) {
        self.cursor_col = 0;
    }

    pub fn end(&mut self) {
        self.cursor_col = self.current_len();
    }

    /// Replace all content and put the cursor at the start.
    pub fn set_content(&mut self, content: &str) {
        self.lines = split_content(content);
        self.cursor_row = 0;
        self.cursor_col = 0;
        self.scroll_offset = 0;
    }

    /// Put the cursor after the last character.
    pub fn move_to_end(&mut self) {
        self.cursor_row = self.lines.len() - 1;
        self.cursor_col = self.current_len();
        self.ensure_cursor_visible();
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}
