//! Line-oriented text buffer for the composer.
//!
//! Stores logical lines with a (row, col) cursor in char units. Supports the
//! editing operations the composer exposes; rendering and wrapping live in
//! the render module.

/// Cursor movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
    LineStart,
    LineEnd,
    Top,
    Bottom,
}

/// Text buffer with line storage and a (row, col) cursor.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    lines: Vec<String>,
    row: usize,
    col: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Logical lines; always at least one.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cursor position as (row, col) in char units.
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Buffer content joined with newlines.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    /// Replaces the whole content and puts the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        self.row = self.lines.len() - 1;
        self.col = char_len(&self.lines[self.row]);
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.lines.push(String::new());
        self.row = 0;
        self.col = 0;
    }

    /// Inserts a string at the cursor, advancing past it.
    pub fn insert_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }

        let line = self.lines[self.row].clone();
        let at = byte_index(&line, self.col);
        let (head, tail) = line.split_at(at);

        let mut parts = text.split('\n');
        let first = parts.next().unwrap_or_default();
        let rest: Vec<&str> = parts.collect();

        if rest.is_empty() {
            self.lines[self.row] = format!("{head}{first}{tail}");
            self.col += first.chars().count();
            return;
        }

        let mut new_lines = Vec::with_capacity(rest.len() + 1);
        new_lines.push(format!("{head}{first}"));
        for part in &rest[..rest.len() - 1] {
            new_lines.push((*part).to_string());
        }
        let last = rest[rest.len() - 1];
        new_lines.push(format!("{last}{tail}"));

        let last_col = last.chars().count();
        self.lines.splice(self.row..=self.row, new_lines);
        self.row += rest.len();
        self.col = last_col;
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    /// Splits the current line at the cursor.
    pub fn insert_newline(&mut self) {
        self.insert_str("\n");
    }

    /// Backspace: deletes the char before the cursor, joining lines at col 0.
    pub fn delete_prev_char(&mut self) {
        if self.col > 0 {
            let line = &mut self.lines[self.row];
            let start = byte_index(line, self.col - 1);
            let end = byte_index(line, self.col);
            line.replace_range(start..end, "");
            self.col -= 1;
        } else if self.row > 0 {
            let removed = self.lines.remove(self.row);
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
            self.lines[self.row].push_str(&removed);
        }
    }

    /// Delete: removes the char at the cursor, joining lines at line end.
    pub fn delete_next_char(&mut self) {
        let line_len = char_len(&self.lines[self.row]);
        if self.col < line_len {
            let line = &mut self.lines[self.row];
            let start = byte_index(line, self.col);
            let end = byte_index(line, self.col + 1);
            line.replace_range(start..end, "");
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    /// Kills from the cursor to the end of the line (Ctrl+K).
    pub fn kill_to_line_end(&mut self) {
        let line = &mut self.lines[self.row];
        let at = byte_index(line, self.col);
        line.truncate(at);
    }

    /// Kills from the start of the line to the cursor (Ctrl+U).
    pub fn kill_to_line_start(&mut self) {
        let line = &mut self.lines[self.row];
        let at = byte_index(line, self.col);
        line.replace_range(..at, "");
        self.col = 0;
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        match movement {
            CursorMove::Up => {
                if self.row > 0 {
                    self.row -= 1;
                    self.clamp_col();
                }
            }
            CursorMove::Down => {
                if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.clamp_col();
                }
            }
            CursorMove::Left => {
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = char_len(&self.lines[self.row]);
                }
            }
            CursorMove::Right => {
                if self.col < char_len(&self.lines[self.row]) {
                    self.col += 1;
                } else if self.row + 1 < self.lines.len() {
                    self.row += 1;
                    self.col = 0;
                }
            }
            CursorMove::LineStart => self.col = 0,
            CursorMove::LineEnd => self.col = char_len(&self.lines[self.row]),
            CursorMove::Top => {
                self.row = 0;
                self.clamp_col();
            }
            CursorMove::Bottom => {
                self.row = self.lines.len() - 1;
                self.clamp_col();
            }
        }
    }

    /// Moves the cursor left over one segment (word, punctuation run, or
    /// whitespace run), crossing line boundaries.
    pub fn move_word_left(&mut self) {
        while self.row > 0 && self.col == 0 {
            self.row -= 1;
            self.col = char_len(&self.lines[self.row]);
        }
        if self.col == 0 {
            return;
        }
        let chars: Vec<char> = self.lines[self.row].chars().collect();
        self.col = segment_start(&chars, self.col);
    }

    /// Moves the cursor right over one segment, crossing line boundaries.
    pub fn move_word_right(&mut self) {
        loop {
            let line_len = char_len(&self.lines[self.row]);
            if self.col < line_len {
                break;
            }
            if self.row + 1 >= self.lines.len() {
                return;
            }
            self.row += 1;
            self.col = 0;
        }
        let chars: Vec<char> = self.lines[self.row].chars().collect();
        self.col = segment_end(&chars, self.col);
    }

    /// Deletes the segment to the left of the cursor (Ctrl+W).
    pub fn delete_word_left(&mut self) {
        if self.row == 0 && self.col == 0 {
            return;
        }
        if self.col == 0 {
            // At line start the "word" is the newline.
            self.delete_prev_char();
            return;
        }
        let chars: Vec<char> = self.lines[self.row].chars().collect();
        let start = segment_start(&chars, self.col);
        let line = &mut self.lines[self.row];
        let start_byte = byte_index(line, start);
        let end_byte = byte_index(line, self.col);
        line.replace_range(start_byte..end_byte, "");
        self.col = start;
    }

    fn clamp_col(&mut self) {
        self.col = self.col.min(char_len(&self.lines[self.row]));
    }
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(i, _)| i)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Whitespace,
    Word,
    Punct,
}

fn char_class(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if c.is_alphanumeric() || c == '_' {
        CharClass::Word
    } else {
        CharClass::Punct
    }
}

fn segment_start(chars: &[char], mut idx: usize) -> usize {
    idx = idx.min(chars.len());
    if idx == 0 {
        return 0;
    }
    let class = char_class(chars[idx - 1]);
    while idx > 0 && char_class(chars[idx - 1]) == class {
        idx -= 1;
    }
    idx
}

fn segment_end(chars: &[char], mut idx: usize) -> usize {
    if idx >= chars.len() {
        return idx;
    }
    let class = char_class(chars[idx]);
    while idx < chars.len() && char_class(chars[idx]) == class {
        idx += 1;
    }
    idx
}
