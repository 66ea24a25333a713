/// Cursor location, counted in lines and chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Line-oriented text with a single cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor: Position,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Position::default(),
        }
    }
}

impl TextBuffer {
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
            .collect();
        Self {
            lines,
            cursor: Position::default(),
        }
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_length(&self, row: usize) -> usize {
        self.lines
            .get(row)
            .map(|line| line.chars().count())
            .unwrap_or(0)
    }

    /// Place the cursor, clamped to the buffer.
    pub fn set_cursor(&mut self, position: Position) {
        let row = position.row.min(self.lines.len().saturating_sub(1));
        let col = position.col.min(self.line_length(row));
        self.cursor = Position::new(row, col);
    }

    pub fn insert_char(&mut self, ch: char) {
        match ch {
            '\n' => self.insert_newline(false),
            '\r' => {}
            _ => {
                let Position { row, col } = self.cursor;
                let line = &mut self.lines[row];
                let at = byte_index(line, col);
                line.insert(at, ch);
                self.cursor.col += 1;
            }
        }
    }

    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.insert_char(ch);
        }
    }

    /// Split the current line at the cursor. With `auto_indent`, the new line
    /// starts with the leading whitespace of the line being split.
    pub fn insert_newline(&mut self, auto_indent: bool) {
        let Position { row, col } = self.cursor;
        let line = &mut self.lines[row];
        let at = byte_index(line, col);
        let rest = line.split_off(at);
        let indent: String = if auto_indent {
            line.chars().take_while(|ch| *ch == ' ' || *ch == '\t').collect()
        } else {
            String::new()
        };
        let indent_len = indent.chars().count();
        self.lines.insert(row + 1, indent + &rest);
        self.cursor = Position::new(row + 1, indent_len);
    }

    /// Remove the char before the cursor, joining lines at column zero.
    pub fn backspace(&mut self) -> bool {
        let Position { row, col } = self.cursor;
        if col > 0 {
            let line = &mut self.lines[row];
            let at = byte_index(line, col - 1);
            line.remove(at);
            self.cursor.col -= 1;
            true
        } else if row > 0 {
            let current = self.lines.remove(row);
            let previous_len = self.line_length(row - 1);
            self.lines[row - 1].push_str(&current);
            self.cursor = Position::new(row - 1, previous_len);
            true
        } else {
            false
        }
    }

    /// Remove the char under the cursor, joining with the next line at end of line.
    pub fn delete(&mut self) -> bool {
        let Position { row, col } = self.cursor;
        if col < self.line_length(row) {
            let line = &mut self.lines[row];
            let at = byte_index(line, col);
            line.remove(at);
            true
        } else if row + 1 < self.lines.len() {
            let next = self.lines.remove(row + 1);
            self.lines[row].push_str(&next);
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
            true
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
            self.cursor.col = self.line_length(self.cursor.row);
            true
        } else {
            false
        }
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor.col < self.line_length(self.cursor.row) {
            self.cursor.col += 1;
            true
        } else if self.cursor.row + 1 < self.lines.len() {
            self.cursor = Position::new(self.cursor.row + 1, 0);
            true
        } else {
            false
        }
    }

    pub fn move_up(&mut self) -> bool {
        if self.cursor.row == 0 {
            return false;
        }
        self.cursor.row -= 1;
        self.clamp_col();
        true
    }

    pub fn move_down(&mut self) -> bool {
        if self.cursor.row + 1 >= self.lines.len() {
            return false;
        }
        self.cursor.row += 1;
        self.clamp_col();
        true
    }

    pub fn move_home(&mut self) -> bool {
        let moved = self.cursor.col != 0;
        self.cursor.col = 0;
        moved
    }

    pub fn move_end(&mut self) -> bool {
        let end = self.line_length(self.cursor.row);
        let moved = self.cursor.col != end;
        self.cursor.col = end;
        moved
    }

    fn clamp_col(&mut self) {
        let len = self.line_length(self.cursor.row);
        if self.cursor.col > len {
            self.cursor.col = len;
        }
    }
}

fn byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}
