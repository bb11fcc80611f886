//! Single-line city input.

/// The city query and its editing cursor.
///
/// The cursor is a character index, so multi-byte names ("Zürich",
/// "São Paulo") edit correctly.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    query: String,
    cursor: usize,
}

impl SearchForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(query: &str) -> Self {
        Self {
            query: query.to_string(),
            cursor: query.chars().count(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text to the left of the cursor.
    pub fn before_cursor(&self) -> &str {
        &self.query[..self.byte_index(self.cursor)]
    }

    /// True when submitting would be rejected without a request.
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }

    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.query.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let idx = self.byte_index(self.cursor - 1);
        self.query.remove(idx);
        self.cursor -= 1;
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let idx = self.byte_index(self.cursor);
        self.query.remove(idx);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    fn len(&self) -> usize {
        self.query.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.query
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len())
    }
}
