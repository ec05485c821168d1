use unicode_width::UnicodeWidthStr;

/// Cursor position inside a single line of text.
///
/// Stored as a byte offset. Every operation first snaps the offset onto a
/// char boundary within `text`, so a cursor that outlived the text it was
/// created for is still safe to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineCursor {
    col: usize,
}

impl LineCursor {
    /// A cursor at the start of the line.
    pub const fn new() -> Self {
        Self { col: 0 }
    }

    /// A cursor at the end of `text`.
    pub const fn at_end(text: &str) -> Self {
        Self { col: text.len() }
    }

    /// Byte offset of the cursor.
    pub const fn col(self) -> usize {
        self.col
    }

    /// Snap the cursor into `text`.
    pub fn clamp(&mut self, text: &str) {
        let mut col = self.col.min(text.len());
        while !text.is_char_boundary(col) {
            col -= 1;
        }
        self.col = col;
    }

    /// Terminal column of the cursor, accounting for wide characters.
    pub fn display_column(self, text: &str) -> usize {
        let mut cursor = self;
        cursor.clamp(text);
        text[..cursor.col].width()
    }

    pub fn move_left(&mut self, text: &str) {
        self.clamp(text);
        if let Some(ch) = text[..self.col].chars().next_back() {
            self.col -= ch.len_utf8();
        }
    }

    pub fn move_right(&mut self, text: &str) {
        self.clamp(text);
        if let Some(ch) = text[self.col..].chars().next() {
            self.col += ch.len_utf8();
        }
    }

    pub const fn move_home(&mut self) {
        self.col = 0;
    }

    pub const fn move_end(&mut self, text: &str) {
        self.col = text.len();
    }

    /// Move to the start of the previous word (Ctrl+Left).
    pub fn move_word_left(&mut self, text: &str) {
        self.col = self.word_start_before(text);
    }

    /// Move past the next word and the separators after it (Ctrl+Right).
    pub fn move_word_right(&mut self, text: &str) {
        self.clamp(text);
        let after = &text[self.col..];
        let word_end = after
            .find(|c: char| !is_word_char(c))
            .unwrap_or(after.len());
        let rest = &after[word_end..];
        let space_end = rest.find(is_word_char).unwrap_or(rest.len());
        self.col += word_end + space_end;
    }

    /// Insert `ch` at the cursor and return the new text.
    pub fn insert_char(&mut self, text: &str, ch: char) -> String {
        self.clamp(text);
        let mut out = String::with_capacity(text.len() + ch.len_utf8());
        out.push_str(&text[..self.col]);
        out.push(ch);
        out.push_str(&text[self.col..]);
        self.col += ch.len_utf8();
        out
    }

    /// Insert pasted text at the cursor and return the new text.
    ///
    /// Line breaks become single spaces since the draft is one line.
    pub fn insert_str(&mut self, text: &str, pasted: &str) -> String {
        self.clamp(text);
        let flattened = pasted
            .split(['\r', '\n'])
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        let mut out = String::with_capacity(text.len() + flattened.len());
        out.push_str(&text[..self.col]);
        out.push_str(&flattened);
        out.push_str(&text[self.col..]);
        self.col += flattened.len();
        out
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// Returns `None` when the cursor is already at the start.
    pub fn delete_back(&mut self, text: &str) -> Option<String> {
        self.clamp(text);
        let ch = text[..self.col].chars().next_back()?;
        let start = self.col - ch.len_utf8();
        let out = splice(text, start, self.col);
        self.col = start;
        Some(out)
    }

    /// Delete the character under the cursor (Delete).
    ///
    /// Returns `None` when the cursor is at the end.
    pub fn delete_forward(&mut self, text: &str) -> Option<String> {
        self.clamp(text);
        let ch = text[self.col..].chars().next()?;
        Some(splice(text, self.col, self.col + ch.len_utf8()))
    }

    /// Delete back to the start of the previous word (Ctrl+W).
    pub fn delete_word_back(&mut self, text: &str) -> Option<String> {
        self.clamp(text);
        if self.col == 0 {
            return None;
        }
        let start = self.word_start_before(text);
        let out = splice(text, start, self.col);
        self.col = start;
        Some(out)
    }

    /// Delete everything before the cursor (Ctrl+U).
    pub fn clear_to_start(&mut self, text: &str) -> Option<String> {
        self.clamp(text);
        if self.col == 0 {
            return None;
        }
        let out = text[self.col..].to_string();
        self.col = 0;
        Some(out)
    }

    fn word_start_before(&mut self, text: &str) -> usize {
        self.clamp(text);
        let trimmed = text[..self.col].trim_end_matches(|c: char| !is_word_char(c));
        trimmed
            .rfind(|c: char| !is_word_char(c))
            .map_or(0, |i| i + trimmed[i..].chars().next().map_or(1, char::len_utf8))
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn splice(text: &str, start: usize, end: usize) -> String {
    let mut out = String::with_capacity(text.len() - (end - start));
    out.push_str(&text[..start]);
    out.push_str(&text[end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_char_at_start() {
        let mut cursor = LineCursor::new();
        let text = cursor.insert_char("ello", 'h');
        assert_eq!(text, "hello");
        assert_eq!(cursor.col(), 1);
    }

    #[test]
    fn test_insert_char_in_middle() {
        let mut cursor = LineCursor::new();
        cursor.move_right("helo");
        cursor.move_right("helo");
        cursor.move_right("helo");
        let text = cursor.insert_char("helo", 'l');
        assert_eq!(text, "hello");
        assert_eq!(cursor.col(), 4);
    }

    #[test]
    fn test_insert_multibyte_char() {
        let mut cursor = LineCursor::at_end("牛乳");
        let text = cursor.insert_char("牛乳", 'を');
        assert_eq!(text, "牛乳を");
        assert_eq!(cursor.col(), "牛乳を".len());
    }

    #[test]
    fn test_insert_str_flattens_line_breaks() {
        let mut cursor = LineCursor::new();
        let text = cursor.insert_str("", "milk\r\neggs\nbread");
        assert_eq!(text, "milk eggs bread");
        assert_eq!(cursor.col(), text.len());
    }

    #[test]
    fn test_delete_back_at_start_is_noop() {
        let mut cursor = LineCursor::new();
        assert_eq!(cursor.delete_back("abc"), None);
    }

    #[test]
    fn test_delete_back_multibyte() {
        let mut cursor = LineCursor::at_end("買う");
        assert_eq!(cursor.delete_back("買う").as_deref(), Some("買"));
        assert_eq!(cursor.col(), "買".len());
    }

    #[test]
    fn test_delete_forward_at_end_is_noop() {
        let mut cursor = LineCursor::at_end("abc");
        assert_eq!(cursor.delete_forward("abc"), None);
    }

    #[test]
    fn test_delete_forward_keeps_cursor() {
        let mut cursor = LineCursor::new();
        assert_eq!(cursor.delete_forward("abc").as_deref(), Some("bc"));
        assert_eq!(cursor.col(), 0);
    }

    #[test]
    fn test_delete_word_back() {
        let mut cursor = LineCursor::at_end("buy fresh milk");
        let text = cursor.delete_word_back("buy fresh milk").unwrap();
        assert_eq!(text, "buy fresh ");
        let text = cursor.delete_word_back(&text).unwrap();
        assert_eq!(text, "buy ");
    }

    #[test]
    fn test_clear_to_start_keeps_tail() {
        let mut cursor = LineCursor::new();
        cursor.move_word_right("buy milk");
        assert_eq!(cursor.clear_to_start("buy milk").as_deref(), Some("milk"));
        assert_eq!(cursor.col(), 0);
    }

    #[test]
    fn test_word_movement() {
        let text = "walk the dog";
        let mut cursor = LineCursor::new();
        cursor.move_word_right(text);
        assert_eq!(cursor.col(), 5);
        cursor.move_end(text);
        cursor.move_word_left(text);
        assert_eq!(cursor.col(), 9);
        cursor.move_word_left(text);
        assert_eq!(cursor.col(), 5);
    }

    #[test]
    fn test_clamp_snaps_to_char_boundary() {
        let mut cursor = LineCursor::at_end("abcdef");
        cursor.clamp("あ");
        assert_eq!(cursor.col(), 3);
        cursor.clamp("");
        assert_eq!(cursor.col(), 0);
    }

    #[test]
    fn test_display_column_counts_wide_chars() {
        let cursor = LineCursor::at_end("牛乳a");
        assert_eq!(cursor.display_column("牛乳a"), 5);
    }

    #[test]
    fn test_move_left_right_stop_at_edges() {
        let mut cursor = LineCursor::new();
        cursor.move_left("ab");
        assert_eq!(cursor.col(), 0);
        cursor.move_end("ab");
        cursor.move_right("ab");
        assert_eq!(cursor.col(), 2);
    }
}
