use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Single-line text input with a character-indexed cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CursorBuffer {
    content: String,
    cursor_char_pos: usize,
}

impl CursorBuffer {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor_char_pos = content.chars().count();
        Self {
            content,
            cursor_char_pos,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    fn byte_pos(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map_or(self.content.len(), |(i, _)| i)
    }

    #[must_use]
    pub fn cursor_char_pos(&self) -> usize {
        self.cursor_char_pos
    }

    #[must_use]
    pub fn cursor_display_pos(&self) -> usize {
        self.content
            .chars()
            .take(self.cursor_char_pos)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content with surrounding whitespace removed, as forms store it.
    #[must_use]
    pub fn trimmed(&self) -> &str {
        self.content.trim()
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_pos = self.byte_pos(self.cursor_char_pos);
        self.content.insert(byte_pos, c);
        self.cursor_char_pos += 1;
    }

    pub fn delete_char_before(&mut self) -> bool {
        if self.cursor_char_pos == 0 {
            return false;
        }
        self.cursor_char_pos -= 1;
        let byte_pos = self.byte_pos(self.cursor_char_pos);
        self.content.remove(byte_pos);
        true
    }

    pub fn delete_char_after(&mut self) -> bool {
        if self.cursor_char_pos >= self.content.chars().count() {
            return false;
        }
        let byte_pos = self.byte_pos(self.cursor_char_pos);
        self.content.remove(byte_pos);
        true
    }

    pub fn delete_word_before(&mut self) {
        let end = self.cursor_char_pos;
        self.move_word_left();
        let start_byte = self.byte_pos(self.cursor_char_pos);
        let end_byte = self.byte_pos(end);
        self.content.replace_range(start_byte..end_byte, "");
    }

    pub fn move_left(&mut self) {
        self.cursor_char_pos = self.cursor_char_pos.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor_char_pos < self.content.chars().count() {
            self.cursor_char_pos += 1;
        }
    }

    pub fn move_to_start(&mut self) {
        self.cursor_char_pos = 0;
    }

    pub fn move_to_end(&mut self) {
        self.cursor_char_pos = self.content.chars().count();
    }

    pub fn move_word_left(&mut self) {
        let chars: Vec<char> = self.content.chars().collect();
        let mut pos = self.cursor_char_pos;
        while pos > 0 && chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        while pos > 0 && !chars[pos - 1].is_whitespace() {
            pos -= 1;
        }
        self.cursor_char_pos = pos;
    }

    pub fn move_word_right(&mut self) {
        let chars: Vec<char> = self.content.chars().collect();
        let mut pos = self.cursor_char_pos;
        while pos < chars.len() && !chars[pos].is_whitespace() {
            pos += 1;
        }
        while pos < chars.len() && chars[pos].is_whitespace() {
            pos += 1;
        }
        self.cursor_char_pos = pos;
    }

    pub fn delete_to_start(&mut self) {
        let byte_pos = self.byte_pos(self.cursor_char_pos);
        self.content.replace_range(..byte_pos, "");
        self.cursor_char_pos = 0;
    }

    pub fn delete_to_end(&mut self) {
        let byte_pos = self.byte_pos(self.cursor_char_pos);
        self.content.truncate(byte_pos);
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_char_pos = 0;
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor_char_pos = self.content.chars().count();
    }

    /// The slice of content to draw in a field `width` cells wide so that the
    /// cursor stays visible, plus the cursor column within that slice.
    #[must_use]
    pub fn visible_window(&self, width: usize) -> (String, usize) {
        let cursor = self.cursor_display_pos();
        if width == 0 {
            return (String::new(), 0);
        }
        if self.content.width() < width || cursor < width {
            let shown: String = take_width(self.content.chars(), width);
            return (shown, cursor.min(width.saturating_sub(1)));
        }

        // Scroll so the cursor sits on the last column.
        let skip = cursor + 1 - width;
        let mut skipped = 0;
        let rest = self.content.chars().skip_while(|c| {
            if skipped >= skip {
                return false;
            }
            skipped += c.width().unwrap_or(0);
            true
        });
        let shown = take_width(rest, width);
        (shown, cursor.saturating_sub(skipped))
    }
}

fn take_width(chars: impl Iterator<Item = char>, width: usize) -> String {
    let mut used = 0;
    chars
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_traverses_as_single_character() {
        let mut buf = CursorBuffer::new("a🎉b");
        assert_eq!(buf.cursor_char_pos(), 3);
        buf.move_left();
        buf.move_left();
        assert_eq!(buf.cursor_char_pos(), 1);
        assert_eq!(buf.cursor_display_pos(), 1);
    }

    #[test]
    fn delete_removes_whole_emoji() {
        let mut buf = CursorBuffer::new("a🎉b");
        buf.move_left();
        assert!(buf.delete_char_before());
        assert_eq!(buf.content(), "ab");
        assert_eq!(buf.cursor_char_pos(), 1);
    }

    #[test]
    fn accented_names_insert_correctly() {
        let mut buf = CursorBuffer::new("Pérez");
        buf.move_to_start();
        buf.insert_char('J');
        buf.insert_char(' ');
        assert_eq!(buf.content(), "J Pérez");
    }

    #[test]
    fn delete_word_before_stops_at_whitespace() {
        let mut buf = CursorBuffer::new("press tonnage 400");
        buf.delete_word_before();
        assert_eq!(buf.content(), "press tonnage ");
        buf.delete_word_before();
        assert_eq!(buf.content(), "press ");
    }

    #[test]
    fn delete_to_start_and_end() {
        let mut buf = CursorBuffer::new("Servo 400t");
        buf.move_word_left();
        buf.delete_to_end();
        assert_eq!(buf.content(), "Servo ");
        buf.delete_to_start();
        assert_eq!(buf.content(), "");
        assert_eq!(buf.cursor_char_pos(), 0);
    }

    #[test]
    fn move_word_right_skips_trailing_space() {
        let mut buf = CursorBuffer::new("DP600 steel");
        buf.move_to_start();
        buf.move_word_right();
        assert_eq!(buf.cursor_char_pos(), 6);
    }

    #[test]
    fn trimmed_and_blank() {
        let buf = CursorBuffer::new("  Acme  ");
        assert_eq!(buf.trimmed(), "Acme");
        assert!(CursorBuffer::new("   ").is_blank());
    }

    #[test]
    fn visible_window_keeps_cursor_in_view() {
        let buf = CursorBuffer::new("0123456789");
        let (shown, col) = buf.visible_window(4);
        assert_eq!(shown, "789");
        assert_eq!(col, 3);

        let mut buf = CursorBuffer::new("abc");
        buf.move_to_start();
        let (shown, col) = buf.visible_window(10);
        assert_eq!(shown, "abc");
        assert_eq!(col, 0);
    }
}
