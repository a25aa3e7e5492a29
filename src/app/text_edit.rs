/// 한 줄 텍스트 입력 버퍼
///
/// 경로 바, 검색어, 새 폴더 이름 입력이 함께 쓴다.
/// `cursor`는 바이트 인덱스이며 항상 char 경계에 있다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// 초기값을 넣고 커서를 끝에 둔다
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.len();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// 내용 교체, 커서는 끝으로
    pub fn set(&mut self, value: impl Into<String>) {
        *self = Self::with_value(value);
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Ctrl+W: 커서 앞 경로 구성 요소 하나 삭제
    ///
    /// 커서 바로 앞의 '/'들을 먼저 지우고, 그 앞 '/'까지 지운다.
    pub fn delete_prev_segment(&mut self) {
        let head = &self.value[..self.cursor];
        let trimmed = head.trim_end_matches('/');
        let start = trimmed.rfind('/').map(|i| i + 1).unwrap_or(0);
        self.value.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::TextInput;

    #[test]
    fn test_insert_backspace_delete_utf8() {
        let mut input = TextInput::with_value("\u{AC00}\u{B098}");
        input.left();
        assert_eq!(input.cursor(), "\u{AC00}".len());

        input.insert_char('\u{B2E4}');
        assert_eq!(input.value(), "\u{AC00}\u{B2E4}\u{B098}");

        input.backspace();
        assert_eq!(input.value(), "\u{AC00}\u{B098}");
        assert_eq!(input.cursor(), "\u{AC00}".len());

        input.home();
        input.delete();
        assert_eq!(input.value(), "\u{B098}");
        assert_eq!(input.cursor(), 0);

        input.backspace();
        assert_eq!(input.value(), "\u{B098}");
    }

    #[test]
    fn test_cursor_movement_bounds() {
        let mut input = TextInput::with_value("a\u{AC00}b");
        input.right();
        assert_eq!(input.cursor(), input.value().len());

        input.left();
        input.left();
        assert_eq!(input.cursor(), 1);

        input.home();
        input.left();
        assert_eq!(input.cursor(), 0);

        input.end();
        assert_eq!(input.cursor(), input.value().len());
    }

    #[test]
    fn test_delete_prev_segment() {
        let mut input = TextInput::with_value("/home/user/Documents/");
        input.delete_prev_segment();
        assert_eq!(input.value(), "/home/user/");

        input.delete_prev_segment();
        assert_eq!(input.value(), "/home/");

        let mut input = TextInput::with_value("relative");
        input.delete_prev_segment();
        assert!(input.is_empty());
    }

    #[test]
    fn test_set_and_clear() {
        let mut input = TextInput::default();
        input.set("/tmp");
        assert_eq!(input.cursor(), 4);
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }
}
