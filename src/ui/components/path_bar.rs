// Path bar - 상단 경로 표시/편집 바
//
// 평소에는 현재 경로를 보여주고, 편집 중에는 입력 버퍼와 커서를 그린다.

use crate::app::text_edit::TextInput;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 경로 바 위젯
pub struct PathBar<'a> {
    input: &'a TextInput,
    /// 편집 중이 아닐 때 보여줄 문자열
    display: &'a str,
    editing: bool,
    bg_color: Color,
    fg_color: Color,
    focused_border_color: Color,
    unfocused_border_color: Color,
}

impl<'a> PathBar<'a> {
    pub fn new(input: &'a TextInput, display: &'a str) -> Self {
        Self {
            input,
            display,
            editing: false,
            bg_color: Color::Rgb(45, 45, 48),
            fg_color: Color::White,
            focused_border_color: Color::Rgb(0, 120, 212),
            unfocused_border_color: Color::Rgb(60, 60, 60),
        }
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.path_bar_bg.to_color();
        self.fg_color = theme.path_bar_fg.to_color();
        self.focused_border_color = theme.border_focused.to_color();
        self.unfocused_border_color = theme.border_unfocused.to_color();
        self
    }
}

/// 커서가 보이도록 잘라낸 (표시 문자열, 커서 열)
fn visible_window(value: &str, cursor: usize, max_cols: usize) -> (&str, usize) {
    let cursor_col = value[..cursor].width();
    if cursor_col < max_cols {
        return (value, cursor_col);
    }
    let need = cursor_col + 1 - max_cols;
    let mut skipped = 0;
    for (i, c) in value.char_indices() {
        if skipped >= need {
            return (&value[i..], cursor_col - skipped);
        }
        skipped += c.width().unwrap_or(0);
    }
    ("", 0)
}

/// 한 줄 입력 필드 (경로 바, 새 폴더 다이얼로그 공용)
///
/// 커서가 끝에 있으면 `▏`를, 글자 위에 있으면 반전된 칸을 그린다.
pub(crate) fn render_input(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    max_cols: usize,
    input: &TextInput,
    style: Style,
) {
    let (shown, cursor_col) = visible_window(input.value(), input.cursor(), max_cols);
    buf.set_stringn(x, y, shown, max_cols, style);

    if let Some(cell) = buf.cell_mut((x + cursor_col as u16, y)) {
        if input.cursor() < input.value().len() {
            let fg = style.fg.unwrap_or(Color::Reset);
            let bg = style.bg.unwrap_or(Color::Reset);
            cell.set_style(Style::default().fg(bg).bg(fg));
        } else {
            cell.set_char('▏');
            cell.set_style(style);
        }
    }
}

impl Widget for PathBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.editing {
            self.focused_border_color
        } else {
            self.unfocused_border_color
        };
        let title = if self.editing {
            " Location (Enter: go, Esc: cancel) "
        } else {
            " Location "
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.bg_color));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 2 || inner.height == 0 {
            return;
        }
        let max_cols = (inner.width - 1) as usize;
        let style = Style::default().fg(self.fg_color).bg(self.bg_color);

        if !self.editing {
            buf.set_stringn(inner.x + 1, inner.y, self.display, max_cols, style);
            return;
        }

        render_input(buf, inner.x + 1, inner.y, max_cols, self.input, style);
    }
}
