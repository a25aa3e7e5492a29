// File table component - 디렉토리 리스트 표
//
// Name / Size / Modified 컬럼, 커서 강조, 정렬 표시

use crate::models::file_entry::ListingRow;
use crate::models::sort::{SortBy, SortOrder};
use crate::ui::Theme;
use crate::utils::path_display::{pad_to_width, truncate_name};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};
use serde::{Deserialize, Serialize};

/// 아이콘 표시 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    /// 이모지 아이콘 (기본)
    #[default]
    Emoji,
    /// ASCII 텍스트 아이콘 (터미널 호환)
    Ascii,
}

impl IconMode {
    pub fn toggle(self) -> Self {
        match self {
            IconMode::Emoji => IconMode::Ascii,
            IconMode::Ascii => IconMode::Emoji,
        }
    }

    /// 아이콘 (표시 너비 2칸)
    fn icon(&self, is_directory: bool) -> &'static str {
        match (self, is_directory) {
            (IconMode::Emoji, true) => "📁",
            (IconMode::Emoji, false) => "📄",
            (IconMode::Ascii, true) => "/ ",
            (IconMode::Ascii, false) => "  ",
        }
    }
}

/// 크기 컬럼 너비
const SIZE_WIDTH: usize = 10;
/// 수정 시간 컬럼 너비 ("YYYY-MM-DD HH:MM")
const DATE_WIDTH: usize = 16;

/// 디렉토리 리스트 위젯
pub struct FileTable<'a> {
    title: &'a str,
    rows: &'a [&'a ListingRow],
    selected_index: usize,
    scroll_offset: usize,
    focused: bool,
    icon_mode: IconMode,
    sort_by: SortBy,
    sort_order: SortOrder,
    /// 리스트가 비었을 때 보여줄 문구
    empty_message: Option<&'a str>,
    focused_border_color: Color,
    unfocused_border_color: Color,
    bg_color: Color,
    file_color: Color,
    hidden_color: Color,
    directory_color: Color,
    cursor_fg: Color,
    cursor_bg: Color,
    header_color: Color,
    error_color: Color,
}

impl Default for FileTable<'_> {
    fn default() -> Self {
        Self {
            title: "",
            rows: &[],
            selected_index: 0,
            scroll_offset: 0,
            focused: true,
            icon_mode: IconMode::default(),
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
            empty_message: None,
            focused_border_color: Color::Rgb(0, 120, 212),
            unfocused_border_color: Color::Rgb(60, 60, 60),
            bg_color: Color::Rgb(30, 30, 30),
            file_color: Color::Rgb(212, 212, 212),
            hidden_color: Color::Rgb(128, 128, 128),
            directory_color: Color::Rgb(86, 156, 214),
            cursor_fg: Color::Rgb(255, 255, 255),
            cursor_bg: Color::Rgb(0, 120, 212),
            header_color: Color::Rgb(150, 150, 150),
            error_color: Color::Rgb(244, 71, 71),
        }
    }
}

impl<'a> FileTable<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 제목 (현재 경로 표시 문자열)
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// 표시 순서대로 정렬된 행
    pub fn rows(mut self, rows: &'a [&'a ListingRow]) -> Self {
        self.rows = rows;
        self
    }

    pub fn selected_index(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn icon_mode(mut self, mode: IconMode) -> Self {
        self.icon_mode = mode;
        self
    }

    pub fn sort_state(mut self, sort_by: SortBy, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    pub fn empty_message(mut self, message: Option<&'a str>) -> Self {
        self.empty_message = message;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.focused_border_color = theme.border_focused.to_color();
        self.unfocused_border_color = theme.border_unfocused.to_color();
        self.bg_color = theme.bg_primary.to_color();
        self.file_color = theme.file_normal.to_color();
        self.hidden_color = theme.file_hidden.to_color();
        self.directory_color = theme.directory.to_color();
        self.cursor_fg = theme.cursor_fg.to_color();
        self.cursor_bg = theme.cursor_bg.to_color();
        self.header_color = theme.column_header.to_color();
        self.error_color = theme.error.to_color();
        self
    }

    fn name_width(inner_width: usize) -> usize {
        // 좌측 여백 1 + 아이콘 2 + 공백 1 + 컬럼 사이 공백 2
        inner_width.saturating_sub(SIZE_WIDTH + DATE_WIDTH + 6)
    }

    fn header_label(&self, column: SortBy, label: &str) -> String {
        if self.sort_by == column {
            format!("{} {}", label, self.sort_order.arrow())
        } else {
            label.to_string()
        }
    }

    fn render_header(&self, inner: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.header_color)
            .add_modifier(Modifier::BOLD);
        let name_width = Self::name_width(inner.width as usize) + 3;
        let spans = vec![
            Span::raw(" "),
            Span::styled(
                format!("{:<w$}", self.header_label(SortBy::Name, "Name"), w = name_width),
                style,
            ),
            Span::raw(" "),
            Span::styled(
                format!("{:>w$}", self.header_label(SortBy::Size, "Size"), w = SIZE_WIDTH),
                style,
            ),
            Span::raw(" "),
            Span::styled(
                format!("{:<w$}", self.header_label(SortBy::Modified, "Modified"), w = DATE_WIDTH),
                style,
            ),
        ];
        buf.set_line(inner.x, inner.y, &Line::from(spans), inner.width);

        let separator = "─".repeat(inner.width as usize);
        buf.set_string(
            inner.x,
            inner.y + 1,
            separator,
            Style::default().fg(self.unfocused_border_color),
        );
    }

    fn render_row(&self, row: &ListingRow, is_cursor: bool, x: u16, y: u16, width: u16, buf: &mut Buffer) {
        let base = if row.is_directory() {
            Style::default().fg(self.directory_color)
        } else if row.is_hidden() {
            Style::default().fg(self.hidden_color)
        } else {
            Style::default().fg(self.file_color)
        };
        let style = if is_cursor && self.focused {
            Style::default().fg(self.cursor_fg).bg(self.cursor_bg)
        } else if is_cursor {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        };

        if is_cursor {
            buf.set_style(Rect::new(x, y, width, 1), style);
        }

        let name_width = Self::name_width(width as usize);
        let icon = self.icon_mode.icon(row.is_directory());
        let name = truncate_name(&row.name, name_width);
        let spans = vec![
            Span::styled(" ", style),
            Span::styled(icon, style),
            Span::styled(" ", style),
            Span::styled(pad_to_width(&name, name_width), style),
            Span::styled(" ", style),
            Span::styled(format!("{:>w$}", row.size_text, w = SIZE_WIDTH), style),
            Span::styled(" ", style),
            Span::styled(format!("{:<w$}", row.modified_text, w = DATE_WIDTH), style),
        ];
        buf.set_line(x, y, &Line::from(spans), width);
    }
}

impl Widget for FileTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            self.focused_border_color
        } else {
            self.unfocused_border_color
        };
        let title_style = if self.focused {
            Style::default()
                .fg(self.file_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.file_color)
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", self.title), title_style))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.bg_color));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 3 || inner.width == 0 {
            return;
        }

        self.render_header(inner, buf);

        let body_y = inner.y + 2;
        let body_height = (inner.height - 2) as usize;

        if self.rows.is_empty() {
            let (text, color) = match self.empty_message {
                Some(message) => (message, self.error_color),
                None => ("(empty)", self.hidden_color),
            };
            buf.set_stringn(
                inner.x + 1,
                body_y,
                text,
                inner.width.saturating_sub(1) as usize,
                Style::default().fg(color),
            );
            return;
        }

        for (line, (index, row)) in self
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(body_height)
            .enumerate()
        {
            self.render_row(
                row,
                index == self.selected_index,
                inner.x,
                body_y + line as u16,
                inner.width,
                buf,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::file_entry::{DirectoryEntry, EntryKind};
    use std::time::SystemTime;

    fn row(name: &str, kind: EntryKind, size: u64) -> ListingRow {
        DirectoryEntry::new(name.to_string(), kind, size, SystemTime::now()).to_row()
    }

    fn line_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .filter_map(|x| buf.cell((x, y)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_icon_mode_toggle() {
        assert_eq!(IconMode::Emoji.toggle(), IconMode::Ascii);
        assert_eq!(IconMode::Ascii.toggle(), IconMode::Emoji);
        assert_eq!(IconMode::Ascii.icon(true), "/ ");
    }

    #[test]
    fn test_header_shows_sort_arrow() {
        let table = FileTable::new().sort_state(SortBy::Size, SortOrder::Descending);
        assert_eq!(table.header_label(SortBy::Size, "Size"), "Size ▼");
        assert_eq!(table.header_label(SortBy::Name, "Name"), "Name");
    }

    #[test]
    fn test_render_rows_and_sizes() {
        let docs = row("docs", EntryKind::Directory, 0);
        let notes = row("notes.txt", EntryKind::File, 2048);
        let rows = vec![&docs, &notes];

        let area = Rect::new(0, 0, 70, 8);
        let mut buf = Buffer::empty(area);
        FileTable::new()
            .title("~/work")
            .rows(&rows)
            .icon_mode(IconMode::Ascii)
            .render(area, &mut buf);

        assert!(line_text(&buf, 0).contains("~/work"));
        assert!(line_text(&buf, 1).contains("Name"));
        assert!(line_text(&buf, 3).contains("docs"));
        let file_line = line_text(&buf, 4);
        assert!(file_line.contains("notes.txt"));
        assert!(file_line.contains("2.0 KB"));
    }

    #[test]
    fn test_render_empty_with_condition() {
        let area = Rect::new(0, 0, 70, 8);
        let mut buf = Buffer::empty(area);
        FileTable::new()
            .empty_message(Some("Cannot read directory /root: Permission denied"))
            .render(area, &mut buf);

        assert!(line_text(&buf, 3).contains("Permission denied"));
    }
}
