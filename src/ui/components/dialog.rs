//! 다이얼로그 위젯
//!
//! 새 폴더 이름 입력, 삭제 확인, 에러/메시지, 단축키 도움말.

use crate::app::text_edit::TextInput;
use crate::core::actions::generate_help_entries;
use crate::ui::Theme;
use crate::ui::components::path_bar::render_input;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Widget, Wrap},
};
use std::ffi::OsString;
use unicode_width::UnicodeWidthStr;

/// 본문 좌우 여백
const BODY_PADDING: u16 = 1;
/// 버튼 사이 간격
const BUTTON_GAP: u16 = 2;

/// 다이얼로그 종류
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogKind {
    /// 새 폴더 이름 입력
    NewFolder {
        input: TextInput,
        selected_button: usize, // 0: OK, 1: Cancel
    },
    /// 삭제 확인
    DeleteConfirm {
        /// 실제로 지울 파일 이름
        target: OsString,
        /// 표시용 이름
        name: String,
        is_directory: bool,
        selected_button: usize, // 0: Delete, 1: Cancel
    },
    /// 에러
    Error { title: String, message: String },
    /// 단축키 도움말
    Help { scroll_offset: usize },
}

impl DialogKind {
    pub fn new_folder() -> Self {
        DialogKind::NewFolder {
            input: TextInput::default(),
            selected_button: 0,
        }
    }

    /// 삭제 확인 (기본 선택은 Cancel)
    pub fn delete_confirm(
        target: impl Into<OsString>,
        name: impl Into<String>,
        is_directory: bool,
    ) -> Self {
        DialogKind::DeleteConfirm {
            target: target.into(),
            name: name.into(),
            is_directory,
            selected_button: 1,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        DialogKind::Error {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn help() -> Self {
        DialogKind::Help { scroll_offset: 0 }
    }

    /// 삭제 확인 문구
    pub fn delete_prompt(name: &str, is_directory: bool) -> String {
        if is_directory {
            format!("Delete folder '{}'?", name)
        } else {
            format!("Delete '{}'?", name)
        }
    }
}

/// 다이얼로그 색상 모음
struct Palette {
    body: Style,
    border: Color,
    title: Color,
    error: Color,
    key: Color,
    hint: Color,
    button: Style,
    button_selected: Style,
    field: Style,
}

impl From<&Theme> for Palette {
    fn from(theme: &Theme) -> Self {
        let fg = theme.fg_primary.to_color();
        Palette {
            body: Style::default().fg(fg).bg(theme.path_bar_bg.to_color()),
            border: theme.border_focused.to_color(),
            title: theme.accent.to_color(),
            error: theme.error.to_color(),
            key: theme.directory.to_color(),
            hint: theme.file_hidden.to_color(),
            button: Style::default()
                .fg(fg)
                .bg(theme.border_unfocused.to_color()),
            button_selected: Style::default()
                .fg(theme.cursor_fg.to_color())
                .bg(theme.cursor_bg.to_color())
                .add_modifier(Modifier::BOLD),
            field: Style::default().fg(fg).bg(theme.bg_primary.to_color()),
        }
    }
}

/// 화면 가운데에 뜨는 모달
pub struct Dialog<'a> {
    kind: &'a DialogKind,
    palette: Palette,
}

impl<'a> Dialog<'a> {
    pub fn new(kind: &'a DialogKind) -> Self {
        Dialog {
            kind,
            palette: Palette::from(&Theme::dark()),
        }
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.palette = Palette::from(theme);
        self
    }

    /// 종류별 크기 (너비, 높이)
    fn preferred_size(&self, screen: Rect) -> (u16, u16) {
        let fit = |wanted: u16, floor: u16| wanted.min(screen.width.saturating_sub(4)).max(floor);
        match self.kind {
            DialogKind::NewFolder { .. } => (fit(50, 30), 7),
            DialogKind::DeleteConfirm { .. } => (fit(46, 30), 7),
            DialogKind::Error { message, .. } => {
                (fit(56, 30), 6 + message.lines().count().max(1) as u16)
            }
            DialogKind::Help { .. } => (fit(56, 40), screen.height.saturating_sub(4).max(10)),
        }
    }

    fn centered(&self, screen: Rect) -> Rect {
        let (width, height) = self.preferred_size(screen);
        let width = width.min(screen.width.saturating_sub(2));
        let height = height.min(screen.height.saturating_sub(2));
        Rect::new(
            screen.x + (screen.width - width) / 2,
            screen.y + (screen.height - height) / 2,
            width,
            height,
        )
    }

    /// 테두리를 그리고 본문 영역 반환 (버튼 줄 제외)
    fn draw_frame(&self, buf: &mut Buffer, area: Rect, title: &str, alert: bool) -> Rect {
        let accent = if alert { self.palette.error } else { self.palette.title };
        let border = if alert { self.palette.error } else { self.palette.border };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(format!(" {} ", title)).fg(accent).bold())
            .border_style(Style::default().fg(border))
            .style(self.palette.body)
            .padding(Padding::new(BODY_PADDING, BODY_PADDING, 0, 0));
        let inner = block.inner(area);
        block.render(area, buf);
        Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        }
    }

    /// 하단 가운데 버튼 줄. 버튼은 `[ 라벨 ]`이 아니라 배경색으로 구분한다.
    fn draw_buttons(&self, buf: &mut Buffer, area: Rect, labels: &[&str], selected: usize) {
        let widths: Vec<u16> = labels.iter().map(|l| l.width() as u16 + 2).collect();
        let total = widths.iter().sum::<u16>() + BUTTON_GAP * (labels.len() as u16 - 1);
        let y = area.bottom().saturating_sub(2);
        let mut x = area.x + area.width.saturating_sub(total) / 2;
        for (i, (label, width)) in labels.iter().zip(&widths).enumerate() {
            let style = if i == selected {
                self.palette.button_selected
            } else {
                self.palette.button
            };
            buf.set_string(x, y, format!(" {} ", label), style);
            x += width + BUTTON_GAP;
        }
    }

    fn draw_text(&self, buf: &mut Buffer, body: Rect, text: &str) {
        Paragraph::new(text)
            .style(self.palette.body)
            .wrap(Wrap { trim: true })
            .render(body, buf);
    }

    fn draw_new_folder(&self, buf: &mut Buffer, area: Rect, input: &TextInput, selected: usize) {
        let body = self.draw_frame(buf, area, "New Folder", false);
        buf.set_string(body.x, body.y, "Folder name:", self.palette.body);

        let field = Rect::new(body.x, body.y + 1, body.width, 1);
        buf.set_style(field, self.palette.field);
        let max_cols = field.width.saturating_sub(2) as usize;
        render_input(buf, field.x + 1, field.y, max_cols, input, self.palette.field);

        self.draw_buttons(buf, area, &["OK", "Cancel"], selected);
    }

    fn draw_help(&self, buf: &mut Buffer, area: Rect, scroll_offset: usize) {
        let body = self.draw_frame(buf, area, "Keyboard Shortcuts", false);

        let mut lines: Vec<Line> = Vec::new();
        for (category, items) in generate_help_entries() {
            lines.push(Line::from(category.fg(self.palette.title).bold()));
            for (key, label) in items {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(format!("{:<14}", key), Style::default().fg(self.palette.key)),
                    Span::raw(label),
                ]));
            }
            lines.push(Line::default());
        }

        let max_offset = lines.len().saturating_sub(body.height as usize);
        let offset = scroll_offset.min(max_offset) as u16;
        Paragraph::new(lines)
            .style(self.palette.body)
            .scroll((offset, 0))
            .render(body, buf);

        let hint = "Esc/?:Close  j/k:Scroll";
        let x = area.x + area.width.saturating_sub(hint.width() as u16) / 2;
        buf.set_string(x, area.bottom().saturating_sub(2), hint, Style::default().fg(self.palette.hint));
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = self.centered(area);
        Clear.render(area, buf);

        match self.kind {
            DialogKind::NewFolder {
                input,
                selected_button,
            } => self.draw_new_folder(buf, area, input, *selected_button),
            DialogKind::DeleteConfirm {
                name,
                is_directory,
                selected_button,
                ..
            } => {
                let body = self.draw_frame(buf, area, "Delete", true);
                self.draw_text(buf, body, &DialogKind::delete_prompt(name, *is_directory));
                self.draw_buttons(buf, area, &["Delete", "Cancel"], *selected_button);
            }
            DialogKind::Error { title, message } => {
                let body = self.draw_frame(buf, area, title, true);
                self.draw_text(buf, body, message);
                self.draw_buttons(buf, area, &["OK"], 0);
            }
            DialogKind::Help { scroll_offset } => self.draw_help(buf, area, *scroll_offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in area.y..area.y + area.height {
            for x in area.x..area.x + area.width {
                text.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_delete_confirm_defaults_to_cancel() {
        match DialogKind::delete_confirm("notes.txt", "notes.txt", false) {
            DialogKind::DeleteConfirm {
                selected_button, ..
            } => assert_eq!(selected_button, 1),
            other => panic!("unexpected dialog: {:?}", other),
        }
    }

    #[test]
    fn test_delete_prompt() {
        assert_eq!(DialogKind::delete_prompt("a.txt", false), "Delete 'a.txt'?");
        assert_eq!(DialogKind::delete_prompt("dir", true), "Delete folder 'dir'?");
    }

    #[test]
    fn test_render_delete_confirm() {
        let kind = DialogKind::delete_confirm("report.pdf", "report.pdf", false);
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        Dialog::new(&kind).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Delete 'report.pdf'?"));
        assert!(text.contains(" Cancel "));
    }

    #[test]
    fn test_render_new_folder_shows_input() {
        let mut input = TextInput::default();
        for c in "photos".chars() {
            input.insert_char(c);
        }
        let kind = DialogKind::NewFolder {
            input,
            selected_button: 0,
        };
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        Dialog::new(&kind).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("New Folder"));
        assert!(text.contains("photos"));
    }

    #[test]
    fn test_render_help_lists_bindings() {
        let kind = DialogKind::help();
        let area = Rect::new(0, 0, 80, 40);
        let mut buf = Buffer::empty(area);
        Dialog::new(&kind).render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Keyboard Shortcuts"));
        assert!(text.contains("Show/hide hidden files"));
    }
}
