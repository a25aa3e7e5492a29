// 하단 단축키 안내 줄. 항목 목록은 core::actions가 만든다.

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

/// 단축키 하나 ("F5" + "Refresh")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandItem {
    pub key: String,
    pub label: String,
}

impl CommandItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        CommandItem {
            key: key.into(),
            label: label.into(),
        }
    }

    /// `key:label` 표시 폭
    fn width(&self) -> usize {
        self.key.width() + 1 + self.label.width()
    }
}

/// 들어가는 만큼만 그리고 나머지 항목은 생략한다
#[derive(Default)]
pub struct CommandBar {
    items: Vec<CommandItem>,
    base: Style,
    key_style: Style,
}

impl CommandBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(mut self, items: Vec<CommandItem>) -> Self {
        self.items = items;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.base = Style::default()
            .fg(theme.command_bar_fg.to_color())
            .bg(theme.command_bar_bg.to_color());
        self.key_style = Style::default()
            .fg(theme.accent.to_color())
            .add_modifier(Modifier::BOLD);
        self
    }

    /// 너비 안에 들어가는 앞쪽 항목 수
    fn fitting(&self, max_width: usize) -> usize {
        let mut used = 1;
        self.items
            .iter()
            .take_while(|item| {
                used += item.width() + 1;
                used <= max_width + 1
            })
            .count()
    }
}

impl Widget for CommandBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.base);
        if area.height == 0 {
            return;
        }

        let shown = self.fitting(area.width as usize);
        let mut spans = Vec::with_capacity(shown * 3 + 1);
        spans.push(Span::raw(" "));
        for item in &self.items[..shown] {
            spans.push(Span::styled(item.key.as_str(), self.key_style));
            spans.push(Span::raw(":"));
            spans.push(Span::raw(format!("{} ", item.label)));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_command_bar_items;

    fn render_line(bar: CommandBar, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..width)
            .filter_map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_render_generated_items() {
        let text = render_line(CommandBar::new().commands(generate_command_bar_items()), 120);
        assert!(text.contains("F5:Refresh"));
        assert!(text.contains("q:Quit"));
    }

    #[test]
    fn test_items_that_do_not_fit_are_dropped() {
        let items = vec![
            CommandItem::new("F1", "Help"),
            CommandItem::new("F5", "Refresh"),
        ];
        // " F1:Help " = 9 cells, F5 항목은 들어가지 않는다
        let text = render_line(CommandBar::new().commands(items), 14);
        assert!(text.starts_with(" F1:Help"));
        assert!(!text.contains("F5"));
    }
}
