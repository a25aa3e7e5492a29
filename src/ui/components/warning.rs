// 터미널이 최소 크기보다 작을 때 본 화면 대신 그리는 안내 화면

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget},
};

use crate::ui::layout::{MIN_HEIGHT, MIN_WIDTH};
use crate::ui::Theme;

pub struct WarningScreen {
    width: u16,
    height: u16,
    base: Style,
    alert: Color,
    too_small: Color,
    enough: Color,
}

impl Default for WarningScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl WarningScreen {
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            base: Style::default(),
            alert: Color::Yellow,
            too_small: Color::Red,
            enough: Color::Green,
        }
    }

    pub fn current_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn theme(mut self, theme: &Theme) -> Self {
        self.base = Style::default()
            .fg(theme.fg_primary.to_color())
            .bg(theme.bg_primary.to_color());
        self.alert = theme.warning.to_color();
        self.too_small = theme.error.to_color();
        self.enough = theme.success.to_color();
        self
    }
}

impl Widget for WarningScreen {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let dimension = |label: &'static str, w: u16, h: u16, color: Color| {
            Line::from(vec![
                Span::raw(label),
                Span::styled(
                    format!("{}x{}", w, h),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ])
        };

        let text = vec![
            Line::from("Terminal too small".fg(self.alert).bold()),
            Line::default(),
            dimension("Current: ", self.width, self.height, self.too_small),
            dimension("Required: ", MIN_WIDTH, MIN_HEIGHT, self.enough),
            Line::default(),
            Line::from("Resize the window or press q to quit").dim(),
        ];

        // 세로 가운데 정렬
        let inner_height = area.height.saturating_sub(2);
        let top = inner_height.saturating_sub(text.len() as u16) / 2;

        Paragraph::new(text)
            .style(self.base)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(self.alert))
                    .padding(Padding::top(top)),
            )
            .render(area, buf);
    }
}
