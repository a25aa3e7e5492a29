// Places sidebar - 바로가기 사이드바
//
// Home, Desktop, ... Root 순서로 표시. 현재 경로와 같은 항목은 표시 기호를 단다.

use crate::models::places::{PlaceName, PlaceTable};
use crate::ui::Theme;
use crate::utils::path_display::truncate_name;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

/// 사이드바 위젯
pub struct Sidebar<'a> {
    places: &'a PlaceTable,
    selected_index: usize,
    /// 현재 경로와 일치하는 항목
    current_index: Option<usize>,
    focused: bool,
    focused_border_color: Color,
    unfocused_border_color: Color,
    bg_color: Color,
    fg_color: Color,
    current_color: Color,
    cursor_fg: Color,
    cursor_bg: Color,
}

impl<'a> Sidebar<'a> {
    pub fn new(places: &'a PlaceTable) -> Self {
        Self {
            places,
            selected_index: 0,
            current_index: None,
            focused: false,
            focused_border_color: Color::Rgb(0, 120, 212),
            unfocused_border_color: Color::Rgb(60, 60, 60),
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            current_color: Color::Rgb(86, 156, 214),
            cursor_fg: Color::Rgb(255, 255, 255),
            cursor_bg: Color::Rgb(0, 120, 212),
        }
    }

    pub fn selected_index(mut self, index: usize) -> Self {
        self.selected_index = index;
        self
    }

    pub fn current_index(mut self, index: Option<usize>) -> Self {
        self.current_index = index;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.focused_border_color = theme.border_focused.to_color();
        self.unfocused_border_color = theme.border_unfocused.to_color();
        self.bg_color = theme.bg_primary.to_color();
        self.fg_color = theme.fg_primary.to_color();
        self.current_color = theme.directory.to_color();
        self.cursor_fg = theme.cursor_fg.to_color();
        self.cursor_bg = theme.cursor_bg.to_color();
        self
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            self.focused_border_color
        } else {
            self.unfocused_border_color
        };
        let block = Block::default()
            .title(" Places ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(self.bg_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut y = inner.y;
        for (index, place) in self.places.iter().enumerate() {
            // Root 앞 구분선
            if place.name == PlaceName::Root && y < inner.y + inner.height {
                buf.set_string(
                    inner.x,
                    y,
                    "─".repeat(inner.width as usize),
                    Style::default().fg(self.unfocused_border_color),
                );
                y += 1;
            }
            if y >= inner.y + inner.height {
                break;
            }

            let is_current = self.current_index == Some(index);
            let mut style = if is_current {
                Style::default()
                    .fg(self.current_color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.fg_color)
            };
            if self.focused && index == self.selected_index {
                style = Style::default().fg(self.cursor_fg).bg(self.cursor_bg);
                buf.set_style(Rect::new(inner.x, y, inner.width, 1), style);
            }

            let marker = if is_current { "▸" } else { " " };
            let label = truncate_name(place.name.label(), inner.width.saturating_sub(2) as usize);
            buf.set_string(inner.x, y, format!("{}{}", marker, label), style);
            y += 1;
        }
    }
}
