// Status bar component - 상태바 컴포넌트
//
// 왼쪽: 항목 수 요약 (또는 토스트/검색어), 오른쪽: 정렬 상태

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// 상태바 컴포넌트
pub struct StatusBar<'a> {
    /// "7 items (3 hidden)" 형식 요약
    summary: &'a str,
    /// 디렉토리를 읽지 못한 사유
    condition: Option<&'a str>,
    /// 잠깐 보여줄 알림 (요약보다 우선)
    toast: Option<&'a str>,
    /// 검색 중이면 검색어
    search: Option<&'a str>,
    /// 정렬 표시 ("Sort: Name ▲")
    sort_label: &'a str,
    bg_color: Color,
    fg_color: Color,
    accent_color: Color,
    warning_color: Color,
    error_color: Color,
    dim_color: Color,
}

impl Default for StatusBar<'_> {
    fn default() -> Self {
        Self {
            summary: "",
            condition: None,
            toast: None,
            search: None,
            sort_label: "",
            bg_color: Color::Rgb(30, 30, 30),
            fg_color: Color::Rgb(212, 212, 212),
            accent_color: Color::Rgb(0, 120, 212),
            warning_color: Color::Yellow,
            error_color: Color::Red,
            dim_color: Color::DarkGray,
        }
    }
}

impl<'a> StatusBar<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(mut self, summary: &'a str) -> Self {
        self.summary = summary;
        self
    }

    pub fn condition(mut self, condition: Option<&'a str>) -> Self {
        self.condition = condition;
        self
    }

    pub fn toast(mut self, toast: Option<&'a str>) -> Self {
        self.toast = toast;
        self
    }

    pub fn search(mut self, query: Option<&'a str>) -> Self {
        self.search = query;
        self
    }

    pub fn sort_label(mut self, label: &'a str) -> Self {
        self.sort_label = label;
        self
    }

    /// 테마 적용
    pub fn theme(mut self, theme: &Theme) -> Self {
        self.bg_color = theme.status_bar_bg.to_color();
        self.fg_color = theme.status_bar_fg.to_color();
        self.accent_color = theme.accent.to_color();
        self.warning_color = theme.warning.to_color();
        self.error_color = theme.error.to_color();
        self.dim_color = theme.file_hidden.to_color();
        self
    }

    /// 왼쪽 영역 스팬 (우선순위: 검색 > 토스트 > 요약)
    fn left_spans(&self) -> Vec<Span<'a>> {
        if let Some(query) = self.search {
            return vec![
                Span::styled(" /", Style::default().fg(self.accent_color)),
                Span::styled(query.to_string(), Style::default().fg(self.fg_color)),
                Span::styled("▏", Style::default().fg(self.accent_color)),
            ];
        }
        if let Some(toast) = self.toast {
            return vec![Span::styled(
                format!(" {}", toast),
                Style::default().fg(self.warning_color),
            )];
        }
        let mut spans = vec![Span::styled(
            format!(" {}", self.summary),
            Style::default().fg(self.fg_color),
        )];
        if let Some(condition) = self.condition {
            spans.push(Span::styled(
                format!(" | {}", condition),
                Style::default().fg(self.error_color),
            ));
        }
        spans
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.bg_color));

        let mut spans = self.left_spans();
        let right_info = format!("{} ", self.sort_label);

        let left_width: usize = spans.iter().map(|s| s.content.width()).sum();
        let padding_len = (area.width as usize).saturating_sub(left_width + right_info.width());
        spans.push(Span::raw(" ".repeat(padding_len)));
        spans.push(Span::styled(right_info, Style::default().fg(self.dim_color)));

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(bar: StatusBar) -> String {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..area.width)
            .filter_map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_summary_and_sort_label() {
        let text = rendered(
            StatusBar::new()
                .summary("7 items (3 hidden)")
                .sort_label("Sort: Name ▲"),
        );
        assert!(text.starts_with(" 7 items (3 hidden)"));
        assert!(text.trim_end().ends_with("Sort: Name ▲"));
    }

    #[test]
    fn test_toast_replaces_summary() {
        let text = rendered(StatusBar::new().summary("3 items").toast(Some("Refreshed")));
        assert!(text.contains("Refreshed"));
        assert!(!text.contains("3 items"));
    }

    #[test]
    fn test_condition_follows_summary() {
        let text = rendered(
            StatusBar::new()
                .summary("0 items")
                .condition(Some("Permission denied")),
        );
        assert!(text.contains("0 items | Permission denied"));
    }

    #[test]
    fn test_search_prompt() {
        let text = rendered(StatusBar::new().summary("3 items").search(Some("rep")));
        assert!(text.starts_with(" /rep"));
    }
}
