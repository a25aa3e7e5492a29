// Layout system - 화면 영역 계산
//
// 경로 바 | (사이드바 + 리스트) | 상태바 | 커맨드바
// 60x12 미만이면 경고 화면만 표시

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 최소 터미널 크기
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 12;

/// 사이드바 너비 (테두리 포함)
pub const SIDEBAR_WIDTH: u16 = 18;

/// 레이아웃 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Normal,
    /// 터미널이 너무 작음
    TooSmall,
}

/// 계산된 화면 영역
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutAreas {
    pub path_bar: Rect,
    pub sidebar: Rect,
    pub listing: Rect,
    pub status_bar: Rect,
    pub command_bar: Rect,
    /// TooSmall 모드에서만 사용
    pub warning: Rect,
}

/// 레이아웃 매니저
#[derive(Debug)]
pub struct LayoutManager {
    mode: LayoutMode,
    terminal_size: (u16, u16),
    areas: LayoutAreas,
}

impl Default for LayoutManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutManager {
    pub fn new() -> Self {
        Self {
            mode: LayoutMode::Normal,
            terminal_size: (80, 24),
            areas: LayoutAreas::default(),
        }
    }

    fn determine_mode(width: u16, height: u16) -> LayoutMode {
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            LayoutMode::TooSmall
        } else {
            LayoutMode::Normal
        }
    }

    /// 터미널 크기 반영 및 영역 재계산
    pub fn update(&mut self, area: Rect) {
        self.terminal_size = (area.width, area.height);
        self.mode = Self::determine_mode(area.width, area.height);
        self.areas = match self.mode {
            LayoutMode::TooSmall => LayoutAreas {
                warning: area,
                ..Default::default()
            },
            LayoutMode::Normal => Self::calculate_areas(area),
        };
    }

    fn calculate_areas(area: Rect) -> LayoutAreas {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // 경로 바 (테두리 포함)
                Constraint::Min(3),    // 본문
                Constraint::Length(1), // 상태바
                Constraint::Length(1), // 커맨드바
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .split(rows[1]);

        LayoutAreas {
            path_bar: rows[0],
            sidebar: body[0],
            listing: body[1],
            status_bar: rows[2],
            command_bar: rows[3],
            warning: Rect::default(),
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn areas(&self) -> &LayoutAreas {
        &self.areas
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn is_too_small(&self) -> bool {
        self.mode == LayoutMode::TooSmall
    }

    /// 리스트 본문에 보이는 행 수 (테두리 2줄, 헤더와 구분선 제외)
    pub fn listing_visible_rows(&self) -> usize {
        self.areas.listing.height.saturating_sub(4).max(1) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_mode() {
        assert_eq!(LayoutManager::determine_mode(80, 24), LayoutMode::Normal);
        assert_eq!(LayoutManager::determine_mode(60, 12), LayoutMode::Normal);
        assert_eq!(LayoutManager::determine_mode(59, 24), LayoutMode::TooSmall);
        assert_eq!(LayoutManager::determine_mode(80, 11), LayoutMode::TooSmall);
    }

    #[test]
    fn test_areas_cover_screen() {
        let mut manager = LayoutManager::new();
        manager.update(Rect::new(0, 0, 100, 30));
        let areas = manager.areas();

        assert_eq!(areas.path_bar, Rect::new(0, 0, 100, 3));
        assert_eq!(areas.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(areas.listing.x, SIDEBAR_WIDTH);
        assert_eq!(areas.listing.width, 100 - SIDEBAR_WIDTH);
        assert_eq!(areas.status_bar.y, 28);
        assert_eq!(areas.command_bar.y, 29);
        assert_eq!(manager.listing_visible_rows(), 25 - 4);
    }

    #[test]
    fn test_too_small_uses_whole_area_for_warning() {
        let mut manager = LayoutManager::new();
        let area = Rect::new(0, 0, 40, 10);
        manager.update(area);

        assert!(manager.is_too_small());
        assert_eq!(manager.areas().warning, area);
        assert_eq!(manager.areas().listing, Rect::default());
    }
}
