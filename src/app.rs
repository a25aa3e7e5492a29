use crate::models::sort::{display_order, SortBy, SortOrder};
use crate::models::{ListingRow, NavigationState, PlaceTable, Snapshot};
use crate::system::FileSystem;
use crate::ui::{DialogKind, IconMode, LayoutManager, ThemeManager};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

mod controllers;
mod dialogs;
mod navigation;
pub mod settings;
pub mod text_edit;

use settings::Settings;
use text_edit::TextInput;

/// 키 입력을 받는 영역
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// 디렉토리 리스트
    #[default]
    Listing,
    /// 바로가기 사이드바
    Places,
    /// 경로 입력
    PathBar,
    /// 리스트 내 검색 (type-ahead)
    Search,
}

/// 앱 상태
pub struct App {
    /// 종료 플래그
    pub should_quit: bool,
    /// 레이아웃 매니저
    pub layout: LayoutManager,
    /// 파일 시스템
    pub filesystem: FileSystem,
    /// 탐색 상태 (유일한 소유자)
    nav: NavigationState,
    /// 마지막으로 게시된 스냅샷
    snapshot: Snapshot,
    /// 화면 표시 순서 (snapshot.listing 인덱스)
    order: Vec<usize>,
    /// 바로가기 테이블
    pub places: PlaceTable,
    /// 현재 포커스
    pub focus: Focus,
    /// 리스트 커서 (표시 순서 기준)
    pub selected_index: usize,
    /// 리스트 스크롤 오프셋
    pub scroll_offset: usize,
    /// 사이드바 커서
    pub place_index: usize,
    /// 경로 바 입력
    pub path_input: TextInput,
    /// 검색어 입력
    pub search_input: TextInput,
    /// 현재 표시 중인 다이얼로그
    pub dialog: Option<DialogKind>,
    /// 토스트 메시지 (3초 후 자동 소멸)
    pub toast_message: Option<(String, Instant)>,
    /// 테마 관리자
    pub theme_manager: ThemeManager,
    /// 아이콘 표시 모드
    pub icon_mode: IconMode,
    /// 삭제 전 확인 여부
    pub confirm_delete: bool,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl App {
    /// 홈 디렉토리에서 시작
    pub fn new(settings: &Settings) -> Self {
        let filesystem = FileSystem::new();
        let nav = NavigationState::initial(&filesystem);
        let mut app = Self::with_state(filesystem, nav, PlaceTable::for_current_user());
        app.apply_settings(settings);
        app
    }

    /// 지정 디렉토리에서 시작 (바로가기는 그 디렉토리를 홈으로 취급)
    #[cfg(test)]
    pub(crate) fn new_for_test(path: &Path) -> Self {
        let filesystem = FileSystem::new();
        let nav = NavigationState::new(path.to_path_buf());
        Self::with_state(filesystem, nav, PlaceTable::new(path))
    }

    fn with_state(filesystem: FileSystem, nav: NavigationState, places: PlaceTable) -> Self {
        let snapshot = nav.refresh(&filesystem);
        let path_input = TextInput::with_value(snapshot.path.to_string_lossy());
        let mut app = Self {
            should_quit: false,
            layout: LayoutManager::new(),
            filesystem,
            nav,
            snapshot: Snapshot::empty(PathBuf::new(), false),
            order: Vec::new(),
            places,
            focus: Focus::Listing,
            selected_index: 0,
            scroll_offset: 0,
            place_index: 0,
            path_input,
            search_input: TextInput::default(),
            dialog: None,
            toast_message: None,
            theme_manager: ThemeManager::new(),
            icon_mode: IconMode::default(),
            confirm_delete: true,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        };
        app.publish(snapshot, None);
        app
    }

    /// 설정 적용 (테마, 아이콘, 삭제 확인)
    pub fn apply_settings(&mut self, settings: &Settings) {
        if let Err(e) = self.theme_manager.switch_theme(&settings.theme) {
            warn!(theme = %settings.theme, error = %e, "unknown theme, keeping default");
        }
        self.icon_mode = settings.icon_mode;
        self.confirm_delete = settings.confirm_delete;
        info!(
            theme = self.theme_manager.current_name(),
            confirm_delete = self.confirm_delete,
            "settings applied"
        );
    }

    /// 새 스냅샷 게시
    ///
    /// 리스트와 상태를 한 번에 교체한다. `focus_name`이 있으면 그 이름의
    /// 행에 커서를 둔다. 경로가 바뀌었으면 커서를 맨 위로 돌린다.
    pub(crate) fn publish(&mut self, snapshot: Snapshot, focus_name: Option<&OsStr>) {
        let path_changed = snapshot.path != self.snapshot.path;
        let previous_name = self.selected_row().map(|row| row.file_name.clone());

        self.snapshot = snapshot;
        self.order = display_order(&self.snapshot.listing, self.sort_by, self.sort_order);
        if self.focus != Focus::PathBar {
            self.path_input
                .set(self.snapshot.path.to_string_lossy().into_owned());
        }

        let target = focus_name.map(OsStr::to_os_string).or_else(|| {
            if path_changed {
                None
            } else {
                previous_name
            }
        });
        let position = target.and_then(|name| self.position_of_name(&name));
        self.selected_index = match position {
            Some(index) => index,
            None if path_changed => 0,
            None => self.selected_index.min(self.max_index()),
        };
        if path_changed {
            self.scroll_offset = 0;
        }
        self.adjust_scroll_offset();
    }

    /// 종료
    pub fn quit(&mut self) {
        info!("quit requested");
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn current_path(&self) -> &Path {
        self.nav.current_path()
    }

    /// 표시 순서대로 정렬된 행
    pub fn display_rows(&self) -> Vec<&ListingRow> {
        self.order
            .iter()
            .filter_map(|&i| self.snapshot.listing.get(i))
            .collect()
    }

    /// 커서 위치의 행
    pub fn selected_row(&self) -> Option<&ListingRow> {
        self.order
            .get(self.selected_index)
            .and_then(|&i| self.snapshot.listing.get(i))
    }

    /// 파일 이름으로 표시 위치 찾기
    pub(crate) fn position_of_name(&self, name: impl AsRef<OsStr>) -> Option<usize> {
        let name = name.as_ref();
        self.order.iter().position(|&i| {
            self.snapshot
                .listing
                .get(i)
                .is_some_and(|row| row.file_name.as_os_str() == name)
        })
    }

    /// 사이드바에서 현재 경로와 일치하는 항목
    pub fn current_place_index(&self) -> Option<usize> {
        self.places.position_of(self.nav.current_path())
    }
}

#[cfg(test)]
mod tests;
