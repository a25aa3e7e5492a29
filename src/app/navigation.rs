use super::controllers;
use super::*;
use crate::core::actions::{Action, action_def};
use crate::utils::error::{FileNavError, Result};
use std::ffi::OsStr;
use tracing::debug;

impl App {
    /// 액션 실행 (단일 진실 원천)
    pub fn execute_action(&mut self, action: Action) {
        let id = action_def(action).map_or("unknown", |def| def.id);
        debug!(action = id, focus = ?self.focus, "execute action");
        match action {
            Action::Quit => self.quit(),
            Action::MoveUp => self.move_selection_up(),
            Action::MoveDown => self.move_selection_down(),
            Action::PageUp => self.move_selection_page_up(),
            Action::PageDown => self.move_selection_page_down(),
            Action::GoToTop => self.go_to_top(),
            Action::GoToBottom => self.go_to_bottom(),
            Action::GoToParent => self.go_to_parent(),
            Action::ActivateSelected => self.activate_selected(),
            Action::SwitchFocus
            | Action::FocusPathBar
            | Action::StartSearch
            | Action::ToggleHidden
            | Action::Refresh
            | Action::CycleSort
            | Action::ReverseSort
            | Action::ToggleIconMode
            | Action::ShowHelp => controllers::view_controller::execute(self, action),
            Action::NewFolder | Action::Delete => {
                controllers::file_controller::execute(self, action)
            }
        }
    }

    // === 커서 이동 ===

    /// 선택을 위로 이동
    pub fn move_selection_up(&mut self) {
        if self.focus == Focus::Places {
            self.place_index = self.place_index.saturating_sub(1);
            return;
        }
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.adjust_scroll_offset();
        }
    }

    /// 선택을 아래로 이동
    pub fn move_selection_down(&mut self) {
        if self.focus == Focus::Places {
            if self.place_index + 1 < self.places.len() {
                self.place_index += 1;
            }
            return;
        }
        if self.selected_index < self.max_index() {
            self.selected_index += 1;
            self.adjust_scroll_offset();
        }
    }

    /// 페이지 위로 이동
    pub fn move_selection_page_up(&mut self) {
        let page_size = self.page_size();
        self.selected_index = self.selected_index.saturating_sub(page_size);
        self.adjust_scroll_offset();
    }

    /// 페이지 아래로 이동
    pub fn move_selection_page_down(&mut self) {
        let page_size = self.page_size();
        self.selected_index = (self.selected_index + page_size).min(self.max_index());
        self.adjust_scroll_offset();
    }

    /// 맨 위로 이동 (Home)
    pub fn go_to_top(&mut self) {
        if self.focus == Focus::Places {
            self.place_index = 0;
            return;
        }
        self.selected_index = 0;
        self.adjust_scroll_offset();
    }

    /// 맨 아래로 이동 (End / G)
    pub fn go_to_bottom(&mut self) {
        if self.focus == Focus::Places {
            self.place_index = self.places.len().saturating_sub(1);
            return;
        }
        self.selected_index = self.max_index();
        self.adjust_scroll_offset();
    }

    /// 마지막 행 인덱스 (빈 리스트면 0)
    pub(super) fn max_index(&self) -> usize {
        self.order.len().saturating_sub(1)
    }

    /// 한 화면에 보이는 행 수
    pub(super) fn page_size(&self) -> usize {
        self.layout.listing_visible_rows()
    }

    /// 스크롤 오프셋을 현재 선택 위치에 맞게 조정
    pub fn adjust_scroll_offset(&mut self) {
        let visible = self.page_size();
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible {
            self.scroll_offset = self.selected_index + 1 - visible;
        }
        let max_scroll = self.order.len().saturating_sub(visible);
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }

    // === 디렉토리 이동 ===

    /// 상위 디렉토리로 이동, 방금 나온 디렉토리에 커서를 둔다
    pub fn go_to_parent(&mut self) {
        let child_name = self.nav.current_path().file_name().map(OsStr::to_os_string);
        let snapshot = self.nav.navigate_up(&self.filesystem);
        self.publish(snapshot, child_name.as_deref());
    }

    /// Enter 처리: 리스트에서는 디렉토리 진입, 사이드바에서는 바로가기 실행
    pub fn activate_selected(&mut self) {
        if self.focus == Focus::Places {
            self.activate_place(self.place_index);
            return;
        }
        let Some((file_name, name)) = self
            .selected_row()
            .map(|row| (row.file_name.clone(), row.name.clone()))
        else {
            return;
        };
        match self.nav.enter(&file_name, &self.filesystem) {
            Ok(snapshot) => self.publish(snapshot, None),
            Err(FileNavError::NotADirectory { .. }) => {
                self.set_toast(&format!("'{}' is not a directory", name));
            }
            Err(e) => self.show_error("Cannot open", &e.to_string()),
        }
    }

    /// 바로가기 실행 (경로 이동과 동일)
    pub fn activate_place(&mut self, index: usize) {
        let Some(place) = self.places.at(index) else {
            return;
        };
        let (target, label) = (place.path.clone(), place.name.label());
        let result = self.nav.navigate_to_path(&target, &self.filesystem);
        if !self.finish_navigation(result) {
            debug!(place = label, "place unavailable");
        }
    }

    /// 입력한 경로로 이동 (`~` 확장, 앞뒤 공백 제거)
    pub fn navigate_to(&mut self, candidate: &str) -> bool {
        let result = self.nav.navigate_to(candidate, &self.filesystem);
        self.finish_navigation(result)
    }

    /// 경로 이동 공통 처리
    ///
    /// 실패하면 에러 다이얼로그를 띄우고 경로 바를 되돌린다. 탐색 상태는
    /// 바뀌지 않는다.
    fn finish_navigation(&mut self, result: Result<Snapshot>) -> bool {
        match result {
            Ok(snapshot) => {
                self.publish(snapshot, None);
                true
            }
            Err(e) => {
                self.show_error("Cannot open location", &e.to_string());
                self.revert_path_input();
                false
            }
        }
    }

    // === 경로 바 ===

    /// 경로 바 입력 확정
    pub fn path_bar_submit(&mut self) {
        let candidate = self.path_input.value().trim().to_string();
        self.focus = Focus::Listing;
        if candidate.is_empty() {
            self.revert_path_input();
            return;
        }
        self.navigate_to(&candidate);
    }

    /// 경로 바 편집 취소
    pub fn path_bar_cancel(&mut self) {
        self.focus = Focus::Listing;
        self.revert_path_input();
    }

    /// 경로 바 내용을 현재 경로로 되돌림
    pub(super) fn revert_path_input(&mut self) {
        self.path_input
            .set(self.nav.current_path().to_string_lossy().into_owned());
    }

    // === 검색 (type-ahead) ===

    /// 검색어 입력
    pub fn search_input_char(&mut self, c: char) {
        self.search_input.insert_char(c);
        self.search_from(0, true);
    }

    pub fn search_backspace(&mut self) {
        self.search_input.backspace();
        self.search_from(0, true);
    }

    /// 다음 일치 항목
    pub fn search_next(&mut self) {
        self.search_from(self.selected_index + 1, true);
    }

    /// 이전 일치 항목
    pub fn search_prev(&mut self) {
        if self.selected_index > 0 {
            self.search_from(self.selected_index - 1, false);
        }
    }

    /// 검색 종료 (커서는 그대로)
    pub fn end_search(&mut self) {
        self.search_input.clear();
        self.focus = Focus::Listing;
    }

    /// `start`부터 검색어를 포함하는 행으로 커서 이동 (대소문자 무시)
    ///
    /// 일치하는 행이 없으면 커서를 움직이지 않는다.
    fn search_from(&mut self, start: usize, forward: bool) {
        let query = self.search_input.value().to_lowercase();
        if query.is_empty() {
            return;
        }
        let rows = self.display_rows();
        let matches = |i: &usize| rows[*i].name.to_lowercase().contains(&query);
        let found = if forward {
            (start..rows.len()).find(matches)
        } else {
            (0..=start.min(rows.len().saturating_sub(1))).rev().find(matches)
        };
        if let Some(index) = found {
            self.selected_index = index;
            self.adjust_scroll_offset();
        }
    }

    // === 토스트 ===

    /// 토스트 메시지 설정 (3초 후 자동 소멸)
    pub fn set_toast(&mut self, message: &str) {
        self.toast_message = Some((message.to_string(), Instant::now()));
    }

    /// 만료된 토스트 제거
    pub fn clear_expired_toast(&mut self) {
        if let Some((_, time)) = &self.toast_message {
            if time.elapsed().as_secs() >= 3 {
                self.toast_message = None;
            }
        }
    }

    /// 만료 안 된 토스트 메시지
    pub fn toast_display(&self) -> Option<&str> {
        self.toast_message
            .as_ref()
            .filter(|(_, time)| time.elapsed().as_secs() < 3)
            .map(|(msg, _)| msg.as_str())
    }
}
