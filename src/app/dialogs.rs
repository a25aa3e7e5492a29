use super::*;
use std::ffi::OsStr;
use tracing::warn;

impl App {
    // === 다이얼로그 공통 ===

    pub fn is_dialog_active(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// 에러 다이얼로그 표시
    pub fn show_error(&mut self, title: &str, message: &str) {
        warn!(title, message, "error dialog");
        self.dialog = Some(DialogKind::error(title, message));
    }

    /// 좌우 키: 버튼 전환
    pub fn dialog_toggle_button(&mut self) {
        match &mut self.dialog {
            Some(DialogKind::NewFolder {
                selected_button, ..
            })
            | Some(DialogKind::DeleteConfirm {
                selected_button, ..
            }) => *selected_button = 1 - (*selected_button).min(1),
            _ => {}
        }
    }

    /// Enter: 현재 다이얼로그 확정
    pub fn dialog_confirm(&mut self) {
        match self.dialog.take() {
            // 이름은 입력한 그대로 쓴다 (공백 포함)
            Some(DialogKind::NewFolder {
                input,
                selected_button: 0,
            }) => self.create_folder(input.value()),
            Some(DialogKind::DeleteConfirm {
                target,
                name,
                selected_button: 0,
                ..
            }) => self.remove_entry(&target, &name),
            // Cancel 버튼, 에러/도움말은 닫기만 한다
            _ => {}
        }
    }

    // === 새 폴더 이름 입력 ===

    fn new_folder_input(&mut self) -> Option<&mut TextInput> {
        match &mut self.dialog {
            Some(DialogKind::NewFolder { input, .. }) => Some(input),
            _ => None,
        }
    }

    pub fn dialog_input_char(&mut self, c: char) {
        if let Some(input) = self.new_folder_input() {
            input.insert_char(c);
        }
    }

    pub fn dialog_input_backspace(&mut self) {
        if let Some(input) = self.new_folder_input() {
            input.backspace();
        }
    }

    pub fn dialog_input_delete(&mut self) {
        if let Some(input) = self.new_folder_input() {
            input.delete();
        }
    }

    pub fn dialog_input_left(&mut self) {
        if let Some(input) = self.new_folder_input() {
            input.left();
        }
    }

    pub fn dialog_input_right(&mut self) {
        if let Some(input) = self.new_folder_input() {
            input.right();
        }
    }

    pub fn dialog_input_home(&mut self) {
        if let Some(input) = self.new_folder_input() {
            input.home();
        }
    }

    pub fn dialog_input_end(&mut self) {
        if let Some(input) = self.new_folder_input() {
            input.end();
        }
    }

    // === 도움말 ===

    /// 도움말 스크롤 아래로
    pub fn dialog_help_scroll_down(&mut self) {
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            *scroll_offset += 1;
        }
    }

    /// 도움말 스크롤 위로
    pub fn dialog_help_scroll_up(&mut self) {
        if let Some(DialogKind::Help { scroll_offset }) = &mut self.dialog {
            *scroll_offset = scroll_offset.saturating_sub(1);
        }
    }

    // === 파일 변경 ===

    /// 새 폴더 생성 후 그 폴더에 커서를 둔다
    pub(super) fn create_folder(&mut self, name: &str) {
        match self.nav.create_folder(name, &self.filesystem) {
            Ok(snapshot) => {
                self.publish(snapshot, Some(OsStr::new(name)));
                self.set_toast(&format!("Created '{}'", name));
            }
            Err(e) => self.show_error("Cannot create folder", &e.to_string()),
        }
    }

    /// 엔트리 하나 삭제 (`name`은 표시용)
    pub(super) fn remove_entry(&mut self, target: &OsStr, name: &str) {
        match self.nav.remove_entry(target, &self.filesystem) {
            Ok(snapshot) => {
                self.publish(snapshot, None);
                self.set_toast(&format!("Deleted '{}'", name));
            }
            Err(e) => self.show_error("Cannot delete", &e.to_string()),
        }
    }
}
