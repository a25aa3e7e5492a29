//! 숨김 파일 필터

use crate::models::file_entry::DirectoryEntry;

/// 숨김 파일 정책 적용
///
/// `show_hidden`이 false면 숨김 엔트리를 제거하고, true면 그대로 둔다.
/// 입력 순서는 유지된다.
pub fn apply_visibility(mut entries: Vec<DirectoryEntry>, show_hidden: bool) -> Vec<DirectoryEntry> {
    if !show_hidden {
        entries.retain(|entry| !entry.is_hidden);
    }
    entries
}
