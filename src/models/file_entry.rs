use crate::utils::formatter::{format_date, format_entry_size};
use std::ffi::OsString;
use std::time::SystemTime;

/// 엔트리 종류 (심볼릭 링크는 대상 기준으로 분류)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// 디렉토리
    Directory,
    /// 일반 파일 (디렉토리가 아닌 모든 것)
    File,
}

/// 디렉토리 엔트리
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// 파일 시스템상의 이름 그대로 (경로 결합용)
    pub file_name: OsString,
    /// 표시용 이름 (UTF-8이 아닌 바이트는 U+FFFD로 대체)
    pub name: String,
    /// 엔트리 종류
    pub kind: EntryKind,
    /// 바이트 단위 크기 (파일만)
    pub size: Option<u64>,
    /// 수정 시간
    pub modified: SystemTime,
    /// 숨김 파일 여부
    pub is_hidden: bool,
}

impl DirectoryEntry {
    /// 새 엔트리 생성. 디렉토리는 크기를 버리고, 숨김 여부는 이름으로 판단
    pub fn new(
        file_name: impl Into<OsString>,
        kind: EntryKind,
        size: u64,
        modified: SystemTime,
    ) -> Self {
        let file_name = file_name.into();
        let name = file_name.to_string_lossy().into_owned();
        let is_hidden = is_hidden_name(&name);
        let size = match kind {
            EntryKind::Directory => None,
            EntryKind::File => Some(size),
        };
        Self {
            file_name,
            name,
            kind,
            size,
            modified,
            is_hidden,
        }
    }

    /// 디렉토리 여부 확인
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// 표시용 행으로 변환
    pub fn to_row(&self) -> ListingRow {
        ListingRow {
            file_name: self.file_name.clone(),
            name: self.name.clone(),
            kind: self.kind,
            size: self.size,
            modified: self.modified,
            size_text: format_entry_size(self.size),
            modified_text: format_date(self.modified),
        }
    }
}

/// 숨김 이름 여부 ('.'으로 시작, '.'/'..' 제외)
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.') && name != "." && name != ".."
}

/// 표시 준비가 끝난 리스트 행
///
/// 정렬은 UI 계층 몫이라 원본 값(`size`, `modified`)도 함께 보관한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    /// 열기/삭제에 쓰는 원래 이름
    pub file_name: OsString,
    /// 화면에 보이는 이름
    pub name: String,
    pub kind: EntryKind,
    pub size: Option<u64>,
    pub modified: SystemTime,
    /// 크기 컬럼 문자열 (디렉토리는 빈 문자열)
    pub size_text: String,
    /// 수정 시간 컬럼 문자열
    pub modified_text: String,
}

impl ListingRow {
    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_hidden(&self) -> bool {
        is_hidden_name(&self.name)
    }
}
