use crate::core::visibility::apply_visibility;
use crate::models::file_entry::{DirectoryEntry, EntryKind, ListingRow};
use crate::models::listing::{Snapshot, StatusSummary};
use crate::system::filesystem::FileSystem;
use crate::utils::error::{FileNavError, Result};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use tracing::{debug, info, warn};

/// 탐색 상태
///
/// 현재 경로와 숨김 파일 표시 여부만 보관한다. 리스트는 저장하지 않고
/// 모든 작업이 새 [`Snapshot`]을 만들어 호출자에게 돌려준다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    /// 현재 경로 (정규화된 절대 경로)
    current_path: PathBuf,
    /// 숨김 파일 표시 여부
    show_hidden: bool,
}

impl NavigationState {
    /// 지정 경로에서 시작하는 상태 생성
    ///
    /// 경로는 검증하지 않지만 절대 경로여야 한다. 상대 경로에서는
    /// `navigate_up`이 빈 경로를 만든다.
    pub fn new(path: PathBuf) -> Self {
        debug_assert!(path.is_absolute(), "navigation path must be absolute: {:?}", path);
        Self {
            current_path: path,
            show_hidden: false,
        }
    }

    /// 시작 상태: 홈 디렉토리, 해석 실패 시 루트
    pub fn initial(filesystem: &FileSystem) -> Self {
        let start = dirs::home_dir()
            .and_then(|home| filesystem.resolve_path(&home).ok())
            .unwrap_or_else(|| PathBuf::from("/"));
        info!(path = %start.display(), "navigation state initialized");
        Self::new(start)
    }

    /// 현재 경로
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// 숨김 파일 표시 여부
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    /// 입력 문자열로 경로 이동 (경로 바, 바로가기)
    ///
    /// 해석에 실패하면 상태를 바꾸지 않고 에러를 그대로 돌려준다.
    pub fn navigate_to(&mut self, candidate: &str, filesystem: &FileSystem) -> Result<Snapshot> {
        let resolved = filesystem.resolve(candidate).inspect_err(|e| {
            debug!(candidate, error = %e, "navigation rejected");
        })?;
        Ok(self.move_to(resolved, filesystem))
    }

    /// 경로 그대로 이동 (공백, `~` 해석 없음)
    pub fn navigate_to_path(&mut self, path: &Path, filesystem: &FileSystem) -> Result<Snapshot> {
        let resolved = filesystem.resolve_path(path).inspect_err(|e| {
            debug!(path = %path.display(), error = %e, "navigation rejected");
        })?;
        Ok(self.move_to(resolved, filesystem))
    }

    fn move_to(&mut self, resolved: PathBuf, filesystem: &FileSystem) -> Snapshot {
        debug!(path = %resolved.display(), "navigate");
        self.current_path = resolved;
        self.refresh(filesystem)
    }

    /// 상위 디렉토리로 이동
    ///
    /// 경로 문자열만 잘라내며 다시 해석하지 않는다. 루트에서는 경로 변경 없음.
    pub fn navigate_up(&mut self, filesystem: &FileSystem) -> Snapshot {
        if let Some(parent) = self.current_path.parent() {
            self.current_path = parent.to_path_buf();
            debug!(path = %self.current_path.display(), "navigate up");
        }
        self.refresh(filesystem)
    }

    /// 행 활성화: 현재 경로의 자식 디렉토리로 들어간다
    ///
    /// 파일이거나 stat할 수 없으면 상태를 유지하고 에러를 반환한다.
    pub fn enter(&mut self, name: &OsStr, filesystem: &FileSystem) -> Result<Snapshot> {
        let target = self.current_path.join(name);
        match filesystem.entry_kind(&target) {
            Some(EntryKind::Directory) => self.navigate_to_path(&target, filesystem),
            Some(EntryKind::File) => Err(FileNavError::NotADirectory { path: target }),
            None => Err(FileNavError::NotFound { path: target }),
        }
    }

    /// 현재 경로 다시 읽기
    ///
    /// 실패하지 않는다. 디렉토리를 열 수 없으면 빈 리스트와 사유를 담는다.
    pub fn refresh(&self, filesystem: &FileSystem) -> Snapshot {
        let (listing, condition) = match filesystem.list_directory(&self.current_path) {
            Ok(entries) => (self.format_entries(entries), None),
            Err(e) => {
                warn!(path = %self.current_path.display(), error = %e, "listing degraded to empty");
                (Vec::new(), Some(e))
            }
        };

        Snapshot {
            path: self.current_path.clone(),
            show_hidden: self.show_hidden,
            listing,
            status: self.compute_status(filesystem),
            condition,
        }
    }

    /// 숨김 파일 표시 토글
    pub fn toggle_hidden(&mut self, filesystem: &FileSystem) -> Snapshot {
        self.show_hidden = !self.show_hidden;
        debug!(show_hidden = self.show_hidden, "hidden toggle");
        self.refresh(filesystem)
    }

    /// 상태 집계 (독립 스캔)
    pub fn compute_status(&self, filesystem: &FileSystem) -> StatusSummary {
        filesystem.count_entries(&self.current_path)
    }

    /// 현재 경로에 새 폴더 생성
    ///
    /// 이름은 그대로 쓴다. 공백만 있는 이름은 빈 이름으로 본다.
    pub fn create_folder(&mut self, name: &str, filesystem: &FileSystem) -> Result<Snapshot> {
        if name.trim().is_empty() {
            return Err(FileNavError::InvalidName {
                name: name.to_string(),
            });
        }
        let path = self.child_path(OsStr::new(name))?;
        filesystem.create_directory(&path).inspect_err(|e| {
            warn!(error = %e, "create folder failed");
        })?;
        info!(path = %path.display(), "folder created");
        Ok(self.refresh(filesystem))
    }

    /// 현재 경로의 엔트리 하나 삭제 (재귀 없음)
    pub fn remove_entry(&mut self, name: &OsStr, filesystem: &FileSystem) -> Result<Snapshot> {
        let path = self.child_path(name)?;
        filesystem.remove_entry(&path).inspect_err(|e| {
            warn!(error = %e, "remove failed");
        })?;
        info!(path = %path.display(), "entry removed");
        Ok(self.refresh(filesystem))
    }

    /// 필터 → 포맷
    fn format_entries(&self, entries: Vec<DirectoryEntry>) -> Vec<ListingRow> {
        apply_visibility(entries, self.show_hidden)
            .iter()
            .map(DirectoryEntry::to_row)
            .collect()
    }

    /// 단일 이름 검증 후 현재 경로와 결합
    ///
    /// 구분자 없는 일반 이름 하나만 허용한다 (빈 이름, `.`, `..`, NUL 거부).
    fn child_path(&self, name: &OsStr) -> Result<PathBuf> {
        let mut components = Path::new(name).components();
        let single = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(part)), None) if part == name
        );
        if !single || name.as_encoded_bytes().contains(&0) {
            return Err(FileNavError::InvalidName {
                name: name.to_string_lossy().into_owned(),
            });
        }
        Ok(self.current_path.join(name))
    }
}
