use crate::models::file_entry::{is_hidden_name, DirectoryEntry, EntryKind};
use crate::models::listing::StatusSummary;
use crate::utils::error::{FileNavError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// 파일 시스템 모듈
///
/// 경로 해석, 디렉토리 나열, 상태 집계, 폴더 생성/삭제를 담당한다.
/// 상태를 갖지 않으며 모든 메서드는 호출 시점의 파일 시스템을 그대로 조회한다.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystem;

impl FileSystem {
    /// 새 파일 시스템 인스턴스 생성
    pub fn new() -> Self {
        Self
    }

    /// 경로 바 입력 해석
    ///
    /// 앞뒤 공백을 떼고 `~`를 홈으로 바꾼 뒤 [`resolve_path`](Self::resolve_path)로 넘긴다.
    /// 사람이 입력한 문자열에만 쓴다.
    pub fn resolve(&self, candidate: &str) -> Result<PathBuf> {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return Err(FileNavError::NotFound {
                path: PathBuf::from(candidate),
            });
        }
        self.resolve_path(&expand_tilde(trimmed))
    }

    /// 경로 해석
    ///
    /// 주어진 경로를 그대로 확인하고 정규화된 절대 경로를 반환합니다.
    /// 심볼릭 링크와 `.`/`..` 구간은 모두 풀린다.
    pub fn resolve_path(&self, path: &Path) -> Result<PathBuf> {
        let not_found = || FileNavError::NotFound {
            path: path.to_path_buf(),
        };
        if path.as_os_str().is_empty() {
            return Err(not_found());
        }

        // 1. 존재 확인 (stat, 링크 추적)
        let metadata = fs::metadata(path).map_err(|_| not_found())?;

        // 2. 디렉토리 여부 확인
        if !metadata.is_dir() {
            return Err(FileNavError::NotADirectory {
                path: path.to_path_buf(),
            });
        }

        // 3. 정규화
        fs::canonicalize(path).map_err(|_| not_found())
    }

    /// 디렉토리 읽기
    ///
    /// 직계 자식만 파일 시스템 순서대로 반환합니다. stat에 실패한 엔트리
    /// (깨진 링크, 권한 없음, 나열 도중 삭제)는 조용히 건너뜁니다.
    pub fn list_directory(&self, path: &Path) -> Result<Vec<DirectoryEntry>> {
        let read_dir = fs::read_dir(path).map_err(|e| FileNavError::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut entries = Vec::new();

        for entry in read_dir {
            // 에러 발생 시 해당 엔트리는 스킵
            let Ok(entry) = entry else { continue };

            let file_name = entry.file_name();
            if matches!(file_name.to_str(), Some("." | "..")) {
                continue;
            }

            // 링크 대상 메타데이터
            let metadata = match fs::metadata(entry.path()) {
                Ok(metadata) => metadata,
                Err(e) => {
                    trace!(name = ?file_name, error = %e, "stat failed, entry dropped");
                    continue;
                }
            };

            let kind = if metadata.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };

            // 수정 시간 미지원 플랫폼은 epoch로 대체
            let modified = metadata
                .modified()
                .unwrap_or(std::time::SystemTime::UNIX_EPOCH);

            entries.push(DirectoryEntry::new(file_name, kind, metadata.len(), modified));
        }

        debug!(path = %path.display(), count = entries.len(), "directory listed");
        Ok(entries)
    }

    /// 상태바용 독립 스캔
    ///
    /// stat 없이 이름만 센다. 리스트와 별개로 다시 읽으므로 두 결과가 다를 수 있다.
    /// 디렉토리를 열 수 없으면 0/0.
    pub fn count_entries(&self, path: &Path) -> StatusSummary {
        let mut summary = StatusSummary::default();

        let Ok(read_dir) = fs::read_dir(path) else {
            return summary;
        };

        for entry in read_dir.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name == "." || name == ".." {
                continue;
            }
            summary.total_items += 1;
            if is_hidden_name(&name) {
                summary.hidden_items += 1;
            }
        }

        summary
    }

    /// 엔트리 종류 조회 (링크 추적). stat 실패 시 None
    pub fn entry_kind(&self, path: &Path) -> Option<EntryKind> {
        let metadata = fs::metadata(path).ok()?;
        Some(if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        })
    }

    /// 새 디렉토리 생성 (Unix: 0755)
    pub fn create_directory(&self, path: &Path) -> Result<()> {
        let mut builder = fs::DirBuilder::new();

        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o755);
        }

        builder
            .create(path)
            .map_err(|e| FileNavError::CreateFailed {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
    }

    /// 단일 엔트리 삭제 (재귀 없음)
    ///
    /// 파일/링크는 `remove_file`, 디렉토리는 비어 있을 때만 `remove_dir`.
    pub fn remove_entry(&self, path: &Path) -> Result<()> {
        let remove_failed = |e: std::io::Error| FileNavError::RemoveFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        // 링크 자체를 지우기 위해 lstat
        let link_metadata = fs::symlink_metadata(path).map_err(remove_failed)?;

        if link_metadata.is_dir() {
            fs::remove_dir(path).map_err(remove_failed)
        } else {
            fs::remove_file(path).map_err(remove_failed)
        }
    }
}

/// `~`, `~/...` 를 홈 디렉토리로 확장
fn expand_tilde(input: &str) -> PathBuf {
    if input == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}
