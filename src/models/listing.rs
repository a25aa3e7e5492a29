use crate::models::file_entry::ListingRow;
use crate::utils::error::FileNavError;
use std::path::PathBuf;

/// 디렉토리 집계 (전체/숨김 개수)
///
/// 리스트와 별개의 스캔으로 계산되므로 리스트 길이와 일치한다는 보장이 없다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub total_items: usize,
    pub hidden_items: usize,
}

impl StatusSummary {
    pub fn new(total_items: usize, hidden_items: usize) -> Self {
        Self {
            total_items,
            hidden_items,
        }
    }

    /// 숨김이 아닌 항목 수
    pub fn visible_items(&self) -> usize {
        self.total_items.saturating_sub(self.hidden_items)
    }

    /// 상태바 문자열
    ///
    /// # Examples
    /// ```
    /// use filenav::models::StatusSummary;
    ///
    /// let summary = StatusSummary::new(10, 3);
    /// assert_eq!(summary.render(false), "7 items (3 hidden)");
    /// assert_eq!(summary.render(true), "10 items");
    /// ```
    pub fn render(&self, show_hidden: bool) -> String {
        if show_hidden {
            format!("{} items", self.total_items)
        } else {
            format!(
                "{} items ({} hidden)",
                self.visible_items(),
                self.hidden_items
            )
        }
    }
}

/// 한 번의 새로고침 결과 (렌더링 단위)
///
/// 리스트와 상태가 항상 한 쌍으로 교체된다.
#[derive(Debug)]
pub struct Snapshot {
    /// 계산 기준 경로
    pub path: PathBuf,
    /// 계산 기준 숨김 표시 여부
    pub show_hidden: bool,
    /// 필터를 통과한 행 (파일 시스템 순서)
    pub listing: Vec<ListingRow>,
    /// 독립 스캔 집계
    pub status: StatusSummary,
    /// 디렉토리 수준 실패로 빈 리스트가 된 경우 그 사유
    pub condition: Option<FileNavError>,
}

impl Snapshot {
    /// 빈 스냅샷 (최초 로드 전)
    pub fn empty(path: PathBuf, show_hidden: bool) -> Self {
        Self {
            path,
            show_hidden,
            listing: Vec::new(),
            status: StatusSummary::default(),
            condition: None,
        }
    }

    /// 상태바 문자열
    pub fn status_line(&self) -> String {
        self.status.render(self.show_hidden)
    }

    /// 디렉토리를 읽지 못해 빈 리스트로 대체되었는지
    pub fn is_degraded(&self) -> bool {
        self.condition.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_hidden_shown() {
        assert_eq!(StatusSummary::new(10, 3).render(true), "10 items");
        assert_eq!(StatusSummary::new(0, 0).render(true), "0 items");
    }

    #[test]
    fn test_render_hidden_filtered() {
        assert_eq!(StatusSummary::new(10, 3).render(false), "7 items (3 hidden)");
        assert_eq!(StatusSummary::new(1, 0).render(false), "1 items (0 hidden)");
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = Snapshot::empty(PathBuf::from("/"), false);
        assert!(snapshot.listing.is_empty());
        assert!(!snapshot.is_degraded());
        assert_eq!(snapshot.status_line(), "0 items (0 hidden)");
    }
}
