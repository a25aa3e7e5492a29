use crate::models::file_entry::ListingRow;
use std::cmp::Ordering;

/// 정렬 기준 (표시 전용)
///
/// `Unsorted`는 파일 시스템이 돌려준 순서를 그대로 쓴다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Unsorted,
    Name,
    Size,
    Modified,
}

impl SortBy {
    /// 다음 정렬 기준 (s 키 순환)
    pub fn next(self) -> Self {
        match self {
            SortBy::Unsorted => SortBy::Name,
            SortBy::Name => SortBy::Size,
            SortBy::Size => SortBy::Modified,
            SortBy::Modified => SortBy::Unsorted,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Unsorted => "Unsorted",
            SortBy::Name => "Name",
            SortBy::Size => "Size",
            SortBy::Modified => "Modified",
        }
    }
}

/// 정렬 순서
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "▲",
            SortOrder::Descending => "▼",
        }
    }
}

/// 상태바/토스트용 정렬 표시 문자열
pub fn sort_indicator(sort_by: SortBy, sort_order: SortOrder) -> String {
    match sort_by {
        SortBy::Unsorted => "Sort: Unsorted".to_string(),
        other => format!("Sort: {} {}", other.label(), sort_order.arrow()),
    }
}

/// 표시 순서 계산
///
/// 행 자체는 건드리지 않고 `rows` 인덱스의 순열을 돌려준다.
/// 같은 키끼리는 원래 순서를 유지한다 (stable).
pub fn display_order(rows: &[ListingRow], sort_by: SortBy, sort_order: SortOrder) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    if sort_by == SortBy::Unsorted {
        return order;
    }

    order.sort_by(|&a, &b| {
        let ordering = compare(&rows[a], &rows[b], sort_by);
        match sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    order
}

fn compare(a: &ListingRow, b: &ListingRow, sort_by: SortBy) -> Ordering {
    match sort_by {
        SortBy::Unsorted => Ordering::Equal,
        SortBy::Name => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
        // 디렉토리(None)는 파일보다 앞
        SortBy::Size => a.size.cmp(&b.size),
        SortBy::Modified => a.modified.cmp(&b.modified),
    }
}
