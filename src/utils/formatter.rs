// 리스트 컬럼용 크기/날짜 문자열

use chrono::{DateTime, Local};
use std::time::SystemTime;

/// 1024 단위 접미사. GB 위로는 올라가지 않는다.
const UNITS: [&str; 3] = ["KB", "MB", "GB"];

/// 바이트 수를 `"512 B"`, `"1.5 KB"`, `"3.0 GB"` 형태로 표시
///
/// ```
/// use filenav::utils::formatter::format_file_size;
///
/// assert_eq!(format_file_size(0), "0 B");
/// assert_eq!(format_file_size(1536), "1.5 KB");
/// assert_eq!(format_file_size(1 << 20), "1.0 MB");
/// ```
pub fn format_file_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// 크기 컬럼 (디렉토리는 `None` → 빈 칸)
pub fn format_entry_size(size: Option<u64>) -> String {
    size.map(format_file_size).unwrap_or_default()
}

/// 로컬 시간 `YYYY-MM-DD HH:MM`
///
/// ```
/// use filenav::utils::formatter::format_date;
///
/// assert_eq!(format_date(std::time::SystemTime::now()).len(), 16);
/// ```
pub fn format_date(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}
