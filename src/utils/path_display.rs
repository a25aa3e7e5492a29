use std::path::Path;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";
const PATH_ELLIPSIS: &str = "/...";

/// 이름을 최대 너비에 맞춰 뒤쪽을 생략한다. (리스트 Name 컬럼용)
pub fn truncate_name(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }
    if max_width <= ELLIPSIS.width() {
        return take_prefix_by_width(name, max_width);
    }
    let prefix = take_prefix_by_width(name, max_width - ELLIPSIS.width());
    format!("{}{}", prefix, ELLIPSIS)
}

/// 표시 너비 기준으로 오른쪽을 공백으로 채운다
pub fn pad_to_width(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad))
}

/// 경로를 경로 바/다이얼로그 표시용으로 축약한다.
///
/// 홈 디렉토리는 `~`로 표시하고, 너비를 넘으면 `첫 구간/.../마지막 구간들` 형태로 줄인다.
pub fn display_path(path: &Path, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }

    let text = shorten_home(path);
    if text.width() <= max_width {
        return text;
    }

    let parts: Vec<&str> = text.split('/').filter(|s| !s.is_empty()).collect();
    if parts.len() <= 2 {
        return keep_suffix(&text, max_width);
    }

    let head = if text.starts_with('~') {
        "~".to_string()
    } else {
        format!("/{}", parts[0])
    };
    let head_width = head.width() + PATH_ELLIPSIS.width();
    if head_width >= max_width {
        return keep_suffix(&text, max_width);
    }

    let budget = max_width - head_width;
    let mut tail: Vec<&str> = Vec::new();
    let mut used = 0;
    for part in parts.iter().skip(1).rev() {
        let part_width = part.width() + 1;
        if used + part_width > budget {
            break;
        }
        tail.insert(0, part);
        used += part_width;
    }

    if tail.is_empty() {
        return keep_suffix(&text, max_width);
    }

    format!("{}{}/{}", head, PATH_ELLIPSIS, tail.join("/"))
}

fn shorten_home(path: &Path) -> String {
    let text = path.to_string_lossy().to_string();
    let Some(home) = dirs::home_dir() else {
        return text;
    };
    if home == Path::new("/") {
        return text;
    }
    match path.strip_prefix(&home) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~/{}", rest.to_string_lossy()),
        Err(_) => text,
    }
}

fn keep_suffix(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= ELLIPSIS.width() {
        return take_prefix_by_width(text, max_width);
    }

    let mut rev_chars: Vec<char> = Vec::new();
    let mut width = 0;
    for ch in text.chars().rev() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width - ELLIPSIS.width() {
            break;
        }
        rev_chars.push(ch);
        width += ch_width;
    }
    rev_chars.reverse();
    format!("{}{}", ELLIPSIS, rev_chars.into_iter().collect::<String>())
}

fn take_prefix_by_width(text: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}
