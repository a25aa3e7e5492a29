use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// 색상 테마
///
/// 경로 바, 사이드바, 리스트, 상태바, 커맨드바가 모두 이 팔레트를 참조한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    // 배경/전경
    pub bg_primary: ColorDef,
    pub fg_primary: ColorDef,

    // 패널 테두리
    pub border_focused: ColorDef,
    pub border_unfocused: ColorDef,

    // 리스트
    pub file_normal: ColorDef,
    pub file_hidden: ColorDef,
    pub directory: ColorDef,
    pub cursor_fg: ColorDef,
    pub cursor_bg: ColorDef,
    pub column_header: ColorDef,

    // 바
    pub path_bar_bg: ColorDef,
    pub path_bar_fg: ColorDef,
    pub status_bar_bg: ColorDef,
    pub status_bar_fg: ColorDef,
    pub command_bar_bg: ColorDef,
    pub command_bar_fg: ColorDef,

    // 강조
    pub accent: ColorDef,
    pub warning: ColorDef,
    pub error: ColorDef,
    pub success: ColorDef,
}

/// 색상 정의 (`"#rrggbb"` 또는 `"darkgray"` 같은 이름)
///
/// 해석은 ratatui의 `Color::from_str`에 맡기고, 읽을 수 없는 값은
/// 터미널 기본색으로 둔다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorDef(String);

impl ColorDef {
    pub fn to_color(&self) -> Color {
        Color::from_str(&self.0).unwrap_or(Color::Reset)
    }
}

impl From<&str> for ColorDef {
    fn from(s: &str) -> Self {
        ColorDef(s.to_owned())
    }
}

impl Theme {
    /// 기본 어두운 테마
    pub fn dark() -> Self {
        Theme {
            bg_primary: "#1b1d23".into(),
            fg_primary: "#c8ccd4".into(),
            border_focused: "#61afef".into(),
            border_unfocused: "#3e4451".into(),
            file_normal: "#c8ccd4".into(),
            file_hidden: "#7f848e".into(),
            directory: "#61afef".into(),
            cursor_fg: "#1b1d23".into(),
            cursor_bg: "#61afef".into(),
            column_header: "#e5c07b".into(),
            path_bar_bg: "#282c34".into(),
            path_bar_fg: "#e6e6e6".into(),
            status_bar_bg: "#3e4451".into(),
            status_bar_fg: "#e6e6e6".into(),
            command_bar_bg: "#21252b".into(),
            command_bar_fg: "#abb2bf".into(),
            accent: "#61afef".into(),
            warning: "#d19a66".into(),
            error: "#e06c75".into(),
            success: "#98c379".into(),
        }
    }

    pub fn light() -> Self {
        Theme {
            bg_primary: "#fafafa".into(),
            fg_primary: "#383a42".into(),
            border_focused: "#4078f2".into(),
            border_unfocused: "#d0d0d0".into(),
            file_normal: "#383a42".into(),
            file_hidden: "#a0a1a7".into(),
            directory: "#4078f2".into(),
            cursor_fg: "#fafafa".into(),
            cursor_bg: "#4078f2".into(),
            column_header: "#986801".into(),
            path_bar_bg: "#eaeaeb".into(),
            path_bar_fg: "#383a42".into(),
            status_bar_bg: "#d4d4d8".into(),
            status_bar_fg: "#202227".into(),
            command_bar_bg: "#eaeaeb".into(),
            command_bar_fg: "#383a42".into(),
            accent: "#4078f2".into(),
            warning: "#c18401".into(),
            error: "#e45649".into(),
            success: "#50a14f".into(),
        }
    }

    /// 고대비 테마 (이름 기반 16색만 사용)
    pub fn high_contrast() -> Self {
        Theme {
            bg_primary: "black".into(),
            fg_primary: "white".into(),
            border_focused: "lightyellow".into(),
            border_unfocused: "gray".into(),
            file_normal: "white".into(),
            file_hidden: "gray".into(),
            directory: "lightcyan".into(),
            cursor_fg: "black".into(),
            cursor_bg: "lightyellow".into(),
            column_header: "lightyellow".into(),
            path_bar_bg: "black".into(),
            path_bar_fg: "lightgreen".into(),
            status_bar_bg: "black".into(),
            status_bar_fg: "lightgreen".into(),
            command_bar_bg: "black".into(),
            command_bar_fg: "white".into(),
            accent: "lightyellow".into(),
            warning: "yellow".into(),
            error: "lightred".into(),
            success: "lightgreen".into(),
        }
    }

    /// 내장 테마 조회
    pub fn by_name(name: &str) -> Option<Theme> {
        match name {
            "dark" => Some(Theme::dark()),
            "light" => Some(Theme::light()),
            "high_contrast" => Some(Theme::high_contrast()),
            _ => None,
        }
    }
}

/// 내장 테마 이름
pub const THEME_NAMES: [&str; 3] = ["dark", "light", "high_contrast"];

/// 현재 테마와 그 이름
#[derive(Debug, Clone)]
pub struct ThemeManager {
    name: &'static str,
    theme: Theme,
}

impl ThemeManager {
    /// dark 테마로 시작
    pub fn new() -> Self {
        Self {
            name: THEME_NAMES[0],
            theme: Theme::dark(),
        }
    }

    pub fn current(&self) -> &Theme {
        &self.theme
    }

    pub fn current_name(&self) -> &str {
        self.name
    }

    /// 이름으로 테마 전환. 알 수 없는 이름이면 현재 테마 유지
    pub fn switch_theme(&mut self, name: &str) -> Result<(), String> {
        let known = THEME_NAMES
            .iter()
            .copied()
            .find(|candidate| *candidate == name)
            .ok_or_else(|| format!("Unknown theme: {}", name))?;
        if let Some(theme) = Theme::by_name(known) {
            self.name = known;
            self.theme = theme;
        }
        Ok(())
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_resolves() {
        for name in THEME_NAMES {
            let theme = Theme::by_name(name).unwrap();
            assert_ne!(theme.bg_primary.to_color(), Color::Reset, "{name}");
            assert_ne!(theme.cursor_bg.to_color(), Color::Reset, "{name}");
        }
        assert!(Theme::by_name("solarized").is_none());
    }

    #[test]
    fn test_color_def_values() {
        assert_eq!(ColorDef::from("#0078d4").to_color(), Color::Rgb(0, 120, 212));
        assert_eq!(ColorDef::from("DarkGray").to_color(), Color::DarkGray);
        assert_eq!(ColorDef::from("#12345").to_color(), Color::Reset);
        assert_eq!(ColorDef::from("mauve").to_color(), Color::Reset);
    }

    #[test]
    fn test_theme_from_toml() {
        let dark = toml::to_string(&Theme::dark()).unwrap();
        assert!(dark.contains("bg_primary = \"#1b1d23\""));

        let parsed: Theme = toml::from_str(&dark).unwrap();
        assert_eq!(parsed.directory.to_color(), Color::Rgb(0x61, 0xaf, 0xef));
    }

    #[test]
    fn test_switch_theme() {
        let mut themes = ThemeManager::default();
        assert_eq!(themes.current_name(), "dark");

        themes.switch_theme("high_contrast").unwrap();
        assert_eq!(themes.current_name(), "high_contrast");
        assert_eq!(themes.current().bg_primary.to_color(), Color::Black);

        assert!(themes.switch_theme("solarized").is_err());
        assert_eq!(themes.current_name(), "high_contrast");
    }
}
