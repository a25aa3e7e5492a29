use crate::ui::components::file_table::IconMode;
use crate::utils::error::{FileNavError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// 설정 파일 경로 override 환경 변수
pub const SETTINGS_ENV: &str = "FILENAV_SETTINGS_FILE";

/// 사용자 설정 (`~/.filenav/settings.toml`)
///
/// 모든 필드는 선택 사항이며 빠진 값은 기본값을 쓴다.
/// 탐색 상태(경로, 숨김 표시)는 저장하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 테마 이름 (dark | light | high_contrast)
    pub theme: String,
    /// 아이콘 표시 모드
    pub icon_mode: IconMode,
    /// 삭제 전 확인 여부
    pub confirm_delete: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            icon_mode: IconMode::default(),
            confirm_delete: true,
        }
    }
}

impl Settings {
    /// 설정 파일 경로: 환경 변수 우선, 없으면 홈 디렉토리 기준
    pub fn settings_path() -> Option<PathBuf> {
        if let Ok(custom) = env::var(SETTINGS_ENV) {
            let trimmed = custom.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        dirs::home_dir().map(|home| home.join(".filenav").join("settings.toml"))
    }

    /// 설정 로드. 어떤 실패든 경고만 남기고 기본값을 쓴다.
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "settings ignored, using defaults");
                Self::default()
            }
        }
    }

    /// 지정 파일에서 로드 (파일이 없으면 기본값)
    pub fn load_from(path: &Path) -> Result<Self> {
        let data = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        let settings = Self::parse(&data)
            .map_err(|e| FileNavError::Config(format!("{}: {}", path.display(), e)))?;
        info!(path = %path.display(), theme = %settings.theme, "settings loaded");
        Ok(settings)
    }

    /// TOML 문자열 파싱
    pub fn parse(data: &str) -> Result<Self> {
        toml::from_str(data).map_err(|e| FileNavError::Config(e.message().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.icon_mode, IconMode::Emoji);
        assert!(settings.confirm_delete);
    }

    #[test]
    fn test_parse_partial_file() {
        let settings = Settings::parse("theme = \"light\"\n").unwrap();
        assert_eq!(settings.theme, "light");
        assert_eq!(settings.icon_mode, IconMode::Emoji);
        assert!(settings.confirm_delete);
    }

    #[test]
    fn test_parse_full_file() {
        let data = "theme = \"high_contrast\"\nicon_mode = \"ascii\"\nconfirm_delete = false\n";
        let settings = Settings::parse(data).unwrap();
        assert_eq!(settings.theme, "high_contrast");
        assert_eq!(settings.icon_mode, IconMode::Ascii);
        assert!(!settings.confirm_delete);
    }

    #[test]
    fn test_parse_malformed_is_config_error() {
        let result = Settings::parse("theme = [unclosed");
        assert!(matches!(result, Err(FileNavError::Config(_))));

        let result = Settings::parse("icon_mode = \"sparkles\"");
        assert!(matches!(result, Err(FileNavError::Config(_))));
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let settings = Settings::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "confirm_delete = false\n").unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert!(!settings.confirm_delete);
        assert_eq!(settings.theme, "dark");
    }

    #[test]
    fn test_load_from_malformed_file_reports_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "confirm_delete = \"maybe\"\n").unwrap();

        match Settings::load_from(&path) {
            Err(FileNavError::Config(message)) => {
                assert!(message.contains("settings.toml"));
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }
}
