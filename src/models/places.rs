use std::path::{Path, PathBuf};

/// 사이드바 바로가기 이름
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceName {
    Home,
    Desktop,
    Documents,
    Downloads,
    Pictures,
    Music,
    Videos,
    Root,
}

impl PlaceName {
    /// 표시 순서 (Root는 구분선 뒤)
    pub const ALL: [PlaceName; 8] = [
        PlaceName::Home,
        PlaceName::Desktop,
        PlaceName::Documents,
        PlaceName::Downloads,
        PlaceName::Pictures,
        PlaceName::Music,
        PlaceName::Videos,
        PlaceName::Root,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PlaceName::Home => "Home",
            PlaceName::Desktop => "Desktop",
            PlaceName::Documents => "Documents",
            PlaceName::Downloads => "Downloads",
            PlaceName::Pictures => "Pictures",
            PlaceName::Music => "Music",
            PlaceName::Videos => "Videos",
            PlaceName::Root => "Root",
        }
    }

    /// 홈 기준 하위 디렉토리 이름 (Home/Root는 없음)
    fn home_subdir(&self) -> Option<&'static str> {
        match self {
            PlaceName::Home | PlaceName::Root => None,
            other => Some(other.label()),
        }
    }
}

/// 바로가기 한 항목
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub name: PlaceName,
    pub path: PathBuf,
}

/// 바로가기 테이블 (이름 → 경로)
///
/// 경로는 만들 때 한 번 결합만 하고 검증하지 않는다. 존재 여부는
/// 바로가기를 실행할 때 경로 해석이 판단한다.
#[derive(Debug, Clone)]
pub struct PlaceTable {
    places: Vec<Place>,
}

impl PlaceTable {
    /// 홈 디렉토리 기준 테이블 생성
    pub fn new(home: &Path) -> Self {
        let places = PlaceName::ALL
            .iter()
            .map(|&name| {
                let path = match (name, name.home_subdir()) {
                    (PlaceName::Root, _) => PathBuf::from("/"),
                    (_, Some(sub)) => home.join(sub),
                    (_, None) => home.to_path_buf(),
                };
                Place { name, path }
            })
            .collect();
        Self { places }
    }

    /// 현재 사용자 홈 기준 (홈이 없으면 루트)
    pub fn for_current_user() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        Self::new(&home)
    }

    pub fn get(&self, name: PlaceName) -> Option<&Place> {
        self.places.iter().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Place> {
        self.places.iter()
    }

    pub fn at(&self, index: usize) -> Option<&Place> {
        self.places.get(index)
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// 주어진 경로와 일치하는 항목 위치 (사이드바 강조용)
    pub fn position_of(&self, path: &Path) -> Option<usize> {
        self.places.iter().position(|p| p.path == path)
    }
}
