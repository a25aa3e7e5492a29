//! 액션 레지스트리: 키 바인딩, 커맨드 바, 도움말이 모두 여기서 나온다

use crate::ui::components::command_bar::CommandItem;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::LazyLock;

/// 모든 가능한 액션의 열거
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToBottom,
    GoToParent,
    ActivateSelected,
    SwitchFocus,
    FocusPathBar,
    StartSearch,
    // View
    ToggleHidden,
    Refresh,
    CycleSort,
    ReverseSort,
    ToggleIconMode,
    // File Operations
    NewFolder,
    Delete,
    // System
    ShowHelp,
    Quit,
}

/// 액션 카테고리
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    View,
    FileOperation,
    System,
}

impl ActionCategory {
    pub fn title(&self) -> &'static str {
        match self {
            ActionCategory::Navigation => "Navigation",
            ActionCategory::View => "View",
            ActionCategory::FileOperation => "File Operations",
            ActionCategory::System => "System",
        }
    }
}

/// 커맨드바 표시 정보
pub struct CommandBarEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub priority: u8,
}

/// 액션 정의 (메타데이터)
pub struct ActionDef {
    pub action: Action,
    pub id: &'static str,
    pub label: &'static str,
    pub category: ActionCategory,
    pub shortcut_display: Option<&'static str>,
    pub command_bar: Option<CommandBarEntry>,
}

/// 키 바인딩 정의
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: Option<KeyModifiers>, // None = any modifier
    pub action: Action,
}

/// 모든 액션 메타데이터
pub static ACTION_DEFS: &[ActionDef] = &[
    // Navigation
    ActionDef {
        action: Action::MoveUp,
        id: "move_up",
        label: "Move cursor",
        category: ActionCategory::Navigation,
        shortcut_display: Some("j / k"),
        command_bar: None,
    },
    ActionDef {
        action: Action::MoveDown,
        id: "move_down",
        label: "Move down",
        category: ActionCategory::Navigation,
        shortcut_display: None,
        command_bar: None,
    },
    ActionDef {
        action: Action::PageUp,
        id: "page_up",
        label: "Page up / down",
        category: ActionCategory::Navigation,
        shortcut_display: Some("PgUp / PgDn"),
        command_bar: None,
    },
    ActionDef {
        action: Action::PageDown,
        id: "page_down",
        label: "Page down",
        category: ActionCategory::Navigation,
        shortcut_display: None,
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToTop,
        id: "go_top",
        label: "First / last row",
        category: ActionCategory::Navigation,
        shortcut_display: Some("Home / End"),
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToBottom,
        id: "go_bottom",
        label: "Last row",
        category: ActionCategory::Navigation,
        shortcut_display: None,
        command_bar: None,
    },
    ActionDef {
        action: Action::GoToParent,
        id: "go_parent",
        label: "Parent directory",
        category: ActionCategory::Navigation,
        shortcut_display: Some("Bksp / h / u"),
        command_bar: Some(CommandBarEntry {
            key: "Bksp",
            label: "Up",
            priority: 10,
        }),
    },
    ActionDef {
        action: Action::ActivateSelected,
        id: "activate",
        label: "Open directory / place",
        category: ActionCategory::Navigation,
        shortcut_display: Some("Enter / l"),
        command_bar: Some(CommandBarEntry {
            key: "Enter",
            label: "Open",
            priority: 11,
        }),
    },
    ActionDef {
        action: Action::SwitchFocus,
        id: "switch_focus",
        label: "Places / files",
        category: ActionCategory::Navigation,
        shortcut_display: Some("Tab"),
        command_bar: Some(CommandBarEntry {
            key: "Tab",
            label: "Places",
            priority: 12,
        }),
    },
    ActionDef {
        action: Action::FocusPathBar,
        id: "focus_path",
        label: "Edit path",
        category: ActionCategory::Navigation,
        shortcut_display: Some("^L / g"),
        command_bar: Some(CommandBarEntry {
            key: "^L",
            label: "Path",
            priority: 13,
        }),
    },
    ActionDef {
        action: Action::StartSearch,
        id: "search",
        label: "Find by name",
        category: ActionCategory::Navigation,
        shortcut_display: Some("/"),
        command_bar: Some(CommandBarEntry {
            key: "/",
            label: "Find",
            priority: 14,
        }),
    },
    // View
    ActionDef {
        action: Action::ToggleHidden,
        id: "toggle_hidden",
        label: "Show/hide hidden files",
        category: ActionCategory::View,
        shortcut_display: Some("^H / ."),
        command_bar: Some(CommandBarEntry {
            key: "^H",
            label: "Hidden",
            priority: 20,
        }),
    },
    ActionDef {
        action: Action::Refresh,
        id: "refresh",
        label: "Refresh",
        category: ActionCategory::View,
        shortcut_display: Some("F5 / ^R"),
        command_bar: Some(CommandBarEntry {
            key: "F5",
            label: "Refresh",
            priority: 21,
        }),
    },
    ActionDef {
        action: Action::CycleSort,
        id: "cycle_sort",
        label: "Sort column",
        category: ActionCategory::View,
        shortcut_display: Some("s"),
        command_bar: None,
    },
    ActionDef {
        action: Action::ReverseSort,
        id: "reverse_sort",
        label: "Reverse sort",
        category: ActionCategory::View,
        shortcut_display: Some("S"),
        command_bar: None,
    },
    ActionDef {
        action: Action::ToggleIconMode,
        id: "toggle_icons",
        label: "Emoji / ASCII icons",
        category: ActionCategory::View,
        shortcut_display: Some("i"),
        command_bar: None,
    },
    // File Operations
    ActionDef {
        action: Action::NewFolder,
        id: "new_folder",
        label: "New folder",
        category: ActionCategory::FileOperation,
        shortcut_display: Some("F7 / n"),
        command_bar: Some(CommandBarEntry {
            key: "F7",
            label: "MkDir",
            priority: 30,
        }),
    },
    ActionDef {
        action: Action::Delete,
        id: "delete",
        label: "Delete",
        category: ActionCategory::FileOperation,
        shortcut_display: Some("F8 / Del / d"),
        command_bar: Some(CommandBarEntry {
            key: "F8",
            label: "Del",
            priority: 31,
        }),
    },
    // System
    ActionDef {
        action: Action::ShowHelp,
        id: "help",
        label: "Help",
        category: ActionCategory::System,
        shortcut_display: Some("?"),
        command_bar: Some(CommandBarEntry {
            key: "?",
            label: "Help",
            priority: 90,
        }),
    },
    ActionDef {
        action: Action::Quit,
        id: "quit",
        label: "Quit",
        category: ActionCategory::System,
        shortcut_display: Some("q / F10"),
        command_bar: Some(CommandBarEntry {
            key: "q",
            label: "Quit",
            priority: 99,
        }),
    },
];

/// 수식키 조건 (None = 아무 수식키)
const ANY: Option<KeyModifiers> = None;
const NONE: Option<KeyModifiers> = Some(KeyModifiers::NONE);
const CTRL: Option<KeyModifiers> = Some(KeyModifiers::CONTROL);

fn bind(code: KeyCode, modifiers: Option<KeyModifiers>, action: Action) -> KeyBinding {
    KeyBinding {
        code,
        modifiers,
        action,
    }
}

fn build_key_bindings() -> Vec<KeyBinding> {
    vec![
        // 종료
        bind(KeyCode::Char('q'), NONE, Action::Quit),
        bind(KeyCode::Char('c'), CTRL, Action::Quit),
        bind(KeyCode::F(10), ANY, Action::Quit),
        // 커서 이동
        bind(KeyCode::Char('j'), NONE, Action::MoveDown),
        bind(KeyCode::Down, ANY, Action::MoveDown),
        bind(KeyCode::Char('k'), NONE, Action::MoveUp),
        bind(KeyCode::Up, ANY, Action::MoveUp),
        bind(KeyCode::PageUp, ANY, Action::PageUp),
        bind(KeyCode::PageDown, ANY, Action::PageDown),
        bind(KeyCode::Home, ANY, Action::GoToTop),
        bind(KeyCode::End, ANY, Action::GoToBottom),
        bind(KeyCode::Char('G'), ANY, Action::GoToBottom),
        // 디렉토리 이동
        bind(KeyCode::Backspace, ANY, Action::GoToParent),
        bind(KeyCode::Left, ANY, Action::GoToParent),
        bind(KeyCode::Char('h'), NONE, Action::GoToParent),
        bind(KeyCode::Char('u'), NONE, Action::GoToParent),
        bind(KeyCode::Enter, ANY, Action::ActivateSelected),
        bind(KeyCode::Right, ANY, Action::ActivateSelected),
        bind(KeyCode::Char('l'), NONE, Action::ActivateSelected),
        // 포커스
        bind(KeyCode::Tab, ANY, Action::SwitchFocus),
        bind(KeyCode::BackTab, ANY, Action::SwitchFocus),
        bind(KeyCode::Char('l'), CTRL, Action::FocusPathBar),
        bind(KeyCode::Char('g'), NONE, Action::FocusPathBar),
        bind(KeyCode::Char('/'), NONE, Action::StartSearch),
        // 보기
        bind(KeyCode::Char('h'), CTRL, Action::ToggleHidden),
        bind(KeyCode::Char('.'), NONE, Action::ToggleHidden),
        bind(KeyCode::F(5), ANY, Action::Refresh),
        bind(KeyCode::Char('r'), CTRL, Action::Refresh),
        bind(KeyCode::Char('s'), NONE, Action::CycleSort),
        bind(KeyCode::Char('S'), ANY, Action::ReverseSort),
        bind(KeyCode::Char('i'), NONE, Action::ToggleIconMode),
        // 파일 작업
        bind(KeyCode::F(7), ANY, Action::NewFolder),
        bind(KeyCode::Char('n'), NONE, Action::NewFolder),
        bind(KeyCode::F(8), ANY, Action::Delete),
        bind(KeyCode::Delete, ANY, Action::Delete),
        bind(KeyCode::Char('d'), NONE, Action::Delete),
        // 시스템
        bind(KeyCode::Char('?'), ANY, Action::ShowHelp),
        bind(KeyCode::F(1), ANY, Action::ShowHelp),
    ]
}

static KEY_BINDINGS: LazyLock<Vec<KeyBinding>> = LazyLock::new(build_key_bindings);

/// 키 바인딩 목록 조회 (1회 초기화 후 재사용)
pub fn key_bindings() -> &'static [KeyBinding] {
    KEY_BINDINGS.as_slice()
}

/// 키 입력으로 액션 조회
pub fn find_action(modifiers: KeyModifiers, code: KeyCode) -> Option<Action> {
    key_bindings()
        .iter()
        .find(|binding| {
            let mod_matches = match binding.modifiers {
                None => true, // any modifier
                Some(required) => modifiers == required,
            };
            binding.code == code && mod_matches
        })
        .map(|binding| binding.action)
}

/// 액션 메타데이터 조회
pub fn action_def(action: Action) -> Option<&'static ActionDef> {
    ACTION_DEFS.iter().find(|d| d.action == action)
}

/// 커맨드바용 항목 생성 (priority 순 정렬)
pub fn generate_command_bar_items() -> Vec<CommandItem> {
    let mut entries: Vec<(&CommandBarEntry, &ActionDef)> = ACTION_DEFS
        .iter()
        .filter_map(|def| def.command_bar.as_ref().map(|cb| (cb, def)))
        .collect();

    entries.sort_by_key(|(cb, _)| cb.priority);

    entries
        .into_iter()
        .map(|(cb, _)| CommandItem::new(cb.key, cb.label))
        .collect()
}

/// 도움말 다이얼로그용 엔트리 생성
///
/// 카테고리별로 (단축키, 설명) 목록을 만든다. 단축키 표시가 없는 액션은
/// 다른 항목에 합쳐서 보여주므로 제외한다.
pub fn generate_help_entries() -> Vec<(&'static str, Vec<(&'static str, &'static str)>)> {
    let categories = [
        ActionCategory::Navigation,
        ActionCategory::View,
        ActionCategory::FileOperation,
        ActionCategory::System,
    ];

    categories
        .iter()
        .map(|category| {
            let items = ACTION_DEFS
                .iter()
                .filter(|def| def.category == *category)
                .filter_map(|def| def.shortcut_display.map(|key| (key, def.label)))
                .collect();
            (category.title(), items)
        })
        .collect()
}
