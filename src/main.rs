use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use filenav::app::settings::Settings;
use filenav::app::{App, Focus};
use filenav::core::actions::{find_action, generate_command_bar_items, Action};
use filenav::models::sort::sort_indicator;
use filenav::ui::{
    CommandBar, Dialog, DialogKind, FileTable, LayoutMode, PathBar, Sidebar, StatusBar,
    WarningScreen,
};
use filenav::utils::path_display::display_path;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const LOG_FILE_ENV: &str = "FILENAV_LOG_FILE";
const LOG_LEVEL_ENV: &str = "FILENAV_LOG";

fn main() -> Result<()> {
    init_logging();
    info!(version = env!("CARGO_PKG_VERSION"), "filenav starting");

    let settings = Settings::load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&settings);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "event loop failed");
        eprintln!("Error: {:?}", err);
    }

    info!("filenav exited");
    Ok(())
}

/// 로그 파일 경로 (환경 변수 우선, 없으면 데이터 디렉토리)
fn log_file_path() -> Option<PathBuf> {
    if let Ok(custom) = std::env::var(LOG_FILE_ENV) {
        let trimmed = custom.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::data_dir().map(|dir| dir.join("filenav").join("filenav.log"))
}

/// 파일 로거 설치 (터미널은 TUI가 쓰므로 파일로만 기록)
///
/// 파일을 열 수 없으면 로깅 없이 계속한다.
fn init_logging() {
    let Some(path) = log_file_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let size = f.area();
            app.layout.update(size);
            app.adjust_scroll_offset();

            match app.layout.mode() {
                LayoutMode::TooSmall => {
                    let (width, height) = app.layout.terminal_size();
                    let warning = WarningScreen::new()
                        .current_size(width, height)
                        .theme(app.theme_manager.current());
                    f.render_widget(warning, size);
                }
                LayoutMode::Normal => render_main_ui(f, app),
            }
        })?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key.modifiers, key.code);
                }
            }
        }

        app.clear_expired_toast();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// 현재 모드에 맞는 키 처리로 분기
fn handle_key(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    if app.layout.is_too_small() {
        if find_action(modifiers, code) == Some(Action::Quit) {
            app.quit();
        }
        return;
    }

    if app.is_dialog_active() {
        handle_dialog_keys(app, modifiers, code);
        return;
    }

    match app.focus {
        Focus::PathBar => handle_path_bar_keys(app, modifiers, code),
        Focus::Search => handle_search_keys(app, modifiers, code),
        Focus::Listing | Focus::Places => {
            if let Some(action) = find_action(modifiers, code) {
                app.execute_action(action);
            }
        }
    }
}

/// 경로 바 편집 키 처리
fn handle_path_bar_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (_, KeyCode::Enter) => app.path_bar_submit(),
        (_, KeyCode::Esc) => app.path_bar_cancel(),
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.quit(),
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => app.path_input.delete_prev_segment(),
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => app.path_input.clear(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.path_input.insert_char(c)
        }
        (_, KeyCode::Backspace) => app.path_input.backspace(),
        (_, KeyCode::Delete) => app.path_input.delete(),
        (_, KeyCode::Left) => app.path_input.left(),
        (_, KeyCode::Right) => app.path_input.right(),
        (_, KeyCode::Home) => app.path_input.home(),
        (_, KeyCode::End) => app.path_input.end(),
        _ => {}
    }
}

/// 리스트 검색 키 처리
fn handle_search_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (_, KeyCode::Enter) | (_, KeyCode::Esc) => app.end_search(),
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.quit(),
        (_, KeyCode::Down) => app.search_next(),
        (_, KeyCode::Up) => app.search_prev(),
        (_, KeyCode::Backspace) => app.search_backspace(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => app.search_input_char(c),
        _ => {}
    }
}

/// 다이얼로그 모드 키 처리
fn handle_dialog_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    let Some(kind) = app.dialog.clone() else {
        return;
    };

    match kind {
        DialogKind::NewFolder { .. } => handle_new_folder_keys(app, modifiers, code),
        DialogKind::DeleteConfirm { .. } => handle_delete_confirm_keys(app, code),
        DialogKind::Error { .. } => {
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                app.close_dialog();
            }
        }
        DialogKind::Help { .. } => match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1) => {
                app.close_dialog()
            }
            KeyCode::Char('j') | KeyCode::Down => app.dialog_help_scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => app.dialog_help_scroll_up(),
            _ => {}
        },
    }
}

/// 새 폴더 이름 입력 키 처리
fn handle_new_folder_keys(app: &mut App, modifiers: KeyModifiers, code: KeyCode) {
    match (modifiers, code) {
        (_, KeyCode::Enter) => app.dialog_confirm(),
        (_, KeyCode::Esc) => app.close_dialog(),
        (KeyModifiers::NONE, KeyCode::Tab) | (KeyModifiers::SHIFT, KeyCode::BackTab) => {
            app.dialog_toggle_button();
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => app.dialog_input_char(c),
        (_, KeyCode::Backspace) => app.dialog_input_backspace(),
        (_, KeyCode::Delete) => app.dialog_input_delete(),
        (_, KeyCode::Left) => app.dialog_input_left(),
        (_, KeyCode::Right) => app.dialog_input_right(),
        (_, KeyCode::Home) => app.dialog_input_home(),
        (_, KeyCode::End) => app.dialog_input_end(),
        _ => {}
    }
}

/// 삭제 확인 키 처리 (y/n 단축키 지원)
fn handle_delete_confirm_keys(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Enter => app.dialog_confirm(),
        KeyCode::Esc | KeyCode::Char('n') => app.close_dialog(),
        KeyCode::Char('y') => {
            if let Some(DialogKind::DeleteConfirm {
                selected_button, ..
            }) = &mut app.dialog
            {
                *selected_button = 0;
            }
            app.dialog_confirm();
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            app.dialog_toggle_button()
        }
        _ => {}
    }
}

/// 메인 UI 렌더링
fn render_main_ui(f: &mut ratatui::Frame<'_>, app: &App) {
    let areas = app.layout.areas();
    let theme = app.theme_manager.current();
    let snapshot = app.snapshot();

    let path_display = display_path(
        app.current_path(),
        areas.path_bar.width.saturating_sub(4) as usize,
    );
    let path_bar = PathBar::new(&app.path_input, &path_display)
        .editing(app.focus == Focus::PathBar)
        .theme(theme);
    f.render_widget(path_bar, areas.path_bar);

    let sidebar = Sidebar::new(&app.places)
        .selected_index(app.place_index)
        .current_index(app.current_place_index())
        .focused(app.focus == Focus::Places)
        .theme(theme);
    f.render_widget(sidebar, areas.sidebar);

    let rows = app.display_rows();
    let title = display_path(
        app.current_path(),
        areas.listing.width.saturating_sub(6) as usize,
    );
    let condition = snapshot.condition.as_ref().map(|e| e.to_string());
    let table = FileTable::new()
        .title(&title)
        .rows(&rows)
        .selected_index(app.selected_index)
        .scroll_offset(app.scroll_offset)
        .focused(matches!(app.focus, Focus::Listing | Focus::Search))
        .icon_mode(app.icon_mode)
        .sort_state(app.sort_by, app.sort_order)
        .empty_message(condition.as_deref())
        .theme(theme);
    f.render_widget(table, areas.listing);

    let summary = snapshot.status_line();
    let sort_label = sort_indicator(app.sort_by, app.sort_order);
    let search = (app.focus == Focus::Search).then(|| app.search_input.value());
    let status_bar = StatusBar::new()
        .summary(&summary)
        .condition(condition.as_deref())
        .toast(app.toast_display())
        .search(search)
        .sort_label(&sort_label)
        .theme(theme);
    f.render_widget(status_bar, areas.status_bar);

    let command_bar = CommandBar::new()
        .commands(generate_command_bar_items())
        .theme(theme);
    f.render_widget(command_bar, areas.command_bar);

    if let Some(dialog_kind) = &app.dialog {
        let dialog = Dialog::new(dialog_kind).theme(theme);
        f.render_widget(dialog, f.area());
    }
}
