use super::*;
use crate::core::actions::Action;
use crate::ui::layout::MIN_HEIGHT;
use ratatui::layout::Rect;
use std::fs;
use tempfile::TempDir;

/// 정규화된 임시 디렉토리 (macOS의 /var → /private/var 대비)
fn fixture() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let root = fs::canonicalize(temp.path()).unwrap();
    (temp, root)
}

/// alpha/, beta/, notes.txt, .secret
fn populated() -> (TempDir, PathBuf) {
    let (temp, root) = fixture();
    fs::create_dir(root.join("alpha")).unwrap();
    fs::create_dir(root.join("beta")).unwrap();
    fs::write(root.join("notes.txt"), b"hello").unwrap();
    fs::write(root.join(".secret"), b"x").unwrap();
    (temp, root)
}

/// 이름순 정렬된 앱 (파일 시스템 순서에 의존하지 않도록)
fn make_test_app(root: &Path) -> App {
    let mut app = App::new_for_test(root);
    app.execute_action(Action::CycleSort);
    assert_eq!(app.sort_by, SortBy::Name);
    app
}

fn names(app: &App) -> Vec<String> {
    app.display_rows().iter().map(|r| r.name.clone()).collect()
}

fn select(app: &mut App, name: &str) {
    app.selected_index = app.position_of_name(name).unwrap();
}

#[test]
fn test_initial_snapshot_hides_dot_files() {
    let (_temp, root) = populated();
    let app = make_test_app(&root);

    assert_eq!(app.current_path(), root.as_path());
    assert_eq!(names(&app), vec!["alpha", "beta", "notes.txt"]);
    assert_eq!(app.snapshot().status_line(), "3 items (1 hidden)");
    assert_eq!(app.path_input.value(), root.to_string_lossy());
}

#[test]
fn test_toggle_hidden_twice_restores_listing() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);
    let before = names(&app);

    app.execute_action(Action::ToggleHidden);
    assert!(app.nav().show_hidden());
    assert!(names(&app).contains(&".secret".to_string()));
    assert_eq!(app.snapshot().status_line(), "4 items");
    assert_eq!(app.toast_display(), Some("Hidden files: shown"));

    app.execute_action(Action::ToggleHidden);
    assert!(!app.nav().show_hidden());
    assert_eq!(names(&app), before);
    assert_eq!(app.toast_display(), Some("Hidden files: hidden"));
}

#[test]
fn test_enter_directory_and_back_restores_cursor() {
    let (_temp, root) = populated();
    fs::write(root.join("beta").join("inner.txt"), b"").unwrap();
    let mut app = make_test_app(&root);

    select(&mut app, "beta");
    app.execute_action(Action::ActivateSelected);
    assert_eq!(app.current_path(), root.join("beta").as_path());
    assert_eq!(app.selected_index, 0);
    assert_eq!(names(&app), vec!["inner.txt"]);

    app.execute_action(Action::GoToParent);
    assert_eq!(app.current_path(), root.as_path());
    assert_eq!(app.selected_row().unwrap().name, "beta");
}

#[test]
fn test_activate_file_keeps_state_and_toasts() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);

    select(&mut app, "notes.txt");
    app.execute_action(Action::ActivateSelected);

    assert_eq!(app.current_path(), root.as_path());
    assert!(app.dialog.is_none());
    assert_eq!(app.toast_display(), Some("'notes.txt' is not a directory"));
}

#[test]
fn test_activate_vanished_entry_shows_error() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);

    select(&mut app, "alpha");
    fs::remove_dir(root.join("alpha")).unwrap();
    app.execute_action(Action::ActivateSelected);

    assert_eq!(app.current_path(), root.as_path());
    assert!(matches!(app.dialog, Some(DialogKind::Error { .. })));
}

#[test]
fn test_go_to_parent_at_root_is_noop() {
    let mut app = App::new_for_test(Path::new("/"));
    app.execute_action(Action::GoToParent);
    assert_eq!(app.current_path(), Path::new("/"));
}

#[test]
fn test_path_bar_submit_navigates() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);

    app.execute_action(Action::FocusPathBar);
    assert_eq!(app.focus, Focus::PathBar);
    app.path_input.set(root.join("alpha").to_string_lossy().into_owned());
    app.path_bar_submit();

    assert_eq!(app.focus, Focus::Listing);
    assert_eq!(app.current_path(), root.join("alpha").as_path());
    assert_eq!(app.path_input.value(), root.join("alpha").to_string_lossy());
}

#[test]
fn test_path_bar_submit_trims_typed_path() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);

    app.execute_action(Action::FocusPathBar);
    app.path_input
        .set(format!("  {}  ", root.join("beta").display()));
    app.path_bar_submit();

    assert!(app.dialog.is_none());
    assert_eq!(app.current_path(), root.join("beta").as_path());
}

// Windows는 끝 공백을 지운다
#[cfg(unix)]
#[test]
fn test_activate_row_with_trailing_space() {
    let (_temp, root) = populated();
    fs::create_dir(root.join("alpha ")).unwrap();
    fs::write(root.join("alpha ").join("spaced.txt"), b"").unwrap();
    let mut app = make_test_app(&root);

    select(&mut app, "alpha ");
    app.execute_action(Action::ActivateSelected);
    assert_eq!(app.current_path(), root.join("alpha ").as_path());
    assert_eq!(names(&app), vec!["spaced.txt"]);

    app.execute_action(Action::GoToParent);
    assert_eq!(app.selected_row().unwrap().name, "alpha ");
}

#[cfg(unix)]
#[test]
fn test_non_utf8_row_can_be_entered_and_deleted() {
    use std::os::unix::ffi::OsStrExt;

    let (_temp, root) = populated();
    let raw = std::ffi::OsStr::from_bytes(b"bad\xffdir");
    fs::create_dir(root.join(raw)).unwrap();
    let mut app = make_test_app(&root);

    app.selected_index = app.position_of_name(raw).unwrap();
    assert_eq!(app.selected_row().unwrap().name, "bad\u{fffd}dir");
    app.execute_action(Action::ActivateSelected);
    assert_eq!(app.current_path(), root.join(raw).as_path());

    app.execute_action(Action::GoToParent);
    assert_eq!(app.selected_row().unwrap().file_name.as_os_str(), raw);
    app.execute_action(Action::Delete);
    app.dialog_toggle_button();
    app.dialog_confirm();

    assert!(!root.join(raw).exists());
    assert_eq!(app.toast_display(), Some("Deleted 'bad\u{fffd}dir'"));
}

#[test]
fn test_path_bar_invalid_path_reverts() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);

    app.execute_action(Action::FocusPathBar);
    app.path_input.set("/nonexistent/path");
    app.path_bar_submit();

    assert_eq!(app.current_path(), root.as_path());
    assert_eq!(app.path_input.value(), root.to_string_lossy());
    match &app.dialog {
        Some(DialogKind::Error { message, .. }) => assert!(message.contains("/nonexistent/path")),
        other => panic!("expected error dialog, got {:?}", other),
    }
}

#[test]
fn test_path_bar_file_target_rejected() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);

    app.execute_action(Action::FocusPathBar);
    app.path_input
        .set(root.join("notes.txt").to_string_lossy().into_owned());
    app.path_bar_submit();

    assert_eq!(app.current_path(), root.as_path());
    assert!(matches!(app.dialog, Some(DialogKind::Error { .. })));
}

#[test]
fn test_path_bar_cancel_reverts_text() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);

    app.execute_action(Action::FocusPathBar);
    app.path_input.set("/somewhere/else");
    app.path_bar_cancel();

    assert_eq!(app.focus, Focus::Listing);
    assert_eq!(app.path_input.value(), root.to_string_lossy());
}

#[test]
fn test_place_activation_navigates() {
    let (_temp, root) = populated();
    fs::create_dir(root.join("Documents")).unwrap();
    let mut app = make_test_app(&root);

    app.execute_action(Action::SwitchFocus);
    assert_eq!(app.focus, Focus::Places);
    // 현재 경로가 Home이므로 커서도 Home
    assert_eq!(app.place_index, 0);

    app.execute_action(Action::MoveDown);
    app.execute_action(Action::MoveDown);
    assert_eq!(app.places.at(app.place_index).unwrap().name.label(), "Documents");
    app.execute_action(Action::ActivateSelected);

    assert_eq!(app.current_path(), root.join("Documents").as_path());
    assert_eq!(app.current_place_index(), Some(2));
}

#[test]
fn test_missing_place_shows_error_and_keeps_state() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);

    // Desktop 디렉토리는 없음
    app.activate_place(1);

    assert_eq!(app.current_path(), root.as_path());
    assert!(matches!(app.dialog, Some(DialogKind::Error { .. })));
}

#[test]
fn test_places_cursor_bounds() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);
    app.execute_action(Action::SwitchFocus);

    app.execute_action(Action::MoveUp);
    assert_eq!(app.place_index, 0);
    app.execute_action(Action::GoToBottom);
    assert_eq!(app.place_index, app.places.len() - 1);
    app.execute_action(Action::MoveDown);
    assert_eq!(app.place_index, app.places.len() - 1);

    app.execute_action(Action::SwitchFocus);
    assert_eq!(app.focus, Focus::Listing);
}

#[test]
fn test_cursor_movement_and_scroll() {
    let (_temp, root) = fixture();
    for i in 0..30 {
        fs::write(root.join(format!("file{:02}.txt", i)), b"").unwrap();
    }
    let mut app = make_test_app(&root);
    app.layout.update(Rect::new(0, 0, 80, MIN_HEIGHT + 4));
    let visible = app.layout.listing_visible_rows();

    app.execute_action(Action::GoToBottom);
    assert_eq!(app.selected_index, 29);
    assert_eq!(app.scroll_offset, 30 - visible);

    app.execute_action(Action::GoToTop);
    assert_eq!(app.selected_index, 0);
    assert_eq!(app.scroll_offset, 0);

    app.execute_action(Action::PageDown);
    assert_eq!(app.selected_index, visible);
    app.execute_action(Action::PageUp);
    assert_eq!(app.selected_index, 0);

    app.execute_action(Action::MoveUp);
    assert_eq!(app.selected_index, 0);
    app.execute_action(Action::MoveDown);
    assert_eq!(app.selected_row().unwrap().name, "file01.txt");
}

#[test]
fn test_empty_directory_actions_are_safe() {
    let (_temp, root) = fixture();
    let mut app = make_test_app(&root);

    assert!(app.display_rows().is_empty());
    app.execute_action(Action::MoveDown);
    app.execute_action(Action::GoToBottom);
    app.execute_action(Action::ActivateSelected);
    assert_eq!(app.selected_index, 0);

    app.execute_action(Action::Delete);
    assert_eq!(app.toast_display(), Some("Nothing selected"));
}

#[test]
fn test_type_ahead_search() {
    let (_temp, root) = fixture();
    for name in ["Report-2023.txt", "image.png", "report-2024.txt", "zeta"] {
        fs::write(root.join(name), b"").unwrap();
    }
    let mut app = make_test_app(&root);

    app.execute_action(Action::StartSearch);
    assert_eq!(app.focus, Focus::Search);
    for c in "REP".chars() {
        app.search_input_char(c);
    }
    assert_eq!(app.selected_row().unwrap().name, "Report-2023.txt");

    app.search_next();
    assert_eq!(app.selected_row().unwrap().name, "report-2024.txt");
    app.search_next();
    assert_eq!(app.selected_row().unwrap().name, "report-2024.txt");
    app.search_prev();
    assert_eq!(app.selected_row().unwrap().name, "Report-2023.txt");

    // 일치 없음: 커서 유지
    app.search_input_char('x');
    assert_eq!(app.selected_row().unwrap().name, "Report-2023.txt");

    app.end_search();
    assert_eq!(app.focus, Focus::Listing);
    assert!(app.search_input.is_empty());
}

#[test]
fn test_sort_keeps_cursor_on_same_entry() {
    let (_temp, root) = fixture();
    fs::write(root.join("a.bin"), vec![0u8; 300]).unwrap();
    fs::write(root.join("b.bin"), vec![0u8; 100]).unwrap();
    fs::write(root.join("c.bin"), vec![0u8; 200]).unwrap();
    let mut app = make_test_app(&root);

    select(&mut app, "c.bin");
    app.execute_action(Action::CycleSort);
    assert_eq!(app.sort_by, SortBy::Size);
    assert_eq!(names(&app), vec!["b.bin", "c.bin", "a.bin"]);
    assert_eq!(app.selected_row().unwrap().name, "c.bin");
    assert_eq!(app.toast_display(), Some("Sort: Size ▲"));

    app.execute_action(Action::ReverseSort);
    assert_eq!(names(&app), vec!["a.bin", "c.bin", "b.bin"]);
    assert_eq!(app.selected_row().unwrap().name, "c.bin");
}

#[test]
fn test_new_folder_dialog_creates_and_focuses() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);

    app.execute_action(Action::NewFolder);
    for c in "gamma".chars() {
        app.dialog_input_char(c);
    }
    app.dialog_confirm();

    assert!(app.dialog.is_none());
    assert!(root.join("gamma").is_dir());
    assert_eq!(app.selected_row().unwrap().name, "gamma");
    assert_eq!(app.toast_display(), Some("Created 'gamma'"));
}

#[test]
fn test_new_folder_existing_name_shows_error() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);

    app.execute_action(Action::NewFolder);
    for c in "alpha".chars() {
        app.dialog_input_char(c);
    }
    app.dialog_confirm();

    assert!(matches!(app.dialog, Some(DialogKind::Error { .. })));
}

#[test]
fn test_new_folder_invalid_name_rejected() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);

    app.execute_action(Action::NewFolder);
    for c in "a/b".chars() {
        app.dialog_input_char(c);
    }
    app.dialog_confirm();

    assert!(matches!(app.dialog, Some(DialogKind::Error { .. })));
    assert!(!root.join("a").exists());
}

#[cfg(unix)]
#[test]
fn test_new_folder_keeps_typed_spaces() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);

    app.execute_action(Action::NewFolder);
    for c in " gamma ".chars() {
        app.dialog_input_char(c);
    }
    app.dialog_confirm();

    assert!(app.dialog.is_none());
    assert!(root.join(" gamma ").is_dir());
    assert!(!root.join("gamma").exists());
    assert_eq!(app.selected_row().unwrap().name, " gamma ");
}

#[test]
fn test_new_folder_blank_name_rejected() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);
    let before = names(&app);

    app.execute_action(Action::NewFolder);
    for c in "   ".chars() {
        app.dialog_input_char(c);
    }
    app.dialog_confirm();

    assert!(matches!(app.dialog, Some(DialogKind::Error { .. })));
    assert_eq!(names(&app), before);
}

#[test]
fn test_new_folder_cancel_button() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);

    app.execute_action(Action::NewFolder);
    app.dialog_input_char('z');
    app.dialog_toggle_button();
    app.dialog_confirm();

    assert!(app.dialog.is_none());
    assert!(!root.join("z").exists());
}

#[test]
fn test_delete_requires_confirmation() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);

    select(&mut app, "notes.txt");
    app.execute_action(Action::Delete);
    match &app.dialog {
        Some(DialogKind::DeleteConfirm {
            target,
            name,
            is_directory,
            selected_button,
        }) => {
            assert_eq!(target, "notes.txt");
            assert_eq!(name, "notes.txt");
            assert!(!is_directory);
            assert_eq!(*selected_button, 1);
        }
        other => panic!("expected delete confirm, got {:?}", other),
    }

    // 기본 선택은 Cancel
    app.dialog_confirm();
    assert!(root.join("notes.txt").exists());

    app.execute_action(Action::Delete);
    app.dialog_toggle_button();
    app.dialog_confirm();
    assert!(!root.join("notes.txt").exists());
    assert_eq!(names(&app), vec!["alpha", "beta"]);
    assert_eq!(app.toast_display(), Some("Deleted 'notes.txt'"));
}

#[test]
fn test_delete_without_confirmation_setting() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);
    app.confirm_delete = false;

    select(&mut app, "alpha");
    app.execute_action(Action::Delete);

    assert!(app.dialog.is_none());
    assert!(!root.join("alpha").exists());
}

#[test]
fn test_delete_non_empty_directory_fails() {
    let (_temp, root) = populated();
    fs::write(root.join("beta").join("keep.txt"), b"").unwrap();
    let mut app = make_test_app(&root);
    app.confirm_delete = false;

    select(&mut app, "beta");
    app.execute_action(Action::Delete);

    assert!(root.join("beta").exists());
    assert!(matches!(app.dialog, Some(DialogKind::Error { .. })));
}

#[test]
fn test_refresh_picks_up_external_changes() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);

    fs::write(root.join("late.txt"), b"").unwrap();
    app.execute_action(Action::Refresh);

    assert!(names(&app).contains(&"late.txt".to_string()));
    assert_eq!(app.snapshot().status_line(), "4 items (1 hidden)");
    assert_eq!(app.toast_display(), Some("Refreshed"));
}

#[test]
fn test_vanished_directory_degrades() {
    let (_temp, root) = populated();
    let gone = root.join("alpha");
    let mut app = make_test_app(&gone);

    fs::remove_dir(&gone).unwrap();
    app.execute_action(Action::Refresh);

    assert!(app.display_rows().is_empty());
    assert!(app.snapshot().is_degraded());
    assert_eq!(app.current_path(), gone.as_path());
}

#[test]
fn test_toggle_icon_mode_and_help() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);

    app.execute_action(Action::ToggleIconMode);
    assert_eq!(app.icon_mode, IconMode::Ascii);

    app.execute_action(Action::ShowHelp);
    assert!(matches!(app.dialog, Some(DialogKind::Help { scroll_offset: 0 })));
    app.dialog_help_scroll_down();
    app.dialog_help_scroll_up();
    app.dialog_help_scroll_up();
    assert!(matches!(app.dialog, Some(DialogKind::Help { scroll_offset: 0 })));
    app.close_dialog();
    assert!(!app.is_dialog_active());
}

#[test]
fn test_apply_settings() {
    let (_temp, root) = populated();
    let mut app = make_test_app(&root);
    let settings = Settings {
        theme: "light".to_string(),
        icon_mode: IconMode::Ascii,
        confirm_delete: false,
    };

    app.apply_settings(&settings);
    assert_eq!(app.theme_manager.current_name(), "light");
    assert_eq!(app.icon_mode, IconMode::Ascii);
    assert!(!app.confirm_delete);

    let unknown = Settings {
        theme: "neon".to_string(),
        ..Settings::default()
    };
    app.apply_settings(&unknown);
    assert_eq!(app.theme_manager.current_name(), "light");
}

#[test]
fn test_quit() {
    let (_temp, root) = fixture();
    let mut app = make_test_app(&root);
    app.execute_action(Action::Quit);
    assert!(app.should_quit());
}
