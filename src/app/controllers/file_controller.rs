use super::super::*;
use crate::core::actions::Action;

pub(in crate::app) fn execute(app: &mut App, action: Action) {
    match action {
        Action::NewFolder => app.dialog = Some(DialogKind::new_folder()),
        Action::Delete => start_delete(app),
        _ => unreachable!("non-file action: {:?}", action),
    }
}

/// 커서 항목 삭제 (설정에 따라 확인 다이얼로그)
fn start_delete(app: &mut App) {
    let Some(row) = app.selected_row() else {
        app.set_toast("Nothing selected");
        return;
    };
    let (file_name, name) = (row.file_name.clone(), row.name.clone());
    let is_directory = row.is_directory();
    if app.confirm_delete {
        app.dialog = Some(DialogKind::delete_confirm(file_name, name, is_directory));
    } else {
        app.remove_entry(&file_name, &name);
    }
}
