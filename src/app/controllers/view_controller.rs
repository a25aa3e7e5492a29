use super::super::*;
use crate::core::actions::Action;
use crate::models::sort::sort_indicator;

pub(in crate::app) fn execute(app: &mut App, action: Action) {
    match action {
        Action::SwitchFocus => {
            app.focus = match app.focus {
                Focus::Places => Focus::Listing,
                _ => Focus::Places,
            };
            if app.focus == Focus::Places {
                app.place_index = app.current_place_index().unwrap_or(app.place_index);
            }
        }
        Action::FocusPathBar => {
            app.revert_path_input();
            app.focus = Focus::PathBar;
        }
        Action::StartSearch => {
            app.search_input.clear();
            app.focus = Focus::Search;
        }
        Action::ToggleHidden => {
            let snapshot = app.nav.toggle_hidden(&app.filesystem);
            let shown = snapshot.show_hidden;
            app.publish(snapshot, None);
            app.set_toast(if shown {
                "Hidden files: shown"
            } else {
                "Hidden files: hidden"
            });
        }
        Action::Refresh => {
            let snapshot = app.nav.refresh(&app.filesystem);
            app.publish(snapshot, None);
            app.set_toast("Refreshed");
        }
        Action::CycleSort => {
            app.sort_by = app.sort_by.next();
            app.reorder();
        }
        Action::ReverseSort => {
            app.sort_order = app.sort_order.toggle();
            app.reorder();
        }
        Action::ToggleIconMode => {
            app.icon_mode = app.icon_mode.toggle();
            app.set_toast(match app.icon_mode {
                IconMode::Emoji => "Icons: emoji",
                IconMode::Ascii => "Icons: ascii",
            });
        }
        Action::ShowHelp => app.dialog = Some(DialogKind::help()),
        _ => unreachable!("non-view action: {:?}", action),
    }
}

impl App {
    /// 정렬 상태 변경 후 표시 순서 재계산 (커서 항목 유지)
    fn reorder(&mut self) {
        let focused_name = self.selected_row().map(|row| row.file_name.clone());
        self.order = display_order(&self.snapshot.listing, self.sort_by, self.sort_order);
        if let Some(index) = focused_name.and_then(|name| self.position_of_name(&name)) {
            self.selected_index = index;
        }
        self.adjust_scroll_offset();
        let indicator = sort_indicator(self.sort_by, self.sort_order);
        self.set_toast(&indicator);
    }
}
