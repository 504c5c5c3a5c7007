//! 键盘/鼠标事件映射 (Input -> Action)
//!
//! 将按键和点击转换为 Action

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use super::actions::Action;
use super::state::{App, AppMode, Focus};

/// 根据当前模式、焦点和按键获取对应的 Action
pub fn get_action(mode: &AppMode, focus: Focus, key: KeyEvent) -> Option<Action> {
    // AltGr 在部分平台上报告为 CONTROL|ALT，按普通字符处理
    if key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('u') if *mode == AppMode::Normal => Some(Action::Update),
            _ => None,
        };
    }

    match mode {
        AppMode::Dialog(_) => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::Dismiss),
            _ => None,
        },
        AppMode::Normal => match key.code {
            KeyCode::Enter => Some(Action::Add),
            KeyCode::Delete => Some(Action::Remove),
            KeyCode::F(2) => Some(Action::Update),
            KeyCode::F(1) => Some(Action::Instructions),
            KeyCode::Esc => Some(Action::ClearInputs),
            KeyCode::Up => Some(Action::FocusPrevEntry),
            KeyCode::Down => Some(Action::FocusNextEntry),
            KeyCode::Tab => Some(Action::NextField),
            KeyCode::BackTab => Some(Action::PrevField),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(' ') if focus == Focus::List => Some(Action::SelectHighlighted),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 根据上一帧记录的区域解析鼠标事件
pub fn get_mouse_action(app: &App, mouse: MouseEvent) -> Option<Action> {
    let point = Position::new(mouse.column, mouse.row);

    match (&app.mode, mouse.kind) {
        (AppMode::Dialog(_), MouseEventKind::Down(MouseButton::Left)) => Some(Action::Dismiss),
        (AppMode::Dialog(_), _) => None,
        (AppMode::Normal, MouseEventKind::ScrollUp) => Some(Action::FocusPrevEntry),
        (AppMode::Normal, MouseEventKind::ScrollDown) => Some(Action::FocusNextEntry),
        (AppMode::Normal, MouseEventKind::Down(MouseButton::Left)) => {
            let areas = &app.hit_areas;
            if let Some((_, action)) = areas.buttons.iter().find(|(rect, _)| rect.contains(point)) {
                return Some(*action);
            }
            if let Some((_, field)) = areas.fields.iter().find(|(rect, _)| rect.contains(point)) {
                return Some(Action::FocusField(*field));
            }
            if areas.list.contains(point) {
                let position = app.list_state.offset() + usize::from(point.y - areas.list.y);
                if position < app.display_len() {
                    return Some(Action::Select(position));
                }
            }
            None
        }
        _ => None,
    }
}

/// 处理按键事件，返回是否退出
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    match get_action(&app.mode, app.focus, key) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

/// 处理鼠标事件，返回是否退出
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> bool {
    match get_mouse_action(app, mouse) {
        Some(action) => app.dispatch(action),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormField;
    use crate::ui::state::{Dialog, DialogKind};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn name_focus() -> Focus {
        Focus::Field(FormField::Name)
    }

    #[test]
    fn bindings_in_normal_mode() {
        let mode = AppMode::Normal;
        assert_eq!(get_action(&mode, name_focus(), key(KeyCode::Enter)), Some(Action::Add));
        assert_eq!(
            get_action(&mode, name_focus(), key(KeyCode::Delete)),
            Some(Action::Remove)
        );
        assert_eq!(
            get_action(&mode, name_focus(), key(KeyCode::Up)),
            Some(Action::FocusPrevEntry)
        );
        assert_eq!(
            get_action(&mode, name_focus(), key(KeyCode::Down)),
            Some(Action::FocusNextEntry)
        );
        assert_eq!(
            get_action(&mode, name_focus(), KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)),
            Some(Action::Update)
        );
    }

    #[test]
    fn altgr_characters_are_typed() {
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        let focus = Focus::Field(FormField::Email);
        for c in ['@', '{', '\\', '€'] {
            assert_eq!(
                get_action(&AppMode::Normal, focus, KeyEvent::new(KeyCode::Char(c), altgr)),
                Some(Action::Input(c))
            );
        }
        assert_eq!(
            get_action(&AppMode::Normal, focus, KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn space_selects_only_when_list_focused() {
        let mode = AppMode::Normal;
        assert_eq!(
            get_action(&mode, Focus::List, key(KeyCode::Char(' '))),
            Some(Action::SelectHighlighted)
        );
        assert_eq!(
            get_action(&mode, name_focus(), key(KeyCode::Char(' '))),
            Some(Action::Input(' '))
        );
    }

    #[test]
    fn dialog_swallows_everything_but_dismiss_and_quit() {
        let mode = AppMode::Dialog(Dialog {
            kind: DialogKind::Info,
            title: "Instructions".to_string(),
            body: String::new(),
        });
        assert_eq!(get_action(&mode, name_focus(), key(KeyCode::Enter)), Some(Action::Dismiss));
        assert_eq!(get_action(&mode, name_focus(), key(KeyCode::Delete)), None);
        assert_eq!(get_action(&mode, name_focus(), key(KeyCode::Char('x'))), None);
        assert_eq!(
            get_action(&mode, name_focus(), KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }
}
