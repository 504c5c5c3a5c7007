//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

use super::actions::Action;
use super::state::{App, AppMode, Dialog, DialogKind, Focus};
use crate::models::{FormField, header_line};
use components::{render_button, render_dialog_framework, render_input_widget};
use layouts::{app_area, centered_rect};

pub const WINDOW_TITLE: &str = "Address Book";

const BUTTONS: [(&str, &str, Action); 4] = [
    ("Add", "Enter", Action::Add),
    ("Remove", "Del", Action::Remove),
    ("Update", "Ctrl-U", Action::Update),
    ("Instructions", "F1", Action::Instructions),
];

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = app_area(frame.area());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(6), // 表单
            Constraint::Length(3), // 按钮
            Constraint::Min(5),    // 列表
            Constraint::Length(3), // 帮助
        ])
        .split(area);

    render_title(frame, chunks[0]);
    render_form(frame, app, chunks[1]);
    render_buttons(frame, app, chunks[2]);
    render_list(frame, app, chunks[3]);
    render_help(frame, app, chunks[4]);

    if let AppMode::Dialog(dialog) = &app.mode {
        render_dialog(frame, dialog, area);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(WINDOW_TITLE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_form(frame: &mut Frame, app: &mut App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    // Name / Number 一行，Email / Relation 一行
    let mut cells = Vec::with_capacity(FormField::ALL.len());
    for row in rows.iter() {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);
        cells.extend(halves.iter().copied());
    }

    app.hit_areas.fields.clear();
    let mut cursor: Option<Position> = None;
    for (field, cell) in FormField::ALL.into_iter().zip(cells) {
        let focused = app.mode == AppMode::Normal && app.focus == Focus::Field(field);
        let position = render_input_widget(
            frame,
            cell,
            field.label(),
            app.form.field(field),
            focused,
            Color::Yellow,
        );
        cursor = cursor.or(position);
        app.hit_areas.fields.push((cell, field));
    }

    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

fn render_buttons(frame: &mut Frame, app: &mut App, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    app.hit_areas.buttons.clear();
    for ((label, hint, action), cell) in BUTTONS.into_iter().zip(cells.iter().copied()) {
        render_button(frame, cell, label, hint);
        app.hit_areas.buttons.push((cell, action));
    }
}

fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut items = Vec::with_capacity(app.display_len());
    items.push(ListItem::new(Line::from(Span::styled(
        header_line(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))));

    for (i, row) in app.rows.iter().enumerate() {
        let style = if app.selected == Some(i + 1) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        items.push(ListItem::new(Line::from(Span::styled(row.line.clone(), style))));
    }

    let block = Block::default()
        .title(format!("Contacts ({})", app.rows.len()))
        .borders(Borders::ALL);
    app.hit_areas.list = block.inner(area);

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    app.list_state.select(Some(app.cursor));
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match &app.mode {
        AppMode::Normal => {
            "[Enter] Add  [Del] Remove  [Ctrl-U] Update  [F1] Help  [Tab] Field  [Up/Down/Space] List  [Esc] Clear  [Ctrl-C] Quit"
        }
        AppMode::Dialog(_) => "[Enter] OK",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", message, help_text)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_dialog(frame: &mut Frame, dialog: &Dialog, area: Rect) {
    let popup = centered_rect(60, 40, area);
    let color = match dialog.kind {
        DialogKind::Info => Color::Cyan,
        DialogKind::Error => Color::Red,
    };
    let inner = render_dialog_framework(frame, popup, &dialog.title, color);

    let body = Paragraph::new(format!("{}\n\n[Enter] OK", dialog.body))
        .style(Style::default().fg(color))
        .wrap(Wrap { trim: false });
    frame.render_widget(body, inner);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::storage::ContactStore;
    use crate::ui::input::handle_mouse_event;

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app_with_alice() -> App {
        let store = ContactStore::open_in_memory().unwrap();
        store.add("Alice", "1234567890", "a@x.com", "Friend").unwrap();
        App::new(store).unwrap()
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn renders_title_buttons_and_rows() {
        let mut app = app_with_alice();
        let screen = draw(&mut app);

        assert!(screen.contains(WINDOW_TITLE));
        for (label, _, _) in BUTTONS {
            assert!(screen.contains(label));
        }
        assert!(screen.contains("Relation"));
        assert!(screen.contains("Alice"));
        assert!(screen.contains("a@x.com"));
    }

    #[test]
    fn renders_dialog_on_top() {
        let mut app = app_with_alice();
        app.dispatch(Action::Remove);
        let screen = draw(&mut app);
        assert!(screen.contains("Selection Error"));
    }

    #[test]
    fn clicking_list_row_selects_it() {
        let mut app = app_with_alice();
        draw(&mut app);

        let list = app.hit_areas.list;
        handle_mouse_event(&mut app, click(list.x + 2, list.y + 1));
        assert_eq!(app.selected, Some(1));
        assert_eq!(app.form.name, "Alice");

        handle_mouse_event(&mut app, click(list.x + 2, list.y));
        assert_eq!(app.selected, None);
    }

    #[test]
    fn clicking_button_runs_its_action() {
        let mut app = app_with_alice();
        draw(&mut app);

        let (rect, _) = app.hit_areas.buttons[3];
        handle_mouse_event(&mut app, click(rect.x + 1, rect.y + 1));
        assert!(matches!(app.mode, AppMode::Dialog(ref d) if d.title == "Instructions"));
    }

    #[test]
    fn clicking_field_moves_focus() {
        let mut app = app_with_alice();
        draw(&mut app);

        let (rect, field) = app.hit_areas.fields[2];
        handle_mouse_event(&mut app, click(rect.x + 1, rect.y + 1));
        assert_eq!(app.focus, Focus::Field(field));
        assert_eq!(field, FormField::Email);
    }
}
