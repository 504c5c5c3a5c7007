mod config;
mod error;
mod logging;
mod models;
mod storage;
mod ui;

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use log::info;
use ratatui::prelude::*;

use crate::config::{CONFIG_FILE_NAME, get_data_dir, load_config};
use crate::error::AppResult;
use crate::logging::init_logging;
use crate::storage::ContactStore;
use crate::ui::{App, WINDOW_TITLE, render};

fn main() -> AppResult<()> {
    // 配置与日志 (~/.local/share/addressbook/)
    let data_dir = get_data_dir()?;
    let config = load_config(&data_dir.join(CONFIG_FILE_NAME))?;
    let _logger = init_logging(&config.log_level, &data_dir.join("logs"))?;

    // 打开数据库，整个进程只持有这一个连接
    let db_path = config.resolve_database_path(&data_dir);
    let store = ContactStore::open(&db_path)?;

    // 创建应用状态
    let mut app = App::new(store)?;

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle(WINDOW_TITLE)
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // 关闭数据库
    app.store.close()?;
    info!("event=app_exit module=main status=ok");

    result?;
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        let quit = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => ui::handle_key_event(app, key),
            Event::Mouse(mouse) => ui::handle_mouse_event(app, mouse),
            _ => false,
        };
        if quit {
            break;
        }
    }
    Ok(())
}
