//! 布局辅助函数

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 窗口尺寸（列 x 行）
pub const APP_WIDTH: u16 = 100;
pub const APP_HEIGHT: u16 = 32;

/// 固定大小的窗口区域，居中并限制在终端范围内
pub fn app_area(area: Rect) -> Rect {
    let width = area.width.min(APP_WIDTH);
    let height = area.height.min(APP_HEIGHT);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// 按百分比居中的矩形，用于弹窗
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
