//! 通用 UI 组件
//!
//! 弹窗、输入框、按钮

use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// [组件] 弹窗基础框架，返回内部区域
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str, color: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 单行输入框；获得焦点时返回光标位置
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    is_focused: bool,
    active_color: Color,
) -> Option<Position> {
    let style = if is_focused {
        Style::default()
            .fg(active_color)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let block = Block::default().title(title).borders(Borders::ALL);
    let inner = block.inner(area);

    // 内容超出宽度时只显示末尾部分
    let visible = usize::from(inner.width.saturating_sub(1));
    let len = value.chars().count();
    let shown: String = value.chars().skip(len.saturating_sub(visible)).collect();

    let input = Paragraph::new(shown.as_str()).style(style).block(block);
    frame.render_widget(input, area);

    is_focused.then(|| {
        let offset = u16::try_from(shown.chars().count()).unwrap_or(u16::MAX);
        Position::new(
            inner.x.saturating_add(offset).min(inner.right().saturating_sub(1)),
            inner.y,
        )
    })
}

/// [组件] 按钮
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, hint: &str) {
    let button = Paragraph::new(format!("{label} [{hint}]"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}
