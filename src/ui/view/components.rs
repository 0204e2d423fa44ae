//! 通用 UI 组件
//!
//! 对话框、输入框等通用组件

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str, accent: Color) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 带标题、占位文案与聚焦样式的输入框
pub fn render_input_widget(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: &str,
    placeholder: &str,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    // 空值时显示灰色占位文案，等价于 HTML 的 placeholder
    let (text, text_style) = if value.is_empty() {
        (placeholder, Style::default().fg(Color::DarkGray))
    } else {
        (value, Style::default().fg(Color::White))
    };

    let input = Paragraph::new(text)
        .style(text_style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(border_style),
        );
    frame.render_widget(input, area);
}
