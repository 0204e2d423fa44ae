//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件。所有渲染都是当前 App 状态的
//! 纯函数，卡面预览每帧从表单重新投影，无缓存。

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::state::{App, AppMode, FormField};
use crate::models::{CARD_BRAND, CARD_EXPIRY, CardFace, CardType};
use components::{render_dialog_framework, render_input_widget};
use layouts::centered_rect;

const PARTY_GREEN: Color = Color::Rgb(0x00, 0x6a, 0x4e);
const PARTY_RED: Color = Color::Rgb(0xda, 0x29, 0x1c);

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // 页头
            Constraint::Length(12), // 卡面预览
            Constraint::Length(5),  // 服务卡选择器
            Constraint::Min(12),    // 申请表单
            Constraint::Length(3),  // 帮助
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_card_preview(frame, app, chunks[1]);
    render_card_selector(frame, app, chunks[2]);
    render_form(frame, app, chunks[3]);
    render_help(frame, app, chunks[4]);

    // 弹窗：结论在下，阻塞提示永远盖在最上层
    if let Some(decision) = app.outcome() {
        render_outcome_dialog(frame, app, decision);
    }
    if let Some(alert) = app.alert {
        render_alert_dialog(frame, alert);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "বিএনপি ফ্যামিলি কার্ড পোর্টাল",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "খাম্বা ও চান্দার রাজনীতি",
            Style::default().fg(Color::Rgb(0xbb, 0xf7, 0xd0)),
        )),
    ];
    let header = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Style::default().bg(PARTY_GREEN))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(PARTY_RED)),
        );
    frame.render_widget(header, area);
}

/// 卡面预览：表单的实时投影
fn render_card_preview(frame: &mut Frame, app: &App, area: Rect) {
    let face = CardFace::project(&app.form);
    let (r, g, b) = face.theme.mid();
    let card_bg = Style::default().bg(Color::Rgb(r, g, b)).fg(Color::White);

    // 卡片横向居中，保持近似银行卡的宽高比
    let card_area = layouts::centered_fixed(area, 48, area.height.min(12));

    let photo_cell = match face.photo {
        Some(photo) => format!(
            "📷 {}",
            photo
                .source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        ),
        None => "[ ছবি ]".to_string(),
    };

    let dim = Style::default()
        .fg(Color::Rgb(0xd0, 0xd0, 0xd0))
        .bg(Color::Rgb(r, g, b));
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {CARD_BRAND}"),
                card_bg.add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("   {} ", face.label), dim.add_modifier(Modifier::ITALIC)),
        ]),
        Line::default(),
        Line::from(vec![
            Span::styled(" ▮▮ ≋", Style::default().fg(Color::Yellow).bg(Color::Rgb(r, g, b))),
            Span::styled(format!("   {photo_cell}"), dim),
        ]),
        Line::default(),
        Line::from(Span::styled(
            format!(" {}", face.number),
            card_bg.add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(format!(" মেয়াদ শেষ {CARD_EXPIRY}"), dim)),
        Line::from(vec![
            Span::styled(
                format!(" {}", face.holder),
                card_bg.add_modifier(Modifier::BOLD),
            ),
            Span::styled("  BNP", Style::default().fg(PARTY_GREEN).bg(Color::White)),
            Span::styled("PAY ", Style::default().fg(PARTY_RED).bg(Color::White)),
        ]),
    ];

    let card = Paragraph::new(lines).style(card_bg).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(card_bg)
            .title_bottom(Line::from("● লাইভ প্রিভিউ: ডিজিটাল স্মার্ট কার্ড").centered()),
    );
    frame.render_widget(card, card_area);
}

/// 服务卡选择器（三选一）
fn render_card_selector(frame: &mut Frame, app: &App, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let focused = app.focus == FormField::CardSelect;
    for (i, card) in CardType::ALL.iter().enumerate() {
        let selected = app.form.card_type == Some(*card);
        let under_cursor = focused && app.card_cursor == i;

        let border_style = if under_cursor {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else if selected {
            Style::default().fg(PARTY_GREEN)
        } else {
            Style::default().fg(Color::Gray)
        };

        let mark = if selected { "✔ " } else { "" };
        let label = Paragraph::new(format!("{mark}{}", card.label()))
            .alignment(Alignment::Center)
            .style(if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title("সেবা কার্ড"),
            );
        frame.render_widget(label, cells[i]);
    }
}

/// 申请表单
fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title("আবেদন ফরম")
        .title_bottom(Line::from("সঠিক তথ্য দিয়ে ফর্মটি পূরণ করুন").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PARTY_GREEN));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    render_input_widget(
        frame,
        top[0],
        "আপনার নাম",
        &app.form.name,
        "পুরো নাম লিখুন",
        app.focus == FormField::Name,
    );
    render_input_widget(
        frame,
        top[1],
        "মোবাইল নম্বর",
        &app.form.mobile,
        "017xxxxxxxx",
        app.focus == FormField::Mobile,
    );

    let mid = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    render_input_widget(
        frame,
        mid[0],
        "ওয়ার্ড নং",
        &app.form.ward,
        "উদাহরণ: ০৫",
        app.focus == FormField::Ward,
    );
    render_input_widget(
        frame,
        mid[1],
        "মাসিক আয় / অনুদান ক্ষমতা (টাকা)",
        &app.form.income,
        "আপনার আয় লিখুন",
        app.focus == FormField::Income,
    );

    let photo_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(rows[2]);
    render_input_widget(
        frame,
        photo_row[0],
        "আপনার ছবি যুক্ত করুন (ফাইল পাথ)",
        &app.photo_input,
        "~/photo.png",
        app.focus == FormField::Photo,
    );

    // 缩略信息与卡面共用同一份照片值
    let thumb = match &app.form.photo {
        Some(photo) => Span::styled(
            format!("✔ {}×{}", photo.width, photo.height),
            Style::default().fg(PARTY_GREEN),
        ),
        None => Span::styled("ছবি নেই", Style::default().fg(Color::DarkGray)),
    };
    frame.render_widget(
        Paragraph::new(Line::from(thumb)).block(Block::default().borders(Borders::ALL)),
        photo_row[1],
    );
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.alert.is_some() {
        "[Enter] ঠিক আছে"
    } else {
        match &app.mode {
            AppMode::Outcome(decision) if decision.accepted => {
                "[d] কার্ড ডাউনলোড  [Enter] ঠিক আছে"
            }
            AppMode::Outcome(_) => "[Enter] বুঝলাম",
            AppMode::Form => match app.focus {
                FormField::CardSelect => "[←/→] কার্ড বাছুন  [Space] সিলেক্ট  [Tab] পরের ফিল্ড  [Esc] প্রস্থান",
                FormField::Photo => "[Enter] ছবি লোড  [Tab] পরের ফিল্ড  [Esc] প্রস্থান",
                _ => "[Tab/↑↓] ফিল্ড  [Enter] আবেদন জমা দিন  [Esc] প্রস্থান",
            },
        }
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{help_text}  |  {message}")
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

/// 审核结论弹窗
fn render_outcome_dialog(frame: &mut Frame, app: &App, decision: &crate::models::OutcomeDecision) {
    let area = centered_rect(60, 45, frame.area());
    let (accent, icon) = if decision.accepted {
        (PARTY_GREEN, "✔")
    } else {
        (PARTY_RED, "⚠")
    };
    let inner = render_dialog_framework(frame, area, &format!("{icon} {}", decision.title), accent);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(inner);

    let body = Paragraph::new(decision.message)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center);
    frame.render_widget(body, chunks[0]);

    let mut footer = vec![];
    if decision.accepted {
        footer.push(Line::from(
            "আপনার কার্ডটি প্রস্তুত। এখনই ডাউনলোড করুন!  [d] ডাউনলোড  [Enter] ঠিক আছে",
        ));
        if let Some(path) = &app.last_export {
            footer.push(Line::from(format!("সেভ হয়েছে: {}", path.display())));
        }
    } else {
        footer.push(Line::from("[Enter] বুঝলাম"));
    }
    frame.render_widget(
        Paragraph::new(footer)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray)),
        chunks[1],
    );
}

/// 阻塞提示弹窗（等价于浏览器 alert）
fn render_alert_dialog(frame: &mut Frame, alert: &str) {
    let area = centered_rect(50, 25, frame.area());
    frame.render_widget(Clear, area);

    let dialog = Paragraph::new(format!("{alert}\n\n[Enter] ঠিক আছে"))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(
            Block::default()
                .title("⚠️ সতর্কতা")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(PARTY_RED)),
        );

    frame.render_widget(dialog, area);
}
