mod export;
mod models;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::ui::{App, render};

fn main() -> io::Result<()> {
    // 创建应用状态（表单只活在本次会话内，无持久化）
    let mut app = App::new();

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
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

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        // 先收取已完成的后台任务（照片读取 / 卡片导出）
        app.poll_tasks();

        terminal.draw(|f| render(f, app))?;

        // 带超时的轮询，让后台任务结果不用等下一次按键就能生效
        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press {
                if ui::handle_key_event(app, key.code)? {
                    break;
                }
            }
        }
    }
    Ok(())
}
