//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::{App, AppMode, FormField};

/// 根据当前状态和按键获取对应的 Action
///
/// 阻塞式提示打开时只响应关闭键；结论弹窗其次；最后才是表单本身。
pub fn get_action(app: &App, key: KeyCode) -> Option<Action> {
    if app.alert.is_some() {
        return match key {
            KeyCode::Enter | KeyCode::Esc => Some(Action::Dismiss),
            _ => None,
        };
    }

    match app.mode {
        AppMode::Outcome(decision) => match key {
            KeyCode::Enter | KeyCode::Esc => Some(Action::Dismiss),
            // 仅通过审核时提供下载
            KeyCode::Char('d') | KeyCode::Char('D') if decision.accepted => {
                Some(Action::Download)
            }
            _ => None,
        },
        AppMode::Form => match key {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Left if app.focus == FormField::CardSelect => Some(Action::CardPrev),
            KeyCode::Right if app.focus == FormField::CardSelect => Some(Action::CardNext),
            KeyCode::Char(' ') if app.focus == FormField::CardSelect => {
                Some(Action::SelectCard)
            }
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(app, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::evaluate_income;

    fn outcome_app(income: &str) -> App {
        let mut app = App::new();
        app.mode = AppMode::Outcome(evaluate_income(income));
        app
    }

    #[test]
    fn test_download_key_only_on_accepted_outcome() {
        // 通过审核才提供下载键
        let accepted = outcome_app("3000");
        assert_eq!(
            get_action(&accepted, KeyCode::Char('d')),
            Some(Action::Download)
        );
        assert_eq!(
            get_action(&accepted, KeyCode::Char('D')),
            Some(Action::Download)
        );

        let rejected = outcome_app("9999");
        assert_eq!(get_action(&rejected, KeyCode::Char('d')), None);
        assert_eq!(get_action(&rejected, KeyCode::Char('D')), None);
    }

    #[test]
    fn test_outcome_dismiss_keys() {
        let app = outcome_app("9999");
        assert_eq!(get_action(&app, KeyCode::Enter), Some(Action::Dismiss));
        assert_eq!(get_action(&app, KeyCode::Esc), Some(Action::Dismiss));
        assert_eq!(get_action(&app, KeyCode::Tab), None);
    }

    #[test]
    fn test_alert_swallows_everything_but_dismiss() {
        // 阻塞提示打开时，除关闭键外全部吞掉（包括下载键）
        let mut app = outcome_app("3000");
        app.alert = Some("সতর্কতা");

        assert_eq!(get_action(&app, KeyCode::Char('d')), None);
        assert_eq!(get_action(&app, KeyCode::Char('x')), None);
        assert_eq!(get_action(&app, KeyCode::Tab), None);
        assert_eq!(get_action(&app, KeyCode::Enter), Some(Action::Dismiss));
        assert_eq!(get_action(&app, KeyCode::Esc), Some(Action::Dismiss));
    }

    #[test]
    fn test_form_mode_basic_keys() {
        let app = App::new();
        assert_eq!(get_action(&app, KeyCode::Esc), Some(Action::Quit));
        assert_eq!(get_action(&app, KeyCode::Tab), Some(Action::FocusNext));
        assert_eq!(get_action(&app, KeyCode::Enter), Some(Action::Submit));
        // 初始焦点在卡片选择器上
        assert_eq!(get_action(&app, KeyCode::Right), Some(Action::CardNext));
        assert_eq!(get_action(&app, KeyCode::Char(' ')), Some(Action::SelectCard));
    }
}
