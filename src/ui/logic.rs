//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法

use std::path::PathBuf;

use super::actions::Action;
use super::state::{App, AppMode, FormField};
use super::tasks::{self, TaskOutcome};
use crate::models::{CardType, evaluate_income};

/// 未选择服务卡时的阻塞提示
pub const CARD_REQUIRED_ALERT: &str = "দয়া করে একটি সেবা কার্ড সিলেক্ট করুন!";

/// 必填项为空时的阻塞提示（宿主表单 required 的等价物）
pub const FIELDS_REQUIRED_ALERT: &str = "দয়া করে সব তথ্য পূরণ করুন!";

/// 导出失败时的阻塞提示
pub const EXPORT_FAILED_ALERT: &str =
    "কার্ড ডাউনলোড করতে সমস্যা হয়েছে। দয়া করে আবার চেষ্টা করুন।";

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),

            Action::CardPrev => {
                if self.card_cursor > 0 {
                    self.card_cursor -= 1;
                }
            }
            Action::CardNext => {
                if self.card_cursor + 1 < CardType::ALL.len() {
                    self.card_cursor += 1;
                }
            }
            Action::SelectCard => {
                self.form.card_type = Some(CardType::ALL[self.card_cursor]);
            }

            Action::Input(c) => self.input_char(c),
            Action::DeleteChar => self.delete_char(),

            Action::Submit => match self.focus {
                FormField::Photo if !self.photo_input.is_empty() => self.start_photo_load(),
                _ => self.submit(),
            },

            Action::Dismiss => {
                if self.alert.is_some() {
                    self.alert = None;
                } else {
                    self.mode = AppMode::Form;
                }
            }

            Action::Download => self.start_export(),
        }
        false
    }

    // ============ 输入相关 ============

    /// 栏位级字符过滤（数字栏位在输入层就拒绝非数字字符）
    fn accepts_char(field: FormField, c: char) -> bool {
        match field {
            FormField::Name | FormField::Photo => !c.is_control(),
            FormField::Mobile => c.is_ascii_digit() || matches!(c, '+' | '-' | ' '),
            FormField::Ward => c.is_ascii_digit(),
            FormField::Income => c.is_ascii_digit() || matches!(c, '-' | '.'),
            FormField::CardSelect => false,
        }
    }

    fn input_char(&mut self, c: char) {
        if !Self::accepts_char(self.focus, c) {
            return;
        }
        match self.focus {
            FormField::Name => self.form.name.push(c),
            FormField::Mobile => self.form.mobile.push(c),
            FormField::Ward => self.form.ward.push(c),
            FormField::Income => self.form.income.push(c),
            FormField::Photo => self.photo_input.push(c),
            FormField::CardSelect => {}
        }
    }

    fn delete_char(&mut self) {
        match self.focus {
            FormField::Name => self.form.name.pop(),
            FormField::Mobile => self.form.mobile.pop(),
            FormField::Ward => self.form.ward.pop(),
            FormField::Income => self.form.income.pop(),
            FormField::Photo => self.photo_input.pop(),
            FormField::CardSelect => None,
        };
    }

    // ============ 提交 / 审核 ============

    /// 提交申请
    ///
    /// 先查必填项，再查服务卡类别；类别未选时只弹提示，
    /// 不产生任何审核结论。
    pub fn submit(&mut self) {
        let form = &self.form;
        if form.name.is_empty()
            || form.mobile.is_empty()
            || form.ward.is_empty()
            || form.income.is_empty()
        {
            self.alert = Some(FIELDS_REQUIRED_ALERT);
            return;
        }
        if form.card_type.is_none() {
            self.alert = Some(CARD_REQUIRED_ALERT);
            return;
        }

        self.mode = AppMode::Outcome(evaluate_income(&form.income));
    }

    // ============ 后台任务 ============

    /// 启动照片读取
    pub fn start_photo_load(&mut self) {
        let path = expand_home(&self.photo_input);
        self.message = Some("ছবি লোড হচ্ছে...".to_string());
        tasks::spawn_photo_load(self.tasks_tx.clone(), path);
    }

    /// 启动卡片导出
    pub fn start_export(&mut self) {
        self.message = Some("কার্ড তৈরি হচ্ছে...".to_string());
        tasks::spawn_export(self.tasks_tx.clone(), self.form.clone());
    }

    /// 收取已完成的后台任务结果，逐条应用到状态
    pub fn poll_tasks(&mut self) {
        while let Ok(outcome) = self.tasks_rx.try_recv() {
            self.apply_task_outcome(outcome);
        }
    }

    /// 应用单个任务结果
    ///
    /// 照片读取为"后完成者覆盖"；导出失败弹阻塞提示但不关闭
    /// 结论弹窗，用户可以再试。
    pub fn apply_task_outcome(&mut self, outcome: TaskOutcome) {
        match outcome {
            TaskOutcome::PhotoLoaded(Ok(photo)) => {
                self.message = Some(format!("ছবি যুক্ত হয়েছে: {}", photo.source.display()));
                self.form.photo = Some(photo);
            }
            TaskOutcome::PhotoLoaded(Err(err)) => {
                log::warn!("photo load failed: {err}");
                self.message = Some(format!("ছবি লোড করা যায়নি: {err}"));
            }
            TaskOutcome::ExportFinished(Ok(path)) => {
                self.message = Some(format!("কার্ড সেভ হয়েছে: {}", path.display()));
                self.last_export = Some(path);
            }
            TaskOutcome::ExportFinished(Err(err)) => {
                log::warn!("card export failed: {err}");
                self.alert = Some(EXPORT_FAILED_ALERT);
            }
        }
    }
}

/// 展开路径输入里的 "~/" 前缀
fn expand_home(input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportError;
    use crate::models::Photo;

    /// 填好全部必填项的表单
    fn filled_app() -> App {
        let mut app = App::new();
        app.form.name = "Karim".to_string();
        app.form.mobile = "01712345678".to_string();
        app.form.ward = "05".to_string();
        app.form.income = "3000".to_string();
        app
    }

    #[test]
    fn test_submit_without_card_type_alerts() {
        let mut app = filled_app();
        app.submit();

        // 只弹类别提示，不产生审核结论
        assert_eq!(app.alert, Some(CARD_REQUIRED_ALERT));
        assert_eq!(app.mode, AppMode::Form);
        assert!(app.outcome().is_none());
    }

    #[test]
    fn test_submit_with_missing_fields_alerts() {
        let mut app = App::new();
        app.form.card_type = Some(CardType::Family);
        app.submit();

        assert_eq!(app.alert, Some(FIELDS_REQUIRED_ALERT));
        assert!(app.outcome().is_none());
    }

    #[test]
    fn test_submit_low_income_accepts() {
        let mut app = filled_app();
        app.form.card_type = Some(CardType::Family);
        app.submit();

        let decision = app.outcome().expect("结论弹窗应打开");
        assert!(decision.accepted);
    }

    #[test]
    fn test_submit_high_income_rejects() {
        let mut app = filled_app();
        app.form.card_type = Some(CardType::Health);
        app.form.income = "9000".to_string();
        app.submit();

        let decision = app.outcome().expect("结论弹窗应打开");
        assert!(!decision.accepted);
    }

    #[test]
    fn test_dismiss_closes_alert_before_outcome() {
        let mut app = filled_app();
        app.form.card_type = Some(CardType::Family);
        app.submit();
        app.alert = Some(EXPORT_FAILED_ALERT);

        // 第一次 Dismiss 只关提示，结论弹窗保持打开
        app.dispatch(Action::Dismiss);
        assert!(app.alert.is_none());
        assert!(app.outcome().is_some());

        app.dispatch(Action::Dismiss);
        assert!(app.outcome().is_none());
    }

    #[test]
    fn test_numeric_fields_reject_letters() {
        let mut app = App::new();
        app.focus = FormField::Ward;
        app.dispatch(Action::Input('3'));
        app.dispatch(Action::Input('x'));
        assert_eq!(app.form.ward, "3");

        app.focus = FormField::Income;
        app.dispatch(Action::Input('-'));
        app.dispatch(Action::Input('1'));
        app.dispatch(Action::Input('a'));
        assert_eq!(app.form.income, "-1");
    }

    #[test]
    fn test_card_selector_cycles_and_selects() {
        let mut app = App::new();
        app.dispatch(Action::CardNext);
        app.dispatch(Action::CardNext);
        app.dispatch(Action::CardNext); // 越界处停住
        assert_eq!(app.card_cursor, 2);
        app.dispatch(Action::SelectCard);
        assert_eq!(app.form.card_type, Some(CardType::Health));

        app.dispatch(Action::CardPrev);
        app.dispatch(Action::SelectCard);
        assert_eq!(app.form.card_type, Some(CardType::Agriculture));
    }

    #[test]
    fn test_export_failure_keeps_outcome_open() {
        let mut app = filled_app();
        app.form.card_type = Some(CardType::Family);
        app.submit();
        assert!(app.outcome().is_some());

        app.apply_task_outcome(TaskOutcome::ExportFinished(Err(ExportError::FontUnavailable)));

        // 提示弹出，结论弹窗仍在，未记录任何产出文件
        assert_eq!(app.alert, Some(EXPORT_FAILED_ALERT));
        assert!(app.outcome().is_some());
        assert!(app.last_export.is_none());
    }

    #[test]
    fn test_photo_last_write_wins() {
        let mut app = App::new();
        let first = Photo {
            source: "/tmp/a.png".into(),
            width: 1,
            height: 1,
            rgba: vec![0; 4],
        };
        let second = Photo {
            source: "/tmp/b.png".into(),
            width: 2,
            height: 2,
            rgba: vec![0; 16],
        };

        app.apply_task_outcome(TaskOutcome::PhotoLoaded(Ok(first)));
        app.apply_task_outcome(TaskOutcome::PhotoLoaded(Ok(second.clone())));
        assert_eq!(app.form.photo, Some(second));
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/abs/p.png"), PathBuf::from("/abs/p.png"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/p.png"), home.join("p.png"));
        }
    }

    #[test]
    fn test_photo_load_error_is_not_blocking() {
        let mut app = App::new();
        app.apply_task_outcome(TaskOutcome::PhotoLoaded(Err("boom".to_string())));
        assert!(app.alert.is_none());
        assert!(app.message.as_deref().unwrap_or("").contains("boom"));
    }
}
