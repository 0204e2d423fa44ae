//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, Sender, channel};

use super::tasks::TaskOutcome;
use crate::models::{ApplicationForm, OutcomeDecision};

/// 应用状态
pub struct App {
    pub form: ApplicationForm,
    pub focus: FormField,
    pub card_cursor: usize, // 服务卡选择器中高亮的类别下标
    pub photo_input: String, // 照片路径输入缓冲
    pub mode: AppMode,
    pub alert: Option<&'static str>, // 阻塞式提示，盖在任何模式之上
    pub message: Option<String>,
    pub last_export: Option<PathBuf>,
    pub tasks_tx: Sender<TaskOutcome>,
    pub tasks_rx: Receiver<TaskOutcome>,
}

/// 应用模式
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    Form,
    Outcome(OutcomeDecision), // 审核结论弹窗打开
}

/// 表单栏位（Tab 按此顺序循环）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    CardSelect,
    Name,
    Mobile,
    Ward,
    Income,
    Photo,
}

impl FormField {
    const ORDER: [FormField; 6] = [
        FormField::CardSelect,
        FormField::Name,
        FormField::Mobile,
        FormField::Ward,
        FormField::Income,
        FormField::Photo,
    ];

    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        let (tasks_tx, tasks_rx) = channel();
        Self {
            form: ApplicationForm::default(),
            focus: FormField::CardSelect,
            card_cursor: 0,
            photo_input: String::new(),
            mode: AppMode::Form,
            alert: None,
            message: None,
            last_export: None,
            tasks_tx,
            tasks_rx,
        }
    }

    /// 当前是否有结论弹窗打开
    pub fn outcome(&self) -> Option<&OutcomeDecision> {
        match &self.mode {
            AppMode::Outcome(decision) => Some(decision),
            AppMode::Form => None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
