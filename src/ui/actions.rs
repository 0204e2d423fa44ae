//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,

    // 服务卡选择器
    CardPrev,
    CardNext,
    SelectCard,

    // 表单/通用交互
    Input(char), // 输入字符
    DeleteChar,  // Backspace
    Submit,      // Enter（照片栏位上为读取照片）
    Dismiss,     // 关闭弹窗 / 提示
    Download,    // 结论弹窗中触发卡片导出
}
