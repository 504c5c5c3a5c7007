//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

use crate::models::FormField;

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,

    // 按钮
    Add,
    Remove,
    Update,
    Instructions,
    ClearInputs,

    // 列表
    FocusPrevEntry,
    FocusNextEntry,
    SelectHighlighted,
    Select(usize),

    // 表单
    NextField,
    PrevField,
    FocusField(FormField),
    Input(char),
    DeleteChar,

    // 弹窗
    Dismiss,
}
