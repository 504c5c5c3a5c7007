//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use ratatui::{layout::Rect, widgets::ListState};

use super::actions::Action;
use crate::error::StoreResult;
use crate::models::{Contact, ContactForm, FormField};
use crate::storage::ContactStore;

/// 列表中的一行，id 与记录直接绑定，不从显示文本反解
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRow {
    pub id: i64,
    pub contact: Contact,
    pub line: String,
}

/// 应用状态
pub struct App {
    pub store: ContactStore,
    pub rows: Vec<ContactRow>,
    pub form: ContactForm,
    pub focus: Focus,
    /// 列表高亮位置（0 为表头）
    pub cursor: usize,
    /// 当前选中的显示位置
    pub selected: Option<usize>,
    pub mode: AppMode,
    pub message: Option<String>,
    pub list_state: ListState,
    pub hit_areas: HitAreas,
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Dialog(Dialog),
}

/// 阻塞式弹窗
#[derive(Debug, Clone, PartialEq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Error,
}

/// 键盘焦点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FormField),
    List,
}

/// 上一帧中可点击区域的位置，供鼠标事件使用
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub fields: Vec<(Rect, FormField)>,
    pub buttons: Vec<(Rect, Action)>,
    /// 列表内部区域（不含边框）
    pub list: Rect,
}

impl App {
    /// 创建新的应用实例
    pub fn new(store: ContactStore) -> StoreResult<Self> {
        let mut app = Self {
            store,
            rows: Vec::new(),
            form: ContactForm::default(),
            focus: Focus::Field(FormField::Name),
            cursor: 0,
            selected: None,
            mode: AppMode::Normal,
            message: None,
            list_state: ListState::default(),
            hit_areas: HitAreas::default(),
        };
        app.refresh()?;
        Ok(app)
    }

    /// 刷新显示列表：重新读取全部记录并重建位置到 id 的映射
    pub fn refresh(&mut self) -> StoreResult<()> {
        self.rows = self
            .store
            .fetch_all()?
            .into_iter()
            .enumerate()
            .map(|(i, contact)| ContactRow {
                id: contact.id,
                line: contact.display_line(i + 1),
                contact,
            })
            .collect();

        // 确保选中位置和高亮位置有效
        if self.selected.is_some_and(|pos| pos > self.rows.len()) {
            self.selected = None;
        }
        self.cursor = self.cursor.min(self.last_position());
        Ok(())
    }

    /// 显示位置总数（含表头）
    pub fn display_len(&self) -> usize {
        self.rows.len() + 1
    }

    /// 最后一行的位置；空列表时为表头
    pub fn last_position(&self) -> usize {
        self.rows.len()
    }

    /// 某个显示位置对应的行，表头返回 None
    pub fn row_at(&self, position: usize) -> Option<&ContactRow> {
        position.checked_sub(1).and_then(|i| self.rows.get(i))
    }

    /// 当前选中的行
    pub fn selected_row(&self) -> Option<&ContactRow> {
        self.selected.and_then(|pos| self.row_at(pos))
    }

    /// 当前选中记录的 id
    pub fn selected_id(&self) -> Option<i64> {
        self.selected_row().map(|row| row.id)
    }
}
