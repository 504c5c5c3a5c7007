//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和增删改查操作

use log::{error, warn};

use super::actions::Action;
use super::state::{App, AppMode, Dialog, DialogKind, Focus};
use crate::error::{ActionError, SelectionError};
use crate::models::{ContactForm, FormField};

pub const INSTRUCTIONS: &str = "How to use\n\
Fill up all of the information and use the buttons to add, remove, or update contacts.\n\n\
[Enter] Add  [Del] Remove  [Ctrl-U/F2] Update  [F1] Instructions\n\
[Tab] Next field  [Up/Down] Move in list  [Space] Select entry  [Esc] Clear inputs\n\
[Ctrl-C] Quit";

impl App {
    /// 核心逻辑分发，返回是否退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,

            Action::Add => {
                let result = self.add();
                self.report(result);
            }
            Action::Remove => {
                let result = self.remove();
                self.report(result);
            }
            Action::Update => {
                let result = self.update();
                self.report(result);
            }
            Action::Instructions => self.show_instructions(),
            Action::ClearInputs => self.clear_inputs(),

            Action::FocusPrevEntry => self.focus_prev_entry(),
            Action::FocusNextEntry => self.focus_next_entry(),
            Action::SelectHighlighted => self.select(self.cursor),
            Action::Select(position) => {
                self.focus = Focus::List;
                self.cursor = position;
                self.select(position);
            }

            Action::NextField => {
                self.focus = match self.focus {
                    Focus::Field(field) => Focus::Field(field.next()),
                    Focus::List => Focus::Field(FormField::Name),
                }
            }
            Action::PrevField => {
                self.focus = match self.focus {
                    Focus::Field(field) => Focus::Field(field.prev()),
                    Focus::List => Focus::Field(FormField::Relation),
                }
            }
            Action::FocusField(field) => self.focus = Focus::Field(field),
            Action::Input(c) => {
                if let Focus::Field(field) = self.focus {
                    self.form.field_mut(field).push(c);
                }
            }
            Action::DeleteChar => {
                if let Focus::Field(field) = self.focus {
                    self.form.field_mut(field).pop();
                }
            }

            Action::Dismiss => self.mode = AppMode::Normal,
        }
        false
    }

    /// 把操作结果转为弹窗；存储错误只中止当前操作
    fn report(&mut self, result: Result<(), ActionError>) {
        let Err(err) = result else {
            return;
        };
        match &err {
            ActionError::Store(_) => error!("event=action_failed module=ui status=error error={err}"),
            _ => warn!("event=action_rejected module=ui status=error reason={err}"),
        }
        self.message = None;
        self.mode = AppMode::Dialog(Dialog {
            kind: DialogKind::Error,
            title: err.title().to_string(),
            body: err.to_string(),
        });
    }

    // ============ 列表选择 ============

    /// 选中某个显示位置并把记录填入表单；表头或越界视为未选中
    pub fn select(&mut self, position: usize) {
        match self
            .row_at(position)
            .map(|row| ContactForm::from_contact(&row.contact))
        {
            Some(form) => {
                self.form = form;
                self.selected = Some(position);
            }
            None => self.selected = None,
        }
        self.message = None;
    }

    /// 高亮上一条（不改变选中）
    pub fn focus_prev_entry(&mut self) {
        self.focus = Focus::List;
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// 高亮下一条（不改变选中）
    pub fn focus_next_entry(&mut self) {
        self.focus = Focus::List;
        if self.cursor < self.last_position() {
            self.cursor += 1;
        }
    }

    // ============ 增删改 ============

    /// 校验表单后插入，选中新记录并清空表单
    pub fn add(&mut self) -> Result<(), ActionError> {
        self.form.validate()?;

        let ContactForm {
            name,
            number,
            email,
            relation,
        } = &self.form;
        self.store.add(name, number, email, relation)?;
        self.refresh()?;

        let last = self.last_position();
        self.cursor = last;
        self.select(last);
        self.clear_inputs();
        self.message = Some("Contact added".to_string());
        Ok(())
    }

    /// 用表单内容覆盖选中的记录，并重新选中同一位置
    pub fn update(&mut self) -> Result<(), ActionError> {
        let (position, id) = self.require_selection("update")?;

        let ContactForm {
            name,
            number,
            email,
            relation,
        } = &self.form;
        self.store.update(id, name, number, email, relation)?;
        self.refresh()?;

        self.cursor = position;
        self.select(position);
        self.message = Some("Contact updated".to_string());
        Ok(())
    }

    /// 删除选中的记录，保持选中位置稳定
    pub fn remove(&mut self) -> Result<(), ActionError> {
        let (position, id) = self.require_selection("remove")?;

        self.store.delete(id)?;
        self.refresh()?;

        let next = if position < self.display_len() {
            position
        } else {
            self.last_position()
        };
        self.cursor = next;
        self.select(next);
        self.message = Some("Contact removed".to_string());
        Ok(())
    }

    fn require_selection(&self, action: &'static str) -> Result<(usize, i64), SelectionError> {
        self.selected
            .zip(self.selected_id())
            .ok_or(SelectionError { action })
    }

    // ============ 通用操作 ============

    /// 清空四个输入框
    pub fn clear_inputs(&mut self) {
        self.form.clear();
        self.message = None;
    }

    /// 显示帮助
    pub fn show_instructions(&mut self) {
        self.mode = AppMode::Dialog(Dialog {
            kind: DialogKind::Info,
            title: "Instructions".to_string(),
            body: INSTRUCTIONS.to_string(),
        });
    }
}
