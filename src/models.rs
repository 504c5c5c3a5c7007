//! 联系人数据模型
//!
//! 记录、表单字段、校验规则以及列表行的格式化

use crate::error::ValidationError;

// 列表各列宽度
const INDEX_WIDTH: usize = 8;
const NAME_WIDTH: usize = 20;
const NUMBER_WIDTH: usize = 16;
const EMAIL_WIDTH: usize = 28;
const RELATION_WIDTH: usize = 16;

/// 联系人记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub number: String,
    pub email: String,
    pub relation: String,
}

impl Contact {
    /// 列表中的一行，`position` 为显示位置（表头占 0）
    pub fn display_line(&self, position: usize) -> String {
        format!(
            "{:<iw$} {:^nw$.nw$} {:^pw$.pw$} {:^ew$.ew$} {:^rw$.rw$}",
            position,
            self.name,
            self.number,
            self.email,
            self.relation,
            iw = INDEX_WIDTH,
            nw = NAME_WIDTH,
            pw = NUMBER_WIDTH,
            ew = EMAIL_WIDTH,
            rw = RELATION_WIDTH,
        )
    }
}

/// 列表表头
pub fn header_line() -> String {
    format!(
        "{:<iw$} {:^nw$} {:^pw$} {:^ew$} {:^rw$}",
        "Index",
        "Name",
        "Number",
        "Email",
        "Relation",
        iw = INDEX_WIDTH,
        nw = NAME_WIDTH,
        pw = NUMBER_WIDTH,
        ew = EMAIL_WIDTH,
        rw = RELATION_WIDTH,
    )
}

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Number,
    Email,
    Relation,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Number,
        FormField::Email,
        FormField::Relation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Number => "Number",
            FormField::Email => "Email",
            FormField::Relation => "Relation",
        }
    }

    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Number,
            FormField::Number => FormField::Email,
            FormField::Email => FormField::Relation,
            FormField::Relation => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Relation,
            FormField::Number => FormField::Name,
            FormField::Email => FormField::Number,
            FormField::Relation => FormField::Email,
        }
    }
}

/// 表单当前的输入值
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub number: String,
    pub email: String,
    pub relation: String,
}

impl ContactForm {
    pub fn new(name: &str, number: &str, email: &str, relation: &str) -> Self {
        Self {
            name: name.to_string(),
            number: number.to_string(),
            email: email.to_string(),
            relation: relation.to_string(),
        }
    }

    /// 用已有记录填充表单
    pub fn from_contact(contact: &Contact) -> Self {
        Self::new(
            &contact.name,
            &contact.number,
            &contact.email,
            &contact.relation,
        )
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Number => &self.number,
            FormField::Email => &self.email,
            FormField::Relation => &self.relation,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Number => &mut self.number,
            FormField::Email => &mut self.email,
            FormField::Relation => &mut self.relation,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// 校验：所有字段非空，号码只能是数字
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(field) = FormField::ALL
            .into_iter()
            .find(|field| self.field(*field).is_empty())
        {
            return Err(ValidationError::EmptyField(field));
        }

        if !is_all_digits(&self.number) {
            return Err(ValidationError::InvalidNumber);
        }

        Ok(())
    }
}

/// 非空且全部为数字
pub fn is_all_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}
