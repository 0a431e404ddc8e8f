//! Form field value objects

use super::schema::FieldName;

/// How a field accepts and displays its value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    /// Digits only; other input is ignored
    Numeric,
    /// Rendered masked
    Secret,
}

impl FieldKind {
    fn for_name(name: FieldName) -> Self {
        match name {
            FieldName::Age => FieldKind::Numeric,
            FieldName::Password | FieldName::ConfirmPassword => FieldKind::Secret,
            _ => FieldKind::Text,
        }
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    value: String,
}

impl FormField {
    /// Create an empty field configured for `name`
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            label: name.label(),
            placeholder: name.placeholder(),
            kind: FieldKind::for_name(name),
            value: String::new(),
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Whether `value` may be stored in this field
    pub fn accepts(&self, value: &str) -> bool {
        match self.kind {
            FieldKind::Numeric => value.chars().all(|c| c.is_ascii_digit()),
            FieldKind::Text | FieldKind::Secret => true,
        }
    }

    /// Replace the value. Returns false and leaves the field untouched if
    /// the value is not accepted.
    pub fn set_text(&mut self, value: String) -> bool {
        if !self.accepts(&value) {
            return false;
        }
        self.value = value;
        true
    }

    /// Value after appending `c`, without modifying the field
    pub fn with_char(&self, c: char) -> String {
        let mut next = self.value.clone();
        next.push(c);
        next
    }

    /// Value after removing the last character, without modifying the field
    pub fn without_last_char(&self) -> String {
        let mut next = self.value.clone();
        next.pop();
        next
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match self.kind {
            FieldKind::Secret => "•".repeat(self.value.chars().count()),
            FieldKind::Text | FieldKind::Numeric => self.value.clone(),
        }
    }
}
