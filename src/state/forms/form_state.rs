//! Registration form state

use super::field::FormField;
use super::schema::{self, ErrorMap, FieldName, FormData};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// What currently has keyboard focus on the registration page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Field(FieldName),
    SubmitButton,
    SignInLink,
}

/// Focus index of the submit button (after the eight fields)
const SUBMIT_BUTTON_INDEX: usize = FieldName::ALL.len();
/// Focus index of the "Sign in instead" link
const SIGN_IN_LINK_INDEX: usize = SUBMIT_BUTTON_INDEX + 1;

/// The government officer registration form
///
/// Holds the field values, the error map and the submitting flag.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    fields: Vec<FormField>,
    errors: ErrorMap,
    submitting: bool,
    pub active_field_index: usize,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self {
            fields: FieldName::ALL.into_iter().map(FormField::new).collect(),
            errors: ErrorMap::new(),
            submitting: false,
            active_field_index: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        &self.fields[name.index()]
    }

    pub fn value(&self, name: FieldName) -> &str {
        self.field(name).as_text()
    }

    /// Snapshot of all field values
    pub fn form_data(&self) -> FormData {
        let mut data = FormData::default();
        for field in &self.fields {
            data.get_mut(field.name).push_str(field.as_text());
        }
        data
    }

    /// Store a new value for a field and clear that field's error
    ///
    /// Non-digit input to the age field is ignored. Returns whether the
    /// change was applied.
    pub fn on_field_change(&mut self, name: FieldName, value: impl Into<String>) -> bool {
        let value = value.into();
        if !self.fields[name.index()].set_text(value) {
            tracing::trace!(field = %name, "ignored rejected input");
            return false;
        }
        self.errors.clear_field(name);
        true
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) -> bool {
        match self.focus() {
            FocusTarget::Field(name) => {
                let next = self.field(name).with_char(c);
                self.on_field_change(name, next)
            }
            FocusTarget::SubmitButton | FocusTarget::SignInLink => false,
        }
    }

    /// Delete the last character of the focused field
    pub fn backspace(&mut self) -> bool {
        match self.focus() {
            FocusTarget::Field(name) => {
                if self.value(name).is_empty() {
                    return false;
                }
                let next = self.field(name).without_last_char();
                self.on_field_change(name, next)
            }
            FocusTarget::SubmitButton | FocusTarget::SignInLink => false,
        }
    }

    pub fn error(&self, name: FieldName) -> Option<&str> {
        self.errors.get(name)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Run the schema over the current values
    ///
    /// Replaces the error map wholesale: emptied when valid, filled with
    /// the new messages otherwise.
    pub fn validate(&mut self) -> bool {
        match schema::validate(&self.form_data()) {
            Ok(()) => {
                self.errors.clear();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    /// Move focus to the first field with an error, if any
    pub fn focus_first_error(&mut self) {
        if let Some((field, _)) = self.errors.iter().next() {
            self.active_field_index = field.index();
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn focus(&self) -> FocusTarget {
        match FieldName::from_index(self.active_field_index) {
            Some(name) => FocusTarget::Field(name),
            None if self.active_field_index == SUBMIT_BUTTON_INDEX => FocusTarget::SubmitButton,
            None => FocusTarget::SignInLink,
        }
    }

    pub fn is_focused(&self, name: FieldName) -> bool {
        self.focus() == FocusTarget::Field(name)
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        SIGN_IN_LINK_INDEX + 1 // eight fields, submit button, sign-in link
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SIGN_IN_LINK_INDEX);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::schema::valid_form_data;

    fn filled_form(data: &FormData) -> RegistrationForm {
        let mut form = RegistrationForm::new();
        for name in FieldName::ALL {
            assert!(form.on_field_change(name, data.get(name)));
        }
        form
    }

    mod focus {
        use super::*;

        #[test]
        fn test_new_focuses_first_field() {
            let form = RegistrationForm::new();
            assert_eq!(form.focus(), FocusTarget::Field(FieldName::FullName));
            assert!(form.is_focused(FieldName::FullName));
        }

        #[test]
        fn test_field_count_includes_button_and_link() {
            let form = RegistrationForm::new();
            assert_eq!(form.field_count(), 10);
        }

        #[test]
        fn test_next_field_reaches_button_then_link_then_wraps() {
            let mut form = RegistrationForm::new();
            for _ in 0..8 {
                form.next_field();
            }
            assert_eq!(form.focus(), FocusTarget::SubmitButton);
            form.next_field();
            assert_eq!(form.focus(), FocusTarget::SignInLink);
            form.next_field();
            assert_eq!(form.focus(), FocusTarget::Field(FieldName::FullName));
        }

        #[test]
        fn test_prev_field_wraps_to_link() {
            let mut form = RegistrationForm::new();
            form.prev_field();
            assert_eq!(form.focus(), FocusTarget::SignInLink);
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = RegistrationForm::new();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 9);
        }

        #[test]
        fn test_focus_indices_map_to_fields_in_order() {
            let mut form = RegistrationForm::new();
            for name in FieldName::ALL {
                form.set_active_field(name.index());
                assert_eq!(form.focus(), FocusTarget::Field(name));
            }
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn test_input_char_appends_to_focused_field() {
            let mut form = RegistrationForm::new();
            for c in "Ravi".chars() {
                assert!(form.input_char(c));
            }
            assert_eq!(form.value(FieldName::FullName), "Ravi");
        }

        #[test]
        fn test_age_ignores_non_digit_keystrokes() {
            let mut form = RegistrationForm::new();
            form.set_active_field(FieldName::Age.index());
            assert!(form.input_char('4'));
            assert!(!form.input_char('x'));
            assert!(!form.input_char('-'));
            assert!(form.input_char('2'));
            assert_eq!(form.value(FieldName::Age), "42");
        }

        #[test]
        fn test_age_accepts_clearing() {
            let mut form = RegistrationForm::new();
            assert!(form.on_field_change(FieldName::Age, "30"));
            assert!(form.on_field_change(FieldName::Age, ""));
            assert_eq!(form.value(FieldName::Age), "");
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut form = RegistrationForm::new();
            form.on_field_change(FieldName::FullName, "Ravi");
            assert!(form.backspace());
            assert_eq!(form.value(FieldName::FullName), "Rav");
        }

        #[test]
        fn test_backspace_on_empty_field_is_noop() {
            let mut form = RegistrationForm::new();
            assert!(!form.backspace());
        }

        #[test]
        fn test_input_on_button_is_ignored() {
            let mut form = RegistrationForm::new();
            form.set_active_field(8);
            assert!(!form.input_char('a'));
            assert!(!form.backspace());
            assert_eq!(form.form_data(), FormData::default());
        }

        #[test]
        fn test_form_data_snapshot() {
            let data = valid_form_data();
            let form = filled_form(&data);
            assert_eq!(form.form_data(), data);
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn test_validate_valid_form_clears_errors() {
            let mut form = filled_form(&valid_form_data());
            assert!(form.validate());
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_validate_empty_form_sets_errors() {
            let mut form = RegistrationForm::new();
            assert!(!form.validate());
            assert_eq!(form.error(FieldName::FullName), Some("Full name is required"));
            assert_eq!(form.error(FieldName::Age), Some("Age is required"));
        }

        #[test]
        fn test_editing_clears_exactly_that_fields_error() {
            let mut form = RegistrationForm::new();
            form.validate();
            let before = form.errors().len();
            assert!(form.errors().contains(FieldName::Email));

            form.on_field_change(FieldName::Email, "x");

            assert!(form.error(FieldName::Email).is_none());
            assert_eq!(form.errors().len(), before - 1);
            assert!(form.error(FieldName::FullName).is_some());
            assert!(form.error(FieldName::Username).is_some());
        }

        #[test]
        fn test_rejected_age_input_keeps_error() {
            let mut form = RegistrationForm::new();
            form.validate();
            assert!(!form.on_field_change(FieldName::Age, "abc"));
            assert_eq!(form.error(FieldName::Age), Some("Age is required"));
        }

        #[test]
        fn test_revalidation_replaces_error_map() {
            let mut form = RegistrationForm::new();
            form.validate();
            let data = FormData {
                username: "abc".to_string(),
                ..valid_form_data()
            };
            for name in FieldName::ALL {
                form.on_field_change(name, data.get(name));
            }
            form.validate();
            assert_eq!(form.errors().len(), 1);
            assert!(form.errors().contains(FieldName::Username));
        }

        #[test]
        fn test_focus_first_error() {
            let data = FormData {
                email: "nope".to_string(),
                employee_id: "AB12".to_string(),
                ..valid_form_data()
            };
            let mut form = filled_form(&data);
            form.validate();
            form.focus_first_error();
            assert_eq!(form.focus(), FocusTarget::Field(FieldName::Email));
        }
    }
}
