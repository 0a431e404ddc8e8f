//! Registration schema: field names, form data, and validation rules
//!
//! Validation is a fixed rule table. Each field reports at most one message,
//! the one for the first rule it fails.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Youngest officer age accepted by the schema
pub const MIN_AGE: u64 = 18;
/// Oldest officer age accepted by the schema
pub const MAX_AGE: u64 = 100;
pub const MIN_USERNAME_LEN: usize = 5;
pub const MIN_PASSWORD_LEN: usize = 8;

/// The fields of the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FullName,
    Age,
    Email,
    Username,
    Password,
    ConfirmPassword,
    EmployeeId,
    DepartmentName,
}

impl FieldName {
    pub const ALL: [FieldName; 8] = [
        FieldName::FullName,
        FieldName::Age,
        FieldName::Email,
        FieldName::Username,
        FieldName::Password,
        FieldName::ConfirmPassword,
        FieldName::EmployeeId,
        FieldName::DepartmentName,
    ];

    /// Wire name, as used in the JSON body
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Age => "age",
            Self::Email => "email",
            Self::Username => "username",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::EmployeeId => "employeeId",
            Self::DepartmentName => "departmentName",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Age => "Age",
            Self::Email => "Email Address",
            Self::Username => "Username",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::EmployeeId => "Government Employee ID",
            Self::DepartmentName => "Department Name",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::FullName => "Enter your full name",
            Self::Age => "Enter your age",
            Self::Email => "Enter your email address",
            Self::Username => "Choose a username",
            Self::Password => "Create a password",
            Self::ConfirmPassword => "Confirm your password",
            Self::EmployeeId => "Enter your employee ID",
            Self::DepartmentName => "Enter your department",
        }
    }

    /// Position of the field in [`FieldName::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw string values of every registration field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub full_name: String,
    pub age: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub employee_id: String,
    pub department_name: String,
}

impl FormData {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FullName => &self.full_name,
            FieldName::Age => &self.age,
            FieldName::Email => &self.email,
            FieldName::Username => &self.username,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
            FieldName::EmployeeId => &self.employee_id,
            FieldName::DepartmentName => &self.department_name,
        }
    }

    pub fn get_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FullName => &mut self.full_name,
            FieldName::Age => &mut self.age,
            FieldName::Email => &mut self.email,
            FieldName::Username => &mut self.username,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
            FieldName::EmployeeId => &mut self.employee_id,
            FieldName::DepartmentName => &mut self.department_name,
        }
    }
}

/// Field-level validation messages
///
/// Keyed by [`FieldName`], so every entry refers to a real form field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap(BTreeMap<FieldName, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    #[cfg(test)]
    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    /// Remove the message for one field, returning true if there was one
    pub fn clear_field(&mut self, field: FieldName) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
            .expect("email pattern is valid")
    })
}

fn employee_id_pattern() -> &'static Regex {
    static EMPLOYEE_ID: OnceLock<Regex> = OnceLock::new();
    EMPLOYEE_ID.get_or_init(|| Regex::new(r"^[A-Z0-9]{6,12}$").expect("employee id pattern is valid"))
}

/// Check the standard email shape
pub fn is_valid_email(value: &str) -> bool {
    // The regex crate has no lookahead, so the leading-dot and double-dot
    // rules are checked here.
    !value.starts_with('.') && !value.contains("..") && email_pattern().is_match(value)
}

pub fn is_valid_employee_id(value: &str) -> bool {
    employee_id_pattern().is_match(value)
}

fn check_age(raw: &str) -> Option<&'static str> {
    if raw.is_empty() {
        return Some("Age is required");
    }
    if !raw.chars().all(|c| c.is_ascii_digit()) {
        return Some("Age must be a number");
    }
    match raw.parse::<u64>() {
        Ok(age) if age < MIN_AGE => Some("Must be at least 18 years old"),
        Ok(age) if age > MAX_AGE => Some("Invalid age"),
        Ok(_) => None,
        // Only reachable on overflow, which is far above the maximum
        Err(_) => Some("Invalid age"),
    }
}

/// First failing rule for a single field, if any
pub fn check_field(data: &FormData, field: FieldName) -> Option<&'static str> {
    let value = data.get(field);
    match field {
        FieldName::FullName => value
            .is_empty()
            .then_some("Full name is required"),
        FieldName::Age => check_age(value),
        FieldName::Email => (!is_valid_email(value)).then_some("Enter a valid email address"),
        FieldName::Username => (value.chars().count() < MIN_USERNAME_LEN)
            .then_some("Username must be at least 5 characters"),
        FieldName::Password => (value.chars().count() < MIN_PASSWORD_LEN)
            .then_some("Password must be at least 8 characters"),
        FieldName::ConfirmPassword => {
            (value != data.password).then_some("Passwords do not match")
        }
        FieldName::EmployeeId => (!is_valid_employee_id(value))
            .then_some("Enter a valid employee ID (6-12 alphanumeric characters)"),
        FieldName::DepartmentName => value
            .is_empty()
            .then_some("Department name is required"),
    }
}

/// Validate the whole form
///
/// Returns every field's first failing message, or `Ok(())` when the form
/// is valid.
pub fn validate(data: &FormData) -> Result<(), ErrorMap> {
    let mut errors = ErrorMap::new();
    for field in FieldName::ALL {
        if let Some(message) = check_field(data, field) {
            errors.insert(field, message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
pub(crate) fn valid_form_data() -> FormData {
    FormData {
        full_name: "Asha Rao".to_string(),
        age: "34".to_string(),
        email: "asha.rao@gov.example.in".to_string(),
        username: "asharao".to_string(),
        password: "s3cure-pass".to_string(),
        confirm_password: "s3cure-pass".to_string(),
        employee_id: "GOV12345".to_string(),
        department_name: "Public Works".to_string(),
    }
}
