//! Form domain layer
//!
//! Type-safe handling of the registration form: field values, the
//! validation schema and the focus model.

mod field;
mod form_state;
mod schema;

pub use field::FormField;
pub use form_state::{FocusTarget, Form, RegistrationForm};
pub use schema::{FieldName, FormData};

#[cfg(test)]
pub(crate) use schema::valid_form_data;
