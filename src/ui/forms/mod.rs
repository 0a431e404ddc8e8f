//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `registration_form`: Government officer registration page

mod field_renderer;
mod registration_form;

pub use registration_form::draw as draw_registration;
