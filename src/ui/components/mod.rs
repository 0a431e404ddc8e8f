//! Reusable UI components

mod button;

pub use button::{render_button, render_link, BUTTON_HEIGHT};
