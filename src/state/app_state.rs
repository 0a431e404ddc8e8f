//! Application state definitions

use super::forms::RegistrationForm;
use std::time::{Duration, Instant};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Register,
    SignIn,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Register => "Government Officer Registration",
            View::SignIn => "Government Officer Sign In",
        }
    }
}

/// Severity of a status notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Work in progress; stays until replaced
    Loading,
    Success,
    Error,
}

/// Transient status-bar notification
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub expires_at: Option<Instant>,
}

impl Notification {
    /// How long success and error notifications stay visible
    pub const DISPLAY_DURATION: Duration = Duration::from_secs(4);

    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        let expires_at = match kind {
            NotificationKind::Loading => None,
            NotificationKind::Success | NotificationKind::Error => {
                Some(Instant::now() + Self::DISPLAY_DURATION)
            }
        };
        Self {
            kind,
            message: message.into(),
            expires_at,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Mounted registration form; replaced with a fresh one whenever the
    /// registration view is entered
    pub form: RegistrationForm,
    pub notification: Option<Notification>,
    /// When to navigate to the sign-in view after a successful submission
    pub pending_redirect: Option<Instant>,
    /// Set once a registration request went through; reset when the
    /// registration view is entered again
    pub registration_sent: bool,
}

impl AppState {
    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notification = Some(Notification::new(kind, message));
    }

    /// Drop a loading notification whose operation will never report back
    pub fn clear_loading_notification(&mut self) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.kind == NotificationKind::Loading)
        {
            self.notification = None;
        }
    }

    /// Drop the notification once its display time is over
    pub fn clear_expired_notification(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now))
        {
            self.notification = None;
        }
    }

    /// Switch views. Entering the registration view mounts a fresh form.
    pub fn navigate(&mut self, view: View) {
        if view == View::Register {
            self.form = RegistrationForm::new();
            self.registration_sent = false;
        }
        self.pending_redirect = None;
        self.current_view = view;
    }

    pub fn schedule_redirect(&mut self, delay: Duration) {
        self.pending_redirect = Some(Instant::now() + delay);
    }

    /// True once the scheduled redirect deadline has passed
    pub fn redirect_due(&self, now: Instant) -> bool {
        self.pending_redirect.is_some_and(|at| now >= at)
    }

    pub fn has_pending_work(&self) -> bool {
        self.form.is_submitting() || self.pending_redirect.is_some()
    }
}
