//! Application state and core logic

use crate::api::{self, RegistrationApi, RegistrationReceipt, SubmitError};
use crate::config::PortalConfig;
use crate::state::{AppState, FocusTarget, Form, NotificationKind, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;

const SUBMITTING_MESSAGE: &str = "Submitting registration request...";
const SUCCESS_MESSAGE: &str = "Registration request sent successfully!";
const FAILURE_MESSAGE: &str = "Failed to submit request. Please try again.";

type SubmissionHandle = JoinHandle<Result<RegistrationReceipt, SubmitError>>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    config: PortalConfig,
    /// Backend that receives registrations
    api: Arc<dyn RegistrationApi>,
    /// In-flight submission, polled on every tick
    submission: Option<SubmissionHandle>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App using the backend selected by `config`
    pub fn new(config: PortalConfig) -> Result<Self> {
        let api = api::from_config(&config)?;
        Ok(Self::with_api(config, api))
    }

    pub fn with_api(config: PortalConfig, api: Arc<dyn RegistrationApi>) -> Self {
        Self {
            state: AppState::default(),
            config,
            api,
            submission: None,
            quit: false,
        }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Where registrations are sent, for display
    pub fn backend_description(&self) -> String {
        self.api.describe()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether the event loop should poll faster
    pub fn is_busy(&self) -> bool {
        self.submission.is_some() || self.state.has_pending_work()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state.current_view {
            View::Register => self.handle_register_key(key),
            View::SignIn => self.handle_sign_in_key(key),
        }
    }

    /// Switch views, dropping any in-flight submission of the old page
    pub fn navigate(&mut self, view: View) {
        if let Some(handle) = self.submission.take() {
            tracing::debug!("abandoning in-flight submission on navigation");
            handle.abort();
            self.state.form.set_submitting(false);
            self.state.clear_loading_notification();
        }
        self.state.navigate(view);
    }

    /// Handle keys in the registration view
    fn handle_register_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Enter if key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) => {
                self.submit()
            }
            KeyCode::Enter => match self.state.form.focus() {
                FocusTarget::Field(_) => self.state.form.next_field(),
                FocusTarget::SubmitButton => self.submit(),
                FocusTarget::SignInLink => self.navigate(View::SignIn),
            },
            KeyCode::Char(c) if is_text_input(key.modifiers) => {
                self.state.form.input_char(c);
            }
            KeyCode::Backspace => {
                self.state.form.backspace();
            }
            _ => {}
        }
    }

    /// Handle keys in the sign-in view
    fn handle_sign_in_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            KeyCode::Enter | KeyCode::Char('r') => self.navigate(View::Register),
            _ => {}
        }
    }

    /// Validate the form and, if valid, start the submission
    ///
    /// Ignored while a submission is already running.
    pub fn submit(&mut self) {
        if self.state.form.is_submitting() {
            tracing::debug!("submit ignored, already submitting");
            return;
        }

        if !self.state.form.validate() {
            tracing::info!(
                errors = self.state.form.errors().len(),
                "registration form has validation errors"
            );
            self.state.form.focus_first_error();
            return;
        }

        let data = self.state.form.form_data();
        self.state.form.set_submitting(true);
        self.state.notify(NotificationKind::Loading, SUBMITTING_MESSAGE);
        tracing::info!(
            username = %data.username,
            backend = %self.api.describe(),
            "submitting registration request"
        );

        let api = Arc::clone(&self.api);
        self.submission = Some(tokio::spawn(async move { api.register(&data).await }));
    }

    /// Collect the submission result once its task has finished
    pub async fn poll_submission(&mut self) {
        let finished = self
            .submission
            .as_ref()
            .is_some_and(JoinHandle::is_finished);
        if !finished {
            return;
        }
        let Some(handle) = self.submission.take() else {
            return;
        };

        let outcome = handle
            .await
            .unwrap_or_else(|e| Err(SubmitError::Task(e.to_string())));
        self.finish_submission(outcome);
    }

    fn finish_submission(&mut self, outcome: Result<RegistrationReceipt, SubmitError>) {
        match outcome {
            Ok(receipt) => {
                tracing::info!(
                    has_token = receipt.token.is_some(),
                    "registration request sent"
                );
                let message = receipt
                    .message
                    .unwrap_or_else(|| SUCCESS_MESSAGE.to_string());
                self.state.notify(NotificationKind::Success, message);
                self.state.registration_sent = true;
                self.state.schedule_redirect(self.config.redirect_delay());
            }
            Err(err) => {
                tracing::error!(error = %err, "error submitting registration form");
                self.state.notify(NotificationKind::Error, FAILURE_MESSAGE);
            }
        }
        self.state.form.set_submitting(false);
    }

    /// Advance timers: submission result, redirect, notification expiry
    pub async fn tick(&mut self) {
        self.poll_submission().await;

        let now = Instant::now();
        if self.state.redirect_due(now) {
            tracing::info!(route = self.config.sign_in_route(), "redirecting to sign-in");
            self.navigate(View::SignIn);
        }
        self.state.clear_expired_notification(now);
    }
}

/// Plain or shifted characters, plus AltGr which arrives as Ctrl+Alt
fn is_text_input(modifiers: KeyModifiers) -> bool {
    let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
    !modifiers.intersects(altgr) || modifiers.contains(altgr)
}
