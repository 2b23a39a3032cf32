//! Terminal session driver — the frontend stand-in.
//!
//! # Architecture
//!
//! [`CodebApp`] owns the [`FormState`], both workflow controllers and the
//! receiving ends of two channels:
//!
//! * `notifications_rx` — receives [`Notification`]s emitted by the
//!   controllers and renders them as toast-style lines.
//! * `recognition_rx`   — receives [`RecognitionEvent`]s from the live
//!   speech session and feeds them to the [`VoiceController`].
//!
//! The interactive loop in `main` reads one line at a time, parses it into an
//! [`AppCommand`] and calls [`CodebApp::dispatch`]; after every command the
//! pending events are pumped and new notifications are printed.
//!
//! # Commands
//!
//! | Input | Command |
//! |-------|---------|
//! | `code <source>` | Replace the code box contents |
//! | `lang <tag>` | Select a language tag from the catalog |
//! | `ask <question>` | Replace the free-text question |
//! | `key <api-key>` | Set the user-provided API key |
//! | `languages [query]` | List (or filter) the language catalog |
//! | `voice` | Toggle voice capture |
//! | `submit` | Run one submission attempt |
//! | `status` | Show the current result panel |
//! | `reset` | Clear the form and the result panel |
//! | `quit` / `exit` | Leave the session |

use std::sync::mpsc::Receiver;
use std::sync::Arc;

use crate::api::GenerationClient;
use crate::config::AppConfig;
use crate::form::FormState;
use crate::languages;
use crate::notify::{ChannelNotifier, Notification, Notifier, Severity};
use crate::voice::{RecognitionEvent, SpeechBackend, VoiceController};
use crate::workflow::{
    new_shared_state, SharedState, SubmissionController, SubmissionResult,
};

// ---------------------------------------------------------------------------
// AppCommand
// ---------------------------------------------------------------------------

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Replace the code box contents.
    SetCode(String),
    /// Select a language tag from the catalog.
    SetLanguage(String),
    /// Replace the free-text question.
    SetPrompt(String),
    /// Set the user-provided API key.
    SetApiKey(String),
    /// List the language catalog, optionally filtered.
    ListLanguages(Option<String>),
    /// Toggle voice capture on or off.
    ToggleVoice,
    /// Run one submission attempt.
    Submit,
    /// Show the current result panel.
    ShowStatus,
    /// Clear the form and the result panel.
    Reset,
    /// Leave the session.
    Quit,
}

/// Parse one input line into a command.
///
/// Returns `None` for blank lines and anything unrecognized.
pub fn parse_line(line: &str) -> Option<AppCommand> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb {
        "code" if !rest.is_empty() => Some(AppCommand::SetCode(rest.to_string())),
        "lang" if !rest.is_empty() => Some(AppCommand::SetLanguage(rest.to_string())),
        "ask" if !rest.is_empty() => Some(AppCommand::SetPrompt(rest.to_string())),
        "key" if !rest.is_empty() => Some(AppCommand::SetApiKey(rest.to_string())),
        "languages" => Some(AppCommand::ListLanguages(
            (!rest.is_empty()).then(|| rest.to_string()),
        )),
        "voice" => Some(AppCommand::ToggleVoice),
        "submit" => Some(AppCommand::Submit),
        "status" => Some(AppCommand::ShowStatus),
        "reset" => Some(AppCommand::Reset),
        "quit" | "exit" => Some(AppCommand::Quit),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// CodebApp
// ---------------------------------------------------------------------------

/// The interactive session: form, controllers and channel endpoints.
pub struct CodebApp {
    form: FormState,
    state: SharedState,
    submission: SubmissionController,
    voice: VoiceController,
    notifier: Arc<dyn Notifier>,
    notifications_rx: Receiver<Notification>,
    recognition_rx: Receiver<RecognitionEvent>,
    running: bool,
}

impl CodebApp {
    /// Wire up a session from a loaded configuration, a generation client
    /// and a speech backend.
    pub fn new(
        config: AppConfig,
        client: Arc<dyn GenerationClient>,
        backend: Box<dyn SpeechBackend>,
    ) -> Self {
        let (notify_tx, notifications_rx) = std::sync::mpsc::channel();
        let (events_tx, recognition_rx) = std::sync::mpsc::channel();

        let notifier: Arc<dyn Notifier> = Arc::new(ChannelNotifier::new(notify_tx));
        let state = new_shared_state();

        let submission = SubmissionController::new(
            client,
            config.api.clone(),
            Arc::clone(&state),
            Arc::clone(&notifier),
        );
        let voice = VoiceController::new(
            backend,
            config.recognition.clone(),
            events_tx,
            Arc::clone(&notifier),
        );

        Self {
            form: FormState::default(),
            state,
            submission,
            voice,
            notifier,
            notifications_rx,
            recognition_rx,
            running: true,
        }
    }

    /// `false` once a `Quit` command has been dispatched.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Read-only view of the form, for prompts and tests.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Snapshot of the current submission result.
    pub fn result(&self) -> SubmissionResult {
        self.state.lock().unwrap().result.clone()
    }

    // -----------------------------------------------------------------------
    // Command dispatch
    // -----------------------------------------------------------------------

    /// Apply one command.
    ///
    /// `Submit` is refused while a request is in flight — the terminal
    /// equivalent of a disabled submit button.
    pub async fn dispatch(&mut self, command: AppCommand) {
        match command {
            AppCommand::SetCode(code) => {
                self.form.code_text = code;
            }

            AppCommand::SetLanguage(tag) => match languages::label_for(&tag) {
                Some(label) => {
                    log::debug!("language selected: {tag} ({label})");
                    self.form.language = tag;
                }
                None => {
                    self.notifier.notify(Notification::error(
                        "Unknown Language",
                        format!("\"{tag}\" is not in the catalog. Try `languages {tag}`."),
                    ));
                }
            },

            AppCommand::SetPrompt(question) => {
                self.form.free_text_prompt = question;
            }

            AppCommand::SetApiKey(key) => {
                self.form.api_key = Some(key);
            }

            AppCommand::ListLanguages(query) => {
                let matches = match query.as_deref() {
                    Some(q) => languages::filter(q),
                    None => languages::LANGUAGES.to_vec(),
                };
                for (tag, label) in matches {
                    println!("  {tag:<14} {label}");
                }
            }

            AppCommand::ToggleVoice => {
                // Unsupported hosts already get their notification from the
                // controller; nothing extra to do here.
                let _ = self.voice.toggle();
            }

            AppCommand::Submit => {
                if self.result().is_pending() {
                    log::info!("submit ignored: a request is already in flight");
                    return;
                }
                // Outcome lands in the shared state and as a notification.
                let _ = self.submission.submit(&self.form).await;
            }

            AppCommand::ShowStatus => {
                println!("{}", self.render_result());
            }

            AppCommand::Reset => {
                self.form = FormState::default();
                self.state.lock().unwrap().result = SubmissionResult::Idle;
            }

            AppCommand::Quit => {
                self.running = false;
            }
        }
    }

    // -----------------------------------------------------------------------
    // Event pumping
    // -----------------------------------------------------------------------

    /// Drain all pending recognition events into the voice controller
    /// (non-blocking).
    pub fn pump_events(&mut self) {
        while let Ok(event) = self.recognition_rx.try_recv() {
            self.voice.handle_event(event, &mut self.form);
        }
    }

    /// Drain and print all pending notifications (non-blocking).
    pub fn drain_notifications(&mut self) {
        while let Ok(n) = self.notifications_rx.try_recv() {
            println!("{}", render_notification(&n));
        }
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    /// The result panel as a printable block.
    pub fn render_result(&self) -> String {
        match self.result() {
            SubmissionResult::Idle => "[idle] nothing submitted yet".to_string(),
            SubmissionResult::Pending => "[analyzing] request in flight...".to_string(),
            SubmissionResult::Success(text) => format!("--- Analysis ---\n{text}"),
            SubmissionResult::Failure(e) => format!("[failed] {e}"),
        }
    }

    /// One-line session summary for the prompt.
    pub fn status_line(&self) -> String {
        format!(
            "lang={} code={}B question={}B [{}]",
            self.form.language,
            self.form.code_text.len(),
            self.form.free_text_prompt.len(),
            self.result().label(),
        )
    }
}

/// Render one notification as a toast-style line.
fn render_notification(n: &Notification) -> String {
    let tag = match n.severity {
        Severity::Info => "info",
        Severity::Success => " ok ",
        Severity::Error => "err!",
    };
    format!("[{tag}] {}: {}", n.title, n.body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
