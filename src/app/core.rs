use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use ratatui::style::Color;
use tokio::sync::Mutex;

use crate::app::feedback::{ConfettiTimer, Feedback, FeedbackKind};
use crate::app::form::{FormField, MintForm};
use crate::app::mint;
use crate::config::AppConfig;
use crate::constants::{CONFETTI_DURATION_MILLIS, MAX_FIELD_LEN, RECENT_TX_LIMIT};
use crate::image::ImageState;
use crate::transactions::MintTransactionBuilder;
use crate::utils::{setup_for_read, shorten_id, NetworkState};
use crate::wallet::Wallet;

pub const NOT_CONNECTED_LABEL: &str = "Not connected";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Neon,
    Ember,
}

impl Theme {
    pub fn base(&self) -> Color {
        match self {
            Theme::Neon => Color::Cyan,
            Theme::Ember => Color::Magenta,
        }
    }

    pub fn highlight(&self) -> Color {
        match self {
            Theme::Neon => Color::LightBlue,
            Theme::Ember => Color::LightRed,
        }
    }

    pub fn dim(&self) -> Color {
        Color::DarkGray
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Theme::Neon => Theme::Ember,
            Theme::Ember => Theme::Neon,
        };
    }
}

/// The whole UI state tree. Events are keyboard input and completed async
/// work; last write to a field wins.
pub struct App {
    pub config: AppConfig,
    pub network_state: NetworkState,
    pub wallet: Option<Wallet>,
    pub wallet_address: String,
    pub sui_balance: Option<u128>,
    pub recent_transactions: Vec<String>,
    pub form: MintForm,
    pub active_index: usize,
    pub image: ImageState,
    pub feedback: Feedback,
    pub confetti: ConfettiTimer,
    pub is_submitting: bool,
    pub is_refreshing: bool,
    pub is_switching_network: bool,
    pub theme: Theme,
}

impl App {
    pub async fn new() -> Result<App> {
        let config = AppConfig::load();
        let network_state = NetworkState::new(config.rpc_url.clone());
        let form = MintForm::new(&config);

        let mut app = App {
            config,
            network_state,
            wallet: None,
            wallet_address: NOT_CONNECTED_LABEL.to_string(),
            sui_balance: None,
            recent_transactions: Vec::new(),
            form,
            active_index: 0,
            image: ImageState::default(),
            feedback: Feedback::Closed,
            confetti: ConfettiTimer::default(),
            is_submitting: false,
            is_refreshing: false,
            is_switching_network: false,
            theme: Theme::Neon,
        };
        app.connect().await;
        Ok(app)
    }

    /// Establish the wallet session from the local Sui config; a missing or
    /// broken config leaves the app in the disconnected state.
    pub async fn connect(&mut self) {
        match setup_for_read(&self.network_state).await {
            Ok((client, address)) => {
                let client = Arc::new(client);
                self.wallet = Some(Wallet::new(client, address));
                self.wallet_address = shorten_id(&address.to_string());
            }
            Err(_) => {
                self.wallet = None;
                self.wallet_address = NOT_CONNECTED_LABEL.to_string();
                self.sui_balance = None;
                self.recent_transactions.clear();
            }
        }
    }

    pub fn is_connected(&self) -> bool {
        self.wallet.is_some()
    }

    pub fn active_field(&self) -> FormField {
        FormField::ALL[self.active_index]
    }

    pub fn next_field(&mut self) {
        self.active_index = (self.active_index + 1) % FormField::ALL.len();
    }

    pub fn previous_field(&mut self) {
        self.active_index = (self.active_index + FormField::ALL.len() - 1) % FormField::ALL.len();
    }

    /// Append a character to the active field. Inputs are frozen while a
    /// submission is in flight.
    pub fn input_char(&mut self, c: char) {
        if self.is_submitting || c.is_control() {
            return;
        }
        let field = self.active_field();
        let buffer = self.form.field_mut(field);
        if buffer.len() >= MAX_FIELD_LEN {
            return;
        }
        buffer.push(c);
        self.after_field_edit(field);
    }

    pub fn backspace(&mut self) {
        if self.is_submitting {
            return;
        }
        let field = self.active_field();
        self.form.field_mut(field).pop();
        self.after_field_edit(field);
    }

    fn after_field_edit(&mut self, field: FormField) {
        if field == FormField::ImageReference {
            // load_failed resets before the new reference is evaluated
            let reference = self.form.image_reference.clone();
            self.image.evaluate(&reference);
        }
    }

    pub fn reset_form(&mut self) {
        if self.is_submitting {
            return;
        }
        self.form.reset();
        self.image.reset();
    }

    pub fn dismiss_feedback(&mut self) {
        self.feedback.dismiss();
    }

    /// Refresh balance and recent activity in the background. The two reads
    /// are independent of each other and of the mint flow; a single latch
    /// prevents overlapping refreshes.
    pub fn spawn_refresh(app: Arc<Mutex<App>>) {
        tokio::spawn(async move {
            let wallet = {
                let mut app = app.lock().await;
                if app.is_refreshing {
                    return;
                }
                app.is_refreshing = true;
                app.wallet.clone()
            };

            let fetched = match wallet {
                Some(wallet) => {
                    let address = wallet.active_address();
                    let (balance, recent) = futures::join!(
                        wallet.get_sui_balance(address),
                        wallet.get_recent_transactions(address, RECENT_TX_LIMIT)
                    );
                    Some((balance, recent))
                }
                None => None,
            };

            let mut app = app.lock().await;
            app.is_refreshing = false;
            if let Some((balance, recent)) = fetched {
                app.sui_balance = balance;
                app.recent_transactions = recent;
            }
        });
    }

    /// Submit the mint form. Exactly one external submission per invocation;
    /// the `is_submitting` latch disables the control until the call
    /// resolves.
    pub fn spawn_submit(app: Arc<Mutex<App>>) {
        tokio::spawn(Self::handle_submit(app));
    }

    async fn handle_submit(app: Arc<Mutex<App>>) {
        let (signer, network, explorer, mut form) = {
            let mut app = app.lock().await;
            if app.is_submitting || app.feedback.is_open() {
                return;
            }
            let Some(wallet) = &app.wallet else {
                app.feedback = Feedback::error(mint::MSG_NOT_CONNECTED);
                return;
            };
            if !app.form.is_submittable() {
                app.feedback = Feedback::error(mint::MSG_INCOMPLETE);
                return;
            }
            let signer = MintTransactionBuilder::new(Arc::clone(&wallet.client), wallet.address);
            app.is_submitting = true;
            (
                signer,
                app.network_state.get_current_network().to_string(),
                app.config.explorer_host.clone(),
                app.form.clone(),
            )
        };

        // Run against a form snapshot so the draw loop stays live while
        // the call is in flight; inputs are frozen by the latch.
        let feedback = mint::run_mint(&signer, &mut form, true, &network, &explorer).await;

        let mut app = app.lock().await;
        app.is_submitting = false;
        if feedback.kind() == Some(FeedbackKind::Success) {
            app.form = form;
            app.image.reset();
            app.confetti
                .start(Duration::from_millis(CONFETTI_DURATION_MILLIS));
        }
        app.feedback = feedback;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::form::FormField;

    fn disconnected_app() -> App {
        let config = AppConfig::default();
        let network_state = NetworkState::new(None);
        let form = MintForm::new(&config);
        App {
            config,
            network_state,
            wallet: None,
            wallet_address: NOT_CONNECTED_LABEL.to_string(),
            sui_balance: None,
            recent_transactions: Vec::new(),
            form,
            active_index: 0,
            image: ImageState::default(),
            feedback: Feedback::Closed,
            confetti: ConfettiTimer::default(),
            is_submitting: false,
            is_refreshing: false,
            is_switching_network: false,
            theme: Theme::Neon,
        }
    }

    #[tokio::test]
    async fn submit_without_wallet_opens_error_modal() {
        let app = Arc::new(Mutex::new(disconnected_app()));
        App::handle_submit(Arc::clone(&app)).await;

        let app = app.lock().await;
        assert_eq!(app.feedback.kind(), Some(FeedbackKind::Error));
        assert!(!app.is_submitting);
    }

    #[tokio::test]
    async fn submit_is_ignored_while_latch_is_held() {
        let app = Arc::new(Mutex::new(disconnected_app()));
        app.lock().await.is_submitting = true;

        App::handle_submit(Arc::clone(&app)).await;

        let app = app.lock().await;
        // Still in flight: no new feedback, latch untouched
        assert_eq!(app.feedback, Feedback::Closed);
        assert!(app.is_submitting);
    }

    #[tokio::test]
    async fn submit_is_ignored_while_modal_is_open() {
        let app = Arc::new(Mutex::new(disconnected_app()));
        app.lock().await.feedback = Feedback::error("Minting failed: boom");

        App::handle_submit(Arc::clone(&app)).await;

        let app = app.lock().await;
        assert_eq!(app.feedback, Feedback::error("Minting failed: boom"));
    }

    #[test]
    fn field_navigation_wraps_both_ways() {
        let mut app = disconnected_app();
        assert_eq!(app.active_field(), FormField::RecipientAddress);

        app.previous_field();
        assert_eq!(app.active_field(), FormField::TargetFunction);

        app.next_field();
        assert_eq!(app.active_field(), FormField::RecipientAddress);
    }

    #[test]
    fn editing_the_image_field_reevaluates_the_preview() {
        let mut app = disconnected_app();
        app.active_index = 1; // image reference
        for c in "/no/such/file.png".chars() {
            app.input_char(c);
        }
        assert!(app.image.load_failed);

        // Deleting a character changes the reference and clears the flag
        // before re-evaluation (still a missing file here, so it re-flips)
        app.backspace();
        assert!(app.image.load_failed);

        for _ in 0.."/no/such/file.pn".len() {
            app.backspace();
        }
        assert_eq!(app.form.image_reference, "");
        assert!(!app.image.load_failed);
    }

    #[test]
    fn inputs_are_frozen_while_submitting() {
        let mut app = disconnected_app();
        app.is_submitting = true;
        app.input_char('x');
        app.backspace();
        app.reset_form();
        assert_eq!(app.form.recipient_address, "");
    }

    #[test]
    fn theme_toggle_round_trips() {
        let mut theme = Theme::Neon;
        theme.toggle();
        assert_eq!(theme, Theme::Ember);
        theme.toggle();
        assert_eq!(theme, Theme::Neon);
    }
}
