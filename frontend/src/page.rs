//! Page-level controller: wallet connection, card selection and the donate flow.

use tracing::{debug, error, info};

use crate::backend::DonationBackend;
use crate::catalog::{self, AnimalCard};
use crate::config::PageConfig;
use crate::locale::{Locale, Messages};
use crate::notify::Notifier;
use crate::wallet::{short_address, Wallet, WalletError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonateOutcome {
    /// The backend accepted the donation and the form was reset.
    Completed,
    /// Input checks failed; nothing was submitted.
    Rejected,
    /// The backend returned an error.
    Failed,
}

pub struct DonationPage<W, B, N> {
    wallet: W,
    backend: B,
    notifier: N,
    locale: Locale,
    cards: Vec<AnimalCard>,
    default_amount: String,
    public_key: Option<String>,
    selected: Option<AnimalCard>,
    donation_amount: String,
    is_loading: bool,
}

impl<W: Wallet, B: DonationBackend, N: Notifier> DonationPage<W, B, N> {
    pub fn new(config: &PageConfig, wallet: W, backend: B, notifier: N) -> Self {
        Self {
            wallet,
            backend,
            notifier,
            locale: config.locale,
            cards: catalog::animals(config.locale),
            default_amount: config.default_amount.clone(),
            public_key: None,
            selected: None,
            donation_amount: config.default_amount.clone(),
            is_loading: false,
        }
    }

    fn messages(&self) -> &'static Messages {
        self.locale.messages()
    }

    pub fn cards(&self) -> &[AnimalCard] {
        &self.cards
    }

    pub fn public_key(&self) -> Option<&str> {
        self.public_key.as_deref()
    }

    pub fn selected(&self) -> Option<&AnimalCard> {
        self.selected.as_ref()
    }

    pub fn donation_amount(&self) -> &str {
        &self.donation_amount
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Picks up an existing wallet session. Failures are only logged.
    pub async fn mount(&mut self) {
        match self.existing_address().await {
            Ok(Some(address)) => {
                info!(address = %short_address(&address), "wallet already connected");
                self.public_key = Some(address);
            }
            Ok(None) => debug!("wallet not connected yet"),
            Err(e) => error!(error = %e, "failed to check wallet connection"),
        }
    }

    async fn existing_address(&self) -> Result<Option<String>, WalletError> {
        if self.wallet.is_connected().await? {
            Ok(Some(self.wallet.get_address().await?))
        } else {
            Ok(None)
        }
    }

    pub async fn connect_wallet(&mut self) {
        self.is_loading = true;

        match self.request_address().await {
            Ok(address) => {
                info!(address = %short_address(&address), "wallet connected");
                self.public_key = Some(address);
            }
            Err(e) => {
                error!(error = %e, "failed to connect wallet");
                self.notifier.alert(self.messages().connect_failed);
            }
        }

        self.is_loading = false;
    }

    async fn request_address(&self) -> Result<String, WalletError> {
        self.wallet.set_allowed().await?;
        self.wallet.get_address().await
    }

    /// Selects the card with `id`. Unknown ids leave the selection alone.
    pub fn select(&mut self, id: u32) {
        if let Some(card) = self.cards.iter().find(|card| card.id == id) {
            self.selected = Some(card.clone());
        }
    }

    pub fn set_amount(&mut self, text: impl Into<String>) {
        self.donation_amount = text.into();
    }

    pub fn can_donate(&self) -> bool {
        self.public_key.is_some() && self.selected.is_some() && !self.is_loading
    }

    pub async fn donate(&mut self) -> DonateOutcome {
        let (Some(card), Some(donor)) = (self.selected.clone(), self.public_key.clone()) else {
            self.notifier.alert(self.messages().pick_and_connect);
            return DonateOutcome::Rejected;
        };

        let Some(amount) = parse_amount(&self.donation_amount) else {
            self.notifier.alert(self.messages().invalid_amount);
            return DonateOutcome::Rejected;
        };

        self.is_loading = true;
        info!(animal = card.name, amount, "donating");

        let outcome = match self.backend.submit(&donor, &card, amount).await {
            Ok(()) => {
                let message = self
                    .messages()
                    .donation_succeeded(card.name, self.donation_amount.trim());
                self.notifier.alert(&message);
                self.selected = None;
                self.donation_amount = self.default_amount.clone();
                DonateOutcome::Completed
            }
            Err(e) => {
                error!(error = %e, animal = card.name, "donation failed");
                self.notifier.alert(self.messages().donation_failed);
                DonateOutcome::Failed
            }
        };

        self.is_loading = false;
        outcome
    }

    pub fn connect_label(&self) -> &'static str {
        if self.is_loading {
            self.messages().connecting
        } else {
            self.messages().connect
        }
    }

    pub fn donate_label(&self) -> String {
        if self.is_loading {
            self.messages().processing.to_string()
        } else {
            self.messages().donate_button(&self.donation_amount)
        }
    }

    /// Caption shown in place of the connect button once a wallet is linked.
    pub fn wallet_caption(&self) -> Option<String> {
        self.public_key
            .as_deref()
            .map(|key| format!("{} {}", self.messages().connected_wallet, short_address(key)))
    }

    /// Prompt shown above the donate form.
    pub fn hint(&self) -> String {
        let messages = self.messages();
        match (&self.public_key, &self.selected) {
            (None, _) => messages.connect_hint.to_string(),
            (Some(_), None) => messages.pick_animal_hint.to_string(),
            (Some(_), Some(card)) => messages.selected_animal(card.name),
        }
    }
}

/// A donation amount is any finite number above zero.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}
