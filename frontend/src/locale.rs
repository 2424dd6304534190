//! User-visible strings for the two localized copies of the page.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::config::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Tr,
    En,
}

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Locale::Tr => &TR,
            Locale::En => &EN,
        }
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tr" => Ok(Locale::Tr),
            "en" => Ok(Locale::En),
            other => Err(ConfigError::UnknownLocale(other.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::Tr => f.write_str("tr"),
            Locale::En => f.write_str("en"),
        }
    }
}

#[derive(Debug)]
pub struct Messages {
    pub title: &'static str,
    pub connect: &'static str,
    pub connecting: &'static str,
    pub connected_wallet: &'static str,
    pub raised: &'static str,
    pub target: &'static str,
    pub completed: &'static str,
    pub selected: &'static str,
    selected_animal: &'static str,
    pub pick_animal_hint: &'static str,
    pub connect_hint: &'static str,
    pub processing: &'static str,
    donate_button: &'static str,
    pub connect_failed: &'static str,
    pub pick_and_connect: &'static str,
    pub invalid_amount: &'static str,
    donation_succeeded: &'static str,
    pub donation_failed: &'static str,
}

impl Messages {
    /// Label of the donate button, e.g. `❤️ Support (10 XLM)`.
    pub fn donate_button(&self, amount: &str) -> String {
        self.donate_button.replace("{amount}", amount)
    }

    /// Banner of the donate form once a card is picked.
    pub fn selected_animal(&self, name: &str) -> String {
        self.selected_animal.replace("{name}", name)
    }

    pub fn donation_succeeded(&self, name: &str, amount: &str) -> String {
        self.donation_succeeded
            .replace("{name}", name)
            .replace("{amount}", amount)
    }
}

static TR: Messages = Messages {
    title: "🐾 Sokak Dostları",
    connect: "🔗 Freighter Cüzdanını Bağla",
    connecting: "Bağlanıyor...",
    connected_wallet: "Bağlı Cüzdan:",
    raised: "Toplanan",
    target: "Hedef",
    completed: "tamamlandı",
    selected: "✓ Seçildi - Bağış yapmak için aşağıdaki butonu kullanın",
    selected_animal: "Seçilen Hayvan: {name}",
    pick_animal_hint: "Lütfen yukarıdan bir hayvan seçin",
    connect_hint: "Bağış yapmak için lütfen cüzdanınızı bağlayın",
    processing: "İşlem Yapılıyor...",
    donate_button: "❤️ Destekle ({amount} XLM)",
    connect_failed: "Cüzdan bağlanırken hata oluştu!",
    pick_and_connect: "Lütfen bir hayvan seçin ve cüzdanınızı bağlayın!",
    invalid_amount: "Geçerli bir bağış miktarı girin!",
    donation_succeeded: "{name} için {amount} XLM bağışınız başarıyla yapıldı!",
    donation_failed: "Bağış yapılırken hata oluştu!",
};

static EN: Messages = Messages {
    title: "🐾 PawGuardians",
    connect: "🔗 Connect Freighter Wallet",
    connecting: "Connecting...",
    connected_wallet: "Connected Wallet:",
    raised: "Raised",
    target: "Target",
    completed: "completed",
    selected: "✓ Selected - use the button below to donate",
    selected_animal: "Selected Animal: {name}",
    pick_animal_hint: "Please select an animal above",
    connect_hint: "Please connect your wallet to donate",
    processing: "Processing...",
    donate_button: "❤️ Support ({amount} XLM)",
    connect_failed: "An error occurred while connecting the wallet!",
    pick_and_connect: "Please select an animal and connect your wallet!",
    invalid_amount: "Please enter a valid donation amount!",
    donation_succeeded: "Your donation of {amount} XLM for {name} was successful!",
    donation_failed: "An error occurred while donating!",
};
