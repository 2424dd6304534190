//! PawGuardians donation page: a wallet-connected front-end for the
//! `street_animals` registry, with the contract call simulated by default.

pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod locale;
pub mod logging;
pub mod notify;
pub mod page;
pub mod wallet;

pub use backend::{BackendError, DonationBackend, SimulatedBackend};
pub use catalog::AnimalCard;
pub use config::{ConfigError, PageConfig};
pub use error::{PageError, Result};
pub use locale::Locale;
pub use notify::{ConsoleNotifier, Notifier};
pub use page::{DonateOutcome, DonationPage};
pub use wallet::{StaticWallet, Wallet, WalletError};
