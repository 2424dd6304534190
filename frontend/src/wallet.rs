//! The browser wallet extension, seen from the page.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("wallet extension is not installed")]
    NotInstalled,

    #[error("wallet access was rejected by the user")]
    Rejected,

    #[error("wallet extension error: {0}")]
    Extension(String),
}

/// Connect/address surface of a Freighter-style wallet extension.
#[allow(async_fn_in_trait)]
pub trait Wallet {
    /// Whether the extension has already granted this page access.
    async fn is_connected(&self) -> Result<bool, WalletError>;

    /// Ask the user to allow this page. Fails if they decline.
    async fn set_allowed(&self) -> Result<(), WalletError>;

    async fn get_address(&self) -> Result<String, WalletError>;
}

/// `GABCDEFG...STUVWXYZ`. Short addresses are returned unchanged.
pub fn short_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 16 {
        return address.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 8..].iter().collect();
    format!("{head}...{tail}")
}

/// A wallet whose address is known up front, for front-ends without an extension.
#[derive(Debug, Clone, Default)]
pub struct StaticWallet {
    address: Option<String>,
}

impl StaticWallet {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
        }
    }

    /// A wallet that behaves like a missing extension.
    pub fn absent() -> Self {
        Self { address: None }
    }
}

impl Wallet for StaticWallet {
    async fn is_connected(&self) -> Result<bool, WalletError> {
        Ok(self.address.is_some())
    }

    async fn set_allowed(&self) -> Result<(), WalletError> {
        match self.address {
            Some(_) => Ok(()),
            None => Err(WalletError::NotInstalled),
        }
    }

    async fn get_address(&self) -> Result<String, WalletError> {
        self.address.clone().ok_or(WalletError::NotInstalled)
    }
}
