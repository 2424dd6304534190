use thiserror::Error;

use crate::backend::BackendError;
use crate::config::ConfigError;
use crate::wallet::WalletError;

#[derive(Error, Debug)]
pub enum PageError {
    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, PageError>;
