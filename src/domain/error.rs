use std::fmt::Display;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Ingestion failed with: {0}")]
    Ingestion(String),

    /// A field was supplied with the wrong kind of value.
    #[error("TypeError: {0}")]
    TypeMismatch(String),

    /// A field has the right kind of value but invalid content.
    #[error("ValueError: {0}")]
    InvalidValue(String),

    /// Non-positive amount passed to a balance mutation.
    #[error("AmountError(Cannot deposit/withdraw negative amounts) {account} {message})")]
    Amount { account: String, message: String },

    /// Withdrawal would take the balance below the overdraft limit.
    #[error("BalanceError({account} {message})")]
    Balance { account: String, message: String },

    /// The new balance or derived amount is outside the representable range.
    #[error("OverflowError({account} {message})")]
    Overflow { account: String, message: String },
}

impl Error {
    pub(crate) fn amount<A: Display + ?Sized>(account: &A, message: &str) -> Self {
        Error::Amount {
            account: account.to_string(),
            message: message.to_owned(),
        }
    }

    pub(crate) fn balance<A: Display + ?Sized>(account: &A, message: &str) -> Self {
        Error::Balance {
            account: account.to_string(),
            message: message.to_owned(),
        }
    }

    pub(crate) fn overflow<A: Display + ?Sized>(account: &A, message: &str) -> Self {
        Error::Overflow {
            account: account.to_string(),
            message: message.to_owned(),
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidValue(message.into())
    }
}
