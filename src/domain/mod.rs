pub mod account;
pub mod any_account;
pub mod application;
pub mod counter;
pub mod current;
pub mod deposit;
pub mod error;
pub mod identity;
pub mod investment;
pub mod kind;
pub mod traits;

pub use account::Account;
pub use any_account::AnyAccount;
pub use application::{AccountApplication, ApplicationKind};
pub use counter::InstanceCounter;
pub use current::CurrentAccount;
pub use deposit::DepositAccount;
pub use error::Error;
pub use identity::{AccountHolder, AccountNumber, FieldValue};
pub use investment::InvestmentAccount;
pub use kind::{AccountType, RiskLevel};
pub use traits::{ApplicationStream, BankAccount, DeadLetterQueue, OutputRepository};
