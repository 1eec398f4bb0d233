use rust_decimal::Decimal;

use crate::domain::{
    Account, AnyAccount, CurrentAccount, DepositAccount, Error, FieldValue, InstanceCounter,
    InvestmentAccount,
};

/// The field that differs per kind of account.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplicationKind {
    Account { account_type: String },
    Current { overdraft_limit: Decimal },
    Deposit { interest_rate: Decimal },
    Investment { risk_level: String },
}

/// A request to open one account, as read from an intake file.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountApplication {
    pub kind: ApplicationKind,
    pub account_number: FieldValue,
    pub account_holder: String,
    pub opening_balance: Decimal,
}

impl AccountApplication {
    pub fn open(&self, counter: &InstanceCounter) -> Result<AnyAccount, Error> {
        let number = self.account_number.clone();
        let holder = self.account_holder.as_str();
        let balance = self.opening_balance;

        let account: AnyAccount = match &self.kind {
            ApplicationKind::Account { account_type } => {
                Account::open(counter, number, holder, balance, account_type)?.into()
            }
            ApplicationKind::Current { overdraft_limit } => {
                CurrentAccount::open(counter, number, holder, balance, *overdraft_limit)?.into()
            }
            ApplicationKind::Deposit { interest_rate } => {
                DepositAccount::open(counter, number, holder, balance, *interest_rate)?.into()
            }
            ApplicationKind::Investment { risk_level } => {
                InvestmentAccount::open(counter, number, holder, balance, risk_level)?.into()
            }
        };
        Ok(account)
    }
}

impl core::fmt::Display for AccountApplication {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{:?},number={:?},holder={},balance={}",
            self.kind, self.account_number, self.account_holder, self.opening_balance
        )
    }
}
