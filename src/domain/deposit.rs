use std::fmt;

use rust_decimal::Decimal;

use crate::domain::{Account, AccountType, BankAccount, Error, FieldValue, InstanceCounter};

/// Interest-bearing account. The rate is an unbounded multiplier.
#[derive(Debug, Clone, PartialEq)]
pub struct DepositAccount {
    account: Account,
    interest_rate: Decimal,
}

impl DepositAccount {
    pub fn new(
        account_number: impl Into<FieldValue>,
        account_holder: &str,
        opening_balance: Decimal,
        interest_rate: Decimal,
    ) -> Result<Self, Error> {
        Self::open(
            InstanceCounter::global(),
            account_number,
            account_holder,
            opening_balance,
            interest_rate,
        )
    }

    pub fn open(
        counter: &InstanceCounter,
        account_number: impl Into<FieldValue>,
        account_holder: &str,
        opening_balance: Decimal,
        interest_rate: Decimal,
    ) -> Result<Self, Error> {
        let account = Account::validate(account_number.into(), account_holder, opening_balance)?
            .with_type(AccountType::Deposit);

        counter.increment();
        let account = Self {
            account,
            interest_rate,
        };
        tracing::debug!(account = %account, "account opened");
        Ok(account)
    }

    pub fn interest_rate(&self) -> Decimal {
        self.interest_rate
    }

    /// `balance * interest_rate`, computed on demand. `None` when the product
    /// does not fit in a Decimal.
    pub fn interest(&self) -> Option<Decimal> {
        self.account.balance().checked_mul(self.interest_rate)
    }
}

impl BankAccount for DepositAccount {
    fn core(&self) -> &Account {
        &self.account
    }

    fn core_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    fn technical(&self) -> String {
        format!(
            "DepositAccount('{}', '{}', {}, {})",
            self.account.account_number(),
            self.account.account_holder(),
            self.account.balance(),
            self.interest_rate
        )
    }
}

impl fmt::Display for DepositAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DepositAccount[{}] - {}, account = {}, interest rate = {}",
            self.account.account_number(),
            self.account.account_holder(),
            self.account.balance(),
            self.interest_rate
        )
    }
}
