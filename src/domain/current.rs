use std::fmt;

use rust_decimal::Decimal;

use crate::domain::traits::debit_positive;
use crate::domain::{Account, AccountType, BankAccount, Error, FieldValue, InstanceCounter};

/// Current account with an overdraft floor.
///
/// `overdraft_limit` is the lowest balance a withdrawal may leave behind. It
/// is not validated; a positive limit simply requires a surplus.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentAccount {
    account: Account,
    overdraft_limit: Decimal,
}

impl CurrentAccount {
    pub fn new(
        account_number: impl Into<FieldValue>,
        account_holder: &str,
        opening_balance: Decimal,
        overdraft_limit: Decimal,
    ) -> Result<Self, Error> {
        Self::open(
            InstanceCounter::global(),
            account_number,
            account_holder,
            opening_balance,
            overdraft_limit,
        )
    }

    pub fn open(
        counter: &InstanceCounter,
        account_number: impl Into<FieldValue>,
        account_holder: &str,
        opening_balance: Decimal,
        overdraft_limit: Decimal,
    ) -> Result<Self, Error> {
        let account = Account::validate(account_number.into(), account_holder, opening_balance)?
            .with_type(AccountType::Current);

        counter.increment();
        let account = Self {
            account,
            overdraft_limit,
        };
        tracing::debug!(account = %account, "account opened");
        Ok(account)
    }

    pub fn overdraft_limit(&self) -> Decimal {
        self.overdraft_limit
    }
}

impl BankAccount for CurrentAccount {
    fn core(&self) -> &Account {
        &self.account
    }

    fn core_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    fn technical(&self) -> String {
        format!(
            "CurrentAccount('{}', '{}', {}, {})",
            self.account.account_number(),
            self.account.account_holder(),
            self.account.balance(),
            self.overdraft_limit
        )
    }

    // The floor is checked before the amount's sign. A difference that does
    // not fit in a Decimal is left to the sign and range checks.
    fn withdraw(&mut self, amount: Decimal) -> Result<(), Error> {
        let remaining = self.account.balance().checked_sub(amount);
        if remaining.is_some_and(|rest| rest < self.overdraft_limit) {
            tracing::debug!(
                account = %self.account.account_number(),
                %amount,
                overdraft_limit = %self.overdraft_limit,
                "withdrawal refused"
            );
            return Err(Error::balance(&*self, "Cannot exceed your overdraft limit!"));
        }
        debit_positive(self, amount)
    }
}

impl fmt::Display for CurrentAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CurrentAccount[{}] - {}, account = {}, overdraft limit = {}",
            self.account.account_number(),
            self.account.account_holder(),
            self.account.balance(),
            self.overdraft_limit
        )
    }
}
