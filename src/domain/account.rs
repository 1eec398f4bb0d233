use std::fmt;

use rust_decimal::Decimal;

use crate::domain::{
    AccountHolder, AccountNumber, AccountType, BankAccount, Error, FieldValue, InstanceCounter,
};

/// A bank account: immutable identity plus a mutable balance.
///
/// Every specialised account wraps one of these.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    account_number: AccountNumber,
    account_holder: AccountHolder,
    balance: Decimal,
    account_type: AccountType,
}

impl Account {
    /// Opens an account counted against [`InstanceCounter::global`].
    pub fn new(
        account_number: impl Into<FieldValue>,
        account_holder: &str,
        opening_balance: Decimal,
        account_type: &str,
    ) -> Result<Self, Error> {
        Self::open(
            InstanceCounter::global(),
            account_number,
            account_holder,
            opening_balance,
            account_type,
        )
    }

    pub fn open(
        counter: &InstanceCounter,
        account_number: impl Into<FieldValue>,
        account_holder: &str,
        opening_balance: Decimal,
        account_type: &str,
    ) -> Result<Self, Error> {
        let account = Self::validate(account_number.into(), account_holder, opening_balance)?
            .with_type(account_type.parse()?);

        counter.increment();
        tracing::debug!(account = %account, "account opened");
        Ok(account)
    }

    /// Checks the shared fields in order. Does not touch any counter; the
    /// type is provisional until the caller sets it.
    pub(crate) fn validate(
        account_number: FieldValue,
        account_holder: &str,
        opening_balance: Decimal,
    ) -> Result<Self, Error> {
        let account_number = AccountNumber::parse(&account_number)?;
        let account_holder = AccountHolder::parse(account_holder)?;

        if opening_balance < Decimal::ZERO {
            return Err(Error::invalid("Opening balance must be positive!"));
        }

        Ok(Self {
            account_number,
            account_holder,
            balance: opening_balance,
            account_type: AccountType::Savings,
        })
    }

    pub(crate) fn with_type(mut self, account_type: AccountType) -> Self {
        self.account_type = account_type;
        self
    }

    pub fn account_number(&self) -> &AccountNumber {
        &self.account_number
    }

    pub fn account_holder(&self) -> &AccountHolder {
        &self.account_holder
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Returns `None`, leaving the balance untouched, on overflow.
    pub(crate) fn credit(&mut self, amount: Decimal) -> Option<Decimal> {
        self.balance = self.balance.checked_add(amount)?;
        Some(self.balance)
    }

    pub(crate) fn debit(&mut self, amount: Decimal) -> Option<Decimal> {
        self.balance = self.balance.checked_sub(amount)?;
        Some(self.balance)
    }

    pub(crate) fn replace_balance(&mut self, value: Decimal) {
        self.balance = value;
    }
}

impl BankAccount for Account {
    fn core(&self) -> &Account {
        self
    }

    fn core_mut(&mut self) -> &mut Account {
        self
    }

    fn technical(&self) -> String {
        format!(
            "Account('{}', '{}', {}, '{}')",
            self.account_number, self.account_holder, self.balance, self.account_type
        )
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Account[{}] - {}, {} account = {}",
            self.account_number, self.account_holder, self.account_type, self.balance
        )
    }
}
