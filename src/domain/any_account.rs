use std::fmt;

use rust_decimal::Decimal;

use crate::domain::{
    Account, BankAccount, CurrentAccount, DepositAccount, Error, InvestmentAccount,
};

/// Any kind of account, for code that handles them uniformly.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyAccount {
    Basic(Account),
    Current(CurrentAccount),
    Deposit(DepositAccount),
    Investment(InvestmentAccount),
}

impl BankAccount for AnyAccount {
    fn core(&self) -> &Account {
        match self {
            AnyAccount::Basic(a) => a.core(),
            AnyAccount::Current(a) => a.core(),
            AnyAccount::Deposit(a) => a.core(),
            AnyAccount::Investment(a) => a.core(),
        }
    }

    fn core_mut(&mut self) -> &mut Account {
        match self {
            AnyAccount::Basic(a) => a.core_mut(),
            AnyAccount::Current(a) => a.core_mut(),
            AnyAccount::Deposit(a) => a.core_mut(),
            AnyAccount::Investment(a) => a.core_mut(),
        }
    }

    fn technical(&self) -> String {
        match self {
            AnyAccount::Basic(a) => a.technical(),
            AnyAccount::Current(a) => a.technical(),
            AnyAccount::Deposit(a) => a.technical(),
            AnyAccount::Investment(a) => a.technical(),
        }
    }

    fn deposit(&mut self, amount: Decimal) -> Result<(), Error> {
        match self {
            AnyAccount::Basic(a) => a.deposit(amount),
            AnyAccount::Current(a) => a.deposit(amount),
            AnyAccount::Deposit(a) => a.deposit(amount),
            AnyAccount::Investment(a) => a.deposit(amount),
        }
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), Error> {
        match self {
            AnyAccount::Basic(a) => a.withdraw(amount),
            AnyAccount::Current(a) => a.withdraw(amount),
            AnyAccount::Deposit(a) => a.withdraw(amount),
            AnyAccount::Investment(a) => a.withdraw(amount),
        }
    }

    fn set_balance(&mut self, value: Decimal) -> Result<(), Error> {
        match self {
            AnyAccount::Basic(a) => a.set_balance(value),
            AnyAccount::Current(a) => a.set_balance(value),
            AnyAccount::Deposit(a) => a.set_balance(value),
            AnyAccount::Investment(a) => a.set_balance(value),
        }
    }
}

impl fmt::Display for AnyAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyAccount::Basic(a) => fmt::Display::fmt(a, f),
            AnyAccount::Current(a) => fmt::Display::fmt(a, f),
            AnyAccount::Deposit(a) => fmt::Display::fmt(a, f),
            AnyAccount::Investment(a) => fmt::Display::fmt(a, f),
        }
    }
}

impl From<Account> for AnyAccount {
    fn from(account: Account) -> Self {
        AnyAccount::Basic(account)
    }
}

impl From<CurrentAccount> for AnyAccount {
    fn from(account: CurrentAccount) -> Self {
        AnyAccount::Current(account)
    }
}

impl From<DepositAccount> for AnyAccount {
    fn from(account: DepositAccount) -> Self {
        AnyAccount::Deposit(account)
    }
}

impl From<InvestmentAccount> for AnyAccount {
    fn from(account: InvestmentAccount) -> Self {
        AnyAccount::Investment(account)
    }
}
