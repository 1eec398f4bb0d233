use std::fmt;

use rust_decimal::Decimal;

use crate::domain::{
    Account, AccountType, BankAccount, Error, FieldValue, InstanceCounter, RiskLevel,
};

#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentAccount {
    account: Account,
    risk_level: RiskLevel,
}

impl InvestmentAccount {
    pub fn new(
        account_number: impl Into<FieldValue>,
        account_holder: &str,
        opening_balance: Decimal,
        risk_level: &str,
    ) -> Result<Self, Error> {
        Self::open(
            InstanceCounter::global(),
            account_number,
            account_holder,
            opening_balance,
            risk_level,
        )
    }

    /// The risk level is checked after the shared fields and before the
    /// counter moves.
    pub fn open(
        counter: &InstanceCounter,
        account_number: impl Into<FieldValue>,
        account_holder: &str,
        opening_balance: Decimal,
        risk_level: &str,
    ) -> Result<Self, Error> {
        let account = Account::validate(account_number.into(), account_holder, opening_balance)?
            .with_type(AccountType::Investment);
        let risk_level = risk_level.parse()?;

        counter.increment();
        let account = Self {
            account,
            risk_level,
        };
        tracing::debug!(account = %account, "account opened");
        Ok(account)
    }

    pub fn risk_level(&self) -> RiskLevel {
        self.risk_level
    }
}

impl BankAccount for InvestmentAccount {
    fn core(&self) -> &Account {
        &self.account
    }

    fn core_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    fn technical(&self) -> String {
        format!(
            "InvestmentAccount('{}', '{}', {}, {})",
            self.account.account_number(),
            self.account.account_holder(),
            self.account.balance(),
            self.risk_level
        )
    }
}

impl fmt::Display for InvestmentAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InvestmentAccount[{}] - {}, account = {}, risk level = {}",
            self.account.account_number(),
            self.account.account_holder(),
            self.account.balance(),
            self.risk_level
        )
    }
}
