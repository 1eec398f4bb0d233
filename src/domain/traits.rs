use std::fmt;
use std::time::Instant;

use futures::Stream;
use rust_decimal::Decimal;

use crate::domain::{Account, AccountApplication, AnyAccount, Error};

/// Operations shared by every kind of account.
///
/// The provided `deposit` and `withdraw` only check that the amount is
/// positive; the balance itself has no floor. Kinds with an overdraft
/// override `withdraw`.
pub trait BankAccount: fmt::Display {
    fn core(&self) -> &Account;

    fn core_mut(&mut self) -> &mut Account;

    /// Constructor-shaped rendering echoing the exact field values.
    fn technical(&self) -> String;

    fn balance(&self) -> Decimal {
        self.core().balance()
    }

    fn deposit(&mut self, amount: Decimal) -> Result<(), Error> {
        let started = Instant::now();
        if amount <= Decimal::ZERO {
            return Err(Error::amount(&*self, "Cannot deposit negative amounts"));
        }

        if self.core_mut().credit(amount).is_none() {
            return Err(Error::overflow(&*self, "Deposit would overflow the balance"));
        }
        tracing::debug!(
            account = %self.core().account_number(),
            %amount,
            balance = %self.balance(),
            elapsed = ?started.elapsed(),
            "deposit applied"
        );
        Ok(())
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), Error> {
        debit_positive(self, amount)
    }

    /// Replaces the balance. Only positive values are accepted.
    fn set_balance(&mut self, value: Decimal) -> Result<(), Error> {
        if value <= Decimal::ZERO {
            return Err(Error::amount(&*self, "Balance must be a positive amount"));
        }
        self.core_mut().replace_balance(value);
        Ok(())
    }
}

/// Withdrawal without a balance floor; `amount` must be positive.
pub(crate) fn debit_positive<A: BankAccount + ?Sized>(
    account: &mut A,
    amount: Decimal,
) -> Result<(), Error> {
    let started = Instant::now();
    if amount <= Decimal::ZERO {
        return Err(Error::amount(&*account, "Cannot withdraw negative amounts"));
    }

    if account.core_mut().debit(amount).is_none() {
        return Err(Error::overflow(&*account, "Withdrawal would overflow the balance"));
    }
    tracing::debug!(
        account = %account.core().account_number(),
        %amount,
        balance = %account.balance(),
        elapsed = ?started.elapsed(),
        "withdrawal applied"
    );
    Ok(())
}

pub trait ApplicationStream {
    type AppStream: Stream<Item = Result<AccountApplication, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::AppStream;
}

pub trait DeadLetterQueue {
    /// `application` is `None` when the row could not be read at all.
    fn report(&self, error: &Error, application: Option<&AccountApplication>);
}

pub trait OutputRepository {
    fn record(&mut self, account: AnyAccount);

    fn accounts(&self) -> &[AnyAccount];

    fn flush(&mut self, instances_created: u64);
}
