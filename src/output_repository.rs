use crate::domain::{AnyAccount, OutputRepository};

/// Keeps opened accounts in input order and prints their summaries on flush.
#[derive(Default, Debug)]
pub struct StdOutOutput {
    accounts: Vec<AnyAccount>,
}

impl StdOutOutput {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }
}

impl OutputRepository for StdOutOutput {
    fn record(&mut self, account: AnyAccount) {
        self.accounts.push(account);
    }

    fn accounts(&self) -> &[AnyAccount] {
        &self.accounts
    }

    fn flush(&mut self, instances_created: u64) {
        for account in &self.accounts {
            println!("{}", account);
        }
        println!("Number of Account instances created: {}", instances_created);
    }
}
