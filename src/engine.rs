use crate::domain::{
    AccountApplication, Error, InstanceCounter,
    traits::{ApplicationStream, DeadLetterQueue, OutputRepository},
};

use futures::StreamExt;

/// Opens every application from `ingestion`, sending accounts to the output
/// repository and every failure to the dead letter queue.
#[derive(Debug)]
pub struct Engine<I, O, D>
where
    I: ApplicationStream,
    O: OutputRepository,
    D: DeadLetterQueue,
{
    ingestion: I,
    output_repository: O,
    dlq: D,
    counter: InstanceCounter,
}

impl<I, O, D> Engine<I, O, D>
where
    I: ApplicationStream,
    O: OutputRepository,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, output_repository: O, dlq: D) -> Self {
        Self {
            ingestion,
            output_repository,
            dlq,
            counter: InstanceCounter::new(),
        }
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        let mut res = self.ingestion.stream();

        while let Some(application) = res.next().await {
            match application {
                Ok(application) => {
                    if let Err(e) = self.open_account(&application) {
                        self.dlq.report(&e, Some(&application));
                    }
                }
                Err(e) => self.dlq.report(&e, None),
            }
        }

        tracing::info!(
            opened = self.output_repository.accounts().len(),
            instances = self.counter.get(),
            "intake finished"
        );
        Ok(())
    }

    fn open_account(&mut self, application: &AccountApplication) -> Result<(), Error> {
        tracing::debug!(%application, "opening account");
        let account = application.open(&self.counter)?;
        self.output_repository.record(account);
        Ok(())
    }

    pub fn instances_created(&self) -> u64 {
        self.counter.get()
    }

    pub fn output(&self) -> &O {
        &self.output_repository
    }

    pub fn flush(&mut self) {
        self.output_repository.flush(self.counter.get());
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{AnyAccount, BankAccount};
    use crate::ingestion::CsvReader;
    use crate::output_repository::StdOutOutput;

    #[derive(Default)]
    struct CollectingDLQ {
        errors: RefCell<Vec<String>>,
        holders: RefCell<Vec<Option<String>>>,
    }

    impl DeadLetterQueue for CollectingDLQ {
        fn report(&self, error: &Error, application: Option<&AccountApplication>) {
            self.errors.borrow_mut().push(error.to_string());
            self.holders
                .borrow_mut()
                .push(application.map(|a| a.account_holder.clone()));
        }
    }

    #[tokio::test]
    async fn opens_valid_applications_and_reports_the_rest() {
        let data = "kind, number, holder, balance, extra\n\
                    account, 567891, jane dole, 104, savings\n\
                    account, 567891, jane dole, 104, practice\n\
                    current, 123123, John smith, 10.05, -100.0\n\
                    deposit, 345123, John saul, 23.55, 0.5\n\
                    investment, 767891, jonathan dole, 94, super high\n\
                    investment, 567123, Phoebe jones, 12.45, high\n\
                    account, 12345, jane dole, 1, savings\n\
                    bogus, 111111, jane dole, 1, savings\n";

        let mut engine = Engine::new(
            CsvReader::new(data.as_bytes()),
            StdOutOutput::new(),
            CollectingDLQ::default(),
        );
        engine.process().await.unwrap();

        assert_eq!(engine.instances_created(), 4);

        let accounts = engine.output().accounts();
        assert_eq!(accounts.len(), 4);
        assert!(matches!(accounts[1], AnyAccount::Current(_)));
        assert_eq!(accounts[1].balance(), Decimal::new(1005, 2));

        let errors = engine.dlq.errors.borrow();
        assert_eq!(errors.len(), 4);
        assert!(errors[0].contains("Invalid account type"));
        assert!(errors[1].contains("Invalid risk type"));
        assert!(errors[2].contains("length 6"));
        assert!(errors[3].contains("Invalid account kind"));

        let holders = engine.dlq.holders.borrow();
        assert_eq!(holders[1].as_deref(), Some("jonathan dole"));
        assert_eq!(holders[3], None);
    }
}
