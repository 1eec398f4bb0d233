use crate::domain::{AccountApplication, DeadLetterQueue, Error};

/// Reports rejected applications on stderr, one line each.
#[derive(Default, Debug)]
pub struct StdErrDLQ {}

impl StdErrDLQ {
    fn line(error: &Error, application: Option<&AccountApplication>) -> String {
        match application {
            Some(application) => format!("DLQ Report - Error: {} [{}]", error, application),
            None => format!("DLQ Report - Error: {}", error),
        }
    }
}

impl DeadLetterQueue for StdErrDLQ {
    fn report(&self, error: &Error, application: Option<&AccountApplication>) {
        tracing::warn!(
            %error,
            holder = application.map(|a| a.account_holder.as_str()),
            "application rejected"
        );
        eprintln!("{}", Self::line(error, application));
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{ApplicationKind, FieldValue};

    #[test]
    fn line_includes_the_application_when_known() {
        let application = AccountApplication {
            kind: ApplicationKind::Investment {
                risk_level: "super high".to_string(),
            },
            account_number: FieldValue::Text("767891".to_string()),
            account_holder: "jonathan dole".to_string(),
            opening_balance: Decimal::from(94),
        };
        let error = Error::Ingestion("bad row".to_string());

        let line = StdErrDLQ::line(&error, Some(&application));
        assert!(line.starts_with("DLQ Report - Error: Ingestion failed with: bad row ["));
        assert!(line.contains("holder=jonathan dole"));

        assert_eq!(
            StdErrDLQ::line(&error, None),
            "DLQ Report - Error: Ingestion failed with: bad row"
        );
    }
}
