use std::io::{BufRead, Read};
use std::pin::Pin;
use std::str::FromStr;

use futures::stream::{self, Stream};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::traits::ApplicationStream;
use crate::domain::{AccountApplication, ApplicationKind, Error, FieldValue};

type AppStream = Pin<Box<dyn Stream<Item = Result<AccountApplication, Error>> + Send>>;

fn empty_stream() -> AppStream {
    Box::pin(stream::iter(Vec::<Result<AccountApplication, Error>>::new()))
}

/// Reads applications from CSV with the header `kind, number, holder, balance, extra`.
///
/// Fields are trimmed, short rows are allowed (the `extra` column may be
/// omitted) and lines starting with `#` are skipped.
pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .comment(Some(b'#'))
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            reader: Some(reader),
        }
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    kind: String,
    number: String,
    holder: String,
    balance: String,
    #[serde(default)]
    extra: Option<String>,
}

impl TryFrom<CsvRow> for AccountApplication {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        build_application(
            &row.kind,
            FieldValue::Text(row.number),
            row.holder,
            &row.balance,
            row.extra,
        )
    }
}

impl<R: Read + Send + 'static> ApplicationStream for CsvReader<R> {
    type AppStream = AppStream;

    fn stream(&mut self) -> Self::AppStream {
        let Some(reader) = self.reader.take() else {
            return empty_stream();
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => AccountApplication::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}

/// Reads one JSON object per line. Blank lines are skipped.
///
/// The account number keeps its JSON type, so `"567891"` and `567891` are
/// told apart when the account is opened.
pub struct JsonLinesReader<R: BufRead> {
    reader: Option<R>,
}

impl<R: BufRead> JsonLinesReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: Some(reader),
        }
    }
}

/// Internal shape used only for JSON deserialization.
#[derive(Debug, Deserialize)]
struct JsonRow {
    kind: String,
    account_number: serde_json::Value,
    account_holder: String,
    opening_balance: serde_json::Value,
    #[serde(default)]
    extra: Option<serde_json::Value>,
}

impl TryFrom<JsonRow> for AccountApplication {
    type Error = Error;

    fn try_from(row: JsonRow) -> Result<Self, Self::Error> {
        build_application(
            &row.kind,
            FieldValue::from(row.account_number),
            row.account_holder,
            &json_text(row.opening_balance),
            row.extra.map(json_text),
        )
    }
}

impl<R: BufRead + Send + 'static> ApplicationStream for JsonLinesReader<R> {
    type AppStream = AppStream;

    fn stream(&mut self) -> Self::AppStream {
        let Some(reader) = self.reader.take() else {
            return empty_stream();
        };

        let iter = reader
            .lines()
            .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
            .map(|line| -> Result<AccountApplication, Error> {
                let line = line?;
                let row: JsonRow = serde_json::from_str(&line).map_err(|e| {
                    Error::Ingestion(format!("JSON deserialization error: {}", e))
                })?;
                AccountApplication::try_from(row)
            });

        Box::pin(stream::iter(iter))
    }
}

fn json_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

fn parse_decimal(field: &str, value: &str) -> Result<Decimal, Error> {
    Decimal::from_str(value.trim())
        .map_err(|_| Error::Ingestion(format!("Invalid {} amount: {}", field, value)))
}

fn build_application(
    kind: &str,
    account_number: FieldValue,
    account_holder: String,
    balance: &str,
    extra: Option<String>,
) -> Result<AccountApplication, Error> {
    let extra = extra.unwrap_or_default();
    let kind = match kind.trim().to_ascii_lowercase().as_str() {
        "account" => ApplicationKind::Account {
            account_type: extra,
        },
        "current" => ApplicationKind::Current {
            overdraft_limit: parse_decimal("overdraft limit", &extra)?,
        },
        "deposit" => ApplicationKind::Deposit {
            interest_rate: parse_decimal("interest rate", &extra)?,
        },
        "investment" => ApplicationKind::Investment { risk_level: extra },
        other => {
            return Err(Error::Ingestion(format!(
                "Invalid account kind: {}",
                other
            )));
        }
    };

    Ok(AccountApplication {
        kind,
        account_number,
        account_holder,
        opening_balance: parse_decimal("opening balance", balance)?,
    })
}

#[cfg(test)]
mod tests {
    use futures::StreamExt;

    use super::*;

    async fn collect<S: ApplicationStream>(
        mut source: S,
    ) -> Vec<Result<AccountApplication, Error>> {
        source.stream().collect().await
    }

    #[tokio::test]
    async fn csv_rows_become_applications() {
        let data = "kind, number, holder, balance, extra\n\
                    account, 567891, jane dole, 104, savings\n\
                    current, 889123, juan smith, 100, -100\n\
                    deposit, 891234, jony smith, 109, 1.05\n\
                    investment, 912347, jonny jones, 115, high\n";
        let rows = collect(CsvReader::new(data.as_bytes())).await;

        assert_eq!(rows.len(), 4);
        let first = rows[0].as_ref().unwrap();
        assert_eq!(first.account_number, FieldValue::Text("567891".to_string()));
        assert_eq!(
            first.kind,
            ApplicationKind::Account {
                account_type: "savings".to_string()
            }
        );
        assert_eq!(
            rows[1].as_ref().unwrap().kind,
            ApplicationKind::Current {
                overdraft_limit: Decimal::from(-100)
            }
        );
        assert_eq!(
            rows[2].as_ref().unwrap().kind,
            ApplicationKind::Deposit {
                interest_rate: Decimal::new(105, 2)
            }
        );
    }

    #[tokio::test]
    async fn csv_comments_and_missing_extra_are_tolerated() {
        let data = "kind, number, holder, balance, extra\n\
                    # opened at the branch\n\
                    account, 567891, jane dole, 104\n";
        let rows = collect(CsvReader::new(data.as_bytes())).await;

        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].as_ref().unwrap().kind,
            ApplicationKind::Account {
                account_type: String::new()
            }
        );
    }

    #[tokio::test]
    async fn bad_csv_rows_are_reported_individually() {
        let data = "kind, number, holder, balance, extra\n\
                    bogus, 567891, jane dole, 104, savings\n\
                    current, 889123, juan smith, lots, -100\n\
                    account, 567892, John dole, 105, deposit\n";
        let rows = collect(CsvReader::new(data.as_bytes())).await;

        assert!(matches!(rows[0], Err(Error::Ingestion(_))));
        assert!(matches!(rows[1], Err(Error::Ingestion(_))));
        assert!(rows[2].is_ok());
    }

    #[tokio::test]
    async fn json_lines_keep_the_number_type() {
        let data = concat!(
            r#"{"kind":"account","account_number":"567891","#,
            r#""account_holder":"jane dole","opening_balance":104,"extra":"savings"}"#,
            "\n\n",
            r#"{"kind":"account","account_number":567891,"#,
            r#""account_holder":"jane dole","opening_balance":104,"extra":"savings"}"#,
            "\n",
            r#"{"kind":"deposit","account_number":"345123","#,
            r#""account_holder":"John saul","opening_balance":23.55,"extra":0.5}"#,
            "\n",
        );
        let rows = collect(JsonLinesReader::new(data.as_bytes())).await;

        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0].as_ref().unwrap().account_number,
            FieldValue::Text("567891".to_string())
        );
        assert_eq!(
            rows[1].as_ref().unwrap().account_number,
            FieldValue::Integer(567891)
        );
        let deposit = rows[2].as_ref().unwrap();
        assert_eq!(deposit.opening_balance, Decimal::new(2355, 2));
        assert_eq!(
            deposit.kind,
            ApplicationKind::Deposit {
                interest_rate: Decimal::new(5, 1)
            }
        );
    }

    #[tokio::test]
    async fn malformed_json_line_is_an_ingestion_error() {
        let rows = collect(JsonLinesReader::new("{not json}\n".as_bytes())).await;
        assert!(matches!(rows[0], Err(Error::Ingestion(_))));
    }

    #[tokio::test]
    async fn stream_is_single_use() {
        let mut reader = CsvReader::new("kind, number, holder, balance, extra\n".as_bytes());
        let _ = reader.stream();
        assert_eq!(reader.stream().count().await, 0);
    }
}
