use std::fmt;
use std::str::FromStr;

use crate::domain::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountType {
    Current,
    Savings,
    Deposit,
    Investment,
}

impl AccountType {
    pub const ALL: [AccountType; 4] = [
        AccountType::Current,
        AccountType::Savings,
        AccountType::Deposit,
        AccountType::Investment,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Current => "current",
            AccountType::Savings => "savings",
            AccountType::Deposit => "deposit",
            AccountType::Investment => "investment",
        }
    }
}

impl FromStr for AccountType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                Error::invalid(format!(
                    "Invalid account type. Account must be one of the following: {}",
                    quoted_tuple(AccountType::ALL.iter().map(AccountType::as_str))
                ))
            })
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Risk classification of an investment account. Stored only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl FromStr for RiskLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskLevel::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| {
                Error::invalid(format!(
                    "Invalid risk type. Account must be one of the following: {}",
                    quoted_tuple(RiskLevel::ALL.iter().map(RiskLevel::as_str))
                ))
            })
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ('a', 'b', 'c')
fn quoted_tuple<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let inner = names
        .map(|n| format!("'{n}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("({inner})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_types_in_declared_order() {
        let names: Vec<_> = AccountType::ALL.iter().map(AccountType::as_str).collect();
        assert_eq!(names, ["current", "savings", "deposit", "investment"]);
    }

    #[test]
    fn unknown_account_type_lists_valid_set() {
        let err = "practice".parse::<AccountType>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "ValueError: Invalid account type. Account must be one of the following: \
             ('current', 'savings', 'deposit', 'investment')"
        );
    }

    #[test]
    fn risk_levels_parse_exactly() {
        assert_eq!("medium".parse::<RiskLevel>().unwrap(), RiskLevel::Medium);
        assert!("High".parse::<RiskLevel>().is_err());

        let err = "super high".parse::<RiskLevel>().unwrap_err();
        assert!(err.to_string().ends_with("('low', 'medium', 'high')"));
    }
}
