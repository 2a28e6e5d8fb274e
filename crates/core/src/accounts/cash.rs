//! Cash-like account detection and cash-flow activity classification.
//!
//! Accounts carry no explicit "this is cash" flag, so detection is a
//! heuristic over the account type and name. False positives (a "Bank Loan"
//! liability) and false negatives (a till named "Drawer") are possible and
//! accepted.

use serde::{Deserialize, Serialize};

use ledgerly_shared::config::LedgerSettings;

/// Account types that are always cash-like (compared case-insensitively).
const DEFAULT_CASH_TYPES: &[&str] = &["cash", "bank"];

/// Name substrings that mark an account as cash-like (lower-case).
///
/// Includes the mobile-wallet brands the business operates with.
const DEFAULT_CASH_KEYWORDS: &[&str] = &[
    "cash", "bank", "checking", "savings", "bkash", "nagad", "rocket", "paypal", "mfs",
];

/// Rules deciding which accounts count as cash for the cash-flow statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CashAccountPolicy {
    account_types: Vec<String>,
    name_keywords: Vec<String>,
}

impl CashAccountPolicy {
    /// Creates a policy with the built-in types and keywords.
    #[must_use]
    pub fn new() -> Self {
        Self {
            account_types: DEFAULT_CASH_TYPES.iter().map(ToString::to_string).collect(),
            name_keywords: DEFAULT_CASH_KEYWORDS
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    /// Builds the policy from configuration, extending the built-in lists.
    #[must_use]
    pub fn from_settings(settings: &LedgerSettings) -> Self {
        Self::new()
            .with_keywords(&settings.extra_cash_keywords)
            .with_account_types(&settings.extra_cash_types)
    }

    /// Adds extra name keywords (e.g. from configuration).
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !self.name_keywords.contains(&keyword) {
                self.name_keywords.push(keyword);
            }
        }
        self
    }

    /// Adds extra account types (e.g. from configuration).
    #[must_use]
    pub fn with_account_types<I, S>(mut self, account_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for account_type in account_types {
            let account_type = account_type.as_ref().trim().to_lowercase();
            if !account_type.is_empty() && !self.account_types.contains(&account_type) {
                self.account_types.push(account_type);
            }
        }
        self
    }

    /// Returns true if the account looks like a cash or bank account.
    #[must_use]
    pub fn is_cash_like(&self, account_name: &str, account_type: &str) -> bool {
        let account_type = account_type.trim().to_lowercase();
        if self.account_types.contains(&account_type) {
            return true;
        }

        let name = account_name.to_lowercase();
        self.name_keywords
            .iter()
            .any(|keyword| name.contains(keyword.as_str()))
    }
}

impl Default for CashAccountPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// Cash-flow statement section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CashFlowActivity {
    /// Day-to-day trading.
    Operating,
    /// Purchase and sale of long-lived assets.
    Investing,
    /// Owner contributions, drawings, and borrowing.
    Financing,
}

impl CashFlowActivity {
    /// All activities in statement order.
    pub const ALL: [Self; 3] = [Self::Operating, Self::Investing, Self::Financing];

    /// Classifies a posting by its activity tag.
    ///
    /// Investing and Financing need an explicit tag starting with `invest` or
    /// `financ` (case-insensitive). Anything else, including no tag, is
    /// Operating.
    #[must_use]
    pub fn classify(tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return Self::Operating;
        };
        let tag = tag.trim().to_lowercase();
        if tag.starts_with("invest") {
            Self::Investing
        } else if tag.starts_with("financ") {
            Self::Financing
        } else {
            Self::Operating
        }
    }
}

impl std::fmt::Display for CashFlowActivity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Operating => "Operating",
            Self::Investing => "Investing",
            Self::Financing => "Financing",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Cash", "Current Asset", true)]
    #[case("Petty Cash", "Current Asset", true)]
    #[case("City Bank Account", "Current Asset", true)]
    #[case("Checking", "Current Asset", true)]
    #[case("bKash Wallet", "Current Asset", true)]
    #[case("Nagad", "Current Asset", true)]
    #[case("PayPal", "Current Asset", true)]
    #[case("Till", "cash", true)]
    #[case("Vault", "BANK", true)]
    #[case("Inventory", "Current Asset", false)]
    #[case("Sales", "Revenue", false)]
    #[case("Equipment", "Fixed Asset", false)]
    fn test_is_cash_like(#[case] name: &str, #[case] account_type: &str, #[case] expected: bool) {
        let policy = CashAccountPolicy::new();
        assert_eq!(policy.is_cash_like(name, account_type), expected);
    }

    #[test]
    fn test_heuristic_false_positive_is_accepted() {
        // A liability named after a bank matches by name.
        let policy = CashAccountPolicy::new();
        assert!(policy.is_cash_like("Bank Loan", "Long-term Liability: Bank Loan"));
    }

    #[test]
    fn test_extra_keywords_and_types() {
        let policy = CashAccountPolicy::new()
            .with_keywords(["Wise", " payoneer ", ""])
            .with_account_types(["Wallet"]);
        assert!(policy.is_cash_like("Wise USD", "Current Asset"));
        assert!(policy.is_cash_like("Payoneer", "Current Asset"));
        assert!(policy.is_cash_like("Drawer", "wallet"));
        assert!(!policy.is_cash_like("Drawer", "Current Asset"));
    }

    #[rstest]
    #[case(None, CashFlowActivity::Operating)]
    #[case(Some(""), CashFlowActivity::Operating)]
    #[case(Some("operating"), CashFlowActivity::Operating)]
    #[case(Some("Investing"), CashFlowActivity::Investing)]
    #[case(Some("investment"), CashFlowActivity::Investing)]
    #[case(Some("FINANCING"), CashFlowActivity::Financing)]
    #[case(Some("finance"), CashFlowActivity::Financing)]
    #[case(Some("debit"), CashFlowActivity::Operating)]
    #[case(Some("reinvest"), CashFlowActivity::Operating)]
    fn test_classify(#[case] tag: Option<&str>, #[case] expected: CashFlowActivity) {
        assert_eq!(CashFlowActivity::classify(tag), expected);
    }
}
