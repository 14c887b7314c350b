//! Customer aggregate
//!
//! A customer owns an ordered collection of accounts and exposes the
//! aggregate queries the registry and the report layer need: total
//! balance, premium status, and account lookup by number.

use crate::types::{Account, IdentityCode};
use rust_decimal::Decimal;

/// A registered bank customer
///
/// The identity code is validated at parse time, so a `Customer` can only
/// carry a well-formed identity. Accounts keep their insertion order.
#[derive(Debug, Clone)]
pub struct Customer {
    name: String,
    identity: IdentityCode,
    accounts: Vec<Account>,
}

impl Customer {
    /// Create a customer with no accounts
    pub fn new(name: impl Into<String>, identity: IdentityCode) -> Self {
        Customer {
            name: name.into(),
            identity,
            accounts: Vec::new(),
        }
    }

    /// Customer display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Validated identity code
    pub fn identity(&self) -> &IdentityCode {
        &self.identity
    }

    /// Owned accounts in insertion order
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Attach an account to this customer
    ///
    /// Returns `false` if an account with the same number already belongs
    /// to this customer; the ledger layers a global uniqueness check on
    /// top of this one.
    pub fn add_account(&mut self, account: Account) -> bool {
        if self.find_account(account.number()).is_some() {
            return false;
        }
        self.accounts.push(account);
        true
    }

    /// Sum of all owned accounts' stored amounts
    ///
    /// Loan accounts contribute their drawn amount, so the total mixes
    /// funds and debt into one figure.
    pub fn total_balance(&self) -> Decimal {
        self.accounts.iter().map(|a| a.amount()).sum()
    }

    /// Whether any owned account is premium
    pub fn is_premium(&self) -> bool {
        self.accounts.iter().any(|a| a.is_premium())
    }

    /// Tier label used in reports
    pub fn tier(&self) -> &'static str {
        if self.is_premium() {
            "PREMIUM"
        } else {
            "NORMAL"
        }
    }

    /// First account with the given number, if any
    pub fn find_account(&self, number: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number() == number)
    }

    /// Mutable lookup used by the withdrawal path
    pub fn find_account_mut(&mut self, number: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.number() == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Account;

    fn customer() -> Customer {
        Customer::new(
            "Alice Nguyen",
            IdentityCode::parse("001203000001").unwrap(),
        )
    }

    fn savings(number: &str, balance: i64) -> Account {
        Account::savings(number, Decimal::from(balance)).unwrap()
    }

    #[test]
    fn test_new_round_trip() {
        let customer = customer();
        assert_eq!(customer.name(), "Alice Nguyen");
        assert_eq!(customer.identity().as_str(), "001203000001");
        assert!(customer.accounts().is_empty());
        assert_eq!(customer.total_balance(), Decimal::ZERO);
        assert!(!customer.is_premium());
    }

    #[test]
    fn test_add_account_rejects_duplicate_number() {
        let mut customer = customer();
        assert!(customer.add_account(savings("600001", 100_000)));
        assert!(!customer.add_account(savings("600001", 999_999)));
        assert_eq!(customer.accounts().len(), 1);
        // The original account is untouched by the refused add.
        assert_eq!(
            customer.find_account("600001").unwrap().amount(),
            Decimal::from(100_000)
        );
    }

    #[test]
    fn test_total_balance_sums_all_kinds() {
        let mut customer = customer();
        customer.add_account(savings("600001", 2_000_000));
        customer.add_account(Account::loan("600002", Decimal::from(3_000_000)).unwrap());
        customer.add_account(Account::basic("600003", Decimal::from(500_000)).unwrap());

        // Loan drawn amounts are summed alongside deposits.
        assert_eq!(customer.total_balance(), Decimal::from(5_500_000));
    }

    #[test]
    fn test_premium_propagates_from_any_account() {
        let mut customer = customer();
        customer.add_account(savings("600001", 1_000));
        assert!(!customer.is_premium());
        assert_eq!(customer.tier(), "NORMAL");

        customer.add_account(savings("600002", 10_000_000));
        assert!(customer.is_premium());
        assert_eq!(customer.tier(), "PREMIUM");
    }

    #[test]
    fn test_find_account() {
        let mut customer = customer();
        customer.add_account(savings("600001", 100_000));

        assert!(customer.find_account("600001").is_some());
        assert!(customer.find_account("999999").is_none());
        assert!(customer.find_account_mut("600001").is_some());
    }
}
