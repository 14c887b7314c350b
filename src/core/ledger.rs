//! Bank registry
//!
//! The [`Ledger`] owns the customer set and is the only mutation entry
//! point for registering customers, opening accounts, and routing
//! withdrawals. It enforces the two global uniqueness invariants: no two
//! customers share an identity code, and no two accounts anywhere in the
//! registry share a number.
//!
//! Rejections (duplicates, unknown targets, refused withdrawals) are
//! expected outcomes and surface as `bool` / `Option`, never as errors.

use crate::core::customer::Customer;
use crate::types::{Account, WithdrawalReceipt};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Root registry of customers
///
/// Customers keep their registration order; any sorted display is a
/// presentation-layer concern.
#[derive(Debug)]
pub struct Ledger {
    id: String,
    customers: Vec<Customer>,
}

impl Ledger {
    /// Create an empty registry with a fresh id
    pub fn new() -> Self {
        Ledger {
            id: Uuid::new_v4().to_string(),
            customers: Vec::new(),
        }
    }

    /// Opaque registry id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// All customers in registration order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Register a customer
    ///
    /// Returns `false` without modifying the registry if a customer with
    /// the same identity code is already registered.
    pub fn add_customer(&mut self, customer: Customer) -> bool {
        if self.find_customer(customer.identity().as_str()).is_some() {
            return false;
        }
        self.customers.push(customer);
        true
    }

    /// Look up a customer by identity code
    pub fn find_customer(&self, identity: &str) -> Option<&Customer> {
        self.customers
            .iter()
            .find(|c| c.identity().as_str() == identity)
    }

    fn find_customer_mut(&mut self, identity: &str) -> Option<&mut Customer> {
        self.customers
            .iter_mut()
            .find(|c| c.identity().as_str() == identity)
    }

    /// Customers whose name contains `name`, case-insensitively
    ///
    /// Results keep registration order.
    pub fn search_customers_by_name(&self, name: &str) -> Vec<&Customer> {
        let needle = name.to_lowercase();
        self.customers
            .iter()
            .filter(|c| c.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Whether any customer's any account uses this number
    pub fn is_account_number_taken(&self, number: &str) -> bool {
        self.customers
            .iter()
            .any(|c| c.find_account(number).is_some())
    }

    /// Open an account for a registered customer
    ///
    /// Returns `false` if the customer is unknown or the account number is
    /// already in use anywhere in the registry. This is the global layer
    /// over [`Customer::add_account`]'s per-customer check.
    pub fn open_account(&mut self, identity: &str, account: Account) -> bool {
        if self.is_account_number_taken(account.number()) {
            return false;
        }
        match self.find_customer_mut(identity) {
            Some(customer) => customer.add_account(account),
            None => false,
        }
    }

    /// Route a withdrawal request to the owning account
    ///
    /// Resolves the customer by identity code, the account by number
    /// within that customer, and delegates if the account has a withdrawal
    /// facility. `None` means unknown customer, unknown account, no
    /// facility, or a policy rejection; the receipt signals acceptance.
    pub fn withdraw(
        &mut self,
        identity: &str,
        account_number: &str,
        amount: Decimal,
    ) -> Option<WithdrawalReceipt> {
        let customer = self.find_customer_mut(identity)?;
        let account = customer.find_account_mut(account_number)?;
        if !account.supports_withdrawal() {
            return None;
        }
        account.withdraw(amount)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IdentityCode;

    fn customer(name: &str, identity: &str) -> Customer {
        Customer::new(name, IdentityCode::parse(identity).unwrap())
    }

    fn savings(number: &str, balance: i64) -> Account {
        Account::savings(number, Decimal::from(balance)).unwrap()
    }

    #[test]
    fn test_new_registry_is_empty_with_id() {
        let ledger = Ledger::new();
        assert!(ledger.customers().is_empty());
        assert!(!ledger.id().is_empty());
    }

    #[test]
    fn test_add_customer_rejects_duplicate_identity() {
        let mut ledger = Ledger::new();
        assert!(ledger.add_customer(customer("Alice Nguyen", "001203000001")));
        assert!(!ledger.add_customer(customer("Alice Clone", "001203000001")));
        assert_eq!(ledger.customers().len(), 1);
        assert_eq!(
            ledger.find_customer("001203000001").unwrap().name(),
            "Alice Nguyen"
        );
    }

    #[test]
    fn test_find_customer_unknown_identity() {
        let ledger = Ledger::new();
        assert!(ledger.find_customer("001203000001").is_none());
    }

    #[test]
    fn test_search_by_name_is_case_insensitive_in_registration_order() {
        let mut ledger = Ledger::new();
        ledger.add_customer(customer("Binh Tran", "079186000002"));
        ledger.add_customer(customer("Alice Nguyen", "001203000001"));
        ledger.add_customer(customer("An Nguyen", "048094000003"));

        let hits = ledger.search_customers_by_name("nguyen");
        let names: Vec<&str> = hits.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Alice Nguyen", "An Nguyen"]);

        assert!(ledger.search_customers_by_name("xyz").is_empty());
    }

    #[test]
    fn test_account_number_uniqueness_is_global() {
        let mut ledger = Ledger::new();
        ledger.add_customer(customer("Alice Nguyen", "001203000001"));
        ledger.add_customer(customer("Binh Tran", "079186000002"));

        assert!(ledger.open_account("001203000001", savings("600001", 100_000)));
        assert!(ledger.is_account_number_taken("600001"));

        // Same number for a different customer is refused.
        assert!(!ledger.open_account("079186000002", savings("600001", 999_999)));
        assert!(ledger
            .find_customer("079186000002")
            .unwrap()
            .accounts()
            .is_empty());
    }

    #[test]
    fn test_open_account_for_unknown_customer() {
        let mut ledger = Ledger::new();
        assert!(!ledger.open_account("001203000001", savings("600001", 100_000)));
        assert!(!ledger.is_account_number_taken("600001"));
    }

    #[test]
    fn test_withdraw_routes_to_owning_account() {
        let mut ledger = Ledger::new();
        ledger.add_customer(customer("Alice Nguyen", "001203000001"));
        ledger.open_account("001203000001", savings("600001", 100_000));

        let receipt = ledger.withdraw("001203000001", "600001", Decimal::from(50_000));
        assert!(receipt.is_some());

        let account = ledger
            .find_customer("001203000001")
            .unwrap()
            .find_account("600001")
            .unwrap();
        assert_eq!(account.amount(), Decimal::from(50_000));
        assert_eq!(account.transactions().len(), 1);
    }

    #[test]
    fn test_withdraw_unknown_customer_or_account() {
        let mut ledger = Ledger::new();
        ledger.add_customer(customer("Alice Nguyen", "001203000001"));
        ledger.open_account("001203000001", savings("600001", 100_000));

        assert!(ledger
            .withdraw("079186000002", "600001", Decimal::from(50_000))
            .is_none());
        assert!(ledger
            .withdraw("001203000001", "999999", Decimal::from(50_000))
            .is_none());

        // No transaction is recorded when routing fails before an account
        // is reached.
        let account = ledger
            .find_customer("001203000001")
            .unwrap()
            .find_account("600001")
            .unwrap();
        assert!(account.transactions().is_empty());
    }

    #[test]
    fn test_withdraw_gated_on_capability() {
        let mut ledger = Ledger::new();
        ledger.add_customer(customer("Alice Nguyen", "001203000001"));
        ledger.open_account(
            "001203000001",
            Account::basic("600003", Decimal::from(1_000_000)).unwrap(),
        );

        assert!(ledger
            .withdraw("001203000001", "600003", Decimal::from(50_000))
            .is_none());

        // The capability gate refuses before the account logs anything.
        let account = ledger
            .find_customer("001203000001")
            .unwrap()
            .find_account("600003")
            .unwrap();
        assert!(account.transactions().is_empty());
        assert_eq!(account.amount(), Decimal::from(1_000_000));
    }

    #[test]
    fn test_withdraw_policy_rejection_passes_through() {
        let mut ledger = Ledger::new();
        ledger.add_customer(customer("Alice Nguyen", "001203000001"));
        ledger.open_account("001203000001", savings("600001", 100_000));

        assert!(ledger
            .withdraw("001203000001", "600001", Decimal::from(55_000))
            .is_none());

        let account = ledger
            .find_customer("001203000001")
            .unwrap()
            .find_account("600001")
            .unwrap();
        assert_eq!(account.amount(), Decimal::from(100_000));
        assert_eq!(account.transactions().len(), 1);
        assert!(!account.transactions()[0].is_accepted());
    }
}
