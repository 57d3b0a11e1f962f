//! In-memory domain store.
//!
//! Three independent record kinds, each with its own monotonically
//! increasing id sequence starting at 1. Records live in append-only arenas
//! (insertion order preserved for listing) with hash indexes for O(1) id
//! lookup; accounts carry a secondary username index.
//!
//! Each kind sits behind its own `RwLock`, so operations on different kinds
//! never contend and id-assign + insert is atomic within a kind. Nothing
//! here suspends or performs I/O. State is process-memory only: a restart
//! rebuilds the store empty by design.
//!
//! Construct one `MemStore` at process start and share it via `Arc`; tests
//! construct their own independent instances.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use crate::error::StoreError;
use crate::records::{
    Account, ContactSubmission, Donation, NewAccount, NewContact, NewDonation,
};

/// Append-only arena with an id index
#[derive(Debug)]
struct Table<T> {
    records: Vec<T>,
    by_id: HashMap<u64, usize>,
    next_id: u64,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            records: Vec::new(),
            by_id: HashMap::new(),
            next_id: 1,
        }
    }

    /// Issue the next id and insert the record built from it.
    fn insert_with(&mut self, build: impl FnOnce(u64) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        let pos = self.records.len();
        self.by_id.insert(id, pos);
        self.records.push(build(id));
        &self.records[pos]
    }

    fn get(&self, id: u64) -> Option<&T> {
        self.by_id.get(&id).map(|&pos| &self.records[pos])
    }
}

#[derive(Debug)]
struct AccountTable {
    table: Table<Account>,
    by_username: HashMap<String, u64>,
}

/// The in-memory store shared by all request handlers.
///
/// Callers validate input shape before invoking creation operations; the
/// store accepts fields as given and only assigns identity and timestamps.
#[derive(Debug)]
pub struct MemStore {
    accounts: RwLock<AccountTable>,
    contacts: RwLock<Table<ContactSubmission>>,
    donations: RwLock<Table<Donation>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(AccountTable {
                table: Table::new(),
                by_username: HashMap::new(),
            }),
            contacts: RwLock::new(Table::new()),
            donations: RwLock::new(Table::new()),
        }
    }

    /// Look up an account by id. Absence is a normal outcome, not a fault.
    pub fn account(&self, id: u64) -> Option<Account> {
        let accounts = self.accounts.read().unwrap();
        accounts.table.get(id).cloned()
    }

    /// Look up an account by username.
    pub fn account_by_username(&self, username: &str) -> Option<Account> {
        let accounts = self.accounts.read().unwrap();
        let id = *accounts.by_username.get(username)?;
        accounts.table.get(id).cloned()
    }

    /// Create an account. Usernames are unique; a duplicate is rejected
    /// without consuming an id.
    pub fn create_account(&self, new: NewAccount) -> Result<Account, StoreError> {
        let mut accounts = self.accounts.write().unwrap();
        if accounts.by_username.contains_key(&new.username) {
            return Err(StoreError::UsernameTaken {
                username: new.username,
            });
        }
        let account = accounts
            .table
            .insert_with(|id| Account {
                id,
                username: new.username,
                password: new.password,
            })
            .clone();
        accounts.by_username.insert(account.username.clone(), account.id);
        Ok(account)
    }

    /// Record a contact-form submission with a server-assigned timestamp.
    pub fn create_contact(&self, new: NewContact) -> ContactSubmission {
        let created_at = Utc::now();
        let mut contacts = self.contacts.write().unwrap();
        contacts
            .insert_with(|id| ContactSubmission {
                id,
                first_name: new.first_name,
                last_name: new.last_name,
                email: new.email,
                interest: new.interest,
                message: new.message,
                created_at,
            })
            .clone()
    }

    /// All contact submissions in insertion order.
    pub fn contacts(&self) -> Vec<ContactSubmission> {
        self.contacts.read().unwrap().records.clone()
    }

    /// Record a donation with a server-assigned timestamp.
    pub fn create_donation(&self, new: NewDonation) -> Donation {
        let created_at = Utc::now();
        let mut donations = self.donations.write().unwrap();
        donations
            .insert_with(|id| Donation {
                id,
                amount_cents: new.amount_cents,
                donor_email: new.donor_email,
                donor_name: new.donor_name,
                payment_intent_id: new.payment_intent_id,
                recurring: new.recurring,
                created_at,
            })
            .clone()
    }

    /// All donations in insertion order.
    pub fn donations(&self) -> Vec<Donation> {
        self.donations.read().unwrap().records.clone()
    }

    /// Sum of all donation amounts, in cents.
    pub fn total_donated_cents(&self) -> i64 {
        let donations = self.donations.read().unwrap();
        donations.records.iter().map(|d| d.amount_cents).sum()
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_input() -> NewContact {
        NewContact {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.org".into(),
            interest: "volunteering".into(),
            message: "How can I help on weekends?".into(),
        }
    }

    fn donation_input(amount_cents: i64) -> NewDonation {
        NewDonation {
            amount_cents,
            donor_email: None,
            donor_name: None,
            payment_intent_id: format!("pi_test_{amount_cents}"),
            recurring: false,
        }
    }

    #[test]
    fn ids_are_monotonic_and_unique_per_kind() {
        let store = MemStore::new();
        let ids: Vec<u64> = (0..5)
            .map(|_| store.create_contact(contact_input()).id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn sequences_are_independent_across_kinds() {
        let store = MemStore::new();
        let account = store
            .create_account(NewAccount {
                username: "admin".into(),
                password: "secret".into(),
            })
            .unwrap();
        let contact = store.create_contact(contact_input());
        let donation = store.create_donation(donation_input(500));

        assert_eq!(account.id, 1);
        assert_eq!(contact.id, 1);
        assert_eq!(donation.id, 1);
    }

    #[test]
    fn contact_read_after_write() {
        let store = MemStore::new();
        store.create_contact(contact_input());

        let contacts = store.contacts();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].first_name, "Ada");
        assert_eq!(contacts[0].interest, "volunteering");
        // Timestamp is server-assigned, never in the future
        assert!(contacts[0].created_at <= Utc::now());
    }

    #[test]
    fn contacts_listed_in_insertion_order() {
        let store = MemStore::new();
        for i in 0..3 {
            let mut input = contact_input();
            input.message = format!("message {i}");
            store.create_contact(input);
        }
        let messages: Vec<String> = store.contacts().into_iter().map(|c| c.message).collect();
        assert_eq!(messages, vec!["message 0", "message 1", "message 2"]);
    }

    #[test]
    fn donation_total_matches_sum() {
        let store = MemStore::new();
        for amount in [500, 250, 1000] {
            store.create_donation(donation_input(amount));
        }
        assert_eq!(store.total_donated_cents(), 1750);
    }

    #[test]
    fn empty_store_totals_zero() {
        let store = MemStore::new();
        assert_eq!(store.total_donated_cents(), 0);
        assert!(store.donations().is_empty());
        assert!(store.contacts().is_empty());
    }

    #[test]
    fn lookup_miss_returns_none() {
        let store = MemStore::new();
        assert_eq!(store.account(99), None);
        assert_eq!(store.account_by_username("nobody"), None);
    }

    #[test]
    fn account_lookup_by_id_and_username() {
        let store = MemStore::new();
        let created = store
            .create_account(NewAccount {
                username: "coordinator".into(),
                password: "hunter2".into(),
            })
            .unwrap();

        assert_eq!(store.account(created.id), Some(created.clone()));
        assert_eq!(store.account_by_username("coordinator"), Some(created));
    }

    #[test]
    fn duplicate_username_is_rejected_without_consuming_an_id() {
        let store = MemStore::new();
        let input = NewAccount {
            username: "taken".into(),
            password: "first".into(),
        };
        store.create_account(input.clone()).unwrap();

        let err = store.create_account(input).unwrap_err();
        assert_eq!(
            err,
            StoreError::UsernameTaken {
                username: "taken".into()
            }
        );

        // Next distinct username still gets the next id in sequence
        let next = store
            .create_account(NewAccount {
                username: "other".into(),
                password: "second".into(),
            })
            .unwrap();
        assert_eq!(next.id, 2);
    }

    #[test]
    fn optional_donation_fields_default() {
        let store = MemStore::new();
        let donation = store.create_donation(NewDonation {
            amount_cents: 2500,
            donor_email: None,
            donor_name: None,
            payment_intent_id: "pi_anon".into(),
            recurring: false,
        });

        assert_eq!(donation.donor_email, None);
        assert_eq!(donation.donor_name, None);
        assert!(!donation.recurring);
    }

    #[test]
    fn concurrent_creates_never_share_an_id() {
        use std::sync::Arc;

        let store = Arc::new(MemStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..50)
                        .map(|_| store.create_donation(donation_input(100)).id)
                        .collect::<Vec<u64>>()
                })
            })
            .collect();

        let mut all_ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        all_ids.sort_unstable();
        all_ids.dedup();
        assert_eq!(all_ids.len(), 400);
        assert_eq!(store.donations().len(), 400);
        assert_eq!(store.total_donated_cents(), 400 * 100);
    }
}
