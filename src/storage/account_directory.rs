use crate::models::Account;
use crate::types::Username;
use dashmap::mapref::one::RefMut;
use dashmap::DashMap;
use tracing::debug;

/// Exclusive handle to a registered account.
///
/// Holds a lock on the entry's shard: drop it before touching the directory again.
pub type AccountRef<'a> = RefMut<'a, Username, Account>;

/// In-memory registry mapping usernames to accounts.
#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: DashMap<Username, Account>
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new()
        }
    }

    /// Registers `account` under `username`, replacing any account already stored there.
    pub fn register(&self, username: impl Into<Username>, account: Account) {
        let username = username.into();

        if let Some(previous) = self.accounts.insert(username.clone(), account) {
            debug!("Replaced [{}] account registered for user [{username}]", previous.kind());
        } else {
            debug!("Registered user [{username}]");
        }
    }

    /// Finds the account registered for `username`.
    ///
    /// Changes made through the returned handle are kept in the directory.
    pub fn lookup(&self, username: &str) -> Option<AccountRef<'_>> {
        self.accounts.get_mut(username)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
