pub mod client;
pub mod collection;
pub mod memory;
mod record;
pub mod store;

pub use client::DbClient;
pub use collection::{Collection, Confirmation, DeleteError, FetchError, ListView, Removal, WriteError};
pub use memory::MemoryStore;
pub use store::{CredentialStore, DbError, DocumentStore, Result};
