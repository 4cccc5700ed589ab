//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod durable_store;
mod entry_location;
mod profile_api;

#[cfg(test)]
pub use durable_store::MockDurableStore;
pub use durable_store::{DurableStore, DurableStoreError};
#[cfg(test)]
pub use entry_location::MockEntryLocation;
pub use entry_location::EntryLocation;
#[cfg(test)]
pub use profile_api::MockProfileApi;
pub use profile_api::ProfileApi;
