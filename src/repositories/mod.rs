mod contact_store;
mod traits;

pub use contact_store::{ContactStore, StoreEvent};
pub use traits::ContactRepository;
