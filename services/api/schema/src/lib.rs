//! sea-orm entities for the members API.

pub mod blacklist_entries;
pub mod sessions;
pub mod users;
