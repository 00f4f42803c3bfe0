//! Modem management API client module
//!
//! Logs in to the modem's CGI interface and fetches object collections
//! as generic record sets.

mod client;
mod protocol;
mod types;

// Re-export public types and functions
pub use client::ModemClient;
pub use protocol::{encode_form, query_url};
pub use types::{Data, Domain, Record, RecordSet, Scrape, data_to_map};
