//! Message text lookup
//!
//! Components ask for text by message id with an English default. The
//! catalog substitutes an override when one is configured.

mod message_catalog;

pub use message_catalog::{MessageCatalog, ids};
