mod crypto;

pub use crypto::{hash_password, verify_password};
