// Tue Jan 13 2026 - Alex

mod builtin;
pub mod database;
pub mod error;
pub mod signature;
pub mod width;

pub use database::{DuplicateSignature, SignatureDatabase};
pub use error::SignatureError;
pub use signature::{Signature, SignatureKind};
pub use width::ElementWidth;
