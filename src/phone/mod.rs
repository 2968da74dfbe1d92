pub mod geo;
pub mod metadata;
pub mod target;

pub use metadata::{describe, LineType, PhoneMetadata};
pub use target::{validate, PhoneError, PhoneTarget};
