pub mod contact;
pub mod status_check;
pub mod timestamp;
pub mod validate;

pub use contact::{ContactForm, ContactResponse, ContactSubmission};
pub use status_check::{StatusCheck, StatusCheckCreate};
pub use validate::{FieldError, Validate};
