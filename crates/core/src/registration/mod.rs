//! Registration form decoding and normalization.
//!
//! The form posts a camelCase JSON object. [`RegistrationPayload`] mirrors it
//! exactly; [`Submission`] is the normalized record every later stage works on.

mod error;
mod payload;
mod record;

pub use error::RegistrationError;
pub use payload::RegistrationPayload;
pub use record::{
    AdditionalAddress, Address, Banking, Company, Contact, DistributionNetwork, Executive,
    Submission,
};
