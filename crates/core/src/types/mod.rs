//! Core domain types for the glossary.

pub mod caller;
pub mod id;
pub mod outcome;
pub mod term;
pub mod tier;

pub use caller::{CallerId, CallerIdError};
pub use id::{AdminId, MeaningId, WordId};
pub use outcome::Outcome;
pub use term::{Term, TermError};
pub use tier::Tier;
