//! Generated-style statement providers, one per service.
//!
//! The full catalog is produced from the service authorization reference;
//! this crate ships the CodeCommit provider as the reference shape for the
//! generator output.

mod codecommit;

pub use codecommit::{CodeCommit, CODECOMMIT};
