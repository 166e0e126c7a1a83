//! Oracle error types.

pub mod oracle_error;

pub use oracle_error::{OracleError, Result};
