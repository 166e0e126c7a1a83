//! Monitoring contracts.

pub mod batch_oracle;

pub use batch_oracle::BatchOracle;
