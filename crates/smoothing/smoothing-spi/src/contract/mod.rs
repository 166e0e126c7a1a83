//! Smoothing contracts.

pub mod smoother;

pub use smoother::Smoother;
