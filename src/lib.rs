//! Swap issue models for the platform's swap API: balance and allowance
//! shortfalls plus the issues envelope that carries them.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;

pub use errors::SdkError;
pub use models::{
    CommonSwapResponseIssues, CommonSwapResponseIssuesAllowance, CommonSwapResponseIssuesBalance,
};
