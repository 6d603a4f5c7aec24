pub mod format;
pub mod swap_issues;
pub mod swap_issues_allowance;
pub mod swap_issues_balance;
mod wire;

pub use swap_issues::CommonSwapResponseIssues;
pub use swap_issues_allowance::{
    CommonSwapResponseIssuesAllowance, CommonSwapResponseIssuesAllowanceBuilder,
};
pub use swap_issues_balance::{
    CommonSwapResponseIssuesBalance, CommonSwapResponseIssuesBalanceBuilder,
};
