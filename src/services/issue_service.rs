use log::{debug, info, warn};

use crate::errors::SdkError;
use crate::models::swap_issues::CommonSwapResponseIssues;

pub struct IssueService {
    strict: bool,
}

impl IssueService {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Decode a swap issues document and report what it contains.
    ///
    /// In strict mode the address and amount patterns are enforced as well.
    pub fn inspect_json(&self, json: &str) -> Result<CommonSwapResponseIssues, SdkError> {
        debug!("inspecting {} bytes of swap issues", json.len());
        let issues = CommonSwapResponseIssues::from_json(json)?;

        if self.strict {
            issues.validate_format()?;
        }

        if let Some(balance) = issues.balance() {
            warn!(
                "insufficient balance for token {}: have {}, need {}",
                balance.token(),
                balance.current_balance(),
                balance.required_balance()
            );
        }
        if let Some(allowance) = issues.allowance() {
            warn!(
                "insufficient allowance for spender {}: current {}",
                allowance.spender(),
                allowance.current_allowance()
            );
        }
        if issues.simulation_incomplete() {
            warn!("swap simulation incomplete");
        }
        if !issues.has_issues() {
            info!("no swap issues reported");
        }

        Ok(issues)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHORT_TOKEN: &str = concat!(
        r#"{"balance":{"token":"0xabc","current_balance":"1","required_balance":"2"},"#,
        r#""simulation_incomplete":false}"#
    );

    #[test]
    fn test_lenient_accepts_opaque_token() {
        let issues = IssueService::new(false).inspect_json(SHORT_TOKEN).unwrap();
        assert_eq!(issues.balance().map(|b| b.token()), Some("0xabc"));
    }

    #[test]
    fn test_strict_rejects_bad_address() {
        let err = IssueService::new(true).inspect_json(SHORT_TOKEN).unwrap_err();
        assert!(matches!(err, SdkError::InvalidAddressError(_)));
    }

    #[test]
    fn test_decode_errors_propagate() {
        let json = concat!(
            r#"{"balance":{"token":"0xabc","current_balance":"1"},"#,
            r#""simulation_incomplete":false}"#
        );
        let err = IssueService::new(true).inspect_json(json).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_empty_issues() {
        let issues = IssueService::new(true)
            .inspect_json(r#"{"allowance":null,"balance":null,"simulation_incomplete":false}"#)
            .unwrap();
        assert!(!issues.has_issues());
    }
}
