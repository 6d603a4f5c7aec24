use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::SdkError;
use crate::models::swap_issues_allowance::CommonSwapResponseIssuesAllowance;
use crate::models::swap_issues_balance::CommonSwapResponseIssuesBalance;
use crate::models::wire::{missing_fields_message, prefer_snake};

/// Problems detected while pricing a swap that would make it fail onchain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawIssues")]
pub struct CommonSwapResponseIssues {
    #[serde(rename = "allowance")]
    allowance: Option<CommonSwapResponseIssuesAllowance>,
    #[serde(rename = "balance")]
    balance: Option<CommonSwapResponseIssuesBalance>,
    /// Set when the swap could not be fully simulated, e.g. because of a
    /// missing balance or allowance.
    #[serde(rename = "simulation_incomplete")]
    simulation_incomplete: bool,
}

#[derive(Deserialize)]
struct RawIssues {
    allowance: Option<CommonSwapResponseIssuesAllowance>,
    balance: Option<CommonSwapResponseIssuesBalance>,
    simulation_incomplete: Option<bool>,
    #[serde(rename = "simulationIncomplete")]
    simulation_incomplete_camel: Option<Value>,
}

impl TryFrom<RawIssues> for CommonSwapResponseIssues {
    type Error = String;

    fn try_from(raw: RawIssues) -> Result<Self, Self::Error> {
        let simulation_incomplete = prefer_snake(
            "simulation_incomplete",
            raw.simulation_incomplete,
            raw.simulation_incomplete_camel,
        )?
        .ok_or_else(|| {
            missing_fields_message(&[("simulation_incomplete", false)]).unwrap_or_default()
        })?;
        Ok(Self {
            allowance: raw.allowance,
            balance: raw.balance,
            simulation_incomplete,
        })
    }
}

impl CommonSwapResponseIssues {
    pub fn new(simulation_incomplete: bool) -> Self {
        Self {
            allowance: None,
            balance: None,
            simulation_incomplete,
        }
    }

    pub fn with_allowance(mut self, allowance: CommonSwapResponseIssuesAllowance) -> Self {
        self.allowance = Some(allowance);
        self
    }

    pub fn with_balance(mut self, balance: CommonSwapResponseIssuesBalance) -> Self {
        self.balance = Some(balance);
        self
    }

    pub fn allowance(&self) -> Option<&CommonSwapResponseIssuesAllowance> {
        self.allowance.as_ref()
    }

    pub fn balance(&self) -> Option<&CommonSwapResponseIssuesBalance> {
        self.balance.as_ref()
    }

    pub fn simulation_incomplete(&self) -> bool {
        self.simulation_incomplete
    }

    pub fn has_issues(&self) -> bool {
        self.allowance.is_some() || self.balance.is_some() || self.simulation_incomplete
    }

    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            "allowance".to_string(),
            self.allowance
                .as_ref()
                .map_or(Value::Null, |a| Value::Object(a.to_mapping())),
        );
        map.insert(
            "balance".to_string(),
            self.balance
                .as_ref()
                .map_or(Value::Null, |b| Value::Object(b.to_mapping())),
        );
        map.insert(
            "simulation_incomplete".to_string(),
            Value::Bool(self.simulation_incomplete),
        );
        map
    }

    pub fn from_mapping(mapping: &Map<String, Value>) -> Result<Self, SdkError> {
        Ok(serde_json::from_value(Value::Object(mapping.clone()))?)
    }

    pub fn to_json(&self) -> Result<String, SdkError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SdkError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate_format(&self) -> Result<(), SdkError> {
        if let Some(allowance) = &self.allowance {
            allowance.validate_format()?;
        }
        if let Some(balance) = &self.balance {
            balance.validate_format()?;
        }
        Ok(())
    }
}

impl fmt::Display for CommonSwapResponseIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TOKEN: &str = "0x62ECB020842930cc01FFCCfeEe150AC32DcAEc8a";
    const SPENDER: &str = "0x000000000022D473030F116dDEE9F6B43aC78BA3";

    fn balance() -> CommonSwapResponseIssuesBalance {
        CommonSwapResponseIssuesBalance::new(TOKEN, "10000000", "1000000000000000000")
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_decode_platform_payload() {
        let json = r#"{
            "allowance": {
                "currentAllowance": "0",
                "spender": "0x000000000022D473030F116dDEE9F6B43aC78BA3"
            },
            "balance": {
                "token": "0x62ECB020842930cc01FFCCfeEe150AC32DcAEc8a",
                "currentBalance": "10000000",
                "requiredBalance": "1000000000000000000"
            },
            "simulationIncomplete": true
        }"#;
        let issues = CommonSwapResponseIssues::from_json(json).unwrap();
        assert_eq!(issues.balance(), Some(&balance()));
        assert_eq!(issues.allowance().map(|a| a.spender()), Some(SPENDER));
        assert!(issues.simulation_incomplete());
        assert!(issues.validate_format().is_ok());
    }

    #[test]
    fn test_null_and_absent_issues() {
        let json = r#"{"allowance": null, "simulation_incomplete": false}"#;
        let issues = CommonSwapResponseIssues::from_json(json).unwrap();
        assert_eq!(issues, CommonSwapResponseIssues::new(false));
        assert!(!issues.has_issues());
        assert_eq!(
            Value::Object(issues.to_mapping()),
            json!({"allowance": null, "balance": null, "simulation_incomplete": false})
        );
        let expected = r#"{"allowance":null,"balance":null,"simulation_incomplete":false}"#;
        assert_eq!(issues.to_json().unwrap(), expected);
    }

    #[test]
    fn test_missing_simulation_flag() {
        let json = r#"{"allowance": null, "balance": null}"#;
        let err = CommonSwapResponseIssues::from_json(json).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("simulation_incomplete"));
    }

    #[test]
    fn test_snake_case_flag_wins_over_camel_case() {
        let mapping = object(json!({
            "simulation_incomplete": false,
            "simulationIncomplete": true
        }));
        let issues = CommonSwapResponseIssues::from_mapping(&mapping).unwrap();
        assert!(!issues.simulation_incomplete());

        let mapping = object(json!({"simulationIncomplete": "yes"}));
        let err = CommonSwapResponseIssues::from_mapping(&mapping).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_nested_balance_errors_surface() {
        let mapping = object(json!({
            "balance": {"token": "0xabc", "current_balance": "1"},
            "simulation_incomplete": false
        }));
        let err = CommonSwapResponseIssues::from_mapping(&mapping).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("required_balance"));
    }

    #[test]
    fn test_mapping_round_trip() {
        let issues = CommonSwapResponseIssues::new(true)
            .with_balance(balance())
            .with_allowance(CommonSwapResponseIssuesAllowance::new("0", SPENDER));
        assert!(issues.has_issues());

        let keys: Vec<String> = issues.to_mapping().keys().cloned().collect();
        assert_eq!(keys, vec!["allowance", "balance", "simulation_incomplete"]);
        let decoded = CommonSwapResponseIssues::from_mapping(&issues.to_mapping()).unwrap();
        assert_eq!(decoded, issues);
    }

    #[test]
    fn test_validate_format_checks_nested() {
        let issues = CommonSwapResponseIssues::new(false)
            .with_balance(CommonSwapResponseIssuesBalance::new("0xabc", "1", "2"));
        assert!(matches!(
            issues.validate_format(),
            Err(SdkError::InvalidAddressError(_))
        ));
    }
}
