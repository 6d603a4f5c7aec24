use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::SdkError;
use crate::models::format::{check_address, check_amount};
use crate::models::wire::{missing_fields_message, prefer_snake};

/// Allowance the spender lacks before the swap can move the token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAllowance")]
pub struct CommonSwapResponseIssuesAllowance {
    /// Allowance currently granted to the spender, smallest unit.
    #[serde(rename = "current_allowance")]
    current_allowance: String,
    /// Address that must be approved.
    #[serde(rename = "spender")]
    spender: String,
}

#[derive(Deserialize)]
struct RawAllowance {
    current_allowance: Option<String>,
    #[serde(rename = "currentAllowance")]
    current_allowance_camel: Option<Value>,
    spender: Option<String>,
}

impl TryFrom<RawAllowance> for CommonSwapResponseIssuesAllowance {
    type Error = String;

    fn try_from(raw: RawAllowance) -> Result<Self, Self::Error> {
        let current_allowance = prefer_snake(
            "current_allowance",
            raw.current_allowance,
            raw.current_allowance_camel,
        )?;
        Self::from_parts(current_allowance, raw.spender)
    }
}

impl CommonSwapResponseIssuesAllowance {
    pub fn new(current_allowance: impl Into<String>, spender: impl Into<String>) -> Self {
        Self {
            current_allowance: current_allowance.into(),
            spender: spender.into(),
        }
    }

    pub fn builder() -> CommonSwapResponseIssuesAllowanceBuilder {
        CommonSwapResponseIssuesAllowanceBuilder::default()
    }

    fn from_parts(
        current_allowance: Option<String>,
        spender: Option<String>,
    ) -> Result<Self, String> {
        match (current_allowance, spender) {
            (Some(current_allowance), Some(spender)) => Ok(Self {
                current_allowance,
                spender,
            }),
            (current_allowance, spender) => Err(missing_fields_message(&[
                ("current_allowance", current_allowance.is_some()),
                ("spender", spender.is_some()),
            ])
            .unwrap_or_default()),
        }
    }

    pub fn current_allowance(&self) -> &str {
        &self.current_allowance
    }

    pub fn spender(&self) -> &str {
        &self.spender
    }

    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            "current_allowance".to_string(),
            Value::String(self.current_allowance.clone()),
        );
        map.insert("spender".to_string(), Value::String(self.spender.clone()));
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
        check_amount("current_allowance", &self.current_allowance)?;
        check_address("spender", &self.spender)
    }
}

impl fmt::Display for CommonSwapResponseIssuesAllowance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Builder for [`CommonSwapResponseIssuesAllowance`]. `build` reports every
/// required field that was never set.
#[derive(Debug, Default, Clone)]
pub struct CommonSwapResponseIssuesAllowanceBuilder {
    current_allowance: Option<String>,
    spender: Option<String>,
}

impl CommonSwapResponseIssuesAllowanceBuilder {
    pub fn current_allowance(mut self, value: impl Into<String>) -> Self {
        self.current_allowance = Some(value.into());
        self
    }

    pub fn spender(mut self, value: impl Into<String>) -> Self {
        self.spender = Some(value.into());
        self
    }

    pub fn build(self) -> Result<CommonSwapResponseIssuesAllowance, SdkError> {
        CommonSwapResponseIssuesAllowance::from_parts(self.current_allowance, self.spender)
            .map_err(SdkError::ValidationError)
    }
}
