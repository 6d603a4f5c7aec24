use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::SdkError;
use crate::models::format::{check_address, check_amount};
use crate::models::wire::{missing_fields_message, prefer_snake};

/// Details of the balance shortfall that blocks a swap.
///
/// Amounts are kept as decimal strings in the token's smallest unit so that
/// values past `u128` survive untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBalance")]
pub struct CommonSwapResponseIssuesBalance {
    /// Contract address of the token.
    #[serde(rename = "token")]
    token: String,
    /// Balance the taker currently holds.
    #[serde(rename = "current_balance")]
    current_balance: String,
    /// Balance needed to execute the swap.
    #[serde(rename = "required_balance")]
    required_balance: String,
}

// Input form: snake_case keys, with the platform's camelCase spelling as fallback
#[derive(Deserialize)]
struct RawBalance {
    token: Option<String>,
    current_balance: Option<String>,
    #[serde(rename = "currentBalance")]
    current_balance_camel: Option<Value>,
    required_balance: Option<String>,
    #[serde(rename = "requiredBalance")]
    required_balance_camel: Option<Value>,
}

impl TryFrom<RawBalance> for CommonSwapResponseIssuesBalance {
    type Error = String;

    fn try_from(raw: RawBalance) -> Result<Self, Self::Error> {
        let current_balance =
            prefer_snake("current_balance", raw.current_balance, raw.current_balance_camel)?;
        let required_balance =
            prefer_snake("required_balance", raw.required_balance, raw.required_balance_camel)?;
        Self::from_parts(raw.token, current_balance, required_balance)
    }
}

impl CommonSwapResponseIssuesBalance {
    pub fn new(
        token: impl Into<String>,
        current_balance: impl Into<String>,
        required_balance: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            current_balance: current_balance.into(),
            required_balance: required_balance.into(),
        }
    }

    pub fn builder() -> CommonSwapResponseIssuesBalanceBuilder {
        CommonSwapResponseIssuesBalanceBuilder::default()
    }

    fn from_parts(
        token: Option<String>,
        current_balance: Option<String>,
        required_balance: Option<String>,
    ) -> Result<Self, String> {
        match (token, current_balance, required_balance) {
            (Some(token), Some(current_balance), Some(required_balance)) => Ok(Self {
                token,
                current_balance,
                required_balance,
            }),
            (token, current_balance, required_balance) => Err(missing_fields_message(&[
                ("token", token.is_some()),
                ("current_balance", current_balance.is_some()),
                ("required_balance", required_balance.is_some()),
            ])
            .unwrap_or_default()),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn current_balance(&self) -> &str {
        &self.current_balance
    }

    pub fn required_balance(&self) -> &str {
        &self.required_balance
    }

    pub fn to_mapping(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("token".to_string(), Value::String(self.token.clone()));
        map.insert(
            "current_balance".to_string(),
            Value::String(self.current_balance.clone()),
        );
        map.insert(
            "required_balance".to_string(),
            Value::String(self.required_balance.clone()),
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

    /// Applies the address and amount patterns declared for this schema.
    pub fn validate_format(&self) -> Result<(), SdkError> {
        check_address("token", &self.token)?;
        check_amount("current_balance", &self.current_balance)?;
        check_amount("required_balance", &self.required_balance)
    }
}

impl fmt::Display for CommonSwapResponseIssuesBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Builder for [`CommonSwapResponseIssuesBalance`]. `build` reports every
/// required field that was never set.
#[derive(Debug, Default, Clone)]
pub struct CommonSwapResponseIssuesBalanceBuilder {
    token: Option<String>,
    current_balance: Option<String>,
    required_balance: Option<String>,
}

impl CommonSwapResponseIssuesBalanceBuilder {
    pub fn token(mut self, value: impl Into<String>) -> Self {
        self.token = Some(value.into());
        self
    }

    pub fn current_balance(mut self, value: impl Into<String>) -> Self {
        self.current_balance = Some(value.into());
        self
    }

    pub fn required_balance(mut self, value: impl Into<String>) -> Self {
        self.required_balance = Some(value.into());
        self
    }

    pub fn build(self) -> Result<CommonSwapResponseIssuesBalance, SdkError> {
        CommonSwapResponseIssuesBalance::from_parts(
            self.token,
            self.current_balance,
            self.required_balance,
        )
        .map_err(SdkError::ValidationError)
    }
}
