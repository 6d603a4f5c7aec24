use crate::errors::SdkError;

/// Checks the `^0x[a-fA-F0-9]{40}$` address pattern.
pub fn check_address(field: &str, value: &str) -> Result<(), SdkError> {
    let valid = value
        .strip_prefix("0x")
        .map(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false);

    if valid {
        Ok(())
    } else {
        Err(SdkError::InvalidAddressError(format!("{}: {}", field, value)))
    }
}

/// Checks the `^\d+$` amount pattern. No upper bound, amounts stay strings.
pub fn check_amount(field: &str, value: &str) -> Result<(), SdkError> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(SdkError::InvalidAmountError(format!("{}: {}", field, value)))
    }
}
