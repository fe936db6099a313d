use crate::db::CustomerCode;
use crate::error::AdvisorError;

/// Split `"<customer_code> <function_number>"` into its two integers.
///
/// Anything other than exactly two integer tokens is rejected.
pub fn parse_input(input: &str) -> Result<(CustomerCode, i64), AdvisorError> {
    let invalid = || AdvisorError::InvalidInput(input.to_string());
    let mut tokens = input.split_whitespace();
    let (Some(code), Some(selector), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        tracing::debug!(input, "Expected exactly two tokens");
        return Err(invalid());
    };
    let code: CustomerCode = code.parse().map_err(|_| invalid())?;
    let selector: i64 = selector.parse().map_err(|_| invalid())?;
    Ok((code, selector))
}
