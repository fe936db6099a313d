use serde::{de, Deserialize, Deserializer};

/// Identifier for a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CustomerCode(pub i64);

impl std::fmt::Display for CustomerCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CustomerCode {
    fn from(code: i64) -> Self {
        CustomerCode(code)
    }
}

impl From<CustomerCode> for i64 {
    fn from(code: CustomerCode) -> Self {
        code.0
    }
}

impl std::str::FromStr for CustomerCode {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(CustomerCode)
    }
}

/// Parse a customer code as exported by spreadsheet tools.
///
/// Accepts plain integers as well as integral floats such as `101.0`.
pub fn parse_code_cell(raw: &str) -> Option<CustomerCode> {
    let raw = raw.trim();
    if let Ok(code) = raw.parse::<i64>() {
        return Some(CustomerCode(code));
    }
    let value = raw.parse::<f64>().ok()?;
    if value.is_finite() && value.fract() == 0.0 {
        Some(CustomerCode(value as i64))
    } else {
        None
    }
}

impl<'de> Deserialize<'de> for CustomerCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_code_cell(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid customer code: {raw:?}")))
    }
}
