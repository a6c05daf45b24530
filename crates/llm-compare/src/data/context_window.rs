//! Parser for context window sizes such as `128K` or `1.5M`.
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenUnit {
    Thousand,
    Million,
}

/// A token count with its unit, as written in the input table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextWindow {
    pub amount: f64,
    pub unit: TokenUnit,
}

impl ContextWindow {
    /// Size expressed in thousands of tokens.
    pub fn size_k(&self) -> f64 {
        match self.unit {
            TokenUnit::Thousand => self.amount,
            TokenUnit::Million => self.amount * 1000.0,
        }
    }
}

impl FromStr for ContextWindow {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let unit_char = trimmed
            .chars()
            .last()
            .ok_or_else(|| "empty value".to_string())?;
        let unit = match unit_char.to_ascii_uppercase() {
            'K' => TokenUnit::Thousand,
            'M' => TokenUnit::Million,
            _ => return Err(format!("missing K or M unit suffix (found '{}')", unit_char)),
        };

        let number = &trimmed[..trimmed.len() - unit_char.len_utf8()];
        if number.is_empty() {
            return Err("missing numeric prefix".to_string());
        }
        // Plain unsigned decimals only; `f64::from_str` alone would also take "inf", "1e3" or "+5".
        if !number.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(format!("'{}' is not an unsigned decimal number", number));
        }
        let amount = number
            .parse::<f64>()
            .map_err(|e| format!("'{}' is not a number: {}", number, e))?;

        Ok(ContextWindow { amount, unit })
    }
}
