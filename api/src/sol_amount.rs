//! Provides a self-contained type for representing SOL balances.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Number of lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Number of decimal places between a lamport and a whole SOL.
const SOL_DECIMALS: usize = 9;

/// A balance on the Solana ledger.
///
/// Internally, the amount is stored in lamports, the ledger's smallest
/// indivisible unit, to prevent floating-point inaccuracies. The `Display`
/// implementation renders the exact value in whole SOL with trailing zeros
/// removed, so `2_500_000_000` lamports displays as `2.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SolAmount(u64);

impl SolAmount {
    /// Creates a new `SolAmount` from a lamport count, as returned by `getBalance`.
    ///
    /// # Example
    /// ```
    /// let amount = api::sol_amount::SolAmount::from_lamports(2_500_000_000);
    /// assert_eq!(amount.to_string(), "2.5");
    /// ```
    pub const fn from_lamports(lamports: u64) -> Self {
        Self(lamports)
    }

    /// Returns the raw amount in lamports.
    pub const fn as_lamports(&self) -> u64 {
        self.0
    }

    /// Returns the amount in SOL as a float. Lossy above 2^53 lamports.
    pub fn to_sol_f64(&self) -> f64 {
        self.0 as f64 / LAMPORTS_PER_SOL as f64
    }
}

impl From<u64> for SolAmount {
    fn from(lamports: u64) -> Self {
        Self::from_lamports(lamports)
    }
}

impl fmt::Display for SolAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / LAMPORTS_PER_SOL;
        let fraction = self.0 % LAMPORTS_PER_SOL;

        if fraction == 0 {
            return write!(f, "{}", whole);
        }

        let digits = format!("{:0width$}", fraction, width = SOL_DECIMALS);
        write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_balance_drops_trailing_zeros() {
        assert_eq!(SolAmount::from_lamports(2_500_000_000).to_string(), "2.5");
        assert_eq!(SolAmount::from_lamports(1_234_000_000).to_string(), "1.234");
    }

    #[test]
    fn whole_balance_has_no_decimal_point() {
        assert_eq!(SolAmount::from_lamports(0).to_string(), "0");
        assert_eq!(SolAmount::from_lamports(LAMPORTS_PER_SOL).to_string(), "1");
        assert_eq!(SolAmount::from_lamports(42 * LAMPORTS_PER_SOL).to_string(), "42");
    }

    #[test]
    fn sub_sol_balance_keeps_leading_zeros() {
        assert_eq!(SolAmount::from_lamports(1).to_string(), "0.000000001");
        assert_eq!(SolAmount::from_lamports(50_000).to_string(), "0.00005");
    }

    #[test]
    fn float_conversion_matches_divisor() {
        assert_eq!(SolAmount::from_lamports(2_500_000_000).to_sol_f64(), 2.5);
    }

    #[test]
    fn serializes_as_bare_lamports() {
        let json = serde_json::to_string(&SolAmount::from_lamports(7)).unwrap();
        assert_eq!(json, "7");
        let back: SolAmount = serde_json::from_str("2500000000").unwrap();
        assert_eq!(back.as_lamports(), 2_500_000_000);
    }
}
