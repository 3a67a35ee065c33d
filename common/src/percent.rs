//! [`Percent`]-related definitions.

use std::str::FromStr;

use derive_more::Display;
use rust_decimal::Decimal;

/// Floating-point percentage.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(try_from = "String")
)]
#[display("{_0}%")]
pub struct Percent(Decimal);

impl Percent {
    /// Creates a new [`Percent`] by checking the provided values is
    /// greater than `0` and less than `100`.
    #[must_use]
    pub fn new(val: Decimal) -> Option<Self> {
        if val < Decimal::ZERO || val > Decimal::ONE_HUNDRED {
            None
        } else {
            Some(Self(val))
        }
    }

    /// Creates a new [`Percent`] from a whole number of percents, saturating
    /// at `100`.
    #[must_use]
    pub const fn whole(val: u8) -> Self {
        let val = if val > 100 { 100 } else { val };
        Self(Decimal::from_parts(val as u32, 0, 0, false, 0))
    }

    /// Applies this [`Percent`] to the provided `amount`.
    ///
    /// The result is exact: no rounding is performed.
    #[must_use]
    pub fn of(&self, amount: Decimal) -> Decimal {
        amount * self.0 / Decimal::ONE_HUNDRED
    }
}

impl FromStr for Percent {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim().trim_end_matches('%').trim_end())
            .ok()
            .and_then(Self::new)
            .ok_or("invalid percent value")
    }
}

impl TryFrom<String> for Percent {
    type Error = &'static str;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Percent;

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn from_str() {
        assert_eq!(Percent::from_str("10").unwrap(), Percent::whole(10));
        assert_eq!(Percent::from_str("11%").unwrap(), Percent::whole(11));
        assert_eq!(
            Percent::from_str(" 12.5 % ").unwrap(),
            Percent::new(decimal("12.5")).unwrap(),
        );

        assert!(Percent::from_str("-1").is_err());
        assert!(Percent::from_str("100.01").is_err());
        assert!(Percent::from_str("ten").is_err());
    }

    #[test]
    fn whole_saturates() {
        assert_eq!(Percent::whole(0), Percent::new(Decimal::ZERO).unwrap());
        assert_eq!(
            Percent::whole(100),
            Percent::new(Decimal::ONE_HUNDRED).unwrap(),
        );
        assert_eq!(Percent::whole(250), Percent::whole(100));
    }

    #[test]
    fn applies() {
        assert_eq!(
            Percent::whole(10).of(decimal("21000000")),
            decimal("2100000"),
        );
        assert_eq!(
            Percent::whole(11).of(decimal("23100000")),
            decimal("2541000"),
        );
        assert_eq!(Percent::whole(11).of(decimal("5")), decimal("0.55"));
    }

    #[test]
    fn to_string() {
        assert_eq!(Percent::whole(10).to_string(), "10%");
        assert_eq!(Percent::from_str("12.5").unwrap().to_string(), "12.5%");
    }
}
