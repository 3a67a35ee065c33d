//! [`Money`]-related definitions.

use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::define_kind;

/// Amount of money in some [`Currency`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Money {
    /// Amount of this [`Money`].
    pub amount: Decimal,

    /// [`Currency`] of this amount.
    pub currency: Currency,
}

impl Money {
    /// Creates a new zero [`Money`] in the provided [`Currency`].
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// Indicates whether this [`Money`] has a zero amount.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Rounds this [`Money`] to the minor units of its [`Currency`], with
    /// midpoints rounded away from zero.
    #[must_use]
    pub fn round(self) -> Self {
        Self {
            amount: self.amount.round_dp_with_strategy(
                self.currency.minor_units(),
                RoundingStrategy::MidpointAwayFromZero,
            ),
            currency: self.currency,
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { amount, currency } = self.round();
        let precision = currency.minor_units() as usize;
        let digits = format!("{:.precision$}", amount.abs());
        let (major, minor) = match digits.split_once('.') {
            Some((major, minor)) => (major, Some(minor)),
            None => (digits.as_str(), None),
        };

        write!(f, "{currency} ")?;
        if amount.is_sign_negative() && !amount.is_zero() {
            f.write_str("-")?;
        }
        f.write_str(&group_thousands(major))?;
        if let Some(minor) = minor {
            write!(f, ".{minor}")?;
        }
        Ok(())
    }
}

impl FromStr for Money {
    type Err = &'static str;

    /// Parses either the `{currency} {amount}` form produced by the
    /// [`Display`] implementation, or the compact `{amount}{currency}` form.
    ///
    /// [`Display`]: fmt::Display
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() < 4 {
            return Err("too short");
        }

        let prefixed = s
            .get(..3)
            .is_some_and(|c| c.bytes().all(|b| b.is_ascii_alphabetic()));
        let (currency, amount) = if prefixed {
            (&s[..3], s[3..].trim_start())
        } else {
            let at = s.len() - 3;
            (s.get(at..).ok_or("invalid currency")?, &s[..at])
        };

        let amount = Decimal::from_str(&amount.replace(',', ""))
            .map_err(|_| "invalid amount")?;
        let currency =
            Currency::from_str(currency).map_err(|_| "invalid currency")?;

        Ok(Self { amount, currency })
    }
}

/// Inserts `,` separators between every group of three digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

define_kind! {
    #[doc = "Currency of a [`Money`] amount."]
    enum Currency {
        #[doc = "Indonesian Rupiah."]
        Idr = 1,
    }
}

impl Currency {
    /// Returns the number of fractional digits used by this [`Currency`].
    ///
    /// Rupiah amounts are displayed without fractional subdivision.
    #[must_use]
    pub const fn minor_units(self) -> u32 {
        match self {
            Self::Idr => 0,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::{Currency, Money};

    fn decimal(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn money(amount: &str, currency: Currency) -> Money {
        Money {
            amount: decimal(amount),
            currency,
        }
    }

    #[test]
    fn from_str() {
        assert_eq!(
            Money::from_str("7000000IDR").unwrap(),
            money("7000000", Currency::Idr),
        );
        assert_eq!(
            Money::from_str("IDR 25,641,000").unwrap(),
            money("25641000", Currency::Idr),
        );
        assert_eq!(
            Money::from_str("IDR 1,234.50").unwrap(),
            money("1234.50", Currency::Idr),
        );

        assert!(Money::from_str("123.45").is_err());
        assert!(Money::from_str("123.45ID").is_err());
        assert!(Money::from_str("123.45USD").is_err());
        assert!(Money::from_str("123.45Rupiah").is_err());
        assert!(Money::from_str("IDR").is_err());
        assert!(Money::from_str("IDR abc").is_err());

        assert!(Money::from_str("123.00IDR").is_ok());
        assert!(Money::from_str("123IDR").is_ok());
    }

    #[test]
    fn to_string() {
        assert_eq!(
            money("25641000", Currency::Idr).to_string(),
            "IDR 25,641,000",
        );
        assert_eq!(
            money("7000000", Currency::Idr).to_string(),
            "IDR 7,000,000",
        );
        assert_eq!(money("100", Currency::Idr).to_string(), "IDR 100");
        assert_eq!(money("1000", Currency::Idr).to_string(), "IDR 1,000");
        assert_eq!(money("0", Currency::Idr).to_string(), "IDR 0");
        assert_eq!(money("999.5", Currency::Idr).to_string(), "IDR 1,000");
        assert_eq!(
            money("-1234.4", Currency::Idr).to_string(),
            "IDR -1,234",
        );
    }

    #[test]
    fn round() {
        assert_eq!(
            money("2541000.5", Currency::Idr).round(),
            money("2541001", Currency::Idr),
        );
        assert_eq!(
            money("2541000.49", Currency::Idr).round(),
            money("2541000", Currency::Idr),
        );
        assert_eq!(
            money("-0.5", Currency::Idr).round(),
            money("-1", Currency::Idr),
        );
    }

    #[test]
    fn zero() {
        assert!(Money::zero(Currency::Idr).is_zero());
        assert!(!money("1", Currency::Idr).is_zero());
    }
}
