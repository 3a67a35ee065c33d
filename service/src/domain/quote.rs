//! [`PriceQuote`] definitions.

use common::{money::Currency, DateOf, Money, Percent};
use rust_decimal::Decimal;
use smart_default::SmartDefault;

use crate::domain::{property::NightlyRate, stay::DateRange};

/// Pricing rules applied on top of a [`NightlyRate`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, SmartDefault)]
pub struct Pricing {
    /// Service fee charged on the subtotal.
    #[default(Percent::whole(10))]
    pub service_fee: Percent,

    /// Tax charged on the subtotal plus the service fee.
    #[default(Percent::whole(11))]
    pub tax: Percent,
}

impl Pricing {
    /// Calculates a [`PriceQuote`] for staying between the provided dates at
    /// the provided [`NightlyRate`].
    ///
    /// A zeroed [`PriceQuote`] is returned if either date is missing or the
    /// departure is not after the arrival.
    ///
    /// Every component is rounded to whole minor units of the currency (half
    /// away from zero) and the total is the sum of the rounded components.
    #[must_use]
    pub fn quote<I: ?Sized, O: ?Sized>(
        &self,
        rate: NightlyRate,
        check_in: Option<DateOf<I>>,
        check_out: Option<DateOf<O>>,
    ) -> PriceQuote {
        let rate = rate.money();
        let nights = DateRange::nights_between(check_in, check_out);
        if nights == 0 {
            return PriceQuote::zero(rate.currency);
        }

        let money = |amount: Decimal| {
            Money {
                amount,
                currency: rate.currency,
            }
            .round()
        };

        let subtotal = money(rate.amount * Decimal::from(nights));
        let service_fee = money(self.service_fee.of(subtotal.amount));
        let taxes =
            money(self.tax.of(subtotal.amount + service_fee.amount));
        let total =
            money(subtotal.amount + service_fee.amount + taxes.amount);

        PriceQuote {
            nights,
            subtotal,
            service_fee,
            taxes,
            total,
        }
    }

    /// Calculates a [`PriceQuote`] for the provided [`DateRange`].
    #[must_use]
    pub fn quote_range(
        &self,
        rate: NightlyRate,
        range: DateRange,
    ) -> PriceQuote {
        self.quote(rate, range.check_in, range.check_out)
    }
}

/// Price breakdown of a stay.
///
/// Derived from a [`NightlyRate`] and a [`DateRange`], never edited directly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PriceQuote {
    /// Number of nights of the stay.
    pub nights: u32,

    /// [`NightlyRate`] multiplied by the number of nights.
    pub subtotal: Money,

    /// Service fee charged on the subtotal.
    pub service_fee: Money,

    /// Taxes charged on the subtotal plus the service fee.
    pub taxes: Money,

    /// Amount the guest pays.
    pub total: Money,
}

impl PriceQuote {
    /// Creates a new zeroed [`PriceQuote`] in the provided [`Currency`].
    #[must_use]
    pub const fn zero(currency: Currency) -> Self {
        Self {
            nights: 0,
            subtotal: Money::zero(currency),
            service_fee: Money::zero(currency),
            taxes: Money::zero(currency),
            total: Money::zero(currency),
        }
    }

    /// Indicates whether this [`PriceQuote`] covers no nights.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.nights == 0
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use common::{money::Currency, Date, Money, Percent};
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    use crate::domain::property::NightlyRate;

    use super::{PriceQuote, Pricing};

    fn rate(s: &str) -> NightlyRate {
        NightlyRate::from_str(s).unwrap()
    }

    fn day(d: u8) -> Date {
        Date::from_calendar_date(2026, 3, d).unwrap()
    }

    fn idr(amount: u64) -> Money {
        Money {
            amount: Decimal::from(amount),
            currency: Currency::Idr,
        }
    }

    #[test]
    fn quotes_sample_stay() {
        let q = Pricing::default().quote(
            rate("7000000IDR"),
            Some(day(10)),
            Some(day(13)),
        );

        assert_eq!(
            q,
            PriceQuote {
                nights: 3,
                subtotal: idr(21_000_000),
                service_fee: idr(2_100_000),
                taxes: idr(2_541_000),
                total: idr(25_641_000),
            },
        );
        assert_eq!(q.total.to_string(), "IDR 25,641,000");
    }

    #[test]
    fn zero_for_incomplete_or_inverted_dates() {
        let pricing = Pricing::default();
        let r = rate("7000000IDR");
        let zero = PriceQuote::zero(Currency::Idr);

        assert_eq!(pricing.quote(r, None::<Date>, Some(day(13))), zero);
        assert_eq!(pricing.quote(r, Some(day(10)), None::<Date>), zero);
        assert_eq!(pricing.quote(r, None::<Date>, None::<Date>), zero);
        assert_eq!(pricing.quote(r, Some(day(10)), Some(day(10))), zero);
        assert_eq!(pricing.quote(r, Some(day(13)), Some(day(10))), zero);
        assert!(zero.is_zero());
        assert!(zero.total.is_zero());
    }

    #[test]
    fn is_idempotent() {
        let pricing = Pricing::default();
        let r = rate("5000000IDR");

        assert_eq!(
            pricing.quote(r, Some(day(1)), Some(day(8))),
            pricing.quote(r, Some(day(1)), Some(day(8))),
        );
    }

    #[test]
    fn applies_configured_rates() {
        let pricing = Pricing {
            service_fee: Percent::whole(0),
            tax: Percent::from_str("12.5").unwrap(),
        };
        let q = pricing.quote(rate("1000000IDR"), Some(day(1)), Some(day(3)));

        assert_eq!(q.subtotal, idr(2_000_000));
        assert_eq!(q.service_fee, idr(0));
        assert_eq!(q.taxes, idr(250_000));
        assert_eq!(q.total, idr(2_250_000));
    }

    #[test]
    fn rounds_components_half_away_from_zero() {
        // 5 -> fee 0.5 -> 1; (5 + 1) * 11% = 0.66 -> 1.
        let q =
            Pricing::default().quote(rate("5IDR"), Some(day(1)), Some(day(2)));

        assert_eq!(q.service_fee, idr(1));
        assert_eq!(q.taxes, idr(1));
        assert_eq!(q.total, idr(7));
    }

    #[test]
    fn quotes_largest_rate_over_centuries() {
        let max = NightlyRate::new(Money {
            amount: NightlyRate::MAX_AMOUNT,
            currency: Currency::Idr,
        })
        .unwrap();
        let q = Pricing {
            service_fee: Percent::whole(100),
            tax: Percent::whole(100),
        }
        .quote(
            max,
            Date::from_calendar_date(-9999, 1, 1),
            Date::from_calendar_date(9999, 12, 31),
        );

        assert_eq!(q.nights, 7_304_484);
        assert_eq!(q.total.amount, q.subtotal.amount * Decimal::from(4));
    }

    proptest! {
        #[test]
        fn components_follow_pricing_rules(
            amount in 1_u64..50_000_000,
            start in 1_u8..20,
            len in 1_u8..9,
        ) {
            let r = NightlyRate::new(idr(amount)).unwrap();
            let q = Pricing::default()
                .quote(r, Some(day(start)), Some(day(start + len)));

            prop_assert_eq!(q.nights, u32::from(len));
            prop_assert_eq!(q.subtotal, idr(amount * u64::from(len)));
            prop_assert_eq!(
                q.total.amount,
                q.subtotal.amount + q.service_fee.amount + q.taxes.amount,
            );
            prop_assert_eq!(
                q.service_fee,
                Money {
                    amount: Percent::whole(10).of(q.subtotal.amount),
                    currency: Currency::Idr,
                }
                .round(),
            );
            prop_assert_eq!(
                q.taxes,
                Money {
                    amount: Percent::whole(11)
                        .of(q.subtotal.amount + q.service_fee.amount),
                    currency: Currency::Idr,
                }
                .round(),
            );
            prop_assert!(q.service_fee.amount >= Decimal::ZERO);
            prop_assert!(q.taxes.amount >= Decimal::ZERO);
            prop_assert!(q.total.amount.is_integer());
        }
    }
}
