//! [`Property`] definitions.

use std::{num::NonZeroU8, str::FromStr};

use common::Money;
use derive_more::{AsRef, Display, Into};
use rust_decimal::Decimal;

/// Bookable villa listing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Property {
    /// ID of this [`Property`].
    pub id: Id,

    /// [`Name`] of this [`Property`].
    pub name: Name,

    /// [`Location`] of this [`Property`].
    pub location: Location,

    /// Short description of this [`Property`].
    pub summary: String,

    /// [`NightlyRate`] of this [`Property`].
    pub nightly_rate: NightlyRate,

    /// Maximum number of guests this [`Property`] accommodates.
    pub max_guests: Capacity,

    /// Number of bedrooms in this [`Property`].
    pub bedrooms: u8,

    /// Number of bathrooms in this [`Property`].
    pub bathrooms: u8,

    /// Living area of this [`Property`] in square meters.
    pub area: u16,

    /// Amenities offered by this [`Property`].
    pub amenities: Vec<String>,
}

/// Maximum occupancy of a [`Property`].
pub type Capacity = NonZeroU8;

/// ID of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, Into, PartialEq)]
#[as_ref(forward)]
pub struct Id(String);

impl Id {
    /// Creates a new [`Id`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `id` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates a new [`Id`] if the given `id` is valid.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        Self::check(&id).then_some(Self(id))
    }

    /// Checks whether the given `id` is a valid [`Id`].
    fn check(id: impl AsRef<str>) -> bool {
        let id = id.as_ref();
        !id.is_empty()
            && id.len() <= 64
            && id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    }
}

impl FromStr for Id {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Id`")
    }
}

/// Name of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Name(String);

impl Name {
    /// Creates a new [`Name`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `name` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates a new [`Name`] if the given `name` is valid.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        Self::check(&name).then_some(Self(name))
    }

    /// Checks whether the given `name` is a valid [`Name`].
    fn check(name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        name.trim() == name && !name.is_empty() && name.len() <= 128
    }
}

impl FromStr for Name {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Name`")
    }
}

/// Location of a [`Property`].
#[derive(AsRef, Clone, Debug, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Location(String);

impl Location {
    /// Creates a new [`Location`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `location` matches the format.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub unsafe fn new_unchecked(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    /// Creates a new [`Location`] if the given `location` is valid.
    #[must_use]
    pub fn new(location: impl Into<String>) -> Option<Self> {
        let location = location.into();
        Self::check(&location).then_some(Self(location))
    }

    /// Checks whether the given `location` is a valid [`Location`].
    fn check(location: impl AsRef<str>) -> bool {
        let location = location.as_ref();
        location.trim() == location
            && !location.is_empty()
            && location.len() <= 128
    }
}

impl FromStr for Location {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or("invalid `Location`")
    }
}

/// Price of a single night at a [`Property`].
///
/// Always a positive amount expressed in whole minor units of its currency,
/// not exceeding [`NightlyRate::MAX_AMOUNT`].
#[derive(Clone, Copy, Debug, Display, Eq, Into, PartialEq)]
pub struct NightlyRate(Money);

impl NightlyRate {
    /// Largest amount a [`NightlyRate`] may have (one trillion).
    ///
    /// Keeps quotes over any calendar span within [`Decimal`] range.
    pub const MAX_AMOUNT: Decimal =
        Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

    /// Creates a new [`NightlyRate`].
    ///
    /// # Safety
    ///
    /// The caller must ensure that the given `rate` is positive, doesn't
    /// exceed [`NightlyRate::MAX_AMOUNT`] and has no fraction smaller than
    /// the minor unit of its currency.
    #[expect(unsafe_code, reason = "bypass")]
    #[must_use]
    pub const unsafe fn new_unchecked(rate: Money) -> Self {
        Self(rate)
    }

    /// Creates a new [`NightlyRate`] if the given `rate` is valid.
    ///
    /// [`None`] is returned for zero, negative or oversized amounts.
    #[must_use]
    pub fn new(rate: Money) -> Option<Self> {
        Self::check(&rate).then_some(Self(rate))
    }

    /// Returns the [`Money`] amount of this [`NightlyRate`].
    #[must_use]
    pub const fn money(&self) -> Money {
        self.0
    }

    /// Checks whether the given `rate` is a valid [`NightlyRate`].
    fn check(rate: &Money) -> bool {
        rate.amount.is_sign_positive()
            && !rate.amount.is_zero()
            && rate.amount <= Self::MAX_AMOUNT
            && rate.round() == *rate
    }
}

impl FromStr for NightlyRate {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(Money::from_str(s)?)
            .ok_or("`NightlyRate` must be positive and bounded")
    }
}
