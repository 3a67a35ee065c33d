//! [`Guests`] definitions.

use crate::domain::property::Capacity;

/// Breakdown of guests staying at a [`Property`].
///
/// Children count against the [`Property`] capacity together with adults, so
/// `adults + children <= max_guests` always holds, as does `adults >= 1`.
/// Every adjustment is clamped into these bounds instead of failing.
///
/// [`Property`]: crate::domain::Property
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Guests {
    /// Number of adults.
    adults: u8,

    /// Number of children.
    children: u8,
}

impl Guests {
    /// Number of adults a new booking starts with.
    pub const DEFAULT_ADULTS: u8 = 2;

    /// Creates a new [`Guests`] breakdown for a [`Property`] of the provided
    /// capacity.
    ///
    /// [`Property`]: crate::domain::Property
    #[must_use]
    pub fn new(max_guests: Capacity) -> Self {
        Self {
            adults: Self::DEFAULT_ADULTS.min(max_guests.get()),
            children: 0,
        }
    }

    /// Returns the number of adults.
    #[must_use]
    pub const fn adults(&self) -> u8 {
        self.adults
    }

    /// Returns the number of children.
    #[must_use]
    pub const fn children(&self) -> u8 {
        self.children
    }

    /// Returns the total number of guests.
    #[must_use]
    pub fn total(&self) -> u8 {
        self.adults.saturating_add(self.children)
    }

    /// Adds an adult, unless the capacity is already reached.
    pub fn add_adult(&mut self, max_guests: Capacity) {
        if self.total() < max_guests.get() {
            self.adults += 1;
        }
    }

    /// Removes an adult, keeping at least one.
    pub fn remove_adult(&mut self) {
        if self.adults > 1 {
            self.adults -= 1;
        }
    }

    /// Adds a child, unless the capacity is already reached.
    pub fn add_child(&mut self, max_guests: Capacity) {
        if self.total() < max_guests.get() {
            self.children += 1;
        }
    }

    /// Removes a child, if any.
    pub fn remove_child(&mut self) {
        self.children = self.children.saturating_sub(1);
    }
}
