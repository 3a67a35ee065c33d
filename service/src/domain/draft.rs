//! [`Draft`] definitions.

use common::define_kind;

use crate::domain::{Contact, DateRange, Guests, Property};

/// Reservation being filled in by a single visitor.
///
/// Lives only as long as the booking widget stays open: it's never persisted
/// or shared.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Draft {
    /// [`Property`] being booked.
    property: Property,

    /// Selected [`DateRange`] of the stay.
    pub dates: DateRange,

    /// [`Guests`] breakdown of the stay.
    pub guests: Guests,

    /// [`Contact`] details of the guest.
    pub contact: Contact,

    /// Current [`Step`] of the booking flow.
    pub step: Step,
}

impl Draft {
    /// Creates a new empty [`Draft`] for booking the provided [`Property`].
    #[must_use]
    pub fn new(property: Property) -> Self {
        Self {
            guests: Guests::new(property.max_guests),
            property,
            dates: DateRange::EMPTY,
            contact: Contact::default(),
            step: Step::Dates,
        }
    }

    /// Returns the [`Property`] being booked by this [`Draft`].
    #[must_use]
    pub fn property(&self) -> &Property {
        &self.property
    }

    /// Discards everything entered into this [`Draft`], keeping only the
    /// [`Property`].
    pub fn reset(&mut self) {
        *self = Self::new(self.property.clone());
    }
}

define_kind! {
    #[doc = "Step of a booking flow."]
    enum Step {
        #[doc = "Picking dates and guests."]
        Dates = 1,

        #[doc = "Filling in contact details."]
        Details = 2,

        #[doc = "Reviewing the reservation before the handoff."]
        Review = 3,
    }
}
