//! [`Flow`] of a booking widget.

use common::Date;
use derive_more::Display;
use tracing as log;

use crate::{
    domain::{contact, DateRange, Draft, PriceQuote, Pricing, Property, Step},
    handoff::{self, Handoff},
};

/// Booking flow driving a single [`Draft`] through its [`Step`]s.
///
/// The flow is linear: `Dates -> Details -> Review`, ending with either a
/// [`Handoff`] or a discarded [`Draft`]. Every [`Action`] is applied through
/// [`Flow::apply()`], which never fails: an [`Action`] whose guard isn't
/// satisfied is refused and leaves the [`Flow`] untouched.
#[derive(Clone, Debug)]
pub struct Flow {
    /// [`Draft`] being filled in.
    draft: Draft,

    /// Indicator whether the guest is being asked to confirm the handoff.
    confirming: bool,

    /// [`Date`] before which nothing can be selected.
    today: Date,

    /// [`Pricing`] used for quoting the [`Draft`].
    pricing: Pricing,

    /// Brand name put into the [`Handoff`] message.
    brand: String,
}

impl Flow {
    /// Opens a new [`Flow`] for booking the provided [`Property`].
    #[must_use]
    pub fn new(
        property: Property,
        today: Date,
        pricing: Pricing,
        brand: impl Into<String>,
    ) -> Self {
        Self {
            draft: Draft::new(property),
            confirming: false,
            today,
            pricing,
            brand: brand.into(),
        }
    }

    /// Returns the [`Draft`] of this [`Flow`].
    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Returns the current [`Step`] of this [`Flow`].
    #[must_use]
    pub fn step(&self) -> Step {
        self.draft.step
    }

    /// Indicates whether this [`Flow`] awaits the handoff confirmation.
    #[must_use]
    pub fn is_confirming(&self) -> bool {
        self.confirming
    }

    /// Returns the [`PriceQuote`] of the current [`Draft`].
    #[must_use]
    pub fn quote(&self) -> PriceQuote {
        self.pricing
            .quote_range(self.draft.property().nightly_rate, self.draft.dates)
    }

    /// Returns the message the [`Draft`] would be handed off with right now.
    #[must_use]
    pub fn preview(&self) -> String {
        handoff::format(&self.brand, &self.draft, &self.quote())
    }

    /// Applies the provided [`Action`] to this [`Flow`].
    pub fn apply(&mut self, action: Action) -> Transition {
        let from = self.draft.step;
        let name = action.name();

        let transition =
            self.transit(action).unwrap_or_else(Transition::Blocked);

        let property = self.draft.property().id.clone();
        match &transition {
            Transition::Blocked(reason) => log::debug!(
                %property,
                %from,
                action = name,
                "booking action refused: {reason}",
            ),
            Transition::Dispatched(_) => log::info!(
                %property,
                "reservation request handed off to concierge",
            ),
            Transition::Applied | Transition::Closed => log::debug!(
                %property,
                %from,
                to = %self.draft.step,
                action = name,
                "booking action applied",
            ),
        }

        transition
    }

    /// Performs the provided [`Action`], if its guard is satisfied.
    fn transit(&mut self, action: Action) -> Result<Transition, Blocked> {
        use Action as A;

        match action {
            A::SelectDate(date) => {
                self.require(Step::Dates)?;
                if !DateRange::is_selectable(date, self.today) {
                    return Err(Blocked::PastDate(date));
                }
                self.draft.dates = self.draft.dates.select(date);
            }
            A::AddAdult => {
                self.require(Step::Dates)?;
                let max_guests = self.draft.property().max_guests;
                self.draft.guests.add_adult(max_guests);
            }
            A::RemoveAdult => {
                self.require(Step::Dates)?;
                self.draft.guests.remove_adult();
            }
            A::AddChild => {
                self.require(Step::Dates)?;
                let max_guests = self.draft.property().max_guests;
                self.draft.guests.add_child(max_guests);
            }
            A::RemoveChild => {
                self.require(Step::Dates)?;
                self.draft.guests.remove_child();
            }
            A::Fill(field, value) => {
                self.require(Step::Details)?;
                self.draft.contact.set(field, value);
            }
            A::Advance => match self.draft.step {
                Step::Dates => {
                    if !self.draft.dates.is_complete() {
                        return Err(Blocked::NoNights);
                    }
                    self.draft.step = Step::Details;
                }
                Step::Details => {
                    if !self.draft.contact.is_complete() {
                        return Err(Blocked::MissingContact);
                    }
                    self.draft.step = Step::Review;
                }
                Step::Review => return Err(Blocked::WrongStep(Step::Review)),
            },
            A::Back => match self.draft.step {
                Step::Dates => return Err(Blocked::WrongStep(Step::Dates)),
                Step::Details => self.draft.step = Step::Dates,
                Step::Review => {
                    self.confirming = false;
                    self.draft.step = Step::Details;
                }
            },
            A::RequestDispatch => {
                self.require(Step::Review)?;
                self.confirming = true;
            }
            A::CancelDispatch => {
                self.require_confirming()?;
                self.confirming = false;
            }
            A::ConfirmDispatch => {
                self.require_confirming()?;
                let message = self.preview();
                self.close();
                return Ok(Transition::Dispatched(Handoff { message }));
            }
            A::Close => {
                self.close();
                return Ok(Transition::Closed);
            }
        }
        Ok(Transition::Applied)
    }

    /// Ensures this [`Flow`] is at the provided [`Step`].
    fn require(&self, step: Step) -> Result<(), Blocked> {
        if self.draft.step == step {
            Ok(())
        } else {
            Err(Blocked::WrongStep(self.draft.step))
        }
    }

    /// Ensures this [`Flow`] awaits the handoff confirmation.
    fn require_confirming(&self) -> Result<(), Blocked> {
        if self.draft.step == Step::Review && self.confirming {
            Ok(())
        } else {
            Err(Blocked::NotConfirming)
        }
    }

    /// Discards the [`Draft`] and returns to the first [`Step`].
    fn close(&mut self) {
        self.draft.reset();
        self.confirming = false;
    }
}

/// Action performed by a guest within a [`Flow`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Action {
    /// Click on a calendar day.
    SelectDate(Date),

    /// Increment of the number of adults.
    AddAdult,

    /// Decrement of the number of adults.
    RemoveAdult,

    /// Increment of the number of children.
    AddChild,

    /// Decrement of the number of children.
    RemoveChild,

    /// Input into a contact field.
    Fill(contact::Field, String),

    /// Move to the next [`Step`].
    Advance,

    /// Move to the previous [`Step`].
    Back,

    /// Ask for the handoff confirmation.
    RequestDispatch,

    /// Confirm the handoff.
    ConfirmDispatch,

    /// Dismiss the handoff confirmation.
    CancelDispatch,

    /// Close the widget, discarding the [`Draft`].
    Close,
}

impl Action {
    /// Returns a short name of this [`Action`] suitable for logs.
    ///
    /// Unlike [`Debug`], never includes guest input.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SelectDate(_) => "select_date",
            Self::AddAdult => "add_adult",
            Self::RemoveAdult => "remove_adult",
            Self::AddChild => "add_child",
            Self::RemoveChild => "remove_child",
            Self::Fill(..) => "fill",
            Self::Advance => "advance",
            Self::Back => "back",
            Self::RequestDispatch => "request_dispatch",
            Self::ConfirmDispatch => "confirm_dispatch",
            Self::CancelDispatch => "cancel_dispatch",
            Self::Close => "close",
        }
    }
}

/// Outcome of applying an [`Action`] to a [`Flow`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Transition {
    /// [`Action`] was applied.
    Applied,

    /// [`Action`] was refused, leaving the [`Flow`] untouched.
    Blocked(Blocked),

    /// [`Draft`] was handed off and the [`Flow`] was reset.
    Dispatched(Handoff),

    /// [`Draft`] was discarded and the [`Flow`] was reset.
    Closed,
}

/// Reason of refusing an [`Action`].
#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum Blocked {
    /// [`Action`] isn't available at the current [`Step`].
    #[display("not available at the `{_0}` step")]
    WrongStep(Step),

    /// Selected [`Date`] is in the past.
    #[display("`{_0}` is in the past")]
    PastDate(Date),

    /// Selected dates don't span a single night.
    #[display("check-in and check-out must span at least one night")]
    NoNights,

    /// Contact details are insufficient to reach the guest.
    #[display("first name and email are required")]
    MissingContact,

    /// Handoff wasn't requested.
    #[display("handoff confirmation was not requested")]
    NotConfirming,
}
