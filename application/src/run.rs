//! Execution of the command line [`Command`]s.

use std::fmt::Write as _;

use common::Date;
use derive_more::{Display, Error as StdError};
use itertools::Itertools as _;
use service::{
    command::OpenBooking,
    domain::{contact::Field, property, Property, Step},
    flow::{Action, Blocked, Transition},
    query::{self, QuotePrice},
    Command as _, Flow, Query as _,
};
use tracing as log;

use crate::{
    args::{Command, Inquiry, Stay},
    define_error, AsError, Error, Service,
};

define_error! {
    enum InquiryError {
        #[code = "GUESTS_EXCEED_CAPACITY"]
        #[message = "Requested guests exceed the villa capacity"]
        GuestsExceedCapacity,

        #[code = "DISPATCH_FAILED"]
        #[message = "Reservation request was not handed off"]
        NotDispatched,
    }
}

/// Runs the provided [`Command`] against the [`Service`], returning the text
/// to print.
///
/// # Errors
///
/// If the [`Command`] cannot be completed.
pub fn run(service: &Service, command: Command) -> Result<String, Error> {
    match command {
        Command::Villas => villas(service),
        Command::Quote(stay) => quote(service, stay),
        Command::Inquire(inquiry) => inquire(service, inquiry),
    }
}

/// Lists all the [`Property`] listings.
fn villas(service: &Service) -> Result<String, Error> {
    let properties = service
        .execute(query::property::List::by(()))
        .map_err(AsError::into_error)?;

    Ok(properties.iter().map(describe).join("\n\n"))
}

/// Describes the provided [`Property`] in a few lines.
fn describe(p: &Property) -> String {
    format!(
        "[{}] {} ({})\n    {} / night, up to {} guests\n    \
         {} bedrooms, {} bathrooms, {} sqm\n    {}\n    {}",
        p.id,
        p.name,
        p.location,
        p.nightly_rate,
        p.max_guests,
        p.bedrooms,
        p.bathrooms,
        p.area,
        p.summary,
        p.amenities.iter().join(", "),
    )
}

/// Prints the price breakdown of the provided [`Stay`].
fn quote(service: &Service, stay: Stay) -> Result<String, Error> {
    let Stay {
        villa,
        check_in,
        check_out,
    } = stay;

    let quote = service
        .execute(QuotePrice {
            property_id: villa.clone(),
            check_in,
            check_out,
        })
        .map_err(AsError::into_error)?;
    let property = find(service, villa)?;

    let mut out = String::new();
    // `fmt::Write` for `String` never fails.
    _ = writeln!(
        out,
        "{}, {} nights ({} - {})",
        property.name,
        quote.nights,
        check_in.to_dmy(),
        check_out.to_dmy(),
    );
    _ = writeln!(out, "Subtotal:    {}", quote.subtotal);
    _ = writeln!(
        out,
        "Service fee: {} ({})",
        quote.service_fee,
        service.config().pricing.service_fee,
    );
    _ = writeln!(
        out,
        "Taxes:       {} ({})",
        quote.taxes,
        service.config().pricing.tax,
    );
    _ = write!(out, "Total:       {}", quote.total);
    Ok(out)
}

/// Drives a booking [`Flow`] through the provided [`Inquiry`] and returns
/// the handoff message along with its deep link.
fn inquire(service: &Service, inquiry: Inquiry) -> Result<String, Error> {
    let Inquiry {
        stay:
            Stay {
                villa,
                check_in,
                check_out,
            },
        adults,
        children,
        first_name,
        last_name,
        email,
        phone,
        requests,
        today,
    } = inquiry;

    let mut flow = service
        .execute(OpenBooking {
            property_id: villa,
            today: today.unwrap_or_else(Date::today),
        })
        .map_err(AsError::into_error)?;

    _ = perform(&mut flow, Action::SelectDate(check_in))?;
    _ = perform(&mut flow, Action::SelectDate(check_out))?;

    adjust(&mut flow, adults, Action::AddAdult, Action::RemoveAdult, |f| {
        f.draft().guests.adults()
    })?;
    adjust(&mut flow, children, Action::AddChild, Action::RemoveChild, |f| {
        f.draft().guests.children()
    })?;
    _ = perform(&mut flow, Action::Advance)?;

    for (field, value) in [
        (Field::FirstName, Some(first_name)),
        (Field::LastName, last_name),
        (Field::Email, Some(email)),
        (Field::Phone, phone),
        (Field::SpecialRequests, requests),
    ] {
        if let Some(value) = value {
            _ = perform(&mut flow, Action::Fill(field, value))?;
        }
    }
    _ = perform(&mut flow, Action::Advance)?;

    _ = perform(&mut flow, Action::RequestDispatch)?;
    let Transition::Dispatched(handoff) =
        perform(&mut flow, Action::ConfirmDispatch)?
    else {
        return Err(InquiryError::NotDispatched.into());
    };

    let link = service.config().handoff.link(&handoff.message);
    log::info!("reservation request prepared");

    Ok(format!("{}\n\n{link}", handoff.message))
}

/// Applies the provided [`Action`] to the [`Flow`], failing if it's refused.
fn perform(flow: &mut Flow, action: Action) -> Result<Transition, Error> {
    let step = flow.step();
    let name = action.name();
    match flow.apply(action) {
        Transition::Blocked(reason) => Err(Refusal {
            step,
            action: name,
            reason,
        }
        .into_error()),
        t @ (Transition::Applied
        | Transition::Dispatched(_)
        | Transition::Closed) => Ok(t),
    }
}

/// Adjusts a guest counter of the [`Flow`] to the `target` value one
/// [`Action`] at a time.
fn adjust(
    flow: &mut Flow,
    target: u8,
    increment: Action,
    decrement: Action,
    counter: impl Fn(&Flow) -> u8,
) -> Result<(), Error> {
    loop {
        let current = counter(flow);
        let action = match current.cmp(&target) {
            std::cmp::Ordering::Less => increment.clone(),
            std::cmp::Ordering::Greater => decrement.clone(),
            std::cmp::Ordering::Equal => return Ok(()),
        };
        _ = perform(flow, action)?;
        if counter(flow) == current {
            return Err(InquiryError::GuestsExceedCapacity.into());
        }
    }
}

/// Looks up a [`Property`] by its [`property::Id`].
fn find(service: &Service, id: property::Id) -> Result<Property, Error> {
    service
        .execute(query::property::ById::by(id.clone()))
        .map_err(AsError::into_error)?
        .ok_or_else(|| Error {
            code: "PROPERTY_NOT_FOUND",
            message: format!("`Property(id: {id})` does not exist"),
            backtrace: None,
        })
}

/// [`Action`] refused by a booking [`Flow`].
#[derive(Clone, Copy, Debug, Display, StdError)]
#[display("`{action}` refused at the `{step}` step: {reason}")]
pub struct Refusal {
    /// [`Step`] the [`Flow`] was at.
    pub step: Step,

    /// Name of the refused [`Action`].
    pub action: &'static str,

    /// Reason of the refusal.
    pub reason: Blocked,
}

impl AsError for Refusal {
    fn try_as_error(&self) -> Option<Error> {
        Some(Error {
            code: "BOOKING_REFUSED",
            message: self.to_string(),
            backtrace: None,
        })
    }
}
