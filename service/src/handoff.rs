//! Handoff of a completed [`Draft`] to the concierge.

use std::fmt::{self, Write as _};

use smart_default::SmartDefault;

use crate::domain::{Draft, PriceQuote};

/// Placeholder rendered instead of an empty optional field.
pub const PLACEHOLDER: &str = "None";

/// Separator line between the message sections.
const SEPARATOR: &str = "--------------------------------";

/// Handoff configuration.
#[derive(Clone, Debug, Eq, PartialEq, SmartDefault)]
pub struct Config {
    /// Brand name put into the message header.
    #[default("StayinUBUD".to_owned())]
    pub brand: String,

    /// Messaging account of the concierge receiving the message.
    #[default("6282269128232".to_owned())]
    pub recipient: String,

    /// Base URL of the messaging deep links.
    #[default("https://wa.me".to_owned())]
    pub base_url: String,
}

impl Config {
    /// Returns a [`Link`] delivering the provided `message` to the
    /// concierge.
    #[must_use]
    pub fn link<'a>(&'a self, message: &'a str) -> Link<'a> {
        Link {
            base_url: &self.base_url,
            recipient: &self.recipient,
            message,
        }
    }
}

/// Reservation summary ready to be sent to the concierge.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Handoff {
    /// Formatted summary text.
    pub message: String,
}

/// Formats the provided [`Draft`] and its [`PriceQuote`] into a summary for
/// the concierge.
///
/// Every field sits on its own labelled line in a fixed order, so the
/// reservation can be reconstructed unambiguously by a human.
#[must_use]
pub fn format(brand: &str, draft: &Draft, quote: &PriceQuote) -> String {
    let property = draft.property();
    let date = |d: Option<String>| d.unwrap_or_else(|| "-".to_owned());
    let optional = |s: &str| {
        let s = s.trim();
        let s = if s.is_empty() { PLACEHOLDER } else { s };
        s.to_owned()
    };

    let mut out = String::with_capacity(512);
    // `fmt::Write` for `String` never fails.
    _ = writeln!(out, "*Reservation Request - {brand}*");
    _ = writeln!(out, "{SEPARATOR}");
    _ = writeln!(out, "*Villa:* {}", property.name);
    _ = writeln!(out, "*Location:* {}", property.location);
    _ = writeln!(out);
    _ = writeln!(out, "*Details:*");
    _ = writeln!(
        out,
        "📅 Check-in: {}",
        date(draft.dates.check_in.map(|d| d.to_dmy())),
    );
    _ = writeln!(
        out,
        "📅 Check-out: {}",
        date(draft.dates.check_out.map(|d| d.to_dmy())),
    );
    _ = writeln!(out, "🌙 Nights: {}", quote.nights);
    _ = writeln!(
        out,
        "👥 Guests: {} Adults, {} Children",
        draft.guests.adults(),
        draft.guests.children(),
    );
    _ = writeln!(out);
    _ = writeln!(out, "*Guest Info:*");
    _ = writeln!(out, "👤 Name: {}", draft.contact.full_name());
    _ = writeln!(out, "📧 Email: {}", draft.contact.email.trim());
    _ = writeln!(out, "📱 Phone: {}", optional(&draft.contact.phone));
    _ = writeln!(out);
    _ = writeln!(out, "*Payment Estimate:*");
    _ = writeln!(out, "💰 Total: {}", quote.total);
    _ = writeln!(out);
    _ = writeln!(out, "*Special Requests:*");
    _ = writeln!(out, "{}", optional(&draft.contact.special_requests));
    _ = writeln!(out, "{SEPARATOR}");
    _ = write!(out, "I would like to check availability for these dates.");
    out
}

/// Messaging deep link opening a chat with the concierge, prefilled with a
/// message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Link<'a> {
    /// Base URL of the messaging service.
    base_url: &'a str,

    /// Messaging account of the concierge.
    recipient: &'a str,

    /// Prefilled message text.
    message: &'a str,
}

impl fmt::Display for Link<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}?text={}",
            self.base_url.trim_end_matches('/'),
            self.recipient,
            urlencoding::encode(self.message),
        )
    }
}

#[cfg(test)]
mod spec {
    use std::{num::NonZeroU8, str::FromStr as _};

    use common::Date;

    use crate::domain::{
        contact::Field,
        property::{Id, Location, Name, NightlyRate},
        Draft, Pricing, Property,
    };

    use super::{format, Config};

    fn property() -> Property {
        Property {
            id: Id::new("1").unwrap(),
            name: Name::new("Villa Amara").unwrap(),
            location: Location::new("Sayan Ridge").unwrap(),
            summary: String::new(),
            nightly_rate: NightlyRate::from_str("7000000IDR").unwrap(),
            max_guests: NonZeroU8::new(6).unwrap(),
            bedrooms: 3,
            bathrooms: 4,
            area: 450,
            amenities: vec![],
        }
    }

    fn draft() -> Draft {
        let mut draft = Draft::new(property());
        draft.dates = draft
            .dates
            .select(Date::from_calendar_date(2026, 3, 10).unwrap())
            .select(Date::from_calendar_date(2026, 3, 13).unwrap());
        draft.contact.set(Field::FirstName, "Jane");
        draft.contact.set(Field::Email, "jane@x.com");
        draft
    }

    fn message(draft: &Draft) -> String {
        let quote = Pricing::default()
            .quote_range(draft.property().nightly_rate, draft.dates);
        format("StayinUBUD", draft, &quote)
    }

    #[test]
    fn formats_sample_reservation() {
        assert_eq!(
            message(&draft()),
            "*Reservation Request - StayinUBUD*\n\
             --------------------------------\n\
             *Villa:* Villa Amara\n\
             *Location:* Sayan Ridge\n\
             \n\
             *Details:*\n\
             📅 Check-in: 10/03/2026\n\
             📅 Check-out: 13/03/2026\n\
             🌙 Nights: 3\n\
             👥 Guests: 2 Adults, 0 Children\n\
             \n\
             *Guest Info:*\n\
             👤 Name: Jane\n\
             📧 Email: jane@x.com\n\
             📱 Phone: None\n\
             \n\
             *Payment Estimate:*\n\
             💰 Total: IDR 25,641,000\n\
             \n\
             *Special Requests:*\n\
             None\n\
             --------------------------------\n\
             I would like to check availability for these dates.",
        );
    }

    #[test]
    fn includes_optional_fields_when_filled() {
        let mut draft = draft();
        draft.contact.set(Field::LastName, "Doe");
        draft.contact.set(Field::Phone, "+62 811 000");
        draft.contact.set(Field::SpecialRequests, "Vegan breakfast");
        let max_guests = draft.property().max_guests;
        draft.guests.add_child(max_guests);

        let msg = message(&draft);

        assert!(msg.contains("Name: Jane Doe\n"));
        assert!(msg.contains("Phone: +62 811 000\n"));
        assert!(msg.contains("*Special Requests:*\nVegan breakfast\n"));
        assert!(msg.contains("Guests: 2 Adults, 1 Children\n"));
        assert!(!msg.contains("None"));
    }

    #[test]
    fn builds_deep_link() {
        let config = Config::default();

        assert_eq!(
            config.link("Hi there & welcome!").to_string(),
            "https://wa.me/6282269128232?text=Hi%20there%20%26%20welcome%21",
        );

        let config = Config {
            base_url: "https://example.com/chat/".to_owned(),
            recipient: "123".to_owned(),
            ..Config::default()
        };
        assert_eq!(
            config.link("a\nb").to_string(),
            "https://example.com/chat/123?text=a%0Ab",
        );
        assert_eq!(
            config.link("📅 Check-in").to_string(),
            "https://example.com/chat/123?text=%F0%9F%93%85%20Check-in",
        );
    }
}
