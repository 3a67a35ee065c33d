//! Domain definitions.

pub mod contact;
pub mod draft;
pub mod guests;
pub mod property;
pub mod quote;
pub mod stay;

pub use self::{
    contact::Contact,
    draft::{Draft, Step},
    guests::Guests,
    property::Property,
    quote::{PriceQuote, Pricing},
    stay::DateRange,
};
