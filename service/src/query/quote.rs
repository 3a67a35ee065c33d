//! [`Query`] for quoting a stay at a [`Property`].

use common::{
    operations::{By, Select},
    Date,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{property, PriceQuote, Property},
    infra::{catalog, Catalog},
    Service,
};

use super::Query;

/// [`Query`] for quoting a stay at a [`Property`] between two dates.
#[derive(Clone, Debug)]
pub struct QuotePrice {
    /// ID of the [`Property`] to quote.
    pub property_id: property::Id,

    /// Arrival [`Date`].
    pub check_in: Date,

    /// Departure [`Date`].
    pub check_out: Date,
}

impl<C> Query<QuotePrice> for Service<C>
where
    C: Catalog<
        Select<By<Option<Property>, property::Id>>,
        Ok = Option<Property>,
        Err = Traced<catalog::Error>,
    >,
{
    type Ok = PriceQuote;
    type Err = Traced<ExecutionError>;

    fn execute(&self, query: QuotePrice) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let QuotePrice {
            property_id,
            check_in,
            check_out,
        } = query;

        let property = self
            .catalog()
            .execute(Select(By::new(property_id.clone())))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotFound(property_id))
            .map_err(tracerr::wrap!())?;

        let quote = self.config().pricing.quote(
            property.nightly_rate,
            Some(check_in),
            Some(check_out),
        );
        log::debug!(
            property = %property.id,
            %check_in,
            %check_out,
            nights = quote.nights,
            total = %quote.total,
            "stay quoted",
        );

        Ok(quote)
    }
}

/// Error of [`QuotePrice`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Catalog`] error.
    #[display("`Catalog` operation failed: {_0}")]
    #[from]
    Catalog(catalog::Error),

    /// [`Property`] with the provided ID does not exist.
    #[display("`Property(id: {_0})` does not exist")]
    PropertyNotFound(#[error(not(source))] property::Id),
}
