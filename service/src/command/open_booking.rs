//! [`Command`] for opening a booking [`Flow`] of a [`Property`].

use common::{
    operations::{By, Select},
    Date,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{property, Property},
    infra::{catalog, Catalog},
    Flow, Service,
};

use super::Command;

/// [`Command`] for opening a booking [`Flow`] of a [`Property`].
#[derive(Clone, Debug)]
pub struct OpenBooking {
    /// ID of the [`Property`] to book.
    pub property_id: property::Id,

    /// Current [`Date`] of the guest.
    ///
    /// Nothing before it can be selected within the opened [`Flow`].
    pub today: Date,
}

impl<C> Command<OpenBooking> for Service<C>
where
    C: Catalog<
        Select<By<Option<Property>, property::Id>>,
        Ok = Option<Property>,
        Err = Traced<catalog::Error>,
    >,
{
    type Ok = Flow;
    type Err = Traced<ExecutionError>;

    fn execute(&self, cmd: OpenBooking) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let OpenBooking { property_id, today } = cmd;

        let property = self
            .catalog()
            .execute(Select(By::new(property_id.clone())))
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or_else(|| {
                log::warn!(
                    property = %property_id,
                    "booking of unknown property",
                );
                E::PropertyNotFound(property_id)
            })
            .map_err(tracerr::wrap!())?;

        log::debug!(property = %property.id, %today, "booking opened");

        Ok(Flow::new(
            property,
            today,
            self.config().pricing,
            self.config().handoff.brand.clone(),
        ))
    }
}

/// Error of [`OpenBooking`] [`Command`] execution.
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
