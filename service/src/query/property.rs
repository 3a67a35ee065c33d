//! [`Query`] collection related to [`Property`] listings.

use common::operations::By;

use crate::domain::{property, Property};
#[cfg(doc)]
use crate::Query;

use super::CatalogQuery;

/// Queries a [`Property`] by its [`property::Id`].
pub type ById = CatalogQuery<By<Option<Property>, property::Id>>;

/// Queries all the [`Property`] listings in their catalog order.
pub type List = CatalogQuery<By<Vec<Property>, ()>>;
