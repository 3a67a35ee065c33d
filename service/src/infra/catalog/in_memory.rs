//! [`InMemory`] [`Catalog`] implementation.

use std::{num::NonZeroU8, sync::Arc};

use common::{
    money::Currency,
    operations::{By, Select},
    Money,
};
use rust_decimal::Decimal;
use tracerr::Traced;

use crate::domain::{
    property::{self, Location, Name, NightlyRate},
    Property,
};
use crate::infra::Catalog;

use super::Error;

/// [`Catalog`] of [`Property`] listings kept in memory.
///
/// Listings are returned in the order they were provided.
#[derive(Clone, Debug)]
pub struct InMemory {
    /// [`Property`] listings of this [`InMemory`] [`Catalog`].
    properties: Arc<[Property]>,
}

impl InMemory {
    /// Creates a new [`InMemory`] [`Catalog`] of the provided [`Property`]
    /// listings.
    #[must_use]
    pub fn new(properties: impl IntoIterator<Item = Property>) -> Self {
        Self {
            properties: properties.into_iter().collect(),
        }
    }
}

impl Default for InMemory {
    /// Creates a new [`InMemory`] [`Catalog`] of the Ubud villa collection.
    fn default() -> Self {
        Self::new(
            [
                Seed {
                    id: "1",
                    name: "Villa Amara",
                    location: "Sayan Ridge",
                    summary: "A sanctuary of silence overlooking the Ayung \
                              River valley. Infinity pool included.",
                    rate: 7_000_000,
                    max_guests: 6,
                    bedrooms: 3,
                    bathrooms: 4,
                    area: 450,
                    amenities: &[
                        "Infinity Pool",
                        "Private Chef",
                        "Yoga Shala",
                        "High-speed Fiber Wi-Fi",
                        "Sonos Sound System",
                        "Butler Service",
                    ],
                },
                Seed {
                    id: "2",
                    name: "The Bamboo House",
                    location: "Tegalalang",
                    summary: "Sustainable luxury architecture entirely made \
                              of bamboo, immersed in the jungle.",
                    rate: 5_000_000,
                    max_guests: 4,
                    bedrooms: 2,
                    bathrooms: 2,
                    area: 280,
                    amenities: &[
                        "River Access",
                        "Organic Garden",
                        "Open-air Bathtub",
                        "Daily Housekeeping",
                        "Scooter Rental",
                        "Breakfast Included",
                    ],
                },
                Seed {
                    id: "3",
                    name: "Estate Indrani",
                    location: "Penestanan",
                    summary: "Colonial luxury meets Balinese spirituality. \
                              Featuring a private yoga shala.",
                    rate: 13_500_000,
                    max_guests: 10,
                    bedrooms: 5,
                    bathrooms: 6,
                    area: 800,
                    amenities: &[
                        "Private Driver",
                        "Full Staff",
                        "Media Room",
                        "Massage Room",
                        "Wine Cellar",
                        "BBQ Area",
                    ],
                },
                Seed {
                    id: "4",
                    name: "Villa Komenka",
                    location: "Campuhan",
                    summary: "Modern minimalist design surrounded by heritage \
                              rice terraces.",
                    rate: 8_500_000,
                    max_guests: 8,
                    bedrooms: 4,
                    bathrooms: 5,
                    area: 550,
                    amenities: &[
                        "Lap Pool",
                        "Smart Home System",
                        "Gym",
                        "Roof Terrace",
                        "Work Space",
                        "Concierge",
                    ],
                },
            ]
            .map(Property::from),
        )
    }
}

impl Catalog<Select<By<Option<Property>, property::Id>>> for InMemory {
    type Ok = Option<Property>;
    type Err = Traced<Error>;

    fn execute(
        &self,
        Select(by): Select<By<Option<Property>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.properties.iter().find(|p| p.id == id).cloned())
    }
}

impl Catalog<Select<By<Vec<Property>, ()>>> for InMemory {
    type Ok = Vec<Property>;
    type Err = Traced<Error>;

    fn execute(
        &self,
        _: Select<By<Vec<Property>, ()>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.properties.to_vec())
    }
}

/// Static description of a built-in [`Property`].
struct Seed {
    id: &'static str,
    name: &'static str,
    location: &'static str,
    summary: &'static str,
    rate: u32,
    max_guests: u8,
    bedrooms: u8,
    bathrooms: u8,
    area: u16,
    amenities: &'static [&'static str],
}

impl From<Seed> for Property {
    fn from(seed: Seed) -> Self {
        // SAFETY: Built-in listings are written by hand with trimmed
        //         non-empty texts, numeric IDs, positive whole-rupiah rates
        //         and non-zero capacities.
        #[expect(unsafe_code, reason = "invariants are preserved")]
        let (id, name, location, nightly_rate, max_guests) = unsafe {
            (
                property::Id::new_unchecked(seed.id),
                Name::new_unchecked(seed.name),
                Location::new_unchecked(seed.location),
                NightlyRate::new_unchecked(Money {
                    amount: Decimal::from(seed.rate),
                    currency: Currency::Idr,
                }),
                NonZeroU8::new_unchecked(seed.max_guests),
            )
        };

        Self {
            id,
            name,
            location,
            summary: seed.summary.to_owned(),
            nightly_rate,
            max_guests,
            bedrooms: seed.bedrooms,
            bathrooms: seed.bathrooms,
            area: seed.area,
            amenities: seed.amenities.iter().map(|&a| a.to_owned()).collect(),
        }
    }
}

#[cfg(test)]
mod spec {
    use common::operations::{By, Select};

    use crate::{
        domain::{property, Property},
        infra::Catalog as _,
    };

    use super::InMemory;

    fn by_id(catalog: &InMemory, id: &str) -> Option<Property> {
        catalog
            .execute(Select(By::<Option<Property>, _>::new(
                property::Id::new(id).unwrap(),
            )))
            .unwrap()
    }

    #[test]
    fn lists_built_in_villas_in_order() {
        let all = InMemory::default()
            .execute(Select(By::<Vec<Property>, _>::new(())))
            .unwrap();

        let names = all.iter().map(|p| p.name.to_string()).collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "Villa Amara",
                "The Bamboo House",
                "Estate Indrani",
                "Villa Komenka",
            ],
        );
        assert!(all.iter().all(|p| p.amenities.len() == 6));
    }

    #[test]
    fn finds_by_id() {
        let catalog = InMemory::default();

        let amara = by_id(&catalog, "1").unwrap();
        assert_eq!(amara.location.to_string(), "Sayan Ridge");
        assert_eq!(amara.nightly_rate.to_string(), "IDR 7,000,000");
        assert_eq!(amara.max_guests.get(), 6);

        let indrani = by_id(&catalog, "3").unwrap();
        assert_eq!(indrani.max_guests.get(), 10);

        assert!(by_id(&catalog, "5").is_none());
    }

    #[test]
    fn serves_provided_listings() {
        let amara = by_id(&InMemory::default(), "1").unwrap();
        let catalog = InMemory::new([amara]);

        assert!(by_id(&catalog, "1").is_some());
        assert!(by_id(&catalog, "2").is_none());
    }
}
