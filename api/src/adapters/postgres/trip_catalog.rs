//! PostgreSQL adapter for TripCatalog

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{EntityTrait, LoaderTrait, PaginatorTrait, QueryOrder, QuerySelect};

use super::{to_domain_error, PostgresTravelStore};
use crate::domain::entities::{ClientName, Country, TripId, TripSummary};
use crate::domain::ports::TripCatalog;
use crate::entity::{client, client_trip, country, country_trip, trip};
use crate::error::DomainError;

#[async_trait]
impl TripCatalog for PostgresTravelStore {
    async fn count_trips(&self) -> Result<u64, DomainError> {
        trip::Entity::find()
            .count(&self.db)
            .await
            .map_err(to_domain_error)
    }

    async fn list_trips(&self, offset: u64, limit: u64) -> Result<Vec<TripSummary>, DomainError> {
        let trips = trip::Entity::find()
            .order_by_desc(trip::Column::DateFrom)
            .order_by_asc(trip::Column::IdTrip)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(to_domain_error)?;

        let countries = trips
            .load_many_to_many(country::Entity, country_trip::Entity, &self.db)
            .await
            .map_err(to_domain_error)?;
        let clients = trips
            .load_many_to_many(client::Entity, client_trip::Entity, &self.db)
            .await
            .map_err(to_domain_error)?;

        Ok(trips
            .into_iter()
            .zip(countries)
            .zip(clients)
            .map(|((model, mut countries), mut clients)| {
                countries.sort_by_key(|c| c.id_country);
                clients.sort_by_key(|c| c.id_client);

                TripSummary {
                    id: TripId(model.id_trip),
                    name: model.name,
                    description: model.description,
                    date_from: model.date_from.with_timezone(&Utc),
                    date_to: model.date_to.with_timezone(&Utc),
                    max_people: model.max_people,
                    countries: countries
                        .into_iter()
                        .map(|c| Country { name: c.name })
                        .collect(),
                    clients: clients
                        .into_iter()
                        .map(|c| ClientName {
                            first_name: c.first_name,
                            last_name: c.last_name,
                        })
                        .collect(),
                }
            })
            .collect())
    }
}
