use csv_async::{AsyncReaderBuilder, Trim};
use futures::StreamExt;
use serde::Deserialize;
use tokio::io::AsyncRead;
use crate::error::CatalogError;
use crate::helpers::time_format::{parse_slot_list, parse_time_str};
use crate::models::restaurant::Restaurant;

/// One CSV row as it appears on disk. Times are still strings here.
#[derive(Deserialize, Debug)]
struct CatalogRow {
    name: String,
    city: String,
    neighborhood: String,
    cuisine: String,
    avg_price_per_person: f64,
    rating: f64,
    opens_at: String,
    closes_at: String,
    max_guests_per_slot: u32,
    available_slots: String,
}

impl CatalogRow {
    fn into_restaurant(self) -> Result<Restaurant, CatalogError> {
        let invalid = |field: &'static str, name: &str| {
            let name = name.to_string();
            move |source| CatalogError::InvalidTime { name, field, source }
        };

        let opens_at = parse_time_str(&self.opens_at).map_err(invalid("opens_at", &self.name))?;
        let closes_at = parse_time_str(&self.closes_at).map_err(invalid("closes_at", &self.name))?;
        let available_slots = parse_slot_list(&self.available_slots)
            .map_err(invalid("available_slots", &self.name))?;

        Ok(Restaurant {
            name: self.name,
            city: self.city,
            neighborhood: self.neighborhood,
            cuisine: self.cuisine,
            avg_price_per_person: self.avg_price_per_person,
            rating: self.rating,
            opens_at,
            closes_at,
            max_guests_per_slot: self.max_guests_per_slot,
            available_slots,
        })
    }
}

/// Reads every row of a headered catalog CSV, failing on the first bad row.
pub async fn read_restaurants<R>(reader: R) -> Result<Vec<Restaurant>, CatalogError>
where
    R: AsyncRead + Unpin + Send,
{
    let mut deserializer = AsyncReaderBuilder::new()
        .trim(Trim::All)
        .create_deserializer(reader);
    let mut rows = deserializer.deserialize::<CatalogRow>();

    let mut restaurants = Vec::new();
    while let Some(row) = rows.next().await {
        restaurants.push(row?.into_restaurant()?);
    }

    Ok(restaurants)
}
