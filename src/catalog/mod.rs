use std::path::Path;
use std::sync::Arc;
use tokio::io::AsyncRead;
use tracing::info;
use crate::error::CatalogError;
use crate::models::restaurant::Restaurant;

pub mod loader;

/// The read-only restaurant collection. Cloning shares the same records.
#[derive(Clone, Debug)]
pub struct Catalog {
    restaurants: Arc<Vec<Restaurant>>,
}

impl Catalog {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants: Arc::new(restaurants),
        }
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let catalog = Self::from_reader(file).await?;
        info!("Loaded {} restaurants from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub async fn from_reader<R>(reader: R) -> Result<Self, CatalogError>
    where
        R: AsyncRead + Unpin + Send,
    {
        Ok(Self::new(loader::read_restaurants(reader).await?))
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }
}
