//! Imagery object store (S3 compatible) with lazy prefix listing.

use futures::stream::BoxStream;
use futures::{StreamExt, TryStreamExt};
use object_store::{aws::AmazonS3Builder, path::Path, ObjectStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

use goes_common::{GoesError, GoesResult};

/// Configuration for the imagery store connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageryStoreConfig {
    /// S3/MinIO endpoint URL (None for AWS default endpoints)
    pub endpoint: Option<String>,
    /// Bucket name
    pub bucket: String,
    /// AWS region
    pub region: String,
    /// Access key ID (None for anonymous access)
    pub access_key_id: Option<String>,
    /// Secret access key (None for anonymous access)
    pub secret_access_key: Option<String>,
    /// Allow HTTP (for local MinIO)
    pub allow_http: bool,
    /// Skip request signing (public buckets such as noaa-goes16)
    pub skip_signature: bool,
}

impl Default for ImageryStoreConfig {
    fn default() -> Self {
        // The public NOAA GOES-East archive, readable without credentials
        Self {
            endpoint: None,
            bucket: "noaa-goes16".to_string(),
            region: "us-east-1".to_string(),
            access_key_id: None,
            secret_access_key: None,
            allow_http: false,
            skip_signature: true,
        }
    }
}

/// Object store client for stored imagery.
pub struct ImageryStore {
    store: Arc<dyn ObjectStore>,
    bucket: String,
}

impl ImageryStore {
    /// Create a new imagery store client from config.
    pub fn new(config: &ImageryStoreConfig) -> GoesResult<Self> {
        let mut builder = AmazonS3Builder::new()
            .with_bucket_name(&config.bucket)
            .with_region(&config.region);

        if let Some(endpoint) = &config.endpoint {
            builder = builder.with_endpoint(endpoint);
        }
        if let Some(key_id) = &config.access_key_id {
            builder = builder.with_access_key_id(key_id);
        }
        if let Some(secret) = &config.secret_access_key {
            builder = builder.with_secret_access_key(secret);
        }
        if config.allow_http {
            builder = builder.with_allow_http(true);
        }
        if config.skip_signature {
            builder = builder.with_skip_signature(true);
        }

        let store = builder
            .build()
            .map_err(|e| GoesError::Storage(format!("Failed to create S3 client: {}", e)))?;

        Ok(Self {
            store: Arc::new(store),
            bucket: config.bucket.clone(),
        })
    }

    /// Wrap an existing object store implementation.
    ///
    /// Used by tests to run the listing contract against an in-memory store.
    pub fn from_store(store: Arc<dyn ObjectStore>, bucket: impl Into<String>) -> Self {
        Self {
            store,
            bucket: bucket.into(),
        }
    }

    /// Bucket this client reads from.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Lazily list keys under a prefix.
    ///
    /// The stream follows the store's pagination until no continuation
    /// remains; it is restartable per call but not resumable mid-stream.
    /// An empty prefix lists the whole bucket.
    pub fn list_keys(&self, prefix: Option<&str>) -> BoxStream<'_, GoesResult<String>> {
        let prefix_path = prefix.filter(|p| !p.is_empty()).map(Path::from);

        self.store
            .list(prefix_path.as_ref())
            .map_ok(|meta| meta.location.to_string())
            .map_err(|e| GoesError::Storage(format!("List failed: {}", e)))
            .boxed()
    }

    /// List keys under a prefix into a vector.
    #[instrument(skip(self), fields(bucket = %self.bucket))]
    pub async fn list_keys_collected(&self, prefix: Option<&str>) -> GoesResult<Vec<String>> {
        let keys: Vec<String> = self.list_keys(prefix).try_collect().await?;
        debug!(count = keys.len(), "listed imagery keys");
        Ok(keys)
    }

    /// Check if an object exists.
    pub async fn exists(&self, key: &str) -> GoesResult<bool> {
        let location = Path::from(key);

        match self.store.head(&location).await {
            Ok(_) => Ok(true),
            Err(object_store::Error::NotFound { .. }) => Ok(false),
            Err(e) => Err(GoesError::Storage(format!(
                "Failed to check {}: {}",
                key, e
            ))),
        }
    }
}
