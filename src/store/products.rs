//! Product records and their persistence.

use catalog_sdk::{Product, ProductId};
use dashmap::DashMap;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::observability::metrics;

/// Fields of a product about to be created.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: Option<String>,
}

/// A partial update. `None` leaves the field as it is; for the
/// description, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<Option<String>>,
}

/// A thread-safe product store.
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    inner: Arc<DashMap<ProductId, Product>>,
    /// Highest id handed out so far.
    last_id: Arc<AtomicU64>,
    persistence_path: Option<PathBuf>,
    /// Held for the whole snapshot-and-write of a save.
    save_lock: Arc<Mutex<()>>,
}

impl ProductStore {
    /// Create an empty store.
    pub fn new(persistence_path: Option<PathBuf>) -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
            last_id: Arc::new(AtomicU64::new(0)),
            persistence_path,
            save_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Load from file if it exists; the file becomes the save target.
    pub fn load_from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        let store = Self::new(Some(path.to_path_buf()));

        if path.exists() {
            let reader = BufReader::new(File::open(path)?);
            let products: Vec<Product> = serde_json::from_reader(reader)?;

            let max_id = products.iter().map(|p| p.id.0).max().unwrap_or(0);
            for product in products {
                store.inner.insert(product.id, product);
            }
            store.last_id.store(max_id, Ordering::SeqCst);

            metrics::record_catalog_size(store.inner.len());
            tracing::info!(
                path = %path.display(),
                count = store.inner.len(),
                "Loaded products from file"
            );
        }

        Ok(store)
    }

    /// Write a snapshot to the persistence file, if one is configured.
    ///
    /// Saves run one at a time and the snapshot is taken under the save
    /// lock, so a later save never writes older data. The file is replaced
    /// by renaming a sibling temporary file over it.
    pub fn save_to_file(&self) -> io::Result<()> {
        let Some(path) = &self.persistence_path else {
            return Ok(());
        };
        let _guard = self
            .save_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let products = self.list();
        let tmp = temp_path(path);
        {
            let mut writer = BufWriter::new(File::create(&tmp)?);
            serde_json::to_writer_pretty(&mut writer, &products)?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }
        fs::rename(&tmp, path)?;

        tracing::debug!(path = %path.display(), count = products.len(), "Saved products to file");
        Ok(())
    }

    /// [`save_to_file`](Self::save_to_file) on the blocking thread pool.
    pub async fn save_async(&self) -> io::Result<()> {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.save_to_file())
            .await
            .map_err(io::Error::other)?
    }

    /// All products ordered by id.
    pub fn list(&self) -> Vec<Product> {
        let mut products: Vec<Product> = self.inner.iter().map(|r| r.value().clone()).collect();
        products.sort_by_key(|p| p.id);
        products
    }

    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.inner.get(&id).map(|r| r.value().clone())
    }

    /// Store a new product under the next id.
    pub fn insert(&self, new: NewProduct) -> Product {
        let id = ProductId(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        let product = Product {
            id,
            name: new.name,
            price: new.price,
            description: new.description,
        };
        self.inner.insert(id, product.clone());
        metrics::record_catalog_size(self.inner.len());
        product
    }

    /// Apply `changes` to an existing product.
    pub fn update(&self, id: ProductId, changes: ProductChanges) -> Option<Product> {
        let mut entry = self.inner.get_mut(&id)?;
        let product = entry.value_mut();
        if let Some(name) = changes.name {
            product.name = name;
        }
        if let Some(price) = changes.price {
            product.price = price;
        }
        if let Some(description) = changes.description {
            product.description = description;
        }
        Some(product.clone())
    }

    pub fn remove(&self, id: ProductId) -> Option<Product> {
        let removed = self.inner.remove(&id).map(|(_, p)| p);
        metrics::record_catalog_size(self.inner.len());
        removed
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("products.json"));
    name.push(".tmp");
    path.with_file_name(name)
}
