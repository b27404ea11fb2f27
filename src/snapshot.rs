//! Local JSON snapshots of marketplace records.
//!
//! The upstream API client dumps each entity collection as a JSON array
//! (`auctions.json`, `products.json`, `contracts.json`), optionally
//! gzip-compressed (`auctions.json.gz`). A [`Catalog`] holds the parsed
//! collections for the lifetime of a view.

use crate::config;
use crate::error::{ListingError, Result};
use crate::models::{AuctionRecord, ContractOfferRecord, ProductRecord};
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The record collections a marketplace session works on.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub auctions: Vec<AuctionRecord>,
    pub products: Vec<ProductRecord>,
    pub contracts: Vec<ContractOfferRecord>,
}

impl Catalog {
    pub fn new(
        auctions: Vec<AuctionRecord>,
        products: Vec<ProductRecord>,
        contracts: Vec<ContractOfferRecord>,
    ) -> Self {
        Self {
            auctions,
            products,
            contracts,
        }
    }

    /// Load every entity collection found in `dir`.
    ///
    /// A missing entity file yields an empty collection. A file that does
    /// not parse is an error naming the file.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(ListingError::NotFound(format!(
                "Snapshot directory '{}' does not exist",
                dir.display()
            )));
        }

        let catalog = Self {
            auctions: load_entity(dir, "auctions")?,
            products: load_entity(dir, "products")?,
            contracts: load_entity(dir, "contracts")?,
        };
        info!(
            dir = %dir.display(),
            auctions = catalog.auctions.len(),
            products = catalog.products.len(),
            contracts = catalog.contracts.len(),
            "loaded snapshot"
        );
        Ok(catalog)
    }

    /// Parse a whole catalog from one JSON object with optional
    /// `auctions`, `products` and `contracts` arrays.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_empty(&self) -> bool {
        self.auctions.is_empty() && self.products.is_empty() && self.contracts.is_empty()
    }
}

/// Parse a JSON array of records.
pub fn parse_records<T: DeserializeOwned>(json: &str) -> Result<Vec<T>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of records from `path` (handles `.gz` transparently).
///
/// Any failure to open, decompress, decode or parse the file is reported
/// as an error naming the file.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    read_contents(path)
        .and_then(|contents| parse_records(&contents))
        .map_err(|e| {
            warn!(path = %path.display(), error = %e, "corrupt snapshot file");
            ListingError::InvalidArgument(format!(
                "Snapshot file '{}' is not a valid record list: {}",
                path.file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unknown"),
                e
            ))
        })
}

fn read_contents(path: &Path) -> Result<String> {
    let file = fs::File::open(path)?;
    let mut contents = String::new();
    if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let decoder = GzDecoder::new(BufReader::new(file));
        BufReader::new(decoder).read_to_string(&mut contents)?;
    } else {
        BufReader::new(file).read_to_string(&mut contents)?;
    }
    Ok(contents)
}

/// Locate the snapshot file for `name`, preferring the uncompressed one.
pub fn snapshot_path(dir: &Path, name: &str) -> Option<PathBuf> {
    let files = config::snapshot_files();
    let filename = files.get(name)?;

    let plain = dir.join(filename);
    if plain.exists() {
        return Some(plain);
    }
    let gz = dir.join(format!("{}.gz", filename));
    if gz.exists() {
        return Some(gz);
    }
    None
}

fn load_entity<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<Vec<T>> {
    match snapshot_path(dir, name) {
        Some(path) => read_records(&path),
        None => {
            debug!(dir = %dir.display(), entity = name, "no snapshot file, using empty collection");
            Ok(Vec::new())
        }
    }
}
