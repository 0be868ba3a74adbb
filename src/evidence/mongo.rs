//! MongoDB-backed collection inspector
//!
//! Thin adapter over the official driver's sync API. The connection
//! pool is owned by the inspector value and released when it drops, so
//! every exit path from the database-dependent section gives the
//! handle back.

use crate::config::GraderConfig;
use crate::evidence::CollectionInspector;
use crate::types::{GraderError, IndexKey, KeyMarker, Result};
use mongodb::bson::{Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::sync::{Client, Collection};
use std::time::Duration;

/// How long to wait for a reachable server before giving up. Keeps an
/// unreachable database from stalling the whole grading run.
const SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

pub struct MongoInspector {
    collection: Collection<Document>,
}

impl MongoInspector {
    /// Build an inspector for the configured database and collection.
    /// The driver connects lazily, so failures surface on the first
    /// query rather than here (bad URIs excepted).
    pub fn connect(config: &GraderConfig) -> Result<Self> {
        let mut options = ClientOptions::parse(&config.mongo_url)
            .map_err(|e| GraderError::Database(e.to_string()))?;
        options.server_selection_timeout = Some(SERVER_SELECTION_TIMEOUT);
        let client =
            Client::with_options(options).map_err(|e| GraderError::Database(e.to_string()))?;
        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);
        Ok(Self { collection })
    }
}

impl CollectionInspector for MongoInspector {
    fn count_documents(&self) -> Result<u64> {
        self.collection
            .count_documents(None, None)
            .map_err(|e| GraderError::Database(e.to_string()))
    }

    fn list_indexes(&self) -> Result<Vec<IndexKey>> {
        let cursor = self
            .collection
            .list_indexes(None)
            .map_err(|e| GraderError::Database(e.to_string()))?;
        let mut keys = Vec::new();
        for model in cursor {
            let model = model.map_err(|e| GraderError::Database(e.to_string()))?;
            keys.push(index_key_from_document(&model.keys));
        }
        Ok(keys)
    }
}

/// Convert a server-reported index key document into an [`IndexKey`],
/// preserving field order. BSON documents keep insertion order, which
/// the compound-index match relies on.
fn index_key_from_document(doc: &Document) -> IndexKey {
    IndexKey::new(
        doc.iter()
            .map(|(field, value)| (field.clone(), marker_from_bson(value)))
            .collect(),
    )
}

fn marker_from_bson(value: &Bson) -> KeyMarker {
    match value {
        Bson::Int32(1) | Bson::Int64(1) => KeyMarker::Ascending,
        Bson::Int32(-1) | Bson::Int64(-1) => KeyMarker::Descending,
        Bson::Double(d) if *d == 1.0 => KeyMarker::Ascending,
        Bson::Double(d) if *d == -1.0 => KeyMarker::Descending,
        Bson::String(s) if s == "text" => KeyMarker::Text,
        Bson::String(s) => KeyMarker::Other(s.clone()),
        other => KeyMarker::Other(other.to_string()),
    }
}
