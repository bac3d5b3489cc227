use crate::error::{Error, WriteError};
use crate::util;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// The document written to disk: a single `LSApplicationQueriesSchemes` array.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueriesSchemes {
    #[serde(rename = "LSApplicationQueriesSchemes")]
    schemes: Vec<String>,
}

impl QueriesSchemes {
    pub fn new(schemes: Vec<String>) -> Self {
        QueriesSchemes { schemes }
    }

    pub fn schemes(&self) -> &[String] {
        &self.schemes
    }

    pub fn to_xml(&self) -> Result<Vec<u8>, plist::Error> {
        let mut buf = Vec::new();
        plist::to_writer_xml(&mut buf, self)?;
        Ok(buf)
    }
}

/// Collects the `ios` scheme of every entry, in order.
///
/// Returns `None` when `config` is not an array. Entries that are not objects,
/// or whose `ios` value is missing, not a string or empty, are skipped.
pub fn extract_schemes(config: &Value) -> Option<Vec<String>> {
    let entries = config.as_array()?;

    let schemes: Vec<String> = entries
        .iter()
        .filter_map(ios_scheme)
        .map(str::to_owned)
        .collect();

    let dropped = entries.len() - schemes.len();
    if dropped > 0 {
        tracing::debug!("skipped {} entries without an iOS scheme", dropped);
    }

    Some(schemes)
}

fn ios_scheme(entry: &Value) -> Option<&str> {
    entry
        .as_object()?
        .get("ios")?
        .as_str()
        .filter(|scheme| !scheme.is_empty())
}

pub async fn write_schemes(path: &Path, schemes: &[String]) -> Result<(), Error> {
    let xml = QueriesSchemes::new(schemes.to_vec())
        .to_xml()
        .map_err(WriteError::from)?;
    util::write_atomic(path, &xml).await?;
    Ok(())
}
