//! Fetches the list of known application URL schemes and writes the iOS ones
//! into a property list, ready to be merged into an `Info.plist` under
//! `LSApplicationQueriesSchemes`.

pub mod error;
pub mod logging;
pub mod schemes;
pub(crate) mod util;

pub use error::{Error, WriteError};
pub use schemes::{extract_schemes, write_schemes, QueriesSchemes};

use serde_json::Value;
use std::io::Write;
use std::path::{Path, PathBuf};

/// JSON array of known applications, one object per app with per-platform schemes.
pub const CONFIG_URL: &str = "https://pastebin.com/raw/RnZYEWCA";

/// Written to the current working directory.
pub const FILE_NAME: &str = "schemes.plist";

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Written { path: PathBuf, count: usize },
    /// The configuration parsed but was not an array; nothing was written.
    NotAnArray,
}

/// Accepts any top-level JSON value, fragments included.
pub fn parse(body: &[u8]) -> Result<Value, Error> {
    Ok(serde_json::from_slice(body)?)
}

pub async fn generate(url: &str, path: &Path) -> Result<Outcome, Error> {
    let body = util::fetch(url).await?;
    let config = parse(&body)?;
    store(&config, path).await
}

async fn store(config: &Value, path: &Path) -> Result<Outcome, Error> {
    let schemes = match extract_schemes(config) {
        Some(schemes) => schemes,
        None => {
            tracing::warn!("configuration is not a JSON array, not writing {}", path.display());
            return Ok(Outcome::NotAnArray);
        }
    };

    write_schemes(path, &schemes).await?;
    Ok(Outcome::Written {
        path: path.to_owned(),
        count: schemes.len(),
    })
}

/// Runs [`generate`], printing a status line for each step to `out`.
///
/// Pipeline failures are reported to `out` and never returned; the only
/// error is failing to write to `out` itself.
pub async fn run_and_report(url: &str, path: &Path, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "☁️ Fetching configuration from server...")?;

    let result = generate(url, path).await;
    if let Err(e) = &result {
        tracing::error!("{}", e);
    }

    match result {
        Err(Error::Fetch(_)) => {
            writeln!(out, "❌ Fetching configuration from remote server failed.")?;
        }
        Err(Error::Parse(_)) => {
            writeln!(out, "✔︎ Configuration download successful.")?;
            writeln!(out, "❌ Parsing downloaded content failed. Doesn't seem to be JSON.")?;
        }
        Ok(Outcome::NotAnArray) => {
            writeln!(out, "✔︎ Configuration download successful.")?;
        }
        Ok(Outcome::Written { path, count }) => {
            tracing::debug!("wrote {} schemes to {}", count, path.display());
            writeln!(out, "✔︎ Configuration download successful.")?;
            writeln!(out, "💾 Saving schemes to file {}", path.display())?;
            writeln!(out, "Done. Thanks. Bye. 🎉")?;
        }
        Err(Error::Write(_)) => {
            writeln!(out, "✔︎ Configuration download successful.")?;
            writeln!(out, "💾 Saving schemes to file {}", path.display())?;
            writeln!(out, "❌ Error while writing file to disk.")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_fragments() {
        assert_eq!(parse(b"\"playrts\"").expect("string"), Value::from("playrts"));
        assert_eq!(parse(b"3").expect("number"), Value::from(3));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(parse(b"not json"), Err(Error::Parse(_))));
        assert!(matches!(parse(b""), Err(Error::Parse(_))));
    }

    #[tokio::test]
    async fn store_skips_non_arrays() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(FILE_NAME);

        let outcome = store(&serde_json::json!({"ios": "app1"}), &path)
            .await
            .expect("store");

        assert_eq!(outcome, Outcome::NotAnArray);
        assert!(!path.exists());
    }
}
