#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("fetching configuration failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Write(#[from] WriteError),
}

#[derive(thiserror::Error, Debug)]
pub enum WriteError {
    #[error("serializing plist failed: {0}")]
    Serialize(#[from] plist::Error),
    #[error("writing plist failed: {0}")]
    Io(#[from] std::io::Error),
}
