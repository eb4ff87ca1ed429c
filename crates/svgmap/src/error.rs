pub type Result<T> = std::result::Result<T, Error>;

/// A load failure: the whole document construction fails and no partial
/// document is exposed. Per-element decode anomalies are handled locally
/// during the walk and never surface here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read svg file `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed svg markup: {0}")]
    Xml(#[from] roxmltree::Error),
}
