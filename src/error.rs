use std::io;

use thiserror::Error;

/// Failures while reading a document. Content is never an error; only the underlying reader can
/// fail.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read data")]
    Read {
        #[from]
        source: io::Error,
    },
}
