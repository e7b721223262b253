use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors which can occur when discovering or driving a brightness controller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ControllerError {
    #[error("couldn't access {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} contains {:?}, which is not a valid brightness value", .path.display(), .value)]
    MalformedValue { path: PathBuf, value: String },

    #[error("{0} is not amongst the valid controllers. Please specify a valid name.")]
    UnknownController(String),

    #[error("no brightness controllers found")]
    NoControllers,
}

impl ControllerError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> ControllerError {
        let path = path.into();
        move |source| ControllerError::Io { path, source }
    }
}
