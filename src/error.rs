use std::path::PathBuf;
use std::time::Duration;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ScratchError {
    #[error("{0}\nPath: {1}")]
    #[diagnostic(code(scratchdir::file), url(docsrs))]
    FileError(std::io::Error, PathBuf),

    #[error("{path:?} was not removed within {timeout:?}, assuming it won't be")]
    #[diagnostic(code(scratchdir::remove_timeout), url(docsrs))]
    RemoveTimeout { path: PathBuf, timeout: Duration },
}

pub type ScratchResult<T> = Result<T, ScratchError>;
