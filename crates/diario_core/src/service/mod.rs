//! Use-case services, one per diary screen.
//!
//! # Responsibility
//! - Turn UI intents (add, toggle, delete, wipe) into repository calls.
//! - Stamp ids and dates from an injected [`Clock`](crate::clock::Clock).
//!
//! # Invariants
//! - Mutations return the full updated collection, newest first.
//! - Logs carry ids and counts only.

use crate::model::record::RecordId;
use crate::repo::list_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod audio_service;
pub mod data_service;
pub mod diary_service;
pub mod task_service;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug)]
pub enum ServiceError {
    /// Required user input was blank.
    EmptyInput(&'static str),
    NotFound {
        collection: &'static str,
        id: RecordId,
    },
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput(field) => write!(f, "{field} cannot be empty"),
            Self::NotFound { collection, id } => {
                write!(f, "record {id} not found in `{collection}`")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { collection, id } => Self::NotFound { collection, id },
            other => Self::Repo(other),
        }
    }
}

pub(crate) fn non_blank(field: &'static str, value: &str) -> ServiceResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ServiceError::EmptyInput(field));
    }
    Ok(trimmed.to_string())
}
