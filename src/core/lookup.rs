//! Id-or-name resolution for single-entity lookups.
//!
//! A path segment may carry either a store identifier or a human-readable
//! name. Identifier-shaped tokens are tried as identifiers first and then as
//! names; everything else is only ever a name.

use uuid::Uuid;

use crate::core::traits::Repository;
use crate::core::{AppError, Result};

/// A single lookup attempt against a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKey<'a> {
    Id(Uuid),
    Name(&'a str),
}

impl<'a> LookupKey<'a> {
    /// Ordered lookup attempts for a path token
    pub fn candidates(token: &'a str) -> Vec<LookupKey<'a>> {
        match parse_canonical_id(token) {
            Some(id) => vec![LookupKey::Id(id), LookupKey::Name(token)],
            None => vec![LookupKey::Name(token)],
        }
    }
}

/// Parse a token only if it is a canonical hyphenated UUID
pub fn parse_canonical_id(token: &str) -> Option<Uuid> {
    if token.len() != 36 {
        return None;
    }
    Uuid::try_parse(token).ok()
}

/// Parse a path segment that must be an identifier.
///
/// Malformed identifiers can never match a stored entity, so they surface as
/// `NotFound` with the caller's message.
pub fn require_id(token: &str, not_found: &str) -> Result<Uuid> {
    parse_canonical_id(token).ok_or_else(|| AppError::not_found(not_found))
}

/// Resolve `token` to a single entity, preferring an identifier match
pub async fn resolve_by_id_or_name<T, R>(repo: &R, token: &str, not_found: &str) -> Result<T>
where
    R: Repository<T> + ?Sized,
    T: Send,
{
    for key in LookupKey::candidates(token) {
        let found = match key {
            LookupKey::Id(id) => repo.find_by_id(id).await?,
            LookupKey::Name(name) => repo.find_by_name(name).await?,
        };
        if let Some(entity) = found {
            return Ok(entity);
        }
    }

    tracing::debug!(token = %token, "Lookup found no entity by id or name");
    Err(AppError::not_found(not_found))
}
