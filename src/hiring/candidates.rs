// src/hiring/candidates.rs
//! Candidate query and parsing of the denormalized hiring payload

use std::error::Error;

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use super::auth::AuthenticatedSession;
use super::endpoints::{CandidateQuery, Endpoints};
use crate::error::{FetchError, ParseError};
use crate::types::Candidate;

/// Run one bounded candidate query through the authenticated session.
pub async fn fetch_candidates(
    session: &AuthenticatedSession,
    endpoints: &Endpoints,
    query: &CandidateQuery,
) -> Result<Vec<Candidate>, FetchError> {
    let url = endpoints.candidates(query);
    info!("Querying candidates: {}", url);

    let body = session.fetch_json(&url).await?;
    let candidates = parse_candidates(&body)?;

    info!("Received {} candidates", candidates.len());
    Ok(candidates)
}

/// Flatten the hiring payload into candidate records.
///
/// `data.candidates.allIds` decides which candidates exist and in what
/// order; `byIds` and `data.positions.byIds` are only lookup tables. A bad
/// entry is logged and dropped without failing the batch.
pub fn parse_candidates(body: &str) -> Result<Vec<Candidate>, FetchError> {
    let document: Value = serde_json::from_str(body).map_err(FetchError::Document)?;
    let data = &document["data"];

    let ids = match data["candidates"]["allIds"].as_array() {
        Some(ids) => ids,
        None => {
            warn!("Response has no data.candidates.allIds list");
            return Ok(Vec::new());
        }
    };
    let by_ids = &data["candidates"]["byIds"];
    let positions = &data["positions"]["byIds"];

    let mut candidates = Vec::with_capacity(ids.len());
    for id in ids {
        match parse_entry(id, by_ids, positions) {
            Ok(candidate) => candidates.push(candidate),
            Err(e) => warn!(error = &e as &(dyn Error + 'static), "Skipping candidate"),
        }
    }
    Ok(candidates)
}

fn parse_entry(id: &Value, by_ids: &Value, positions: &Value) -> Result<Candidate, ParseError> {
    let key = id_key(id).ok_or_else(|| ParseError::InvalidId(id.to_string()))?;
    let entry = by_ids
        .get(&key)
        .ok_or_else(|| ParseError::Missing { id: key.clone() })?;

    let mut candidate =
        Candidate::deserialize(entry).map_err(|source| ParseError::Malformed {
            id: key.clone(),
            source,
        })?;

    if candidate.applicant_id.is_empty() {
        candidate.applicant_id = key;
    }
    candidate.position = position_name(positions, &candidate.position_id);
    Ok(candidate)
}

fn id_key(id: &Value) -> Option<String> {
    match id {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

fn position_name(positions: &Value, position_id: &str) -> String {
    if position_id.is_empty() {
        return String::new();
    }
    match positions.get(position_id).and_then(|p| p.get("name")) {
        Some(Value::String(name)) => name.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
