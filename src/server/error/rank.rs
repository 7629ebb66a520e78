use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::rank::RankDirection};

/// Rank ladder violations.
///
/// Every variant is a client error: the requested promotion or demotion cannot be
/// applied to the member's current rank. Results in 400 Bad Request carrying the
/// error message so the dashboard can show it verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// The configured ladder has no ranks.
    #[error("Rank ladder must contain at least one rank")]
    EmptyLadder,

    /// The same role id was configured twice.
    #[error("Role {0} appears more than once in the rank ladder")]
    DuplicateRole(u64),

    /// The role is not part of the ladder.
    #[error("Role {0} is not part of the rank ladder")]
    NotOnLadder(u64),

    /// The member holds no rank that could be lowered.
    #[error("Member has no rank to demote from")]
    Unranked,

    #[error("{0} is already the highest rank")]
    AlreadyHighest(String),

    #[error("{0} is already the lowest rank")]
    AlreadyLowest(String),

    /// Explicit target is not strictly above (promote) or below (demote) the current rank.
    #[error("Cannot {direction} to {target}")]
    WrongDirection {
        direction: RankDirection,
        target: String,
    },
}

impl IntoResponse for RankError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
