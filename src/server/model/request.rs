//! Review status shared by LOA requests and appeals.

use std::str::FromStr;

use crate::{
    model::loa::RequestStatusDto,
    server::error::{internal::InternalError, AppError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    /// Withdrawn by the requester. Only LOA requests are cancelled.
    Cancelled,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn into_dto(self) -> RequestStatusDto {
        match self {
            Self::Pending => RequestStatusDto::Pending,
            Self::Approved => RequestStatusDto::Approved,
            Self::Rejected => RequestStatusDto::Rejected,
            Self::Cancelled => RequestStatusDto::Cancelled,
        }
    }

    /// Parses a stored status column.
    pub fn from_column(value: &str) -> Result<Self, AppError> {
        value
            .parse()
            .map_err(|_| InternalError::UnknownStatus(value.to_string()).into())
    }
}

impl FromStr for RequestStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(()),
        }
    }
}

/// Outcome an admin picks when reviewing a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn status(&self) -> RequestStatus {
        match self {
            Self::Approve => RequestStatus::Approved,
            Self::Reject => RequestStatus::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_status_columns() {
        assert_eq!(
            RequestStatus::from_column("approved").unwrap(),
            RequestStatus::Approved
        );
        assert!(matches!(
            RequestStatus::from_column("archived"),
            Err(AppError::InternalErr(InternalError::UnknownStatus(_)))
        ));
    }
}
