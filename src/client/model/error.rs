/// Failed API call as seen by the client.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl ApiError {
    /// The server refused a withdrawal because the cooldown is still running.
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
