//! Query parameters for list operations.

/// Default page size for [`XSkynetClient::list_proposals`](crate::XSkynetClient::list_proposals).
pub const DEFAULT_PROPOSAL_LIMIT: u32 = 50;

/// Default page size for [`XSkynetClient::list_missions`](crate::XSkynetClient::list_missions).
pub const DEFAULT_MISSION_LIMIT: u32 = 20;

/// Filter for listing proposals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalFilter {
    /// Only return proposals in this status (e.g. `"pending"`, `"in_progress"`, `"done"`).
    pub status: Option<String>,
    /// Maximum number of results.
    pub limit: u32,
}

impl ProposalFilter {
    /// No status filter, default limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one status.
    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Override the result limit.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Query pairs: `limit` always, `status` only when non-empty.
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = vec![("limit", self.limit.to_string())];
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            query.push(("status", status.to_owned()));
        }
        query
    }
}

impl Default for ProposalFilter {
    fn default() -> Self {
        Self {
            status: None,
            limit: DEFAULT_PROPOSAL_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_query_has_only_limit() {
        assert_eq!(
            ProposalFilter::new().to_query(),
            vec![("limit", "50".to_string())]
        );
    }

    #[test]
    fn status_is_appended() {
        let query = ProposalFilter::new().status("pending").limit(5).to_query();
        assert_eq!(
            query,
            vec![("limit", "5".to_string()), ("status", "pending".to_string())]
        );
    }

    #[test]
    fn empty_status_is_omitted() {
        let query = ProposalFilter::new().status("").to_query();
        assert_eq!(query.len(), 1);
    }
}
