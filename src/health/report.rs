//! Instance health records as reported by the load balancer.

/// The only state token treated as healthy.
pub const IN_SERVICE: &str = "InService";

/// Health of a single instance registered with the load balancer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberHealthRecord {
    pub member_id: String,
    pub state: String,
    /// Machine-readable cause (`ELB`, `Instance`, `N/A`).
    pub reason_code: Option<String>,
    pub description: Option<String>,
}

impl MemberHealthRecord {
    pub fn new(member_id: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            member_id: member_id.into(),
            state: state.into(),
            reason_code: None,
            description: None,
        }
    }

    /// Exact match against [`IN_SERVICE`]; every other state is unhealthy.
    pub fn is_healthy(&self) -> bool {
        self.state == IN_SERVICE
    }
}

/// Records in the order the API returned them.
pub type HealthReport = Vec<MemberHealthRecord>;

/// Unhealthy members keyed by id, in first-seen order.
///
/// A repeated id keeps its original position and takes the latest state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnhealthyMembers {
    entries: Vec<(String, String)>,
}

impl UnhealthyMembers {
    /// Collect every record whose state is not `InService`.
    pub fn from_report(report: &[MemberHealthRecord]) -> Self {
        let mut members = Self::default();
        for record in report.iter().filter(|r| !r.is_healthy()) {
            tracing::debug!(
                member_id = %record.member_id,
                state = %record.state,
                reason_code = record.reason_code.as_deref().unwrap_or("-"),
                description = record.description.as_deref().unwrap_or("-"),
                "Unhealthy member"
            );
            members.insert(&record.member_id, &record.state);
        }
        members
    }

    fn insert(&mut self, member_id: &str, state: &str) {
        match self.entries.iter_mut().find(|(id, _)| id == member_id) {
            Some(entry) => entry.1 = state.to_string(),
            None => self.entries.push((member_id.to_string(), state.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(id, state)| (id.as_str(), state.as_str()))
    }

    /// `[id::state]` for every member, space-joined.
    pub fn describe(&self) -> String {
        self.iter()
            .map(|(id, state)| format!("[{}::{}]", id, state))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
