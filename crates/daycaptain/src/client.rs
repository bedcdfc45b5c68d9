use crate::config::ServiceConfig;
use crate::error::DcError;
use crate::model::Task;
use crate::schedule::ResolvedTarget;

/// Client for the DayCaptain task-create API. One blocking POST per call,
/// no retries.
pub struct DayCaptain {
    http: reqwest::blocking::Client,
    config: ServiceConfig,
}

impl DayCaptain {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            config,
        }
    }

    /// Creates `task` in the bucket named by `target`. Any 2xx status counts
    /// as success; the service normally answers 201 Created.
    pub fn new_task(&self, task: &Task, target: &ResolvedTarget) -> Result<(), DcError> {
        let url = target_url(&self.config.base_url, target);

        let response = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .bearer_auth(&self.config.token)
            .json(task)
            .send()
            .map_err(|err| DcError::transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // Best effort: an unreadable body still yields the status.
        let body = response.text().unwrap_or_default();
        Err(DcError::remote_rejected(status.as_u16(), body))
    }
}

pub fn target_url(base_url: &str, target: &ResolvedTarget) -> String {
    match target {
        ResolvedTarget::Backlog => format!("{}/backlog-items", base_url),
        ResolvedTarget::OnDate(date) => format!("{}/{}/tasks", base_url, date),
        ResolvedTarget::OnWeek(week) => format!("{}/{}/tasks", base_url, week),
    }
}
