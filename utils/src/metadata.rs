use chrono::Utc;
use serde::Serialize;
use serde_with::skip_serializing_none;
use std::env;

/// Origin metadata for a benchmark run.
#[skip_serializing_none]
#[derive(Serialize, Debug, Clone)]
pub struct RunMetadata {
    pub timestamp: String,
    pub commit_sha: Option<String>,
    pub workflow_run_url: Option<String>,
    pub host: Option<String>,
}

impl RunMetadata {
    /// Build [`RunMetadata`] from environment variables, if available.
    pub fn from_env() -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            commit_sha: non_empty_var("COMMIT_SHA"),
            workflow_run_url: non_empty_var("WORKFLOW_RUN_URL"),
            host: non_empty_var("HOSTNAME"),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}
