use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{api::model::ModelDefinition, RunId};

/// Status code of a run as stored by the tracking server.
///
/// Codes outside the known range are kept verbatim so that records from a
/// newer server still parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum RunStatus {
    Failed,
    Running,
    Completed,
    Unknown(i64),
}

impl From<i64> for RunStatus {
    fn from(code: i64) -> Self {
        match code {
            -1 => RunStatus::Failed,
            0 => RunStatus::Running,
            1 => RunStatus::Completed,
            other => RunStatus::Unknown(other),
        }
    }
}

impl From<RunStatus> for i64 {
    fn from(status: RunStatus) -> i64 {
        match status {
            RunStatus::Failed => -1,
            RunStatus::Running => 0,
            RunStatus::Completed => 1,
            RunStatus::Unknown(code) => code,
        }
    }
}

/// One execution of an experiment.
///
/// `model_definition`, `parameters`, `metrics` and `tags` stay absent until
/// the corresponding stage of the run has produced data. An absent map is a
/// different state than an empty one and both survive (de)serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    pub id: RunId,
    pub run_nr: i64,
    pub creation_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    pub author: String,
    pub status: RunStatus,
    pub experiment_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_definition: Option<ModelDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl Run {
    /// A run without a finish time is still in progress.
    pub fn is_finished(&self) -> bool {
        self.finish_time.is_some()
    }
}
