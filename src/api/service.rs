use serde::{Deserialize, Serialize};

use crate::{api::run::Run, ModelId, RunId, ServiceId};

/// A deployed inference endpoint.
///
/// `run_id` is a non-owning reference to the run the service is serving.
/// Deleting that run does not remove the service; the reference goes
/// dangling instead (see [`RootState::dangling_services`]).
///
/// [`RootState::dangling_services`]: crate::api::state::RootState::dangling_services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,
    pub host: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<RunId>,
}

/// A registered model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlModel {
    pub id: ModelId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runs: Option<Vec<Run>>,
}
