use std::collections::HashMap;

use crate::{
    api::{
        client::Client,
        error::{CreateError, GetError, StorageError},
        model::ModelDefinition,
        run::{Run, RunStatus},
    },
    timestamp,
};

#[derive(Debug, thiserror::Error)]
pub enum TrackingError {
    #[error("a model was already logged for this run")]
    ModelAlreadyLogged,
    #[error("could not create the experiment: {0}")]
    CreateExperiment(#[from] CreateError),
    #[error("the tracking server rejected the run: {0}")]
    Run(#[from] GetError),
    #[error("could not reach the tracking server: {0:?}")]
    Storage(#[from] StorageError),
}

/// A HuoguoML run in progress.
///
/// This opens a run on the tracking server with [`TrackingRun::start`],
/// collects parameters, metrics, tags and at most one model definition
/// locally, and writes everything back with [`TrackingRun::finish`] or
/// [`TrackingRun::fail`].
pub struct TrackingRun {
    run: Run,
}

impl TrackingRun {
    /// Open a run under `experiment_name`, creating the experiment if the
    /// server does not know it yet.
    ///
    /// The author is taken from the `USER`/`USERNAME` environment.
    pub fn start(client: &mut dyn Client, experiment_name: &str) -> Result<Self, TrackingError> {
        let experiment = match client.get_experiment(experiment_name) {
            Ok(experiment) => experiment,
            Err(GetError::DoesNotExist(_)) => client.create_experiment(experiment_name)?,
            Err(GetError::Storage(err)) => return Err(TrackingError::Storage(err)),
        };
        let author = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "unknown".to_string());
        let run = client.create_run(&experiment.name, &author)?;
        Ok(TrackingRun { run })
    }

    /// The run as it would be submitted right now.
    pub fn run(&self) -> &Run {
        &self.run
    }

    pub fn log_parameter(&mut self, name: &str, value: &str) {
        self.run
            .parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.to_string(), value.to_string());
    }

    pub fn log_metric(&mut self, name: &str, value: &str) {
        self.run
            .metrics
            .get_or_insert_with(HashMap::new)
            .insert(name.to_string(), value.to_string());
    }

    pub fn log_tag(&mut self, name: &str, value: &str) {
        self.run
            .tags
            .get_or_insert_with(HashMap::new)
            .insert(name.to_string(), value.to_string());
    }

    /// Attach the model produced by this run. At most one model can be
    /// logged per run.
    pub fn log_model(&mut self, definition: ModelDefinition) -> Result<(), TrackingError> {
        if self.run.model_definition.is_some() {
            return Err(TrackingError::ModelAlreadyLogged);
        }
        self.run.model_definition = Some(definition);
        Ok(())
    }

    /// Close the run as completed and submit it.
    pub fn finish(self, client: &mut dyn Client) -> Result<Run, TrackingError> {
        self.end(client, RunStatus::Completed)
    }

    /// Close the run as failed and submit it.
    pub fn fail(self, client: &mut dyn Client) -> Result<Run, TrackingError> {
        self.end(client, RunStatus::Failed)
    }

    fn end(mut self, client: &mut dyn Client, status: RunStatus) -> Result<Run, TrackingError> {
        let finish_time = timestamp();
        self.run.finish_time = Some(finish_time);
        self.run.duration = Some(finish_time - self.run.creation_time);
        self.run.status = status;
        Ok(client.update_run(&self.run)?)
    }
}
