use serde::{Deserialize, Serialize};

use crate::{
    api::{
        experiment::Experiment,
        run::Run,
        service::{MlModel, Service},
    },
    RunId,
};

/// The state root of the dashboard: a read-only snapshot of everything the
/// tracking server knows. It is replaced wholesale on refresh and never
/// mutated locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootState {
    pub experiments: Vec<Experiment>,
    pub services: Vec<Service>,
    pub models: Vec<MlModel>,
}

impl RootState {
    /// Look up a run by its system-wide unique id.
    pub fn run(&self, id: RunId) -> Option<&Run> {
        self.experiments
            .iter()
            .flat_map(|experiment| experiment.runs.iter())
            .find(|run| run.id == id)
    }

    pub fn experiment(&self, name: &str) -> Option<&Experiment> {
        self.experiments.iter().find(|experiment| experiment.name == name)
    }

    /// Services whose run reference no longer resolves.
    ///
    /// The service-to-run association is non-owning: deleting a run leaves
    /// the service behind, and the dashboard has to surface it as dangling.
    pub fn dangling_services(&self) -> Vec<&Service> {
        self.services
            .iter()
            .filter(|service| match service.run_id {
                Some(id) => self.run(id).is_none(),
                None => false,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::run::RunStatus;
    use crate::{ExperimentId, ServiceId};

    fn run(id: i64, run_nr: i64) -> Run {
        Run {
            id: RunId::from(id),
            run_nr,
            creation_time: 1612121212.5,
            finish_time: None,
            duration: None,
            author: "fei".to_string(),
            status: RunStatus::Running,
            experiment_name: "mnist".to_string(),
            model_definition: None,
            parameters: None,
            metrics: None,
            tags: None,
        }
    }

    fn service(id: i64, run_id: Option<i64>) -> Service {
        Service {
            id: ServiceId::from(id),
            host: "127.0.0.1".to_string(),
            port: 8080,
            run_id: run_id.map(RunId::from),
        }
    }

    fn state() -> RootState {
        RootState {
            experiments: vec![Experiment {
                id: ExperimentId::from(1),
                name: "mnist".to_string(),
                description: "digit classifier".to_string(),
                runs: vec![run(1, 1), run(2, 2)],
            }],
            services: Vec::new(),
            models: Vec::new(),
        }
    }

    #[test]
    fn run_lookup_searches_all_experiments() {
        let state = state();
        assert_eq!(state.run(RunId::from(2)).map(|run| run.run_nr), Some(2));
        assert!(state.run(RunId::from(9)).is_none());
    }

    #[test]
    fn dangling_services_are_surfaced() {
        let mut state = state();
        state.services = vec![service(1, Some(1)), service(2, Some(9)), service(3, None)];

        let dangling = state.dangling_services();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].id, ServiceId::from(2));
    }
}
