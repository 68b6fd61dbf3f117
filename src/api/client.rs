use crate::api::{error::*, experiment::*, id::*, run::*, service::*};

/// The operations a HuoguoML tracking server offers.
///
/// Creation endpoints take the caller-supplied fields; the server assigns
/// ids, run numbers and timestamps. Update endpoints take a full snapshot
/// and return the stored record.
#[rustfmt::skip]
pub trait Client {
    fn list_experiments(&mut self) -> Result<Vec<Experiment>, StorageError>;
    fn get_experiment(&mut self, name: &str) -> Result<Experiment, GetError>;
    fn create_experiment(&mut self, name: &str) -> Result<Experiment, CreateError>;

    fn get_run(&mut self, id: RunId) -> Result<Run, GetError>;
    fn get_experiment_run(&mut self, experiment_name: &str, run_nr: i64) -> Result<Run, GetError>;
    fn list_runs(&mut self, experiment_name: &str) -> Result<Vec<Run>, StorageError>;
    fn create_run(&mut self, experiment_name: &str, author: &str) -> Result<Run, StorageError>;
    fn update_run(&mut self, run: &Run) -> Result<Run, UpdateError>;

    fn list_services(&mut self) -> Result<Vec<Service>, StorageError>;
    fn register_service(&mut self, host: &str, port: u16) -> Result<Service, StorageError>;
    fn update_service(&mut self, service: &Service) -> Result<Service, UpdateError>;

    fn list_models(&mut self) -> Result<Vec<MlModel>, StorageError>;
    fn get_model(&mut self, name: &str) -> Result<MlModel, GetError>;
    fn update_or_create_model(&mut self, name: &str, run_id: RunId) -> Result<MlModel, UpdateError>;
}
