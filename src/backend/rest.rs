use crate::{
    api::{
        client::Client,
        error::{CreateError, GetError, StorageError, UpdateError},
        experiment::Experiment,
        run::Run,
        service::{MlModel, Service},
    },
    RunId,
};
use anyhow::Context;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Error body of the tracking server, `{"detail": "..."}`.
#[derive(Deserialize)]
struct RestErrorResponse {
    pub detail: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RestError {
    #[error("{status}: {detail}")]
    Known { status: u16, detail: String },
    #[error("Unknown {status} error:\n{body}")]
    Unknown { status: u16, body: String },
}

/// A client for a HuoguoML tracking server.
pub struct Server {
    api_url: String,
}

fn parse_error(response: ureq::Response) -> RestError {
    let status = response.status();
    let body = response
        .into_string()
        .unwrap_or_else(|_| "Could not turn error body into String.".to_string());

    let response = serde_json::from_str::<RestErrorResponse>(&body).ok();
    if let Some(response) = response {
        RestError::Known {
            status,
            detail: response.detail,
        }
    } else {
        RestError::Unknown { status, body }
    }
}

impl Server {
    /// Create a client for the server at `url`, e.g. `http://127.0.0.1:8080`.
    pub fn new(api_url: impl Into<String>) -> Self {
        Server { api_url: api_url.into() }
    }

    fn execute<Ep, Hand, Err>(&mut self, request: Ep, error_handler: Hand) -> Result<Ep::Value, Err>
    where
        Ep: Endpoint,
        Hand: FnOnce(RestError) -> Err,
        Err: From<anyhow::Error>,
    {
        let http_response = if Ep::QUERY {
            let query = serde_qs::to_string(&request).context("serializing query string failed")?;
            let url = if query.is_empty() {
                format!("{}/{}", self.api_url, request.path())
            } else {
                format!("{}/{}?{}", self.api_url, request.path(), query)
            };
            log::debug!("requesting {}", url);
            Ep::METHOD(&url).call()
        } else {
            let url = format!("{}/{}", self.api_url, request.path());
            let body = serde_json::to_string(&request).context("serializing request failed")?;
            log::debug!("requesting {}", url);
            Ep::METHOD(&url).send_string(&body)
        };
        if http_response.error() {
            let error = parse_error(http_response);
            Err(error_handler(error))
        } else {
            let response_string = http_response.into_string().context("failed to turn response into string")?;
            let value = serde_json::from_str::<Ep::Value>(&response_string)
                .with_context(|| format!("deserializing response failed:\n{}", &response_string))?;
            Ok(value)
        }
    }
}

impl Client for Server {
    fn list_experiments(&mut self) -> Result<Vec<Experiment>, StorageError> {
        self.execute(ListExperiments {}, StorageError::from)
    }

    fn get_experiment(&mut self, name: &str) -> Result<Experiment, GetError> {
        let request = GetExperiment { experiment_name: name };
        self.execute(request, |error| match error {
            RestError::Known { status: 404, .. } => GetError::DoesNotExist(name.to_string()),
            _ => GetError::Storage(error.into()),
        })
    }

    fn create_experiment(&mut self, name: &str) -> Result<Experiment, CreateError> {
        let request = CreateExperiment { name };
        self.execute(request, |error| match error {
            RestError::Known { status: 409, .. } => CreateError::AlreadyExists(name.to_string()),
            _ => CreateError::Storage(error.into()),
        })
    }

    fn get_run(&mut self, id: RunId) -> Result<Run, GetError> {
        let request = GetRun { run_id: id };
        self.execute(request, |error| match error {
            RestError::Known { status: 404, .. } => GetError::DoesNotExist(id.to_string()),
            _ => GetError::Storage(error.into()),
        })
    }

    fn get_experiment_run(&mut self, experiment_name: &str, run_nr: i64) -> Result<Run, GetError> {
        let request = GetExperimentRun { experiment_name, run_nr };
        self.execute(request, |error| match error {
            RestError::Known { status: 404, .. } => {
                GetError::DoesNotExist(format!("{}/{}", experiment_name, run_nr))
            }
            _ => GetError::Storage(error.into()),
        })
    }

    fn list_runs(&mut self, experiment_name: &str) -> Result<Vec<Run>, StorageError> {
        let request = ListRuns { experiment_name };
        self.execute(request, StorageError::from)
    }

    fn create_run(&mut self, experiment_name: &str, author: &str) -> Result<Run, StorageError> {
        let request = CreateRun { experiment_name, author };
        self.execute(request, StorageError::from)
    }

    fn update_run(&mut self, run: &Run) -> Result<Run, UpdateError> {
        let request = UpdateRun(run);
        self.execute(request, |error| match error {
            RestError::Known { status: 404, .. } => UpdateError::DoesNotExist(run.id.to_string()),
            _ => UpdateError::Storage(error.into()),
        })
    }

    fn list_services(&mut self) -> Result<Vec<Service>, StorageError> {
        self.execute(ListServices {}, StorageError::from)
    }

    fn register_service(&mut self, host: &str, port: u16) -> Result<Service, StorageError> {
        let request = RegisterService { host, port };
        self.execute(request, StorageError::from)
    }

    fn update_service(&mut self, service: &Service) -> Result<Service, UpdateError> {
        let request = UpdateService(service);
        self.execute(request, |error| match error {
            RestError::Known { status: 404, .. } => UpdateError::DoesNotExist(service.id.to_string()),
            _ => UpdateError::Storage(error.into()),
        })
    }

    fn list_models(&mut self) -> Result<Vec<MlModel>, StorageError> {
        self.execute(ListModels {}, StorageError::from)
    }

    fn get_model(&mut self, name: &str) -> Result<MlModel, GetError> {
        let request = GetModel { name };
        self.execute(request, |error| match error {
            RestError::Known { status: 404, .. } => GetError::DoesNotExist(name.to_string()),
            _ => GetError::Storage(error.into()),
        })
    }

    fn update_or_create_model(&mut self, name: &str, run_id: RunId) -> Result<MlModel, UpdateError> {
        let request = UpdateModel { name, run_id };
        self.execute(request, |error| UpdateError::Storage(error.into()))
    }
}

/// One REST endpoint of the tracking server.
///
/// `QUERY` endpoints carry their payload in the query string (GET); the
/// others send a JSON body.
trait Endpoint: Serialize {
    const METHOD: fn(&str) -> ureq::Request;
    const QUERY: bool;

    type Value: DeserializeOwned;

    fn path(&self) -> String;
}

#[derive(Debug, Clone, Copy, Serialize)]
struct ListExperiments {}
impl Endpoint for ListExperiments {
    const METHOD: fn(&str) -> ureq::Request = ureq::get;
    const QUERY: bool = true;
    type Value = Vec<Experiment>;

    fn path(&self) -> String {
        "api/v1/experiments".to_string()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
struct GetExperiment<'a> {
    #[serde(skip)]
    pub experiment_name: &'a str,
}
impl Endpoint for GetExperiment<'_> {
    const METHOD: fn(&str) -> ureq::Request = ureq::get;
    const QUERY: bool = true;
    type Value = Experiment;

    fn path(&self) -> String {
        format!("api/v1/experiments/{}", self.experiment_name)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
struct CreateExperiment<'a> {
    pub name: &'a str,
}
impl Endpoint for CreateExperiment<'_> {
    const METHOD: fn(&str) -> ureq::Request = ureq::post;
    const QUERY: bool = false;
    type Value = Experiment;

    fn path(&self) -> String {
        "api/v1/experiments".to_string()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
struct GetRun {
    #[serde(skip)]
    pub run_id: RunId,
}
impl Endpoint for GetRun {
    const METHOD: fn(&str) -> ureq::Request = ureq::get;
    const QUERY: bool = true;
    type Value = Run;

    fn path(&self) -> String {
        format!("api/v1/runs/{}", self.run_id)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
struct GetExperimentRun<'a> {
    #[serde(skip)]
    pub experiment_name: &'a str,
    #[serde(skip)]
    pub run_nr: i64,
}
impl Endpoint for GetExperimentRun<'_> {
    const METHOD: fn(&str) -> ureq::Request = ureq::get;
    const QUERY: bool = true;
    type Value = Run;

    fn path(&self) -> String {
        format!("api/v1/experiments/{}/{}", self.experiment_name, self.run_nr)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
struct ListRuns<'a> {
    pub experiment_name: &'a str,
}
impl Endpoint for ListRuns<'_> {
    const METHOD: fn(&str) -> ureq::Request = ureq::get;
    const QUERY: bool = true;
    type Value = Vec<Run>;

    fn path(&self) -> String {
        "api/v1/runs".to_string()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
struct CreateRun<'a> {
    pub experiment_name: &'a str,
    pub author: &'a str,
}
impl Endpoint for CreateRun<'_> {
    const METHOD: fn(&str) -> ureq::Request = ureq::post;
    const QUERY: bool = false;
    type Value = Run;

    fn path(&self) -> String {
        "api/v1/runs".to_string()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
struct UpdateRun<'a>(&'a Run);
impl Endpoint for UpdateRun<'_> {
    const METHOD: fn(&str) -> ureq::Request = ureq::put;
    const QUERY: bool = false;
    type Value = Run;

    fn path(&self) -> String {
        format!("api/v1/runs/{}", self.0.id)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
struct ListServices {}
impl Endpoint for ListServices {
    const METHOD: fn(&str) -> ureq::Request = ureq::get;
    const QUERY: bool = true;
    type Value = Vec<Service>;

    fn path(&self) -> String {
        "api/v1/services".to_string()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
struct RegisterService<'a> {
    pub host: &'a str,
    pub port: u16,
}
impl Endpoint for RegisterService<'_> {
    const METHOD: fn(&str) -> ureq::Request = ureq::post;
    const QUERY: bool = false;
    type Value = Service;

    fn path(&self) -> String {
        "api/v1/services".to_string()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
struct UpdateService<'a>(&'a Service);
impl Endpoint for UpdateService<'_> {
    const METHOD: fn(&str) -> ureq::Request = ureq::put;
    const QUERY: bool = false;
    type Value = Service;

    fn path(&self) -> String {
        format!("api/v1/services/{}", self.0.id)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
struct ListModels {}
impl Endpoint for ListModels {
    const METHOD: fn(&str) -> ureq::Request = ureq::get;
    const QUERY: bool = true;
    type Value = Vec<MlModel>;

    fn path(&self) -> String {
        "api/v1/models".to_string()
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
struct GetModel<'a> {
    #[serde(skip)]
    pub name: &'a str,
}
impl Endpoint for GetModel<'_> {
    const METHOD: fn(&str) -> ureq::Request = ureq::get;
    const QUERY: bool = true;
    type Value = MlModel;

    fn path(&self) -> String {
        format!("api/v1/models/{}", self.name)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
struct UpdateModel<'a> {
    #[serde(skip)]
    pub name: &'a str,
    pub run_id: RunId,
}
impl Endpoint for UpdateModel<'_> {
    const METHOD: fn(&str) -> ureq::Request = ureq::put;
    const QUERY: bool = false;
    type Value = MlModel;

    fn path(&self) -> String {
        format!("api/v1/models/{}", self.name)
    }
}
