use serde::{Deserialize, Serialize};

use crate::{api::run::Run, ExperimentId};

/// A named grouping of runs.
///
/// Within one experiment, `run_nr` is unique and increases with every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub id: ExperimentId,
    pub name: String,
    pub description: String,
    pub runs: Vec<Run>,
}

impl Experiment {
    /// The run with the given run number, if the experiment has one.
    pub fn run(&self, run_nr: i64) -> Option<&Run> {
        self.runs.iter().find(|run| run.run_nr == run_nr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_are_addressed_by_run_number() {
        let experiment = serde_json::from_str::<Experiment>(
            r#"
            {
                "id": 1,
                "name": "mnist",
                "description": "digit classifier",
                "runs": [
                    {
                        "id": 3,
                        "run_nr": 1,
                        "creation_time": 1612121212.5,
                        "author": "fei",
                        "status": 1,
                        "experiment_name": "mnist"
                    },
                    {
                        "id": 5,
                        "run_nr": 2,
                        "creation_time": 1612121999.5,
                        "author": "fei",
                        "status": 0,
                        "experiment_name": "mnist"
                    }
                ]
            }
            "#,
        )
        .unwrap();

        assert_eq!(experiment.run(2).map(|run| run.id), Some(crate::RunId::from(5)));
        assert_eq!(experiment.run(3), None);
    }
}
