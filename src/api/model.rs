use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a logged model is invoked: the module and entry point to load,
/// and the arguments to pass along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelApi {
    pub module: String,
    pub name: String,
    pub arguments: HashMap<String, String>,
}

/// One tensor slot of a model signature.
///
/// A dimension of `None` is of unknown size, e.g. the batch dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelNode {
    pub dtype: String,
    pub shape: Vec<Option<u64>>,
}

/// The input and output signature of a model.
///
/// Input and output names are independent namespaces; the same name may
/// appear in both maps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelGraph {
    pub inputs: HashMap<String, ModelNode>,
    pub outputs: HashMap<String, ModelNode>,
}

/// The full interface contract of a trained artifact produced by a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDefinition {
    pub model_graph: ModelGraph,
    pub model_api: ModelApi,
    pub requirements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_model_node_with_unknown_dimension() {
        let node = serde_json::from_str::<ModelNode>(r#"{"dtype": "float32", "shape": [null, 784]}"#).unwrap();
        assert_eq!(node.shape, vec![None, Some(784)]);
    }

    #[test]
    fn input_and_output_namespaces_are_independent() {
        let graph = serde_json::from_str::<ModelGraph>(
            r#"
            {
                "inputs": {"image": {"dtype": "float32", "shape": [null, 784]}},
                "outputs": {"image": {"dtype": "float32", "shape": [null, 10]}}
            }
            "#,
        )
        .unwrap();
        assert_eq!(graph.inputs["image"].shape, vec![None, Some(784)]);
        assert_eq!(graph.outputs["image"].shape, vec![None, Some(10)]);
    }
}
