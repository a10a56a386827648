//! Flow documents: a YAML sequence of steps.
//!
//! Splitting a document into step nodes lives here, outside the resolver,
//! which only ever sees one step at a time.

use conductor_common::protocol::ConductorCommand;
use conductor_yaml::{resolve_value, ResolveError};
use serde_yaml::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Failed to parse flow document: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Flow document must be a sequence of steps, found {0}")]
    InvalidRoot(&'static str),
}

/// Result of resolving one step of a flow.
#[derive(Debug)]
pub struct StepOutcome {
    /// 1-based position of the step in the document.
    pub index: usize,
    pub result: Result<ConductorCommand, ResolveError>,
}

/// Split a flow document into step nodes.
///
/// A single mapping is treated as a one-step flow and an empty document as an
/// empty flow.
pub fn parse_flow(content: &str) -> Result<Vec<Value>, FlowError> {
    if is_blank_document(content) {
        return Ok(Vec::new());
    }

    match serde_yaml::from_str::<Value>(content)? {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(steps) => Ok(steps),
        Value::Mapping(step) => Ok(vec![Value::Mapping(step)]),
        Value::Bool(_) => Err(FlowError::InvalidRoot("a boolean")),
        Value::Number(_) => Err(FlowError::InvalidRoot("a number")),
        Value::String(_) => Err(FlowError::InvalidRoot("a string")),
        Value::Tagged(_) => Err(FlowError::InvalidRoot("a tagged value")),
    }
}

fn is_blank_document(content: &str) -> bool {
    content.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

/// Resolve every step independently. Failures do not stop later steps.
pub fn resolve_flow(steps: Vec<Value>) -> Vec<StepOutcome> {
    steps
        .into_iter()
        .enumerate()
        .map(|(i, node)| StepOutcome {
            index: i + 1,
            result: resolve_value(node),
        })
        .collect()
}
