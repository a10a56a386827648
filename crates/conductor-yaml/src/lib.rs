pub mod command;
pub mod error;
pub mod model;
pub mod point;
pub mod selector;
pub mod step;

pub use command::resolve_step;
pub use conductor_common::protocol;
pub use error::ResolveError;
pub use model::{YamlElementSelector, YamlElementSelectorUnion, YamlFluentCommand};
pub use point::parse_point;
pub use selector::resolve_selector;
pub use step::{NavigationAction, Step};

use conductor_common::protocol::ConductorCommand;
use serde_yaml::Value;

/// Decode one generic step node and resolve it into a command.
pub fn resolve_value(node: Value) -> Result<ConductorCommand, ResolveError> {
    YamlFluentCommand::from_value(node)?.into_command()
}
