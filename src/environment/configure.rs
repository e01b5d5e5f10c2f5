//! Pipeline assembly
//!
//! Registers the two rules an environment does not start with: the injected
//! script-transform rule at the head of the pipeline and the markup rule at
//! the tail.

use crate::environment::Environment;
use crate::error::Result;
use crate::pipeline::rule::LoaderRule;
use crate::pipeline::{markup, script};

/// Register the transform and markup rules into an environment's pipeline
///
/// The transform rule is prepended under the name `typescript`, so it is
/// evaluated before every previously registered rule. The markup rule is
/// appended, so it is evaluated after all of them and supersedes any earlier
/// handling of the same extension. The environment is returned by value for
/// the caller to consume.
///
/// Calling this twice on the same environment registers both rules twice;
/// nothing here deduplicates.
pub fn build_environment(mut env: Environment, transform: LoaderRule) -> Result<Environment> {
    env.loaders.prepend(script::RULE_NAME, transform);
    env.loaders.append(markup::rule()?);
    Ok(env)
}
