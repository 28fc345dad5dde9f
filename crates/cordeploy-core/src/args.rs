//! Packaging tool argument builder

use crate::DeployConfig;
use crate::naming::to_flag;
use serde_json::Value;

/// Options consumed by the plugin itself and never forwarded
pub const PLUGIN_ONLY_OPTIONS: &[&str] = &["enabled"];

/// Makes the packaging tool inject the framework interop script
pub const ADD_CORDOVA_JS_FLAG: &str = "--add-cordova-js";

/// Forces the packaging tool into quiet output
pub const QUIET_FLAG: &str = "--quiet";

/// Build the argument list for the packaging tool.
///
/// Every option except [`PLUGIN_ONLY_OPTIONS`] becomes one flag, in
/// configuration key order: `true` becomes a bare `--kebab-key`, any other
/// value `--kebab-key=value`. [`ADD_CORDOVA_JS_FLAG`] and [`QUIET_FLAG`] are
/// always appended last.
///
/// # Examples
///
/// ```
/// use cordeploy_core::{DeployConfig, build_args};
///
/// let args = build_args(&DeployConfig::default());
/// assert_eq!(
///     args,
///     vec![
///         "--platform=android",
///         "--release=false",
///         "--skip-framework-build",
///         "--add-cordova-js",
///         "--quiet",
///     ]
/// );
/// ```
pub fn build_args(config: &DeployConfig) -> Vec<String> {
    let mut args: Vec<String> = config
        .options()
        .iter()
        .filter(|(key, _)| !PLUGIN_ONLY_OPTIONS.contains(&key.as_str()))
        .map(|(key, value)| match value {
            Value::Bool(true) => to_flag(key),
            other => format!("{}={}", to_flag(key), value_to_arg(other)),
        })
        .collect();

    args.push(ADD_CORDOVA_JS_FLAG.to_string());
    args.push(QUIET_FLAG.to_string());
    args
}

/// String form of an option value as it appears after `=`
fn value_to_arg(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_to_arg)
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}
