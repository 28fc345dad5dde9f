//! `corber build` as a packaging tool

use async_trait::async_trait;
use cordeploy_core::{
    AmbientLogLevel, DeployError, DeployResult, LogLevel, PackagingTool, QUIET_FLAG,
};
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// Program name looked up on `PATH` by default
pub const CORBER_PROGRAM: &str = "corber";

/// Runs `<program> build <args>` in the host project root.
///
/// Like corber itself, a `--quiet` argument raises the shared UI level to
/// ERROR for the rest of the process. The caller is expected to run the tool
/// under a level guard.
#[derive(Debug, Clone)]
pub struct CorberCli {
    program: String,
}

impl CorberCli {
    pub fn new() -> Self {
        Self::with_program(CORBER_PROGRAM)
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CorberCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PackagingTool for CorberCli {
    fn command_line(&self, args: &[String]) -> String {
        let mut line = format!("{} build", self.program);
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    async fn build(
        &self,
        args: &[String],
        ui: &dyn AmbientLogLevel,
        project_root: &Path,
    ) -> DeployResult<()> {
        if args.iter().any(|arg| arg == QUIET_FLAG) {
            ui.set_level(LogLevel::Error);
        }

        let output = Command::new(&self.program)
            .arg("build")
            .args(args)
            .current_dir(project_root)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|err| {
                DeployError::ExternalTool(format!(
                    "failed to start `{}`: {err}",
                    self.command_line(args)
                ))
            })?;

        for line in String::from_utf8_lossy(&output.stdout).lines() {
            tracing::info!("{line}");
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DeployError::ExternalTool(format!(
                "`{}` exited with {}: {}",
                self.command_line(args),
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
