#![allow(non_snake_case)]

use super::*;
use crate::{DeployError, LogLevel};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};

// Test helpers

struct TestUi {
    level: AtomicU8,
}

impl TestUi {
    fn new(level: LogLevel) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
        }
    }

    fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::SeqCst))
    }
}

impl AmbientLogLevel for TestUi {
    fn is_level_visible(&self, level: LogLevel) -> bool {
        level >= self.level()
    }

    fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::SeqCst);
    }
}

#[derive(Default)]
struct RecordingTool {
    calls: Mutex<Vec<Vec<String>>>,
}

#[async_trait]
impl PackagingTool for RecordingTool {
    fn command_line(&self, args: &[String]) -> String {
        format!("fake build {}", args.join(" "))
    }

    async fn build(
        &self,
        args: &[String],
        ui: &dyn AmbientLogLevel,
        _project_root: &Path,
    ) -> DeployResult<()> {
        self.calls.lock().unwrap().push(args.to_vec());
        ui.set_level(LogLevel::Error);
        if args.iter().any(|a| a == "--fail") {
            return Err(DeployError::ExternalTool("asked to fail".to_string()));
        }
        Ok(())
    }
}

struct TestPlugin {
    config: DeployConfig,
}

#[async_trait]
impl DeployPlugin for TestPlugin {
    fn name(&self) -> &str {
        "test"
    }

    fn config(&self) -> &DeployConfig {
        &self.config
    }

    async fn did_build(&self, ctx: &BuildContext) -> DeployResult<Option<ContextUpdate>> {
        if !self.config.enabled {
            return Ok(None);
        }
        Ok(Some(ContextUpdate {
            platform: self.config.platform.clone(),
            artifacts: Vec::new(),
            dist_files: ctx.dist_files.clone(),
        }))
    }
}

// PackagingTool tests

#[tokio::test]
async fn PackagingTool___build___receives_args_and_may_change_level() {
    let tool = RecordingTool::default();
    let ui = TestUi::new(LogLevel::Info);
    let args = vec!["--quiet".to_string()];

    tool.build(&args, &ui, Path::new("/project")).await.unwrap();

    assert_eq!(tool.calls.lock().unwrap().len(), 1);
    assert_eq!(ui.level(), LogLevel::Error);
}

#[tokio::test]
async fn PackagingTool___build___failure_propagates() {
    let tool = RecordingTool::default();
    let ui = TestUi::new(LogLevel::Info);

    let result = tool
        .build(&["--fail".to_string()], &ui, Path::new("/project"))
        .await;

    assert!(matches!(result, Err(DeployError::ExternalTool(_))));
}

#[test]
fn PackagingTool___command_line___joins_args() {
    let tool = RecordingTool::default();

    let line = tool.command_line(&["--a".to_string(), "--b".to_string()]);

    assert_eq!(line, "fake build --a --b");
}

// DeployPlugin tests

#[tokio::test]
async fn DeployPlugin___did_build___disabled_returns_none() {
    let plugin = TestPlugin {
        config: DeployConfig {
            enabled: false,
            ..DeployConfig::default()
        },
    };
    let ctx = BuildContext::new("/project", "/project/dist");

    let update = plugin.did_build(&ctx).await.unwrap();

    assert!(update.is_none());
}

#[tokio::test]
async fn DeployPlugin___did_build___enabled_returns_update() {
    let plugin = TestPlugin {
        config: DeployConfig::default(),
    };
    let ctx = BuildContext::new("/project", "/project/dist").with_dist_files(["a.js"]);

    let update = plugin.did_build(&ctx).await.unwrap().unwrap();

    assert_eq!(update.platform, "android");
    assert_eq!(update.dist_files, vec!["a.js".to_string()]);
    assert_eq!(plugin.name(), "test");
}
