#![allow(non_snake_case)]

use super::*;
use cordeploy_core::LogLevel;
use cordeploy_logging::LogLevelManager;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counts invocations and never touches the filesystem
#[derive(Default)]
struct CountingTool {
    calls: AtomicUsize,
}

#[async_trait]
impl PackagingTool for CountingTool {
    fn command_line(&self, args: &[String]) -> String {
        format!("counting build {}", args.join(" "))
    }

    async fn build(
        &self,
        _args: &[String],
        _ui: &dyn AmbientLogLevel,
        _project_root: &Path,
    ) -> DeployResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn reconciler(config: DeployConfig, tool: Arc<CountingTool>) -> Reconciler {
    Reconciler::new(
        config,
        tool,
        Arc::new(LogLevelManager::with_level(LogLevel::Info)),
    )
}

fn missing_project() -> BuildContext {
    BuildContext::new("/nonexistent/cordeploy/project", "/nonexistent/cordeploy/dist")
}

#[test]
fn Reconciler___new___default_name_and_idle() {
    let plugin = reconciler(DeployConfig::new(), Arc::default());

    assert_eq!(plugin.name(), DEFAULT_PLUGIN_NAME);
    assert_eq!(plugin.last_state(), ReconcileState::Idle);
}

#[test]
fn Reconciler___with_name___is_reported_by_plugin_trait() {
    let plugin = reconciler(DeployConfig::new(), Arc::default()).with_name("corber-android");
    let as_plugin: &dyn DeployPlugin = &plugin;

    assert_eq!(as_plugin.name(), "corber-android");
    assert_eq!(as_plugin.config().platform, "android");
}

#[tokio::test]
async fn Reconciler___disabled___goes_straight_to_done() {
    let tool = Arc::new(CountingTool::default());
    let mut config = DeployConfig::new();
    config.enabled = false;
    let plugin = reconciler(config, tool.clone());

    let outcome = plugin.run_cycle(&missing_project()).await.unwrap();

    assert_eq!(outcome.trail, vec![ReconcileState::Idle, ReconcileState::Done]);
    assert_eq!(outcome.update, None);
    assert_eq!(tool.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn Reconciler___unsupported_platform___ends_after_clearing_step() {
    let tool = Arc::new(CountingTool::default());
    let mut config = DeployConfig::new();
    config.platform = "ios".to_string();
    let plugin = reconciler(config, tool.clone());

    let outcome = plugin.run_cycle(&missing_project()).await.unwrap();

    assert_eq!(
        outcome.trail,
        vec![
            ReconcileState::Idle,
            ReconcileState::ClearingOutput,
            ReconcileState::Done
        ]
    );
    assert_eq!(outcome.final_state(), ReconcileState::Done);
    assert_eq!(outcome.update, None);
    assert_eq!(tool.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn Reconciler___missing_dist_dir___fails_before_build() {
    let tool = Arc::new(CountingTool::default());
    let plugin = reconciler(DeployConfig::new(), tool.clone());

    let err = plugin.run_cycle(&missing_project()).await.unwrap_err();

    assert!(matches!(err, DeployError::Io { .. }));
    assert_eq!(plugin.last_state(), ReconcileState::Failed);
    assert_eq!(
        plugin.last_trail(),
        vec![
            ReconcileState::Idle,
            ReconcileState::ClearingOutput,
            ReconcileState::CopyingSourceAssets,
            ReconcileState::Failed
        ]
    );
    assert_eq!(tool.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn Reconciler___did_build___disabled_returns_no_update() {
    let mut config = DeployConfig::new();
    config.enabled = false;
    let plugin = reconciler(config, Arc::default());

    let update = plugin.did_build(&missing_project()).await.unwrap();

    assert!(update.is_none());
}

#[test]
fn CycleOutcome___final_state___is_last_trail_entry() {
    let outcome = CycleOutcome {
        trail: vec![ReconcileState::Idle, ReconcileState::Done],
        update: None,
    };

    assert_eq!(outcome.final_state(), ReconcileState::Done);
}

/// Counts ERROR events
#[derive(Clone, Default)]
struct ErrorCounter {
    count: Arc<AtomicUsize>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for ErrorCounter {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        if *event.metadata().level() == tracing::Level::ERROR {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[tokio::test]
async fn Reconciler___unsupported_platform___logs_error_without_failing() {
    use tracing_subscriber::prelude::*;

    let counter = ErrorCounter::default();
    let _default =
        tracing::subscriber::set_default(tracing_subscriber::registry().with(counter.clone()));
    let mut config = DeployConfig::new();
    config.platform = "windows".to_string();
    let plugin = reconciler(config, Arc::default());

    let outcome = plugin.run_cycle(&missing_project()).await;

    assert!(outcome.is_ok());
    assert_eq!(counter.count.load(Ordering::SeqCst), 1);
}
