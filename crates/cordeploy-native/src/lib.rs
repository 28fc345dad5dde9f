//! cordeploy-native - The native project side of a deploy cycle
//!
//! This crate provides:
//! - [`Platform`] and [`NativeLayout`], which know where the corber/Cordova
//!   project keeps its web assets and build outputs
//! - [`fsops`], the clear / copy / list collaborators the reconciler calls
//! - [`CorberCli`], the [`PackagingTool`](cordeploy_core::PackagingTool) that
//!   shells out to `corber build`

pub mod fsops;
mod platform;
mod tool;

pub use platform::{ANDROID_APP_PATH, CORDOVA_PROJECT_PATH, NativeLayout, Platform, PlatformPaths};
pub use tool::{CORBER_PROGRAM, CorberCli};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{CorberCli, NativeLayout, Platform, PlatformPaths};
}
