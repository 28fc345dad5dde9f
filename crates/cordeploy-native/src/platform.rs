//! Platform identification and the corber project layout

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Location of the Cordova project, relative to the host project root
pub const CORDOVA_PROJECT_PATH: &str = "corber/cordova";

/// Android app module, relative to the Cordova project
pub const ANDROID_APP_PATH: &str = "platforms/android/app";

/// Platforms corber can build for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Android, packaged by Gradle into APKs.
    Android,
    /// iOS, packaged by Xcode.
    Ios,
    /// Plain browser build.
    Browser,
}

impl Platform {
    /// Get the platform identifier as used in configuration.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Android => "android",
            Self::Ios => "ios",
            Self::Browser => "browser",
        }
    }

    /// Parse a platform from its configuration identifier.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "android" => Some(Self::Android),
            "ios" => Some(Self::Ios),
            "browser" => Some(Self::Browser),
            _ => None,
        }
    }

    /// Directory the build tool writes packaged artifacts to, relative to the
    /// Cordova project.
    ///
    /// Only Android has a known location; the others return `None`.
    #[must_use]
    pub fn output_subpath(&self, release: bool) -> Option<PathBuf> {
        match self {
            Self::Android => {
                let mode = if release { "release" } else { "debug" };
                Some(
                    Path::new(ANDROID_APP_PATH)
                        .join("build")
                        .join("outputs")
                        .join("apk")
                        .join(mode),
                )
            }
            Self::Ios | Self::Browser => None,
        }
    }

    /// Directory holding the post-build web assets, relative to the Cordova
    /// project.
    #[must_use]
    pub fn web_assets_subpath(&self) -> Option<PathBuf> {
        match self {
            Self::Android => Some(
                Path::new(ANDROID_APP_PATH)
                    .join("src")
                    .join("main")
                    .join("assets")
                    .join("www"),
            ),
            Self::Ios | Self::Browser => None,
        }
    }

    /// Get all known platforms.
    #[must_use]
    pub fn all() -> &'static [Platform] {
        &[Self::Android, Self::Ios, Self::Browser]
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Absolute locations for one platform build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformPaths {
    pub platform: Platform,
    /// Where packaged artifacts appear
    pub output_dir: PathBuf,
    /// Where the platform's web assets end up after the build
    pub web_assets_dir: PathBuf,
}

/// The corber/Cordova project inside a host project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeLayout {
    cordova_root: PathBuf,
}

impl NativeLayout {
    pub fn for_project(project_root: impl AsRef<Path>) -> Self {
        Self {
            cordova_root: project_root.as_ref().join(CORDOVA_PROJECT_PATH),
        }
    }

    pub fn cordova_root(&self) -> &Path {
        &self.cordova_root
    }

    /// Intake directory for the web build
    pub fn www_dir(&self) -> PathBuf {
        self.cordova_root.join("www")
    }

    /// Resolve the artifact and web-asset directories for `platform`.
    ///
    /// Returns `None` for unknown identifiers and for platforms whose output
    /// location is not known. Reporting that is left to the caller.
    pub fn locate(&self, platform: &str, release: bool) -> Option<PlatformPaths> {
        let platform = Platform::parse(platform)?;
        let output = platform.output_subpath(release)?;
        let web_assets = platform.web_assets_subpath()?;
        Some(PlatformPaths {
            platform,
            output_dir: self.cordova_root.join(output),
            web_assets_dir: self.cordova_root.join(web_assets),
        })
    }

    /// Artifact directory only, see [`locate`](Self::locate)
    pub fn build_output_dir(&self, platform: &str, release: bool) -> Option<PathBuf> {
        self.locate(platform, release).map(|paths| paths.output_dir)
    }
}
