// SPDX-License-Identifier: MIT
//
// Build-time asset installer.
//
// Two lifecycle hooks copy the static capture-UI page into the compiled
// Android asset tree. Both are unconditional overwrites with no mtime or
// hash comparison, so re-running them is always safe, and a missing source
// never fails the host build.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use biometria_core::error::Result;

/// Platform identifier the hooks act on.
pub const ANDROID_PLATFORM: &str = "android";

/// Plugin id, also the directory name inside the host's plugin cache.
pub const PLUGIN_ID: &str = "cordova-plugin-enext-biometria";

/// File name of the capture-UI asset.
pub const ASSET_FILE: &str = "biometria.html";

/// Lifecycle context handed over by the host build tool.
#[derive(Debug, Clone)]
pub struct HookContext {
    /// Active platform identifiers (e.g. `["android", "ios"]`).
    pub platforms: Vec<String>,
    /// Plugin source root (the checkout being installed).
    pub plugin_dir: PathBuf,
    /// Host project root.
    pub project_root: PathBuf,
}

impl HookContext {
    /// Destination of the asset inside the compiled Android tree.
    fn asset_destination_dir(&self) -> PathBuf {
        self.project_root
            .join("platforms")
            .join("android")
            .join("app")
            .join("src")
            .join("main")
            .join("assets")
            .join("www")
            .join("plugins")
            .join("enext-biometria")
    }

    /// The `platforms/android` root, whose absence means the platform has
    /// not been added yet.
    fn android_platform_dir(&self) -> PathBuf {
        self.project_root.join("platforms").join("android")
    }

    /// Asset location inside the host's plugin cache, where the plugin
    /// lives after installation.
    fn cached_asset_source(&self) -> PathBuf {
        self.project_root
            .join("plugins")
            .join(PLUGIN_ID)
            .join("www")
            .join(ASSET_FILE)
    }
}

/// Post-install hook: runs once when the plugin is added to a host project.
///
/// Copies the asset from the plugin's own source tree. No-op unless android
/// is among the active platforms. A missing source file is logged and
/// swallowed so the overall install keeps going.
#[instrument(skip_all, fields(project_root = %ctx.project_root.display()))]
pub fn post_install(ctx: &HookContext) -> Result<()> {
    if !ctx.platforms.iter().any(|p| p == ANDROID_PLATFORM) {
        return Ok(());
    }

    let source = ctx.plugin_dir.join("www").join(ASSET_FILE);
    let target_dir = ctx.asset_destination_dir();

    info!("copying capture UI asset into android asset tree");
    copy_asset(&source, &target_dir)
}

/// Post-prepare hook: runs after every dependency-resolution/prepare cycle.
///
/// Re-copies the asset because prepare may regenerate the platform asset
/// tree. The source is the as-installed plugin cache, not the original
/// plugin checkout. Skips entirely when the android platform directory does
/// not exist; skips only the copy (directory creation still happens) when
/// the source is absent.
#[instrument(skip_all, fields(project_root = %ctx.project_root.display()))]
pub fn post_prepare(ctx: &HookContext) -> Result<()> {
    for platform in &ctx.platforms {
        if platform != ANDROID_PLATFORM {
            continue;
        }
        if !ctx.android_platform_dir().exists() {
            info!("android platform directory absent, skipping");
            continue;
        }

        info!("refreshing capture UI asset after prepare");
        copy_asset(&ctx.cached_asset_source(), &ctx.asset_destination_dir())?;
    }
    Ok(())
}

/// Create the destination directory and overwrite the asset there.
///
/// A missing source is a warning, not an error. Failures to create the
/// directory or to copy an existing source are real I/O errors.
fn copy_asset(source: &Path, target_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(target_dir)?;

    if !source.exists() {
        warn!(source = %source.display(), "source asset not found, skipping copy");
        return Ok(());
    }

    let target = target_dir.join(ASSET_FILE);
    std::fs::copy(source, &target)?;
    info!(target = %target.display(), "asset copied");
    Ok(())
}
