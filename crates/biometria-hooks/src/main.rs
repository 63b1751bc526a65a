// SPDX-License-Identifier: MIT
//
// CLI entry point for the lifecycle hooks.
//
// The host build tool invokes this binary from its hook scripts, passing
// the pieces of its context object as flags.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use biometria_hooks::{post_install, post_prepare, HookContext};

#[derive(Parser)]
#[command(name = "biometria-hooks", version, about = "Asset installer hooks for the Enext Biometría plugin")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run once when the plugin is added to a host project.
    PostInstall(HookArgs),
    /// Run after every prepare cycle to restore the copied asset.
    PostPrepare(HookArgs),
}

#[derive(Args)]
struct HookArgs {
    /// Host project root.
    #[arg(long)]
    project_root: PathBuf,

    /// Plugin source root.
    #[arg(long)]
    plugin_dir: PathBuf,

    /// Active platform identifiers, comma separated.
    #[arg(long, value_delimiter = ',', default_value = "android")]
    platforms: Vec<String>,
}

impl From<HookArgs> for HookContext {
    fn from(args: HookArgs) -> Self {
        Self {
            platforms: args.platforms,
            plugin_dir: args.plugin_dir,
            project_root: args.project_root,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::PostInstall(args) => post_install(&args.into()),
        Command::PostPrepare(args) => post_prepare(&args.into()),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(%e, "hook failed");
            ExitCode::FAILURE
        }
    }
}
