use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mille::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Terraform/OpenTofu plan visualization tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a diagram of the resources a plan will create
    Render(RenderArgs),
    /// List the resources a plan will create
    Resources(ResourcesArgs),
    /// Show raw interpolation references per resource
    Deps(PlanArgs),
    /// Check that a file looks like a Terraform JSON plan
    Validate(PlanArgs),
    /// Count resource changes by action
    Summary(PlanArgs),
    /// List supported cloud providers
    Providers,
}

#[derive(clap::Args, Debug)]
pub struct PlanArgs {
    /// Path to `terraform show -json` output
    pub plan: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ResourcesArgs {
    /// Path to `terraform show -json` output
    pub plan: PathBuf,

    /// Show the diagram icon each resource maps to for this provider
    #[arg(long, env = "MILLE_PROVIDER")]
    pub provider: Option<String>,

    /// Print resources as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Path to `terraform show -json` output
    pub plan: PathBuf,

    #[arg(long, env = "MILLE_PROVIDER", default_value = "aws")]
    pub provider: String,

    /// Output file name, without extension
    #[arg(long, short, env = "MILLE_OUTPUT", default_value = "infrastructure")]
    pub output: PathBuf,

    #[arg(long, env = "MILLE_FORMAT", default_value = "dot")]
    pub format: OutputFormat,

    /// Print the diagram instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

impl RenderArgs {
    // NOTE: The extension is appended, so "release.v2" keeps its dot
    pub fn output_path(&self) -> PathBuf {
        let mut path = self.output.clone().into_os_string();
        path.push(".");
        path.push(self.format.extension());
        PathBuf::from(path)
    }

    pub fn output_name(&self) -> String {
        self.output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "infrastructure".to_string())
    }
}
