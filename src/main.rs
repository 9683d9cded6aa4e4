mod cli;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, PlanArgs, RenderArgs};
use mille::{
    CloudProvider, DiagramRenderer, MilleError, extract_resources, get_resource_dependencies,
    load_plan, load_validated_plan, output, summarize_plan, supported_providers,
    validate_plan_format,
};

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render(args) => render(&args)?,
        Command::Resources(args) => {
            let provider = args
                .provider
                .as_deref()
                .map(str::parse::<CloudProvider>)
                .transpose()?;
            let plan = load_validated_plan(&args.plan)?;
            let resources = extract_resources(&plan);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&resources)?);
            } else {
                println!("{}", output::resource_table(&resources, provider));
            }
            tracing::info!(count = resources.len(), "resources listed");
        }
        Command::Deps(PlanArgs { plan: path }) => {
            let plan = load_validated_plan(&path)?;
            let dependencies = get_resource_dependencies(&plan);
            println!(
                "{}",
                output::dependency_tree(&path.display().to_string(), &dependencies)
            );
        }
        Command::Validate(PlanArgs { plan: path }) => {
            let plan = load_plan(&path)?;
            if !validate_plan_format(&plan) {
                return Err(MilleError::InvalidPlan { path }.into());
            }
            println!("{}: valid Terraform JSON plan", path.display());
        }
        Command::Summary(PlanArgs { plan: path }) => {
            let plan = load_validated_plan(&path)?;
            let summary = summarize_plan(&plan);
            println!("{}", output::summary_table(&summary));
            tracing::info!(total = summary.total(), "plan summarized");
        }
        Command::Providers => {
            for provider in supported_providers() {
                println!("{}", provider);
            }
        }
    }

    Ok(())
}

fn render(args: &RenderArgs) -> Result<()> {
    // Provider is checked before touching the plan file
    let renderer = DiagramRenderer::new(&args.provider)?;
    let plan = load_validated_plan(&args.plan)?;

    let diagram = renderer.render_diagram(&plan, &args.output_name(), args.format);

    if args.stdout {
        print!("{}", diagram);
        return Ok(());
    }

    let path = args.output_path();
    std::fs::write(&path, diagram).map_err(MilleError::Io)?;
    tracing::info!(path = %path.display(), format = %args.format, "diagram written");
    println!("{}", path.display());

    Ok(())
}
