use anyhow::Result;
use clap::Parser;
use std::process;

use auto_translate::cli::commands::{languages, translate};
use auto_translate::cli::{Args, Command};
use auto_translate::config::ResolveOptions;
use auto_translate::error;
use auto_translate::output::{self, OutputConfig};
use auto_translate::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || OutputConfig::default().no_color,
    });

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        process::exit(error::exit_code(&err));
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages {
            resources,
            provider,
        }) => languages::print_languages(&resources, provider.as_deref()),
        None => {
            let Some(file) = args.file else {
                anyhow::bail!("No input file given (see --help)");
            };

            let options = translate::TranslateOptions {
                file,
                config: args.config,
                resources: args.resources,
                log_file: args.log_file,
                overrides: ResolveOptions {
                    from: args.from,
                    to: args.to,
                    provider: args.provider,
                    mode: args.mode,
                    output_dir: args.output_dir,
                    learning: args.learning,
                },
            };
            translate::run_translate(options).await
        }
    }
}
