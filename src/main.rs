use clap::Parser;
use provar_testgen::cli::commands::{cmd_analyze, cmd_generate, cmd_validate};
use provar_testgen::cli::config::{Cli, Commands, load_config, resolve_api_settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());
    let settings = resolve_api_settings(&cli, &config);

    match &cli.command {
        Commands::Generate {
            name,
            url,
            description,
            description_file,
            dom_file,
            screenshots,
            output_dir,
        } => {
            let valid = cmd_generate(
                &settings,
                name,
                url.as_deref(),
                description.as_deref(),
                description_file.as_deref(),
                dom_file.as_deref(),
                screenshots,
                output_dir,
                cli.verbose,
            )?;
            if !valid {
                std::process::exit(1);
            }
        }
        Commands::Analyze { screenshots } => {
            cmd_analyze(&settings, screenshots, cli.verbose)?;
        }
        Commands::Validate { file } => {
            let valid = cmd_validate(file)?;
            if !valid {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
