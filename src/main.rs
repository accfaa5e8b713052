use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracktime::application::{LatexService, ReportService};
use tracktime::cli::{format_latex_table, format_report, Cli, Commands};
use tracktime::error::TrackError;
use tracktime::infrastructure::config::date_format_from_env;
use tracktime::infrastructure::{Config, InputSource, Overrides, Settings};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), TrackError> {
    let config = Config::load_optional(cli.config.as_deref())?;

    match cli.command {
        Commands::Report {
            file,
            interval,
            hours,
            seconds,
            total,
            bonus,
        } => {
            // Settings are validated before the log is opened
            let overrides = Overrides {
                date_format: cli.date_format,
                interval,
                hours,
                seconds,
                total,
                bonus,
            };
            let settings = Settings::resolve(&config, date_format_from_env(), &overrides)?;
            tracing::debug!(?settings, "resolved settings");

            let source = InputSource::from_arg(file.as_deref());
            let report = ReportService::new(settings).execute(&source)?;
            print!("{}", format_report(&report));
            Ok(())
        }
        Commands::Latex { file } => {
            let overrides = Overrides {
                date_format: cli.date_format,
                ..Default::default()
            };
            let settings = Settings::resolve(&config, date_format_from_env(), &overrides)?;

            let source = InputSource::from_arg(file.as_deref());
            let entries = LatexService::new(&settings.date_format).execute(&source)?;
            print!("{}", format_latex_table(&entries));
            Ok(())
        }
        Commands::Config => {
            let overrides = Overrides {
                date_format: cli.date_format,
                ..Default::default()
            };
            let settings = Settings::resolve(&config, date_format_from_env(), &overrides)?;
            print!("{}", settings.to_config().to_toml()?);
            Ok(())
        }
    }
}
