use anyhow::Result;
use azsweep::{AutoAffirm, AzCliAdapter, InteractivePrompt, SweepOptions, Sweeper};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "azsweep",
    about = "Deleta grupos de recursos da Azure com opção de exclusão por nome"
)]
struct Cli {
    /// Padrões de nomes a proteger (exato ou regex). Ex: --exclude rg-prod --exclude '^rg-.*-prod$'
    #[arg(long = "exclude", value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Número de workers paralelos
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u16).range(1..))]
    workers: u16,

    /// Modo silencioso (menos logs)
    #[arg(long)]
    quiet: bool,

    /// Modo simulação - lista grupos sem realmente deletar
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(cli.quiet);

    let options = SweepOptions {
        exclude: cli.exclude,
        workers: usize::from(cli.workers),
        dry_run: cli.dry_run,
    };

    // Em dry-run o gate nunca é consultado; AutoAffirm só evita prender o
    // processo num prompt que jamais seria lido.
    let sweeper = if cli.dry_run {
        Sweeper::new(Arc::new(AzCliAdapter::new()), Arc::new(AutoAffirm), options)
    } else {
        Sweeper::new(
            Arc::new(AzCliAdapter::new()),
            Arc::new(InteractivePrompt),
            options,
        )
    };

    match sweeper.run() {
        Ok(summary) => Ok(ExitCode::from(summary.exit_code())),
        Err(err) => {
            error!("{err}");
            Ok(ExitCode::from(1))
        }
    }
}

fn init_tracing(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
