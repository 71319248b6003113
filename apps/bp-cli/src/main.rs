use bp_chem::{ChemError, CorrelationSurface, ElementalComposition, SurfaceModel, load_mixture};
use bp_table::{ParsedArgs, RunConfig, SweepError, parse_args, run_sweep, usage};
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(thiserror::Error, Debug)]
enum RunError {
    #[error(transparent)]
    Chem(#[from] ChemError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    // The table goes to stdout; logs must stay on stderr
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(ParsedArgs::Help) => {
            print!("{}", usage());
            return ExitCode::SUCCESS;
        }
        Ok(ParsedArgs::Run(config)) => config,
        Err(err) => {
            // Configuration failures report on stdout and exit with the
            // success code, like the published tool behavior
            println!("{err}");
            print!("{}", usage());
            return ExitCode::SUCCESS;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RunConfig) -> Result<(), RunError> {
    let mixture = load_mixture(&config.mixture)?;
    let model = CorrelationSurface::new(mixture)?;

    let yke = model.composition(&config.boundary_layer)?;
    let ykg = match &config.pyrolysis {
        Some(name) => model.composition(name)?,
        None => ElementalComposition::zeros(model.n_elements()),
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    run_sweep(
        &model,
        config.pressure,
        config.blowing,
        config.temperature,
        &yke,
        &ykg,
        &mut out,
    )?;
    out.flush()?;
    Ok(())
}
