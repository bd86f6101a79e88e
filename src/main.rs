use csv_summary::{Config, Dataset, ReportError, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process,
};

use bpaf::Bpaf;
use log::info;

/// Summarizes a budget or election csv into a plain-text report
#[derive(Debug, Clone, Bpaf)]
#[bpaf(options, version)]
struct Options {
    /// Directory holding the input csv files
    #[bpaf(long, argument("DIR"), fallback(PathBuf::from(DEFAULT_INPUT_DIR)))]
    input_dir: PathBuf,
    /// Directory the report is written to
    #[bpaf(long, argument("DIR"), fallback(PathBuf::from(DEFAULT_OUTPUT_DIR)))]
    output_dir: PathBuf,
    /// Kind of data: budget or poll
    #[bpaf(positional("KIND"))]
    dataset: Dataset,
    /// Input file name without the .csv extension, prompted for when omitted
    #[bpaf(positional("NAME"))]
    name: Option<String>,
}

fn main() {
    env_logger::init();
    if let Err(e) = run(options().run()) {
        eprintln!("Error: {}", e);
        process::exit(1)
    }
}

fn run(opts: Options) -> Result<(), ReportError> {
    let config = Config::new(opts.input_dir, opts.output_dir);
    let name = match opts.name {
        Some(name) => name,
        None => prompt(&config, opts.dataset)?,
    };

    let outcome = csv_summary::execute(&config, opts.dataset, &name)?;
    print!("\n{}", outcome.report());
    info!("report saved to {}", outcome.output().display());

    Ok(())
}

fn prompt(config: &Config, dataset: Dataset) -> io::Result<String> {
    let mut stdout = io::stdout();
    writeln!(stdout, "Choose either {}", dataset.sample_names().join(" or "))?;
    write!(
        stdout,
        "Enter name of file in {} folder to analyze: ",
        config.input_dir().display()
    )?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
