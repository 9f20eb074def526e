use clap::{Parser, Subcommand};
use std::path::PathBuf;

// Usage errors exit with clap's own code (2)
const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_PERSISTENCE: i32 = 3;
const EXIT_CONFIG: i32 = 4;
const EXIT_SCORING: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Read a saved course from stdin and print its final score
    Grade,
}

#[derive(Parser, Debug)]
#[command(name = "grade-calc")]
#[command(about = "Build a weighted course grade model and compute the final score", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/grade-calc/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Without a subcommand, start an interactive session
    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    grade_calc::logger::init_logger(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);
    let config = match grade_calc::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let code = match cli.command {
        None => run_interactive(&config),
        Some(Commands::Grade) => run_grade(&config),
    };
    std::process::exit(code);
}

fn run_interactive(config: &grade_calc::config::Config) -> i32 {
    let settings = grade_calc::session::SessionSettings::from_config(
        config,
        grade_calc::output::should_use_colors(),
    );
    let stdin = std::io::stdin();
    let mut session = grade_calc::session::Session::new(
        stdin.lock(),
        std::io::stdout(),
        std::io::stderr(),
        settings,
    );

    match session.run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Session error: {:#}", e);
            EXIT_FAILURE
        }
    }
}

fn run_grade(config: &grade_calc::config::Config) -> i32 {
    use grade_calc::grade::{grade, GradeError};

    match grade(std::io::stdin().lock(), std::io::stdout().lock(), config.precision()) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            match e {
                GradeError::Read(_) => EXIT_PERSISTENCE,
                GradeError::Score(_) => EXIT_SCORING,
                GradeError::Write(_) => EXIT_FAILURE,
            }
        }
    }
}
