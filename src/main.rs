use clap::Parser;
use srccollect::config::{CollectorConfig, DEFAULT_OUTPUT, DEFAULT_SEARCH_PATH, ROOT_ENV_VAR};
use srccollect::logger::initialize_logger;
use srccollect::run_collector;
use std::path::PathBuf;
use tracing::error;

const EXAMPLES: &str = "\
Examples:
  srccollect
  srccollect --path \"android/src android/app\" --output java_kotlin_gradle_contents.txt
  srccollect -p \"android ios\" -o mobile_files.txt";

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Collect Java, Kotlin, and Gradle file contents into a single file",
    long_about = None,
    after_help = EXAMPLES
)]
struct CliArgs {
    #[arg(
        short = 'p',
        long,
        default_value = DEFAULT_SEARCH_PATH,
        help = "Space-separated paths to search for Java/Kotlin/Gradle files"
    )]
    path: String,
    #[arg(
        short = 'o',
        long,
        default_value = DEFAULT_OUTPUT,
        help = "Output file name, relative to the project root"
    )]
    output: PathBuf,
    #[arg(
        long,
        env = ROOT_ENV_VAR,
        help = "Project root the search paths are resolved against (defaults to the current directory)"
    )]
    root: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let cli_args = CliArgs::parse();
    initialize_logger();

    let config = match CollectorConfig::new(cli_args.root, &cli_args.path, cli_args.output) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_collector(&config).await {
        error!("Error collecting files: {}", e);
        std::process::exit(1);
    }
}
