use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::parse::ParseStage;
use services::{
    AppServices, Clock, GeminiClient, GeneratedQuiz, GenerationError, QuizGenerationService,
    QuizTakingService, ResultsService,
};
use storage::Storage;
use ui::{App, DEFAULT_TOPICS, UiApp, build_app_context};

const DATA_DIR_VAR: &str = "QUIZ_DATA_DIR";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    EmptyValue { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::EmptyValue { flag } => write!(f, "{flag} must not be empty"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    let value = args.next().ok_or(ArgsError::MissingValue { flag })?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyValue { flag });
    }
    Ok(value)
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn quiz_generation(&self) -> Arc<QuizGenerationService> {
        self.services.quiz_generation()
    }

    fn quiz_taking(&self) -> Arc<QuizTakingService> {
        self.services.quiz_taking()
    }

    fn results(&self) -> Arc<ResultsService> {
        self.services.results()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui       [--data-dir <path>]");
    eprintln!("  cargo run -p app -- generate [--data-dir <path>] [--topics <text>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --data-dir .");
    eprintln!("  --topics \"{DEFAULT_TOPICS}\"");
    eprintln!();
    eprintln!("Environment (a .env file in the working directory is loaded first):");
    eprintln!("  GEMINI_API_KEY (required), QUIZ_MODEL, QUIZ_API_BASE_URL,");
    eprintln!("  QUIZ_HTTP_TIMEOUT_SECS, {DATA_DIR_VAR}, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Generate,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "generate" => Some(Self::Generate),
            _ => None,
        }
    }
}

struct Args {
    data_dir: PathBuf,
    topics: String,
}

impl Args {
    fn parse(
        cmd: Command,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Self, ArgsError> {
        let mut data_dir = std::env::var(DATA_DIR_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from("."), PathBuf::from);
        let mut topics = DEFAULT_TOPICS.to_string();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--data-dir" => {
                    data_dir = PathBuf::from(require_value(args, "--data-dir")?);
                }
                "--topics" if cmd == Command::Generate => {
                    topics = require_value(args, "--topics")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { data_dir, topics })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(cmd, &mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    let source = GeminiClient::from_env()?;
    log::info!(
        "using model {} with data directory {}",
        source.config().model,
        parsed.data_dir.display()
    );
    let storage = Storage::files(&parsed.data_dir).await?;
    let services = AppServices::new(&storage, Arc::new(source), Clock::system());

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Cybersecurity Quiz Platform")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Generate => {
            let outcome = services
                .quiz_generation()
                .generate_and_save(&parsed.topics)
                .await;
            match outcome {
                Ok(generated) => {
                    print_generated(&generated);
                    Ok(())
                }
                Err(err) => {
                    print_generation_failure(&err);
                    Err(err.into())
                }
            }
        }
    }
}

fn print_generated(generated: &GeneratedQuiz) {
    let how = match generated.stage {
        ParseStage::Strict => "parsed directly",
        ParseStage::Salvaged => "recovered from surrounding text",
    };
    println!(
        "Quiz generated successfully with {} questions (attempt {}, {how}).",
        generated.questions.len(),
        generated.attempt
    );
    for (index, question) in generated.questions.iter().enumerate() {
        println!();
        println!("{}. {}", index + 1, question.question);
        for option in &question.options {
            println!("   {option}");
        }
        println!("   Correct: {}", question.correct);
    }
}

fn print_generation_failure(err: &GenerationError) {
    let unreachable = err.transport_failures();
    let unreadable = err.content_failures();
    for failure in &unreachable {
        eprintln!("could not reach the generator: {failure}");
    }
    for failure in &unreadable {
        eprintln!("content could not be understood: {failure}");
    }
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    pretty_env_logger::init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
