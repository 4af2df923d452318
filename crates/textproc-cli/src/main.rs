//! textproc command-line client.
//!
//! Provides the `textproc` binary with two subcommands: `submit`, which runs
//! the same submit handler the page uses against a running server, and
//! `process`, which applies the processing function locally.

use std::process;

use clap::{Parser, Subcommand};

use textproc_client::{Page, SubmitHandler, INPUT_ELEMENT_ID};
use textproc_core::{process_data, Locale};

/// textproc client tools.
#[derive(Parser)]
#[command(name = "textproc", about = "textproc client tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Submit text to a running server and print the rendered output.
    Submit {
        /// Text to submit, sent verbatim.
        #[arg(short, long)]
        input: String,

        /// Server base URL.
        #[arg(short, long, default_value = "http://127.0.0.1:8000")]
        url: String,

        /// Label locale: en or ru.
        #[arg(short, long, default_value = "en")]
        locale: String,
    },

    /// Process text locally without a server.
    Process {
        /// Text to process.
        text: String,

        /// Label locale: en or ru.
        #[arg(short, long, default_value = "en")]
        locale: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Submit { input, url, locale } => run_submit(&input, &url, &locale).await,
        Commands::Process { text, locale } => run_process(&text, &locale),
    };
    process::exit(exit_code);
}

/// Execute the submit subcommand.
///
/// Returns exit code: 0 = result rendered, 1 = error rendered,
/// 2 = invalid arguments.
async fn run_submit(input: &str, url: &str, locale: &str) -> i32 {
    let locale = match parse_locale(locale) {
        Ok(l) => l,
        Err(code) => return code,
    };

    let page = Page::new();
    page.set_value(INPUT_ELEMENT_ID, input);

    let output = SubmitHandler::new(url, locale).submit(&page).await;
    if output.is_error() {
        eprintln!("{}", output);
        1
    } else {
        println!("{}", output);
        0
    }
}

/// Execute the process subcommand.
fn run_process(text: &str, locale: &str) -> i32 {
    match parse_locale(locale) {
        Ok(locale) => {
            println!("{}", process_data(text, locale));
            0
        }
        Err(code) => code,
    }
}

fn parse_locale(s: &str) -> Result<Locale, i32> {
    s.parse::<Locale>().map_err(|e| {
        eprintln!("Error: {}", e);
        2
    })
}
