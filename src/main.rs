// SPDX-License-Identifier: PMPL-1.0-or-later

//! campus-assist: multilingual campus-support FAQ assistant
//!
//! Answers student queries from a keyword FAQ table in English, Hindi,
//! Marathi, Gujarati and Tamil, serves the responder over JSON lines, and
//! reports on saved conversation transcripts.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use campus_assist::analytics::{self, TimeRange};
use campus_assist::config::Config;
use campus_assist::faq::{FaqFilter, FaqTable};
use campus_assist::i18n::{detect_language, t, Lang};
use campus_assist::report::{OutputFormat, ReportFormatter};
use campus_assist::service;
use campus_assist::transcript::{load_transcripts, save_transcript, ConversationFilter};
use campus_assist::types::{Category, Conversation, Message};

#[derive(Parser)]
#[command(name = "campus-assist")]
#[command(version)]
#[command(about = "Multilingual campus-support FAQ assistant")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (YAML)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// FAQ table file replacing the built-in entries
    #[arg(long, global = true, value_name = "FILE")]
    faq: Option<PathBuf>,

    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer a single query
    Ask {
        /// The user's question
        #[arg(value_name = "TEXT")]
        text: String,

        /// Reply language (en, hi, mr, gu, ta); detected from script if omitted
        #[arg(short, long)]
        lang: Option<Lang>,

        /// Prior messages (JSON array of messages or a transcript file)
        #[arg(long, value_name = "FILE")]
        history: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Interactive chat session on stdin
    Chat {
        /// Session language
        #[arg(short, long)]
        lang: Option<Lang>,

        /// Save the transcript here on exit (.json or .yaml)
        #[arg(long, value_name = "FILE")]
        save: Option<PathBuf>,
    },

    /// Serve JSON-lines requests on stdin/stdout
    Serve,

    /// Inspect FAQ tables
    Faq {
        #[command(subcommand)]
        action: FaqAction,
    },

    /// Browse saved conversation transcripts
    Logs {
        /// Transcript file or directory
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Text some message must contain
        #[arg(short, long)]
        search: Option<String>,

        /// Conversation language
        #[arg(short, long)]
        lang: Option<Lang>,

        /// Satisfaction rating (1-5)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: Option<u8>,

        /// Only conversations started within this range
        #[arg(long, value_enum, default_value = "all")]
        range: TimeRange,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Aggregate analytics over saved transcripts
    Analyze {
        /// Transcript file or directory
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Time range
        #[arg(long, value_enum, default_value = "30d")]
        range: TimeRange,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Guess a supported language from the script of some text
    Detect {
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// List supported languages
    Languages,
}

#[derive(Subcommand)]
enum FaqAction {
    /// List entries, optionally filtered
    List {
        /// Category name (e.g. "fees", "Academic Calendar")
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,

        /// Text in the question, answer or keywords
        #[arg(short, long)]
        search: Option<String>,

        /// Language to display
        #[arg(short, long)]
        lang: Option<Lang>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Validate a FAQ table file and print its summary
    Check {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn parse_category(value: &str) -> std::result::Result<Category, String> {
    Category::parse(value).ok_or_else(|| format!("unknown category: {}", value))
}

fn init_tracing(config: &Config, verbose: bool) {
    let fallback = if verbose { "debug" } else { config.log_filter.as_str() };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(faq) = cli.faq {
        config.faq_path = Some(faq);
    }
    init_tracing(&config, cli.verbose);

    match cli.command {
        Commands::Ask {
            text,
            lang,
            history,
            format,
        } => {
            let responder = config.responder()?;
            let lang = lang.unwrap_or_else(|| guess_language(&text, config.default_language));
            let history = match history {
                Some(path) => load_history(&path)?,
                None => Vec::new(),
            };
            let reply = responder.respond(&text, lang, &history);
            format.emit(&reply, |reply| ReportFormatter::new(lang).print_reply(reply))?;
        }

        Commands::Chat { lang, save } => {
            let responder = config.responder()?;
            let lang = lang.unwrap_or(config.default_language);
            let conversation = run_chat(&responder, lang)?;
            if let Some(path) = save {
                save_transcript(&conversation, &path)?;
                println!("{} {}", "Transcript saved:".green(), path.display());
            }
        }

        Commands::Serve => {
            let responder = config.responder()?;
            info!(entries = responder.table().len(), "serving JSON lines on stdin");
            let stdin = io::stdin();
            let stdout = io::stdout();
            let served = service::serve(&responder, stdin.lock(), stdout.lock())?;
            info!(served, "input closed");
        }

        Commands::Faq { action } => match action {
            FaqAction::List {
                category,
                search,
                lang,
                format,
            } => {
                let table = config.faq_table()?;
                let lang = lang.unwrap_or(config.default_language);
                let filter = FaqFilter {
                    search,
                    category,
                    language: lang,
                };
                let entries = table.filter(&filter);
                format.emit(&entries, |entries| {
                    ReportFormatter::new(lang).print_faq_entries(entries)
                })?;
            }
            FaqAction::Check { file, format } => {
                let table = FaqTable::load(&file)?;
                let summary = TableSummary {
                    entries: table.len(),
                    fingerprint: table.fingerprint()?,
                    categories: table.categories(),
                };
                format.emit(&summary, |s| {
                    ReportFormatter::default().print_table_summary(&s.categories, &s.fingerprint)
                })?;
            }
        },

        Commands::Logs {
            path,
            search,
            lang,
            rating,
            range,
            format,
        } => {
            let conversations = load_transcripts(&path)?;
            let filter = ConversationFilter {
                search,
                language: lang,
                rating,
                since: range.since(chrono::Utc::now()),
            };
            let selected = filter.apply(&conversations);
            format.emit(&selected, |selected| {
                ReportFormatter::new(config.default_language).print_conversations(selected)
            })?;
        }

        Commands::Analyze {
            path,
            range,
            format,
        } => {
            let table = config.faq_table()?;
            let conversations = load_transcripts(&path)?;
            let report = analytics::summarize(
                &table,
                &conversations,
                range,
                chrono::Utc::now(),
                config.popular_query_limit,
            );
            format.emit(&report, |report| {
                ReportFormatter::new(config.default_language).print_analytics(report)
            })?;
        }

        Commands::Detect { text } => {
            let lang = detect_language(&text);
            println!("{} ({}, {})", lang.code(), lang.english_name(), lang.native_name());
        }

        Commands::Languages => {
            for lang in Lang::all() {
                let marker = if *lang == config.default_language {
                    " (default)".dimmed()
                } else {
                    "".normal()
                };
                println!(
                    "{}  {:9} {}{}",
                    lang.code().bold(),
                    lang.english_name(),
                    lang.native_name(),
                    marker
                );
            }
        }
    }

    Ok(())
}

#[derive(serde::Serialize)]
struct TableSummary {
    entries: usize,
    fingerprint: String,
    categories: Vec<campus_assist::faq::CategoryCount>,
}

/// Non-Latin scripts pick their language; Latin text keeps the default.
/// Devanagari reads as Hindi unless Marathi is the default.
fn guess_language(text: &str, default: Lang) -> Lang {
    match (detect_language(text), default) {
        (Lang::En, _) | (Lang::Hi, Lang::Mr) => default,
        (detected, _) => detected,
    }
}

/// History from a bare message array, or the messages of the last
/// conversation in a transcript file.
fn load_history(path: &Path) -> Result<Vec<Message>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("reading history {}", path.display()))?;
    if let Ok(messages) = serde_json::from_str::<Vec<Message>>(&source) {
        return Ok(messages);
    }
    let conversations = load_transcripts(path)?;
    Ok(conversations
        .into_iter()
        .last()
        .map(|c| c.messages)
        .unwrap_or_default())
}

fn run_chat(responder: &campus_assist::Responder, lang: Lang) -> Result<Conversation> {
    let session_id = format!("cli-{}", chrono::Utc::now().format("%Y%m%d%H%M%S"));
    let mut conversation = Conversation::start(session_id, lang);
    let mut formatter = ReportFormatter::new(lang);

    if let Some(welcome) = conversation.messages.first() {
        println!("{} {}", format!("{}:", t(lang, "label.assistant")).bold().cyan(), welcome.content);
    }
    println!("{}", "Commands: /lang <code>, /rate <1-5>, /quit".dimmed());

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();

        if input == "/quit" || input == "/exit" {
            break;
        }
        if let Some(code) = input.strip_prefix("/lang") {
            match code.trim().parse::<Lang>() {
                Ok(next) => {
                    conversation.set_language(next);
                    formatter = ReportFormatter::new(next);
                    println!("{} {}", "Language:".green(), next.native_name());
                }
                Err(err) => println!("{}", err.to_string().red()),
            }
            continue;
        }
        if let Some(value) = input.strip_prefix("/rate") {
            let outcome = value
                .trim()
                .parse::<u8>()
                .map_err(anyhow::Error::from)
                .and_then(|rating| conversation.rate(rating).map_err(anyhow::Error::from));
            match outcome {
                Ok(()) => println!("{}", "Thanks for the feedback".green()),
                Err(err) => println!("{}", err.to_string().red()),
            }
            continue;
        }

        if let Some(reply) = conversation.send(responder, input) {
            formatter.print_reply(&reply);
        }
        stdout.flush()?;
    }

    Ok(conversation)
}
