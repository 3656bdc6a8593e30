// ABOUTME: readme-cli - command-line front end for the readme site helpers
// ABOUTME: Runs queries, renders templates, and formats values from the shell
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Readme Site Contributors
//!
//! Usage:
//! ```bash
//! # Count likes of a post
//! readme-cli count likes post_id 7
//!
//! # Run a parameterized query (values are typed from their JSON form)
//! readme-cli query "SELECT * FROM posts WHERE id = ? AND title = ?" -p 7 -p '"Hello"' --single
//!
//! # Insert a row and print its id
//! readme-cli insert "INSERT INTO tags (name) VALUES (?)" -p '"rust"'
//!
//! # Render a template with a JSON context
//! readme-cli render post.html --context '{"title": "Hello"}'
//!
//! # Format a stored timestamp relative to now
//! readme-cli ago "2024-03-01 12:00:00"
//! ```

mod commands;

use clap::{Parser, Subcommand};
use readme_site::config::database::DatabaseUrl;
use readme_site::config::SiteConfig;
use readme_site::constants::limits::DEFAULT_TRUNCATE_LIMIT;
use readme_site::errors::AppError;
use readme_site::logging::{AppLogger, LoggingConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "readme-cli",
    about = "Readme site helper CLI",
    long_about = "Run parameterized queries, render templates, and format values the way the readme site does."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Templates directory override
    #[arg(long, global = true)]
    templates_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Count rows where a column equals a value
    Count {
        /// Table name
        table: String,
        /// Column name
        column: String,
        /// Value to match (JSON number or string, otherwise text)
        value: String,
    },

    /// Run a SELECT and print rows as JSON
    Query {
        /// SQL with `?` placeholders
        sql: String,
        /// Placeholder value, in order (repeatable)
        #[arg(long = "param", short = 'p')]
        params: Vec<String>,
        /// Return only the first row
        #[arg(long)]
        single: bool,
    },

    /// Run an INSERT and print the new row id
    Insert {
        /// SQL with `?` placeholders
        sql: String,
        /// Placeholder value, in order (repeatable)
        #[arg(long = "param", short = 'p')]
        params: Vec<String>,
    },

    /// Render a template to stdout
    Render {
        /// Template name relative to the templates directory
        name: String,
        /// Context as a JSON object
        #[arg(long, default_value = "{}")]
        context: String,
    },

    /// Format a stored timestamp as "N units ago"
    Ago {
        /// Timestamp in `YYYY-MM-DD HH:MM:SS` form
        timestamp: String,
        /// Reference time instead of the current local time
        #[arg(long)]
        now: Option<String>,
    },

    /// Truncate text at a word boundary
    Truncate {
        /// Text to shorten
        text: String,
        /// Maximum length in characters
        #[arg(long, default_value_t = DEFAULT_TRUNCATE_LIMIT)]
        limit: usize,
    },

    /// Pick the Russian plural form for a number
    Plural {
        /// Number to agree with
        #[arg(allow_hyphen_values = true)]
        number: i64,
        /// Form for 1, 21, 31, ...
        one: String,
        /// Form for 2-4, 22-24, ...
        few: String,
        /// Form for everything else
        many: String,
    },

    /// Print a random past timestamp for seed data
    SeedDate {
        /// Unit index: 0 minutes, 1 hours, 2 days, 3 weeks, 4 months
        #[arg(allow_hyphen_values = true)]
        index: i64,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::for_cli(cli.verbose).init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            AppLogger::log_fatal("readme-cli", &format!("{e:#}"));
            eprintln!("Error: {e:#}");
            let code = e
                .downcast_ref::<AppError>()
                .map_or(1, |app| app.code.exit_code());
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = SiteConfig::from_env()?;
    if let Some(url) = cli.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(url)?;
    }
    if let Some(dir) = cli.templates_dir {
        config.templates.root = dir;
    }

    match cli.command {
        Command::Count {
            table,
            column,
            value,
        } => commands::database::count(&config, &table, &column, &value).await,
        Command::Query {
            sql,
            params,
            single,
        } => commands::database::query(&config, &sql, &params, single).await,
        Command::Insert { sql, params } => commands::database::insert(&config, &sql, &params).await,
        Command::Render { name, context } => commands::present::render(&config, &name, &context),
        Command::Ago { timestamp, now } => commands::present::ago(&timestamp, now.as_deref()),
        Command::Truncate { text, limit } => {
            commands::present::truncate(&text, limit);
            Ok(())
        }
        Command::Plural {
            number,
            one,
            few,
            many,
        } => {
            commands::present::plural(number, &one, &few, &many);
            Ok(())
        }
        Command::SeedDate { index } => {
            commands::present::seed_date(index);
            Ok(())
        }
    }
}
