//! shard-parse CLI
//!
//! Routes SQL statements to the parser a sharding or encryption layer would
//! use, and prints the decision or the parsed statement.

mod config;
mod error;

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;
use shard_parse_core::{DatabaseType, SqlParserFactory, SqlStatement, TokenStream};
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

use crate::config::Config;
use crate::error::CliError;

/// Dialect-aware SQL parser routing.
#[derive(Parser)]
#[command(name = "shard-parse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Database dialect (mysql, postgresql, oracle, sqlserver, h2).
    #[arg(short, long, env = "SHARD_PARSE_DIALECT", default_value = "mysql")]
    dialect: DatabaseType,

    /// JSON file with sharding, encrypt and metadata sections.
    #[arg(short, long, env = "SHARD_PARSE_CONFIG")]
    config: Option<PathBuf>,

    /// Route for encryption instead of sharding.
    #[arg(short, long)]
    encrypt: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which parser a statement is routed to.
    Route {
        /// Print the decision as JSON.
        #[arg(long)]
        json: bool,

        /// SQL statement (read from stdin if not given).
        sql: Option<String>,
    },

    /// Route and parse a statement.
    Parse {
        /// Print the statement as JSON.
        #[arg(long)]
        json: bool,

        /// SQL statement (read from stdin if not given).
        sql: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::load(cli.config.as_deref())?;
    let factory = SqlParserFactory::new();

    match cli.command {
        Commands::Route { json, sql } => {
            let sql = read_statement(sql)?;
            route(&factory, &config, cli.dialect, cli.encrypt, &sql, json)?;
        }
        Commands::Parse { json, sql } => {
            let sql = read_statement(sql)?;
            let statement = parse(&factory, &config, cli.dialect, cli.encrypt, &sql)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&statement)?);
            } else {
                print_statement(&statement);
            }
        }
    }

    Ok(())
}

/// Takes the statement from the argument, falling back to stdin.
fn read_statement(sql: Option<String>) -> Result<String, CliError> {
    let sql = match sql {
        Some(sql) => sql,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::Stdin)?;
            buf
        }
    };
    let sql = sql.trim();
    if sql.is_empty() {
        return Err(CliError::EmptyStatement);
    }
    Ok(sql.to_string())
}

fn route(
    factory: &SqlParserFactory,
    config: &Config,
    dialect: DatabaseType,
    encrypt: bool,
    sql: &str,
    json: bool,
) -> anyhow::Result<()> {
    if encrypt {
        let parser = factory.route_encrypt(dialect, &config.encrypt, &config.metadata, sql)?;
        let strategy = parser.strategy();
        if json {
            let output = json!({ "strategy": strategy, "rule_set": "encrypt" });
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("encrypt -> {strategy}");
        }
        return Ok(());
    }

    let mut stream = TokenStream::new(sql, dialect);
    let decision = factory.classify(dialect, &mut stream)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&decision)?);
    } else {
        println!("{decision}");
    }
    Ok(())
}

fn parse(
    factory: &SqlParserFactory,
    config: &Config,
    dialect: DatabaseType,
    encrypt: bool,
    sql: &str,
) -> anyhow::Result<SqlStatement> {
    let parser = if encrypt {
        factory.route_encrypt(dialect, &config.encrypt, &config.metadata, sql)?
    } else {
        let mut stream = TokenStream::new(sql, dialect);
        factory.route(dialect, &config.sharding, &mut stream, &config.metadata, sql)?
    };
    let strategy = parser.strategy();
    let statement = parser.parse()?;
    debug!(%strategy, "parsed statement");
    Ok(statement)
}

fn print_statement(statement: &SqlStatement) {
    let kind = match statement {
        SqlStatement::Select(_) => "SELECT",
        SqlStatement::Insert(_) => "INSERT",
        SqlStatement::Update(_) => "UPDATE",
        SqlStatement::Delete(_) => "DELETE",
        SqlStatement::Use(_) => "USE",
        SqlStatement::Describe(_) => "DESCRIBE",
        SqlStatement::Show(_) => "SHOW",
        SqlStatement::Set(_) => "SET",
        SqlStatement::Unified(unified) => unified.category.as_str(),
    };
    println!("{kind}");
    let tables = statement.table_names();
    if !tables.is_empty() {
        println!("tables: {}", tables.join(", "));
    }
    if let SqlStatement::Unified(unified) = statement {
        if !unified.encrypt_columns.is_empty() {
            println!("encrypt columns: {}", unified.encrypt_columns.join(", "));
        }
    }
}
