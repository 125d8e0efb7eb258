//! Formbind CLI - bind indexed collections from flat value spaces

use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::str::FromStr;

use formbind::{
    keys, parse_query, BindError, BindingContext, BoundCollection, CollectionBinder,
    FixSuggestion, FormProvider, InvalidValue, Locale, ParseBinder, ValueProvider,
};

#[derive(Parser)]
#[command(name = "formbind")]
#[command(about = "Bind indexed collections from flat form/query value spaces")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bind a named collection and print it as JSON
    Bind {
        /// Form-urlencoded value space, e.g. 'items[0]=1&items[1]=2'
        query: Option<String>,

        /// Collection name to bind
        #[arg(short, long)]
        name: String,

        /// Element type (int, float, bool, string)
        #[arg(short, long, default_value = "string")]
        elem_type: String,

        /// Read the value space from a file instead of the argument
        #[arg(short, long)]
        input: Option<String>,

        /// Locale hint for element conversion, e.g. fr-FR
        #[arg(short, long)]
        locale: Option<String>,
    },

    /// Show which binding convention a value space selects for a name
    Inspect {
        /// Form-urlencoded value space
        query: Option<String>,

        /// Collection name to probe
        #[arg(short, long)]
        name: String,

        /// Read the value space from a file instead of the argument
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("{} {err}", "error:".red().bold());
        if let Some(fix) = err
            .downcast_ref::<BindError>()
            .and_then(FixSuggestion::fix_suggestion)
        {
            eprintln!("  {} {fix}", "hint:".yellow());
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Bind {
            query,
            name,
            elem_type,
            input,
            locale,
        } => {
            let provider = load_value_space(query.as_deref(), input.as_deref())?;
            keys::validate_model_name(&name)?;
            let locale = locale.map(Locale::new);

            let report = match elem_type.as_str() {
                "int" => bind_as::<i64>(&provider, &name, locale).await,
                "float" => bind_as::<f64>(&provider, &name, locale).await,
                "bool" => bind_as::<bool>(&provider, &name, locale).await,
                "string" => bind_as::<String>(&provider, &name, locale).await,
                other => {
                    return Err(BindError::UnknownElementType {
                        name: other.to_string(),
                    }
                    .into())
                }
            }?;

            println!("{}", report.rendered);
            print_validation(&name, &report.invalid);
        }

        Commands::Inspect { query, name, input } => {
            let provider = load_value_space(query.as_deref(), input.as_deref())?;
            keys::validate_model_name(&name)?;

            let convention = if provider.get_value(&keys::index_key(&name)).await.is_some() {
                "explicit-index"
            } else if provider.get_value(&name).await.is_some() {
                "flat"
            } else if provider.has_indexed_keys(&name) {
                "implicit-index"
            } else {
                "none"
            };

            println!("{} {convention}", format!("{name}:").bold());
        }
    }

    Ok(())
}

struct BindReport {
    rendered: String,
    invalid: Vec<InvalidValue>,
}

async fn bind_as<T>(
    provider: &FormProvider,
    name: &str,
    locale: Option<Locale>,
) -> anyhow::Result<BindReport>
where
    T: FromStr + Default + Serialize + Send + Sync,
{
    let element_binder = ParseBinder::<T>::new();
    let mut cx = BindingContext::new(name, provider, &element_binder);
    if let Some(locale) = locale {
        cx = cx.with_locale(locale);
    }

    let bound = CollectionBinder::new().bind_model(&mut cx).await;
    let rendered = match bound {
        BoundCollection::NotBound => "null".to_string(),
        BoundCollection::Fresh(items) => serde_json::to_string(&items)?,
        // The CLI never supplies a pre-existing destination
        BoundCollection::InPlace => unreachable!("no existing instance was supplied"),
    };

    Ok(BindReport {
        rendered,
        invalid: cx.state.invalid_values().to_vec(),
    })
}

fn print_validation(name: &str, invalid: &[InvalidValue]) {
    if invalid.is_empty() {
        return;
    }
    eprintln!(
        "{} {} value(s) for '{name}' failed conversion:",
        "warning:".yellow().bold(),
        invalid.len()
    );
    for entry in invalid {
        eprintln!("  {} <- {:?}", entry.key, entry.raw);
    }
}

fn load_value_space(
    query: Option<&str>,
    input: Option<&str>,
) -> Result<FormProvider, BindError> {
    let raw = match (query, input) {
        (_, Some(path)) => fs::read_to_string(path)?,
        (Some(query), None) => query.to_string(),
        (None, None) => {
            return Err(BindError::InvalidQuery {
                details: "no query argument and no --input file".into(),
            })
        }
    };
    parse_query(raw.trim())
}
