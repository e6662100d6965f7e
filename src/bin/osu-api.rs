use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use osu_api::utils::LoggingConfig;
use osu_api::{
    ApiConfig, EndpointRegistry, EndpointSpec, OsuApi, OsuApiBuilder, ParamValue, ParameterSet,
    QueryEncoding, StaticTransport,
};

#[derive(Parser)]
#[command(name = "osu-api", version, about = "osu! API v1 client", author)]
struct Cli {
    /// API key; falls back to OSU_API_KEY.
    #[arg(long, global = true)]
    key: Option<String>,
    /// JSON endpoint table merged over the built-in one.
    #[arg(long, global = true)]
    endpoints: Option<PathBuf>,
    /// Insert parameter values without percent-encoding.
    #[arg(long, global = true)]
    legacy_query: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List known endpoints and their parameters.
    Endpoints,
    /// Print the request URL without sending it.
    Url {
        endpoint: String,
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
    },
    /// Send the request and print the JSON response.
    Fetch {
        endpoint: String,
        #[arg(short = 'p', long = "param", value_parser = parse_param)]
        params: Vec<(String, String)>,
        #[arg(long)]
        compact: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    LoggingConfig::init();

    let cli = Cli::parse();
    let registry = load_registry(cli.endpoints.as_ref())?;

    match &cli.command {
        Command::Endpoints => render_endpoint_table(&registry),
        Command::Url { endpoint, params } => {
            // rendering a URL never dispatches, so no network transport is needed
            let api = client_builder(&cli)?
                .registry(registry)
                .transport(Arc::new(StaticTransport::default()))
                .build()?;
            println!("{}", api.url_for(endpoint, &to_parameter_set(params))?);
        }
        Command::Fetch {
            endpoint,
            params,
            compact,
        } => {
            let api: OsuApi = client_builder(&cli)?.registry(registry).build()?;
            let response = api.fetch(endpoint, &to_parameter_set(params)).await?;
            let content = if *compact {
                serde_json::to_string(&response)?
            } else {
                serde_json::to_string_pretty(&response)?
            };
            println!("{content}");
        }
    }
    Ok(())
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got `{raw}`")),
    }
}

fn to_parameter_set(params: &[(String, String)]) -> ParameterSet {
    params
        .iter()
        .map(|(name, value)| (name.clone(), ParamValue::Text(value.clone())))
        .collect()
}

fn load_registry(path: Option<&PathBuf>) -> anyhow::Result<EndpointRegistry> {
    let mut registry = EndpointRegistry::default();
    if let Some(path) = path {
        registry.extend(EndpointRegistry::load_file(path)?);
    }
    Ok(registry)
}

fn client_builder(cli: &Cli) -> anyhow::Result<OsuApiBuilder> {
    let mut config = match &cli.key {
        Some(key) => ApiConfig::new(key.clone()).apply_env_overrides()?,
        None => ApiConfig::from_env()?,
    };
    if cli.legacy_query {
        config.encoding = QueryEncoding::Legacy;
    }
    Ok(config.into_builder())
}

fn render_endpoint_table(registry: &EndpointRegistry) {
    println!("{:<20} {:<20} {:<16} {}", "Name", "Path", "Required", "Allowed");
    for (name, spec) in registry.iter() {
        println!(
            "{:<20} {:<20} {:<16} {}",
            name,
            spec.path_segment(),
            join_names(spec, EndpointSpec::required),
            join_names(spec, EndpointSpec::allowed)
        );
    }
}

fn join_names(spec: &EndpointSpec, names: fn(&EndpointSpec) -> &[String]) -> String {
    let names = names(spec);
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(",")
    }
}
