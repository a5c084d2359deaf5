use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rsdms::{init::init_tracing, prelude::*};
use strum::IntoEnumIterator;

/// Calls AWS Database Migration Service operations from flat parameters
#[derive(Parser)]
#[command(name = "rsdms")]
#[command(version)]
#[command(about = "Calls AWS Database Migration Service operations from flat parameters", long_about = None)]
struct Cli {
    /// AWS region (overrides RSDMS_REGION)
    #[arg(long, value_name = "REGION")]
    region: Option<String>,

    /// Shared config profile (overrides RSDMS_PROFILE)
    #[arg(long, value_name = "PROFILE")]
    profile: Option<String>,

    /// Send requests to this URL instead of the regional endpoint
    #[arg(long, value_name = "URL")]
    endpoint_url: Option<String>,

    /// Part of the response to print: `*`, `^Parameter` or a field path
    #[arg(short, long, value_name = "SELECTOR", value_parser = ResponseSelector::from_str)]
    select: Option<ResponseSelector>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short = 'l', long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Print the request that would be sent and exit
    #[arg(long)]
    dry_run: bool,

    /// Operation name, or `operations` to list them
    operation: String,

    /// Request parameters as PATH=VALUE, e.g. RedshiftSettings.Port=5439
    #[arg(value_name = "PATH=VALUE", value_parser = parse_assignment)]
    params: Vec<(String, ParamValue)>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            region: self.region.clone(),
            profile: self.profile.clone(),
            endpoint_url: self.endpoint_url.clone(),
            log_level: self.log_level.clone(),
            log_format: self.log_format,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = DmsConfig::load().context("Failed to load configuration")?;
    config.merge(cli.overrides());
    init_tracing(&config);

    if cli.operation.eq_ignore_ascii_case("operations") {
        print_operations();
        return Ok(());
    }
    let kind = OperationKind::from_str(&cli.operation).map_err(|_| {
        anyhow!(
            "Unknown operation: {} (run `rsdms operations` for the list)",
            cli.operation
        )
    })?;
    let params: ParameterSet = cli.params.into_iter().collect();

    let value = if cli.dry_run {
        command::preview(kind, &params)
            .with_context(|| format!("Could not build {} request", kind))?
    } else {
        let rt = tokio::runtime::Runtime::new().context("Failed to build tokio runtime")?;
        let manager = DmsManager::from_config(rt.handle(), &config);
        command::invoke(kind, &params, cli.select, &manager)
            .with_context(|| format!("{} failed", kind))?
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn print_operations() {
    for kind in OperationKind::iter() {
        println!("{:<28} {}", kind.to_string(), command::default_selector(kind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_level_has_a_short_flag() {
        let cli = Cli::try_parse_from(["rsdms", "-l", "debug", "DescribeEndpoints"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.overrides().log_level.as_deref(), Some("debug"));
        assert!(Cli::try_parse_from(["rsdms", "-v", "debug", "DescribeEndpoints"]).is_err());
    }
}
