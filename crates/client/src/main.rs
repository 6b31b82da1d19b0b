//! roofquote-client CLI entry point.

use clap::Parser;
use roofquote_client::cli::health::HealthAction;
use roofquote_client::cli::quotes::{list_filter, QuotesAction};
use roofquote_client::cli::stats::StatsAction;
use roofquote_client::cli::{Cli, Commands, OutputFormat};
use roofquote_client::output::{format_output, pretty};
use roofquote_client::{ClientError, RoofquoteClient};

/// Exit code when the server rejected the request (4xx).
const EXIT_REJECTED: i32 = 2;
/// Exit code for transport failures, server errors and failed health checks.
const EXIT_FAILURE: i32 = 1;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err}");
        std::process::exit(exit_code(&err));
    }
}

fn exit_code(err: &ClientError) -> i32 {
    if err.is_rejected() {
        EXIT_REJECTED
    } else {
        EXIT_FAILURE
    }
}

async fn run(cli: Cli) -> Result<(), ClientError> {
    let client = RoofquoteClient::new(&cli.base_url);

    match cli.command {
        Commands::Quotes(quotes_cmd) => match quotes_cmd.action {
            QuotesAction::Submit(args) => {
                let response = client.submit_quote(&args.into_new_quote()).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&response, cli.format)),
                    OutputFormat::Pretty => {
                        if !cli.quiet {
                            println!("{}", response.message);
                        }
                    }
                }
            }
            QuotesAction::List { state, roof_type } => {
                let quotes = client.list_quotes(&list_filter(state, roof_type)).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&quotes, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_quotes(&quotes)),
                }
            }
        },
        Commands::Filters => {
            let filters = client.filters().await?;
            match cli.format {
                OutputFormat::Json => println!("{}", format_output(&filters, cli.format)),
                OutputFormat::Pretty => println!("{}", pretty::format_filters(&filters)),
            }
        }
        Commands::Stats(stats_cmd) => match stats_cmd.action {
            StatsAction::Summary(args) => {
                let summary = client.stats_summary(&args.into_filter()).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&summary, cli.format)),
                    OutputFormat::Pretty => println!("{}", pretty::format_summary(&summary)),
                }
            }
            StatsAction::ByState(args) => {
                let counts = client.stats_by_state(&args.into_filter()).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&counts, cli.format)),
                    OutputFormat::Pretty => {
                        println!("{}", pretty::format_map("PROJECTS BY STATE", &counts))
                    }
                }
            }
            StatsAction::RoofSizeType(args) => {
                let averages = client.stats_roof_size_by_type(&args.into_filter()).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&averages, cli.format)),
                    OutputFormat::Pretty => println!(
                        "{}",
                        pretty::format_map("AVERAGE ROOF SIZE BY TYPE", &averages)
                    ),
                }
            }
            StatsAction::MonthlyTrend(args) => {
                let trend = client.stats_monthly_trend(&args.into_filter()).await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&trend, cli.format)),
                    OutputFormat::Pretty => {
                        println!("{}", pretty::format_map("PROJECTS BY MONTH", &trend))
                    }
                }
            }
        },
        Commands::Health(health_cmd) => match health_cmd.action {
            HealthAction::Live => {
                let alive = client.health_live().await?;
                if !cli.quiet {
                    println!("{}", if alive { "live" } else { "not live" });
                }
                if !alive {
                    std::process::exit(EXIT_FAILURE);
                }
            }
            HealthAction::Ready => {
                let status = client.health_ready().await?;
                match cli.format {
                    OutputFormat::Json => println!("{}", format_output(&status, cli.format)),
                    OutputFormat::Pretty => match &status.error {
                        Some(err) => println!("not ready: {}", err),
                        None => println!("ready"),
                    },
                }
                if !status.healthy {
                    std::process::exit(EXIT_FAILURE);
                }
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_request_exit_code() {
        let err = ClientError::Server {
            status: 400,
            message: "Failed to parse the request body as JSON".to_string(),
        };
        assert_eq!(exit_code(&err), EXIT_REJECTED);
    }

    #[test]
    fn test_server_failure_exit_code() {
        let err = ClientError::Server {
            status: 503,
            message: "Connection failed: database is locked".to_string(),
        };
        assert_eq!(exit_code(&err), EXIT_FAILURE);
    }
}
