//! `check-elb-health`: monitoring plugin for AWS Elastic Load Balancers.
//!
//! # Flow
//!
//! ```text
//!   argv + env ──▶ CliArgs ──┐
//!                            ├──▶ CheckConfig ──▶ validate
//!   --config (TOML) ─────────┘                       │
//!                                                    ▼
//!                     region: flag, or metadata AZ minus zone letter
//!                                                    │
//!                                                    ▼
//!                     DescribeInstanceHealth ──▶ Evaluator ──▶ Verdict
//!                                                                │
//!                        stdout: "<STATUS>: <message>"  ◀────────┘
//!                        exit:   0 OK / 1 WARNING / 2 CRITICAL / 3 UNKNOWN
//! ```

use std::process::ExitCode;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::Parser;

use elb_health_check::aws::{ElbClient, MetadataClient};
use elb_health_check::config::{load_settings, validate_config, CliArgs, ConfigError, ProbeSettings};
use elb_health_check::observability::init_logging;
use elb_health_check::{CheckError, HealthCheck, Verdict};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                return ExitCode::SUCCESS;
            }
            return report(Verdict::unknown("invalid command line"));
        }
    };

    report(run(args).await)
}

fn report(verdict: Verdict) -> ExitCode {
    println!("{}", verdict);
    verdict.exit_code()
}

async fn run(args: CliArgs) -> Verdict {
    let settings = match args.config.as_deref().map(load_settings) {
        Some(Ok(settings)) => settings,
        Some(Err(e)) => return Verdict::unknown(e.to_string()),
        None => ProbeSettings::default(),
    };

    init_logging(&settings.observability);

    let config = args.into_config(&settings);
    if let Err(errors) = validate_config(&config) {
        return Verdict::unknown(ConfigError::Validation(errors).to_string());
    }

    tracing::info!(
        elb_name = %config.elb_name,
        region = config.region.as_deref().unwrap_or("<metadata>"),
        filtered = config.instances.as_ref().map(Vec::len).unwrap_or(0),
        "Configuration loaded"
    );

    let zones = MetadataClient::new(
        config.metadata_url.clone(),
        Duration::from_secs(config.metadata_timeout_secs),
    );
    let elb = match ElbClient::new(
        config.credentials.clone(),
        config.endpoint.clone(),
        Duration::from_secs(config.api_timeout_secs),
    ) {
        Ok(client) => client,
        Err(e) => return Verdict::critical(CheckError::from(e).to_string()),
    };

    HealthCheck::new(&config).run(&zones, &elb).await
}
