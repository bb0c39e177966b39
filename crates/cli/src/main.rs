use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ec2ctl_aws::AwsProvider;
use ec2ctl_core::cloud_provider::InstanceAction;
use tracing_subscriber::EnvFilter;

mod commands {
    pub mod action;
    pub mod info;
    pub mod instances;
    pub mod regions;
}
mod progress;
mod render;

#[derive(Parser)]
#[command(name = "ec2ctl")]
#[command(about = "Inspect and control EC2 instances across regions", long_about = None)]
struct Cli {
    /// Named profile to resolve credentials from
    #[arg(long, global = true)]
    profile: Option<String>,

    /// Region used for the region-catalog lookup
    #[arg(long, global = true)]
    region: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the regions available to the account
    Regions,
    /// List instances across every region
    Instances,
    /// Show one instance's details
    Info {
        #[arg(help = "The EC2 instance ID to inspect")]
        instance_id: String,
        #[arg(help = "The region hosting the instance")]
        region: String,
    },
    /// Start, stop, or terminate an instance (dry run first)
    Action {
        #[arg(help = "The EC2 instance ID to act on")]
        instance_id: String,
        #[arg(help = "The region hosting the instance")]
        region: String,
        #[arg(help = "One of start, stop, terminate")]
        action: InstanceAction,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let aws = AwsProvider::new(cli.profile, cli.region).await;

    let outcome = match cli.command {
        Commands::Regions => commands::regions::run(&aws).await,
        Commands::Instances => commands::instances::run(&aws).await,
        Commands::Info {
            instance_id,
            region,
        } => commands::info::run(&aws, &instance_id, &region).await,
        Commands::Action {
            instance_id,
            region,
            action,
        } => commands::action::run(&aws, &instance_id, &region, action).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
