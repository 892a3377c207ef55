use clap::{Parser, Subcommand};
use lamport_cli::client::{NodeClient, DEFAULT_NODE};
use lamport_cli::commands::{event, events, message, time};

#[derive(Parser)]
#[command(name = "lamport")]
#[command(about = "Client for a Lamport timestamp node", long_about = None)]
struct Cli {
    /// Base URL of the node.
    #[arg(long, env = "LAMPORT_NODE", default_value = DEFAULT_NODE)]
    node: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a local event
    Event {
        /// Event label (the node defaults to "Local event")
        #[arg(long, short)]
        message: Option<String>,
    },
    /// Deliver a message carrying a remote Lamport timestamp
    Message {
        /// Sender's logical time
        #[arg(long, short, allow_negative_numbers = true)]
        timestamp: i64,

        /// Message label
        #[arg(long, short)]
        message: String,
    },
    /// List every recorded event
    Events,
    /// Show the current Lamport timestamp
    Time,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = NodeClient::new(cli.node);

    match cli.command {
        Commands::Event { message } => event::run(&client, message).await,
        Commands::Message { timestamp, message: label } => {
            message::run(&client, timestamp, &label).await
        }
        Commands::Events => events::run(&client).await,
        Commands::Time => time::run(&client).await,
    }
}
