use clap::{Parser, Subcommand};
use serde_json::Number;

#[derive(Parser)]
#[command(name = "sum-cli")]
#[command(about = "Command-line client for sum-service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that the service is up
    Health,
    /// Sum numbers with /sum_list
    Sum {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<Number>,
    },
    /// Sum numbers with /sum_list_test
    SumTest {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<Number>,
    },
    /// Post a raw body to /sum_list
    Raw { body: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Health => client.get(format!("{}/", base)).send().await?,
        Commands::Sum { numbers } => {
            client
                .post(format!("{}/sum_list", base))
                .json(&numbers)
                .send()
                .await?
        }
        Commands::SumTest { numbers } => {
            client
                .post(format!("{}/sum_list_test", base))
                .json(&numbers)
                .send()
                .await?
        }
        Commands::Raw { body } => {
            client
                .post(format!("{}/sum_list", base))
                .body(body)
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
        eprint!("{}", text);
        std::process::exit(1);
    }

    print!("{}", text);
    Ok(())
}
