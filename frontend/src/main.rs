use clap::Parser;
use client::{
    api::{ApiClient, DEFAULT_API_URL},
    dashboard::{Dashboard, Outcome},
    form::Field,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin, stdin, stdout};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Base URL of the dashboard API
    #[arg(long, env = "DASHBOARD_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Prefill the business name
    #[arg(long)]
    name: Option<String>,

    /// Prefill the business location
    #[arg(long)]
    location: Option<String>,
}

enum Action {
    Edit,
    Submit,
    Regenerate,
    Quit,
}

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let api = ApiClient::new(&args.api_url);
    let mut dashboard = Dashboard::default();
    let mut input = BufReader::new(stdin()).lines();

    if let Err(e) = api.health().await {
        warn!("API at {} is not answering: {e}", args.api_url);
    }

    let mut action = match (args.name, args.location) {
        (Some(name), Some(location)) => {
            dashboard.set_field(Field::Name, name);
            dashboard.set_field(Field::Location, location);
            Action::Submit
        }
        _ => Action::Edit,
    };

    println!("Local Business Dashboard");
    println!("Discover your business insights and SEO potential");

    loop {
        match action {
            Action::Edit => {
                for (field, label) in [
                    (Field::Name, "Business Name"),
                    (Field::Location, "Location"),
                ] {
                    if let Some(error) = dashboard.errors().get(field) {
                        println!("  {error}");
                    }

                    let Some(value) = prompt(&mut input, label).await? else {
                        return Ok(());
                    };
                    dashboard.set_field(field, value);
                }

                action = Action::Submit;
                continue;
            }
            Action::Submit => {
                let query = match dashboard.begin_submit() {
                    Ok(query) => query,
                    Err(_) => {
                        action = Action::Edit;
                        continue;
                    }
                };

                println!("{}", dashboard.submit_label());
                let result = api.business_data(&query).await;
                report(dashboard.finish_submit(result));
            }
            Action::Regenerate => match dashboard.begin_regenerate() {
                Ok(query) => {
                    println!("{}", dashboard.regenerate_label());
                    let result = api.regenerate_headline(&query).await;
                    report(dashboard.finish_regenerate(result));
                }
                Err(outcome) => report(outcome),
            },
            Action::Quit => return Ok(()),
        }

        let card = dashboard.render();
        if !card.is_empty() {
            println!("\n{card}\n");
        }

        action = loop {
            let Some(choice) =
                prompt(&mut input, "[r]egenerate, [n]ew business, [s]ubmit again, [q]uit").await?
            else {
                break Action::Quit;
            };

            match choice.trim() {
                "r" => break Action::Regenerate,
                "n" => break Action::Edit,
                "s" => break Action::Submit,
                "q" => break Action::Quit,
                _ => continue,
            }
        };
    }
}

async fn prompt(input: &mut Input, label: &str) -> anyhow::Result<Option<String>> {
    let mut out = stdout();
    out.write_all(format!("{label}: ").as_bytes()).await?;
    out.flush().await?;

    Ok(input.next_line().await?)
}

fn report(outcome: Outcome) {
    match outcome {
        Outcome::Failed(alert) => eprintln!("{alert}"),
        Outcome::NothingToRegenerate => eprintln!("Fetch business insights first"),
        Outcome::Updated | Outcome::Invalid | Outcome::Busy => {}
    }
}
