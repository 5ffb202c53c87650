//! ruffnote-client CLI entry point.

use clap::Parser;
use ruffnote_client::cli::items::ItemsAction;
use ruffnote_client::cli::{Cli, Commands};
use ruffnote_client::output::{pretty, render};
use ruffnote_client::RuffnoteClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut client =
        RuffnoteClient::new(&cli.base_url).with_service(&cli.service, &cli.service_version);
    if let Some(token) = &cli.token {
        client = client.with_token(token);
    }

    match cli.command {
        Commands::Items(items_cmd) => match items_cmd.action {
            ItemsAction::List { limit } => {
                let items = client.list_items(limit).await?;
                println!("{}", render(&items, cli.format, pretty::format_items));
            }
            ItemsAction::Available { name } => {
                let availability = client.check_availability(&name).await?;
                println!(
                    "{}",
                    render(&availability, cli.format, pretty::format_availability)
                );
            }
            ItemsAction::Create { name } => {
                let item = client.create_item(&name).await?;
                println!(
                    "{}",
                    render(&item, cli.format, |i| format!(
                        "Created:\n{}",
                        pretty::format_item(i)
                    ))
                );
            }
            ItemsAction::Rename { id, name } => {
                let item = client.rename_item(&id, &name).await?;
                println!(
                    "{}",
                    render(&item, cli.format, |i| format!(
                        "Renamed:\n{}",
                        pretty::format_item(i)
                    ))
                );
            }
            ItemsAction::Delete { id } => {
                client.delete_item(&id).await?;
                if !cli.quiet {
                    println!("Deleted items with id {}", id);
                }
            }
        },
        Commands::Discovery => {
            let service = client.discovery().await?;
            println!("{}", render(&service, cli.format, pretty::format_service));
        }
    }

    Ok(())
}
