use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;
use tokio::time::sleep;

use knopka::buttons::serializer;
use knopka::cli::{Cli, Commands};
use knopka::core::{config, init_logger, log_api_configuration};
use knopka::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};
use knopka::{ApiClient, ButtonNode, ButtonStore};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    // Load environment variables from .env if present
    let _ = dotenv();

    // Dispatch to appropriate command
    match cli.command {
        Some(Commands::Tree { json }) => run_tree(json).await,
        Some(Commands::Run) | None => run_bot().await,
    }
}

/// Fetch the flat listing, serialize it and print the nested tree
async fn run_tree(json: bool) -> Result<()> {
    let client = ApiClient::from_config()?;
    let rows = client.buttons().await?;
    let tree = serializer::build_tree(&rows)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
    } else if tree.is_empty() {
        println!("(no buttons)");
    } else {
        for node in &tree {
            print_node(node, 0);
        }
    }

    Ok(())
}

fn print_node(node: &ButtonNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node.description_text() {
        Some(description) => {
            let first_line = description.lines().next().unwrap_or_default();
            println!("{indent}{} (#{}): {}", node.title, node.id, first_line);
        }
        None => println!("{indent}{} (#{})", node.title, node.id),
    }
    for child in &node.buttons {
        print_node(child, depth + 1);
    }
}

/// Run the Telegram bot
async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");
    log_api_configuration();

    // Create bot instance
    let bot = create_bot()?;

    let bot_info = bot.get_me().await?;
    log::info!("Bot username: {:?}, Bot ID: {}", bot_info.username, bot_info.id);

    // Set up bot commands in the Telegram UI
    setup_bot_commands(&bot).await?;

    // Create handler dependencies for the modular schema
    let store = Arc::new(ApiClient::from_config()?);
    let deps = HandlerDeps::new(store);

    // Create the dispatcher handler tree using the modular schema
    let handler = schema(deps);

    let mut retry_count = 0;
    let max_retries = config::retry::MAX_DISPATCHER_RETRIES;

    log::info!("Starting bot in long polling mode");

    // Run the dispatcher with retry logic
    loop {
        let bot_clone = bot.clone();
        let handler_clone = handler.clone();

        // Run the dispatcher in its own task so a panic is caught via the
        // JoinHandle instead of taking the process down.
        let handle = tokio::spawn(async move {
            use teloxide::update_listeners::Polling;

            // Create polling listener that drops pending updates on start
            let listener = Polling::builder(bot_clone.clone()).drop_pending_updates().build();

            Dispatcher::builder(bot_clone, handler_clone)
                .dependencies(DependencyMap::new())
                .enable_ctrlc_handler()
                .build()
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await
        });

        match handle.await {
            Ok(()) => {
                // Dispatcher finished normally
                log::info!("Dispatcher shutdown gracefully");
                break;
            }
            Err(join_err) => {
                if join_err.is_panic() {
                    log::error!("Dispatcher panicked: {}", join_err);

                    if retry_count < max_retries {
                        retry_count += 1;
                        log::info!(
                            "Retrying dispatcher connection after panic (attempt {}/{})...",
                            retry_count,
                            max_retries
                        );
                        exponential_backoff(retry_count).await;
                    } else {
                        log::error!("Max retries reached after panic. Exiting...");
                        break;
                    }
                } else {
                    log::warn!("Dispatcher task was cancelled: {}", join_err);
                    break;
                }
            }
        }

        // Add a delay between retries to avoid overwhelming the API
        if retry_count > 0 {
            sleep(config::retry::dispatcher_delay()).await;
        }
    }

    Ok(())
}

/// Exponential backoff delay for retries
async fn exponential_backoff(retry_count: u32) {
    let delay = Duration::from_secs(config::retry::EXPONENTIAL_BACKOFF_BASE.pow(retry_count));
    sleep(delay).await;
}
