//! Dispatcher runner: converts teloxide messages to core::Message and passes them to HandlerChain.
//!
//! Updates of one chat are processed one after another; different chats run concurrently.
//! Stops on SIGINT (teloxide ctrl-c handler) and SIGTERM.

use anyhow::Result;
use dbot_core::{Message as CoreMessage, ToCoreMessage};
use handler_chain::HandlerChain;
use std::sync::Arc;
use teloxide::dispatching::ShutdownToken;
use teloxide::prelude::*;
use tokio::sync::RwLock;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Runs one core message through the chain. Errors are logged, never propagated, so one bad update
/// cannot stop the bot.
pub async fn process_message(chain: &HandlerChain, message: &CoreMessage) {
    info!(
        user_id = ?message.user_id(),
        chat_id = message.chat.id,
        message_id = %message.id,
        "step: processing message (handler chain started)"
    );
    if let Err(e) = chain.handle(message).await {
        error!(error = %e, user_id = ?message.user_id(), chat_id = message.chat.id, "Handler chain failed");
    }
}

/// Starts long polling with the given teloxide Bot and HandlerChain.
/// Calls get_me() first and writes the username into `bot_username` so the router can recognise
/// `/command@this_bot`. Returns when the dispatcher has shut down.
#[instrument(skip(bot, handler_chain, bot_username))]
pub async fn run_dispatcher(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<RwLock<Option<String>>>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set before dispatch");
            }
        }
        Err(e) => warn!(error = %e, "get_me failed; commands addressed to other bots will not be filtered"),
    }

    let handler = Update::filter_message().endpoint(
        |msg: teloxide::types::Message, chain: HandlerChain| async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            process_message(&chain, &core_msg).await;
            respond(())
        },
    );

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain])
        .enable_ctrlc_handler()
        .build();

    spawn_sigterm_listener(dispatcher.shutdown_token());

    info!("Bot is running, press Ctrl+C to stop");
    dispatcher.dispatch().await;
    info!("Dispatcher stopped");

    Ok(())
}

#[cfg(unix)]
fn spawn_sigterm_listener(token: ShutdownToken) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm = match signal(SignalKind::terminate()) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "Cannot listen for SIGTERM");
                return;
            }
        };
        sigterm.recv().await;
        info!("SIGTERM received, stopping dispatcher");
        match token.shutdown() {
            Ok(done) => done.await,
            Err(e) => warn!(error = ?e, "Dispatcher was not running at SIGTERM"),
        }
    });
}

#[cfg(not(unix))]
fn spawn_sigterm_listener(_token: ShutdownToken) {}
