use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use shiori_core::controller::PageController;
use shiori_core::history::NavigationHistory;
use shiori_core::types::AppEvent;

use crate::lookup::LookupContext;
use crate::source::LookupSource;
use crate::state::AppState;

pub mod lookup_finished;
pub mod user_intent;

use lookup_finished::handle_lookup_finished;
use user_intent::handle_user_intent;

/// App's main loop.
///
/// Owns the page controller; intents and finished lookups arrive on the
/// same channel, so history is only ever touched from here. A shutdown
/// request waits for the lookup in flight before it reaches the UI.
pub async fn event_loop(
    state: Arc<AppState>,
    source: Arc<dyn LookupSource>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (ctx, mut controller) = {
        let config = state.config.read().await;
        let ctx = LookupContext {
            source,
            event_tx: ui_to_app_tx,
            search_mode: config.search.match_mode,
            timeout: Duration::from_millis(config.lookup_timeout_ms),
        };
        let history = NavigationHistory::with_capacity(config.history.capacity);
        (ctx, PageController::new(history))
    };

    let mut shutting_down = false;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;

        tracing::debug!(
            "[EVENT_LOOP] Event received: {:?}",
            std::mem::discriminant(&event)
        );
        match event {
            AppEvent::Shutdown => {
                tracing::info!("[EVENT_LOOP] Shutdown requested");
                shutting_down = true;
            }
            AppEvent::Intent(intent) if shutting_down => {
                tracing::debug!("[EVENT_LOOP] Dropping {:?} during shutdown", intent);
            }
            event => handle_events(&mut controller, &ctx, &app_to_ui_tx, event).await?,
        }

        // The lookup in flight still gets to render
        if shutting_down && controller.pending().is_none() {
            app_to_ui_tx.send(AppEvent::Shutdown).await?;
            break;
        }
    }

    tracing::info!("[EVENT_LOOP] Stopped");
    Ok(())
}

async fn handle_events(
    controller: &mut PageController,
    ctx: &LookupContext,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::Intent(intent) => {
            handle_user_intent(controller, ctx, app_to_ui_tx, intent).await?;
        }
        AppEvent::LookupFinished { ticket, outcome } => {
            handle_lookup_finished(controller, app_to_ui_tx, ticket, outcome).await?;
        }
        AppEvent::Shutdown => {
            // Handled by the loop
        }
        AppEvent::ShowPage(_) | AppEvent::LookupFailed { .. } | AppEvent::NavigationChanged(_) => {
            // UI-only events, ignore in backend
        }
    }

    Ok(())
}
