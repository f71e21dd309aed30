use kanal::AsyncSender;
use shiori_core::controller::{Dispatch, PageController};
use shiori_core::types::{AppEvent, UserIntent};

use crate::lookup::LookupContext;

pub async fn handle_user_intent(
    controller: &mut PageController,
    ctx: &LookupContext,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    intent: UserIntent,
) -> anyhow::Result<()> {
    match controller.handle(intent) {
        Dispatch::Lookup(request) => {
            tracing::debug!("Lookup #{}: {}", request.ticket, request.state);
            ctx.spawn(request.ticket, request.state);
        }
        Dispatch::Unchanged(navigation) => {
            app_to_ui_tx
                .send(AppEvent::NavigationChanged(navigation))
                .await?;
        }
        Dispatch::Ignored => {}
    }

    Ok(())
}
