use kanal::AsyncSender;
use shiori_core::controller::{Completion, PageController};
use shiori_core::error::OracleError;
use shiori_core::types::{AppEvent, PageView};

pub async fn handle_lookup_finished(
    controller: &mut PageController,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    ticket: u64,
    outcome: Result<PageView, OracleError>,
) -> anyhow::Result<()> {
    match controller.complete(ticket, outcome) {
        Completion::Show(presentation) => {
            app_to_ui_tx.send(AppEvent::ShowPage(presentation)).await?;
        }
        Completion::Failed {
            state,
            error,
            navigation,
        } => {
            app_to_ui_tx
                .send(AppEvent::LookupFailed {
                    query: state.query(),
                    reason: error.to_string(),
                    navigation,
                })
                .await?;
        }
        Completion::Stale => {}
    }

    Ok(())
}
