use kanal::AsyncSender;
use shiori_core::types::{AppEvent, UserIntent};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// Read commands from stdin and forward them to the event loop.
/// End of input asks the app to shut down.
pub async fn input_io(cancel: CancellationToken, event_tx: AsyncSender<AppEvent>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    tracing::info!("Reading commands from stdin");
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    event_tx.send(AppEvent::Shutdown).await?;
                    break;
                };
                if let Some(event) = parse_command(&line) {
                    event_tx.send(event).await?;
                }
            }
            _ = cancel.cancelled() => {
                tracing::info!("Input reader stopping");
                break;
            }
        }
    }

    Ok(())
}

/// Turn one input line into an event.
///
/// Plain text is a search. Commands start with `:`:
/// `:k <kanji>`, `:w <word> [reading]`, `:o <href>`, `:b`, `:f`, `:q`.
pub fn parse_command(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some(command) = line.strip_prefix(':') else {
        return Some(AppEvent::Intent(UserIntent::SearchSubmitted(line.to_string())));
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();

    let intent = match name {
        "b" | "back" => UserIntent::BackRequested,
        "f" | "forward" => UserIntent::ForwardRequested,
        "q" | "quit" => return Some(AppEvent::Shutdown),
        "k" | "kanji" => UserIntent::KanjiSelected(parts.next()?.chars().next()?),
        "w" | "word" => UserIntent::WordSelected {
            word: parts.next()?.to_string(),
            reading: parts.next().unwrap_or_default().to_string(),
        },
        "o" | "open" => UserIntent::LinkActivated(parts.next()?.to_string()),
        _ => {
            tracing::warn!("Unknown command: {}", line);
            return None;
        }
    };

    Some(AppEvent::Intent(intent))
}
