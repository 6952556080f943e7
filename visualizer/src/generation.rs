use iced::futures::channel::mpsc;
use iced::futures::{SinkExt, Stream};
use iced::stream;
use log::{debug, trace};
use wsncore::{run_scenario, GeneratorConfig, ProgressEvent, Scenario};

/// Progress slots buffered between the worker and the UI.
const PROGRESS_BUFFER: usize = 256;

#[derive(Debug, Clone)]
pub enum GenerationUpdate {
    Progress(ProgressEvent),
    Finished(Result<Scenario, String>),
}

/// Runs the blocking scenario pipeline on a worker and streams its progress.
///
/// Progress events that do not fit in the buffer are dropped; the final
/// `Finished` update is always delivered.
pub fn run(count: usize, config: GeneratorConfig) -> impl Stream<Item = GenerationUpdate> {
    stream::channel(
        PROGRESS_BUFFER,
        move |mut output: mpsc::Sender<GenerationUpdate>| async move {
            let mut progress = output.clone();
            let worker = tokio::task::spawn_blocking(move || {
                let mut dropped = 0usize;
                let result = run_scenario(count, &config, |event| {
                    if let Err(err) = progress.try_send(GenerationUpdate::Progress(event)) {
                        if err.is_disconnected() {
                            trace!("progress receiver closed at {}/{}", event.completed, event.total);
                        }
                        dropped += 1;
                    }
                });
                if dropped > 0 {
                    debug!("{dropped} of {count} progress updates skipped");
                }
                result
            });

            let finished = match worker.await {
                Ok(result) => result.map_err(|err| err.to_string()),
                Err(err) => Err(format!("generation worker failed: {err}")),
            };
            if output
                .send(GenerationUpdate::Finished(finished))
                .await
                .is_err()
            {
                debug!("generation finished after the receiver closed");
            }
        },
    )
}
