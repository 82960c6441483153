use std::path::PathBuf;

use colored::Colorize;
use crossbeam_channel::{select, unbounded, Receiver};
use thiserror::Error;

use buzzline_bridge::{
    MethodCall, ServiceError, VibrationBridge, VibratorService, CHANNEL_NAME,
};

use crate::channel::{ChannelError, ChannelServer, Reply, Request};
use crate::config::Backend;
use crate::{print_error, print_info, print_warning, vibrator};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("method channel error: {0}")]
    Channel(#[from] ChannelError),
    #[error("failed to open vibrator: {0}")]
    Vibrator(#[from] ServiceError),
}

/// Settings of a `serve` run after config and flags are merged.
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub socket_path: PathBuf,
    pub api_level: u32,
    pub backend: Backend,
}

/// Dispatches one call and turns the outcome into a channel reply.
pub fn answer<V: VibratorService>(bridge: &mut VibrationBridge<V>, call: &MethodCall) -> Reply {
    match bridge.dispatch(call) {
        Ok(result) => result.into(),
        Err(e) => {
            print_error!("{} failed: {e}", call.method);
            Reply::Err(e.to_string())
        }
    }
}

/// Answers requests one at a time until `stop` fires or every sender is gone.
pub fn run_loop<V: VibratorService>(
    bridge: &mut VibrationBridge<V>,
    requests: &Receiver<Request>,
    stop: &Receiver<()>,
) {
    loop {
        select! {
            recv(stop) -> _ => {
                break;
            }
            recv(requests) -> msg => {
                let Ok(request) = msg else {
                    print_warning!("request channel closed");
                    break;
                };
                let reply = answer(bridge, &request.call);
                let _ = request.reply.send(reply);
            }
        }
    }
}

/// Binds the method channel and serves it on the current thread.
pub fn serve(options: &ServeOptions, stop: &Receiver<()>) -> Result<(), RunError> {
    let vibrator = vibrator::open(options.backend)?;
    let mut bridge = VibrationBridge::for_api_level(vibrator, options.api_level);
    print_info!(
        "{CHANNEL_NAME} ready: api level {}, {:?}, {:?} backend",
        options.api_level,
        bridge.capability(),
        options.backend
    );

    let (tx, rx) = unbounded::<Request>();
    let server = ChannelServer::new(&options.socket_path);
    let _listener = server.listen(tx)?;

    run_loop(&mut bridge, &rx, stop);

    server.cleanup();
    print_info!("buzzlined stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use buzzline_bridge::{Arguments, RecordingVibrator, VibratorCall};
    use crossbeam_channel::bounded;

    #[test]
    fn answer_maps_results() {
        let log = RecordingVibrator::new();
        let mut bridge = VibrationBridge::for_api_level(log.clone(), 30);
        assert_eq!(
            answer(&mut bridge, &MethodCall::new("vibrate", Arguments::new())),
            Reply::Ok
        );
        assert_eq!(
            answer(&mut bridge, &MethodCall::new("pulse", Arguments::new())),
            Reply::NotImplemented
        );
        assert_eq!(log.calls().len(), 1);

        let mut broken =
            VibrationBridge::for_api_level(RecordingVibrator::failing("motor stalled"), 30);
        let reply = answer(&mut broken, &MethodCall::new("cancel", Arguments::new()));
        assert!(matches!(reply, Reply::Err(ref m) if m.contains("motor stalled")));

        let loud = MethodCall::new("vibrate", Arguments::new().with("amplitude", "loud"));
        let reply = answer(&mut bridge, &loud);
        assert!(matches!(reply, Reply::Err(ref m) if m.contains("amplitude")));
        assert_eq!(log.calls().len(), 1);
    }

    #[test]
    fn run_loop_answers_in_order_then_stops() {
        let log = RecordingVibrator::new();
        let mut bridge = VibrationBridge::for_api_level(log.clone(), 20);
        let (tx, rx) = unbounded();
        let (_stop_tx, stop_rx) = bounded::<()>(1);

        let mut replies = Vec::new();
        for method in ["vibrate", "cancel", "ring"] {
            let (reply_tx, reply_rx) = bounded(1);
            tx.send(Request {
                call: MethodCall::new(method, Arguments::new().with("duration", 40)),
                reply: reply_tx,
            })
            .unwrap();
            replies.push(reply_rx);
        }
        drop(tx);

        run_loop(&mut bridge, &rx, &stop_rx);

        let got: Vec<Reply> = replies.iter().map(|r| r.recv().unwrap()).collect();
        assert_eq!(got, vec![Reply::Ok, Reply::Ok, Reply::NotImplemented]);
        assert_eq!(
            log.calls(),
            vec![
                VibratorCall::Legacy { duration_ms: 40 },
                VibratorCall::Cancel
            ]
        );
    }
}
