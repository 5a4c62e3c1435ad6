//! Event loop that feeds a [`QuizController`] with clock ticks and intents.
//!
//! Everything runs on one task: each tick and each intent is handled to
//! completion before the next is polled. Ticks win when both are ready.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

use crate::controller::QuizController;
use crate::leaderboard::KeyValueStore;
use crate::presenter::{Intent, Presenter, Screen};

/// Default clock period.
pub const DEFAULT_TICK: Duration = Duration::from_secs(1);

/// Where user intents come from.
///
/// Implementations must be cancel-safe: the driver drops a pending
/// `next_intent` future whenever a tick fires first, then calls again with
/// the possibly changed screen.
#[async_trait]
pub trait IntentSource: Send {
    /// Wait for the next intent. `None` ends the session.
    async fn next_intent(&mut self, screen: Screen) -> Option<Intent>;
}

#[async_trait]
impl IntentSource for mpsc::Receiver<Intent> {
    async fn next_intent(&mut self, _screen: Screen) -> Option<Intent> {
        self.recv().await
    }
}

#[async_trait]
impl IntentSource for mpsc::UnboundedReceiver<Intent> {
    async fn next_intent(&mut self, _screen: Screen) -> Option<Intent> {
        self.recv().await
    }
}

/// Run the controller until `source` is exhausted.
///
/// The controller should already be initialised with
/// [`on_init`](QuizController::on_init). A new interval is created for
/// every quiz session and dropped as soon as the clock stops, so no tick from
/// an earlier session can reach a later one.
pub async fn run<P, S, I>(controller: &mut QuizController<P, S>, source: &mut I, period: Duration)
where
    P: Presenter,
    S: KeyValueStore,
    I: IntentSource + ?Sized,
{
    let mut ticker: Option<(u64, Interval)> = None;

    loop {
        sync_ticker(&mut ticker, controller, period);
        let screen = controller.screen();

        tokio::select! {
            biased;
            _ = next_tick(&mut ticker) => controller.on_tick(),
            intent = source.next_intent(screen) => match intent {
                Some(intent) => {
                    tracing::debug!(?intent, ?screen, "intent");
                    controller.dispatch(intent);
                }
                None => break,
            },
        }
    }

    controller.shutdown();
    tracing::debug!("intent source closed, driver stopped");
}

fn sync_ticker<P, S>(
    ticker: &mut Option<(u64, Interval)>,
    controller: &QuizController<P, S>,
    period: Duration,
) where
    P: Presenter,
    S: KeyValueStore,
{
    if !controller.is_clock_running() {
        *ticker = None;
        return;
    }

    let session = controller.session();
    if ticker.as_ref().map(|(s, _)| *s) != Some(session) {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        *ticker = Some((session, interval));
    }
}

async fn next_tick(ticker: &mut Option<(u64, Interval)>) {
    match ticker {
        Some((_, interval)) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}
