use super::config::AgentConfig;
use super::events::DashboardEvent;
use super::store::{DashboardSnapshot, DashboardState};
use crate::call::{Call, Message};
use crate::script::{ScriptStep, Timeline};
use crate::source::CallSource;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

const EVENT_CHANNEL_CAPACITY: usize = 256;

/// A spawned task and the token that stops it
struct Worker {
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Worker {
    async fn stop(self, what: &str) {
        self.token.cancel();
        if let Err(e) = self.handle.await {
            if !e.is_cancelled() {
                error!("{} task panicked: {}", what, e);
            }
        }
    }
}

/// The timeline currently driving a call
struct CallTimeline {
    call_id: String,
    worker: Worker,
}

/// The simulated agent: generates calls, plays their scripts and keeps the dashboard state
#[derive(Clone)]
pub struct CallAgent {
    inner: Arc<AgentInner>,
}

struct AgentInner {
    /// Timing and dashboard settings
    config: AgentConfig,

    /// Dashboard state; every mutation goes through its transition methods
    state: Mutex<DashboardState>,

    /// Random inputs (names, phones, opening lines, durations)
    source: Mutex<Box<dyn CallSource>>,

    /// State-change notifications for the view
    events: broadcast::Sender<DashboardEvent>,

    /// Generator tick task, present while the agent is active
    generator: Mutex<Option<Worker>>,

    /// Timeline task of the ringing or active call
    timeline: Mutex<Option<CallTimeline>>,
}

impl CallAgent {
    /// Create an agent; nothing runs until `activate` is called
    pub fn new(config: AgentConfig, source: Box<dyn CallSource>) -> Self {
        info!("Creating call agent (source: {})", source.name());

        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let state = DashboardState::new(
            config.dashboard.satisfaction,
            config.dashboard.history_limit,
        );

        Self {
            inner: Arc::new(AgentInner {
                config,
                state: Mutex::new(state),
                source: Mutex::new(source),
                events,
                generator: Mutex::new(None),
                timeline: Mutex::new(None),
            }),
        }
    }

    /// Create an agent and activate it if the settings ask for it
    pub async fn start(config: AgentConfig, source: Box<dyn CallSource>) -> Self {
        let start_active = config.simulation.start_active;
        let agent = Self::new(config, source);
        if start_active {
            agent.activate().await;
        }
        agent
    }

    /// Turn the agent on and start the call generator
    ///
    /// Returns whether the agent was previously inactive.
    pub async fn activate(&self) -> bool {
        // The generator slot stays locked across the flag flip so the flag
        // and the generator task always agree.
        let mut generator = self.inner.generator.lock().await;
        let changed = self.inner.state.lock().await.set_agent_active(true);

        if generator.is_none() {
            let token = CancellationToken::new();
            let handle = tokio::spawn(run_generator(Arc::clone(&self.inner), token.clone()));
            *generator = Some(Worker { token, handle });
        }
        drop(generator);

        if changed {
            info!("Agent activated");
            self.inner.publish(DashboardEvent::AgentToggled { active: true });
        }

        changed
    }

    /// Turn the agent off
    ///
    /// Stops the generator and misses any call that is still ringing. A
    /// conversation already in progress plays out to the end.
    pub async fn deactivate(&self) -> bool {
        let changed = self.inner.go_offline().await;

        let missed = {
            let mut state = self.inner.state.lock().await;
            match state.ringing_call_id().map(str::to_string) {
                Some(call_id) if state.miss(&call_id) => Some(call_id),
                _ => None,
            }
        };

        if let Some(call_id) = missed {
            warn!("Call {} missed: agent went offline before answering", call_id);
            self.inner.cancel_timeline(&call_id).await;
            self.inner.publish(DashboardEvent::CallMissed { call_id });
        }

        if changed {
            info!("Agent deactivated");
            self.inner.publish(DashboardEvent::AgentToggled { active: false });
        }

        changed
    }

    /// Flip the agent on or off; returns the new state
    pub async fn toggle(&self) -> bool {
        if self.is_active().await {
            self.deactivate().await;
            false
        } else {
            self.activate().await;
            true
        }
    }

    pub async fn is_active(&self) -> bool {
        self.inner.state.lock().await.agent_active()
    }

    /// Ring a call immediately, skipping the generator's dice roll
    ///
    /// Still refused while the agent is off or the line is busy.
    pub async fn ring_now(&self) -> Option<Call> {
        self.inner.try_ring(true).await
    }

    pub async fn snapshot(&self) -> DashboardSnapshot {
        self.inner.state.lock().await.snapshot()
    }

    pub async fn call(&self, call_id: &str) -> Option<Call> {
        self.inner.state.lock().await.call(call_id).cloned()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.inner.events.subscribe()
    }

    /// Take the agent offline and cancel the generator and any running call timeline
    pub async fn shutdown(&self) {
        info!("Shutting down call agent");

        if self.inner.go_offline().await {
            self.inner.publish(DashboardEvent::AgentToggled { active: false });
        }

        let timeline = self.inner.timeline.lock().await.take();
        if let Some(timeline) = timeline {
            debug!("Cancelling timeline for call {}", timeline.call_id);
            timeline.worker.stop("Timeline").await;
        }
    }
}

impl AgentInner {
    fn publish(&self, event: DashboardEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }

    /// Clear the active flag and stop the generator; returns whether the flag changed
    ///
    /// The generator slot is held until the task has exited, so a concurrent
    /// `activate` cannot observe the flag cleared with the old task still running.
    async fn go_offline(&self) -> bool {
        let mut generator = self.generator.lock().await;
        let changed = self.state.lock().await.set_agent_active(false);

        if let Some(worker) = generator.take() {
            worker.stop("Generator").await;
        }

        changed
    }

    async fn try_ring(self: &Arc<Self>, forced: bool) -> Option<Call> {
        if !self.state.lock().await.can_ring() {
            return None;
        }

        let (call, opening_line) = {
            let mut source = self.source.lock().await;
            if !forced && !source.should_ring() {
                return None;
            }
            let call = Call::incoming(source.caller_name(), source.phone_number());
            (call, source.opening_line())
        };

        let rang_at = Instant::now();
        if !self.state.lock().await.ring(call.clone()) {
            debug!("Line became busy before call {} could ring", call.id);
            return None;
        }

        info!("Incoming call {} from {} ({})", call.id, call.caller, call.phone);
        self.publish(DashboardEvent::CallRinging { call: call.clone() });

        let timeline = Timeline::for_call(
            &self.config.script,
            self.config.simulation.answer_delay(),
            &opening_line,
        );
        self.spawn_timeline(call.id.clone(), timeline, rang_at).await;

        Some(call)
    }

    async fn spawn_timeline(self: &Arc<Self>, call_id: String, timeline: Timeline, rang_at: Instant) {
        let token = CancellationToken::new();
        let handle = tokio::spawn(run_timeline(
            Arc::clone(self),
            call_id.clone(),
            timeline,
            rang_at,
            token.clone(),
        ));

        let previous = self.timeline.lock().await.replace(CallTimeline {
            call_id,
            worker: Worker { token, handle },
        });

        if let Some(previous) = previous {
            debug!("Superseding timeline for call {}", previous.call_id);
            previous.worker.token.cancel();
        }
    }

    /// Stop the timeline of `call_id` if it is the current one
    async fn cancel_timeline(&self, call_id: &str) {
        let timeline = {
            let mut slot = self.timeline.lock().await;
            match slot.as_ref() {
                Some(t) if t.call_id == call_id => slot.take(),
                _ => None,
            }
        };

        if let Some(timeline) = timeline {
            debug!("Cancelling timeline for call {}", call_id);
            timeline.worker.stop("Timeline").await;
        }
    }

    /// Forget a timeline that has run to completion
    async fn release_timeline(&self, call_id: &str) {
        let mut slot = self.timeline.lock().await;
        if slot.as_ref().is_some_and(|t| t.call_id == call_id) {
            slot.take();
        }
    }

    /// Apply one script step; returns whether the timeline should continue
    async fn apply_step(&self, call_id: &str, step: &ScriptStep) -> bool {
        match step {
            ScriptStep::Answer => {
                let answered = self.state.lock().await.answer(call_id);
                if answered {
                    info!("Call {} answered", call_id);
                    self.publish(DashboardEvent::CallAnswered {
                        call_id: call_id.to_string(),
                    });
                }
                answered
            }
            ScriptStep::Say { role, text } => {
                let message = Message::new(*role, text.clone());
                let appended = self
                    .state
                    .lock()
                    .await
                    .append_message(call_id, message.clone());
                if appended {
                    debug!("Call {} {:?}: {}", call_id, role, text);
                    self.publish(DashboardEvent::MessageAppended {
                        call_id: call_id.to_string(),
                        message,
                    });
                }
                appended
            }
            ScriptStep::Finish => {
                let duration = self.source.lock().await.call_duration();
                let avg_duration = {
                    let mut state = self.state.lock().await;
                    state
                        .complete(call_id, duration)
                        .then(|| state.stats().avg_duration)
                };

                match avg_duration {
                    Some(avg) => {
                        info!(
                            "Call {} completed after {}s (average now {}s)",
                            call_id, duration, avg
                        );
                        self.publish(DashboardEvent::CallCompleted {
                            call_id: call_id.to_string(),
                            duration,
                        });
                        self.release_timeline(call_id).await;
                        true
                    }
                    None => false,
                }
            }
        }
    }
}

async fn run_generator(inner: Arc<AgentInner>, token: CancellationToken) {
    let period = inner.config.simulation.tick_interval();
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!("Call generator started (tick every {:?})", period);

    loop {
        tokio::select! {
            biased;
            _ = token.cancelled() => break,
            _ = ticker.tick() => {
                inner.try_ring(false).await;
            }
        }
    }

    info!("Call generator stopped");
}

async fn run_timeline(
    inner: Arc<AgentInner>,
    call_id: String,
    timeline: Timeline,
    rang_at: Instant,
    token: CancellationToken,
) {
    for step in timeline.steps() {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("Timeline for call {} cancelled", call_id);
                return;
            }
            _ = time::sleep_until(rang_at + step.at) => {}
        }

        if !inner.apply_step(&call_id, &step.step).await {
            debug!("Call {} is no longer current; stopping its timeline", call_id);
            return;
        }
    }
}
