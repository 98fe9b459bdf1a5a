//! Conversation view controller
//!
//! Owns the active conversation id and the [`ChatView`]. Operations update the
//! view right away, spawn the matching gateway request and return. Each
//! request comes back later as a [`Completion`] through the controller's
//! channel, in arrival order, and only [`ConversationController::apply`]
//! turns completions into view changes.
//!
//! Responses can arrive after the user has moved on. Selecting or starting a
//! conversation advances the *view epoch*; greeting, reply and history
//! completions from an older epoch no longer touch the transcript. History
//! and dialect requests also carry a generation so only the latest request
//! of each kind is applied.

mod completion;

pub use completion::{Completion, HistoryTicket, SendTicket};

use crate::constants::{DEFAULT_TITLE, FALLBACK_GREETING};
use crate::domain::types::{ConversationId, Message, clock_time, time_from_iso};
use crate::gateway::{ChatGateway, SendMessageRequest};
use crate::view::ChatView;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct ConversationController<G> {
    gateway: Arc<G>,
    view: ChatView,
    active: Option<ConversationId>,
    initialized: bool,
    epoch: u64,
    history_generation: u64,
    dialects_generation: u64,
    dialect_change_generation: u64,
    conversations_generation: u64,
    pending_sends: usize,
    in_flight: usize,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
}

impl<G> ConversationController<G>
where
    G: ChatGateway + 'static,
{
    pub fn new(gateway: Arc<G>, view: ChatView) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            gateway,
            view,
            active: None,
            initialized: false,
            epoch: 0,
            history_generation: 0,
            dialects_generation: 0,
            dialect_change_generation: 0,
            conversations_generation: 0,
            pending_sends: 0,
            in_flight: 0,
            completions_tx,
            completions_rx,
        }
    }

    pub fn view(&self) -> &ChatView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ChatView {
        &mut self.view
    }

    pub fn active_conversation(&self) -> Option<&ConversationId> {
        self.active.as_ref()
    }

    /// Sends still waiting for an answer
    pub fn pending_sends(&self) -> usize {
        self.pending_sends
    }

    /// Requests whose completion has not been applied yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// First-load work: greeting, dialect options, conversation list.
    /// Returns false if the controller was already initialized.
    pub fn initialize(&mut self) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        info!("Initializing conversation view");

        let gateway = Arc::clone(&self.gateway);
        let epoch = self.epoch;
        self.spawn(async move {
            let result = gateway.initial_message().await;
            Completion::Greeting { epoch, result }
        });

        self.load_dialect_options();
        self.load_conversations();
        true
    }

    /// Send whatever is in the composer
    pub fn submit_composer(&mut self) -> bool {
        if self.view.composer.text().trim().is_empty() {
            return false;
        }
        let text = self.view.composer.take();
        self.submit_user_message(&text)
    }

    /// Render `text` as the user's message and send it.
    /// Blank input is ignored and returns false.
    pub fn submit_user_message(&mut self, text: &str) -> bool {
        let message = text.trim();
        if message.is_empty() {
            return false;
        }

        self.view.transcript.render(Message::outbound(message));
        self.view.composer.clear();
        self.pending_sends += 1;
        self.view.transcript.show_typing();

        let ticket = SendTicket {
            epoch: self.epoch,
            conversation: self.active.clone(),
        };
        let request = SendMessageRequest {
            message: message.to_string(),
            chat_id: self.active.clone(),
        };
        debug!(
            conversation = ?request.chat_id,
            pending = self.pending_sends,
            "Sending user message"
        );

        let gateway = Arc::clone(&self.gateway);
        self.spawn(async move {
            let result = gateway.send_message(request).await;
            Completion::Reply { ticket, result }
        });
        true
    }

    /// Switch to `id` and reload its history
    pub fn select_conversation(&mut self, id: ConversationId) {
        info!(conversation = %id, "Selecting conversation");
        self.active = Some(id.clone());
        self.epoch += 1;
        self.history_generation += 1;

        self.mark_active(&id);

        let ticket = HistoryTicket {
            epoch: self.epoch,
            generation: self.history_generation,
            conversation: id,
        };
        let gateway = Arc::clone(&self.gateway);
        self.spawn(async move {
            let result = gateway.history(&ticket.conversation).await;
            Completion::History { ticket, result }
        });
    }

    /// Leave the current conversation; the next send starts a new one
    pub fn new_conversation(&mut self) {
        info!("Starting a new conversation");
        self.active = None;
        self.epoch += 1;
        self.history_generation += 1;
        self.view.selector.clear_active();
        self.view.transcript.clear();
        self.view.header_title = DEFAULT_TITLE.to_string();
    }

    /// Ask the service to answer in `dialect`
    pub fn change_dialect(&mut self, dialect: &str) {
        self.dialect_change_generation += 1;
        let generation = self.dialect_change_generation;
        let dialect = dialect.to_string();
        debug!(dialect = %dialect, "Changing dialect");

        let gateway = Arc::clone(&self.gateway);
        self.spawn(async move {
            let result = gateway.set_dialect(&dialect).await;
            Completion::DialectChanged {
                generation,
                dialect,
                result,
            }
        });
    }

    pub fn load_dialect_options(&mut self) {
        self.dialects_generation += 1;
        let generation = self.dialects_generation;
        let gateway = Arc::clone(&self.gateway);
        self.spawn(async move {
            let result = gateway.dialects().await;
            Completion::Dialects { generation, result }
        });
    }

    pub fn load_conversations(&mut self) {
        self.conversations_generation += 1;
        let generation = self.conversations_generation;
        let gateway = Arc::clone(&self.gateway);
        self.spawn(async move {
            let result = gateway.conversations().await;
            Completion::Conversations { generation, result }
        });
    }

    /// Wait for the next completion. `None` once nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        if self.in_flight == 0 {
            return None;
        }
        self.completions_rx.recv().await
    }

    pub fn try_next_completion(&mut self) -> Option<Completion> {
        self.completions_rx.try_recv().ok()
    }

    /// Apply every completion that has already arrived
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(completion) = self.try_next_completion() {
            self.apply(completion);
            applied += 1;
        }
        applied
    }

    /// Apply completions until no request is in flight
    pub async fn settle(&mut self) {
        while let Some(completion) = self.next_completion().await {
            self.apply(completion);
        }
    }

    pub fn apply(&mut self, completion: Completion) {
        self.in_flight = self.in_flight.saturating_sub(1);
        debug!(kind = completion.kind(), in_flight = self.in_flight, "Applying completion");

        match completion {
            Completion::Greeting { epoch, result } => {
                if epoch != self.epoch {
                    debug!("Dropping greeting for a view that is gone");
                    return;
                }
                // Any failure, non-success status included, shows the fallback
                let text = result.unwrap_or_else(|err| {
                    warn!(error = %err, "Loading the greeting failed");
                    FALLBACK_GREETING.to_string()
                });
                self.view.transcript.render(Message::inbound(text));
            }

            Completion::Reply { ticket, result } => {
                self.pending_sends = self.pending_sends.saturating_sub(1);
                if self.pending_sends == 0 {
                    self.view.transcript.hide_typing();
                }
                let current = ticket.epoch == self.epoch;

                match result {
                    Ok(reply) => {
                        if current && self.active.is_none() {
                            info!(conversation = %reply.chat_id, "Conversation started");
                            self.active = Some(reply.chat_id.clone());
                            self.view.selector.ensure(&reply.chat_id, DEFAULT_TITLE);
                            self.mark_active(&reply.chat_id);
                        }
                        let conversation = ticket.conversation.unwrap_or(reply.chat_id);
                        self.view.selector.update_preview(
                            &conversation,
                            &reply.message,
                            &clock_time(),
                        );
                        if current {
                            self.view.transcript.render(Message::inbound(reply.message));
                        } else {
                            debug!(conversation = %conversation, "Reply belongs to a view that is gone");
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, transport = err.is_transport(), "Sending message failed");
                        if current {
                            self.view
                                .transcript
                                .render(Message::inbound(err.user_message()));
                        }
                    }
                }
            }

            Completion::History { ticket, result } => {
                if ticket.generation != self.history_generation || ticket.epoch != self.epoch {
                    debug!(conversation = %ticket.conversation, "Dropping stale history");
                    return;
                }
                match result {
                    Ok(entries) => {
                        self.view.transcript.clear();
                        for entry in entries {
                            let message = if entry.is_user {
                                Message::outbound(entry.content)
                            } else {
                                Message::inbound(entry.content)
                            };
                            let message = match entry.timestamp.as_deref().and_then(time_from_iso) {
                                Some(time) => message.with_time(time),
                                None => message,
                            };
                            self.view.transcript.render(message);
                        }
                    }
                    Err(err) => {
                        warn!(conversation = %ticket.conversation, error = %err, "Loading history failed");
                    }
                }
            }

            Completion::Dialects { generation, result } => {
                if generation != self.dialects_generation {
                    debug!("Dropping stale dialect list");
                    return;
                }
                match result {
                    Ok(dialects) => self.view.dialects.replace_options(&dialects),
                    Err(err) => warn!(error = %err, "Loading dialects failed"),
                }
            }

            Completion::DialectChanged {
                generation,
                dialect,
                result,
            } => {
                if generation != self.dialect_change_generation {
                    debug!(dialect = %dialect, "Dropping superseded dialect change");
                    return;
                }
                match result {
                    Ok(confirmation) => {
                        self.view.dialects.select(&dialect);
                        self.view.transcript.render(Message::inbound(confirmation));
                    }
                    Err(err) => warn!(dialect = %dialect, error = %err, "Changing dialect failed"),
                }
            }

            Completion::Conversations { generation, result } => {
                if generation != self.conversations_generation {
                    debug!("Dropping stale conversation list");
                    return;
                }
                match result {
                    Ok(summaries) => {
                        self.view.selector.replace(summaries);
                        if let Some(id) = self.active.clone() {
                            self.mark_active(&id);
                        }
                    }
                    Err(err) => warn!(error = %err, "Loading conversations failed"),
                }
            }
        }
    }

    /// Make `id` the only highlighted conversation, listing it if needed
    fn mark_active(&mut self, id: &ConversationId) {
        if !self.view.selector.set_active(id) {
            self.view.selector.ensure(id, &id.to_string());
            self.view.selector.set_active(id);
        }
        if let Some(entry) = self.view.selector.get(id) {
            self.view.header_title = entry.title.clone();
        }
    }

    fn spawn<F>(&mut self, request: F)
    where
        F: Future<Output = Completion> + Send + 'static,
    {
        self.in_flight += 1;
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(request.await);
        });
    }
}
