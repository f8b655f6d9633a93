//! Request processing on top of the order-state core.
//!
//! A [`Gateway`] turns one [`Request`] into registry writes and, for orders,
//! crosses and cancels, a built outbound message. It holds no per-request
//! state, so a single instance can serve many threads.

use log::{debug, info, warn};
use oms::{
    CrossTicket, Execution, ExecutionReport, MessageFactory, OrderId, OrderTicket, Result,
    SessionId, ValidationError,
};
use oms_core::fix::MsgType;
use oms_core::{FixFactory, Message, OrderManager};
use serde::Deserialize;
use std::collections::HashMap;
use std::io::{self, Write};

use crate::config::Settings;

/// One entry of a request batch, tagged by `type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    NewOrder(OrderTicket),
    NewCross(CrossTicket),
    /// Cancel a saved order under a freshly issued client order id.
    Cancel { order_id: OrderId },
    Execution(ExecutionReport),
}

impl Request {
    pub fn kind(&self) -> &'static str {
        match self {
            Request::NewOrder(_) => "new_order",
            Request::NewCross(_) => "new_cross",
            Request::Cancel { .. } => "cancel",
            Request::Execution(_) => "execution",
        }
    }
}

/// What a successful request produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A message ready for the session layer.
    Sent(Message),
    /// An execution stored in the registry.
    Recorded(Execution),
}

/// Counts logged at the end of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub sent: usize,
    pub recorded: usize,
    pub failed: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.sent + self.recorded + self.failed
    }
}

pub struct Gateway {
    manager: OrderManager,
    factory: FixFactory,
    sessions: HashMap<String, SessionId>,
}

impl Gateway {
    pub fn new(
        manager: OrderManager,
        factory: FixFactory,
        sessions: HashMap<String, SessionId>,
    ) -> Self {
        Self {
            manager,
            factory,
            sessions,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let sessions = settings
            .sessions
            .iter()
            .map(|(name, session)| (name.clone(), session.session_id()))
            .collect();

        Self::new(
            OrderManager::new(settings.clordid.generator()),
            settings.fix.factory(),
            sessions,
        )
    }

    pub fn manager(&self) -> &OrderManager {
        &self.manager
    }

    fn session(&self, name: &str) -> std::result::Result<SessionId, ValidationError> {
        self.sessions
            .get(name)
            .cloned()
            .ok_or_else(|| ValidationError::UnknownSession(name.to_string()))
    }

    /// Runs one request through normalize, save and build.
    ///
    /// # Returns
    ///
    /// * `Ok(Outcome)` - The built message, or the stored execution.
    /// * `Err(OmsError)` - The first failing step. A message build that
    ///   fails leaves the saved entity in the registry.
    pub fn process(&self, request: Request) -> Result<Outcome> {
        match request {
            Request::NewOrder(ticket) => {
                let session = self.session(&ticket.session_id)?;
                let order = self.manager.save_order(ticket.normalize(session)?)?;
                let msg = self.factory.new_order_single(&order)?;
                Ok(Outcome::Sent(msg))
            }
            Request::NewCross(ticket) => {
                let session = self.session(&ticket.session_id)?;
                let cross = self.manager.save_cross(ticket.normalize(session)?)?;
                let msg = self.factory.new_order_cross(&cross)?;
                Ok(Outcome::Sent(msg))
            }
            Request::Cancel { order_id } => {
                let order = self.manager.get_order(order_id)?;
                // Refuse before a new client order id is indexed.
                FixFactory::supported_version(
                    MsgType::OrderCancelRequest,
                    order.session().begin_string(),
                )?;
                let cl_ord_id = self.manager.assign_next_order_cl_ord_id(&order)?;
                let msg = self.factory.order_cancel_request(&order, &cl_ord_id)?;
                Ok(Outcome::Sent(msg))
            }
            Request::Execution(report) => {
                let execution = self.manager.save_execution(report)?;
                Ok(Outcome::Recorded(execution))
            }
        }
    }

    /// Processes a batch in order, writing each built message to `out` on
    /// its own line. A failed request is logged and skipped.
    pub fn run(&self, requests: Vec<Request>, out: &mut impl Write) -> io::Result<Summary> {
        let mut summary = Summary::default();

        for (index, request) in requests.into_iter().enumerate() {
            let kind = request.kind();
            match self.process(request) {
                Ok(Outcome::Sent(msg)) => {
                    writeln!(out, "{}", msg)?;
                    summary.sent += 1;
                }
                Ok(Outcome::Recorded(execution)) => {
                    debug!("Recorded execution {}", execution.id());
                    summary.recorded += 1;
                }
                Err(e) => {
                    warn!("Request #{} ({}) failed: {}", index, kind, e);
                    summary.failed += 1;
                }
            }
        }

        info!(
            "Processed {} requests: {} sent, {} executions recorded, {} failed",
            summary.total(),
            summary.sent,
            summary.recorded,
            summary.failed
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests;
