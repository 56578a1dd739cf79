use crate::form::TaskQuery;
use crate::gateway::{GatewayError, GatewayResponse, GatewayResult, TaskGateway};

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

/// Canned reply for [`FakeGateway`].
#[derive(Debug, Clone, Copy)]
pub enum Reply {
    Status(u16, &'static str),
    NetworkFailure,
    /// Never answers.
    Hang,
}

/// Gateway that records every query and answers with a fixed reply.
#[derive(Debug)]
pub struct FakeGateway {
    reply: Reply,
    sent: Mutex<Vec<TaskQuery>>,
}

impl FakeGateway {
    pub fn new(reply: Reply) -> Self {
        Self {
            reply,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn responding(status: u16, body: &'static str) -> Self {
        Self::new(Reply::Status(status, body))
    }

    pub fn unreachable() -> Self {
        Self::new(Reply::NetworkFailure)
    }

    /// Queries received so far, oldest first.
    pub fn sent(&self) -> Vec<TaskQuery> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl TaskGateway for FakeGateway {
    async fn send(&self, query: &TaskQuery) -> GatewayResult<GatewayResponse> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(query.clone());

        match self.reply {
            Reply::Status(status, body) => Ok(GatewayResponse::new(status, body)),
            Reply::NetworkFailure => Err(GatewayError::transport("connection refused")),
            Reply::Hang => std::future::pending().await,
        }
    }
}
