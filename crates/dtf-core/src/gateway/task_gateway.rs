use crate::form::TaskQuery;
use crate::gateway::{GatewayResponse, GatewayResult};

use async_trait::async_trait;

/// Delivers a built task query to the remote endpoint.
///
/// Any HTTP status is a successful delivery; only a request that could not
/// complete is an `Err`.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    async fn send(&self, query: &TaskQuery) -> GatewayResult<GatewayResponse>;
}
