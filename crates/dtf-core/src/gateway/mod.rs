pub(crate) mod error;
pub(crate) mod gateway_response;
pub(crate) mod task_gateway;

pub use error::{GatewayError, Result as GatewayResult};
pub use gateway_response::GatewayResponse;
pub use task_gateway::TaskGateway;
