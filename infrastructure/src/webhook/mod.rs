//! Webhook delivery over HTTP

pub(crate) mod http_gateway;

pub use http_gateway::HttpWebhookGateway;
