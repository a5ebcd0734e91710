//! Backend Adapter - 问答后端客户端实现

mod fake_backend_client;
mod http_backend_client;

pub use fake_backend_client::{FakeBackendClient, FakeCall};
pub use http_backend_client::*;
