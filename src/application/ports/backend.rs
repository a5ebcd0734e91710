//! Backend Port - 问答后端抽象
//!
//! 定义对问答后端的两个请求契约，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::years::Year;

/// 后端调用错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    /// 非 2xx 响应；`detail` 为后端返回的结构化错误文本（若有）
    #[error("Service error: HTTP {status}")]
    ServiceError { status: u16, detail: Option<String> },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 提问请求 `POST /ask`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
}

/// 提问成功响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub answer: String,
}

/// 设置年份请求 `POST /set_years`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSetRequest {
    pub years: Vec<Year>,
}

/// 设置年份成功响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSetResult {
    pub message: String,
    /// 后端回显的年份（可能缺省）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years: Option<Vec<Year>>,
}

/// Backend Port
///
/// 每次调用恰好对应一次网络请求，不做重试
#[async_trait]
pub trait BackendPort: Send + Sync {
    /// 提交问题
    async fn ask(&self, request: QuestionRequest) -> Result<AnswerResult, BackendError>;

    /// 设置年份范围
    async fn set_years(&self, request: YearSetRequest) -> Result<YearSetResult, BackendError>;

    /// 检查后端是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
