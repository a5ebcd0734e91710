//! Interaction - 单次交互的状态与统一错误形态

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::question::QuestionError;
use super::years::YearSetError;

/// 无法取得后端结构化错误时展示的通用提示
pub const GENERIC_FAILURE_MESSAGE: &str = "Wystąpił błąd. Spróbuj ponownie.";

/// 已有请求在途时拒绝新提交的提示
pub const REQUEST_IN_FLIGHT_MESSAGE: &str = "Trwa wysyłanie żądania. Poczekaj na odpowiedź.";

/// 统一的交互错误
///
/// 无论是本地校验失败、网络失败还是后端返回的错误，都只暴露一段可读文本
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{detail}")]
pub struct InteractionError {
    pub detail: String,
}

impl InteractionError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    /// 通用失败提示
    pub fn generic() -> Self {
        Self::new(GENERIC_FAILURE_MESSAGE)
    }

    /// 请求在途，拒绝重复提交
    pub fn in_flight() -> Self {
        Self::new(REQUEST_IN_FLIGHT_MESSAGE)
    }
}

impl From<QuestionError> for InteractionError {
    fn from(err: QuestionError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<YearSetError> for InteractionError {
    fn from(err: YearSetError) -> Self {
        Self::new(err.to_string())
    }
}

/// 控制器的交互状态
///
/// ```text
/// Idle --submit(有效)--> Submitting --成功--> Succeeded
///   |                         \------失败--> Failed
///   \--submit(无效)--> Failed
/// ```
///
/// 没有终态，Succeeded / Failed 都可以再次提交
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionState<T> {
    Idle,
    Submitting,
    Succeeded(T),
    Failed(InteractionError),
}

impl<T> Default for InteractionState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> InteractionState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn result(&self) -> Option<&T> {
        match self {
            Self::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&InteractionError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// 状态名（用于日志）
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}
