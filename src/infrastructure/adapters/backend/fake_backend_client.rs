//! Fake Backend Client - 用于测试的后端客户端
//!
//! 不发起网络请求，返回预设的结果并记录每次调用

use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::Notify;

use crate::application::ports::{
    AnswerResult, BackendError, BackendPort, QuestionRequest, YearSetRequest, YearSetResult,
};

/// 被记录的一次调用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeCall {
    Ask(QuestionRequest),
    SetYears(YearSetRequest),
}

/// Fake Backend Client
///
/// 默认对提问返回固定答案，对设置年份返回成功消息
pub struct FakeBackendClient {
    ask_reply: Result<AnswerResult, BackendError>,
    years_reply: Result<YearSetResult, BackendError>,
    healthy: bool,
    /// 设置后，每次调用在记录之后等待一次通知再返回
    gate: Option<Arc<Notify>>,
    calls: Mutex<Vec<FakeCall>>,
}

impl FakeBackendClient {
    pub fn new() -> Self {
        Self {
            ask_reply: Ok(AnswerResult {
                answer: "To jest odpowiedź na Twoje pytanie.".to_string(),
            }),
            years_reply: Ok(YearSetResult {
                message: "Zakres lat został ustawiony.".to_string(),
                years: None,
            }),
            healthy: true,
            gate: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.ask_reply = Ok(AnswerResult {
            answer: answer.into(),
        });
        self
    }

    pub fn with_years_message(mut self, message: impl Into<String>) -> Self {
        self.years_reply = Ok(YearSetResult {
            message: message.into(),
            years: None,
        });
        self
    }

    /// 两个端点都返回同一个错误
    pub fn with_failure(mut self, err: BackendError) -> Self {
        self.ask_reply = Err(err.clone());
        self.years_reply = Err(err);
        self
    }

    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn unhealthy(mut self) -> Self {
        self.healthy = false;
        self
    }

    pub fn calls(&self) -> Vec<FakeCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    async fn record(&self, call: FakeCall) {
        tracing::debug!(call = ?call, "FakeBackendClient: recording call");
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

impl Default for FakeBackendClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BackendPort for FakeBackendClient {
    async fn ask(&self, request: QuestionRequest) -> Result<AnswerResult, BackendError> {
        self.record(FakeCall::Ask(request)).await;
        self.ask_reply.clone()
    }

    async fn set_years(&self, request: YearSetRequest) -> Result<YearSetResult, BackendError> {
        self.record(FakeCall::SetYears(request)).await;
        self.years_reply.clone()
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_calls_in_order() {
        let client = FakeBackendClient::new().with_answer("odpowiedź");

        let answer = client
            .ask(QuestionRequest {
                question: "Kto?".to_string(),
            })
            .await
            .unwrap();
        client
            .set_years(YearSetRequest { years: vec![1918] })
            .await
            .unwrap();

        assert_eq!(answer.answer, "odpowiedź");
        assert_eq!(
            client.calls(),
            vec![
                FakeCall::Ask(QuestionRequest {
                    question: "Kto?".to_string()
                }),
                FakeCall::SetYears(YearSetRequest { years: vec![1918] }),
            ]
        );
    }

    #[tokio::test]
    async fn test_failure_applies_to_both_endpoints() {
        let client = FakeBackendClient::new().with_failure(BackendError::Timeout);

        let ask = client
            .ask(QuestionRequest {
                question: "Kto?".to_string(),
            })
            .await;
        let years = client.set_years(YearSetRequest { years: vec![2024] }).await;

        assert_eq!(ask.unwrap_err(), BackendError::Timeout);
        assert_eq!(years.unwrap_err(), BackendError::Timeout);
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn test_health() {
        assert!(FakeBackendClient::new().health_check().await);
        assert!(!FakeBackendClient::new().unhealthy().health_check().await);
    }
}
