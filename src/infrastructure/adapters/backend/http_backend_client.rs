//! HTTP Backend Client - 调用问答后端 HTTP 服务
//!
//! 实现 BackendPort trait
//!
//! 后端 API:
//! POST {base_url}/ask        Request: {"question": "..."}  Response: {"answer": "..."}
//! POST {base_url}/set_years  Request: {"years": [1918, 2024]}  Response: {"message": "...", "years": [...]}
//! GET  {base_url}/           Response: {"status": "ok"}
//! 错误响应: 非 2xx，body 为 {"detail": "..."}

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::application::ports::{
    AnswerResult, BackendError, BackendPort, QuestionRequest, YearSetRequest, YearSetResult,
};

/// 后端端点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Ask,
    SetYears,
    Health,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Ask => "/ask",
            Self::SetYears => "/set_years",
            Self::Health => "/",
        }
    }
}

/// HTTP 后端客户端配置
#[derive(Debug, Clone)]
pub struct HttpBackendClientConfig {
    /// 后端基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpBackendClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpBackendClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 后端客户端
///
/// 两个控制器共用的请求客户端：每次调用只发一次请求，不重试
pub struct HttpBackendClient {
    client: Client,
    config: HttpBackendClientConfig,
}

impl HttpBackendClient {
    /// 创建新的 HTTP 后端客户端
    pub fn new(config: HttpBackendClientConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BackendError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 使用默认配置创建客户端
    pub fn with_default_config() -> Result<Self, BackendError> {
        Self::new(HttpBackendClientConfig::default())
    }

    /// 获取端点 URL
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!(
            "{}{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.path()
        )
    }

    /// 以 JSON 发送请求并解析 JSON 响应
    ///
    /// 非 2xx 响应转换为 `BackendError::ServiceError`，
    /// 若 body 中带有字符串类型的 `detail` 则一并保留
    pub async fn send<Req, Resp>(&self, endpoint: Endpoint, payload: &Req) -> Result<Resp, BackendError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = self.url(endpoint);
        tracing::debug!(url = %url, "Sending backend request");

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = extract_detail(&body);
            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                detail = ?detail,
                "Backend returned error status"
            );
            return Err(BackendError::ServiceError {
                status: status.as_u16(),
                detail,
            });
        }

        response.json::<Resp>().await.map_err(|e| {
            if e.is_timeout() {
                BackendError::Timeout
            } else {
                BackendError::InvalidResponse(e.to_string())
            }
        })
    }
}

fn map_transport_error(e: reqwest::Error) -> BackendError {
    if e.is_timeout() {
        BackendError::Timeout
    } else if e.is_connect() {
        BackendError::NetworkError(format!("Cannot connect to backend: {}", e))
    } else {
        BackendError::NetworkError(e.to_string())
    }
}

/// 从错误响应 body 中提取 `detail` 字段（仅接受字符串）
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_string)
}

#[async_trait]
impl BackendPort for HttpBackendClient {
    async fn ask(&self, request: QuestionRequest) -> Result<AnswerResult, BackendError> {
        let result: AnswerResult = self.send(Endpoint::Ask, &request).await?;
        tracing::info!(answer_len = result.answer.len(), "Answer received");
        Ok(result)
    }

    async fn set_years(&self, request: YearSetRequest) -> Result<YearSetResult, BackendError> {
        let result: YearSetResult = self.send(Endpoint::SetYears, &request).await?;
        tracing::info!(years = ?request.years, "Year range accepted");
        Ok(result)
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.url(Endpoint::Health))
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::debug!(error = %e, "Backend health check failed");
                false
            }
        }
    }
}
