//! Pytania - 问答后端交互客户端
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Question Context: 问题文本校验
//! - Years Context: 年份列表解析
//! - Interaction: 交互状态机与统一错误
//!
//! 应用层 (application/):
//! - Ports: 后端端口定义（BackendPort）
//! - Controllers: QuestionController, YearRangeController
//! - Error: 后端错误归一化
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: HTTP 后端客户端、测试用 Fake 客户端

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
