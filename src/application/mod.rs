//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Backend）
//! - controllers: 提问与年份范围两个交互控制器
//! - error: 后端错误到用户可见错误的归一化

pub mod controllers;
pub mod error;
pub mod ports;

// Re-exports
pub use controllers::{QuestionController, YearRangeController};

pub use error::normalize_backend_error;

pub use ports::{
    AnswerResult, BackendError, BackendPort, QuestionRequest, YearSetRequest, YearSetResult,
};
