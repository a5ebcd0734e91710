//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Question Context: 提问输入校验
//! - Years Context: 年份列表解析
//!
//! 以及两者共享的交互状态与统一错误形态

pub mod question;
pub mod years;

mod interaction;

pub use interaction::{
    InteractionError, InteractionState, GENERIC_FAILURE_MESSAGE, REQUEST_IN_FLIGHT_MESSAGE,
};
