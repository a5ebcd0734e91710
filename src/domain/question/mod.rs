//! Question Context - 提问上下文
//!
//! 职责:
//! - 用户输入的问题文本校验（去除首尾空白、长度限制）

mod errors;
mod value_objects;

pub use errors::QuestionError;
pub use value_objects::{Question, MAX_QUESTION_CHARS};
