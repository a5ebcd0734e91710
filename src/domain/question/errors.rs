//! Question Context - Errors
//!
//! 错误文本直接面向用户展示

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("Proszę wpisać pytanie.")]
    Empty,

    #[error("Zbyt długie pytanie.")]
    TooLong { chars: usize, max: usize },
}
