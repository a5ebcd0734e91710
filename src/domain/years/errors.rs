//! Years Context - Errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum YearSetError {
    /// 输入为空或只有空白
    #[error("Proszę wpisać lata w poprawnym formacie.")]
    Empty,

    /// 没有任何片段能解析为年份
    #[error("Proszę wpisać lata w poprawnym formacie.")]
    NoValidYears { dropped: Vec<String> },
}

impl YearSetError {
    /// 被丢弃的片段（输入为空时为空切片）
    pub fn dropped(&self) -> &[String] {
        match self {
            Self::Empty => &[],
            Self::NoValidYears { dropped } => dropped.as_slice(),
        }
    }
}
