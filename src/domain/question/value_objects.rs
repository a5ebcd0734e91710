//! Question Context - Value Objects

use serde::{Deserialize, Serialize};

use super::QuestionError;

/// 问题最大字符数（按 Unicode 字符计）
pub const MAX_QUESTION_CHARS: usize = 500;

/// 已校验的问题文本
///
/// 不变量:
/// - 已去除首尾空白且非空
/// - 字符数不超过 `MAX_QUESTION_CHARS`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question(String);

impl Question {
    /// 从用户原始输入解析问题
    pub fn parse(raw: &str) -> Result<Self, QuestionError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(QuestionError::Empty);
        }

        let chars = trimmed.chars().count();
        if chars > MAX_QUESTION_CHARS {
            return Err(QuestionError::TooLong {
                chars,
                max: MAX_QUESTION_CHARS,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_whitespace() {
        let question = Question::parse("  Jakie jest dzisiaj święto?\n").unwrap();
        assert_eq!(question.as_str(), "Jakie jest dzisiaj święto?");
    }

    #[test]
    fn test_blank_input_rejected() {
        for raw in ["", " ", "\t\n", "   \r\n  "] {
            assert_eq!(Question::parse(raw), Err(QuestionError::Empty));
        }
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(QuestionError::Empty.to_string(), "Proszę wpisać pytanie.");
    }

    #[test]
    fn test_length_counted_in_chars() {
        // 'ś' 占两个字节，但只算一个字符
        let at_limit = "ś".repeat(MAX_QUESTION_CHARS);
        assert!(Question::parse(&at_limit).is_ok());

        let over_limit = "ś".repeat(MAX_QUESTION_CHARS + 1);
        assert_eq!(
            Question::parse(&over_limit),
            Err(QuestionError::TooLong {
                chars: MAX_QUESTION_CHARS + 1,
                max: MAX_QUESTION_CHARS,
            })
        );
    }

    #[test]
    fn test_surrounding_whitespace_not_counted() {
        let padded = format!("   {}   ", "a".repeat(MAX_QUESTION_CHARS));
        assert!(Question::parse(&padded).is_ok());
    }
}
