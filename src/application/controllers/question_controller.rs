//! Question Controller - 提问交互控制器

use std::sync::Arc;

use super::interaction_cell::InteractionCell;
use crate::application::ports::{AnswerResult, BackendPort, QuestionRequest};
use crate::domain::question::Question;
use crate::domain::{InteractionError, InteractionState};

/// 校验并提交问题，暴露答案或错误
pub struct QuestionController {
    backend: Arc<dyn BackendPort>,
    cell: InteractionCell<AnswerResult>,
}

impl QuestionController {
    pub fn new(backend: Arc<dyn BackendPort>) -> Self {
        Self {
            backend,
            cell: InteractionCell::new("question"),
        }
    }

    /// 提交问题
    ///
    /// - 去除空白后为空：立即失败，不发请求
    /// - 已有请求在途：拒绝，状态不变
    /// - 否则发送一次请求，答案原样返回
    pub async fn submit(&self, raw_text: &str) -> Result<AnswerResult, InteractionError> {
        let (submission, question) = self
            .cell
            .begin(|| Question::parse(raw_text).map_err(InteractionError::from))?;

        tracing::debug!(
            generation = submission.generation(),
            chars = question.as_str().chars().count(),
            "Submitting question"
        );

        let outcome = self
            .backend
            .ask(QuestionRequest {
                question: question.into_inner(),
            })
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "Question request failed");
                InteractionError::from(err)
            });

        submission.finish(outcome)
    }

    pub fn state(&self) -> InteractionState<AnswerResult> {
        self.cell.state()
    }

    pub fn is_submitting(&self) -> bool {
        self.cell.is_submitting()
    }

    /// 回到初始状态；在途请求的响应将被忽略
    pub fn reset(&self) {
        self.cell.reset();
    }
}
