//! Year Range Controller - 年份范围交互控制器

use std::sync::Arc;

use super::interaction_cell::InteractionCell;
use crate::application::ports::{BackendPort, YearSetRequest, YearSetResult};
use crate::domain::years::YearSet;
use crate::domain::{InteractionError, InteractionState};

/// 解析、校验并提交年份列表，暴露确认消息或错误
pub struct YearRangeController {
    backend: Arc<dyn BackendPort>,
    cell: InteractionCell<YearSetResult>,
}

impl YearRangeController {
    pub fn new(backend: Arc<dyn BackendPort>) -> Self {
        Self {
            backend,
            cell: InteractionCell::new("year_range"),
        }
    }

    /// 只解析不提交，状态不变
    ///
    /// 供调用方提前展示哪些片段会被忽略
    pub fn preview(&self, raw_text: &str) -> Result<YearSet, InteractionError> {
        YearSet::parse(raw_text).map_err(InteractionError::from)
    }

    /// 提交年份列表
    ///
    /// 无法解析的片段被丢弃；一个年份都没有时立即失败，不发请求
    pub async fn submit(&self, raw_text: &str) -> Result<YearSetResult, InteractionError> {
        let (submission, year_set) = self.cell.begin(|| self.preview(raw_text))?;

        if year_set.has_dropped() {
            tracing::warn!(
                dropped = ?year_set.dropped(),
                "Ignoring tokens that are not valid years"
            );
        }
        tracing::debug!(
            generation = submission.generation(),
            years = ?year_set.years(),
            "Submitting year range"
        );

        let outcome = self
            .backend
            .set_years(YearSetRequest {
                years: year_set.into_years(),
            })
            .await
            .map_err(|err| {
                tracing::warn!(error = %err, "Year range request failed");
                InteractionError::from(err)
            });

        submission.finish(outcome)
    }

    pub fn state(&self) -> InteractionState<YearSetResult> {
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
