//! 应用层错误定义
//!
//! 后端错误到用户可见错误的统一映射，两个控制器共用

use crate::application::ports::BackendError;
use crate::domain::InteractionError;

/// 将后端错误归一化为用户可见错误
///
/// 后端返回了结构化的 `detail` 时原样展示，其余情况一律使用通用提示
pub fn normalize_backend_error(err: &BackendError) -> InteractionError {
    match err {
        BackendError::ServiceError {
            detail: Some(detail),
            ..
        } => InteractionError::new(detail.clone()),
        _ => InteractionError::generic(),
    }
}

impl From<BackendError> for InteractionError {
    fn from(err: BackendError) -> Self {
        normalize_backend_error(&err)
    }
}
