//! Years Context - 年份范围上下文
//!
//! 职责:
//! - 解析用户输入的逗号分隔年份列表
//! - 无法解析的片段静默丢弃，但保留记录供上层提示

mod errors;
mod value_objects;

pub use errors::YearSetError;
pub use value_objects::{Year, YearSet};
