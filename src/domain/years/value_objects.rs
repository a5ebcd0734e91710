//! Years Context - Value Objects

use serde::{Deserialize, Serialize};

use super::YearSetError;

/// 年份（允许负数，范围校验由后端负责）
pub type Year = i64;

/// 已解析的年份集合
///
/// 不变量:
/// - `years` 非空
/// - 顺序与用户输入一致，不排序、不去重
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearSet {
    years: Vec<Year>,
    /// 被丢弃的非空片段（已去除空白）
    dropped: Vec<String>,
}

impl YearSet {
    /// 解析逗号分隔的年份列表
    ///
    /// 规则：按 `,` 切分，去除每段首尾空白，逐段读取开头的整数
    /// （`"2024 r."` 读作 2024）；开头没有数字的片段被丢弃而不是报错。
    /// 空片段（如 `"1918,,2024"`）不计入 `dropped`。
    pub fn parse(raw: &str) -> Result<Self, YearSetError> {
        if raw.trim().is_empty() {
            return Err(YearSetError::Empty);
        }

        let mut years = Vec::new();
        let mut dropped = Vec::new();

        for piece in raw.split(',').map(str::trim) {
            match leading_integer(piece) {
                Some(year) => years.push(year),
                None if piece.is_empty() => {}
                None => dropped.push(piece.to_string()),
            }
        }

        if years.is_empty() {
            return Err(YearSetError::NoValidYears { dropped });
        }

        Ok(Self { years, dropped })
    }

    pub fn years(&self) -> &[Year] {
        &self.years
    }

    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    pub fn has_dropped(&self) -> bool {
        !self.dropped.is_empty()
    }

    pub fn into_years(self) -> Vec<Year> {
        self.years
    }
}

/// 读取片段开头的整数：可选符号加连续的 ASCII 数字，其后内容忽略
///
/// 没有数字或超出 `Year` 范围时返回 `None`
fn leading_integer(piece: &str) -> Option<Year> {
    let sign_len = match piece.as_bytes().first() {
        Some(b'+' | b'-') => 1,
        _ => 0,
    };
    let digits = piece[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }

    piece[..sign_len + digits].parse().ok()
}
