//! Interaction Cell - 控制器共享的状态机
//!
//! 负责：
//! - 在途请求期间拒绝新的提交
//! - 为每次被接受的提交分配递增的 generation
//! - 只让与当前 generation 匹配的响应落入状态

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::{InteractionError, InteractionState};

struct CellInner<T> {
    state: InteractionState<T>,
    generation: u64,
}

/// 单个控制器独占的交互状态
pub(crate) struct InteractionCell<T: Clone> {
    /// 控制器名（用于日志）
    name: &'static str,
    inner: Mutex<CellInner<T>>,
}

impl<T: Clone> InteractionCell<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: Mutex::new(CellInner {
                state: InteractionState::Idle,
                generation: 0,
            }),
        }
    }

    // 锁内不会 panic，中毒时直接取回数据
    fn lock(&self) -> MutexGuard<'_, CellInner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> InteractionState<T> {
        self.lock().state.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.lock().state.is_submitting()
    }

    /// 尝试开始一次提交
    ///
    /// 在途请求存在时返回 in-flight 错误且不改动状态；
    /// 校验失败时状态变为 `Failed`；校验通过时状态变为 `Submitting`
    pub fn begin<P>(
        &self,
        validate: impl FnOnce() -> Result<P, InteractionError>,
    ) -> Result<(Submission<'_, T>, P), InteractionError> {
        let mut inner = self.lock();

        if inner.state.is_submitting() {
            tracing::warn!(
                controller = self.name,
                generation = inner.generation,
                "Submission rejected: request already in flight"
            );
            return Err(InteractionError::in_flight());
        }

        match validate() {
            Ok(payload) => {
                inner.generation += 1;
                inner.state = InteractionState::Submitting;
                let generation = inner.generation;
                drop(inner);

                tracing::debug!(controller = self.name, generation, "Submission started");
                Ok((
                    Submission {
                        cell: self,
                        generation,
                        finished: false,
                    },
                    payload,
                ))
            }
            Err(err) => {
                tracing::debug!(
                    controller = self.name,
                    detail = %err.detail,
                    "Local validation failed"
                );
                inner.state = InteractionState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// 回到 `Idle`，同时使在途请求的响应失效
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.state = InteractionState::Idle;
        tracing::debug!(
            controller = self.name,
            generation = inner.generation,
            "Interaction reset"
        );
    }
}

/// 一次被接受的提交
///
/// 未调用 `finish` 就被丢弃时（例如调用方取消了 future），
/// 若仍是最新一次提交，状态回到 `Idle`
pub(crate) struct Submission<'a, T: Clone> {
    cell: &'a InteractionCell<T>,
    generation: u64,
    finished: bool,
}

impl<T: Clone> Submission<'_, T> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 将网络结果写入状态并原样返回
    pub fn finish(mut self, outcome: Result<T, InteractionError>) -> Result<T, InteractionError> {
        self.finished = true;

        let mut inner = self.cell.lock();
        if inner.generation == self.generation {
            inner.state = match &outcome {
                Ok(result) => InteractionState::Succeeded(result.clone()),
                Err(err) => InteractionState::Failed(err.clone()),
            };
        } else {
            tracing::warn!(
                controller = self.cell.name,
                generation = self.generation,
                current_generation = inner.generation,
                "Discarding stale response"
            );
        }
        drop(inner);

        outcome
    }
}

impl<T: Clone> Drop for Submission<'_, T> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }

        let mut inner = self.cell.lock();
        if inner.generation == self.generation && inner.state.is_submitting() {
            inner.state = InteractionState::Idle;
            tracing::debug!(
                controller = self.cell.name,
                generation = self.generation,
                "Submission abandoned before completion"
            );
        }
    }
}
