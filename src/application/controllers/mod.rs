//! Interaction Controllers
//!
//! 两个结构相同、互不交互的控制器，共享后端端口与错误归一化规则

mod interaction_cell;
mod question_controller;
mod year_range_controller;

pub use question_controller::QuestionController;
pub use year_range_controller::YearRangeController;
