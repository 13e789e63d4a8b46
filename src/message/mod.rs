//! 错误消息构建模块
//!
//! 描述符分为模板层与覆盖层两级，合并后渲染为统一格式的错误消息

pub mod builder;
pub mod descriptor;
pub mod format;
pub mod merge;
pub mod state;

// 重新导出公共类型和函数
pub use builder::{BuilderSnapshot, MessageBuilder};
pub use descriptor::Descriptor;
pub use format::format;
pub use merge::layered_merge;
pub use state::LifecycleState;
