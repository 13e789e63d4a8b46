//! 生命周期阶段定义
//!
//! 描述错误发生时 provider 正在执行的操作

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 错误发生时所处的生命周期阶段
///
/// 未设置阶段用 `Option::None` 表示，而不是额外的枚举值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleState {
    Creating,
    Reading,
    Updating,
    Deleting,
    /// 属性配置阶段，格式化时会插入属性子句
    Setting,
}

impl LifecycleState {
    /// 全部阶段，按声明顺序
    pub const ALL: [LifecycleState; 5] = [
        LifecycleState::Creating,
        LifecycleState::Reading,
        LifecycleState::Updating,
        LifecycleState::Deleting,
        LifecycleState::Setting,
    ];

    /// 获取阶段的大写标识符
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Creating => "CREATING",
            LifecycleState::Reading => "READING",
            LifecycleState::Updating => "UPDATING",
            LifecycleState::Deleting => "DELETING",
            LifecycleState::Setting => "SETTING",
        }
    }

    /// 获取用于错误消息的小写单词
    pub fn as_word(&self) -> &'static str {
        match self {
            LifecycleState::Creating => "creating",
            LifecycleState::Reading => "reading",
            LifecycleState::Updating => "updating",
            LifecycleState::Deleting => "deleting",
            LifecycleState::Setting => "setting",
        }
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LifecycleState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::UnknownState(s.to_string()))
    }
}
