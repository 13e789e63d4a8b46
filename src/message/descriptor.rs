//! 错误描述符
//!
//! 渲染一条错误消息所需的全部字段

use super::state::LifecycleState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 错误描述符
///
/// 所有文本字段以空字符串表示“未设置”，合并时不区分“未设置”和“显式设为空”。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Descriptor {
    /// 受影响资源的标识
    pub id: String,
    /// provider 名称
    pub provider_name: String,
    /// 资源类型名称
    pub resource_name: String,
    /// 底层错误文本
    pub cause: String,
    /// 配置错误的属性名
    pub attribute: String,
    /// 生命周期阶段
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<LifecycleState>,
}

impl Descriptor {
    /// 创建空描述符
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_provider_name(mut self, name: impl Into<String>) -> Self {
        self.provider_name = name.into();
        self
    }

    #[must_use]
    pub fn with_resource_name(mut self, name: impl Into<String>) -> Self {
        self.resource_name = name.into();
        self
    }

    /// 设置底层错误，任何可显示的值都会被转换为文本
    #[must_use]
    pub fn with_cause(mut self, cause: impl fmt::Display) -> Self {
        self.cause = cause.to_string();
        self
    }

    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    #[must_use]
    pub fn with_state(mut self, state: impl Into<Option<LifecycleState>>) -> Self {
        self.state = state.into();
        self
    }

    /// 判断是否所有字段都未设置
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
            && self.provider_name.is_empty()
            && self.resource_name.is_empty()
            && self.cause.is_empty()
            && self.attribute.is_empty()
            && self.state.is_none()
    }

    /// 以 `overlay` 中的非空字段覆盖当前字段，返回新的描述符
    #[must_use]
    pub fn merge(&self, overlay: &Descriptor) -> Descriptor {
        let mut merged = self.clone();
        merged.merge_from(overlay);
        merged
    }

    /// 就地合并：`overlay` 中非空的字段替换当前值
    pub fn merge_from(&mut self, overlay: &Descriptor) {
        overwrite_if_set(&mut self.id, &overlay.id);
        overwrite_if_set(&mut self.provider_name, &overlay.provider_name);
        overwrite_if_set(&mut self.resource_name, &overlay.resource_name);
        overwrite_if_set(&mut self.cause, &overlay.cause);
        overwrite_if_set(&mut self.attribute, &overlay.attribute);
        if overlay.state.is_some() {
            self.state = overlay.state;
        }
    }

    /// 渲染为错误消息文本
    pub fn to_message(&self) -> String {
        super::format::format(self)
    }
}

fn overwrite_if_set(base: &mut String, overlay: &str) {
    if !overlay.is_empty() {
        base.clear();
        base.push_str(overlay);
    }
}
