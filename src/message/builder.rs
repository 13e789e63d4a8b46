//! 错误消息构建器
//!
//! 提供链式 API，在可复用的模板上按需叠加一次性的覆盖字段

use super::descriptor::Descriptor;
use super::format::format;
use super::merge::layered_merge;
use super::state::LifecycleState;
use crate::config::Config;
use crate::error::ProviderError;
use std::fmt;
use tracing::debug;

/// 错误消息构建器
///
/// - `save_*` 写入模板层，跨多次生成持续有效
/// - `set_*` 写入覆盖层，只对下一次生成有效，生成后清空
///
/// 生成时的优先级从高到低：显式参数描述符、覆盖层、模板层。
///
/// # 示例
/// ```rust
/// use provider_diag::{LifecycleState, MessageBuilder};
///
/// let mut builder = MessageBuilder::with_provider_name("MyProvider");
/// let message = builder
///     .set_state(LifecycleState::Creating)
///     .set_cause("timeout")
///     .produce();
/// assert_eq!(message, "error creating MyProvider: timeout");
/// assert_eq!(builder.produce(), "error in MyProvider");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageBuilder {
    template: Descriptor,
    overlay: Descriptor,
}

/// 构建器状态快照，用于临时修改后恢复
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderSnapshot {
    template: Descriptor,
    overlay: Descriptor,
}

impl MessageBuilder {
    /// 创建空模板的构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 创建以 provider 名称为模板的构建器
    pub fn with_provider_name(name: impl Into<String>) -> Self {
        Self::from_template(Descriptor::new().with_provider_name(name))
    }

    /// 创建以底层错误为模板的构建器
    pub fn with_cause(cause: impl fmt::Display) -> Self {
        Self::from_template(Descriptor::new().with_cause(cause))
    }

    /// 使用已有描述符作为模板
    pub fn from_template(template: Descriptor) -> Self {
        Self {
            template,
            overlay: Descriptor::default(),
        }
    }

    /// 使用配置文件中的模板创建构建器
    pub fn from_config(config: &Config) -> Self {
        Self::from_template(config.template.clone())
    }

    // ============================================================
    // 模板层
    // ============================================================

    pub fn save_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.template.id = id.into();
        self
    }

    pub fn save_provider_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.template.provider_name = name.into();
        self
    }

    pub fn save_resource_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.template.resource_name = name.into();
        self
    }

    pub fn save_cause(&mut self, cause: impl fmt::Display) -> &mut Self {
        self.template.cause = cause.to_string();
        self
    }

    pub fn save_attribute(&mut self, attribute: impl Into<String>) -> &mut Self {
        self.template.attribute = attribute.into();
        self
    }

    /// 保存生命周期阶段，传入 `None` 可清除
    pub fn save_state(&mut self, state: impl Into<Option<LifecycleState>>) -> &mut Self {
        self.template.state = state.into();
        self
    }

    // ============================================================
    // 覆盖层
    // ============================================================

    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.overlay.id = id.into();
        self
    }

    pub fn set_provider_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.overlay.provider_name = name.into();
        self
    }

    pub fn set_resource_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.overlay.resource_name = name.into();
        self
    }

    pub fn set_cause(&mut self, cause: impl fmt::Display) -> &mut Self {
        self.overlay.cause = cause.to_string();
        self
    }

    pub fn set_attribute(&mut self, attribute: impl Into<String>) -> &mut Self {
        self.overlay.attribute = attribute.into();
        self
    }

    pub fn set_state(&mut self, state: impl Into<Option<LifecycleState>>) -> &mut Self {
        self.overlay.state = state.into();
        self
    }

    /// 丢弃尚未使用的覆盖字段
    pub fn clear_overlay(&mut self) -> &mut Self {
        self.overlay = Descriptor::default();
        self
    }

    // ============================================================
    // 生成
    // ============================================================

    /// 合并模板层与覆盖层并生成消息，随后清空覆盖层
    pub fn produce(&mut self) -> String {
        let effective = self.effective();
        self.finish(&effective)
    }

    /// 在模板层与覆盖层之上再叠加 `argument` 生成消息，随后清空覆盖层
    pub fn produce_with(&mut self, argument: &Descriptor) -> String {
        let effective = layered_merge([&self.template, &self.overlay, argument]);
        self.finish(&effective)
    }

    /// 与 [`produce`](Self::produce) 相同，返回错误值
    pub fn to_error(&mut self) -> ProviderError {
        ProviderError::new(self.produce())
    }

    /// 与 [`produce_with`](Self::produce_with) 相同，返回错误值
    pub fn fill_message(&mut self, argument: &Descriptor) -> ProviderError {
        ProviderError::new(self.produce_with(argument))
    }

    /// 预览当前的有效描述符，不清空覆盖层
    pub fn effective(&self) -> Descriptor {
        layered_merge([&self.template, &self.overlay])
    }

    fn finish(&mut self, effective: &Descriptor) -> String {
        let message = format(effective);
        self.overlay = Descriptor::default();
        debug!(message = %message, "produced provider diagnostic");
        message
    }

    // ============================================================
    // 状态访问
    // ============================================================

    /// 获取模板层
    pub fn template(&self) -> &Descriptor {
        &self.template
    }

    /// 获取覆盖层
    pub fn overlay(&self) -> &Descriptor {
        &self.overlay
    }

    /// 保存当前模板层和覆盖层
    pub fn snapshot(&self) -> BuilderSnapshot {
        BuilderSnapshot {
            template: self.template.clone(),
            overlay: self.overlay.clone(),
        }
    }

    /// 恢复到之前保存的快照
    pub fn restore(&mut self, snapshot: BuilderSnapshot) -> &mut Self {
        self.template = snapshot.template;
        self.overlay = snapshot.overlay;
        self
    }
}

impl From<Descriptor> for MessageBuilder {
    fn from(template: Descriptor) -> Self {
        Self::from_template(template)
    }
}
