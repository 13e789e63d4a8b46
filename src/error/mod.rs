//! 错误处理模块
//!
//! - [`ProviderError`]：构建器生成的诊断错误值
//! - [`Error`]：本库自身可失败路径（配置加载、阶段解析）的错误

pub mod conversions;

use crate::message::{Descriptor, MessageBuilder};
use std::fmt;
use thiserror::Error;

/// provider 诊断错误
///
/// 仅包含格式化后的消息文本，`Display` 原样输出。
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("{message}")]
pub struct ProviderError {
    message: String,
}

impl ProviderError {
    /// 使用已格式化的消息创建错误
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// 获取消息文本
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 取出消息文本
    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<Descriptor> for ProviderError {
    fn from(descriptor: Descriptor) -> Self {
        Self::new(descriptor.to_message())
    }
}

impl From<ProviderError> for String {
    fn from(err: ProviderError) -> Self {
        err.message
    }
}

/// 库内部错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 无法识别的生命周期阶段
    #[error("unknown lifecycle state: {0:?}")]
    UnknownState(String),

    /// 配置解析失败
    #[error("configuration error: {0}")]
    Config(String),

    /// IO 错误
    #[error("io error: {0}")]
    Io(String),
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, Error>;

/// 将任意错误转换为 provider 诊断错误的扩展 trait
///
/// 错误本身作为覆盖层的 cause，随后立即生成消息。
pub trait DiagnosticResultExt<T> {
    /// 使用构建器当前的模板层和覆盖层生成诊断
    fn or_diagnostic(self, builder: &mut MessageBuilder) -> std::result::Result<T, ProviderError>;

    /// 额外叠加 `argument` 描述符生成诊断
    fn or_diagnostic_with(
        self,
        builder: &mut MessageBuilder,
        argument: &Descriptor,
    ) -> std::result::Result<T, ProviderError>;
}

impl<T, E> DiagnosticResultExt<T> for std::result::Result<T, E>
where
    E: fmt::Display,
{
    fn or_diagnostic(self, builder: &mut MessageBuilder) -> std::result::Result<T, ProviderError> {
        self.map_err(|err| builder.set_cause(err).to_error())
    }

    fn or_diagnostic_with(
        self,
        builder: &mut MessageBuilder,
        argument: &Descriptor,
    ) -> std::result::Result<T, ProviderError> {
        self.map_err(|err| builder.set_cause(err).fill_message(argument))
    }
}
