//! 错误消息格式化
//!
//! 将有效描述符渲染为自然语言文本，例如
//! `error creating TFProvider VM (id-123): timeout`

use super::descriptor::Descriptor;
use super::state::LifecycleState;
use tracing::trace;

const LEAD_WORD: &str = "error";
const CONNECTOR: &str = "in";

/// 将描述符格式化为错误消息
///
/// 纯函数，对任意字段组合都会返回结果。
pub fn format(descriptor: &Descriptor) -> String {
    let state = descriptor.state;

    // provider / resource / id 依次组成主体部分
    let mut subject: Vec<String> = Vec::with_capacity(3);
    if !descriptor.provider_name.is_empty() {
        subject.push(descriptor.provider_name.clone());
    }
    if !descriptor.resource_name.is_empty() {
        subject.push(descriptor.resource_name.clone());
    }
    if !descriptor.id.is_empty() {
        subject.push(format!("({})", descriptor.id));
    }

    let mut words: Vec<String> = vec![LEAD_WORD.to_string()];

    if !descriptor.attribute.is_empty() || state == Some(LifecycleState::Setting) {
        let state = state.unwrap_or(LifecycleState::Setting);
        let attribute = if descriptor.attribute.is_empty() {
            "an attribute".to_string()
        } else {
            format!("attribute `{}`", descriptor.attribute)
        };

        words.push(state.as_word().to_string());
        words.push(attribute);
        words.push(CONNECTOR.to_string());
    } else if let Some(state) = state {
        words.push(state.as_word().to_string());
    } else if !descriptor.provider_name.is_empty() || !descriptor.resource_name.is_empty() {
        words.push(CONNECTOR.to_string());
    }

    words.extend(subject);
    trace!(words = ?words, "assembled diagnostic words");

    let mut message = words.join(" ");
    if !descriptor.cause.is_empty() {
        message.push_str(": ");
        message.push_str(&descriptor.cause);
    }
    message
}
