//! 分层合并
//!
//! 所有生成入口都通过 [`layered_merge`] 计算有效描述符

use super::descriptor::Descriptor;

/// 按优先级从低到高依次合并各层描述符
///
/// 后出现的层中非空字段覆盖先前的值，空字段保留先前的值。
/// 没有任何层时返回空描述符。
///
/// # 示例
/// ```rust
/// use provider_diag::{Descriptor, layered_merge};
///
/// let template = Descriptor::new().with_provider_name("TFProvider");
/// let argument = Descriptor::new().with_resource_name("VM");
/// let effective = layered_merge([&template, &argument]);
/// assert_eq!(effective.provider_name, "TFProvider");
/// assert_eq!(effective.resource_name, "VM");
/// ```
pub fn layered_merge<'a, I>(tiers: I) -> Descriptor
where
    I: IntoIterator<Item = &'a Descriptor>,
{
    tiers
        .into_iter()
        .fold(Descriptor::default(), |mut effective, tier| {
            effective.merge_from(tier);
            effective
        })
}
