//! 格式化器测试
//!
//! 覆盖各字段组合下的消息文本

use provider_diag::{Descriptor, LifecycleState, format};

const CRUD_STATES: [LifecycleState; 4] = [
    LifecycleState::Creating,
    LifecycleState::Reading,
    LifecycleState::Updating,
    LifecycleState::Deleting,
];

#[test]
fn empty_descriptor_renders_lead_word_only() {
    assert_eq!(format(&Descriptor::default()), "error");
}

#[test]
fn provider_or_resource_without_state_uses_in_connector() {
    let provider = Descriptor::new().with_provider_name("MyProvider");
    assert_eq!(format(&provider), "error in MyProvider");

    let resource = Descriptor::new().with_resource_name("Virtual Machine");
    assert_eq!(format(&resource), "error in Virtual Machine");
}

#[test]
fn crud_states_render_full_message() {
    for state in CRUD_STATES {
        let descriptor = Descriptor::new()
            .with_id("5456543433545656")
            .with_provider_name("TerraformProvider")
            .with_resource_name("PeeringConnection")
            .with_cause("Error processing your request")
            .with_state(state);

        let expected = std::format!(
            "error {} TerraformProvider PeeringConnection (5456543433545656): Error processing your request",
            state.as_word()
        );
        assert_eq!(format(&descriptor), expected, "state {state}");
    }
}

#[test]
fn setting_state_without_attribute_inserts_generic_clause() {
    let descriptor = Descriptor::new()
        .with_provider_name("TFProvider")
        .with_resource_name("VM")
        .with_cause("nil pointer")
        .with_state(LifecycleState::Setting);

    assert_eq!(
        format(&descriptor),
        "error setting an attribute in TFProvider VM: nil pointer"
    );
}

#[test]
fn setting_state_with_attribute_names_the_attribute() {
    let descriptor = Descriptor::new()
        .with_id("5456543433545656")
        .with_provider_name("TFProvider")
        .with_resource_name("VM")
        .with_cause("nil pointer")
        .with_attribute("vm_id")
        .with_state(LifecycleState::Setting);

    assert_eq!(
        format(&descriptor),
        "error setting attribute `vm_id` in TFProvider VM (5456543433545656): nil pointer"
    );
}

#[test]
fn attribute_without_state_forces_setting() {
    let descriptor = Descriptor::new()
        .with_provider_name("MyProvider")
        .with_attribute("name");

    assert_eq!(
        format(&descriptor),
        "error setting attribute `name` in MyProvider"
    );
}

#[test]
fn attribute_keeps_an_explicit_non_setting_state() {
    let descriptor = Descriptor::new()
        .with_provider_name("MyProvider")
        .with_attribute("size")
        .with_state(LifecycleState::Updating);

    assert_eq!(
        format(&descriptor),
        "error updating attribute `size` in MyProvider"
    );
}

#[test]
fn id_without_provider_or_resource_has_no_connector() {
    let descriptor = Descriptor::new().with_id("abc");
    assert_eq!(format(&descriptor), "error (abc)");
}

#[test]
fn lone_id_survives_attribute_rewrite() {
    let descriptor = Descriptor::new().with_id("abc").with_attribute("tags");
    assert_eq!(format(&descriptor), "error setting attribute `tags` in (abc)");
}

#[test]
fn attribute_without_subject_keeps_trailing_connector() {
    let descriptor = Descriptor::new().with_attribute("x");
    assert_eq!(format(&descriptor), "error setting attribute `x` in");
}

#[test]
fn cause_only_is_appended_after_colon() {
    let descriptor = Descriptor::new().with_cause("boom");
    assert_eq!(format(&descriptor), "error: boom");
}

#[test]
fn state_only_renders_state_word() {
    let descriptor = Descriptor::new().with_state(LifecycleState::Deleting);
    assert_eq!(format(&descriptor), "error deleting");
}

#[test]
fn cause_accepts_any_display_value() {
    let descriptor = Descriptor::new()
        .with_provider_name("MyProvider")
        .with_cause(503);
    assert_eq!(format(&descriptor), "error in MyProvider: 503");
}

#[test]
fn to_message_matches_format() {
    let descriptor = Descriptor::new()
        .with_provider_name("MyProvider")
        .with_resource_name("VM")
        .with_state(LifecycleState::Reading);
    assert_eq!(descriptor.to_message(), format(&descriptor));
}
