use super::*;
use std::sync::{Arc, Mutex};
use crate::context::ContextConfig;
use crate::device::mock_device::{shared_mock, MockDevice};
use crate::error::Error;
use crate::gl::*;
use crate::resource::{AttachmentKind, TargetKind};

fn context() -> (Arc<Mutex<MockDevice>>, Context) {
    let (mock, device) = shared_mock();
    (mock, Context::new(device, ContextConfig::default()).unwrap())
}

fn small_context(max: u32) -> (Arc<Mutex<MockDevice>>, Context) {
    let (mock, device) = shared_mock();
    let config = ContextConfig { max_renderbuffer_size: max, ..Default::default() };
    (mock, Context::new(device, config).unwrap())
}

/// Framebuffer 1 bound and drawing, with `rb` in the given slots
fn drawing_framebuffer_with(ctx: &mut Context, rb: GLuint, slots: &[AttachmentSlot]) {
    ctx.bind_framebuffer(GL_FRAMEBUFFER, 1);
    let framebuffer = ctx.framebuffer_mut(1).unwrap();
    for slot in slots {
        framebuffer.set_attachment(*slot, AttachmentKind::Renderbuffer, rb);
    }
    framebuffer.set_drawing(true);
}

fn finish_count(mock: &Arc<Mutex<MockDevice>>) -> u32 {
    mock.lock().unwrap().finish_count
}

// ============================================================================
// BIND TESTS
// ============================================================================

#[test]
fn test_bind_wrong_target_changes_nothing() {
    let (_mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_FRAMEBUFFER, 4);
    assert_eq!(ctx.get_error(), GL_INVALID_ENUM);
    assert!(!ctx.is_renderbuffer(4));
    assert_eq!(ctx.active_renderbuffer(), 0);
}

#[test]
fn test_bind_creates_object_implicitly() {
    let (_mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 4);

    assert!(ctx.is_renderbuffer(4));
    assert_eq!(ctx.active_renderbuffer(), 4);
    assert_eq!(ctx.resources().renderbuffer(4).unwrap().target(), TargetKind::Renderbuffer);
    assert_eq!(ctx.get_error(), GL_NO_ERROR);
}

#[test]
fn test_bind_zero_clears_without_creating() {
    let (_mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 4);
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 0);

    assert_eq!(ctx.active_renderbuffer(), 0);
    assert!(!ctx.is_renderbuffer(0));
    assert_eq!(ctx.resources().renderbuffer_count(), 1);
}

#[test]
fn test_first_bind_notifies_referencing_framebuffers() {
    let (_mock, mut ctx) = context();
    let mut names = [0; 1];
    ctx.gen_renderbuffers(1, Some(&mut names));
    let rb = names[0];

    ctx.bind_framebuffer(GL_FRAMEBUFFER, 2);
    ctx.framebuffer_mut(2).unwrap()
        .set_attachment(AttachmentSlot::Depth, AttachmentKind::Renderbuffer, rb);
    ctx.bind_framebuffer(GL_FRAMEBUFFER, 3);
    ctx.framebuffer_mut(3).unwrap()
        .set_attachment(AttachmentSlot::Color, AttachmentKind::Texture, rb);
    ctx.bind_framebuffer(GL_FRAMEBUFFER, 0);

    ctx.bind_renderbuffer(GL_RENDERBUFFER, rb);

    assert!(ctx.framebuffer(2).unwrap().is_updated());
    assert!(!ctx.framebuffer(3).unwrap().is_updated());
}

#[test]
fn test_rebind_does_not_notify_again() {
    let (_mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 5);
    ctx.bind_framebuffer(GL_FRAMEBUFFER, 1);
    ctx.framebuffer_renderbuffer(GL_FRAMEBUFFER, GL_COLOR_ATTACHMENT0, GL_RENDERBUFFER, 5).unwrap();
    ctx.framebuffer_mut(1).unwrap().clear_updated();

    ctx.bind_renderbuffer(GL_RENDERBUFFER, 0);
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 5);

    assert!(!ctx.framebuffer(1).unwrap().is_updated());
}

// ============================================================================
// GENERATE / EXISTS TESTS
// ============================================================================

#[test]
fn test_gen_renderbuffers_writes_fresh_unset_names() {
    let (mock, mut ctx) = context();
    let mut names = [0; 3];
    ctx.gen_renderbuffers(3, Some(&mut names));

    assert_eq!(names, [1, 2, 3]);
    for name in names {
        assert!(ctx.is_renderbuffer(name));
        assert_eq!(ctx.resources().renderbuffer(name).unwrap().target(), TargetKind::Unset);
    }
    assert_eq!(mock.lock().unwrap().create_count(), 0);
}

#[test]
fn test_gen_renderbuffers_skips_names_created_by_bind() {
    let (_mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 1);
    let mut names = [0; 2];
    ctx.gen_renderbuffers(2, Some(&mut names));
    assert_eq!(names, [2, 3]);
}

#[test]
fn test_gen_renderbuffers_negative_count() {
    let (_mock, mut ctx) = context();
    let mut names = [0; 2];
    ctx.gen_renderbuffers(-1, Some(&mut names));
    assert_eq!(ctx.get_error(), GL_INVALID_VALUE);
    assert_eq!(names, [0, 0]);
    assert_eq!(ctx.resources().renderbuffer_count(), 0);
}

#[test]
fn test_gen_renderbuffers_without_output_is_noop() {
    let (_mock, mut ctx) = context();
    ctx.gen_renderbuffers(4, None);
    assert_eq!(ctx.get_error(), GL_NO_ERROR);
    assert_eq!(ctx.resources().renderbuffer_count(), 0);
}

#[test]
fn test_gen_renderbuffers_bounded_by_output_length() {
    let (_mock, mut ctx) = context();
    let mut names = [0; 2];
    ctx.gen_renderbuffers(5, Some(&mut names));
    assert_eq!(names, [1, 2]);
    assert_eq!(ctx.resources().renderbuffer_count(), 2);
}

#[test]
fn test_is_renderbuffer_zero_is_false() {
    let (_mock, ctx) = context();
    assert!(!ctx.is_renderbuffer(0));
    assert!(!ctx.is_renderbuffer(17));
}

// ============================================================================
// DELETE TESTS
// ============================================================================

#[test]
fn test_delete_negative_count() {
    let (_mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 1);
    ctx.delete_renderbuffers(-1, Some(&[1])).unwrap();
    assert_eq!(ctx.get_error(), GL_INVALID_VALUE);
    assert!(ctx.is_renderbuffer(1));
}

#[test]
fn test_delete_without_list_is_noop() {
    let (_mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 1);
    ctx.delete_renderbuffers(1, None).unwrap();
    assert!(ctx.is_renderbuffer(1));
    assert_eq!(ctx.get_error(), GL_NO_ERROR);
}

#[test]
fn test_delete_active_renderbuffer_resets_binding() {
    let (mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 1);
    ctx.renderbuffer_storage(GL_RENDERBUFFER, GL_RGBA4, 8, 8).unwrap();

    ctx.delete_renderbuffers(1, Some(&[1])).unwrap();

    assert!(!ctx.is_renderbuffer(1));
    assert_eq!(ctx.active_renderbuffer(), 0);
    assert!(mock.lock().unwrap().is_released(0));
}

#[test]
fn test_delete_inactive_keeps_binding() {
    let (_mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 1);
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 2);
    ctx.delete_renderbuffers(1, Some(&[1])).unwrap();
    assert_eq!(ctx.active_renderbuffer(), 2);
}

#[test]
fn test_delete_zero_and_unknown_names_are_skipped() {
    let (mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 1);
    ctx.delete_renderbuffers(3, Some(&[0, 42, 0])).unwrap();

    assert_eq!(ctx.get_error(), GL_NO_ERROR);
    assert_eq!(finish_count(&mock), 0);
    assert!(ctx.is_renderbuffer(1));
}

#[test]
fn test_delete_attached_to_drawing_framebuffer_drains_once() {
    let (mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 5);
    drawing_framebuffer_with(&mut ctx, 5, &[AttachmentSlot::Color]);

    ctx.delete_renderbuffers(1, Some(&[5])).unwrap();

    assert_eq!(finish_count(&mock), 1);
    let framebuffer = ctx.framebuffer(1).unwrap();
    assert!(framebuffer.attachment(AttachmentSlot::Color).is_none());
    assert!(framebuffer.is_pending_delete());
    assert!(!ctx.is_renderbuffer(5));
}

#[test]
fn test_delete_depth_stencil_attachment_clears_both_slots() {
    let (mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 5);
    drawing_framebuffer_with(&mut ctx, 5, &[AttachmentSlot::Depth, AttachmentSlot::Stencil]);

    ctx.delete_renderbuffers(1, Some(&[5])).unwrap();

    assert_eq!(finish_count(&mock), 1);
    let framebuffer = ctx.framebuffer(1).unwrap();
    assert!(framebuffer.attachment(AttachmentSlot::Depth).is_none());
    assert!(framebuffer.attachment(AttachmentSlot::Stencil).is_none());
    // Only a color attachment marks the framebuffer for deletion
    assert!(!framebuffer.is_pending_delete());
}

#[test]
fn test_delete_attached_to_idle_framebuffer_detaches_without_drain() {
    let (mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 5);
    drawing_framebuffer_with(&mut ctx, 5, &[AttachmentSlot::Color]);
    ctx.current_framebuffer_mut().set_drawing(false);

    ctx.delete_renderbuffers(1, Some(&[5])).unwrap();

    assert_eq!(finish_count(&mock), 0);
    assert!(ctx.framebuffer(1).unwrap().attachment(AttachmentSlot::Color).is_none());
    assert!(!ctx.framebuffer(1).unwrap().is_pending_delete());
}

#[test]
fn test_delete_leaves_other_framebuffers_untouched() {
    let (mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 5);
    drawing_framebuffer_with(&mut ctx, 5, &[AttachmentSlot::Color]);
    ctx.bind_framebuffer(GL_FRAMEBUFFER, 2);

    ctx.delete_renderbuffers(1, Some(&[5])).unwrap();

    assert_eq!(finish_count(&mock), 0);
    assert!(ctx.framebuffer(1).unwrap().attachment_is_renderbuffer(AttachmentSlot::Color, 5));
}

#[test]
fn test_delete_each_handle_drains_separately() {
    let (mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 5);
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 6);
    drawing_framebuffer_with(&mut ctx, 5, &[AttachmentSlot::Color]);
    ctx.current_framebuffer_mut()
        .set_attachment(AttachmentSlot::Depth, AttachmentKind::Renderbuffer, 6);

    ctx.delete_renderbuffers(2, Some(&[5, 6])).unwrap();

    assert_eq!(finish_count(&mock), 2);
    assert!(!ctx.current_framebuffer().has_attachments());
}

#[test]
fn test_delete_twice_is_idempotent() {
    let (mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 5);
    drawing_framebuffer_with(&mut ctx, 5, &[AttachmentSlot::Color]);

    ctx.delete_renderbuffers(1, Some(&[5])).unwrap();
    ctx.delete_renderbuffers(1, Some(&[5])).unwrap();

    assert_eq!(finish_count(&mock), 1);
    assert_eq!(ctx.get_error(), GL_NO_ERROR);
}

#[test]
fn test_delete_propagates_device_loss() {
    let (mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 5);
    drawing_framebuffer_with(&mut ctx, 5, &[AttachmentSlot::Color]);
    mock.lock().unwrap().fail_finish = true;

    let result = ctx.delete_renderbuffers(1, Some(&[5]));
    assert!(matches!(result, Err(Error::BackendError(_))));
}

// ============================================================================
// PARAMETER QUERY TESTS
// ============================================================================

#[test]
fn test_get_parameter_wrong_target() {
    let (_mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 1);
    assert_eq!(ctx.get_renderbuffer_parameter(GL_FRAMEBUFFER, GL_RENDERBUFFER_WIDTH), None);
    assert_eq!(ctx.get_error(), GL_INVALID_ENUM);
}

#[test]
fn test_get_parameter_without_binding() {
    let (_mock, mut ctx) = context();
    let mut names = [0; 1];
    ctx.gen_renderbuffers(1, Some(&mut names));

    assert_eq!(ctx.get_renderbuffer_parameter(GL_RENDERBUFFER, GL_RENDERBUFFER_WIDTH), None);
    assert_eq!(ctx.get_error(), GL_INVALID_OPERATION);
}

#[test]
fn test_get_parameter_before_storage_reports_defaults() {
    let (_mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 1);

    assert_eq!(
        ctx.get_renderbuffer_parameter(GL_RENDERBUFFER, GL_RENDERBUFFER_INTERNAL_FORMAT),
        Some(GL_RGBA4 as GLint)
    );
    assert_eq!(ctx.get_renderbuffer_parameter(GL_RENDERBUFFER, GL_RENDERBUFFER_RED_SIZE), Some(0));
    assert_eq!(ctx.get_error(), GL_NO_ERROR);
}

#[test]
fn test_get_parameter_unknown_name() {
    let (_mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 1);
    ctx.renderbuffer_storage(GL_RENDERBUFFER, GL_RGBA4, 4, 4).unwrap();

    assert_eq!(ctx.get_renderbuffer_parameter(GL_RENDERBUFFER, GL_MAX_RENDERBUFFER_SIZE), None);
    assert_eq!(ctx.get_error(), GL_INVALID_ENUM);
}

#[test]
fn test_get_parameter_unknown_name_before_storage() {
    let (_mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 1);

    assert_eq!(ctx.get_renderbuffer_parameter(GL_RENDERBUFFER, GL_MAX_RENDERBUFFER_SIZE), None);
    assert_eq!(ctx.get_error(), GL_INVALID_ENUM);

    assert_eq!(ctx.get_renderbuffer_parameter(GL_RENDERBUFFER, GL_RENDERBUFFER_WIDTH), Some(0));
    assert_eq!(ctx.get_error(), GL_NO_ERROR);
}

#[test]
fn test_get_parameteriv_leaves_output_on_error() {
    let (_mock, mut ctx) = context();
    let mut value: GLint = -7;
    ctx.get_renderbuffer_parameteriv(GL_RENDERBUFFER, GL_RENDERBUFFER_WIDTH, &mut value);
    assert_eq!(value, -7);

    ctx.bind_renderbuffer(GL_RENDERBUFFER, 1);
    ctx.renderbuffer_storage(GL_RENDERBUFFER, GL_RGB5_A1, 12, 3).unwrap();
    ctx.get_renderbuffer_parameteriv(GL_RENDERBUFFER, GL_RENDERBUFFER_ALPHA_SIZE, &mut value);
    assert_eq!(value, 1);
}

// ============================================================================
// STORAGE TESTS
// ============================================================================

#[test]
fn test_storage_allocates_backing() {
    let (mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 1);
    ctx.renderbuffer_storage(GL_RENDERBUFFER, GL_DEPTH_COMPONENT16, 64, 32).unwrap();

    assert_eq!(ctx.get_error(), GL_NO_ERROR);
    assert_eq!(ctx.get_renderbuffer_parameter(GL_RENDERBUFFER, GL_RENDERBUFFER_DEPTH_SIZE), Some(16));
    assert_eq!(mock.lock().unwrap().create_count(), 1);
    assert!(ctx.resources().renderbuffer(1).unwrap().has_backing());
}

#[test]
fn test_storage_validation_order_target_first() {
    let (_mock, mut ctx) = small_context(16);
    // Wrong target, bad size, bad format and nothing bound all at once
    ctx.renderbuffer_storage(GL_FRAMEBUFFER, 0x1234, -1, 17).unwrap();
    assert_eq!(ctx.get_error(), GL_INVALID_ENUM);
}

#[test]
fn test_storage_validation_order_range_before_format() {
    let (_mock, mut ctx) = small_context(16);
    ctx.renderbuffer_storage(GL_RENDERBUFFER, 0x1234, 17, 1).unwrap();
    assert_eq!(ctx.get_error(), GL_INVALID_VALUE);
}

#[test]
fn test_storage_validation_order_format_before_binding() {
    let (_mock, mut ctx) = small_context(16);
    ctx.renderbuffer_storage(GL_RENDERBUFFER, 0x1234, 1, 1).unwrap();
    assert_eq!(ctx.get_error(), GL_INVALID_ENUM);
}

#[test]
fn test_storage_without_binding() {
    let (_mock, mut ctx) = small_context(16);
    ctx.renderbuffer_storage(GL_RENDERBUFFER, GL_RGB565, 1, 1).unwrap();
    assert_eq!(ctx.get_error(), GL_INVALID_OPERATION);
}

#[test]
fn test_storage_over_max_keeps_previous_storage() {
    let (mock, mut ctx) = small_context(16);
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 1);
    ctx.renderbuffer_storage(GL_RENDERBUFFER, GL_RGB565, 16, 8).unwrap();

    ctx.renderbuffer_storage(GL_RENDERBUFFER, GL_RGBA4, 17, 8).unwrap();
    assert_eq!(ctx.get_error(), GL_INVALID_VALUE);
    ctx.renderbuffer_storage(GL_RENDERBUFFER, GL_RGBA4, 8, 17).unwrap();
    assert_eq!(ctx.get_error(), GL_INVALID_VALUE);

    let rb = ctx.resources().renderbuffer(1).unwrap();
    assert_eq!((rb.width(), rb.height()), (16, 8));
    assert_eq!(rb.internal_format().gl(), GL_RGB565);
    assert_eq!(mock.lock().unwrap().create_count(), 1);
}

#[test]
fn test_storage_negative_size() {
    let (_mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 1);
    ctx.renderbuffer_storage(GL_RENDERBUFFER, GL_RGBA4, -1, 4).unwrap();
    assert_eq!(ctx.get_error(), GL_INVALID_VALUE);
}

#[test]
fn test_storage_unlisted_format_makes_no_backend_call() {
    let (mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 1);
    ctx.renderbuffer_storage(GL_RENDERBUFFER, 0x1908, 4, 4).unwrap(); // GL_RGBA

    assert_eq!(ctx.get_error(), GL_INVALID_ENUM);
    assert_eq!(mock.lock().unwrap().create_count(), 0);
}

#[test]
fn test_storage_zero_size_is_legal() {
    let (mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 1);
    ctx.renderbuffer_storage(GL_RENDERBUFFER, GL_STENCIL_INDEX8, 0, 0).unwrap();

    assert_eq!(ctx.get_error(), GL_NO_ERROR);
    assert_eq!(
        ctx.get_renderbuffer_parameter(GL_RENDERBUFFER, GL_RENDERBUFFER_INTERNAL_FORMAT),
        Some(GL_STENCIL_INDEX8 as GLint)
    );
    assert_eq!(mock.lock().unwrap().create_count(), 0);
}

#[test]
fn test_storage_max_size_is_legal() {
    let (_mock, mut ctx) = small_context(16);
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 1);
    ctx.renderbuffer_storage(GL_RENDERBUFFER, GL_RGBA4, 16, 16).unwrap();
    assert_eq!(ctx.get_error(), GL_NO_ERROR);
}

#[test]
fn test_storage_failure_reports_out_of_memory() {
    let (mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 1);
    mock.lock().unwrap().fail_allocations = true;

    ctx.renderbuffer_storage(GL_RENDERBUFFER, GL_RGBA4, 4, 4).unwrap();

    assert_eq!(ctx.get_error(), GL_OUT_OF_MEMORY);
    assert!(!ctx.resources().renderbuffer(1).unwrap().has_backing());
}

#[test]
fn test_storage_on_drawing_framebuffer_attachment_drains() {
    let (mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 5);
    drawing_framebuffer_with(&mut ctx, 5, &[AttachmentSlot::Stencil]);

    ctx.renderbuffer_storage(GL_RENDERBUFFER, GL_STENCIL_INDEX8, 8, 8).unwrap();

    assert_eq!(finish_count(&mock), 1);
    // Storage keeps the attachment in place
    assert!(ctx.current_framebuffer().attachment_is_renderbuffer(AttachmentSlot::Stencil, 5));
    assert!(!ctx.current_framebuffer().is_pending_delete());
}

#[test]
fn test_storage_without_hazard_does_not_drain() {
    let (mock, mut ctx) = context();
    ctx.bind_renderbuffer(GL_RENDERBUFFER, 5);
    drawing_framebuffer_with(&mut ctx, 6, &[AttachmentSlot::Color]);
    ctx.system_framebuffer.set_drawing(true);

    ctx.renderbuffer_storage(GL_RENDERBUFFER, GL_RGBA4, 8, 8).unwrap();

    assert_eq!(finish_count(&mock), 0);
}
