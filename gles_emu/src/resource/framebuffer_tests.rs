use super::*;

// ============================================================================
// ATTACHMENT TESTS
// ============================================================================

#[test]
fn test_new_framebuffer_has_no_attachments() {
    let fb = Framebuffer::new();
    for slot in AttachmentSlot::ALL {
        assert_eq!(fb.attachment(slot), Attachment::NONE);
    }
    assert!(!fb.has_attachments());
    assert!(!fb.is_drawing());
    assert!(!fb.is_pending_delete());
    assert!(!fb.is_updated());
}

#[test]
fn test_slot_from_gl() {
    assert_eq!(AttachmentSlot::from_gl(GL_COLOR_ATTACHMENT0), Some(AttachmentSlot::Color));
    assert_eq!(AttachmentSlot::from_gl(GL_DEPTH_ATTACHMENT), Some(AttachmentSlot::Depth));
    assert_eq!(AttachmentSlot::from_gl(GL_STENCIL_ATTACHMENT), Some(AttachmentSlot::Stencil));
    assert_eq!(AttachmentSlot::from_gl(GL_COLOR_ATTACHMENT0 + 1), None);
}

#[test]
fn test_set_attachment_with_zero_name_clears() {
    let mut fb = Framebuffer::new();
    fb.set_attachment(AttachmentSlot::Color, AttachmentKind::Renderbuffer, 5);
    assert!(fb.has_attachments());

    fb.set_attachment(AttachmentSlot::Color, AttachmentKind::Renderbuffer, 0);
    assert_eq!(fb.attachment(AttachmentSlot::Color), Attachment::NONE);
}

#[test]
fn test_attachment_is_renderbuffer_checks_kind_and_name() {
    let mut fb = Framebuffer::new();
    fb.set_attachment(AttachmentSlot::Color, AttachmentKind::Texture, 5);
    fb.set_attachment(AttachmentSlot::Depth, AttachmentKind::Renderbuffer, 5);

    assert!(!fb.attachment_is_renderbuffer(AttachmentSlot::Color, 5));
    assert!(fb.attachment_is_renderbuffer(AttachmentSlot::Depth, 5));
    assert!(!fb.attachment_is_renderbuffer(AttachmentSlot::Depth, 6));
    assert!(!fb.attachment_is_renderbuffer(AttachmentSlot::Stencil, 0));
}

#[test]
fn test_renderbuffer_slots_reports_every_slot() {
    let mut fb = Framebuffer::new();
    fb.set_attachment(AttachmentSlot::Depth, AttachmentKind::Renderbuffer, 3);
    fb.set_attachment(AttachmentSlot::Stencil, AttachmentKind::Renderbuffer, 3);

    let slots: Vec<AttachmentSlot> = fb.renderbuffer_slots(3).collect();
    assert_eq!(slots, vec![AttachmentSlot::Depth, AttachmentSlot::Stencil]);
    assert!(fb.references_renderbuffer(3));
    assert!(!fb.references_renderbuffer(4));
}

#[test]
fn test_detach_clears_only_that_slot() {
    let mut fb = Framebuffer::new();
    fb.set_attachment(AttachmentSlot::Depth, AttachmentKind::Renderbuffer, 3);
    fb.set_attachment(AttachmentSlot::Stencil, AttachmentKind::Renderbuffer, 3);

    fb.detach(AttachmentSlot::Depth);
    assert!(fb.attachment(AttachmentSlot::Depth).is_none());
    assert!(fb.attachment_is_renderbuffer(AttachmentSlot::Stencil, 3));
}

// ============================================================================
// FLAG TESTS
// ============================================================================

#[test]
fn test_notify_updated_is_idempotent() {
    let mut fb = Framebuffer::new();
    fb.notify_updated();
    fb.notify_updated();
    assert!(fb.is_updated());
    fb.clear_updated();
    assert!(!fb.is_updated());
}

#[test]
fn test_drawing_and_pending_delete_flags() {
    let mut fb = Framebuffer::new();
    fb.set_drawing(true);
    fb.mark_pending_delete();
    assert!(fb.is_drawing());
    assert!(fb.is_pending_delete());
    fb.set_drawing(false);
    assert!(!fb.is_drawing());
}
