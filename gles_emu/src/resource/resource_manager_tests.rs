use super::*;
use crate::resource::{AttachmentKind, AttachmentSlot, TargetKind};

#[test]
fn test_new_resource_manager_is_empty() {
    let rm = ResourceManager::new();
    assert_eq!(rm.renderbuffer_count(), 0);
    assert_eq!(rm.framebuffer_count(), 0);
}

#[test]
fn test_renderbuffer_and_framebuffer_tables_are_independent() {
    let mut rm = ResourceManager::new();
    let rb = rm.allocate_renderbuffer().unwrap();
    let fb = rm.allocate_framebuffer().unwrap();

    assert_eq!(rb, 1);
    assert_eq!(fb, 1);
    assert!(rm.renderbuffer_exists(1));
    assert!(rm.framebuffer_exists(1));

    rm.deallocate_renderbuffer(1);
    assert!(!rm.renderbuffer_exists(1));
    assert!(rm.framebuffer_exists(1));
}

#[test]
fn test_generated_renderbuffer_is_unset() {
    let mut rm = ResourceManager::new();
    let name = rm.allocate_renderbuffer().unwrap();
    assert_eq!(rm.renderbuffer(name).unwrap().target(), TargetKind::Unset);
}

#[test]
fn test_get_or_create_is_implicit_creation() {
    let mut rm = ResourceManager::new();
    assert!(!rm.renderbuffer_exists(9));
    rm.get_or_create_renderbuffer(9);
    assert!(rm.renderbuffer_exists(9));
    rm.get_or_create_framebuffer(4).set_drawing(true);
    assert!(rm.framebuffer(4).unwrap().is_drawing());
}

#[test]
fn test_notify_renderbuffer_users_flags_only_referencing_framebuffers() {
    let mut rm = ResourceManager::new();
    rm.get_or_create_framebuffer(1)
        .set_attachment(AttachmentSlot::Color, AttachmentKind::Renderbuffer, 5);
    rm.get_or_create_framebuffer(2)
        .set_attachment(AttachmentSlot::Stencil, AttachmentKind::Renderbuffer, 5);
    rm.get_or_create_framebuffer(3)
        .set_attachment(AttachmentSlot::Color, AttachmentKind::Texture, 5);
    rm.get_or_create_framebuffer(4);

    assert_eq!(rm.notify_renderbuffer_users(5), 2);

    assert!(rm.framebuffer(1).unwrap().is_updated());
    assert!(rm.framebuffer(2).unwrap().is_updated());
    assert!(!rm.framebuffer(3).unwrap().is_updated());
    assert!(!rm.framebuffer(4).unwrap().is_updated());
}
