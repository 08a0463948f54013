use crate::gl::GLuint;

/// Object currently bound to each bindable target
///
/// `0` means nothing is bound (for the framebuffer target: the system
/// framebuffer is current).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveObjectsState {
    renderbuffer: GLuint,
    framebuffer: GLuint,
}

impl ActiveObjectsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_renderbuffer(&self) -> GLuint {
        self.renderbuffer
    }

    pub fn set_active_renderbuffer(&mut self, name: GLuint) {
        self.renderbuffer = name;
    }

    pub fn is_active_renderbuffer(&self, name: GLuint) -> bool {
        name != 0 && self.renderbuffer == name
    }

    pub fn active_framebuffer(&self) -> GLuint {
        self.framebuffer
    }

    pub fn set_active_framebuffer(&mut self, name: GLuint) {
        self.framebuffer = name;
    }

    pub fn is_active_framebuffer(&self, name: GLuint) -> bool {
        name != 0 && self.framebuffer == name
    }
}
