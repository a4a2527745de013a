//! View tree with the visual properties the transition drives.
//!
//! Views carry a frame, a uniform centered scale, and an opacity. The
//! tree is single-threaded; handles are cheap Rc clones and parent links
//! are weak.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use smallvec::SmallVec;
use slipover_ui_graphics::Rect;

use crate::controller::PresenterHandle;

pub struct View {
    frame: Rect,
    /// Uniform scale about the view center. 1.0 = identity.
    scale: f32,
    /// Opacity in [0, 1].
    alpha: f32,
    parent: Weak<RefCell<View>>,
    children: SmallVec<[ViewHandle; 4]>,
    /// Capability installed by an enclosing presentation controller.
    presenter: Option<PresenterHandle>,
}

/// Shared handle to a [`View`].
#[derive(Clone)]
pub struct ViewHandle(Rc<RefCell<View>>);

impl ViewHandle {
    pub fn new(frame: Rect) -> Self {
        Self(Rc::new(RefCell::new(View {
            frame,
            scale: 1.0,
            alpha: 1.0,
            parent: Weak::new(),
            children: SmallVec::new(),
            presenter: None,
        })))
    }

    pub fn frame(&self) -> Rect {
        self.0.borrow().frame
    }

    pub fn set_frame(&self, frame: Rect) {
        self.0.borrow_mut().frame = frame;
    }

    /// Move the top edge, keeping size and horizontal position.
    pub fn set_frame_y(&self, y: f32) {
        let mut view = self.0.borrow_mut();
        view.frame = view.frame.with_y(y);
    }

    pub fn scale(&self) -> f32 {
        self.0.borrow().scale
    }

    pub fn set_scale(&self, scale: f32) {
        self.0.borrow_mut().scale = scale;
    }

    pub fn alpha(&self) -> f32 {
        self.0.borrow().alpha
    }

    pub fn set_alpha(&self, alpha: f32) {
        self.0.borrow_mut().alpha = alpha;
    }

    pub fn add_child(&self, child: &ViewHandle) {
        child.remove_from_parent();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
    }

    pub fn remove_from_parent(&self) {
        let parent = self.0.borrow().parent.upgrade();
        if let Some(parent) = parent {
            parent
                .borrow_mut()
                .children
                .retain(|c| !Rc::ptr_eq(&c.0, &self.0));
        }
        self.0.borrow_mut().parent = Weak::new();
    }

    pub fn parent(&self) -> Option<ViewHandle> {
        self.0.borrow().parent.upgrade().map(ViewHandle)
    }

    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    pub fn ptr_eq(&self, other: &ViewHandle) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn install_presenter(&self, handle: PresenterHandle) {
        self.0.borrow_mut().presenter = Some(handle);
    }

    /// Walk explicit parent links to the nearest installed presentation
    /// controller. Content inside an overlay uses this to request its own
    /// deferral or dismissal without holding a direct reference.
    pub fn enclosing_presenter(&self) -> Option<crate::controller::PresentationController> {
        let mut current = self.clone();
        loop {
            let (handle, parent) = {
                let view = current.0.borrow();
                (view.presenter.clone(), view.parent.upgrade())
            };
            if let Some(handle) = handle {
                if let Some(controller) = handle.upgrade() {
                    return Some(controller);
                }
            }
            current = ViewHandle(parent?);
        }
    }
}
