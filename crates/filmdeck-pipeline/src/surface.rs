//! `Surface` - where rendered views are mounted.

use std::rc::Rc;

use crate::view::{ContainerId, ContainerView, DetailContent};

/// Adapter that displays rendered views.
///
/// Mounting always replaces the container's previous contents. The
/// pipeline never reads back what a surface holds.
pub trait Surface {
    /// Replaces the contents of `container` with `view`.
    fn mount(&self, container: ContainerId, view: ContainerView);

    /// Replaces the detail view.
    fn show_detail(&self, content: DetailContent);
}

impl<S: Surface + ?Sized> Surface for &S {
    fn mount(&self, container: ContainerId, view: ContainerView) {
        (**self).mount(container, view);
    }

    fn show_detail(&self, content: DetailContent) {
        (**self).show_detail(content);
    }
}

impl<S: Surface + ?Sized> Surface for Rc<S> {
    fn mount(&self, container: ContainerId, view: ContainerView) {
        (**self).mount(container, view);
    }

    fn show_detail(&self, content: DetailContent) {
        (**self).show_detail(content);
    }
}
