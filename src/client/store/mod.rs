//! Client state store.
//!
//! One slice per entity family, each a plain struct mutated only through its lifecycle
//! methods. Actions in the submodules run one request, then settle the slice through a
//! [`SliceHandle`], the single writer for that slice. In the app the handle is a Dioxus
//! [`Signal`]; tests use `Rc<RefCell<_>>`.

pub mod account;
pub mod auth;
pub mod lifecycle;
pub mod notification;
pub mod ship;
pub mod slice;

use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;

/// Single-writer access to a slice
pub trait SliceHandle<S> {
    /// Mutate the slice and return whatever `f` produces
    fn apply<R>(&mut self, f: impl FnOnce(&mut S) -> R) -> R;

    /// Read from the current snapshot
    fn read_with<R>(&self, f: impl FnOnce(&S) -> R) -> R;
}

impl<S: 'static> SliceHandle<S> for Signal<S> {
    fn apply<R>(&mut self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.write())
    }

    fn read_with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.read())
    }
}

impl<S> SliceHandle<S> for Rc<RefCell<S>> {
    fn apply<R>(&mut self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.borrow_mut())
    }

    fn read_with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.borrow())
    }
}
