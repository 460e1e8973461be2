//! Page scroll lock held while the mobile overlay is on screen.
//!
//! The lock is a guard: creating it hides overflow on the target, dropping
//! it puts back whatever value was there before. Every exit path (close
//! button, backdrop, link, resize, unmount) releases it by dropping.

use log::debug;

/// Something whose `overflow` style can be read and written. The page
/// body implements this in `dom.rs`.
pub trait OverflowStyle {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

pub struct ScrollLock<T: OverflowStyle> {
    target: T,
    previous: String,
}

impl<T: OverflowStyle> ScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        let previous = target.overflow();
        target.set_overflow("hidden");
        debug!("Scroll lock acquired (previous overflow {:?})", previous);
        Self { target, previous }
    }
}

impl<T: OverflowStyle> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.target.set_overflow(&self.previous);
        debug!("Scroll lock released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeBody(Rc<RefCell<String>>);

    impl OverflowStyle for FakeBody {
        fn overflow(&self) -> String {
            self.0.borrow().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.0.borrow_mut() = value.to_string();
        }
    }

    #[test]
    fn lock_hides_and_restores() {
        let body = FakeBody::default();
        assert_eq!(body.overflow(), "");

        let lock = ScrollLock::acquire(body.clone());
        assert_eq!(body.overflow(), "hidden");

        drop(lock);
        assert_eq!(body.overflow(), "");
    }

    #[test]
    fn restores_previous_value() {
        let body = FakeBody::default();
        body.set_overflow("scroll");

        let lock = ScrollLock::acquire(body.clone());
        assert_eq!(body.overflow(), "hidden");
        drop(lock);
        assert_eq!(body.overflow(), "scroll");
    }

    #[test]
    fn released_when_holder_is_cleared() {
        let body = FakeBody::default();
        let slot: RefCell<Option<ScrollLock<FakeBody>>> = RefCell::new(None);

        *slot.borrow_mut() = Some(ScrollLock::acquire(body.clone()));
        assert_eq!(body.overflow(), "hidden");

        slot.borrow_mut().take();
        assert_eq!(body.overflow(), "");
    }
}
