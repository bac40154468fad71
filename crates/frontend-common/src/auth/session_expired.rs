//! Global session-expired handler
//!
//! Lets the application shell react to an unrecovered 401 from anywhere in
//! the client without every component checking for it. The registered
//! callback is the one place that performs the forced logout.

use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    /// Global session-expired callback
    static SESSION_EXPIRED_CALLBACK: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Set the global session-expired callback
pub fn set_session_expired_callback(callback: Rc<dyn Fn()>) {
    SESSION_EXPIRED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

/// Clear the session-expired callback
pub fn clear_session_expired_callback() {
    SESSION_EXPIRED_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Trigger the session-expired callback
pub fn trigger() {
    SESSION_EXPIRED_CALLBACK.with(|cb| {
        if let Some(callback) = cb.borrow().as_ref() {
            callback();
        }
    });
}
