// Copyright 2026 the vxedit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cooperative cancellation flag shared between a caller and a running
/// codec/modifier operation.
///
/// This replaces the original's `Format::stopExecution()`, which polled a
/// single global `app::App` quit flag (REDESIGN FLAG (a) in `spec.md` §9):
/// a global makes it impossible to cancel one load while another keeps
/// running, and makes the codec crate depend on an application singleton
/// it otherwise has no need to know about. `CancelToken` is instead passed
/// explicitly into every long-running call, cloned cheaply (it's an
/// `Arc`), and can be held independently per in-flight operation.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A fresh, not-yet-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(false)))
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// `true` iff [`CancelToken::cancel`] has been called on this token or
    /// any of its clones.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
