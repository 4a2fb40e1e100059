// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fire-and-forget user notifications.
//!
//! The canvas reports outcomes ("Point added!") and recoverable problems
//! through a [`Notifier`]. How they are presented is up to the host.

use std::cell::RefCell;
use std::rc::Rc;

/// How a notification should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// An action completed.
    Success,
    /// Neutral information.
    Info,
    /// Something was rejected or skipped.
    Warning,
    /// Something failed.
    Error,
}

/// A delivered notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Presentation hint.
    pub severity: Severity,
    /// Message text.
    pub message: String,
}

/// Receives notifications from the canvas.
pub trait Notifier {
    /// Deliver a notification. Must not fail.
    fn notify(&mut self, severity: Severity, message: &str);
}

/// Forwards notifications to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Success | Severity::Info => log::info!("{message}"),
            Severity::Warning => log::warn!("{message}"),
            Severity::Error => log::error!("{message}"),
        }
    }
}

/// Keeps every notification; clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier {
    log: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything delivered so far.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.log.borrow().clone()
    }

    /// Messages delivered with `severity`.
    #[must_use]
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.log
            .borrow()
            .iter()
            .filter(|n| n.severity == severity)
            .map(|n| n.message.clone())
            .collect()
    }

    /// Forget everything delivered so far.
    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, severity: Severity, message: &str) {
        self.log.borrow_mut().push(Notification {
            severity,
            message: message.to_owned(),
        });
    }
}
