//! Snackbar notification state and the message rules for bot actions.
//!
//! DESIGN
//! ======
//! There is one notification slot. Each push gets a fresh sequence number and
//! auto-dismiss timers close only the notification they were started for, so
//! a newer message is never cut short by an older timer.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use research::wire::ActionReply;

/// How long a notification stays on screen.
pub const AUTO_DISMISS_MS: u32 = 6000;

/// Shown when a status toggle never got an upstream reply.
pub const STATUS_CHANGE_FAILED: &str = "Error changing bot status";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn from_success(success: bool) -> Self {
        if success { Self::Success } else { Self::Error }
    }

    /// CSS modifier for the snackbar element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "snackbar--success",
            Self::Error => "snackbar--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub seq: u64,
    pub message: String,
    pub severity: Severity,
}

#[derive(Clone, Debug, Default)]
pub struct NotifyState {
    pub current: Option<Notification>,
    last_seq: u64,
}

impl NotifyState {
    /// Replace the current notification and return its sequence number.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.last_seq += 1;
        self.current = Some(Notification {
            seq: self.last_seq,
            message: notice.message,
            severity: notice.severity,
        });
        self.last_seq
    }

    /// Close the current notification if it is still `seq`.
    pub fn dismiss(&mut self, seq: u64) {
        if self.current.as_ref().is_some_and(|n| n.seq == seq) {
            self.current = None;
        }
    }
}

/// Notice for a status toggle outcome.
pub fn status_change_notice(result: &Result<ActionReply, String>) -> Notice {
    match result {
        Ok(reply) => Notice {
            message: reply.response.clone(),
            severity: Severity::from_success(reply.success),
        },
        Err(_) => Notice {
            message: STATUS_CHANGE_FAILED.to_owned(),
            severity: Severity::Error,
        },
    }
}

/// Notice for an interval edit outcome. Transport failures show the raw error.
pub fn interval_change_notice(result: &Result<ActionReply, String>) -> Notice {
    match result {
        Ok(reply) => Notice {
            message: reply.response.clone(),
            severity: Severity::from_success(reply.success),
        },
        Err(e) => Notice {
            message: e.clone(),
            severity: Severity::Error,
        },
    }
}

/// Only a successful interval edit reloads the listing.
pub fn interval_change_refreshes(result: &Result<ActionReply, String>) -> bool {
    matches!(result, Ok(reply) if reply.success)
}
