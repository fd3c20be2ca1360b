// src/state/toast_state.rs
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Oldest entries are dropped once the stack is full.
const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastKind {
    Info,
    Destructive,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
    expires_at: Instant,
}

/// Transient notification stack. Entries expire after a fixed TTL and are
/// pruned on each poll; nothing here blocks or interrupts the flow.
#[derive(Debug)]
pub struct Toasts {
    queue: VecDeque<Toast>,
    ttl: Duration,
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            ttl,
        }
    }

    pub fn notify(
        &mut self,
        now: Instant,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: ToastKind,
    ) {
        self.queue.push_back(Toast {
            title: title.into(),
            description: description.into(),
            kind,
            expires_at: now + self.ttl,
        });
        while self.queue.len() > MAX_TOASTS {
            self.queue.pop_front();
        }
    }

    pub fn prune(&mut self, now: Instant) {
        self.queue.retain(|toast| toast.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn next_expiry(&self) -> Option<Instant> {
        self.queue.iter().map(|toast| toast.expires_at).min()
    }
}
