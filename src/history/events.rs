//! History notifications and listener registration.

use super::entry::EntrySummary;

/// Full view of the history at the moment a notification fired.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistorySnapshot {
    /// Every log entry in order, including the redo-future
    pub entries: Vec<EntrySummary>,
    /// Number of entries applied to the rendered surface
    pub current_step: usize,
    /// Segments recorded by a gesture that has not been committed yet
    pub pending_segments: usize,
}

impl HistorySnapshot {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.current_step > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current_step < self.entries.len()
    }
}

/// Notification emitted by a canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryEvent {
    /// A new entry was committed to the log
    Changed(HistorySnapshot),
    /// The replay position moved (undo, redo, or a clamped redraw)
    Step(HistorySnapshot),
}

impl HistoryEvent {
    pub fn snapshot(&self) -> &HistorySnapshot {
        match self {
            HistoryEvent::Changed(snapshot) | HistoryEvent::Step(snapshot) => snapshot,
        }
    }
}

/// Handle returned by [`Listeners::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&HistoryEvent)>;

/// Registered history listeners, called synchronously in registration order.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    listeners: Vec<(ListenerId, Listener)>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&HistoryEvent) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn emit(&mut self, event: &HistoryEvent) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.listeners.len())
            .finish()
    }
}
