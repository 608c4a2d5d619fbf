use super::geometry::{PointerSample, ViewportBounds};

/// Update delivered to tracker subscribers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerEvent {
    Pointer(PointerSample),
    Viewport(ViewportBounds),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&TrackerEvent) + Send + Sync>;

/// Latest pointer position and viewport size, with change notification.
///
/// Subscribers are called synchronously, in subscription order, on every
/// publish. Only the latest sample is kept.
#[derive(Default)]
pub struct PointerTracker {
    pointer: PointerSample,
    viewport: ViewportBounds,
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
}

impl PointerTracker {
    pub fn new(viewport: ViewportBounds) -> Self {
        Self {
            viewport,
            ..Default::default()
        }
    }

    pub fn pointer(&self) -> PointerSample {
        self.pointer
    }

    pub fn viewport(&self) -> ViewportBounds {
        self.viewport
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&TrackerEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        log::debug!("tracker subscription {:?} added", id);
        id
    }

    /// Returns false for ids that are unknown or already removed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        let removed = self.subscribers.len() != before;
        if removed {
            log::debug!("tracker subscription {:?} removed", id);
        }
        removed
    }

    pub fn publish_pointer(&mut self, sample: PointerSample) {
        self.pointer = sample;
        self.notify(TrackerEvent::Pointer(sample));
    }

    pub fn publish_viewport(&mut self, bounds: ViewportBounds) {
        if bounds == self.viewport {
            return;
        }
        self.viewport = bounds;
        log::debug!("viewport now {}x{}", bounds.width, bounds.height);
        self.notify(TrackerEvent::Viewport(bounds));
    }

    fn notify(&mut self, event: TrackerEvent) {
        for (_, callback) in &mut self.subscribers {
            callback(&event);
        }
    }
}
