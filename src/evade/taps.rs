use crate::config::ConfigError;

/// Result of one tap on the touch variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapOutcome {
    /// Label that was showing when the tap landed
    pub label: String,
    pub exhausted: bool,
}

type ExhaustedCallback = Box<dyn FnMut() + Send + Sync>;

/// Discrete-tap stand-in for the evasive target on coarse-pointer devices.
///
/// Each tap advances through the escalating labels; the tap that lands on
/// the last label exhausts the counter and hides the target.
pub struct TapCounter {
    labels: Vec<String>,
    taps: usize,
    on_exhausted: Option<ExhaustedCallback>,
}

impl TapCounter {
    pub fn new(labels: Vec<String>) -> Result<Self, ConfigError> {
        if labels.is_empty() {
            return Err(ConfigError::EmptyTapLabels);
        }
        Ok(Self {
            labels,
            taps: 0,
            on_exhausted: None,
        })
    }

    /// Runs once, on the tap that exhausts the counter
    pub fn with_exhaustion_callback(mut self, callback: impl FnMut() + Send + Sync + 'static) -> Self {
        self.on_exhausted = Some(Box::new(callback));
        self
    }

    pub fn tap_count(&self) -> usize {
        self.taps
    }

    pub fn current_label(&self) -> &str {
        self.label_at(self.taps)
    }

    pub fn is_exhausted(&self) -> bool {
        self.taps >= self.labels.len()
    }

    /// Last label is showing (next tap gives up)
    pub fn is_final_warning(&self) -> bool {
        self.taps + 1 >= self.labels.len()
    }

    pub fn register_tap(&mut self) -> TapOutcome {
        let label = self.label_at(self.taps).to_string();
        let was_exhausted = self.is_exhausted();
        self.taps += 1;
        let exhausted = self.is_exhausted();

        if exhausted && !was_exhausted {
            log::debug!("tap counter exhausted after {} taps", self.taps);
            if let Some(callback) = self.on_exhausted.as_mut() {
                callback();
            }
        }

        TapOutcome { label, exhausted }
    }

    fn label_at(&self, index: usize) -> &str {
        let last = self.labels.len() - 1;
        &self.labels[index.min(last)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn phrases() -> Vec<String> {
        ["No", "You dare?", "Reconsider", "Futile", "So be it..."]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_labels_follow_taps() {
        let mut counter = TapCounter::new(phrases()).unwrap();

        let outcomes: Vec<_> = (0..5).map(|_| counter.register_tap()).collect();

        let labels: Vec<_> = outcomes.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, phrases());

        let exhausted: Vec<_> = outcomes.iter().map(|o| o.exhausted).collect();
        assert_eq!(exhausted, vec![false, false, false, false, true]);
    }

    #[test]
    fn test_label_index_clamps_after_exhaustion() {
        let mut counter = TapCounter::new(phrases()).unwrap();
        for _ in 0..5 {
            counter.register_tap();
        }

        let extra = counter.register_tap();
        assert_eq!(extra.label, "So be it...");
        assert!(extra.exhausted);
        assert_eq!(counter.current_label(), "So be it...");
        assert_eq!(counter.tap_count(), 6);
    }

    #[test]
    fn test_current_label_and_final_warning() {
        let mut counter = TapCounter::new(phrases()).unwrap();
        assert_eq!(counter.current_label(), "No");
        assert!(!counter.is_final_warning());

        for _ in 0..4 {
            counter.register_tap();
        }

        assert_eq!(counter.current_label(), "So be it...");
        assert!(counter.is_final_warning());
        assert!(!counter.is_exhausted());
    }

    #[test]
    fn test_exhaustion_callback_fires_once() {
        let fired = Arc::new(AtomicUsize::new(0));
        let hits = Arc::clone(&fired);
        let mut counter = TapCounter::new(phrases())
            .unwrap()
            .with_exhaustion_callback(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            });

        for _ in 0..8 {
            counter.register_tap();
        }

        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_single_label_exhausts_on_first_tap() {
        let mut counter = TapCounter::new(vec!["No".to_string()]).unwrap();

        let outcome = counter.register_tap();
        assert_eq!(outcome.label, "No");
        assert!(outcome.exhausted);
    }

    #[test]
    fn test_empty_labels_rejected() {
        assert!(matches!(TapCounter::new(Vec::new()), Err(ConfigError::EmptyTapLabels)));
    }
}
