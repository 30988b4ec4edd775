//! Trailing-edge debounce for the search box.
//!
//! Every keystroke is pushed into a [`Debouncer`] and gets a [`Ticket`]. The
//! caller sleeps for the debounce delay and then calls [`Debouncer::settle`]
//! with that ticket; only the most recent ticket yields the value. A burst of
//! typing therefore commits once, [`SEARCH_DEBOUNCE`] after the last key.

use std::time::Duration;

/// Settle time between the last keystroke and the filter update.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

/// Identifies one pushed value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new value, superseding any value still waiting to settle.
    pub fn push(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Take the pending value if `ticket` is still the latest one.
    pub fn settle(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replay keystrokes at the given millisecond offsets. Each keystroke
    /// wakes up `delay` later and tries to settle. Returns (time, value) of
    /// every commit.
    fn replay(keys: &[(u64, &str)], delay: Duration) -> Vec<(u64, String)> {
        let delay = delay.as_millis() as u64;
        let mut debouncer = Debouncer::new();
        let mut wakeups: Vec<(u64, Ticket)> = Vec::new();
        let mut commits = Vec::new();

        let mut events: Vec<(u64, Option<&str>)> = keys.iter().map(|(t, v)| (*t, Some(*v))).collect();
        for (t, _) in keys {
            events.push((t + delay, None));
        }
        // Keystrokes before wakeups at the same instant.
        events.sort_by_key(|(t, v)| (*t, v.is_none()));

        let mut key_index = 0;
        for (t, value) in events {
            match value {
                Some(v) => {
                    wakeups.push((t + delay, debouncer.push(v.to_string())));
                    key_index += 1;
                }
                None => {
                    let pos = wakeups.iter().position(|(at, _)| *at == t);
                    if let Some(pos) = pos {
                        let (_, ticket) = wakeups.remove(pos);
                        if let Some(v) = debouncer.settle(ticket) {
                            commits.push((t, v));
                        }
                    }
                }
            }
        }
        assert_eq!(key_index, keys.len());
        commits
    }

    #[test]
    fn test_latest_ticket_wins() {
        let mut d = Debouncer::new();
        let first = d.push("a");
        let second = d.push("ab");
        assert_eq!(d.settle(first), None);
        assert!(d.is_pending());
        assert_eq!(d.settle(second), Some("ab"));
        assert!(!d.is_pending());
        // Settling twice yields nothing.
        assert_eq!(d.settle(second), None);
    }

    #[test]
    fn test_continuous_typing_commits_once() {
        let keys = [(0, "j"), (120, "jo"), (250, "jos"), (390, "jose")];
        let commits = replay(&keys, SEARCH_DEBOUNCE);
        assert_eq!(commits, vec![(790, "jose".to_string())]);
    }

    #[test]
    fn test_commits_at_least_debounce_apart() {
        let keys = [
            (0, "m"),
            (100, "ma"),
            (600, "mar"),
            (700, "mari"),
            (1500, "maria"),
        ];
        let commits = replay(&keys, SEARCH_DEBOUNCE);
        assert_eq!(
            commits,
            vec![
                (500, "ma".to_string()),
                (1100, "mari".to_string()),
                (1900, "maria".to_string()),
            ]
        );
        for pair in commits.windows(2) {
            assert!(pair[1].0 - pair[0].0 >= SEARCH_DEBOUNCE.as_millis() as u64);
        }
    }

    #[test]
    fn test_debounce_constant() {
        assert_eq!(SEARCH_DEBOUNCE, Duration::from_millis(400));
    }
}
