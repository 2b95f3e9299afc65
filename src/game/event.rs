//! Event System
//!
//! The collision resolver reports what happened during a frame as events
//! instead of reaching into score or health itself. The session applies
//! them, and anything audible comes back out as fire-and-forget audio cues
//! drained by the app.
//!
//! Example flow:
//! 1. Resolver detects player/coin overlap -> emits GameEvent::CoinCollected
//! 2. Session reads it -> bumps coins_collected and score
//! 3. Session queues AudioCue::Coin -> app plays the sound

/// Order-preserving batch of notifications produced during one tick.
/// The session pushes as the tick runs; the app takes the whole batch
/// at the frame boundary with `drain`.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Queue one event for the next drain.
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Take every queued event, oldest first, leaving the queue empty
    /// and ready for the next tick.
    pub fn drain(&mut self) -> impl Iterator<Item = T> {
        std::mem::take(&mut self.events).into_iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

// =============================================================================
// Event Types
// =============================================================================

/// What dealt contact damage to the player. Knockback differs per source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSource {
    Enemy,
    Hazard,
}

/// Everything the collision resolver can report for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// The player touched a live coin; carries the entity index so the
    /// session can log or inspect it. The resolver already marked it dead.
    CoinCollected { entity: usize },
    /// The player touched something harmful while vulnerable
    Damage { source: DamageSource },
    /// The player reached the goal with every coin collected
    LevelComplete,
}

/// Fire-and-forget sound identifiers. Queued by the session, drained and
/// played by the app; playback never blocks or errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Jump,
    Coin,
    Hurt,
    Win,
    Lose,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cues_drain_in_send_order() {
        let mut queue: EventQueue<AudioCue> = EventQueue::new();

        queue.send(AudioCue::Jump);
        queue.send(AudioCue::Coin);
        queue.send(AudioCue::Hurt);
        assert_eq!(queue.len(), 3);

        let played: Vec<_> = queue.drain().collect();
        assert_eq!(played, vec![AudioCue::Jump, AudioCue::Coin, AudioCue::Hurt]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drained_queue_accepts_more_cues() {
        let mut queue = EventQueue::new();
        queue.send(AudioCue::Win);
        queue.drain().for_each(drop);

        queue.send(AudioCue::Lose);
        let rest: Vec<_> = queue.drain().collect();
        assert_eq!(rest, vec![AudioCue::Lose]);
    }
}
