use super::record::Entry;
use crate::GameId;
use crate::UserId;
use std::collections::HashMap;

/// Sink for hand history. Implementations live at the host's storage
/// boundary, so failures are opaque `anyhow` errors.
pub trait Recorder {
    fn append(&mut self, entry: &Entry) -> anyhow::Result<()>;
}

/// In-memory history. Rejects entries whose order does not increase within
/// their game.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    entries: Vec<Entry>,
    latest: HashMap<GameId, u64>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn game(&self, game: GameId) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(move |e| e.game == game)
    }
    /// what `viewer` may see of `game`
    pub fn visible_to(&self, game: GameId, viewer: UserId, running: bool) -> Vec<&Entry> {
        self.game(game)
            .filter(|e| e.is_visible_to(viewer, running))
            .collect()
    }
}

impl Recorder for Transcript {
    fn append(&mut self, entry: &Entry) -> anyhow::Result<()> {
        if let Some(last) = self.latest.get(&entry.game) {
            anyhow::ensure!(
                entry.order > *last,
                "game {} entry {} does not follow {}",
                entry.game,
                entry.order,
                last
            );
        }
        log::trace!("game {} {}", entry.game, entry);
        self.latest.insert(entry.game, entry.order);
        self.entries.push(entry.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Record;

    fn entry(game: GameId, order: u64) -> Entry {
        Entry {
            game,
            order,
            owner: None,
            record: Record::Timeout,
        }
    }

    #[test]
    fn orders_must_increase_per_game() {
        let mut transcript = Transcript::new();
        transcript.append(&entry(1, 0)).unwrap();
        transcript.append(&entry(1, 1)).unwrap();
        transcript.append(&entry(2, 0)).unwrap();
        assert!(transcript.append(&entry(1, 1)).is_err());
        assert!(transcript.append(&entry(2, 0)).is_err());
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.game(1).count(), 2);
    }
}
