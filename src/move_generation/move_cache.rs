//! Bounded legal-move cache keyed by position key.
//!
//! Entries are evicted oldest-first once the table grows past its capacity.
//! Nothing is ever invalidated explicitly: mutating a board changes its key,
//! so stale entries simply stop being looked up.

use std::collections::{HashMap, VecDeque};

use log::debug;

use crate::moves::draughts_move::Move;
use crate::utils::position_key::PositionKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveCacheStats {
    pub probes: u64,
    pub hits: u64,
    pub stores: u64,
    pub evictions: u64,
}

#[derive(Debug, Clone)]
pub struct MoveCache {
    capacity: usize,
    entries: HashMap<PositionKey, Vec<Move>>,
    insertion_order: VecDeque<PositionKey>,
    stats: MoveCacheStats,
}

impl MoveCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            insertion_order: VecDeque::new(),
            stats: MoveCacheStats::default(),
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn stats(&self) -> MoveCacheStats {
        self.stats
    }

    #[inline]
    pub fn contains(&self, key: &PositionKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn probe(&mut self, key: &PositionKey) -> Option<&[Move]> {
        self.stats.probes += 1;
        let hit = self.entries.get(key);
        if hit.is_some() {
            self.stats.hits += 1;
        }
        hit.map(Vec::as_slice)
    }

    /// Remember `moves` for `key`. Re-storing a key keeps its original age.
    pub fn store(&mut self, key: PositionKey, moves: Vec<Move>) {
        self.stats.stores += 1;
        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = moves;
            return;
        }

        self.insertion_order.push_back(key.clone());
        self.entries.insert(key, moves);

        while self.entries.len() > self.capacity {
            let Some(oldest) = self.insertion_order.pop_front() else {
                break;
            };
            self.entries.remove(&oldest);
            self.stats.evictions += 1;
            debug!("move cache evicted {oldest}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::MoveCache;
    use crate::board_state::board_state::BoardState;
    use crate::board_state::board_types::{Direction, Side};
    use crate::moves::draughts_move::Move;

    fn key_with_white_man_on(square: u8) -> crate::utils::position_key::PositionKey {
        let mut board = BoardState::new_empty();
        board.place(square, Side::White, false).expect("on board");
        board.key()
    }

    #[test]
    fn store_and_probe_round_trip() {
        let mut cache = MoveCache::new(4);
        let key = key_with_white_man_on(32);
        let moves = vec![Move::quiet(32, 28, Direction::NorthEast)];
        cache.store(key.clone(), moves.clone());
        assert_eq!(cache.probe(&key), Some(moves.as_slice()));
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.probe(&key_with_white_man_on(33)), None);
        assert_eq!(cache.stats().probes, 2);
    }

    #[test]
    fn oldest_entry_is_evicted_first() {
        let mut cache = MoveCache::new(2);
        let first = key_with_white_man_on(30);
        let second = key_with_white_man_on(31);
        let third = key_with_white_man_on(32);
        cache.store(first.clone(), Vec::new());
        cache.store(second.clone(), Vec::new());
        // Refreshing an entry does not make it younger.
        cache.store(first.clone(), Vec::new());
        cache.store(third.clone(), Vec::new());

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&first));
        assert!(cache.contains(&second));
        assert!(cache.contains(&third));
        assert_eq!(cache.stats().evictions, 1);
    }
}
