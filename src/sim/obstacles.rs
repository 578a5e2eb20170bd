//! Obstacle spawning, scrolling and retirement
//!
//! The live set is owned by `GameState`; everything here works on a borrowed
//! `ObstacleSet`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Obstacle, ObstacleId, ObstacleKind};
use crate::consts::*;

/// Bounded collection of live obstacles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleSet {
    items: Vec<Obstacle>,
    next_id: ObstacleId,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(MAX_OBSTACLES),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= MAX_OBSTACLES
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Obstacle> {
        self.items.iter_mut()
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.items.iter().find(|o| o.id == id)
    }

    /// Insert a new obstacle, ignoring the cap. Used for pre-seeding and tests.
    pub fn insert(&mut self, kind: ObstacleKind, x: f32, y: Option<f32>) -> ObstacleId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Obstacle::new(id, kind, x, y));
        id
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl Default for ObstacleSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Maybe spawn one obstacle above the viewport.
///
/// Coin flip, and only while below the live cap. The new obstacle gets a
/// random kind and a uniformly random x in `[0, world_width]`.
pub fn spawn(set: &mut ObstacleSet, rng: &mut impl Rng, world_width: f32) -> Option<ObstacleId> {
    if set.is_full() || !rng.random_bool(0.5) {
        return None;
    }

    let x = (rng.random::<f32>() * world_width.max(0.0)).round();
    let kind = ObstacleKind::random(rng);
    let id = set.insert(kind, x, None);
    log::trace!("spawned {:?} #{} at x={}", kind, id, x);
    Some(id)
}

/// Fill the slope before the first tick: `count` obstacles scattered over the
/// upper half of the viewport
pub fn preseed(
    set: &mut ObstacleSet,
    rng: &mut impl Rng,
    count: usize,
    world_width: f32,
    visible_height: f32,
) {
    for _ in 0..count {
        let x = (rng.random::<f32>() * world_width.max(0.0)).round();
        let y = (rng.random::<f32>() * visible_height.max(0.0) / 2.0).round();
        let kind = ObstacleKind::random(rng);
        set.insert(kind, x, Some(y));
    }
    log::debug!("pre-seeded {} obstacles", count);
}

/// Scroll every live obstacle down by `world_speed`
pub fn advance(set: &mut ObstacleSet, world_speed: u8) {
    let dy = f32::from(world_speed);
    for obstacle in set.iter_mut() {
        obstacle.pos.y += dy;
    }
}

/// Drop every obstacle that has scrolled past `visible_height + RETIRE_MARGIN`.
/// Returns the ids removed.
pub fn retire(set: &mut ObstacleSet, visible_height: f32) -> Vec<ObstacleId> {
    let limit = retire_limit(visible_height);

    let retired: Vec<ObstacleId> = set
        .items
        .iter()
        .filter(|o| o.pos.y > limit)
        .map(|o| o.id)
        .collect();

    if !retired.is_empty() {
        set.items.retain(|o| o.pos.y <= limit);
        log::trace!("retired {:?}", retired);
    }

    retired
}

/// Advance all obstacles, then retire those now off-screen
pub fn advance_and_retire(
    set: &mut ObstacleSet,
    world_speed: u8,
    visible_height: f32,
) -> Vec<ObstacleId> {
    advance(set, world_speed);
    retire(set, visible_height)
}

#[inline]
pub fn retire_limit(visible_height: f32) -> f32 {
    visible_height + RETIRE_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{RngCore, SeedableRng};
    use rand_pcg::Pcg32;

    /// RNG that always yields the same bit pattern. All zeros wins every
    /// coin flip; all ones loses every one.
    struct ConstRng(u64);

    impl RngCore for ConstRng {
        fn next_u32(&mut self) -> u32 {
            self.0 as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for (i, byte) in dest.iter_mut().enumerate() {
                *byte = (self.0 >> ((i % 8) * 8)) as u8;
            }
        }
    }

    #[test]
    fn test_spawn_places_above_viewport() {
        let mut set = ObstacleSet::new();
        let mut rng = ConstRng(0);

        let id = spawn(&mut set, &mut rng, 800.0).expect("zero bits always spawn");
        let obstacle = set.get(id).unwrap();
        assert_eq!(obstacle.pos.y, SPAWN_Y);
        assert!((0.0..=800.0).contains(&obstacle.pos.x));
    }

    #[test]
    fn test_spawn_losing_flip_is_noop() {
        let mut set = ObstacleSet::new();
        let mut rng = ConstRng(u64::MAX);

        assert!(spawn(&mut set, &mut rng, 800.0).is_none());
        assert!(set.is_empty());
    }

    #[test]
    fn test_spawn_respects_cap() {
        let mut set = ObstacleSet::new();
        for i in 0..MAX_OBSTACLES {
            set.insert(ObstacleKind::Tree, i as f32, Some(0.0));
        }
        assert!(set.is_full());

        let mut rng = ConstRng(0);
        for _ in 0..100 {
            assert!(spawn(&mut set, &mut rng, 800.0).is_none());
        }
        assert_eq!(set.len(), MAX_OBSTACLES);
    }

    #[test]
    fn test_spawn_rate_is_roughly_half() {
        let mut rng = Pcg32::seed_from_u64(2024);
        let mut set = ObstacleSet::new();
        let mut spawned = 0;
        for _ in 0..1000 {
            if spawn(&mut set, &mut rng, 800.0).is_some() {
                spawned += 1;
            }
            set.clear();
        }
        assert!((400..600).contains(&spawned), "spawned {spawned}");
    }

    #[test]
    fn test_ids_are_unique() {
        let mut set = ObstacleSet::new();
        let a = set.insert(ObstacleKind::Tree, 0.0, None);
        let b = set.insert(ObstacleKind::Rock, 0.0, None);
        set.clear();
        let c = set.insert(ObstacleKind::Rock, 0.0, None);
        assert!(a != b && b != c && a != c);
    }

    #[test]
    fn test_preseed_stays_in_upper_half() {
        let mut set = ObstacleSet::new();
        let mut rng = Pcg32::seed_from_u64(3);
        preseed(&mut set, &mut rng, PRESEEDED_OBSTACLES, 1000.0, 600.0);

        assert_eq!(set.len(), PRESEEDED_OBSTACLES);
        for o in set.iter() {
            assert!((0.0..=1000.0).contains(&o.pos.x));
            assert!((0.0..=300.0).contains(&o.pos.y));
        }
    }

    #[test]
    fn test_default_spawn_scrolls_into_view() {
        let mut set = ObstacleSet::new();
        let id = set.insert(ObstacleKind::Rock, 10.0, None);

        for _ in 0..10 {
            let retired = advance_and_retire(&mut set, 5, 600.0);
            assert!(retired.is_empty());
        }
        assert_eq!(set.get(id).unwrap().pos.y, -50.0);
    }

    #[test]
    fn test_retire_is_strict() {
        let mut set = ObstacleSet::new();
        let at_limit = set.insert(ObstacleKind::Tree, 0.0, Some(800.0));
        let past_limit = set.insert(ObstacleKind::Tree, 0.0, Some(800.5));

        let retired = retire(&mut set, 600.0);
        assert_eq!(retired, vec![past_limit]);
        assert!(set.get(at_limit).is_some());
        assert!(set.get(past_limit).is_none());
    }

    proptest! {
        #[test]
        fn prop_advance_and_retire(
            ys in prop::collection::vec(-200i32..1200, 0..MAX_OBSTACLES),
            speed in 0u8..=10,
            height in 100i32..1000,
        ) {
            let mut set = ObstacleSet::new();
            for &y in &ys {
                set.insert(ObstacleKind::Rock, 0.0, Some(y as f32));
            }
            let before: Vec<_> = set.iter().map(|o| (o.id, o.pos.y)).collect();

            let height = height as f32;
            let retired = advance_and_retire(&mut set, speed, height);
            let limit = height + RETIRE_MARGIN;

            for (id, y) in before {
                let moved = y + f32::from(speed);
                if moved <= limit {
                    let kept = set.get(id);
                    prop_assert!(kept.is_some());
                    prop_assert_eq!(kept.unwrap().pos.y, moved);
                } else {
                    prop_assert!(set.get(id).is_none());
                    prop_assert!(retired.contains(&id));
                }
            }
        }
    }
}
