//! Tank state: world size, the fish in it, and the seed that drives them

use glam::Vec2;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::agent::Agent;
use super::direction::DirectionPolicy;
use super::sprite::{pose_file, sprite_path};
use crate::settings::Settings;

/// Stream bit that separates a fish's pose draws from its heading draws
const POSE_STREAM: u64 = 1 << 32;

/// RNG parameters for one fish (same seed, separate stream per fish)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub stream: u64,
}

impl RngState {
    pub fn new(seed: u64, stream: u64) -> Self {
        Self { seed, stream }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::new(self.seed, self.stream)
    }
}

/// A fish entity: the moving agent plus what it looks like
#[derive(Debug, Clone)]
pub struct Fish {
    pub id: u32,
    /// Sprite set name (folder under `assets/fish/`)
    pub sprite: String,
    /// Current pose image inside the sprite set
    pub pose: String,
    pub agent: Agent,
    /// Pose coin flips; kept apart so sprite changes never shift headings
    pose_rng: Pcg32,
}

impl Fish {
    /// Re-pick the pose image for the current heading and region
    pub fn refresh_pose(&mut self) {
        let direction = self.agent.direction();
        let x_region = self.agent.region().x;
        self.pose = pose_file(direction, x_region, &mut self.pose_rng);
    }

    pub fn sprite_path(&self) -> std::path::PathBuf {
        sprite_path(&self.sprite, &self.pose)
    }
}

/// Complete tank state (deterministic for a given seed)
#[derive(Debug, Clone)]
pub struct AquariumState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Tank size in pixels
    pub world: Vec2,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Fish, sorted by id
    pub fish: Vec<Fish>,
    next_id: u32,
}

impl AquariumState {
    /// Empty tank
    pub fn new(seed: u64, world: Vec2) -> Self {
        Self {
            seed,
            world,
            time_ticks: 0,
            fish: Vec::new(),
            next_id: 1,
        }
    }

    /// Tank stocked according to `settings`
    pub fn from_settings(settings: &Settings, seed: u64) -> Self {
        let mut state = Self::new(seed, settings.world());
        for _ in 0..settings.fish_count {
            state.spawn_fish(&settings.sprite_name, settings.footprint(), settings.velocity);
        }
        log::info!(
            "Tank {}x{} stocked with {} fish (seed {})",
            state.world.x,
            state.world.y,
            state.fish.len(),
            seed
        );
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a fish at a random position heading east or west; returns its id
    pub fn spawn_fish(&mut self, sprite: &str, footprint: Vec2, velocity: f32) -> u32 {
        let id = self.next_entity_id();
        let policy = DirectionPolicy::new(RngState::new(self.seed, id as u64).to_rng());
        let agent = Agent::spawn(self.world, footprint, velocity, policy);
        self.insert(id, sprite, agent);
        id
    }

    /// Add an already-built agent; returns its id
    pub fn add_fish(&mut self, sprite: &str, agent: Agent) -> u32 {
        let id = self.next_entity_id();
        self.insert(id, sprite, agent);
        id
    }

    fn insert(&mut self, id: u32, sprite: &str, agent: Agent) {
        let mut fish = Fish {
            id,
            sprite: sprite.to_string(),
            pose: String::new(),
            agent,
            pose_rng: RngState::new(self.seed, id as u64 | POSE_STREAM).to_rng(),
        };
        fish.refresh_pose();
        log::debug!(
            "Fish {} spawned at {:?} heading {}",
            id,
            fish.agent.position(),
            fish.agent.direction()
        );
        self.fish.push(fish);
    }

    pub fn fish(&self, id: u32) -> Option<&Fish> {
        self.fish.iter().find(|f| f.id == id)
    }

    pub fn fish_mut(&mut self, id: u32) -> Option<&mut Fish> {
        self.fish.iter_mut().find(|f| f.id == id)
    }

    /// Topmost fish under `point` (later fish are drawn over earlier ones)
    pub fn fish_at(&self, point: Vec2) -> Option<u32> {
        self.fish
            .iter()
            .rev()
            .find(|f| f.agent.contains_point(point))
            .map(|f| f.id)
    }

    /// New sprite dimensions for one fish; false if no such fish
    pub fn resize_fish(&mut self, id: u32, footprint: Vec2) -> bool {
        match self.fish_mut(id) {
            Some(fish) => {
                fish.agent.set_footprint(footprint);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Direction;

    #[test]
    fn test_from_settings_spawns_fish() {
        let settings = Settings {
            fish_count: 3,
            ..Default::default()
        };
        let state = AquariumState::from_settings(&settings, 12345);
        assert_eq!(state.fish.len(), 3);
        let ids: Vec<u32> = state.fish.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        for fish in &state.fish {
            assert_eq!(fish.sprite, "blue");
            assert!(fish.agent.direction().is_horizontal());
            assert!(fish.agent.bounds().contains(fish.agent.position()));
            assert_eq!(fish.pose, format!("{}.png", fish.agent.direction()));
        }
    }

    #[test]
    fn test_fish_streams_differ() {
        let mut state = AquariumState::new(7, Vec2::new(800.0, 600.0));
        let mut positions = Vec::new();
        for _ in 0..5 {
            let id = state.spawn_fish("blue", Vec2::new(100.0, 60.0), 5.0);
            positions.push(state.fish(id).unwrap().agent.position());
        }
        positions.dedup();
        assert!(positions.len() > 1);
    }

    #[test]
    fn test_fish_at_prefers_topmost() {
        let mut state = AquariumState::new(1, Vec2::new(800.0, 600.0));
        let footprint = Vec2::new(100.0, 60.0);
        let a = Agent::new(
            state.world,
            footprint,
            Vec2::new(100.0, 100.0),
            Direction::East,
            5.0,
            DirectionPolicy::seeded(1),
        );
        let b = Agent::new(
            state.world,
            footprint,
            Vec2::new(150.0, 120.0),
            Direction::West,
            5.0,
            DirectionPolicy::seeded(2),
        );
        let first = state.add_fish("blue", a);
        let second = state.add_fish("red", b);
        assert_eq!(state.fish_at(Vec2::new(160.0, 130.0)), Some(second));
        assert_eq!(state.fish_at(Vec2::new(110.0, 105.0)), Some(first));
        assert_eq!(state.fish_at(Vec2::new(700.0, 500.0)), None);
    }

    #[test]
    fn test_resize_fish() {
        let mut state = AquariumState::new(1, Vec2::new(800.0, 600.0));
        let id = state.spawn_fish("blue", Vec2::new(100.0, 60.0), 5.0);
        assert!(state.resize_fish(id, Vec2::new(50.0, 50.0)));
        assert_eq!(state.fish(id).unwrap().agent.bounds().x_max, 750.0);
        assert!(!state.resize_fish(99, Vec2::ONE));
    }

    #[test]
    fn test_pose_draws_leave_headings_alone() {
        // Vertical fish in the CENTER third, so every pose pick flips a coin
        let build = || {
            let mut state = AquariumState::new(9, Vec2::new(300.0, 300.0));
            let agent = Agent::new(
                state.world,
                Vec2::ZERO,
                Vec2::new(150.0, 150.0),
                Direction::North,
                7.0,
                DirectionPolicy::seeded(9),
            );
            let id = state.add_fish("blue", agent);
            (state, id)
        };
        let (mut plain, id) = build();
        let (mut repainted, _) = build();
        for _ in 0..25 {
            repainted.fish_mut(id).unwrap().refresh_pose();
        }
        for _ in 0..500 {
            let a = plain.fish_mut(id).unwrap().agent.step();
            let b = repainted.fish_mut(id).unwrap().agent.step();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_rng_state_streams() {
        use rand::RngCore;
        let draw = |rng: &mut Pcg32| (0..4).map(|_| rng.next_u32()).collect::<Vec<_>>();
        let a = draw(&mut RngState::new(5, 1).to_rng());
        let b = draw(&mut RngState::new(5, 1).to_rng());
        let c = draw(&mut RngState::new(5, 2).to_rng());
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
