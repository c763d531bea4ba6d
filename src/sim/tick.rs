//! Fixed-interval simulation tick
//!
//! Advances every fish one step and reports what the renderer needs to
//! react to (heading changes, sprite swaps).

use glam::Vec2;

use super::agent::Turn;
use super::region::Region;
use super::state::AquariumState;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Left click in tank coordinates; the topmost fish under it turns
    pub click: Option<Vec2>,
    /// New sprite set for every fish (menu selection)
    pub sprite: Option<String>,
}

/// Something the renderer has to redraw differently
#[derive(Debug, Clone, PartialEq)]
pub enum FishEvent {
    /// Heading changed, from a wall hit or a click
    Turned {
        id: u32,
        turn: Turn,
        region: Region,
        clicked: bool,
    },
    /// Sprite set changed; the image size may differ
    SpriteChanged { id: u32, sprite: String },
}

/// Advance the tank by one tick
pub fn tick(state: &mut AquariumState, input: &TickInput) -> Vec<FishEvent> {
    let mut events = Vec::new();

    if let Some(sprite) = &input.sprite {
        for fish in &mut state.fish {
            if fish.sprite != *sprite {
                fish.sprite = sprite.clone();
                fish.refresh_pose();
                events.push(FishEvent::SpriteChanged {
                    id: fish.id,
                    sprite: sprite.clone(),
                });
            }
        }
    }

    if let Some(point) = input.click {
        if let Some(id) = state.fish_at(point) {
            if let Some(fish) = state.fish_mut(id) {
                let turn = fish.agent.request_redirect();
                fish.refresh_pose();
                log::info!("Fish {} clicked, turning {} -> {}", id, turn.from, turn.to);
                events.push(FishEvent::Turned {
                    id,
                    turn,
                    region: fish.agent.region(),
                    clicked: true,
                });
            }
        }
    }

    state.time_ticks += 1;

    for fish in &mut state.fish {
        let report = fish.agent.step();
        if let Some(turn) = report.turn {
            fish.refresh_pose();
            events.push(FishEvent::Turned {
                id: fish.id,
                turn,
                region: report.region,
                clicked: false,
            });
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Agent, Direction, DirectionPolicy};

    fn tank_with(pos: Vec2, direction: Direction) -> (AquariumState, u32) {
        let mut state = AquariumState::new(1, Vec2::new(300.0, 300.0));
        let agent = Agent::new(
            state.world,
            Vec2::new(20.0, 20.0),
            pos,
            direction,
            5.0,
            DirectionPolicy::seeded(3),
        );
        let id = state.add_fish("blue", agent);
        (state, id)
    }

    #[test]
    fn test_tick_moves_fish() {
        let (mut state, id) = tank_with(Vec2::new(100.0, 100.0), Direction::South);
        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.fish(id).unwrap().agent.position(), Vec2::new(100.0, 105.0));
    }

    #[test]
    fn test_wall_hit_emits_turn() {
        let (mut state, id) = tank_with(Vec2::new(280.0, 140.0), Direction::East);
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events.len(), 1);
        match &events[0] {
            FishEvent::Turned { id: turned, turn, clicked, .. } => {
                assert_eq!(*turned, id);
                assert_eq!(turn.from, Direction::East);
                assert!(!clicked);
            }
            other => panic!("unexpected event {other:?}"),
        }
        let fish = state.fish(id).unwrap();
        assert!(fish.pose.starts_with(fish.agent.direction().as_str()));
    }

    #[test]
    fn test_click_redirects_hit_fish_only() {
        let (mut state, id) = tank_with(Vec2::new(100.0, 100.0), Direction::East);
        let miss = TickInput {
            click: Some(Vec2::new(5.0, 5.0)),
            ..Default::default()
        };
        assert!(tick(&mut state, &miss).is_empty());

        let hit = TickInput {
            click: Some(Vec2::new(110.0, 110.0)),
            ..Default::default()
        };
        let events = tick(&mut state, &hit);
        assert!(matches!(
            events.as_slice(),
            [FishEvent::Turned { clicked: true, .. }]
        ));
        let fish = state.fish(id).unwrap();
        assert_ne!(fish.agent.direction(), Direction::East);
        assert_eq!(fish.agent.previous_direction(), Some(Direction::East));
    }

    #[test]
    fn test_click_then_step_in_same_tick() {
        let (mut state, id) = tank_with(Vec2::new(100.0, 100.0), Direction::West);
        let hit = TickInput {
            click: Some(Vec2::new(100.0, 100.0)),
            ..Default::default()
        };
        let events = tick(&mut state, &hit);
        assert_eq!(state.time_ticks, 1);
        let fish = state.fish(id).unwrap();
        let heading = fish.agent.direction();
        assert_ne!(heading, Direction::West);
        assert!(matches!(
            events.as_slice(),
            [FishEvent::Turned { clicked: true, turn, .. }] if turn.to == heading
        ));
        // The new heading is applied on the same tick
        assert_eq!(
            fish.agent.position(),
            Vec2::new(100.0, 100.0) + heading.offset() * 5.0
        );
    }

    #[test]
    fn test_sprite_change_event() {
        let (mut state, id) = tank_with(Vec2::new(100.0, 100.0), Direction::West);
        let input = TickInput {
            sprite: Some("red".to_string()),
            ..Default::default()
        };
        let events = tick(&mut state, &input);
        assert_eq!(
            events,
            vec![FishEvent::SpriteChanged {
                id,
                sprite: "red".to_string()
            }]
        );
        // Same sprite again is a no-op
        assert!(tick(&mut state, &input).is_empty());
        assert!(state.fish(id).unwrap().sprite_path().ends_with("red/west.png"));
    }

    #[test]
    fn test_sprite_change_keeps_motion() {
        let (mut plain, id) = tank_with(Vec2::new(140.0, 140.0), Direction::North);
        let (mut swapped, _) = tank_with(Vec2::new(140.0, 140.0), Direction::North);
        let swap = TickInput {
            sprite: Some("red".to_string()),
            ..Default::default()
        };
        tick(&mut plain, &TickInput::default());
        tick(&mut swapped, &swap);
        for _ in 0..400 {
            tick(&mut plain, &TickInput::default());
            tick(&mut swapped, &TickInput::default());
            let a = &plain.fish(id).unwrap().agent;
            let b = &swapped.fish(id).unwrap().agent;
            assert_eq!(a.position(), b.position());
            assert_eq!(a.direction(), b.direction());
        }
    }

    #[test]
    fn test_determinism() {
        let settings = Settings {
            fish_count: 2,
            ..Default::default()
        };
        let mut a = AquariumState::from_settings(&settings, 99999);
        let mut b = AquariumState::from_settings(&settings, 99999);
        for _ in 0..1000 {
            assert_eq!(
                tick(&mut a, &TickInput::default()),
                tick(&mut b, &TickInput::default())
            );
        }
        for (fa, fb) in a.fish.iter().zip(&b.fish) {
            assert_eq!(fa.agent.position(), fb.agent.position());
            assert_eq!(fa.pose, fb.pose);
        }
    }
}
