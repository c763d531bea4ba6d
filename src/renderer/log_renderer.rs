//! Renderer that writes the tank to the log instead of a window

use std::path::Path;

use super::{FishView, Renderer};
use crate::sim::FishEvent;

/// Headless renderer: turns at info level, positions at trace level
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
    turns: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn turns(&self) -> u64 {
        self.turns
    }
}

impl Renderer for LogRenderer {
    fn set_background(&mut self, path: &Path) {
        log::info!("Background: {}", path.display());
    }

    fn on_event(&mut self, event: &FishEvent) {
        match event {
            FishEvent::Turned {
                id,
                turn,
                region,
                clicked,
            } => {
                self.turns += 1;
                log::info!(
                    "Fish {} turned {} -> {} at {}{}",
                    id,
                    turn.from,
                    turn.to,
                    region,
                    if *clicked { " (clicked)" } else { "" }
                );
            }
            FishEvent::SpriteChanged { id, sprite } => {
                log::info!("Fish {} is now {}", id, sprite);
            }
        }
    }

    fn draw(&mut self, tick: u64, fish: &[FishView]) {
        self.frames += 1;
        for view in fish {
            log::trace!(
                "[{}] fish {} at ({:.0}, {:.0}) heading {} using {}",
                tick,
                view.id,
                view.position.x,
                view.position.y,
                view.direction,
                view.sprite.display()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Direction, DirectionSet, Region, Turn, XRegion, YRegion};

    #[test]
    fn test_counts_frames_and_turns() {
        let mut renderer = LogRenderer::new();
        renderer.draw(1, &[]);
        renderer.draw(2, &[]);
        renderer.on_event(&FishEvent::Turned {
            id: 1,
            turn: Turn {
                from: Direction::East,
                to: Direction::South,
                excluded: DirectionSet::of(&[Direction::East, Direction::North]),
            },
            region: Region::new(XRegion::Right, YRegion::Top),
            clicked: false,
        });
        renderer.on_event(&FishEvent::SpriteChanged {
            id: 1,
            sprite: "red".to_string(),
        });
        assert_eq!(renderer.frames(), 2);
        assert_eq!(renderer.turns(), 1);
    }
}
