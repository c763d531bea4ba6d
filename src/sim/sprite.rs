//! Which sprite image matches a fish's heading
//!
//! Horizontal headings have one image each (`east.png`). Vertical headings
//! come in a left- and right-facing pose; the pose follows the side of the
//! tank the fish is on, and is a coin flip in the center third.

use std::path::PathBuf;

use rand::Rng;

use super::direction::Direction;
use super::region::XRegion;

/// Subdirectory of the asset root holding one folder per fish sprite set
pub const FISH_DIR: &str = "fish";

/// Image file name (inside a sprite set) for a heading
pub fn pose_file<R: Rng>(direction: Direction, x_region: XRegion, rng: &mut R) -> String {
    if direction.is_horizontal() {
        return format!("{direction}.png");
    }
    let side = match x_region {
        XRegion::Left => "left",
        XRegion::Right => "right",
        XRegion::Center => {
            if rng.random_bool(0.5) {
                "left"
            } else {
                "right"
            }
        }
    };
    format!("{direction}-{side}.png")
}

/// Path to `file` in sprite set `sprite_name`, under the asset root
pub fn sprite_path(sprite_name: &str, file: &str) -> PathBuf {
    crate::asset_path(FISH_DIR).join(sprite_name).join(file)
}
