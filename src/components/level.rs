//! Static level data: tile layers and collision geometry.
//!
//! The engine never parses a tilemap editor's format. A host-side loader
//! digests whatever source format it uses (LDtk, Tiled, custom) into this
//! component's plain records before the frame loop starts; the data is
//! read-only from then on. Physics consumes `collision_rects`, the render
//! system draws `layers` back to front.

use serde::{Deserialize, Serialize};

use crate::ecs::store::Component;
use crate::error::EngineError;
use crate::math::Rect;

/// One tile placement: where it lands in the world and where its pixels
/// come from in the layer's tileset texture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileDraw {
    /// World-space top-left of the tile.
    pub x: f32,
    pub y: f32,
    /// Source rectangle in the tileset texture, in texels.
    pub src: Rect,
}

/// A layer of tiles sharing one tileset texture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileLayer {
    pub name: String,
    /// Asset-store key of the tileset texture.
    pub tileset: String,
    /// Edge length of a tile in world units.
    pub tile_size: f32,
    pub tiles: Vec<TileDraw>,
}

/// Immutable level component. Loaded once before gameplay, never mutated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Level {
    /// Draw order is front of the vec first.
    pub layers: Vec<TileLayer>,
    /// Static axis-aligned collision rectangles in world units.
    pub collision_rects: Vec<Rect>,
}

impl Level {
    /// Deserialize a digested level description. Load failures propagate to
    /// the caller; the engine never retries.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        serde_json::from_str(json).map_err(|err| EngineError::LoadFailed {
            what: "level data".to_string(),
            reason: err.to_string(),
        })
    }
}

impl Component for Level {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_json_round_trip() {
        let level = Level {
            layers: vec![TileLayer {
                name: "ground".to_string(),
                tileset: "tiles".to_string(),
                tile_size: 16.0,
                tiles: vec![TileDraw {
                    x: 0.0,
                    y: 48.0,
                    src: Rect::new(16.0, 0.0, 16.0, 16.0),
                }],
            }],
            collision_rects: vec![Rect::new(0.0, 50.0, 100.0, 10.0)],
        };
        let json = serde_json::to_string(&level).unwrap();
        let parsed = Level::from_json(&json).unwrap();
        assert_eq!(parsed, level);
    }

    #[test]
    fn test_level_from_bad_json_is_a_load_failure() {
        let err = Level::from_json("{ not json").unwrap_err();
        assert!(matches!(err, EngineError::LoadFailed { .. }));
    }
}
