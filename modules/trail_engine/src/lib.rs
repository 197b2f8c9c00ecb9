pub mod color;
pub mod config;
pub mod direction;
pub mod geometry;
pub mod grid;
pub mod session;
pub mod trail;

pub use color::hsv_to_rgb;
pub use config::GameConfig;
pub use direction::Direction;
pub use geometry::star_polygon;
pub use grid::Grid;
pub use session::{GamePhase, GameSession};
pub use trail::Trail;
