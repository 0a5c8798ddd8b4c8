pub mod contains;
pub mod intersections;
pub mod project;

pub use contains::{contains_coordinate, PROXIMITY_ACCEPT};
pub use intersections::{find_intersections, ROAD_LAYER};
pub use project::{project_rings, tile_to_geographic, zoom_scale, ProjectedFeature};
