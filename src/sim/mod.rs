//! Sphere physics simulation
//!
//! Single-threaded and cooperatively scheduled: the host animation loop
//! drives `tick` once per frame, and editing calls (`resize`, `move_to`,
//! spawning) happen between ticks. Constraint violations never raise
//! errors; everything clamps or no-ops so live dragging cannot abort.

pub mod body;
pub mod bounds;
pub mod collision;
pub mod scene;
pub mod tick;

pub use body::Body;
pub use bounds::SceneBounds;
pub use collision::{Contact, resolve_sphere_collision, sphere_contact};
pub use scene::Scene;
pub use tick::tick;
