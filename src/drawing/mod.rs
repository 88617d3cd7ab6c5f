pub mod components;
pub mod pathfinding;
pub mod shapes;
