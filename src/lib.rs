//! Fleet Tactics - decision engine for a turn-based 3D fleet battle

pub mod battle;
pub mod core;
pub mod protocol;
pub mod session;
pub mod spatial;
