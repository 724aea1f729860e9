pub mod simulator;
pub mod kinematic_simulator;
