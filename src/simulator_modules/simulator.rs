use serde::{Serialize, Deserialize};
use crate::robot_modules::robot::RobotBasePose;
use crate::robot_modules::robot_model_module::RobotModelModule;
use crate::utils::utils_errors::OptimaError;

/// Identity of a body that has been registered in a simulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SimulatorBodyIdx(pub usize);

/// Features that a simulator may or may not provide.  Entities that rely on a feature check for
/// it when they are created.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorCapabilities {
    /// Soft bodies and their interaction with rigid bodies (required by suction grasping).
    pub supports_soft_bodies: bool
}

/// The interface a robot needs from a physics engine.  Stepping, contacts, and actuation are the
/// simulator's business and are not part of this trait.
pub trait Simulator {
    fn simulator_name(&self) -> &str;
    fn capabilities(&self) -> SimulatorCapabilities;
    /// Registers the given kinematic model as a new body at the given base pose.
    fn load_robot(&mut self, robot_model_module: &RobotModelModule, base_pose: &RobotBasePose, fixed_base: bool, scale: f64) -> Result<SimulatorBodyIdx, OptimaError>;
    fn remove_body(&mut self, body_idx: SimulatorBodyIdx) -> Result<(), OptimaError>;
    fn num_bodies(&self) -> usize;
}
