use std::collections::BTreeMap;
use crate::robot_modules::robot::RobotBasePose;
use crate::robot_modules::robot_model_module::RobotModelModule;
use crate::simulator_modules::simulator::{Simulator, SimulatorBodyIdx, SimulatorCapabilities};
use crate::utils::utils_errors::OptimaError;

/// Record of a body registered in a `KinematicSimulator`.
#[derive(Clone, Debug)]
pub struct KinematicSimulatorBody {
    pub robot_name: String,
    pub base_pose: RobotBasePose,
    pub fixed_base: bool,
    pub scale: f64
}

/// An in-memory simulator that only keeps track of the bodies registered in it.  It never steps
/// physics; it is meant for kinematic applications and tests.
#[derive(Clone, Debug)]
pub struct KinematicSimulator {
    capabilities: SimulatorCapabilities,
    bodies: BTreeMap<SimulatorBodyIdx, KinematicSimulatorBody>,
    next_body_idx: usize
}
impl KinematicSimulator {
    /// Rigid bodies only.
    pub fn new() -> Self {
        Self::new_with_capabilities(SimulatorCapabilities::default())
    }
    pub fn new_with_soft_bodies() -> Self {
        Self::new_with_capabilities(SimulatorCapabilities { supports_soft_bodies: true })
    }
    pub fn new_with_capabilities(capabilities: SimulatorCapabilities) -> Self {
        Self {
            capabilities,
            bodies: BTreeMap::new(),
            next_body_idx: 0
        }
    }
    pub fn get_body(&self, body_idx: SimulatorBodyIdx) -> Option<&KinematicSimulatorBody> {
        self.bodies.get(&body_idx)
    }
}
impl Default for KinematicSimulator {
    fn default() -> Self {
        Self::new()
    }
}
impl Simulator for KinematicSimulator {
    fn simulator_name(&self) -> &str {
        "kinematic"
    }
    fn capabilities(&self) -> SimulatorCapabilities {
        self.capabilities.clone()
    }
    fn load_robot(&mut self, robot_model_module: &RobotModelModule, base_pose: &RobotBasePose, fixed_base: bool, scale: f64) -> Result<SimulatorBodyIdx, OptimaError> {
        // indices are never reused, even after a body is removed.
        let body_idx = SimulatorBodyIdx(self.next_body_idx);
        self.next_body_idx += 1;

        self.bodies.insert(body_idx, KinematicSimulatorBody {
            robot_name: robot_model_module.robot_name().to_string(),
            base_pose: base_pose.clone(),
            fixed_base,
            scale
        });

        Ok(body_idx)
    }
    fn remove_body(&mut self, body_idx: SimulatorBodyIdx) -> Result<(), OptimaError> {
        return match self.bodies.remove(&body_idx) {
            Some(_) => { Ok(()) }
            None => { Err(OptimaError::new_idx_out_of_bound_error(body_idx.0, self.next_body_idx, file!(), line!())) }
        }
    }
    fn num_bodies(&self) -> usize {
        self.bodies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URDF: &str = r#"<robot name="block"><link name="base"/></robot>"#;

    #[test]
    fn body_indices_are_not_reused() {
        let mut sim = KinematicSimulator::new();
        let m = RobotModelModule::new_from_urdf_string(URDF).unwrap();
        let pose = RobotBasePose::new([0.,0.,0.], [0.,0.,0.,1.]).unwrap();

        let a = sim.load_robot(&m, &pose, true, 1.0).unwrap();
        sim.remove_body(a).unwrap();
        let b = sim.load_robot(&m, &pose, true, 1.0).unwrap();

        assert_ne!(a, b);
        assert_eq!(sim.num_bodies(), 1);
        assert_eq!(sim.get_body(b).unwrap().robot_name, "block");
    }

    #[test]
    fn removing_unknown_body_fails() {
        let mut sim = KinematicSimulator::new();
        assert!(matches!(sim.remove_body(SimulatorBodyIdx(3)), Err(OptimaError::IdxOutOfBoundError(_))));
    }

    #[test]
    fn capabilities_follow_constructor() {
        assert!(!KinematicSimulator::new().capabilities().supports_soft_bodies);
        assert!(KinematicSimulator::new_with_soft_bodies().capabilities().supports_soft_bodies);
    }
}
