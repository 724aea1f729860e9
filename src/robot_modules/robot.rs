use nalgebra::{Quaternion, UnitQuaternion, Vector3};
use serde::{Serialize, Deserialize};
use crate::robot_modules::robot_model_module::{RobotDescription, RobotModelModule};
use crate::simulator_modules::simulator::{Simulator, SimulatorBodyIdx};
use crate::utils::utils_console::{optima_print, PrintColor, PrintMode};
use crate::utils::utils_errors::OptimaError;

/// World pose of a robot's base.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RobotBasePose {
    position: Vector3<f64>,
    orientation: UnitQuaternion<f64>
}
impl RobotBasePose {
    /// `orientation` is a quaternion given in [x, y, z, w] order.  It does not need to be unit
    /// length, but it must be non-zero; it is normalized here.
    pub fn new(position: [f64; 3], orientation: [f64; 4]) -> Result<Self, OptimaError> {
        if position.iter().any(|v| !v.is_finite()) {
            return Err(OptimaError::new_generic_error_str(&format!("Robot base position {:?} must be finite.", position), file!(), line!()));
        }
        if orientation.iter().any(|v| !v.is_finite()) {
            return Err(OptimaError::new_generic_error_str(&format!("Robot base orientation {:?} must be finite.", orientation), file!(), line!()));
        }

        let q = Quaternion::new(orientation[3], orientation[0], orientation[1], orientation[2]);
        if q.norm() < 1e-12 {
            return Err(OptimaError::new_generic_error_str(&format!("Robot base orientation {:?} is not a valid quaternion.", orientation), file!(), line!()));
        }

        Ok(Self {
            position: Vector3::new(position[0], position[1], position[2]),
            orientation: UnitQuaternion::from_quaternion(q)
        })
    }
    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }
    pub fn orientation(&self) -> &UnitQuaternion<f64> {
        &self.orientation
    }
}

/// A robot that has been loaded into a simulator.  The robot owns its kinematic description
/// (`RobotModelModule`) and remembers the identity the simulator gave it; it does not keep a
/// reference to the simulator itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Robot {
    robot_model_module: RobotModelModule,
    simulator_body_idx: SimulatorBodyIdx,
    base_pose: RobotBasePose,
    fixed_base: bool,
    scale: f64
}
impl Robot {
    /// Loads the robot description and registers the robot in the given simulator.
    ///
    /// * `position`: Cartesian world position.
    /// * `orientation`: Cartesian world orientation expressed as a quaternion [x, y, z, w].
    /// * `fixed_base`: if true, the robot will be fixed in the world.
    /// * `scale`: scaling factor that is used to scale the robot.
    pub fn new<S: Simulator + ?Sized>(simulator: &mut S,
                                       robot_description: &RobotDescription,
                                       position: [f64; 3],
                                       orientation: [f64; 4],
                                       fixed_base: bool,
                                       scale: f64) -> Result<Self, OptimaError> {
        let base_pose = RobotBasePose::new(position, orientation)?;
        if !scale.is_finite() || scale <= 0.0 {
            return Err(OptimaError::new_generic_error_str(&format!("Robot scale must be finite and positive, got {}.", scale), file!(), line!()));
        }

        let robot_model_module = RobotModelModule::new(robot_description)?;
        let simulator_body_idx = simulator.load_robot(&robot_model_module, &base_pose, fixed_base, scale)?;

        Ok(Self {
            robot_model_module,
            simulator_body_idx,
            base_pose,
            fixed_base,
            scale
        })
    }
    pub fn robot_name(&self) -> &str {
        self.robot_model_module.robot_name()
    }
    pub fn robot_model_module(&self) -> &RobotModelModule {
        &self.robot_model_module
    }
    pub fn simulator_body_idx(&self) -> SimulatorBodyIdx {
        self.simulator_body_idx
    }
    pub fn base_pose(&self) -> &RobotBasePose {
        &self.base_pose
    }
    pub fn fixed_base(&self) -> bool {
        self.fixed_base
    }
    pub fn scale(&self) -> f64 {
        self.scale
    }
    pub fn num_links(&self) -> usize {
        self.robot_model_module.num_links()
    }
    pub fn num_joints(&self) -> usize {
        self.robot_model_module.num_joints()
    }
    pub fn print_summary(&self) {
        self.robot_model_module.print_summary();
        optima_print("Simulator body: ", PrintMode::Print, PrintColor::Blue, true);
        optima_print(&format!("{:?}", self.simulator_body_idx.0), PrintMode::Println, PrintColor::None, false);
        optima_print("Base position: ", PrintMode::Print, PrintColor::Blue, true);
        let p = &self.base_pose.position;
        optima_print(&format!("[{}, {}, {}]", p[0], p[1], p[2]), PrintMode::Println, PrintColor::None, false);
        optima_print("Fixed base: ", PrintMode::Print, PrintColor::Blue, true);
        optima_print(&format!("{}", self.fixed_base), PrintMode::Print, PrintColor::None, false);
        optima_print("  Scale: ", PrintMode::Print, PrintColor::Blue, true);
        optima_print(&format!("{}", self.scale), PrintMode::Println, PrintColor::None, false);
    }
}
