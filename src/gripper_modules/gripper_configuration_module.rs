use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::gripper_modules::gripper::{Gripper, GripperType};
use crate::gripper_modules::gripper_finger_module::FingerAssignment;
use crate::robot_modules::robot_model_module::RobotDescription;
use crate::simulator_modules::simulator::Simulator;
use crate::utils::utils_console::optima_print_warning;
use crate::utils::utils_errors::OptimaError;
use crate::utils::utils_files::{load_object_from_json_string, FileUtils};
use crate::utils::utils_traits::{SaveAndLoadable, ToAndFromRonString};

/// Everything needed to spawn a gripper into a simulator.  Can be saved and loaded as JSON or RON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GripperConfiguration {
    gripper_type: GripperType,
    robot_description: RobotDescription,
    position: [f64; 3],
    orientation: [f64; 4],
    fixed_base: bool,
    scale: f64,
    finger_assignment: FingerAssignment
}
impl GripperConfiguration {
    /// Position (0, 0, 1), identity orientation, free base, unit scale, and no fingers.
    pub fn new(gripper_type: GripperType, robot_description: RobotDescription) -> Self {
        Self {
            gripper_type,
            robot_description,
            position: [0., 0., 1.],
            orientation: [0., 0., 0., 1.],
            fixed_base: false,
            scale: 1.0,
            finger_assignment: FingerAssignment::None
        }
    }
    /// Loads a configuration from a `.json` or `.ron` file.
    pub fn load_from_file(path: &Path) -> Result<Self, OptimaError> {
        let extension = FileUtils::get_file_extension_string(path);
        return match extension.as_deref() {
            Some("json") => { Self::load_from_path(path) }
            Some("ron") => {
                let s = FileUtils::read_file_contents_to_string(path)?;
                Self::load_from_ron_string(&s)
            }
            _ => {
                Err(OptimaError::new_unsupported_operation_error("load_from_file", &format!("Unsupported configuration file extension {:?}.", extension), file!(), line!()))
            }
        }
    }
    pub fn spawn_gripper<S: Simulator + ?Sized>(&self, simulator: &mut S) -> Result<Gripper, OptimaError> {
        let mut gripper = Gripper::new(self.gripper_type, simulator, &self.robot_description, self.position, self.orientation, self.fixed_base, self.scale)?;
        if let Err(e) = gripper.assign_fingers(&self.finger_assignment) {
            if let Err(remove_error) = simulator.remove_body(gripper.robot().simulator_body_idx()) {
                optima_print_warning(&format!("Could not remove gripper body after failed finger assignment: {}", remove_error));
            }
            return Err(e);
        }
        Ok(gripper)
    }
    pub fn gripper_type(&self) -> GripperType {
        self.gripper_type
    }
    pub fn robot_description(&self) -> &RobotDescription {
        &self.robot_description
    }
    pub fn position(&self) -> [f64; 3] {
        self.position
    }
    pub fn orientation(&self) -> [f64; 4] {
        self.orientation
    }
    pub fn fixed_base(&self) -> bool {
        self.fixed_base
    }
    pub fn scale(&self) -> f64 {
        self.scale
    }
    pub fn finger_assignment(&self) -> &FingerAssignment {
        &self.finger_assignment
    }
    pub fn set_position(&mut self, position: [f64; 3]) {
        self.position = position;
    }
    pub fn set_orientation(&mut self, orientation: [f64; 4]) {
        self.orientation = orientation;
    }
    pub fn set_fixed_base(&mut self, fixed_base: bool) {
        self.fixed_base = fixed_base;
    }
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }
    pub fn set_finger_assignment(&mut self, finger_assignment: FingerAssignment) {
        self.finger_assignment = finger_assignment;
    }
}
impl SaveAndLoadable for GripperConfiguration {
    type SaveType = Self;

    fn get_save_serialization_object(&self) -> Self::SaveType {
        self.clone()
    }

    fn load_from_json_string(json_str: &str) -> Result<Self, OptimaError> where Self: Sized {
        load_object_from_json_string(json_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gripper_modules::gripper::GripperElementIdx;
    use crate::robot_modules::robot::RobotBasePose;
    use crate::robot_modules::robot_model_module::RobotModelModule;
    use crate::simulator_modules::kinematic_simulator::KinematicSimulator;
    use crate::simulator_modules::simulator::{SimulatorBodyIdx, SimulatorCapabilities};

    /// Registers bodies but refuses to remove them.
    struct StickySimulator {
        num_bodies: usize
    }
    impl Simulator for StickySimulator {
        fn simulator_name(&self) -> &str { "sticky" }
        fn capabilities(&self) -> SimulatorCapabilities { SimulatorCapabilities::default() }
        fn load_robot(&mut self, _robot_model_module: &RobotModelModule, _base_pose: &RobotBasePose, _fixed_base: bool, _scale: f64) -> Result<SimulatorBodyIdx, OptimaError> {
            self.num_bodies += 1;
            Ok(SimulatorBodyIdx(self.num_bodies - 1))
        }
        fn remove_body(&mut self, _body_idx: SimulatorBodyIdx) -> Result<(), OptimaError> {
            Err(OptimaError::new_unsupported_operation_error("remove_body", "Bodies cannot be removed.", file!(), line!()))
        }
        fn num_bodies(&self) -> usize { self.num_bodies }
    }

    const URDF: &str = r#"
        <robot name="pincer">
            <link name="palm"/>
            <link name="left"/>
            <link name="right"/>
            <joint name="left_joint" type="revolute">
                <parent link="palm"/>
                <child link="left"/>
                <limit lower="0.0" upper="0.8" effort="1.0" velocity="1.0"/>
            </joint>
            <joint name="right_joint" type="revolute">
                <parent link="palm"/>
                <child link="right"/>
                <limit lower="0.0" upper="0.8" effort="1.0" velocity="1.0"/>
            </joint>
        </robot>
    "#;

    #[test]
    fn defaults_match_the_documented_pose() {
        let c = GripperConfiguration::new(GripperType::Parallel, RobotDescription::UrdfString(URDF.to_string()));
        assert_eq!(c.position(), [0., 0., 1.]);
        assert_eq!(c.orientation(), [0., 0., 0., 1.]);
        assert!(!c.fixed_base());
        assert_eq!(c.scale(), 1.0);
        assert_eq!(c.finger_assignment(), &FingerAssignment::None);
    }

    #[test]
    fn spawn_applies_finger_assignment() {
        let mut c = GripperConfiguration::new(GripperType::Angular, RobotDescription::UrdfString(URDF.to_string()));
        c.set_fixed_base(true);
        c.set_finger_assignment(FingerAssignment::Inferred { palm_link: None });

        let mut sim = KinematicSimulator::new();
        let g = c.spawn_gripper(&mut sim).unwrap();
        assert_eq!(g.num_fingers(), 2);
        assert_eq!(g.finger(1).unwrap(), &vec![GripperElementIdx::Joint(1)]);
        assert!(g.robot().fixed_base());
    }

    #[test]
    fn json_and_ron_strings_reload_the_same_configuration() {
        let mut c = GripperConfiguration::new(GripperType::Vacuum, RobotDescription::UrdfString(URDF.to_string()));
        c.set_scale(2.0);

        let json = c.get_serialization_string().unwrap();
        assert_eq!(GripperConfiguration::load_from_json_string(&json).unwrap(), c);

        let ron_string = c.convert_to_ron_string().unwrap();
        assert_eq!(GripperConfiguration::load_from_ron_string(&ron_string).unwrap(), c);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let res = GripperConfiguration::load_from_file(Path::new("gripper.yaml"));
        assert!(matches!(res, Err(OptimaError::UnsupportedOperationError(_))));
    }

    #[test]
    fn failed_removal_keeps_the_finger_assignment_error() {
        let mut c = GripperConfiguration::new(GripperType::Parallel, RobotDescription::UrdfString(URDF.to_string()));
        c.set_finger_assignment(FingerAssignment::Explicit { fingers: vec![vec![GripperElementIdx::Joint(99)]] });

        let mut sim = StickySimulator { num_bodies: 0 };
        let res = c.spawn_gripper(&mut sim);
        assert!(matches!(res, Err(OptimaError::IdxOutOfBoundError(_))));
        assert_eq!(sim.num_bodies(), 1);
    }
}
