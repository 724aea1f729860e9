use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;
use serde::{Serialize, Deserialize};
use strum_macros::EnumIter;
use crate::gripper_modules::gripper_finger_module::FingerAssignment;
use crate::robot_modules::robot::Robot;
use crate::robot_modules::robot_model_module::RobotDescription;
use crate::simulator_modules::simulator::Simulator;
use crate::utils::utils_console::{optima_print, optima_print_new_line, optima_print_warning, PrintColor, PrintMode};
use crate::utils::utils_errors::OptimaError;

/// The way a gripper actuates when grasping.  Grasp planners and controllers dispatch on this
/// instead of inspecting the gripper's geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum GripperType {
    /// When the fingers are closing toward each other, they remain parallel.  Most of the time,
    /// these grippers have 2 fingers.  Also known as the slider type.
    Parallel,
    /// When the fingers are closing toward each other, each finger rotates around an axis.  They
    /// can have 2, 3, or even 4 fingers.  Also known as the lever type.
    Angular,
    /// No fingers; objects are grasped with suction.  Requires a simulator that can simulate soft
    /// bodies and their interaction with rigid bodies.
    Vacuum
}
impl GripperType {
    pub fn typical_num_fingers(&self) -> RangeInclusive<usize> {
        match self {
            GripperType::Parallel => { 2..=2 }
            GripperType::Angular => { 2..=4 }
            GripperType::Vacuum => { 0..=0 }
        }
    }
    /// Fails if the simulator cannot host a gripper of this type.
    pub fn check_simulator_capabilities<S: Simulator + ?Sized>(&self, simulator: &S) -> Result<(), OptimaError> {
        match self {
            GripperType::Vacuum => {
                if !simulator.capabilities().supports_soft_bodies {
                    return Err(OptimaError::new_simulator_capability_error(simulator.simulator_name(), "soft bodies", file!(), line!()));
                }
                Ok(())
            }
            _ => { Ok(()) }
        }
    }
}

/// Reference into the flat link or joint table of the gripper's `RobotModelModule`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GripperElementIdx {
    Link(usize),
    Joint(usize)
}
impl Display for GripperElementIdx {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GripperElementIdx::Link(i) => { write!(f, "link {}", i) }
            GripperElementIdx::Joint(i) => { write!(f, "joint {}", i) }
        }
    }
}

/// An ordered group of links and/or joints that acts as one grasping digit.
pub type Finger = Vec<GripperElementIdx>;

/// Result of `Gripper::get_finger`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FingerQuery<'a> {
    Single(&'a Finger),
    All(&'a [Finger])
}
impl<'a> FingerQuery<'a> {
    pub fn single(&self) -> Option<&'a Finger> {
        match self {
            FingerQuery::Single(f) => { Some(*f) }
            FingerQuery::All(_) => { None }
        }
    }
    pub fn all(&self) -> Option<&'a [Finger]> {
        match self {
            FingerQuery::Single(_) => { None }
            FingerQuery::All(f) => { Some(*f) }
        }
    }
}

/// A gripper end-effector: a `Robot` whose links and joints are grouped into independently
/// addressable fingers.
///
/// Fingers start out empty and are written afterwards by a population step
/// (`set_fingers`, `add_finger`, or `assign_fingers`).  Each finger only stores indices into the
/// robot's link and joint tables, and every stored index is checked against those tables.
///
/// ## Example
/// ```
/// use optima_gripper::gripper_modules::gripper::{Gripper, GripperElementIdx};
/// use optima_gripper::robot_modules::robot_model_module::RobotDescription;
/// use optima_gripper::simulator_modules::kinematic_simulator::KinematicSimulator;
///
/// let urdf = r#"<robot name="palm"><link name="base"/></robot>"#;
/// let mut simulator = KinematicSimulator::new();
/// let gripper = Gripper::new_parallel(&mut simulator, &RobotDescription::UrdfString(urdf.to_string()), [0.,0.,1.], [0.,0.,0.,1.], false, 1.0).unwrap();
/// assert_eq!(gripper.num_fingers(), 0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Gripper {
    robot: Robot,
    gripper_type: GripperType,
    fingers: Vec<Finger>
}
impl Gripper {
    /// Initializes the gripper.  Loading and registration are handled by `Robot::new`, and any
    /// error it returns is passed through as is.
    pub fn new<S: Simulator + ?Sized>(gripper_type: GripperType,
                                       simulator: &mut S,
                                       robot_description: &RobotDescription,
                                       position: [f64; 3],
                                       orientation: [f64; 4],
                                       fixed_base: bool,
                                       scale: f64) -> Result<Self, OptimaError> {
        gripper_type.check_simulator_capabilities(simulator)?;
        let robot = Robot::new(simulator, robot_description, position, orientation, fixed_base, scale)?;

        Ok(Self {
            robot,
            gripper_type,
            fingers: vec![]
        })
    }
    pub fn new_parallel<S: Simulator + ?Sized>(simulator: &mut S, robot_description: &RobotDescription, position: [f64; 3], orientation: [f64; 4], fixed_base: bool, scale: f64) -> Result<Self, OptimaError> {
        Self::new(GripperType::Parallel, simulator, robot_description, position, orientation, fixed_base, scale)
    }
    pub fn new_angular<S: Simulator + ?Sized>(simulator: &mut S, robot_description: &RobotDescription, position: [f64; 3], orientation: [f64; 4], fixed_base: bool, scale: f64) -> Result<Self, OptimaError> {
        Self::new(GripperType::Angular, simulator, robot_description, position, orientation, fixed_base, scale)
    }
    pub fn new_vacuum<S: Simulator + ?Sized>(simulator: &mut S, robot_description: &RobotDescription, position: [f64; 3], orientation: [f64; 4], fixed_base: bool, scale: f64) -> Result<Self, OptimaError> {
        Self::new(GripperType::Vacuum, simulator, robot_description, position, orientation, fixed_base, scale)
    }
    pub fn robot(&self) -> &Robot {
        &self.robot
    }
    pub fn gripper_type(&self) -> GripperType {
        self.gripper_type
    }
    /// Returns the number of fingers on the gripper.
    pub fn num_fingers(&self) -> usize {
        self.fingers.len()
    }
    /// With `None`, returns every finger.  With `Some(finger_idx)`, returns the links/joints of that
    /// finger, or an `IdxOutOfBoundError` if there is no such finger.
    pub fn get_finger(&self, finger_idx: Option<usize>) -> Result<FingerQuery<'_>, OptimaError> {
        return match finger_idx {
            None => { Ok(FingerQuery::All(&self.fingers)) }
            Some(finger_idx) => { Ok(FingerQuery::Single(self.finger(finger_idx)?)) }
        }
    }
    pub fn finger(&self, finger_idx: usize) -> Result<&Finger, OptimaError> {
        self.fingers.get(finger_idx).ok_or_else(|| OptimaError::new_idx_out_of_bound_error(finger_idx, self.fingers.len(), file!(), line!()))
    }
    pub fn fingers(&self) -> &Vec<Finger> {
        &self.fingers
    }
    /// Replaces all fingers.  If any finger is invalid, the current fingers are left untouched.
    pub fn set_fingers(&mut self, fingers: Vec<Finger>) -> Result<(), OptimaError> {
        for finger in &fingers {
            self.check_finger(finger)?;
        }
        self.fingers = fingers;
        self.warn_if_num_fingers_is_atypical();
        Ok(())
    }
    /// Appends a finger and returns its index.
    pub fn add_finger(&mut self, finger: Finger) -> Result<usize, OptimaError> {
        self.check_finger(&finger)?;
        self.fingers.push(finger);
        Ok(self.fingers.len() - 1)
    }
    pub fn clear_fingers(&mut self) {
        self.fingers.clear();
    }
    /// Resolves the given assignment against this gripper's kinematic model and sets the result
    /// as the gripper's fingers.
    pub fn assign_fingers(&mut self, finger_assignment: &FingerAssignment) -> Result<(), OptimaError> {
        let fingers = finger_assignment.resolve(self.robot.robot_model_module())?;
        self.set_fingers(fingers)
    }
    fn check_finger(&self, finger: &Finger) -> Result<(), OptimaError> {
        if finger.is_empty() {
            return Err(OptimaError::new_generic_error_str("A finger must contain at least one link or joint.", file!(), line!()));
        }
        let robot_model_module = self.robot.robot_model_module();
        for element in finger {
            match element {
                GripperElementIdx::Link(link_idx) => { robot_model_module.get_link(*link_idx)?; }
                GripperElementIdx::Joint(joint_idx) => { robot_model_module.get_joint(*joint_idx)?; }
            }
        }
        Ok(())
    }
    fn warn_if_num_fingers_is_atypical(&self) {
        let typical = self.gripper_type.typical_num_fingers();
        if !typical.contains(&self.fingers.len()) {
            optima_print_warning(&format!("{:?} gripper {:?} has {} fingers (typically {} to {}).", self.gripper_type, self.robot.robot_name(), self.fingers.len(), typical.start(), typical.end()));
        }
    }
    pub fn print_summary(&self) {
        optima_print("Gripper type: ", PrintMode::Print, PrintColor::Blue, true);
        optima_print(&format!("{:?}", self.gripper_type), PrintMode::Println, PrintColor::Magenta, false);
        self.robot.print_summary();
        optima_print("Num fingers: ", PrintMode::Print, PrintColor::Blue, true);
        optima_print(&format!("{}", self.num_fingers()), PrintMode::Println, PrintColor::None, false);
        for (i, finger) in self.fingers.iter().enumerate() {
            optima_print(&format!("      -- Finger {}: ", i), PrintMode::Print, PrintColor::Cyan, false);
            let elements: Vec<String> = finger.iter().map(|e| e.to_string()).collect();
            optima_print(&elements.join(", "), PrintMode::Print, PrintColor::None, false);
            optima_print_new_line();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator_modules::kinematic_simulator::KinematicSimulator;
    use crate::utils::utils_enums::EnumUtils;

    const URDF: &str = r#"
        <robot name="two_finger">
            <link name="palm"/>
            <link name="left"/>
            <link name="right"/>
            <joint name="left_joint" type="prismatic">
                <parent link="palm"/>
                <child link="left"/>
                <limit lower="0.0" upper="0.04" effort="10.0" velocity="0.1"/>
            </joint>
            <joint name="right_joint" type="prismatic">
                <parent link="palm"/>
                <child link="right"/>
                <limit lower="0.0" upper="0.04" effort="10.0" velocity="0.1"/>
            </joint>
        </robot>
    "#;

    fn description() -> RobotDescription {
        RobotDescription::UrdfString(URDF.to_string())
    }

    fn parallel_gripper() -> Gripper {
        let mut sim = KinematicSimulator::new();
        Gripper::new_parallel(&mut sim, &description(), [0., 0., 1.], [0., 0., 0., 1.], false, 1.0).unwrap()
    }

    #[test]
    fn starts_without_fingers() {
        let g = parallel_gripper();
        assert_eq!(g.num_fingers(), 0);
        assert_eq!(g.get_finger(None).unwrap().all().unwrap().len(), 0);
    }

    #[test]
    fn finger_zero_is_not_the_full_list() {
        let mut g = parallel_gripper();
        g.set_fingers(vec![vec![GripperElementIdx::Joint(0)], vec![GripperElementIdx::Joint(1)]]).unwrap();
        let q = g.get_finger(Some(0)).unwrap();
        assert_eq!(q, FingerQuery::Single(&vec![GripperElementIdx::Joint(0)]));
        assert!(q.all().is_none());
    }

    #[test]
    fn invalid_finger_leaves_fingers_untouched() {
        let mut g = parallel_gripper();
        g.set_fingers(vec![vec![GripperElementIdx::Link(1)], vec![GripperElementIdx::Link(2)]]).unwrap();
        let res = g.set_fingers(vec![vec![GripperElementIdx::Joint(0)], vec![GripperElementIdx::Joint(7)]]);
        assert!(matches!(res, Err(OptimaError::IdxOutOfBoundError(_))));
        assert_eq!(g.finger(1).unwrap(), &vec![GripperElementIdx::Link(2)]);
    }

    #[test]
    fn empty_finger_is_rejected() {
        let mut g = parallel_gripper();
        assert!(g.add_finger(vec![]).is_err());
        assert_eq!(g.num_fingers(), 0);
    }

    #[test]
    fn add_finger_returns_new_index() {
        let mut g = parallel_gripper();
        assert_eq!(g.add_finger(vec![GripperElementIdx::Joint(0)]).unwrap(), 0);
        assert_eq!(g.add_finger(vec![GripperElementIdx::Joint(1), GripperElementIdx::Link(2)]).unwrap(), 1);
        g.clear_fingers();
        assert_eq!(g.num_fingers(), 0);
    }

    #[test]
    fn vacuum_gripper_requires_soft_bodies() {
        let mut rigid = KinematicSimulator::new();
        let res = Gripper::new_vacuum(&mut rigid, &description(), [0., 0., 1.], [0., 0., 0., 1.], false, 1.0);
        assert!(matches!(res, Err(OptimaError::SimulatorCapabilityError(_))));
        assert_eq!(rigid.num_bodies(), 0);

        let mut soft = KinematicSimulator::new_with_soft_bodies();
        let g = Gripper::new_vacuum(&mut soft, &description(), [0., 0., 1.], [0., 0., 0., 1.], false, 1.0).unwrap();
        assert_eq!(g.gripper_type(), GripperType::Vacuum);
        assert_eq!(g.num_fingers(), 0);
    }

    #[test]
    fn robot_errors_pass_through() {
        let mut sim = KinematicSimulator::new();
        let res = Gripper::new_angular(&mut sim, &description(), [0., 0., 1.], [0., 0., 0., 0.], false, 1.0);
        assert!(matches!(res, Err(OptimaError::GenericError(_))));
    }

    #[test]
    fn typical_finger_counts() {
        let all = EnumUtils::get_all_variants_of_enum::<GripperType>();
        assert_eq!(all, vec![GripperType::Parallel, GripperType::Angular, GripperType::Vacuum]);
        assert!(GripperType::Angular.typical_num_fingers().contains(&3));
        assert!(!GripperType::Vacuum.typical_num_fingers().contains(&1));
    }
}
