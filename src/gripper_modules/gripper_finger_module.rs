use serde::{Serialize, Deserialize};
use crate::gripper_modules::gripper::{Finger, GripperElementIdx};
use crate::robot_modules::robot_model_module::RobotModelModule;
use crate::utils::utils_errors::OptimaError;
use crate::utils::utils_files::load_object_from_json_string;
use crate::utils::utils_traits::SaveAndLoadable;

/// How the fingers of a gripper are populated once its robot model is loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FingerAssignment {
    None,
    Explicit { fingers: Vec<Finger> },
    ByName(GripperFingerSpecification),
    Inferred { palm_link: Option<String> }
}
impl FingerAssignment {
    pub fn resolve(&self, robot_model_module: &RobotModelModule) -> Result<Vec<Finger>, OptimaError> {
        return match self {
            FingerAssignment::None => { Ok(vec![]) }
            FingerAssignment::Explicit { fingers } => { Ok(fingers.clone()) }
            FingerAssignment::ByName(spec) => { spec.resolve(robot_model_module) }
            FingerAssignment::Inferred { palm_link } => {
                let palm_link_idx = match palm_link {
                    None => { None }
                    Some(name) => {
                        let idx = robot_model_module.get_link_idx_from_name(name)
                            .ok_or_else(|| OptimaError::new_generic_error_str(&format!("Palm link {:?} is not a link of robot {:?}.", name, robot_model_module.robot_name()), file!(), line!()))?;
                        Some(idx)
                    }
                };
                GripperFingerInference::infer_fingers(robot_model_module, palm_link_idx)
            }
        }
    }
}

/// Fingers given by link or joint names.  A name is looked up among the joints first, then among
/// the links.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GripperFingerSpecification {
    fingers: Vec<Vec<String>>
}
impl GripperFingerSpecification {
    pub fn new(fingers: Vec<Vec<String>>) -> Self {
        Self { fingers }
    }
    pub fn new_from_strs(fingers: &[&[&str]]) -> Self {
        Self {
            fingers: fingers.iter().map(|f| f.iter().map(|s| s.to_string()).collect()).collect()
        }
    }
    pub fn fingers(&self) -> &Vec<Vec<String>> {
        &self.fingers
    }
    pub fn resolve(&self, robot_model_module: &RobotModelModule) -> Result<Vec<Finger>, OptimaError> {
        let mut out = vec![];
        for finger_names in &self.fingers {
            let mut finger = vec![];
            for name in finger_names {
                let element = if let Some(joint_idx) = robot_model_module.get_joint_idx_from_name(name) {
                    GripperElementIdx::Joint(joint_idx)
                } else if let Some(link_idx) = robot_model_module.get_link_idx_from_name(name) {
                    GripperElementIdx::Link(link_idx)
                } else {
                    return Err(OptimaError::new_generic_error_str(&format!("{:?} is neither a joint nor a link of robot {:?}.", name, robot_model_module.robot_name()), file!(), line!()));
                };
                finger.push(element);
            }
            out.push(finger);
        }
        Ok(out)
    }
}
impl SaveAndLoadable for GripperFingerSpecification {
    type SaveType = Vec<Vec<String>>;

    fn get_save_serialization_object(&self) -> Self::SaveType {
        self.fingers.clone()
    }

    fn load_from_json_string(json_str: &str) -> Result<Self, OptimaError> where Self: Sized {
        let load: Self::SaveType = load_object_from_json_string(json_str)?;
        Ok(Self::new(load))
    }
}

/// Infers fingers from the shape of the kinematic tree.
pub struct GripperFingerInference;
impl GripperFingerInference {
    /// Starting at the palm link (the robot base link if `None`), fixed single-child mounts are
    /// skipped until the tree branches or reaches a movable joint.  Every branch leaving that
    /// point becomes one finger made of the movable joints found in it, in depth-first order.
    /// Branches without movable joints are not fingers.
    pub fn infer_fingers(robot_model_module: &RobotModelModule, palm_link_idx: Option<usize>) -> Result<Vec<Finger>, OptimaError> {
        let mut curr_link_idx = palm_link_idx.unwrap_or(robot_model_module.robot_base_link_idx());
        robot_model_module.get_link(curr_link_idx)?;

        loop {
            let link = robot_model_module.get_link(curr_link_idx)?;
            if link.children_joint_idxs().len() != 1 { break; }
            let joint = robot_model_module.get_joint(link.children_joint_idxs()[0])?;
            if joint.is_movable() { break; }
            match joint.child_link_idx() {
                Some(child_link_idx) => { curr_link_idx = child_link_idx; }
                None => { break; }
            }
        }

        let mut out = vec![];
        for joint_idx in robot_model_module.get_link(curr_link_idx)?.children_joint_idxs() {
            let mut finger = vec![];
            Self::collect_movable_joints(robot_model_module, *joint_idx, &mut finger)?;
            if !finger.is_empty() { out.push(finger); }
        }

        Ok(out)
    }
    fn collect_movable_joints(robot_model_module: &RobotModelModule, joint_idx: usize, finger: &mut Finger) -> Result<(), OptimaError> {
        let joint = robot_model_module.get_joint(joint_idx)?;
        if joint.is_movable() { finger.push(GripperElementIdx::Joint(joint_idx)); }
        if let Some(child_link_idx) = joint.child_link_idx() {
            for child_joint_idx in robot_model_module.get_link(child_link_idx)?.children_joint_idxs() {
                Self::collect_movable_joints(robot_model_module, *child_joint_idx, finger)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::utils_traits::ToAndFromRonString;

    // base -(fixed)-> mount -> two fingers of two revolute joints each, plus a fixed camera.
    const HAND_URDF: &str = r#"
        <robot name="hand">
            <link name="base"/>
            <link name="mount"/>
            <link name="a1"/>
            <link name="a2"/>
            <link name="b1"/>
            <link name="b2"/>
            <link name="camera"/>
            <joint name="base_to_mount" type="fixed">
                <parent link="base"/>
                <child link="mount"/>
            </joint>
            <joint name="a_proximal" type="revolute">
                <parent link="mount"/>
                <child link="a1"/>
                <limit lower="0.0" upper="1.5" effort="1.0" velocity="1.0"/>
            </joint>
            <joint name="a_distal" type="revolute">
                <parent link="a1"/>
                <child link="a2"/>
                <limit lower="0.0" upper="1.5" effort="1.0" velocity="1.0"/>
            </joint>
            <joint name="b_proximal" type="revolute">
                <parent link="mount"/>
                <child link="b1"/>
                <limit lower="0.0" upper="1.5" effort="1.0" velocity="1.0"/>
            </joint>
            <joint name="b_distal" type="revolute">
                <parent link="b1"/>
                <child link="b2"/>
                <limit lower="0.0" upper="1.5" effort="1.0" velocity="1.0"/>
            </joint>
            <joint name="mount_to_camera" type="fixed">
                <parent link="mount"/>
                <child link="camera"/>
            </joint>
        </robot>
    "#;

    fn model() -> RobotModelModule {
        RobotModelModule::new_from_urdf_string(HAND_URDF).unwrap()
    }

    #[test]
    fn infers_one_finger_per_movable_branch() {
        let fingers = GripperFingerInference::infer_fingers(&model(), None).unwrap();
        assert_eq!(fingers, vec![
            vec![GripperElementIdx::Joint(1), GripperElementIdx::Joint(2)],
            vec![GripperElementIdx::Joint(3), GripperElementIdx::Joint(4)]
        ]);
    }

    #[test]
    fn inference_from_a_finger_link_follows_that_finger_only() {
        let m = model();
        let a1 = m.get_link_idx_from_name("a1").unwrap();
        let fingers = GripperFingerInference::infer_fingers(&m, Some(a1)).unwrap();
        assert_eq!(fingers, vec![vec![GripperElementIdx::Joint(2)]]);
    }

    #[test]
    fn names_resolve_to_joints_before_links() {
        let spec = GripperFingerSpecification::new_from_strs(&[&["a_proximal", "a2"], &["b_distal"]]);
        let fingers = spec.resolve(&model()).unwrap();
        assert_eq!(fingers, vec![
            vec![GripperElementIdx::Joint(1), GripperElementIdx::Link(3)],
            vec![GripperElementIdx::Joint(4)]
        ]);
    }

    #[test]
    fn unknown_name_is_an_error() {
        let spec = GripperFingerSpecification::new_from_strs(&[&["thumb"]]);
        assert!(matches!(spec.resolve(&model()), Err(OptimaError::GenericError(_))));
    }

    #[test]
    fn unknown_palm_link_is_an_error() {
        let a = FingerAssignment::Inferred { palm_link: Some("wrist".to_string()) };
        assert!(a.resolve(&model()).is_err());
    }

    #[test]
    fn specification_loads_from_json_and_ron() {
        let spec = GripperFingerSpecification::load_from_json_string(r#"[["a_proximal"],["b_proximal"]]"#).unwrap();
        assert_eq!(spec.fingers().len(), 2);

        let assignment = FingerAssignment::ByName(spec);
        let ron_string = assignment.convert_to_ron_string().unwrap();
        let reloaded = FingerAssignment::load_from_ron_string(&ron_string).unwrap();
        assert_eq!(reloaded.resolve(&model()).unwrap(), vec![vec![GripperElementIdx::Joint(1)], vec![GripperElementIdx::Joint(3)]]);
    }
}
