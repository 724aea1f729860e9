use serde::{Serialize, Deserialize};
use crate::utils::utils_console::{optima_print, optima_print_new_line, PrintColor, PrintMode};
use crate::utils::utils_robot::urdf_joint::{JointTypeWrapper, URDFJoint};

/// A Joint holds the information about a robot joint (specified by a robot URDF file) along with
/// its position in the flat joint table of a `RobotModelModule`.  The preceding and child link
/// indices are resolved by the model module after all links are known.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Joint {
    name: String,
    joint_idx: usize,
    preceding_link_idx: Option<usize>,
    child_link_idx: Option<usize>,
    urdf_joint: URDFJoint
}
impl Joint {
    /// Returns a joint corresponding to the given URDFJoint.  This will be automatically called
    /// by the RobotModelModule.
    pub fn new(urdf_joint: URDFJoint, joint_idx: usize) -> Self {
        Self {
            name: urdf_joint.name().to_string(),
            joint_idx,
            preceding_link_idx: None,
            child_link_idx: None,
            urdf_joint
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn joint_idx(&self) -> usize {
        self.joint_idx
    }
    pub fn preceding_link_idx(&self) -> Option<usize> {
        self.preceding_link_idx
    }
    pub fn child_link_idx(&self) -> Option<usize> {
        self.child_link_idx
    }
    pub fn joint_type(&self) -> &JointTypeWrapper {
        self.urdf_joint.joint_type()
    }
    pub fn is_movable(&self) -> bool {
        self.joint_type().is_movable()
    }
    pub fn urdf_joint(&self) -> &URDFJoint {
        &self.urdf_joint
    }
    pub fn set_preceding_link_idx(&mut self, preceding_link_idx: Option<usize>) {
        self.preceding_link_idx = preceding_link_idx;
    }
    pub fn set_child_link_idx(&mut self, child_link_idx: Option<usize>) {
        self.child_link_idx = child_link_idx;
    }
    pub fn print_summary(&self) {
        optima_print(&format!(">> Joint index: "), PrintMode::Print, PrintColor::Blue, true);
        optima_print(&format!(" {} ", self.joint_idx), PrintMode::Print, PrintColor::None, false);
        optima_print(&format!("  Joint name: "), PrintMode::Print, PrintColor::Blue, true);
        optima_print(&format!(" {} ", self.name), PrintMode::Print, PrintColor::None, false);
        optima_print(&format!("  Type: "), PrintMode::Print, PrintColor::Blue, true);
        let c = if self.is_movable() { PrintColor::Green } else { PrintColor::Red };
        optima_print(&format!(" {:?} ", self.joint_type()), PrintMode::Print, c, false);
        let axis = self.urdf_joint.axis();
        optima_print(&format!("  Axis: "), PrintMode::Print, PrintColor::Blue, true);
        optima_print(&format!(" [{}, {}, {}] ", axis[0], axis[1], axis[2]), PrintMode::Print, PrintColor::None, false);
        if self.is_movable() {
            optima_print(&format!("  Limits: "), PrintMode::Print, PrintColor::Blue, true);
            optima_print(&format!(" [{}, {}] ", self.urdf_joint.limits_lower(), self.urdf_joint.limits_upper()), PrintMode::Print, PrintColor::None, false);
        }
        let xyz = self.urdf_joint.origin_xyz();
        let rpy = self.urdf_joint.origin_rpy();
        optima_print(&format!("  Origin: "), PrintMode::Print, PrintColor::Blue, true);
        optima_print(&format!(" xyz [{}, {}, {}] rpy [{}, {}, {}] ", xyz[0], xyz[1], xyz[2], rpy[0], rpy[1], rpy[2]), PrintMode::Print, PrintColor::None, false);
        if let Some(m) = self.urdf_joint.mimic_joint() {
            optima_print(&format!("  Mimics: "), PrintMode::Print, PrintColor::Cyan, false);
            optima_print(&format!(" {} ", m), PrintMode::Print, PrintColor::None, false);
        }
        optima_print_new_line();
    }
}
