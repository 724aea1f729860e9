use urdf_rs::{Joint, JointType};
use nalgebra::Vector3;
use serde::{Serialize, Deserialize};

/// This struct holds the information provided by a URDF file on a Joint when parsed by urdf_rs
/// that is relevant for grouping joints into gripper fingers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct URDFJoint {
    name: String,
    joint_type: JointTypeWrapper,
    origin_xyz: Vector3<f64>,
    origin_rpy: Vector3<f64>,
    parent_link: String,
    child_link: String,
    axis: Vector3<f64>,
    limits_lower: f64,
    limits_upper: f64,
    mimic_joint: Option<String>
}
impl URDFJoint {
    pub fn new_from_urdf_joint(joint: &Joint) -> Self {
        Self {
            name: joint.name.clone(),
            joint_type: JointTypeWrapper::from_joint_type(&joint.joint_type),
            origin_xyz: Vector3::new(joint.origin.xyz[0], joint.origin.xyz[1], joint.origin.xyz[2]),
            origin_rpy: Vector3::new(joint.origin.rpy[0], joint.origin.rpy[1], joint.origin.rpy[2]),
            parent_link: joint.parent.link.clone(),
            child_link: joint.child.link.clone(),
            axis: Vector3::new(joint.axis.xyz[0], joint.axis.xyz[1], joint.axis.xyz[2]),
            limits_lower: joint.limit.lower,
            limits_upper: joint.limit.upper,
            mimic_joint: joint.mimic.as_ref().map(|m| m.joint.clone())
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn joint_type(&self) -> &JointTypeWrapper {
        &self.joint_type
    }
    pub fn origin_xyz(&self) -> Vector3<f64> {
        self.origin_xyz
    }
    pub fn origin_rpy(&self) -> Vector3<f64> {
        self.origin_rpy
    }
    pub fn parent_link(&self) -> &str {
        &self.parent_link
    }
    pub fn child_link(&self) -> &str {
        &self.child_link
    }
    pub fn axis(&self) -> Vector3<f64> {
        self.axis
    }
    pub fn limits_lower(&self) -> f64 {
        self.limits_lower
    }
    pub fn limits_upper(&self) -> f64 {
        self.limits_upper
    }
    pub fn mimic_joint(&self) -> &Option<String> {
        &self.mimic_joint
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum JointTypeWrapper {
    Revolute,
    Continuous,
    Prismatic,
    Fixed,
    Floating,
    Planar,
    Spherical
}
impl JointTypeWrapper {
    pub fn from_joint_type(j: &JointType) -> Self {
        match j {
            JointType::Revolute => { Self::Revolute }
            JointType::Continuous => { Self::Continuous }
            JointType::Prismatic => { Self::Prismatic }
            JointType::Fixed => { Self::Fixed }
            JointType::Floating => { Self::Floating }
            JointType::Planar => { Self::Planar }
            JointType::Spherical => { Self::Spherical }
        }
    }
    /// Every joint type other than `Fixed` contributes at least one degree of freedom.
    pub fn is_movable(&self) -> bool {
        *self != JointTypeWrapper::Fixed
    }
}
