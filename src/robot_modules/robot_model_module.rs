use std::collections::HashMap;
use std::path::PathBuf;
use serde::{Serialize, Deserialize};
use crate::utils::utils_console::{optima_print, optima_print_new_line, PrintColor, PrintMode};
use crate::utils::utils_errors::OptimaError;
use crate::utils::utils_robot::joint::Joint;
use crate::utils::utils_robot::link::Link;
use crate::utils::utils_robot::urdf_joint::URDFJoint;

/// Where the kinematic description of a robot comes from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RobotDescription {
    UrdfFile(PathBuf),
    UrdfString(String)
}

/// Flat arena of the links and joints of a robot.  Links and joints are addressed by their index
/// in `links` and `joints`; any structure that needs to refer to a part of the kinematic tree
/// (e.g., a gripper finger) stores these indices rather than copies of the records.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RobotModelModule {
    robot_name: String,
    links: Vec<Link>,
    joints: Vec<Joint>,
    robot_base_link_idx: usize,
    link_name_to_idx_hashmap: HashMap<String, usize>,
    joint_name_to_idx_hashmap: HashMap<String, usize>
}
impl RobotModelModule {
    pub fn new(robot_description: &RobotDescription) -> Result<Self, OptimaError> {
        return match robot_description {
            RobotDescription::UrdfFile(path) => {
                let urdf_robot = urdf_rs::read_file(path)
                    .map_err(|e| OptimaError::new_generic_error_str(&format!("Error when parsing urdf file {:?}: {}", path, e), file!(), line!()))?;
                Self::new_from_urdf_robot(&urdf_robot)
            }
            RobotDescription::UrdfString(s) => {
                Self::new_from_urdf_string(s)
            }
        }
    }
    pub fn new_from_urdf_string(urdf_string: &str) -> Result<Self, OptimaError> {
        let urdf_robot = urdf_rs::read_from_string(urdf_string.trim())
            .map_err(|e| OptimaError::new_generic_error_str(&format!("Error when parsing urdf string: {}", e), file!(), line!()))?;
        Self::new_from_urdf_robot(&urdf_robot)
    }
    pub fn new_from_urdf_robot(urdf_robot: &urdf_rs::Robot) -> Result<Self, OptimaError> {
        if urdf_robot.links.is_empty() {
            return Err(OptimaError::new_generic_error_str(&format!("Robot {:?} does not have any links.", urdf_robot.name), file!(), line!()));
        }

        let mut links = vec![];
        let mut joints = vec![];
        let mut link_name_to_idx_hashmap = HashMap::new();
        let mut joint_name_to_idx_hashmap = HashMap::new();

        for (i, l) in urdf_robot.links.iter().enumerate() {
            link_name_to_idx_hashmap.insert(l.name.clone(), i);
            links.push(Link::new(&l.name, i));
        }
        for (i, j) in urdf_robot.joints.iter().enumerate() {
            joint_name_to_idx_hashmap.insert(j.name.clone(), i);
            joints.push(Joint::new(URDFJoint::new_from_urdf_joint(j), i));
        }

        let mut out_self = Self {
            robot_name: urdf_robot.name.clone(),
            links,
            joints,
            robot_base_link_idx: 0,
            link_name_to_idx_hashmap,
            joint_name_to_idx_hashmap
        };

        out_self.assign_all_connections()?;
        out_self.set_robot_base_link_idx()?;

        Ok(out_self)
    }
    fn assign_all_connections(&mut self) -> Result<(), OptimaError> {
        for joint_idx in 0..self.joints.len() {
            let parent_name = self.joints[joint_idx].urdf_joint().parent_link().to_string();
            let child_name = self.joints[joint_idx].urdf_joint().child_link().to_string();

            let parent_idx = self.get_link_idx_from_name(&parent_name);
            let child_idx = self.get_link_idx_from_name(&child_name);
            let (parent_idx, child_idx) = match (parent_idx, child_idx) {
                (Some(p), Some(c)) => { (p, c) }
                _ => {
                    return Err(OptimaError::new_generic_error_str(&format!("Joint {:?} refers to an unknown link ({:?} -> {:?}).", self.joints[joint_idx].name(), parent_name, child_name), file!(), line!()));
                }
            };

            if parent_idx == child_idx {
                return Err(OptimaError::new_generic_error_str(&format!("Joint {:?} connects link {:?} to itself.", self.joints[joint_idx].name(), child_name), file!(), line!()));
            }
            if let Some(other_joint_idx) = self.links[child_idx].preceding_joint_idx() {
                return Err(OptimaError::new_generic_error_str(&format!("Link {:?} is the child of both joint {:?} and joint {:?}.", child_name, self.joints[other_joint_idx].name(), self.joints[joint_idx].name()), file!(), line!()));
            }

            self.joints[joint_idx].set_preceding_link_idx(Some(parent_idx));
            self.joints[joint_idx].set_child_link_idx(Some(child_idx));

            self.links[child_idx].set_preceding_link_idx(Some(parent_idx));
            self.links[child_idx].set_preceding_joint_idx(Some(joint_idx));
            self.links[parent_idx].add_child_link_idx(child_idx);
            self.links[parent_idx].add_child_joint_idx(joint_idx);
        }

        Ok(())
    }
    /// The link tree must have exactly one root, and every link must be reachable from it.  Since
    /// each link has at most one parent, this also rules out cycles.
    fn set_robot_base_link_idx(&mut self) -> Result<(), OptimaError> {
        let root_link_idxs: Vec<usize> = self.links.iter()
            .filter(|l| l.preceding_link_idx().is_none())
            .map(|l| l.link_idx())
            .collect();
        if root_link_idxs.len() != 1 {
            return Err(OptimaError::new_generic_error_str(&format!("Robot {:?} must have exactly one root link, found {}.", self.robot_name, root_link_idxs.len()), file!(), line!()));
        }
        let robot_base_link_idx = root_link_idxs[0];

        let mut num_reached = 0;
        let mut stack = vec![robot_base_link_idx];
        while let Some(link_idx) = stack.pop() {
            num_reached += 1;
            stack.extend(self.links[link_idx].children_link_idxs().iter().copied());
        }
        if num_reached != self.links.len() {
            return Err(OptimaError::new_generic_error_str(&format!("Robot {:?} has links that are not connected to root link {:?} (kinematic cycle).", self.robot_name, self.links[robot_base_link_idx].name()), file!(), line!()));
        }

        self.robot_base_link_idx = robot_base_link_idx;
        Ok(())
    }
    pub fn robot_name(&self) -> &str {
        &self.robot_name
    }
    pub fn links(&self) -> &Vec<Link> {
        &self.links
    }
    pub fn joints(&self) -> &Vec<Joint> {
        &self.joints
    }
    pub fn num_links(&self) -> usize {
        self.links.len()
    }
    pub fn num_joints(&self) -> usize {
        self.joints.len()
    }
    pub fn robot_base_link_idx(&self) -> usize {
        self.robot_base_link_idx
    }
    pub fn get_link(&self, link_idx: usize) -> Result<&Link, OptimaError> {
        self.links.get(link_idx).ok_or_else(|| OptimaError::new_idx_out_of_bound_error(link_idx, self.links.len(), file!(), line!()))
    }
    pub fn get_joint(&self, joint_idx: usize) -> Result<&Joint, OptimaError> {
        self.joints.get(joint_idx).ok_or_else(|| OptimaError::new_idx_out_of_bound_error(joint_idx, self.joints.len(), file!(), line!()))
    }
    pub fn get_link_idx_from_name(&self, link_name: &str) -> Option<usize> {
        self.link_name_to_idx_hashmap.get(link_name).copied()
    }
    pub fn get_joint_idx_from_name(&self, joint_name: &str) -> Option<usize> {
        self.joint_name_to_idx_hashmap.get(joint_name).copied()
    }
    pub fn print_summary(&self) {
        optima_print(&format!("Robot name: "), PrintMode::Print, PrintColor::Blue, true);
        optima_print(&format!("{}", self.robot_name), PrintMode::Println, PrintColor::None, false);
        for link in &self.links {
            optima_print(&format!(">> Link index: "), PrintMode::Print, PrintColor::Blue, true);
            optima_print(&format!(" {} ", link.link_idx()), PrintMode::Print, PrintColor::None, false);
            optima_print(&format!("  Link name: "), PrintMode::Print, PrintColor::Blue, true);
            optima_print(&format!(" {} ", link.name()), PrintMode::Print, PrintColor::None, false);
            if link.link_idx() == self.robot_base_link_idx {
                optima_print(" (base)", PrintMode::Print, PrintColor::Magenta, false);
            }
            optima_print_new_line();
        }
        for joint in &self.joints {
            joint.print_summary();
        }
    }
}
