use serde::{Serialize, Deserialize};

/// A Link holds the connectivity of a robot link (specified by a robot URDF file) within the
/// flat link table of a `RobotModelModule`.  Other structures refer to links only by `link_idx`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Link {
    name: String,
    link_idx: usize,
    preceding_link_idx: Option<usize>,
    children_link_idxs: Vec<usize>,
    preceding_joint_idx: Option<usize>,
    children_joint_idxs: Vec<usize>
}
impl Link {
    pub fn new(name: &str, link_idx: usize) -> Self {
        Self {
            name: name.to_string(),
            link_idx,
            preceding_link_idx: None,
            children_link_idxs: vec![],
            preceding_joint_idx: None,
            children_joint_idxs: vec![]
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn link_idx(&self) -> usize {
        self.link_idx
    }
    pub fn preceding_link_idx(&self) -> Option<usize> {
        self.preceding_link_idx
    }
    pub fn children_link_idxs(&self) -> &Vec<usize> {
        &self.children_link_idxs
    }
    pub fn preceding_joint_idx(&self) -> Option<usize> {
        self.preceding_joint_idx
    }
    pub fn children_joint_idxs(&self) -> &Vec<usize> {
        &self.children_joint_idxs
    }
    pub fn set_preceding_link_idx(&mut self, preceding_link_idx: Option<usize>) {
        self.preceding_link_idx = preceding_link_idx;
    }
    pub fn set_preceding_joint_idx(&mut self, preceding_joint_idx: Option<usize>) {
        self.preceding_joint_idx = preceding_joint_idx;
    }
    pub fn add_child_joint_idx(&mut self, idx: usize) {
        self.children_joint_idxs.push(idx);
    }
    pub fn add_child_link_idx(&mut self, idx: usize) {
        self.children_link_idxs.push(idx);
    }
}
