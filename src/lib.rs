
//! Gripper end-effectors for simulated robots.  A `Gripper` is a robot whose links and joints are
//! grouped into independently addressable fingers, tagged with the way it actuates
//! (`GripperType::Parallel`, `GripperType::Angular`, or `GripperType::Vacuum`) so that grasp
//! planners and controllers can pick a strategy without inspecting geometry.
//! Robot descriptions are loaded from URDF, and robots are registered in any physics engine that
//! implements the `Simulator` trait.

pub mod gripper_modules;
pub mod robot_modules;
pub mod simulator_modules;
pub mod utils;
