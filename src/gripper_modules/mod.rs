pub mod gripper;
pub mod gripper_finger_module;
pub mod gripper_configuration_module;
