pub mod robot;
pub mod robot_model_module;
