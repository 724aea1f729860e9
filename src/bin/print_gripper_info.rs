extern crate optima_gripper;

use std::env;
use std::path::Path;
use optima_gripper::gripper_modules::gripper_configuration_module::GripperConfiguration;
use optima_gripper::simulator_modules::kinematic_simulator::KinematicSimulator;
use optima_gripper::utils::utils_console::{optima_print, PrintColor, PrintMode};

fn main () {
    let args: Vec<String> = env::args().collect();
    assert_eq!(args.len(), 2, "Argument must be the path to a gripper configuration (.json or .ron)");

    let configuration = match GripperConfiguration::load_from_file(Path::new(&args[1])) {
        Ok(c) => { c }
        Err(e) => {
            optima_print(&e.to_string(), PrintMode::Println, PrintColor::Red, true);
            std::process::exit(1);
        }
    };

    // spawn the gripper in a simulator that supports every gripper type
    let mut simulator = KinematicSimulator::new_with_soft_bodies();
    match configuration.spawn_gripper(&mut simulator) {
        Ok(gripper) => { gripper.print_summary(); }
        Err(e) => {
            optima_print(&e.to_string(), PrintMode::Println, PrintColor::Red, true);
            std::process::exit(1);
        }
    }
}
