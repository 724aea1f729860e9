use std::fmt::{Display, Formatter};

/// A common error type returned by functions throughout the toolbox.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptimaError {
    GenericError(String),
    IdxOutOfBoundError(String),
    UnsupportedOperationError(String),
    SimulatorCapabilityError(String)
}
impl OptimaError {
    pub fn new_generic_error_str(s: &str, file: &str, line: u32) -> Self {
        let s = format!("ERROR: {} -- File: {}, Line: {}", s.to_string(), file, line);
        return Self::GenericError(s);
    }
    pub fn new_idx_out_of_bound_error(given_idx: usize, length_of_array: usize, file: &str, line: u32) -> Self {
        let s = format!("ERROR: Index {:?} is too large for the array of length {:?} -- File: {}, Line: {}", given_idx, length_of_array, file, line);
        return Self::IdxOutOfBoundError(s)
    }
    pub fn new_unsupported_operation_error(function_name: &str, message: &str, file: &str, line: u32) -> Self {
        let s = format!("ERROR: Unsupported operation error in function {}.  {} -- File: {}, Line: {}", function_name, message, file, line);
        return Self::UnsupportedOperationError(s);
    }
    /// Raised when a simulator lacks a feature that the requested entity relies on
    /// (e.g., a vacuum gripper on a simulator without soft body support).
    pub fn new_simulator_capability_error(simulator_name: &str, required_capability: &str, file: &str, line: u32) -> Self {
        let s = format!("ERROR: Simulator {:?} does not support required capability {:?} -- File: {}, Line: {}", simulator_name, required_capability, file, line);
        return Self::SimulatorCapabilityError(s);
    }
    pub fn message(&self) -> &str {
        match self {
            OptimaError::GenericError(s) => { s }
            OptimaError::IdxOutOfBoundError(s) => { s }
            OptimaError::UnsupportedOperationError(s) => { s }
            OptimaError::SimulatorCapabilityError(s) => { s }
        }
    }
}
impl Display for OptimaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}
impl std::error::Error for OptimaError { }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx_out_of_bound_error_mentions_index_and_length() {
        let e = OptimaError::new_idx_out_of_bound_error(5, 2, file!(), line!());
        assert!(matches!(e, OptimaError::IdxOutOfBoundError(_)));
        assert!(e.message().contains("Index 5"));
        assert!(e.message().contains("length 2"));
    }

    #[test]
    fn display_matches_message() {
        let e = OptimaError::new_simulator_capability_error("kinematic", "soft_bodies", file!(), line!());
        assert_eq!(format!("{}", e), e.message());
        assert!(e.message().contains("soft_bodies"));
    }
}
