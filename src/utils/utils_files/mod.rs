use std::fs;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;
use serde::Serialize;
use serde::de::DeserializeOwned;
use crate::utils::utils_console::{optima_print, PrintColor, PrintMode};
use crate::utils::utils_errors::OptimaError;

/// Convenience struct that holds many class functions related to file utils.
pub struct FileUtils;
impl FileUtils {
    /// Reads contents of file and outputs it to a string.
    pub fn read_file_contents_to_string(p: &Path) -> Result<String, OptimaError> {
        let mut file_res = File::open(p);
        return match &mut file_res {
            Ok(f) => {
                let mut contents = String::new();
                if let Err(e) = f.read_to_string(&mut contents) {
                    return Err(OptimaError::new_generic_error_str(&format!("Could not read file {:?}: {}", p, e), file!(), line!()));
                }
                Ok(contents)
            }
            Err(e) => {
                Err(OptimaError::new_generic_error_str(&format!("Could not open file {:?}: {}", p, e), file!(), line!()))
            }
        }
    }
    /// Returns file extension of path as string.
    pub fn get_file_extension_string(p: &Path) -> Option<String> {
        let e = p.extension();
        return match e {
            None => { None }
            Some(o) => { o.to_str().map(|s| s.to_string()) }
        }
    }
    /// Saves given string to a file, creating parent directories if necessary.
    pub fn write_string_to_file(s: &str, p: &Path) -> Result<(), OptimaError> {
        if let Some(parent) = p.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                return Err(OptimaError::new_generic_error_str(&e.to_string(), file!(), line!()));
            }
        }

        let file_res = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(p);
        return match file_res {
            Ok(mut f) => {
                match f.write_all(s.as_bytes()) {
                    Ok(_) => { Ok(()) }
                    Err(e) => { Err(OptimaError::new_generic_error_str(&e.to_string(), file!(), line!())) }
                }
            }
            Err(e) => {
                Err(OptimaError::new_generic_error_str(&e.to_string(), file!(), line!()))
            }
        }
    }
    /// Saves given object to a file as a JSON string.  The object must be serializable using serde json.
    pub fn save_object_to_file_as_json<T: Serialize>(object: &T, p: &Path) -> Result<(), OptimaError> {
        let s = match serde_json::to_string(object) {
            Ok(s) => { s }
            Err(e) => { return Err(OptimaError::new_generic_error_str(&e.to_string(), file!(), line!())) }
        };
        Self::write_string_to_file(&s, p)
    }
}

pub fn load_object_from_json_string<T: DeserializeOwned>(json_str: &str) -> Result<T, OptimaError> {
    let o_res = serde_json::from_str(json_str);
    return match o_res {
        Ok(o) => {
            Ok(o)
        }
        Err(_) => {
            optima_print(json_str, PrintMode::Println, PrintColor::Red, false);
            Err(OptimaError::new_generic_error_str("load_object_from_json_string() failed.  The given json_string is incompatible with the requested type.", file!(), line!()))
        }
    }
}
