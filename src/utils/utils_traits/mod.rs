use std::path::Path;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::utils::utils_errors::OptimaError;
use crate::utils::utils_files::FileUtils;

pub trait SaveAndLoadable {
    type SaveType: Serialize + DeserializeOwned;

    fn get_save_serialization_object(&self) -> Self::SaveType;
    fn get_serialization_string(&self) -> Result<String, OptimaError> {
        serde_json::to_string(&self.get_save_serialization_object())
            .map_err(|e| OptimaError::new_generic_error_str(&e.to_string(), file!(), line!()))
    }
    fn save_to_path(&self, path: &Path) -> Result<(), OptimaError> {
        FileUtils::save_object_to_file_as_json(&self.get_save_serialization_object(), path)
    }
    fn load_from_path(path: &Path) -> Result<Self, OptimaError> where Self: Sized {
        let s = FileUtils::read_file_contents_to_string(path)?;
        return Self::load_from_json_string(&s);
    }
    fn load_from_json_string(json_str: &str) -> Result<Self, OptimaError> where Self: Sized;
}

pub trait ToAndFromRonString: Serialize + DeserializeOwned {
    fn convert_to_ron_string(&self) -> Result<String, OptimaError> {
        ron::to_string(self).map_err(|e| OptimaError::new_generic_error_str(&e.to_string(), file!(), line!()))
    }
    fn load_from_ron_string(ron_string: &str) -> Result<Self, OptimaError> where Self: Sized {
        let load: Result<Self, _> = ron::from_str(ron_string);
        return if let Ok(load) = load { Ok(load) } else {
            Err(OptimaError::new_generic_error_str(&format!("Could not load ron string {:?} into correct type.", ron_string), file!(), line!()))
        }
    }
}
impl <T> ToAndFromRonString for T where T: Serialize + DeserializeOwned {  }
