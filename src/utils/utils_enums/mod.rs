use strum::IntoEnumIterator;
use crate::utils::utils_errors::OptimaError;
use crate::utils::utils_traits::ToAndFromRonString;

pub struct EnumUtils;
impl EnumUtils {
    pub fn get_all_variants_of_enum<T: IntoEnumIterator>() -> Vec<T> {
        let out: Vec<T> = T::iter().collect();
        out
    }
    pub fn convert_all_variants_of_enum_into_ron_strings<T: IntoEnumIterator + ToAndFromRonString>() -> Result<Vec<String>, OptimaError> {
        let mut out = vec![];

        let variants = Self::get_all_variants_of_enum::<T>();
        for v in &variants { out.push(v.convert_to_ron_string()?); }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gripper_modules::gripper::GripperType;

    #[test]
    fn gripper_types_convert_to_ron_strings() {
        let s = EnumUtils::convert_all_variants_of_enum_into_ron_strings::<GripperType>().unwrap();
        assert_eq!(s, vec!["Parallel".to_string(), "Angular".to_string(), "Vacuum".to_string()]);
    }
}
