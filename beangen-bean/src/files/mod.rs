//! Generated artifacts, one type per kind of file.

mod bean_class;
mod delegator;
mod xml_sample;

use std::path::PathBuf;

pub use bean_class::BeanClass;
pub use delegator::DelegatorClass;
pub use xml_sample::XmlSample;

/// First line of every generated Java source.
pub const GENERATED_NOTICE: &str = "Generated by beangen. Do not edit by hand.";

/// Directory of a Java package relative to the output directory.
pub fn package_path(package: Option<&str>) -> PathBuf {
    package
        .map(|package| package.split('.').collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn test_package_path() {
        assert_eq!(package_path(Some("com.example")), Path::new("com/example"));
        assert_eq!(package_path(None), PathBuf::new());
    }
}
