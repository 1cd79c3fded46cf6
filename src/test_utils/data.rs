use std::fs;

use crate::error::{IOError, ParseError, Result};

pub struct TestData {
    pub small: String,
    pub medium: String,
    pub large: String,
}

impl TestData {
    pub fn load() -> Result<Self> {
        Ok(Self {
            small: read_test_file("tests/input/small.xml")?,
            medium: read_test_file("tests/input/file.xml")?,
            large: read_test_file("tests/input/large.xml")?,
        })
    }
}

pub fn read_test_file(path: &str) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        ParseError::from(IOError::ReadError(format!(
            "Failed to read {}: {}",
            path, e
        )))
    })
}
