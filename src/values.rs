//! List values and their numeric conversions.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Ordered list decoded from a separated query value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Slice(Vec<String>);

/// Members that failed to convert, along with the members that did.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceConversionError<T> {
    pub partial: Vec<T>,
    pub failed: Vec<String>,
    pub target: &'static str,
}

impl<T> fmt::Display for SliceConversionError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, member) in self.failed.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "Could not convert member {} to {}", member, self.target)?;
        }
        Ok(())
    }
}

impl<T: fmt::Debug> std::error::Error for SliceConversionError<T> {}

impl Slice {
    pub fn new(members: Vec<String>) -> Self {
        Self(members)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert every member to `i64`, skipping members that fail.
    pub fn to_int_slice(&self) -> Result<Vec<i64>, SliceConversionError<i64>> {
        self.convert("int")
    }

    /// Convert every member to `f64`, skipping members that fail.
    pub fn to_float_slice(&self) -> Result<Vec<f64>, SliceConversionError<f64>> {
        self.convert("float")
    }

    fn convert<T: FromStr>(&self, target: &'static str) -> Result<Vec<T>, SliceConversionError<T>> {
        let mut partial = Vec::with_capacity(self.0.len());
        let mut failed = Vec::new();

        for member in &self.0 {
            match member.parse::<T>() {
                Ok(v) => partial.push(v),
                Err(_) => failed.push(member.clone()),
            }
        }

        if failed.is_empty() {
            Ok(partial)
        } else {
            Err(SliceConversionError {
                partial,
                failed,
                target,
            })
        }
    }
}

impl From<Vec<String>> for Slice {
    fn from(members: Vec<String>) -> Self {
        Self(members)
    }
}

impl<'a> FromIterator<&'a str> for Slice {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}
