//! Base implementation of records.
use crate::error::GymError;
use chrono::prelude::{DateTime, Local};
use std::collections::{
    hash_map::{IntoIter, Iter, Keys},
    HashMap,
};

/// Possible types of values stored in a [`Record`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordValue {
    /// A single floating-point value.
    Scalar(f32),

    /// A flag, e.g., whether an episode was truncated.
    Bool(bool),

    /// A timestamp with local timezone.
    DateTime(DateTime<Local>),

    /// A 1-dimensional array of floating-point values.
    Array1(Vec<f32>),

    /// A 2-dimensional array with shape information.
    Array2(Vec<f32>, [usize; 2]),

    /// A 3-dimensional array with shape information.
    Array3(Vec<f32>, [usize; 3]),

    /// A text value.
    String(String),
}

/// A mapping from string keys to [`RecordValue`]s.
///
/// The order of keys is irrelevant.
///
/// # Examples
///
/// ```rust
/// use gym_game_core::record::{Record, RecordValue};
///
/// let mut record = Record::from_scalar("distance", 3.0);
/// record.insert("steps", RecordValue::Scalar(12.0));
///
/// assert_eq!(record.get_scalar("distance").unwrap(), 3.0);
/// assert!(record.get_scalar("missing").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(HashMap<String, RecordValue>);

impl Record {
    /// Creates an empty record.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    /// Creates a record containing a single scalar value.
    pub fn from_scalar(name: impl Into<String>, value: f32) -> Self {
        Self(HashMap::from([(name.into(), RecordValue::Scalar(value))]))
    }

    /// Creates a record from a slice of key-value pairs.
    pub fn from_slice<K: Into<String> + Clone>(s: &[(K, RecordValue)]) -> Self {
        Self(
            s.iter()
                .map(|(k, v)| (k.clone().into(), v.clone()))
                .collect(),
        )
    }

    /// Returns an iterator over the keys in the record.
    pub fn keys(&self) -> Keys<String, RecordValue> {
        self.0.keys()
    }

    /// Inserts a key-value pair into the record.
    ///
    /// An existing value with the same key is overwritten.
    pub fn insert(&mut self, k: impl Into<String>, v: RecordValue) {
        self.0.insert(k.into(), v);
    }

    /// Returns an iterator over the key-value pairs in the record.
    pub fn iter(&self) -> Iter<'_, String, RecordValue> {
        self.0.iter()
    }

    /// Returns an iterator that consumes the record.
    pub fn into_iter_in_record(self) -> IntoIter<String, RecordValue> {
        self.0.into_iter()
    }

    /// Gets a reference to the value associated with the given key.
    pub fn get(&self, k: &str) -> Option<&RecordValue> {
        self.0.get(k)
    }

    /// Returns `true` if the record has the given key.
    pub fn contains_key(&self, k: &str) -> bool {
        self.0.contains_key(k)
    }

    /// Merges two records, consuming both.
    ///
    /// If both records contain the same key, the value from `record` wins.
    pub fn merge(self, record: Record) -> Self {
        Record(self.0.into_iter().chain(record.0).collect())
    }

    /// Merges another record into this one in place.
    ///
    /// If both records contain the same key, the value from `record` wins.
    pub fn merge_inplace(&mut self, record: Record) {
        self.0.extend(record.0);
    }

    /// Gets a scalar value from the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the key does not exist or the value is not a scalar.
    pub fn get_scalar(&self, k: &str) -> Result<f32, GymError> {
        match self.0.get(k) {
            Some(RecordValue::Scalar(v)) => Ok(*v),
            Some(_) => Err(GymError::RecordValueTypeError("Scalar".to_string())),
            None => Err(GymError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a flag from the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the key does not exist or the value is not a flag.
    pub fn get_bool(&self, k: &str) -> Result<bool, GymError> {
        match self.0.get(k) {
            Some(RecordValue::Bool(v)) => Ok(*v),
            Some(_) => Err(GymError::RecordValueTypeError("Bool".to_string())),
            None => Err(GymError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a 1-dimensional array from the record.
    pub fn get_array1(&self, k: &str) -> Result<Vec<f32>, GymError> {
        match self.0.get(k) {
            Some(RecordValue::Array1(v)) => Ok(v.clone()),
            Some(_) => Err(GymError::RecordValueTypeError("Array1".to_string())),
            None => Err(GymError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a 2-dimensional array and its shape from the record.
    pub fn get_array2(&self, k: &str) -> Result<(Vec<f32>, [usize; 2]), GymError> {
        match self.0.get(k) {
            Some(RecordValue::Array2(v, s)) => Ok((v.clone(), *s)),
            Some(_) => Err(GymError::RecordValueTypeError("Array2".to_string())),
            None => Err(GymError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a 3-dimensional array and its shape from the record.
    pub fn get_array3(&self, k: &str) -> Result<(Vec<f32>, [usize; 3]), GymError> {
        match self.0.get(k) {
            Some(RecordValue::Array3(v, s)) => Ok((v.clone(), *s)),
            Some(_) => Err(GymError::RecordValueTypeError("Array3".to_string())),
            None => Err(GymError::RecordKeyError(k.to_string())),
        }
    }

    /// Gets a string value from the record.
    pub fn get_string(&self, k: &str) -> Result<String, GymError> {
        match self.0.get(k) {
            Some(RecordValue::String(s)) => Ok(s.clone()),
            Some(_) => Err(GymError::RecordValueTypeError("String".to_string())),
            None => Err(GymError::RecordKeyError(k.to_string())),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the record is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets the scalar value of a record holding exactly one entry.
    pub fn get_scalar_without_key(&self) -> Option<f32> {
        if self.0.len() != 1 {
            return None;
        }
        match self.0.values().next() {
            Some(RecordValue::Scalar(value)) => Some(*value),
            _ => None,
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, RecordValue);
    type IntoIter = IntoIter<String, RecordValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_getters() {
        let record = Record::from_slice(&[
            ("reward", RecordValue::Scalar(-1.0)),
            ("truncated", RecordValue::Bool(true)),
            ("name", RecordValue::String("grid".to_string())),
            ("frame", RecordValue::Array2(vec![0.0; 6], [2, 3])),
        ]);

        assert_eq!(record.get_scalar("reward"), Ok(-1.0));
        assert_eq!(record.get_bool("truncated"), Ok(true));
        assert_eq!(record.get_string("name"), Ok("grid".to_string()));
        assert_eq!(record.get_array2("frame").unwrap().1, [2, 3]);
        assert_eq!(
            record.get_scalar("truncated"),
            Err(GymError::RecordValueTypeError("Scalar".to_string()))
        );
        assert_eq!(
            record.get_bool("missing"),
            Err(GymError::RecordKeyError("missing".to_string()))
        );
    }

    #[test]
    fn test_merge_overwrites() {
        let a = Record::from_slice(&[
            ("x", RecordValue::Scalar(1.0)),
            ("y", RecordValue::Scalar(2.0)),
        ]);
        let b = Record::from_scalar("y", 3.0);
        let merged = a.clone().merge(b.clone());
        assert_eq!(merged.len(), 2);
        assert_eq!(merged.get_scalar("y"), Ok(3.0));

        let mut c = a;
        c.merge_inplace(b);
        assert_eq!(c, merged);
    }

    #[test]
    fn test_scalar_without_key() {
        assert_eq!(Record::from_scalar("r", 0.5).get_scalar_without_key(), Some(0.5));
        assert_eq!(Record::empty().get_scalar_without_key(), None);
    }
}
