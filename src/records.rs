use std::collections::HashMap;
use std::hash::Hash;
use crate::models::{ConsultationType, Course, Expert};

pub trait Keyed {
    type Key: Eq + Hash + Clone;

    fn key(&self) -> Self::Key;
}

impl Keyed for Course {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

impl Keyed for Expert {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }
}

impl Keyed for ConsultationType {
    type Key = String;

    fn key(&self) -> String {
        self.key.clone()
    }
}

/// Mock records in declaration order with an id index built once on
/// construction. Duplicate ids resolve to the first record, like a linear scan.
#[derive(Debug, Clone)]
pub struct RecordSet<T: Keyed> {
    records: Vec<T>,
    index: HashMap<T::Key, usize>,
}

impl<T: Keyed> RecordSet<T> {
    pub fn new(records: Vec<T>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            index.entry(record.key()).or_insert(position);
        }
        Self { records, index }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T::Key: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.get(key).map(|&position| &self.records[position])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a RecordSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn lookup_by_id_matches_linear_scan() {
        let courses = RecordSet::new(data::get_courses());
        for course in data::get_courses() {
            let scanned = data::get_courses().into_iter().find(|c| c.id == course.id);
            assert_eq!(courses.get(&course.id).cloned(), scanned);
        }
        assert!(courses.get(&42).is_none());
    }

    #[test]
    fn duplicate_ids_resolve_to_first_record() {
        let mut experts = data::get_experts();
        let mut shadow = experts[0].clone();
        shadow.name = "Shadow".to_string();
        experts.push(shadow);

        let set = RecordSet::new(experts);
        assert_eq!(set.get("1").map(|e| e.name.as_str()), Some("Dr. Sarah Johnson"));
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn iteration_keeps_declaration_order() {
        let types = RecordSet::new(data::get_consultation_types());
        let keys: Vec<&str> = types.iter().map(|t| t.key.as_str()).collect();
        assert_eq!(
            keys,
            ["career-guidance", "technical-review", "project-consultation", "interview-prep"]
        );
    }
}
