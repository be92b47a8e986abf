use crate::{
    data::student::{Student, StudentId, ValidStudent},
    error::RosterResult,
};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod postgres_store;
pub mod student;

#[cfg(test)]
pub mod memory_store;

/// The one collection of student records the app reads and writes.
///
/// Ids are always assigned by the store on insertion, never by callers.
#[async_trait]
pub trait StudentStore: Debug + Send + Sync {
    /// All records, in whatever order the store hands them back.
    async fn find_all(&self) -> RosterResult<Vec<Student>>;
    async fn find_by_id(&self, id: StudentId) -> RosterResult<Option<Student>>;
    async fn insert_one(&self, student: ValidStudent) -> RosterResult<StudentId>;
    /// Overwrites every field of the matching record. Returns whether a record matched.
    async fn update_one(&self, id: StudentId, student: ValidStudent) -> RosterResult<bool>;
    /// Removes at most one record. Returns whether anything was removed.
    async fn delete_one(&self, id: StudentId) -> RosterResult<bool>;
    async fn close(&self);
}
