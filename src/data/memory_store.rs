use crate::{
    data::{
        StudentStore,
        student::{Student, StudentId, ValidStudent},
    },
    error::RosterResult,
};
use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Keeps records in insertion order, standing in for the database in tests.
#[derive(Debug, Default)]
pub struct MemoryStudentStore {
    students: RwLock<Vec<Student>>,
}

fn with_id(student: ValidStudent, id: StudentId) -> Student {
    let ValidStudent { name, age, course } = student;
    Student {
        id,
        name,
        age,
        course,
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn find_all(&self) -> RosterResult<Vec<Student>> {
        Ok(self.students.read().await.clone())
    }

    async fn find_by_id(&self, id: StudentId) -> RosterResult<Option<Student>> {
        Ok(self
            .students
            .read()
            .await
            .iter()
            .find(|student| student.id == id)
            .cloned())
    }

    async fn insert_one(&self, student: ValidStudent) -> RosterResult<StudentId> {
        let id = StudentId::from(Uuid::new_v4());
        self.students.write().await.push(with_id(student, id));
        Ok(id)
    }

    async fn update_one(&self, id: StudentId, student: ValidStudent) -> RosterResult<bool> {
        let mut students = self.students.write().await;
        let Some(existing) = students.iter_mut().find(|existing| existing.id == id) else {
            return Ok(false);
        };
        *existing = with_id(student, id);
        Ok(true)
    }

    async fn delete_one(&self, id: StudentId) -> RosterResult<bool> {
        let mut students = self.students.write().await;
        let Some(index) = students.iter().position(|student| student.id == id) else {
            return Ok(false);
        };
        students.remove(index);
        Ok(true)
    }

    async fn close(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(name: &str, age: i64) -> ValidStudent {
        ValidStudent {
            name: name.into(),
            age,
            course: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_fresh_ids_in_order() {
        let store = MemoryStudentStore::default();
        let first = store.insert_one(valid("Alice", 20)).await.unwrap();
        let second = store.insert_one(valid("Alice", 20)).await.unwrap();
        assert_ne!(first, second);

        let all = store.find_all().await.unwrap();
        assert_eq!(
            all.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![first, second]
        );
    }

    #[tokio::test]
    async fn update_and_delete_report_matches() {
        let store = MemoryStudentStore::default();
        let id = store.insert_one(valid("Alice", 20)).await.unwrap();
        let unknown = StudentId::from(Uuid::new_v4());

        assert!(store.update_one(id, valid("Bob", 21)).await.unwrap());
        assert!(!store.update_one(unknown, valid("Bob", 21)).await.unwrap());
        assert_eq!(
            store.find_by_id(id).await.unwrap().map(|s| s.name),
            Some("Bob".to_string())
        );

        assert!(store.delete_one(id).await.unwrap());
        assert!(!store.delete_one(id).await.unwrap());
        assert!(store.find_by_id(id).await.unwrap().is_none());
    }
}
