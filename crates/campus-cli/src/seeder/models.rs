//! Seed data structures and populate configuration.

use chrono::NaiveDate;
use uuid::Uuid;

/// Seed data for creating a department. Heads are assigned in a second
/// pass once teachers exist.
pub struct DepartmentSeed {
    pub name: String,
    pub location: String,
}

/// Seed data for creating a teacher.
pub struct TeacherSeed {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department_id: Uuid,
}

/// Seed data for creating a student.
pub struct StudentSeed {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub enrollment_date: NaiveDate,
}

/// Seed data for creating a course.
pub struct CourseSeed {
    pub name: String,
    pub code: String,
    pub teacher_id: Uuid,
}

/// Seed data for creating a classroom.
pub struct ClassroomSeed {
    pub room_number: String,
    pub capacity: i32,
    pub department_id: Uuid,
}

/// Seed data for enrolling a student in a course.
pub struct EnrollmentSeed {
    pub student_id: Uuid,
    pub course_id: Uuid,
    pub enrollment_date: NaiveDate,
}

/// How many rows of each entity `populate` creates.
#[derive(Debug, Clone)]
pub struct PopulateConfig {
    pub departments: usize,
    pub teachers: usize,
    pub students: usize,
    pub courses: usize,
    pub classrooms: usize,
}

impl Default for PopulateConfig {
    fn default() -> Self {
        Self {
            departments: 5,
            teachers: 5,
            students: 5,
            courses: 5,
            classrooms: 5,
        }
    }
}
