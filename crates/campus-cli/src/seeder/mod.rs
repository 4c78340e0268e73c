//! Database seeding: a small fake dataset for development and demos.
//!
//! `populate` builds the dataset in dependency order — departments first,
//! then teachers (who need a department), then a second pass assigning
//! department heads (the circular half of that relationship), then
//! students, courses, classrooms, and finally enrollments.
//!
//! `clear_all` deletes in the original fixed order and leans on the
//! schema's referential actions: deleting teachers empties department
//! heads and course assignments, deleting students and courses cascades
//! into enrollments. User accounts are untouched.

pub mod classrooms;
pub mod courses;
pub mod departments;
pub mod enrollments;
pub mod models;
pub mod students;
pub mod teachers;

use anyhow::Result;
use sqlx::PgPool;

pub use models::PopulateConfig;

/// Seed the database with fake data.
pub async fn populate(db: &PgPool, config: &PopulateConfig) -> Result<()> {
    println!("🏫 Seeding {} departments...", config.departments);
    let department_seeds = departments::generate_departments(config.departments);
    let department_ids = departments::insert_departments(db, &department_seeds).await?;

    println!("👩‍🏫 Seeding {} teachers...", config.teachers);
    let teacher_seeds = teachers::generate_teachers(config.teachers, &department_ids);
    let teacher_ids = teachers::insert_teachers(db, &teacher_seeds).await?;

    departments::assign_department_heads(db, &department_ids, &teacher_ids).await?;
    println!("   ✓ Assigned department heads");

    println!("🎓 Seeding {} students...", config.students);
    let student_seeds = students::generate_students(config.students);
    let student_ids = students::insert_students(db, &student_seeds).await?;

    println!("📚 Seeding {} courses...", config.courses);
    let course_seeds = courses::generate_courses(config.courses, &teacher_ids);
    let course_ids = courses::insert_courses(db, &course_seeds).await?;

    println!("🏛️ Seeding {} classrooms...", config.classrooms);
    let classroom_seeds = classrooms::generate_classrooms(config.classrooms, &department_ids);
    classrooms::insert_classrooms(db, &classroom_seeds).await?;

    let enrollment_seeds = enrollments::generate_enrollments(&student_ids, &course_ids);
    let enrolled = enrollments::insert_enrollments(db, &enrollment_seeds).await?;
    println!("📝 Seeded {} enrollments", enrolled);

    Ok(())
}

/// Delete all rows from every domain entity table.
///
/// The order is the original command's fixed order, not dependency order;
/// the schema's SET NULL / CASCADE actions keep it safe.
pub async fn clear_all(db: &PgPool) -> Result<u64> {
    let mut total = 0;

    total += teachers::clear_teachers(db).await?;
    total += students::clear_students(db).await?;
    total += courses::clear_courses(db).await?;
    total += departments::clear_departments(db).await?;
    total += classrooms::clear_classrooms(db).await?;
    total += enrollments::clear_enrollments(db).await?;

    Ok(total)
}
