//! Enrollment seeding.

use anyhow::Result;
use chrono::{Days, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::EnrollmentSeed;

/// How far back a seeded enrollment date may fall.
const MAX_ENROLLMENT_AGE_DAYS: u64 = 365;

/// Enrolls every student in 1 to 5 distinct courses with enrollment dates
/// within the past year.
pub fn generate_enrollments(student_ids: &[Uuid], course_ids: &[Uuid]) -> Vec<EnrollmentSeed> {
    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();

    student_ids
        .iter()
        .flat_map(|&student_id| {
            let num_courses = rng.gen_range(1..=5usize).min(course_ids.len());
            course_ids
                .choose_multiple(&mut rng, num_courses)
                .map(|&course_id| EnrollmentSeed {
                    student_id,
                    course_id,
                    enrollment_date: today
                        - Days::new(rng.gen_range(0..MAX_ENROLLMENT_AGE_DAYS)),
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Inserts enrollments with a multi-row INSERT.
pub async fn insert_enrollments(db: &PgPool, seeds: &[EnrollmentSeed]) -> Result<u64> {
    if seeds.is_empty() {
        return Ok(0);
    }

    let mut query = String::from(
        "INSERT INTO enrollments (student_id, course_id, enrollment_date) VALUES ",
    );
    for i in 0..seeds.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 3;
        query.push_str(&format!("(${}, ${}, ${})", p + 1, p + 2, p + 3));
    }

    let mut q = sqlx::query(&query);
    for seed in seeds {
        q = q
            .bind(seed.student_id)
            .bind(seed.course_id)
            .bind(seed.enrollment_date);
    }

    let result = q.execute(db).await?;
    Ok(result.rows_affected())
}

pub async fn clear_enrollments(db: &PgPool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM enrollments").execute(db).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_enrollments_one_to_five_per_student() {
        let students: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let courses: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let seeds = generate_enrollments(&students, &courses);

        for student in &students {
            let count = seeds.iter().filter(|s| s.student_id == *student).count();
            assert!((1..=5).contains(&count));
        }
    }

    #[test]
    fn test_generate_enrollments_no_duplicate_pairs() {
        let students: Vec<Uuid> = (0..10).map(|_| Uuid::new_v4()).collect();
        let courses: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let seeds = generate_enrollments(&students, &courses);

        let pairs: HashSet<_> = seeds.iter().map(|s| (s.student_id, s.course_id)).collect();
        assert_eq!(pairs.len(), seeds.len());
    }

    #[test]
    fn test_generate_enrollments_dates_within_past_year() {
        let students: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let courses: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        let seeds = generate_enrollments(&students, &courses);

        let today = Utc::now().date_naive();
        let oldest = today - Days::new(MAX_ENROLLMENT_AGE_DAYS);
        assert!(
            seeds
                .iter()
                .all(|s| s.enrollment_date <= today && s.enrollment_date > oldest)
        );
    }

    #[test]
    fn test_generate_enrollments_capped_by_available_courses() {
        let students = vec![Uuid::new_v4()];
        let courses: Vec<Uuid> = (0..2).map(|_| Uuid::new_v4()).collect();
        let seeds = generate_enrollments(&students, &courses);
        assert!(seeds.len() <= 2);
    }
}
