//! Student seeding.

use anyhow::Result;
use chrono::{Days, NaiveDate, Utc};
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rand::Rng;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::StudentSeed;

/// How far back a seeded student's enrollment date may fall.
const MAX_ENROLLMENT_AGE_DAYS: u64 = 730;

/// Generates student seed data with enrollment dates within the past two
/// years.
pub fn generate_students(count: usize) -> Vec<StudentSeed> {
    let mut rng = rand::thread_rng();
    let today = Utc::now().date_naive();
    (0..count)
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let email = format!(
                "{}.{}+s{}@example.com",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                idx
            );
            StudentSeed {
                first_name,
                last_name,
                email,
                enrollment_date: past_date(today, &mut rng),
            }
        })
        .collect()
}

fn past_date(today: NaiveDate, rng: &mut impl Rng) -> NaiveDate {
    today - Days::new(rng.gen_range(0..MAX_ENROLLMENT_AGE_DAYS))
}

/// Inserts students with a multi-row INSERT, returning the new ids.
pub async fn insert_students(db: &PgPool, seeds: &[StudentSeed]) -> Result<Vec<Uuid>> {
    if seeds.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from(
        "INSERT INTO students (first_name, last_name, email, enrollment_date) VALUES ",
    );
    for i in 0..seeds.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 4;
        query.push_str(&format!("(${}, ${}, ${}, ${})", p + 1, p + 2, p + 3, p + 4));
    }
    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar::<_, Uuid>(&query);
    for seed in seeds {
        q = q
            .bind(&seed.first_name)
            .bind(&seed.last_name)
            .bind(&seed.email)
            .bind(seed.enrollment_date);
    }

    Ok(q.fetch_all(db).await?)
}

pub async fn clear_students(db: &PgPool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM students").execute(db).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_students_dates_not_in_future() {
        let today = Utc::now().date_naive();
        let seeds = generate_students(20);
        assert!(seeds.iter().all(|s| s.enrollment_date <= today));
    }

    #[test]
    fn test_generate_students_dates_within_two_years() {
        let today = Utc::now().date_naive();
        let oldest = today - Days::new(MAX_ENROLLMENT_AGE_DAYS);
        let seeds = generate_students(20);
        assert!(seeds.iter().all(|s| s.enrollment_date > oldest));
    }

    #[test]
    fn test_generate_students_unique_emails() {
        let seeds = generate_students(10);
        let emails: HashSet<_> = seeds.iter().map(|s| s.email.as_str()).collect();
        assert_eq!(emails.len(), seeds.len());
    }
}
