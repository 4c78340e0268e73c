//! Teacher seeding.

use anyhow::Result;
use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rand::seq::SliceRandom;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::TeacherSeed;

/// Generates teacher seed data, each assigned to a random department.
///
/// Emails carry an index suffix so they stay unique across runs of the
/// same names.
pub fn generate_teachers(count: usize, department_ids: &[Uuid]) -> Vec<TeacherSeed> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let email = format!(
                "{}.{}+t{}@example.com",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                idx
            );
            TeacherSeed {
                first_name,
                last_name,
                email,
                department_id: *department_ids
                    .choose(&mut rng)
                    .expect("at least one department is required"),
            }
        })
        .collect()
}

/// Inserts teachers with a multi-row INSERT, returning the new ids.
pub async fn insert_teachers(db: &PgPool, seeds: &[TeacherSeed]) -> Result<Vec<Uuid>> {
    if seeds.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from(
        "INSERT INTO teachers (first_name, last_name, email, department_id) VALUES ",
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
            .bind(seed.department_id);
    }

    Ok(q.fetch_all(db).await?)
}

pub async fn clear_teachers(db: &PgPool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM teachers").execute(db).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_teachers_references_departments() {
        let departments: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        let seeds = generate_teachers(5, &departments);
        assert_eq!(seeds.len(), 5);
        assert!(seeds.iter().all(|s| departments.contains(&s.department_id)));
    }

    #[test]
    fn test_generate_teachers_unique_emails() {
        let departments = vec![Uuid::new_v4()];
        let seeds = generate_teachers(10, &departments);
        let emails: HashSet<_> = seeds.iter().map(|s| s.email.as_str()).collect();
        assert_eq!(emails.len(), seeds.len());
    }
}
