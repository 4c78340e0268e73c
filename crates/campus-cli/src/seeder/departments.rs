//! Department seeding.

use anyhow::Result;
use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::company::en::CompanyName;
use rand::seq::SliceRandom;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::DepartmentSeed;

/// Generates department seed data. Heads stay unassigned until teachers
/// exist.
pub fn generate_departments(count: usize) -> Vec<DepartmentSeed> {
    (0..count)
        .map(|_| DepartmentSeed {
            name: CompanyName().fake(),
            location: CityName().fake(),
        })
        .collect()
}

/// Inserts departments with a multi-row INSERT, returning the new ids.
pub async fn insert_departments(db: &PgPool, seeds: &[DepartmentSeed]) -> Result<Vec<Uuid>> {
    if seeds.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from("INSERT INTO departments (name, location) VALUES ");
    for i in 0..seeds.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 2;
        query.push_str(&format!("(${}, ${})", p + 1, p + 2));
    }
    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar::<_, Uuid>(&query);
    for seed in seeds {
        q = q.bind(&seed.name).bind(&seed.location);
    }

    Ok(q.fetch_all(db).await?)
}

/// Second pass: give every department a random teacher as head.
pub async fn assign_department_heads(
    db: &PgPool,
    department_ids: &[Uuid],
    teacher_ids: &[Uuid],
) -> Result<()> {
    let mut rng = rand::thread_rng();
    for department_id in department_ids {
        let head_id = teacher_ids.choose(&mut rng).copied();
        sqlx::query("UPDATE departments SET head_id = $1, updated_at = NOW() WHERE id = $2")
            .bind(head_id)
            .bind(department_id)
            .execute(db)
            .await?;
    }
    Ok(())
}

pub async fn clear_departments(db: &PgPool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM departments").execute(db).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_departments_count() {
        let seeds = generate_departments(5);
        assert_eq!(seeds.len(), 5);
        assert!(seeds.iter().all(|s| !s.name.is_empty()));
        assert!(seeds.iter().all(|s| !s.location.is_empty()));
    }

    #[test]
    fn test_generate_departments_empty() {
        assert!(generate_departments(0).is_empty());
    }
}
