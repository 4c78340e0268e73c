//! Classroom seeding.

use std::collections::HashSet;

use anyhow::Result;
use rand::Rng;
use rand::seq::SliceRandom;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::ClassroomSeed;

/// Generates classroom seed data with unique three-digit room numbers,
/// each room belonging to a random department.
pub fn generate_classrooms(count: usize, department_ids: &[Uuid]) -> Vec<ClassroomSeed> {
    let mut rng = rand::thread_rng();

    let mut room_numbers = HashSet::new();
    while room_numbers.len() < count {
        room_numbers.insert(rng.gen_range(100..1000).to_string());
    }

    room_numbers
        .into_iter()
        .map(|room_number| ClassroomSeed {
            room_number,
            capacity: rng.gen_range(1..=100),
            department_id: *department_ids
                .choose(&mut rng)
                .expect("at least one department is required"),
        })
        .collect()
}

/// Inserts classrooms with a multi-row INSERT, returning the new ids.
pub async fn insert_classrooms(db: &PgPool, seeds: &[ClassroomSeed]) -> Result<Vec<Uuid>> {
    if seeds.is_empty() {
        return Ok(Vec::new());
    }

    let mut query =
        String::from("INSERT INTO classrooms (room_number, capacity, department_id) VALUES ");
    for i in 0..seeds.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 3;
        query.push_str(&format!("(${}, ${}, ${})", p + 1, p + 2, p + 3));
    }
    query.push_str(" RETURNING id");

    let mut q = sqlx::query_scalar::<_, Uuid>(&query);
    for seed in seeds {
        q = q
            .bind(&seed.room_number)
            .bind(seed.capacity)
            .bind(seed.department_id);
    }

    Ok(q.fetch_all(db).await?)
}

pub async fn clear_classrooms(db: &PgPool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM classrooms").execute(db).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_classrooms_unique_rooms_positive_capacity() {
        let departments = vec![Uuid::new_v4()];
        let seeds = generate_classrooms(10, &departments);
        assert_eq!(seeds.len(), 10);
        assert!(seeds.iter().all(|s| s.capacity >= 1 && s.capacity <= 100));

        let rooms: HashSet<_> = seeds.iter().map(|s| s.room_number.as_str()).collect();
        assert_eq!(rooms.len(), seeds.len());
    }

    #[test]
    fn test_generate_classrooms_references_departments() {
        let departments: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        let seeds = generate_classrooms(8, &departments);
        assert!(
            seeds
                .iter()
                .all(|s| departments.contains(&s.department_id))
        );
    }
}
