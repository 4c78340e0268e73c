//! Course seeding.

use std::collections::HashSet;

use anyhow::Result;
use fake::Fake;
use fake::faker::lorem::en::Word;
use rand::Rng;
use rand::seq::SliceRandom;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::CourseSeed;

/// Generates course seed data with unique `[A-Z]{3}[0-9]{3}` codes, each
/// course taught by a random teacher.
pub fn generate_courses(count: usize, teacher_ids: &[Uuid]) -> Vec<CourseSeed> {
    let mut rng = rand::thread_rng();

    let mut codes = HashSet::new();
    while codes.len() < count {
        codes.insert(random_course_code(&mut rng));
    }

    codes
        .into_iter()
        .map(|code| {
            let word: String = Word().fake();
            CourseSeed {
                name: capitalize(&word),
                code,
                teacher_id: *teacher_ids
                    .choose(&mut rng)
                    .expect("at least one teacher is required"),
            }
        })
        .collect()
}

fn random_course_code(rng: &mut impl Rng) -> String {
    let letters: String = (0..3).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect();
    format!("{}{:03}", letters, rng.gen_range(0..1000))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Inserts courses with a multi-row INSERT, returning the new ids.
pub async fn insert_courses(db: &PgPool, seeds: &[CourseSeed]) -> Result<Vec<Uuid>> {
    if seeds.is_empty() {
        return Ok(Vec::new());
    }

    let mut query = String::from("INSERT INTO courses (name, code, teacher_id) VALUES ");
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
        q = q.bind(&seed.name).bind(&seed.code).bind(seed.teacher_id);
    }

    Ok(q.fetch_all(db).await?)
}

pub async fn clear_courses(db: &PgPool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM courses").execute(db).await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_is_well_formed(code: &str) -> bool {
        code.len() == 6
            && code[..3].chars().all(|c| c.is_ascii_uppercase())
            && code[3..].chars().all(|c| c.is_ascii_digit())
    }

    #[test]
    fn test_generate_courses_codes_well_formed_and_unique() {
        let teachers = vec![Uuid::new_v4()];
        let seeds = generate_courses(10, &teachers);
        assert_eq!(seeds.len(), 10);
        assert!(seeds.iter().all(|s| code_is_well_formed(&s.code)));

        let codes: HashSet<_> = seeds.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes.len(), seeds.len());
    }

    #[test]
    fn test_generate_courses_references_teachers() {
        let teachers: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        let seeds = generate_courses(5, &teachers);
        assert!(seeds.iter().all(|s| teachers.contains(&s.teacher_id)));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("algebra"), "Algebra");
        assert_eq!(capitalize(""), "");
    }
}
