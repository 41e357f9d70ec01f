use serde::Serialize;

use super::normalize::clamp;

/// Oldest projected age at death, unless the person is already older.
pub const MAX_DEATH_AGE: i32 = 105;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeathProjection {
    pub death_age: i32,
    pub death_year: i32,
}

/// Turns a life expectancy into a calendar year strictly after `current_year`.
///
/// The death age is at least one year past the current age and at most
/// [`MAX_DEATH_AGE`]; when those bounds cross (age ≥ 105) the lower bound
/// wins.
pub fn project_death(
    life_expectancy: i32,
    age: i32,
    birth_year: i32,
    current_year: i32,
) -> DeathProjection {
    let death_age = clamp(life_expectancy, age + 1, MAX_DEATH_AGE);
    let mut death_year = birth_year + death_age;
    if death_year <= current_year {
        death_year = current_year + 1;
    }
    DeathProjection {
        death_age,
        death_year,
    }
}
