use chrono::{NaiveDate, Utc};
use validator::ValidationError;

/// Enrollment dates may be today or in the past, never in the future.
///
/// Used as a `validator` custom function on student and enrollment DTOs.
pub fn not_in_future(date: &NaiveDate) -> Result<(), ValidationError> {
    if *date > Utc::now().date_naive() {
        let mut err = ValidationError::new("future_date");
        err.message = Some("Enrollment date cannot be in the future.".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    #[test]
    fn test_today_accepted() {
        let today = Utc::now().date_naive();
        assert!(not_in_future(&today).is_ok());
    }

    #[test]
    fn test_past_accepted() {
        let last_year = Utc::now().date_naive() - Days::new(365);
        assert!(not_in_future(&last_year).is_ok());
    }

    #[test]
    fn test_tomorrow_rejected() {
        let tomorrow = Utc::now().date_naive() + Days::new(1);
        assert!(not_in_future(&tomorrow).is_err());
    }
}
