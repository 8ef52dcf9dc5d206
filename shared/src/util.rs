use chrono::{DateTime, Local, TimeZone};

/// Format a timestamp the way an `id-ID` locale prints date + time
/// (`17/10/2026, 14.05.09`).
pub fn id_locale_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%-d/%-m/%Y, %H.%M.%S").to_string()
}

/// Current local time in `id-ID` form
pub fn now_id_locale() -> String {
    id_locale_timestamp(&Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_id_locale_timestamp() {
        let at = Utc.with_ymd_and_hms(2026, 3, 7, 9, 5, 3).unwrap();
        assert_eq!(id_locale_timestamp(&at), "7/3/2026, 09.05.03");

        let at = Utc.with_ymd_and_hms(2026, 10, 17, 14, 30, 59).unwrap();
        assert_eq!(id_locale_timestamp(&at), "17/10/2026, 14.30.59");
    }
}
