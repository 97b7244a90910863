//! Gregorian leap-year arithmetic.

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `year` under the Gregorian calendar.
pub fn days_in_year(year: i32) -> usize {
    if is_leap_year(year) { 366 } else { 365 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisible_by_four() {
        assert!(is_leap_year(2020));
        assert!(is_leap_year(1960));
        assert!(!is_leap_year(2021));
        assert!(!is_leap_year(1959));
    }

    #[test]
    fn century_rule() {
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn four_hundred_rule() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(1600));
    }

    #[test]
    fn day_counts() {
        assert_eq!(days_in_year(1959), 365);
        assert_eq!(days_in_year(1960), 366);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
    }
}
