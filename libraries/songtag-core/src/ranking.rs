//! Year-based ordering of candidate records

use crate::types::MetadataRecord;

/// Rank given to empty or non-numeric years so they sort last.
pub const UNKNOWN_YEAR_RANK: u32 = 9999;

/// Sort key for a record's year.
///
/// A year counts only when the trimmed value is non-empty and made of ASCII
/// digits; its first four digits are the key. Anything else ranks as
/// [`UNKNOWN_YEAR_RANK`].
pub fn year_rank(year: &str) -> u32 {
    let year = year.trim();
    if year.is_empty() || !year.bytes().all(|b| b.is_ascii_digit()) {
        return UNKNOWN_YEAR_RANK;
    }

    // All bytes are ASCII digits, so byte slicing stays on char boundaries.
    year[..year.len().min(4)]
        .parse()
        .unwrap_or(UNKNOWN_YEAR_RANK)
}

/// Order records by ascending year.
///
/// The sort is stable: records with equal rank (including every unknown year)
/// keep their relative input order.
pub fn rank_by_year(records: &mut [MetadataRecord]) {
    records.sort_by_key(|record| year_rank(&record.year));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_years(years: &[&str]) -> Vec<MetadataRecord> {
        years
            .iter()
            .enumerate()
            .map(|(i, year)| MetadataRecord::new("Artist", format!("Song {i}")).with_year(*year))
            .collect()
    }

    #[test]
    fn numeric_years_rank_by_value() {
        assert_eq!(year_rank("1975"), 1975);
        assert_eq!(year_rank(" 2001 "), 2001);
        assert_eq!(year_rank("197510"), 1975);
    }

    #[test]
    fn malformed_years_rank_last() {
        assert_eq!(year_rank(""), UNKNOWN_YEAR_RANK);
        assert_eq!(year_rank("abcd"), UNKNOWN_YEAR_RANK);
        assert_eq!(year_rank("1975-10-31"), UNKNOWN_YEAR_RANK);
        assert_eq!(year_rank("N/A"), UNKNOWN_YEAR_RANK);
    }

    #[test]
    fn sort_is_stable_among_unknown_years() {
        let mut records = with_years(&["2001", "", "abcd", "1999"]);
        rank_by_year(&mut records);

        let years: Vec<&str> = records.iter().map(|r| r.year.as_str()).collect();
        assert_eq!(years, vec!["1999", "2001", "", "abcd"]);
        assert_eq!(records[2].title, "Song 1");
        assert_eq!(records[3].title, "Song 2");
    }

    #[test]
    fn equal_years_keep_input_order() {
        let mut records = with_years(&["1980", "1975", "1980", "1975"]);
        rank_by_year(&mut records);

        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Song 1", "Song 3", "Song 0", "Song 2"]);
    }
}
