pub const STAR_FULL: char = '★';
pub const STAR_EMPTY: char = '☆';
pub const MAX_RATING: u8 = 5;

// Separates the heading, rating and comment on a talk's first line
pub const SPACER: &str = " · ";

// Zero-padded HH:MM:SS, the hours field grows as needed
pub fn pretty_duration(seconds: u64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    format!("{:02}:{:02}:{:02}", hours, minutes % 60, seconds % 60)
}

pub fn star_rating(rating: u8) -> String {
    let full = rating.min(MAX_RATING) as usize;
    let empty = MAX_RATING as usize - full;
    std::iter::repeat(STAR_FULL)
        .take(full)
        .chain(std::iter::repeat(STAR_EMPTY).take(empty))
        .collect()
}

/// Splits free text into paragraphs on blank lines, and each paragraph into
/// its single-newline separated lines.
pub fn split_paragraphs(text: &str) -> Vec<Vec<String>> {
    let text = text.replace("\r\n", "\n");
    text.split("\n\n")
        .filter(|paragraph| !paragraph.trim().is_empty())
        .map(|paragraph| paragraph.split('\n').map(str::to_string).collect())
        .collect()
}

pub fn join_speakers(speakers: &[String]) -> String {
    speakers.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_duration_pads_every_field() {
        assert_eq!(pretty_duration(3661), "01:01:01");
        assert_eq!(pretty_duration(59), "00:00:59");
        assert_eq!(pretty_duration(0), "00:00:00");
        assert_eq!(pretty_duration(3600 * 2 + 60 * 45 + 7), "02:45:07");
    }

    #[test]
    fn pretty_duration_hours_are_unbounded() {
        assert_eq!(pretty_duration(100 * 3600), "100:00:00");
        assert_eq!(pretty_duration(1234 * 3600 + 59), "1234:00:59");
    }

    #[test]
    fn star_rating_always_has_five_glyphs() {
        assert_eq!(star_rating(0), "☆☆☆☆☆");
        assert_eq!(star_rating(3), "★★★☆☆");
        assert_eq!(star_rating(5), "★★★★★");
        assert_eq!(star_rating(9), "★★★★★");
    }

    #[test]
    fn split_paragraphs_on_blank_lines() {
        let paragraphs = split_paragraphs("A\nB\n\nC");
        assert_eq!(
            paragraphs,
            vec![vec!["A".to_string(), "B".to_string()], vec!["C".to_string()]]
        );
    }

    #[test]
    fn split_paragraphs_handles_crlf_and_blank_tail() {
        let paragraphs = split_paragraphs("First\r\nline\r\n\r\nSecond\n\n\n\n");
        assert_eq!(
            paragraphs,
            vec![
                vec!["First".to_string(), "line".to_string()],
                vec!["Second".to_string()]
            ]
        );
        assert!(split_paragraphs("").is_empty());
    }

    #[test]
    fn join_speakers_with_comma() {
        let speakers = vec!["Alice".to_string(), "Bob".to_string()];
        assert_eq!(join_speakers(&speakers), "Alice, Bob");
        assert_eq!(join_speakers(&[]), "");
    }
}
