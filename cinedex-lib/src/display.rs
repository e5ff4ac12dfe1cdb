//! Plain-text formatting of movie fields shared by the frontends.

use cinedex_core::Movie;

/// Shown in place of a field the record does not have.
pub const MISSING: &str = "N/A";

pub fn rating_text(movie: &Movie) -> String {
    movie
        .rating
        .map_or_else(|| MISSING.to_string(), |r| r.to_string())
}

pub fn year_text(movie: &Movie) -> String {
    movie
        .year
        .map_or_else(|| MISSING.to_string(), |y| y.to_string())
}

pub fn poster_text(movie: &Movie) -> &str {
    movie.poster.as_deref().unwrap_or(MISSING)
}

/// One-line summary: `Title (1979) rating 8.5, poster alien.jpg`.
pub fn summary_line(title: &str, movie: &Movie) -> String {
    format!(
        "{} ({}) rating {}, poster {}",
        title,
        year_text(movie),
        rating_text(movie),
        poster_text(movie),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_record() {
        let m = Movie::new(1979, 8.5, "alien.jpg");
        assert_eq!(summary_line("Alien", &m), "Alien (1979) rating 8.5, poster alien.jpg");
    }

    #[test]
    fn missing_fields_show_placeholder() {
        let m = Movie::default();
        assert_eq!(rating_text(&m), "N/A");
        assert_eq!(year_text(&m), "N/A");
        assert_eq!(poster_text(&m), "N/A");
    }

    #[test]
    fn whole_ratings_print_without_fraction() {
        let m = Movie::new(1997, 9.0, "t.jpg");
        assert_eq!(rating_text(&m), "9");
    }
}
