/// Mood keywords and the genres they pull from, in declaration order.
const MOODS: &[(&str, &[&str])] = &[
    ("happy", &["Comedy", "Slice of Life", "Romance"]),
    ("sad", &["Drama", "Psychological", "Tragedy"]),
    ("adventurous", &["Adventure", "Action", "Fantasy"]),
    ("relaxing", &["Slice of Life", "Iyashikei"]),
    ("thrilling", &["Thriller", "Mystery", "Psychological"]),
    ("excited", &["Action", "Sports", "Shounen"]),
    ("chill", &["Slice of Life", "Iyashikei", "Comedy"]),
    ("romantic", &["Romance", "Drama"]),
    ("nostalgic", &["Slice of Life", "Drama", "Historical"]),
    ("mysterious", &["Mystery", "Psychological", "Supernatural"]),
    ("thoughtful", &["Psychological", "Drama", "Slice of Life"]),
    ("energetic", &["Action", "Shounen", "Sports"]),
    ("relaxed", &["Slice of Life", "Iyashikei", "Comedy"]),
    ("melancholic", &["Drama", "Tragedy", "Psychological"]),
    ("inspired", &["Adventure", "Fantasy", "Shounen"]),
    ("anxious", &["Psychological", "Mystery", "Drama"]),
    ("determined", &["Shounen", "Sports", "Action"]),
];

/// Looks up the genres for a mood, ignoring case.
pub fn genres_for(mood: &str) -> Option<&'static [&'static str]> {
    let key = mood.to_lowercase();
    MOODS
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, genres)| *genres)
}

/// Every recognized mood keyword, in declaration order
pub fn mood_names() -> Vec<String> {
    MOODS.iter().map(|(name, _)| name.to_string()).collect()
}

pub fn all_moods() -> &'static [(&'static str, &'static [&'static str])] {
    MOODS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::genre::genre_id;

    #[test]
    fn test_every_mood_has_genres() {
        for name in mood_names() {
            let genres = genres_for(&name).unwrap();
            assert!(!genres.is_empty(), "{name} has no genres");
        }
    }

    #[test]
    fn test_every_referenced_genre_is_in_catalog() {
        for (mood, genres) in all_moods() {
            for genre in *genres {
                assert!(genre_id(genre).is_some(), "{mood} references unknown {genre}");
            }
        }
    }

    #[test]
    fn test_seventeen_moods_in_order() {
        let names = mood_names();
        assert_eq!(names.len(), 17);
        assert_eq!(names.first().map(String::as_str), Some("happy"));
        assert_eq!(names.last().map(String::as_str), Some("determined"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(genres_for("HAPPY"), genres_for("happy"));
        assert_eq!(
            genres_for("Happy"),
            Some(&["Comedy", "Slice of Life", "Romance"][..])
        );
    }

    #[test]
    fn test_unknown_moods() {
        assert_eq!(genres_for(""), None);
        assert_eq!(genres_for("grumpy"), None);
        assert_eq!(genres_for(" happy"), None);
    }
}
