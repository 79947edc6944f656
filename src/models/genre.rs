/// A genre name paired with the identifier the Jikan catalog filters by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Genre {
    pub name: &'static str,
    pub id: u32,
}

const GENRES: &[Genre] = &[
    Genre { name: "Comedy", id: 4 },
    Genre { name: "Slice of Life", id: 36 },
    Genre { name: "Romance", id: 22 },
    Genre { name: "Drama", id: 8 },
    Genre { name: "Psychological", id: 40 },
    Genre { name: "Tragedy", id: 41 },
    Genre { name: "Adventure", id: 2 },
    Genre { name: "Action", id: 1 },
    Genre { name: "Fantasy", id: 10 },
    Genre { name: "Iyashikei", id: 23 },
    Genre { name: "Thriller", id: 39 },
    Genre { name: "Mystery", id: 7 },
    Genre { name: "Sports", id: 30 },
    Genre { name: "Shounen", id: 27 },
    Genre { name: "Historical", id: 13 },
    Genre { name: "Supernatural", id: 37 },
];

/// Resolves a genre name to its catalog identifier.
///
/// Names are matched exactly. `None` means the catalog has nothing for this
/// genre; callers treat it as zero items, not as an error.
pub fn genre_id(name: &str) -> Option<u32> {
    GENRES.iter().find(|g| g.name == name).map(|g| g.id)
}
