use lazy_static::lazy_static;

pub type GenreEntry = (&'static str, &'static [&'static str]);

lazy_static! {
    /// Genre -> subgenres, in presentation order. Loaded once, never mutated.
    static ref CATALOG: Vec<GenreEntry> = vec![
        ("pop", &["Pop Mainstream", "Electropop", "Indie Pop", "K-Pop", "Synthpop"][..]),
        ("rock", &["Classic Rock", "Alternative Rock", "Punk Rock", "Hard Rock", "Progressive Rock"][..]),
        ("hip-hop", &["Rap", "Trap", "Old School", "Boom Bap", "Cloud Rap"][..]),
        ("electronic", &["House", "Techno", "Dubstep", "Ambient", "Drum & Bass"][..]),
        ("jazz", &["Smooth Jazz", "Bebop", "Fusion", "Contemporary Jazz", "Latin Jazz"][..]),
        ("reggae", &["Roots Reggae", "Dancehall", "Dub", "Reggaeton", "Ska"][..]),
        ("country", &["Country Pop", "Bluegrass", "Outlaw Country", "Country Rock", "Folk Country"][..]),
        ("r&b", &["Contemporary R&B", "Neo Soul", "Funk", "Motown", "Gospel"][..]),
        ("latin", &["Salsa", "Bachata", "Merengue", "Reggaeton", "Bossa Nova"][..]),
        ("folk", &["Folk Rock", "Indie Folk", "Traditional Folk", "Celtic", "Americana"][..]),
        ("blues", &["Chicago Blues", "Delta Blues", "Electric Blues", "Blues Rock", "Soul Blues"][..]),
        ("classical", &["Baroque", "Romantic", "Contemporary Classical", "Minimalism", "Orchestral"][..]),
    ];
}

pub fn genres() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|(genre, _)| *genre)
}

/// The subgenre list for a genre key; unknown or empty keys yield an empty
/// slice rather than an error.
pub fn subgenres(genre: &str) -> &'static [&'static str] {
    CATALOG
        .iter()
        .find(|(key, _)| *key == genre)
        .map(|(_, subgenres)| *subgenres)
        .unwrap_or(&[])
}

pub fn display_label(genre: &str) -> String {
    let mut chars = genre.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_ordered_and_complete() {
        let genres: Vec<_> = genres().collect();
        assert_eq!(genres.len(), 12);
        assert_eq!(genres[0], "pop");
        assert_eq!(genres[11], "classical");
        for genre in &genres {
            assert_eq!(subgenres(genre).len(), 5);
        }
    }

    #[test]
    fn unknown_genre_has_no_subgenres() {
        assert!(subgenres("").is_empty());
        assert!(subgenres("polka").is_empty());
    }

    #[test]
    fn subgenre_lookup_matches_entry() {
        assert_eq!(
            subgenres("pop"),
            ["Pop Mainstream", "Electropop", "Indie Pop", "K-Pop", "Synthpop"]
        );
        assert!(subgenres("hip-hop").contains(&"Boom Bap"));
    }

    #[test]
    fn display_labels_capitalize_the_key() {
        assert_eq!(display_label("pop"), "Pop");
        assert_eq!(display_label("r&b"), "R&b");
        assert_eq!(display_label(""), "");
    }
}
