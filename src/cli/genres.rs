use tabled::Table;

use crate::types::GenreTableRow;

/// Genres offered for genre playlists.
pub const GENRE_LIST: [&str; 8] = [
    "Pop",
    "Rock",
    "Hip Hop/Rap",
    "Electronic/Dance",
    "Reggae",
    "Metal",
    "Dancehall",
    "Dubstep",
];

pub fn genres() {
    let rows: Vec<GenreTableRow> = GENRE_LIST
        .iter()
        .map(|genre| GenreTableRow {
            genre: genre.to_string(),
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}
