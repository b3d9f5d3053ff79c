//! Integration tests for loading ratings exports from disk.

use chrono::NaiveDate;
use data_loader::{DataLoadError, DateColumn, Encoding, LoadOptions, load, parse_str};
use indoc::indoc;
use std::io::Write;
use tempfile::NamedTempFile;

const EXPORT: &str = indoc! {r#"
    Const,Your Rating,Date Rated,Title,URL,Title Type,IMDb Rating,Runtime (mins),Year,Genres,Num Votes,Release Date,Directors
    tt0113277,9,2021-03-14,Heat,https://www.imdb.com/title/tt0113277/,movie,8.3,170,1995,"Action, Crime, Drama",700000,1995-12-15,Michael Mann
    tt0211915,8,2020-07-01,"Fabuleux destin d'Amélie Poulain, Le",https://www.imdb.com/title/tt0211915/,movie,8.3,122,2001,"Comedy, Romance",750000,2001-04-25,Jean-Pierre Jeunet
    tt0903747,10,2019-11-02,Breaking Bad,https://www.imdb.com/title/tt0903747/,tvSeries,9.5,49,2008,"Crime, Drama, Thriller",2000000,2008-01-20,
"#};

fn write_latin1(content: &str) -> NamedTempFile {
    let bytes: Vec<u8> = content
        .chars()
        .map(|c| u8::try_from(u32::from(c)).expect("test fixture must be Latin-1"))
        .collect();
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&bytes).unwrap();
    file
}

#[test]
fn test_load_latin1_export() {
    let file = write_latin1(EXPORT);
    let records = load(file.path(), LoadOptions::default()).unwrap();

    assert_eq!(records.len(), 3);

    assert_eq!(records[0].title, "Heat");
    assert_eq!(records[0].rating, 9);
    assert_eq!(records[0].date, NaiveDate::from_ymd_opt(1995, 12, 15).unwrap());
    assert_eq!(records[0].genres, vec!["Action", "Crime", "Drama"]);
    assert_eq!(records[0].title_type.as_deref(), Some("movie"));

    // Quoted title with an embedded comma and a Latin-1 character
    assert_eq!(records[1].title, "Fabuleux destin d'Amélie Poulain, Le");
    assert_eq!(records[2].title_type.as_deref(), Some("tvSeries"));
}

#[test]
fn test_load_with_rating_date() {
    let file = write_latin1(EXPORT);
    let options = LoadOptions::default().with_date_column(DateColumn::DateRated);
    let records = load(file.path(), options).unwrap();

    assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2021, 3, 14).unwrap());
    assert_eq!(records[2].year(), 2019);
}

#[test]
fn test_round_trip_fields() {
    let file = write_latin1(EXPORT);
    let records = load(file.path(), LoadOptions::default()).unwrap();

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["Title", "Your Rating", "Release Date", "Genres"])
        .unwrap();
    for record in &records {
        writer
            .write_record([
                record.title.clone(),
                record.rating.to_string(),
                record.date.format("%Y-%m-%d").to_string(),
                record.genres.join(", "),
            ])
            .unwrap();
    }
    let serialized = String::from_utf8(writer.into_inner().unwrap()).unwrap();

    let reparsed = parse_str(&serialized, LoadOptions::default()).unwrap();
    assert_eq!(reparsed.len(), records.len());
    for (original, again) in records.iter().zip(&reparsed) {
        assert_eq!(original.title, again.title);
        assert_eq!(original.rating, again.rating);
        assert_eq!(original.date, again.date);
        assert_eq!(original.genres, again.genres);
    }
}

#[test]
fn test_column_order_is_not_assumed() {
    let content = indoc! {"
        Genres,Release Date,Title,Your Rating
        Drama,1994-09-23,The Shawshank Redemption,10
    "};
    let records = parse_str(content, LoadOptions::default()).unwrap();

    assert_eq!(records[0].title, "The Shawshank Redemption");
    assert_eq!(records[0].rating, 10);
    assert_eq!(records[0].title_type, None);
}

#[test]
fn test_missing_file() {
    let err = load(
        std::path::Path::new("/definitely/not/here/ratings.csv"),
        LoadOptions::default(),
    )
    .unwrap_err();

    match err {
        DataLoadError::FileNotFound { path } => {
            assert_eq!(path, "/definitely/not/here/ratings.csv")
        }
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn test_missing_required_column() {
    let content = indoc! {"
        Title,Your Rating,Genres
        Heat,9,Crime
    "};
    let err = parse_str(content, LoadOptions::default()).unwrap_err();

    assert!(matches!(
        err,
        DataLoadError::MissingColumn { ref column } if column == "Release Date"
    ));
}

#[test]
fn test_rating_out_of_range_names_row() {
    let content = indoc! {"
        Title,Your Rating,Release Date,Genres
        Heat,9,1995-12-15,Crime
        Cats,0,2019-12-20,Musical
    "};
    let err = parse_str(content, LoadOptions::default()).unwrap_err();

    match err {
        DataLoadError::ParseError { line, field, .. } => {
            assert_eq!(line, 3);
            assert_eq!(field, "Your Rating");
        }
        other => panic!("expected ParseError, got {other:?}"),
    }
}

#[test]
fn test_invalid_date_is_rejected() {
    let content = indoc! {"
        Title,Your Rating,Release Date,Genres
        Heat,9,15/12/1995,Crime
    "};
    let err = parse_str(content, LoadOptions::default()).unwrap_err();

    assert!(matches!(
        err,
        DataLoadError::ParseError { line: 2, ref field, .. } if field == "Release Date"
    ));
}

#[test]
fn test_empty_genres_field() {
    let content = indoc! {r#"
        Title,Your Rating,Release Date,Genres
        Short Film,6,2010-01-01,""
    "#};
    let records = parse_str(content, LoadOptions::default()).unwrap();

    assert!(records[0].genres.is_empty());
}

#[test]
fn test_header_only_file() {
    let records = parse_str("Title,Your Rating,Release Date,Genres\n", LoadOptions::default())
        .unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_load_utf8_export_with_bom() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all("\u{feff}".as_bytes()).unwrap();
    file.write_all(EXPORT.as_bytes()).unwrap();

    let records = load(file.path(), LoadOptions::default().with_encoding(Encoding::Utf8)).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[1].title, "Fabuleux destin d'Amélie Poulain, Le");
}

#[test]
fn test_invalid_utf8_is_reported() {
    let file = write_latin1(EXPORT);

    let err = load(file.path(), LoadOptions::default().with_encoding(Encoding::Utf8)).unwrap_err();

    assert!(matches!(err, DataLoadError::Encoding { .. }));
}
