//! Package-metadata document (`content.opf`) parsing.
//!
//! The OPF carries title, author, subject, contributor and date metadata.
//! Every value sits on its own line, so fields are found by marker
//! substring rather than by walking the XML tree.

use reqwest::blocking::Client;

use crate::config::content_opf_url;
use crate::extract::{reformat_time_string, strip_and_remove_tags};
use crate::http::fetch_document;
use crate::types::{BookRecord, Field};

/// Marker substrings, checked per line in this order. The first marker found
/// on a line decides the field that line populates.
pub const OPF_MARKERS: [(Field, &str); 8] = [
    (Field::Title, r##"meta property="file-as" refines="#title"##),
    (Field::SeSubject, r#"meta property="se:subject""#),
    (Field::Description, r#"dc:description id="description""#),
    (Field::Author, r##"meta property="file-as" refines="#author""##),
    (Field::Artist, r#"dc:contributor id="artist""#),
    (Field::Producer, r##"meta property="file-as" refines="#producer-1""##),
    (Field::PubDate, "<dc:date>"),
    (Field::RevDate, r#"meta property="dcterms:modified""#),
];

/// Parse OPF text into a record. Painting is left empty.
///
/// Fields without a matching line stay empty. When a marker occurs on
/// several lines the first one is used.
///
/// # Examples
/// ```
/// use se_corpus::opf::parse_opf;
///
/// let opf = r#"<meta property="dcterms:modified">2021-05-12T22:13:51Z</meta>"#;
/// let record = parse_opf(opf);
/// assert_eq!(record.rev_date, "2021-05-12");
/// assert_eq!(record.title, "");
/// ```
#[must_use]
pub fn parse_opf(text: &str) -> BookRecord {
    let mut record = BookRecord::default();
    let mut found: Vec<Field> = Vec::with_capacity(OPF_MARKERS.len());

    for line in text.lines() {
        let Some((field, _)) = OPF_MARKERS.iter().find(|(_, marker)| line.contains(marker))
        else {
            continue;
        };
        if found.contains(field) {
            continue;
        }

        let value = strip_and_remove_tags(line);
        let value = if field.is_date() {
            reformat_time_string(&value)
        } else {
            value
        };
        record.set(*field, value);
        found.push(*field);
    }

    record
}

/// Download a repository's OPF. Missing documents yield an empty string.
pub fn download_opf(client: &Client, repo_url: &str) -> String {
    match fetch_document(client, &content_opf_url(repo_url)) {
        Some(text) => {
            tracing::trace!(repo = repo_url, "found content.opf");
            text
        }
        None => {
            tracing::info!(repo = repo_url, "no content.opf found");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE_OPF: &str = r##"<?xml version="1.0" encoding="utf-8"?>
<package xmlns="http://www.idpf.org/2007/opf" dir="ltr" prefix="se: https://standardebooks.org/vocab/1.0" unique-identifier="uid" version="3.0" xml:lang="en-GB">
	<metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
		<dc:identifier id="uid">url:https://standardebooks.org/ebooks/jane-austen/emma</dc:identifier>
		<dc:date>2014-11-14T00:00:00Z</dc:date>
		<meta property="dcterms:modified">2021-05-12T22:13:51Z</meta>
		<dc:title id="title">Emma</dc:title>
		<meta property="file-as" refines="#title">Emma</meta>
		<dc:subject id="subject-1">Bildungsromans</dc:subject>
		<meta property="se:subject">Fiction</meta>
		<meta property="se:subject">Romance</meta>
		<dc:description id="description">A wealthy young woman meddles in the romantic lives of her friends.</dc:description>
		<dc:creator id="author">Jane Austen</dc:creator>
		<meta property="file-as" refines="#author">Austen, Jane</meta>
		<dc:contributor id="artist">John Constable</dc:contributor>
		<meta property="file-as" refines="#artist">Constable, John</meta>
		<dc:contributor id="producer-1">Ramon Alvarez</dc:contributor>
		<meta property="file-as" refines="#producer-1">Alvarez, Ramon</meta>
	</metadata>
</package>
"##;

    #[test]
    fn test_parse_opf_all_fields() {
        let record = parse_opf(SAMPLE_OPF);

        assert_eq!(record.title, "Emma");
        assert_eq!(record.author, "Austen, Jane");
        assert_eq!(record.se_subject, "Fiction");
        assert_eq!(record.artist, "John Constable");
        assert_eq!(record.producer, "Alvarez, Ramon");
        assert_eq!(record.pub_date, "2014-11-14");
        assert_eq!(record.rev_date, "2021-05-12");
        assert_eq!(
            record.description,
            "A wealthy young woman meddles in the romantic lives of her friends."
        );
        assert_eq!(record.painting, "");
    }

    #[test]
    fn test_parse_opf_one_line_per_marker() {
        let cases = [
            (
                Field::Title,
                r##"<meta property="file-as" refines="#title">Red House Mystery, The</meta>"##,
                "Red House Mystery, The",
            ),
            (
                Field::SeSubject,
                r#"<meta property="se:subject">Mystery</meta>"#,
                "Mystery",
            ),
            (
                Field::Description,
                r#"<dc:description id="description">A locked-room mystery.</dc:description>"#,
                "A locked-room mystery.",
            ),
            (
                Field::Author,
                r##"<meta property="file-as" refines="#author">Milne, A. A.</meta>"##,
                "Milne, A. A.",
            ),
            (
                Field::Artist,
                r#"<dc:contributor id="artist">Gustave Caillebotte</dc:contributor>"#,
                "Gustave Caillebotte",
            ),
            (
                Field::Producer,
                r##"<meta property="file-as" refines="#producer-1">Fitzgerald, Robin</meta>"##,
                "Fitzgerald, Robin",
            ),
            (
                Field::PubDate,
                "<dc:date>2020-07-19T17:53:19Z</dc:date>",
                "2020-07-19",
            ),
            (
                Field::RevDate,
                r#"<meta property="dcterms:modified">2021-05-12T22:13:51Z</meta>"#,
                "2021-05-12",
            ),
        ];

        for (field, line, expected) in cases {
            let record = parse_opf(&format!("\t\t{line}\n"));
            assert_eq!(record.get(field), expected, "field {field:?}");
            for other in Field::ALL.iter().filter(|f| **f != field) {
                assert_eq!(record.get(*other), "", "field {other:?} for line {line}");
            }
        }
    }

    #[test]
    fn test_parse_opf_empty_document() {
        assert_eq!(parse_opf(""), BookRecord::default());
    }

    #[test]
    fn test_parse_opf_first_subject_wins() {
        let opf = "<meta property=\"se:subject\">Fiction</meta>\n\
                   <meta property=\"se:subject\">Satire</meta>";
        assert_eq!(parse_opf(opf).se_subject, "Fiction");
    }

    #[test]
    fn test_parse_opf_title_marker_does_not_match_author() {
        let opf = r##"<meta property="file-as" refines="#author">Milne, A. A.</meta>"##;
        let record = parse_opf(opf);
        assert_eq!(record.author, "Milne, A. A.");
        assert_eq!(record.title, "");
    }

}
