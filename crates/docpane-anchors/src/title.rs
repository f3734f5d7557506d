/// Strip the trailing anchor hint from a table of contents title.
///
/// Titles arrive as `"NRQL query examples #examples"`. The title is split on
/// single spaces, the last piece is dropped and the rest is rejoined, so runs
/// of spaces are preserved and a trailing space counts as an empty hint. A
/// title with one word or none yields an empty string.
#[must_use]
pub fn strip_disambiguator(title: &str) -> String {
    let pieces: Vec<&str> = title.split(' ').collect();
    match pieces.split_last() {
        Some((_, rest)) => rest.join(" "),
        None => String::new(),
    }
}
