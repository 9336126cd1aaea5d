use credits_roll::core::{Column, Markup, Piece};

fn texts(pieces: &[Piece]) -> Vec<(&str, bool, Column)> {
    pieces
        .iter()
        .map(|p| (p.text.as_str(), p.underline, p.column))
        .collect()
}

#[test]
fn split_marker_makes_two_columns() {
    let pieces = Markup::default().parse("A\\Icaro");
    assert_eq!(
        texts(&pieces),
        vec![("A", false, Column::Left), ("Icaro", false, Column::Right)]
    );
}

#[test]
fn emphasis_is_stripped_and_underlined() {
    let pieces = Markup::default().parse("_Developed by_\\Aeroli.to");
    assert_eq!(
        texts(&pieces),
        vec![
            ("Developed by", true, Column::Left),
            ("Aeroli.to", false, Column::Right),
        ]
    );
}

#[test]
fn line_without_marker_is_centered() {
    let pieces = Markup::default().parse("REVERSE PAC-MAN");
    assert_eq!(texts(&pieces), vec![("REVERSE PAC-MAN", false, Column::Centered)]);
}

#[test]
fn parsing_is_repeatable() {
    let text = "REVERSE PAC-MAN\n_      _\n\n_Lead programmer_\\Icaro\n\\right only\nleft only\\";
    let m = Markup::default();
    assert_eq!(m.parse(text), m.parse(text));
}

#[test]
fn pieces_come_out_line_then_column() {
    let text = "a\\b\n\nc\n_d_\\e";
    let pieces = Markup::default().parse(text);
    let order: Vec<(usize, &str)> = pieces.iter().map(|p| (p.line, p.text.as_str())).collect();
    assert_eq!(order, vec![(0, "a"), (0, "b"), (2, "c"), (3, "d"), (3, "e")]);
}

#[test]
fn windows_line_endings() {
    let pieces = Markup::default().parse("one\r\ntwo\\2\r\n");
    assert_eq!(
        texts(&pieces),
        vec![
            ("one", false, Column::Centered),
            ("two", false, Column::Left),
            ("2", false, Column::Right),
        ]
    );
}

#[test]
fn undecodable_bytes_still_parse() {
    let pieces = Markup::default().parse_bytes(b"\xff\xfe\\ok");
    assert_eq!(pieces.len(), 2);
    assert_eq!(pieces[0].text, "ÿþ");
    assert_eq!(pieces[1].text, "ok");
}
