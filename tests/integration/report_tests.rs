//! Plain-text report rendering over parsed captures

use libscrape::report::{self, ReportStyle};

use crate::common::{date, parse_fixture};

#[test]
fn test_toronto_holds_plain_report() {
    let (capture, items) = parse_fixture("toronto_holds.json");
    let text = report::holds_report(capture.system, date(2021, 12, 30), &items, &ReportStyle::Plain);

    assert_eq!(
        text,
        "\nToronto Public Library HOLDS (2021-12-30):\n\
         1. Modern Java in action : lambda, streams, functional and reactive programming (Book) \
         by Urma, Raoul-Gabriel | Ready | Thu 6 Jan | North York Central Library\n"
    );
}

#[test]
fn test_durham_checkouts_plain_report() {
    let (capture, items) = parse_fixture("durham_checkouts.json");
    let text = report::report(
        capture.system,
        capture.kind,
        date(2022, 1, 5),
        &items,
        &ReportStyle::Plain,
    );

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "Pickering Public Library CHECKOUTS (2022-01-05):");
    assert_eq!(lines[2], "1. The Defining Decade (Book) by Jay, Meg | Due Later | Nov. 03, 2021");
    assert_eq!(lines[6], "5. Nature (DVD) | Due Later | Oct. 20, 2021");
    assert_eq!(lines.len(), 2 + items.len());
}

#[test]
fn test_doc_style_replaces_listing() {
    let (capture, items) = parse_fixture("durham_holds.json");
    let text = report::holds_report(
        capture.system,
        date(2022, 1, 13),
        &items,
        &ReportStyle::Doc("1AbCdEf".to_string()),
    );

    assert!(text.starts_with("\nWhitby Public Library HOLDS (2022-01-13):\n"));
    assert!(text.ends_with("https://docs.google.com/document/d/1AbCdEf"));
    assert!(!text.contains("Why Do We Fight?"));
}
