mod common;
use chrono::{Local, TimeZone, Timelike};
use common::line;
use rloggap::core::parser::{LineParser, truncate_message};
use rloggap::errors::ParseFailure;

#[test]
fn test_parse_valid_line() {
    let parser = LineParser::new(10000);
    let e = parser
        .parse_line(&line("10:00:03.500", "app.db.Pool", "95", "query finished"))
        .expect("valid line");

    let expected = Local
        .with_ymd_and_hms(2024, 1, 15, 10, 0, 3)
        .single()
        .unwrap()
        .with_nanosecond(500_000_000)
        .unwrap();

    assert_eq!(e.timestamp, expected);
    assert_eq!(e.caller, "app.db.Pool");
    assert_eq!(e.line_no, "95");
    assert_eq!(e.message, "query finished");
}

#[test]
fn test_parse_leading_spaces_and_single_digit_day() {
    let parser = LineParser::new(10000);
    let e = parser
        .parse_line("   Mar 5, 2024 @ 09:15:00.042 Main 7 : started : ok")
        .expect("valid line");

    assert_eq!(e.timestamp.format("%Y-%m-%d %H:%M:%S%.3f").to_string(), "2024-03-05 09:15:00.042");
    assert_eq!(e.caller, "Main");
    assert_eq!(e.line_no, "7");
    // only the first " : " separates the message
    assert_eq!(e.message, "started : ok");
}

#[test]
fn test_parse_no_match() {
    let parser = LineParser::new(10000);

    for bad in [
        "just some text",
        "Jan 15, 2024 10:00:00.000 app.Main 1 : missing separator",
        "Jan 15, 2024 @ 10:00:00.000 app.Main : no line number",
        "Jan 15, 2024 @ 10:00:00 app.Main 1 : no millis",
    ] {
        assert_eq!(parser.parse_line(bad), Err(ParseFailure::NoMatch), "{bad}");
    }
}

#[test]
fn test_parse_invalid_timestamp() {
    let parser = LineParser::new(10000);

    let unknown_month = parser.parse_line("Foo 15, 2024 @ 10:00:00.000 app.Main 1 : x");
    assert!(matches!(unknown_month, Err(ParseFailure::InvalidTimestamp(_))));

    let bad_hour = parser.parse_line("Jan 15, 2024 @ 25:00:00.000 app.Main 1 : x");
    assert!(matches!(bad_hour, Err(ParseFailure::InvalidTimestamp(_))));

    let long_millis = parser.parse_line("Jan 15, 2024 @ 10:00:00.0001 app.Main 1 : x");
    assert!(matches!(long_millis, Err(ParseFailure::InvalidTimestamp(_))));

    // the year must have exactly four digits
    for short_year in [
        "Jan 15, 24 @ 10:00:00.000 app.Main 1 : x",
        "Jan 15, 12024 @ 10:00:00.000 app.Main 1 : x",
    ] {
        assert!(parser.parse_line(short_year).is_err(), "{short_year}");
    }
}

#[test]
fn test_parse_rejects_non_ascii_fields() {
    let parser = LineParser::new(10000);

    let arabic_digits = line("10:00:00.000", "app.Main", "\u{664}\u{662}", "x");
    assert_eq!(parser.parse_line(&arabic_digits), Err(ParseFailure::NoMatch));

    let accented_caller = line("10:00:00.000", "app.\u{dc}ber", "1", "x");
    assert_eq!(parser.parse_line(&accented_caller), Err(ParseFailure::NoMatch));

    // non-ASCII text is fine inside the message
    let e = parser
        .parse_line(&line("10:00:00.000", "app.Main", "1", "Über ٤٢"))
        .expect("valid line");
    assert_eq!(e.message, "Über ٤٢");
}

#[test]
fn test_message_truncation_keeps_max_plus_one() {
    let parser = LineParser::new(5);

    let long = parser
        .parse_line(&line("10:00:00.000", "app.Main", "1", "abcdefghij"))
        .unwrap();
    assert_eq!(long.message, "abcdef");

    let exact = parser
        .parse_line(&line("10:00:00.000", "app.Main", "1", "abcde"))
        .unwrap();
    assert_eq!(exact.message, "abcde");

    let one_over = parser
        .parse_line(&line("10:00:00.000", "app.Main", "1", "abcdef"))
        .unwrap();
    assert_eq!(one_over.message, "abcdef");
}

#[test]
fn test_truncation_counts_code_points() {
    assert_eq!(truncate_message("héllo wörld", 3), "héll");
    assert_eq!(truncate_message("日本語のログ", 2), "日本語");
    assert_eq!(truncate_message("日本", 2), "日本");
    assert_eq!(truncate_message("", 0), "");
    assert_eq!(truncate_message("abc", usize::MAX), "abc");
}

#[test]
fn test_parse_all_skips_bad_and_empty_lines() {
    let parser = LineParser::new(10000);
    let content = format!(
        "{}\r\n\nnot a log line\n{}\n",
        line("10:00:03.500", "app.db.Pool", "95", "query finished"),
        line("10:00:00.500", "app.db.Pool", "88", "query started"),
    );

    let parsed = parser.parse_all(&content);

    assert_eq!(parsed.entries.len(), 2);
    assert_eq!(parsed.skipped, 1);
    assert_eq!(parsed.entries[0].message, "query finished");
    assert_eq!(parsed.entries[1].line_no, "88");
}

#[test]
fn test_parse_all_keeps_input_order() {
    let parser = LineParser::new(10000);
    let parsed = parser.parse_all(&common::ascending_trace());

    let lines: Vec<&str> = parsed.entries.iter().map(|e| e.line_no.as_str()).collect();
    assert_eq!(lines, ["10", "88", "95"]);
}
