use heydj::slack::command_parser::{decode_url_component, parse_command_text, parse_form_data};

#[test]
fn test_decode_url_component() {
    assert_eq!(decode_url_component("hello%20world"), "hello world");
    assert_eq!(decode_url_component("hello+world"), "hello world");
    assert_eq!(
        decode_url_component("test%40example.com%26param%3Dvalue"),
        "test@example.com&param=value"
    );
    // An encoded plus stays a plus.
    assert_eq!(decode_url_component("AC%2FDC+%2B+friends"), "AC/DC + friends");
}

#[test]
fn test_decode_url_component_replaces_invalid_utf8() {
    assert_eq!(decode_url_component("caf%E9"), "caf\u{FFFD}");
    assert_eq!(decode_url_component("%FF%FE"), "\u{FFFD}\u{FFFD}");
}

#[test]
fn test_parse_form_data_survives_latin1_text() {
    let event = parse_form_data("token=abc123&text=heydj+request+caf%E9+by+x&user_name=alice");

    assert_eq!(event.token.as_deref(), Some("abc123"));
    assert_eq!(event.text, "heydj request caf\u{FFFD} by x");
    assert_eq!(event.user_name, "alice");
}

#[test]
fn test_parse_form_data_success() {
    let form_data = "channel_id=C123&channel_name=music&service_id=B42&\
                     team_domain=example&team_id=T123&\
                     text=heydj+request+testing+1234&timestamp=1540930044.021500&\
                     token=yourslacktoken&trigger_word=heydj&user_id=U123&user_name=alice";

    let event = parse_form_data(form_data);

    assert_eq!(event.token.as_deref(), Some("yourslacktoken"));
    assert_eq!(event.trigger_word.as_deref(), Some("heydj"));
    assert_eq!(event.channel_name, "music");
    assert_eq!(event.service_id, "B42");
    assert_eq!(event.timestamp, "1540930044.021500");
    assert_eq!(event.text, "heydj request testing 1234");
    assert_eq!(event.user_name, "alice");
}

#[test]
fn test_parse_form_data_missing_fields() {
    let event = parse_form_data("team_id=T123&junk&user_name=bob");

    assert_eq!(event.token, None);
    assert_eq!(event.trigger_word, None);
    assert_eq!(event.team_id, "T123");
    assert_eq!(event.user_name, "bob");
    assert_eq!(event.text, "");
}

#[test]
fn test_parse_command_text_from_form() {
    let event = parse_form_data("text=heydj+request+stand+by+REM");
    let parsed = parse_command_text(&event.text).unwrap();

    assert_eq!(parsed.trigger, "heydj");
    assert_eq!(parsed.command, "request");
    assert_eq!(parsed.arg.as_deref(), Some("stand by REM"));
}
