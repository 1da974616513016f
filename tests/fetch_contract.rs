//! Behaviour shared by every joke source: status handling, headers and
//! the stage each failure is attributed to.

use jokecli::{
    fetch_chuck_norris_joke, fetch_dad_joke, fetch_joke, ChuckNorrisJoke, FetchError, JokeKind,
    ScriptedTransport, TransportError, TransportResponse, CHUCK_NORRIS, DAD_JOKES,
};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use std::io::{self, Read};

/// Body stream that breaks after the first few bytes.
struct BrokenBody {
    sent: bool,
}

impl Read for BrokenBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.sent {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            ));
        }
        self.sent = true;
        let chunk = br#"{"id":"#;
        buf[..chunk.len()].copy_from_slice(chunk);
        Ok(chunk.len())
    }
}

fn fetch_kind(kind: JokeKind, transport: &ScriptedTransport) -> Result<String, FetchError> {
    kind.fetch_text(transport)
}

#[test]
fn test_non_ok_status_is_reported_with_exact_code() {
    let statuses = [
        StatusCode::CREATED,
        StatusCode::NO_CONTENT,
        StatusCode::MOVED_PERMANENTLY,
        StatusCode::NOT_FOUND,
        StatusCode::TOO_MANY_REQUESTS,
        StatusCode::INTERNAL_SERVER_ERROR,
        StatusCode::SERVICE_UNAVAILABLE,
    ];

    for kind in JokeKind::ALL {
        for status in statuses {
            // Body is valid for both shapes; it must still be ignored.
            let transport = ScriptedTransport::replying(
                status,
                r#"{"id":"1","value":"X","joke":"Y","url":"","status":200}"#,
            );

            let err = fetch_kind(kind, &transport).unwrap_err();

            assert_eq!(err.status(), Some(status.as_u16()), "{kind} {status}");
        }
    }
}

#[test]
fn test_malformed_body_at_error_status_is_not_a_decode_error() {
    for kind in JokeKind::ALL {
        let transport = ScriptedTransport::replying(StatusCode::BAD_GATEWAY, "<html>oops");

        let err = fetch_kind(kind, &transport).unwrap_err();

        assert!(
            matches!(err, FetchError::UnexpectedStatus { status: 502, .. }),
            "{kind}: {err}"
        );
    }
}

#[test]
fn test_server_error_message_names_source_and_code() {
    for kind in JokeKind::ALL {
        let transport = ScriptedTransport::replying(StatusCode::INTERNAL_SERVER_ERROR, "boom");

        let message = fetch_kind(kind, &transport).unwrap_err().to_string();

        assert!(message.contains("500"), "{message}");
        assert!(message.contains(kind.source().name), "{message}");
    }
}

#[test]
fn test_invalid_json_identifies_decode_failure() {
    for kind in JokeKind::ALL {
        let transport = ScriptedTransport::replying(StatusCode::OK, "invalid json");

        let err = fetch_kind(kind, &transport).unwrap_err();

        assert!(matches!(err, FetchError::Decode { .. }), "{kind}: {err}");
        assert!(err.to_string().contains("failed to parse"));
        assert_eq!(err.joke_source(), &kind.source());
    }
}

#[test]
fn test_wrong_json_type_is_a_decode_error() {
    let transport = ScriptedTransport::replying(StatusCode::OK, r#"["not", "an", "object"]"#);

    let err = fetch_chuck_norris_joke(&transport).unwrap_err();

    assert!(matches!(err, FetchError::Decode { .. }));
}

#[test]
fn test_missing_fields_decode_to_defaults() {
    let transport = ScriptedTransport::replying(StatusCode::OK, r#"{"joke":"Y"}"#);

    let joke = fetch_dad_joke(&transport).unwrap();

    assert_eq!(joke.id, "");
    assert_eq!(joke.joke, "Y");
    assert_eq!(joke.status, 0);
}

#[test]
fn test_null_fields_decode_to_defaults() {
    let transport =
        ScriptedTransport::replying(StatusCode::OK, r#"{"id":null,"value":"X","url":null}"#);

    let joke = fetch_chuck_norris_joke(&transport).unwrap();

    assert_eq!(
        joke,
        ChuckNorrisJoke {
            id: String::new(),
            value: "X".to_string(),
            url: String::new(),
        }
    );

    let transport =
        ScriptedTransport::replying(StatusCode::OK, r#"{"id":"1","joke":"Y","status":null}"#);

    let joke = fetch_dad_joke(&transport).unwrap();

    assert_eq!(joke.joke, "Y");
    assert_eq!(joke.status, 0);
}

#[test]
fn test_transport_failure_keeps_original_cause() {
    for kind in JokeKind::ALL {
        let transport = ScriptedTransport::failing("connection refused");

        let err = fetch_kind(kind, &transport).unwrap_err();

        match &err {
            FetchError::Transport { cause, .. } => {
                assert_eq!(cause.to_string(), "connection refused");
            }
            other => panic!("expected transport failure, got {other:?}"),
        }
        assert!(err.to_string().contains("connection refused"));
    }
}

#[test]
fn test_broken_body_stream_is_a_read_error() {
    let transport = ScriptedTransport::new(|_| {
        Ok(TransportResponse::new(
            StatusCode::OK,
            BrokenBody { sent: false },
        ))
    });

    let err = fetch_dad_joke(&transport).unwrap_err();

    assert!(matches!(err, FetchError::BodyRead { .. }), "{err}");
    assert_eq!(
        err.to_string(),
        "failed to read dad joke response: connection reset by peer"
    );
}

#[test]
fn test_every_request_carries_required_headers() {
    for kind in JokeKind::ALL {
        let transport = ScriptedTransport::replying(StatusCode::OK, "{}");

        fetch_kind(kind, &transport).unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.header("accept"), Some("application/json"));
        let agent = request.header("user-agent").unwrap_or_default();
        assert!(!agent.is_empty(), "{kind} sent no User-Agent");
    }
}

#[test]
fn test_unbuildable_endpoint_fails_before_any_request() {
    let transport = ScriptedTransport::replying(StatusCode::OK, "{}");
    let source = CHUCK_NORRIS.with_endpoint("not a url");

    let err = fetch_joke::<ChuckNorrisJoke, _>(&transport, &source).unwrap_err();

    assert!(matches!(err, FetchError::RequestConstruction { .. }), "{err}");
    assert!(transport.requests().is_empty());
}

#[test]
fn test_one_transport_serves_both_sources() {
    let transport = ScriptedTransport::new(|req| {
        let body = match req.url().host_str() {
            Some("api.chucknorris.io") => r#"{"id":"c","value":"fact","url":""}"#,
            Some("icanhazdadjoke.com") => r#"{"id":"d","joke":"pun","status":200}"#,
            _ => return Err(TransportError::new("unknown host")),
        };
        Ok(TransportResponse::from_text(StatusCode::OK, body))
    });

    assert_eq!(fetch_chuck_norris_joke(&transport).unwrap().value, "fact");
    assert_eq!(fetch_dad_joke(&transport).unwrap().joke, "pun");

    let hosts: Vec<String> = transport
        .requests()
        .iter()
        .filter_map(|r| r.url.host_str().map(str::to_owned))
        .collect();
    assert_eq!(hosts, vec!["api.chucknorris.io", "icanhazdadjoke.com"]);

    let offline = DAD_JOKES.with_endpoint("https://example.invalid/");
    let err = fetch_joke::<jokecli::DadJoke, _>(&transport, &offline).unwrap_err();
    assert!(matches!(err, FetchError::Transport { .. }));
}
