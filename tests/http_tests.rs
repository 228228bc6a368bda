mod common;
use common::temp_out;
use paycode_portal::api::{Credentials, HttpApi, PaycodeEventApi, login};
use paycode_portal::core::SubmitLogic;
use paycode_portal::errors::AppError;
use paycode_portal::export::{ExportFormat, ExportLogic};
use paycode_portal::models::{PaycodeEvent, PaycodeRef};
use reqwest::blocking::Client;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

/// A request as the stub server saw it.
struct Received {
    method: String,
    path: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl Received {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Serve `responses` in order, one connection each, on a local port.
fn stub_server(responses: Vec<(u16, &'static str)>) -> (String, Receiver<Received>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for (status, body) in responses {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let received = read_request(&mut stream);
            let reply = format!(
                "HTTP/1.1 {status} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(reply.as_bytes()).ok();
            stream.flush().ok();
            if tx.send(received).is_err() {
                return;
            }
        }
    });

    (addr, rx)
}

fn read_request(stream: &mut TcpStream) -> Received {
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];

    let head_end = loop {
        let n = stream.read(&mut buf).unwrap();
        assert!(n > 0, "connection closed before headers");
        data.extend_from_slice(&buf[..n]);
        if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&data[..head_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next().unwrap_or_default().split(' ');
    let method = request_line.next().unwrap_or_default().to_string();
    let path = request_line.next().unwrap_or_default().to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|l| l.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    let length: usize = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse().ok())
        .unwrap_or(0);

    let mut body = data[head_end + 4..].to_vec();
    while body.len() < length {
        let n = stream.read(&mut buf).unwrap();
        if n == 0 {
            break;
        }
        body.extend_from_slice(&buf[..n]);
    }

    Received {
        method,
        path,
        headers,
        body: String::from_utf8_lossy(&body).to_string(),
    }
}

fn client() -> Client {
    Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap()
}

fn next(rx: &Receiver<Received>) -> Received {
    rx.recv_timeout(Duration::from_secs(10))
        .expect("stub server got no request")
}

fn event(id: Option<i64>) -> PaycodeEvent {
    PaycodeEvent {
        id,
        name: "Bank Holidays".into(),
        description: "UK".into(),
        paycode: PaycodeRef { id: 5 },
        schedules: Vec::new(),
    }
}

#[test]
fn test_crud_verbs_paths_and_headers() {
    let (addr, rx) = stub_server(vec![
        (201, r#"{"id":99}"#),
        (200, r#"{"id":7}"#),
        (200, ""),
    ]);
    // Trailing slash on the configured base is ignored.
    let api = HttpApi::new(
        client(),
        format!("{addr}/api/paycode_events/"),
        format!("{addr}/api/paycodes"),
        "tok-123",
    );

    let created = api.create(&event(None)).unwrap();
    assert_eq!(created.status, 201);
    assert_eq!(created.body, r#"{"id":99}"#);

    let post = next(&rx);
    assert_eq!(post.method, "POST");
    assert_eq!(post.path, "/api/paycode_events");
    assert_eq!(post.header("authorization"), Some("Bearer tok-123"));
    assert_eq!(post.header("accept"), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(&post.body).unwrap();
    assert!(body.get("id").is_none());
    assert_eq!(body["paycode"]["id"], 5);

    api.update(7, &event(Some(7))).unwrap();
    let put = next(&rx);
    assert_eq!(put.method, "PUT");
    assert_eq!(put.path, "/api/paycode_events/7");
    assert_eq!(put.header("authorization"), Some("Bearer tok-123"));
    let body: serde_json::Value = serde_json::from_str(&put.body).unwrap();
    assert_eq!(body["id"], 7);

    api.delete(3).unwrap();
    let delete = next(&rx);
    assert_eq!(delete.method, "DELETE");
    assert_eq!(delete.path, "/api/paycode_events/3");
}

#[test]
fn test_write_error_status_is_a_response() {
    let (addr, rx) = stub_server(vec![(500, r#"{"error":"boom"}"#)]);
    let api = HttpApi::new(client(), format!("{addr}/events"), format!("{addr}/codes"), "t");

    let outcomes = SubmitLogic::submit(&[event(None)], &api);
    next(&rx);

    assert_eq!(outcomes.len(), 1);
    assert!(!outcomes[0].success);
    assert_eq!(outcomes[0].http_status, Some(500));
    assert_eq!(outcomes[0].message.as_deref(), Some(r#"{"error":"boom"}"#));
}

#[test]
fn test_unreachable_server_has_no_status() {
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let base = format!("http://127.0.0.1:{port}/events");
    let api = HttpApi::new(client(), base.clone(), base, "t");

    let outcomes = SubmitLogic::submit(&[event(Some(4))], &api);

    assert!(!outcomes[0].success);
    assert_eq!(outcomes[0].http_status, None);
    assert!(outcomes[0].message.is_some());
}

#[test]
fn test_list_and_paycodes_lookup() {
    let (addr, rx) = stub_server(vec![
        (
            200,
            r#"[{"id":3,"name":"A","description":null,"paycode":{"id":5},"schedules":[]}]"#,
        ),
        (200, r#"[{"id":5,"code":"PH"}]"#),
    ]);
    let api = HttpApi::new(
        client(),
        format!("{addr}/api/paycode_events"),
        format!("{addr}/api/paycodes"),
        "t",
    );

    let events = api.list().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].description, "");
    let get = next(&rx);
    assert_eq!(get.method, "GET");
    assert_eq!(get.path, "/api/paycode_events");

    let paycodes = api.list_paycodes().unwrap();
    assert_eq!(paycodes[0].code, "PH");
    assert_eq!(next(&rx).path, "/api/paycodes");
}

#[test]
fn test_list_error_aborts_export() {
    let (addr, rx) = stub_server(vec![(503, "maintenance")]);
    let api = HttpApi::new(client(), format!("{addr}/events"), format!("{addr}/codes"), "t");
    let out = temp_out("http_list_error", "csv");

    let err = ExportLogic::export(&api, &ExportFormat::Csv, &out, true).unwrap_err();
    next(&rx);

    match err {
        AppError::Api { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!out.exists());
}

#[test]
fn test_login_password_grant() {
    let (addr, rx) = stub_server(vec![(
        200,
        r#"{"access_token":"abc","token_type":"bearer","expires_in":3600}"#,
    )]);

    let token = login(
        &client(),
        &format!("{addr}/oauth/token"),
        "Basic Y2xpZW50OnNlY3JldA==",
        &Credentials {
            username: "alice",
            password: "s3cret",
        },
    )
    .unwrap();

    assert_eq!(token.access_token, "abc");
    assert_eq!(token.expires_in, Some(3600));

    let req = next(&rx);
    assert_eq!(req.method, "POST");
    assert_eq!(req.path, "/oauth/token");
    assert_eq!(req.header("authorization"), Some("Basic Y2xpZW50OnNlY3JldA=="));
    assert_eq!(
        req.header("content-type"),
        Some("application/x-www-form-urlencoded")
    );

    let mut fields: Vec<&str> = req.body.split('&').collect();
    fields.sort();
    assert_eq!(
        fields,
        ["grant_type=password", "password=s3cret", "username=alice"]
    );
}

#[test]
fn test_login_rejected() {
    let (addr, rx) = stub_server(vec![(401, r#"{"error":"invalid_grant"}"#)]);

    let res = login(
        &client(),
        &format!("{addr}/oauth/token"),
        "Basic x",
        &Credentials {
            username: "alice",
            password: "wrong",
        },
    );
    next(&rx);

    assert!(matches!(res, Err(AppError::InvalidCredentials)));
}
