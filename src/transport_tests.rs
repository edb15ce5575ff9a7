#[cfg(test)]
mod tests {
    use crate::error::TransportError;
    use crate::transport::{HttpTransport, WebhookTransport};
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    /// What the mock webhook saw
    struct Captured {
        head: String,
        body: String,
    }

    /// One-shot HTTP responder on a random local port
    struct MockWebhook {
        listener: TcpListener,
        port: u16,
    }

    impl MockWebhook {
        fn new() -> Self {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            let port = listener.local_addr().unwrap().port();
            Self { listener, port }
        }

        fn url(&self) -> String {
            format!("http://127.0.0.1:{}/hooks/abc", self.port)
        }

        /// Answer the first request with `status` and `body`
        fn respond(self, status: &'static str, body: &'static str) -> mpsc::Receiver<Captured> {
            let reply = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            self.respond_raw(reply)
        }

        /// Write `reply` verbatim to the first connection, then hang up
        fn respond_raw(self, reply: String) -> mpsc::Receiver<Captured> {
            let (tx, rx) = mpsc::channel();
            thread::spawn(move || {
                if let Ok((mut stream, _)) = self.listener.accept() {
                    stream.set_read_timeout(Some(Duration::from_secs(5))).ok();
                    let mut reader = BufReader::new(stream.try_clone().unwrap());

                    let mut head = String::new();
                    let mut content_length = 0usize;
                    loop {
                        let mut line = String::new();
                        if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                            break;
                        }
                        if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                            content_length = v.trim().parse().unwrap_or(0);
                        }
                        head.push_str(&line);
                    }

                    let mut buf = vec![0u8; content_length];
                    reader.read_exact(&mut buf).ok();

                    stream.write_all(reply.as_bytes()).ok();
                    stream.flush().ok();

                    tx.send(Captured {
                        head,
                        body: String::from_utf8_lossy(&buf).into_owned(),
                    })
                    .ok();
                }
            });
            rx
        }

        /// Accept the connection and never answer
        fn stall(self) {
            thread::spawn(move || {
                if let Ok((stream, _)) = self.listener.accept() {
                    thread::sleep(Duration::from_secs(3));
                    drop(stream);
                }
            });
        }
    }

    fn transport() -> HttpTransport {
        HttpTransport::new(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_post_returns_response_body() {
        let server = MockWebhook::new();
        let url = server.url();
        let seen = server.respond("200 OK", "ok");

        let response = transport()
            .post(&url, "payload= {\"a\":\"b%26c\"}".to_string())
            .await
            .unwrap();

        assert_eq!(response, b"ok");

        let captured = seen.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(captured.head.starts_with("POST /hooks/abc HTTP/1.1"));
        assert!(captured
            .head
            .to_ascii_lowercase()
            .contains("content-type: application/x-www-form-urlencoded"));
        assert!(captured.head.contains("nagios-mattermost/"));
        assert_eq!(captured.body, "payload= {\"a\":\"b%26c\"}");
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockWebhook::new();
        let url = server.url();
        let _seen = server.respond("400 Bad Request", "Unable to parse incoming data");

        let err = transport().post(&url, "payload= {}".to_string()).await.unwrap_err();

        match err {
            TransportError::Status { status, body } => {
                assert_eq!(status.as_u16(), 400);
                assert_eq!(body, "Unable to parse incoming data");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_truncated_error_body_keeps_status() {
        let server = MockWebhook::new();
        let url = server.url();
        // promises more body than it sends before closing
        let _seen = server.respond_raw(
            "HTTP/1.1 502 Bad Gateway\r\nContent-Length: 100\r\nConnection: close\r\n\r\npartial"
                .to_string(),
        );

        let err = transport().post(&url, "payload= {}".to_string()).await.unwrap_err();

        match err {
            TransportError::Status { status, body } => {
                assert_eq!(status.as_u16(), 502);
                assert!(body.is_empty());
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_a_connect_error() {
        let url = {
            let server = MockWebhook::new();
            server.url()
        };

        let err = transport().post(&url, "payload= {}".to_string()).await.unwrap_err();

        assert!(
            matches!(err, TransportError::Connect { .. }),
            "expected connect error, got {:?}",
            err
        );
        assert!(err.to_string().contains("could not connect"));
    }

    #[tokio::test]
    async fn test_slow_webhook_times_out() {
        let server = MockWebhook::new();
        let url = server.url();
        server.stall();

        let transport = HttpTransport::new(Duration::from_millis(300)).unwrap();
        let err = transport.post(&url, "payload= {}".to_string()).await.unwrap_err();

        assert!(
            matches!(err, TransportError::Timeout { .. }),
            "expected timeout, got {:?}",
            err
        );
        assert!(err.to_string().contains("within 300ms"), "{}", err);
    }

    #[tokio::test]
    async fn test_invalid_url_is_a_request_error() {
        let err = transport()
            .post("not a url", "payload= {}".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Request(_)));
    }
}
