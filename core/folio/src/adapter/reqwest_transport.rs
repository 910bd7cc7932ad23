//! reqwest（blocking）による HttpTransport 実装

use crate::domain::RemoteError;
use crate::ports::outbound::{HttpTransport, Method, RawResponse};
use common::domain::BaseUrl;
use serde_json::Value;

pub struct ReqwestTransport {
    base_url: BaseUrl,
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&Value>,
        bearer: Option<&str>,
    ) -> Result<RawResponse, RemoteError> {
        let url = self.base_url.join(endpoint);
        let mut builder = match method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Put => self.client.put(&url),
            Method::Delete => self.client.delete(&url),
        }
        .header("Content-Type", "application/json");

        if let Some(token) = bearer {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(b) = body {
            builder = builder.body(b.to_string());
        }

        let response = builder
            .send()
            .map_err(|e| RemoteError::Network(format!("{} {}: {}", method.as_str(), url, e)))?;
        let status = response.status().as_u16();
        let text = response
            .text()
            .map_err(|e| RemoteError::Network(format!("Failed to read response: {}", e)))?;
        Ok(RawResponse::new(status, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    /// 1 接続だけ受け付けて固定の応答を返し、受信したリクエストを返すサーバー
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = format!("http://{}", listener.local_addr().unwrap());
        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut head = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = v.trim().parse().unwrap();
                }
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                head.push_str(&line);
            }
            let mut req_body = vec![0u8; content_length];
            reader.read_exact(&mut req_body).unwrap();
            let mut stream = stream;
            write!(
                stream,
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            )
            .unwrap();
            stream.flush().unwrap();
            format!("{}\r\n{}", head, String::from_utf8_lossy(&req_body))
        });
        (addr, handle)
    }

    #[test]
    fn test_public_get_without_bearer() {
        let (addr, handle) = serve_once("200 OK", r#"[{"_id":"1","title":"X"}]"#);
        let t = ReqwestTransport::new(BaseUrl::new(addr));
        let res = t.send(Method::Get, "/api/projects", None, None).unwrap();
        assert_eq!(res.status, 200);
        assert!(res.body.contains("\"X\""));
        let request = handle.join().unwrap();
        assert!(request.starts_with("GET /api/projects HTTP/1.1"));
        assert!(!request.to_ascii_lowercase().contains("authorization"));
    }

    #[test]
    fn test_post_sends_json_and_bearer() {
        let (addr, handle) = serve_once("201 Created", r#"{"_id":"abc"}"#);
        let t = ReqwestTransport::new(BaseUrl::new(format!("{}/", addr)));
        let body = serde_json::json!({"title": "Foo"});
        let res = t
            .send(Method::Post, "/api/projects", Some(&body), Some("tok"))
            .unwrap();
        assert_eq!(res.status, 201);
        let request = handle.join().unwrap();
        assert!(request.starts_with("POST /api/projects HTTP/1.1"));
        assert!(request.contains("Bearer tok"));
        assert!(request.ends_with(r#"{"title":"Foo"}"#));
    }

    #[test]
    fn test_error_status_is_not_a_transport_error() {
        let (addr, handle) = serve_once("404 Not Found", "<html>missing</html>");
        let t = ReqwestTransport::new(BaseUrl::new(addr));
        let res = t.send(Method::Delete, "/api/projects/1", None, Some("tok")).unwrap();
        assert_eq!(res.status, 404);
        handle.join().unwrap();
    }

    #[test]
    fn test_unreachable_host_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);
        let t = ReqwestTransport::new(BaseUrl::new(addr));
        let err = t.send(Method::Get, "/api/projects", None, None).unwrap_err();
        assert!(err.is_network());
    }
}
