//! Shared utilities for integration tests.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// A request as seen by a mock server.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub struct CapturedRequest {
    pub head: String,
    pub body: String,
}

#[allow(dead_code)]
impl CapturedRequest {
    pub fn header(&self, name: &str) -> Option<String> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim()
                .eq_ignore_ascii_case(name)
                .then(|| value.trim().to_string())
        })
    }
}

/// Requests received so far.
pub type Captured = Arc<Mutex<Vec<CapturedRequest>>>;

async fn read_request(socket: &mut TcpStream) -> CapturedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        if let Some(end) = find_head_end(&buf) {
            let head = String::from_utf8_lossy(&buf[..end]).into_owned();
            let length = head
                .lines()
                .find_map(|l| {
                    let (k, v) = l.split_once(':')?;
                    k.trim().eq_ignore_ascii_case("content-length").then(|| v.trim().parse::<usize>().ok())?
                })
                .unwrap_or(0);
            let body_start = end + 4;
            while buf.len() < body_start + length {
                match socket.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => buf.extend_from_slice(&chunk[..n]),
                }
            }
            let body_end = buf.len().min(body_start + length);
            let body = String::from_utf8_lossy(&buf[body_start..body_end]).into_owned();
            return CapturedRequest { head, body };
        }
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => return CapturedRequest::default(),
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
}

fn find_head_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

/// Start a programmable mock server on an ephemeral port.
///
/// `f` maps each captured request to a status code and body.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(f: F) -> (SocketAddr, Captured)
where
    F: Fn(CapturedRequest) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured: Captured = Arc::new(Mutex::new(Vec::new()));
    let f = Arc::new(f);
    let seen = captured.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let f = f.clone();
            let seen = seen.clone();
            tokio::spawn(async move {
                let request = read_request(&mut socket).await;
                seen.lock().unwrap().push(request.clone());
                let (status, body) = f(request).await;
                let status_text = match status {
                    200 => "200 OK",
                    400 => "400 Bad Request",
                    403 => "403 Forbidden",
                    404 => "404 Not Found",
                    500 => "500 Internal Server Error",
                    502 => "502 Bad Gateway",
                    503 => "503 Service Unavailable",
                    _ => "200 OK",
                };
                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: text/xml\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status_text,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    (addr, captured)
}

/// Start a mock that always answers with the same status and body.
#[allow(dead_code)]
pub async fn start_mock_backend(status: u16, body: &'static str) -> (SocketAddr, Captured) {
    start_programmable_backend(move |_| async move { (status, body.to_string()) }).await
}

/// Start a server that accepts connections and never answers.
#[allow(dead_code)]
pub async fn start_silent_backend() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_secs(30)).await;
                drop(socket);
            });
        }
    });
    addr
}

/// An address nothing listens on: connections are refused.
#[allow(dead_code)]
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// `DescribeInstanceHealth` response for `(instance_id, state)` pairs.
#[allow(dead_code)]
pub fn instance_health_xml(states: &[(&str, &str)]) -> String {
    let members: String = states
        .iter()
        .map(|(id, state)| {
            format!(
                "<member><Description>N/A</Description><InstanceId>{}</InstanceId>\
                 <State>{}</State><ReasonCode>N/A</ReasonCode></member>",
                id, state
            )
        })
        .collect();
    format!(
        "<DescribeInstanceHealthResponse xmlns=\"http://elasticloadbalancing.amazonaws.com/doc/2012-06-01/\">\
         <DescribeInstanceHealthResult><InstanceStates>{}</InstanceStates></DescribeInstanceHealthResult>\
         <ResponseMetadata><RequestId>00000000-0000-0000-0000-000000000000</RequestId></ResponseMetadata>\
         </DescribeInstanceHealthResponse>",
        members
    )
}

#[allow(dead_code)]
pub const LB_NOT_FOUND_XML: &str = "<ErrorResponse xmlns=\"http://elasticloadbalancing.amazonaws.com/doc/2012-06-01/\">\
<Error><Type>Sender</Type><Code>LoadBalancerNotFound</Code>\
<Message>There is no ACTIVE Load Balancer named 'missing'</Message></Error>\
<RequestId>00000000-0000-0000-0000-000000000000</RequestId></ErrorResponse>";
