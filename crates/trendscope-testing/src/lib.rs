//! Fixture builders and a canned-response HTTP stub for integration tests.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use trendscope_types::TrendRecord;

/// Builder for test records; unset fields stay `None` so tests can probe
/// the degradation paths explicitly.
#[derive(Debug, Default, Clone)]
pub struct TrendBuilder {
    record: TrendRecord,
}

impl TrendBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            record: TrendRecord {
                title: Some(title.to_string()),
                ..Default::default()
            },
        }
    }

    pub fn video_id(mut self, id: &str) -> Self {
        self.record.video_id = Some(id.to_string());
        self
    }

    pub fn views(mut self, views: u64) -> Self {
        self.record.views = Some(views);
        self
    }

    pub fn likes(mut self, likes: u64) -> Self {
        self.record.likes = Some(likes);
        self
    }

    pub fn comments(mut self, comments: u64) -> Self {
        self.record.comment_count = Some(comments);
        self
    }

    pub fn published(mut self, ts: &str) -> Self {
        self.record.publish_time = Some(ts.to_string());
        self
    }

    pub fn region(mut self, code: &str) -> Self {
        self.record.region = Some(code.to_string());
        self
    }

    pub fn language(mut self, code: &str) -> Self {
        self.record.language = Some(code.to_string());
        self
    }

    pub fn category(mut self, id: &str) -> Self {
        self.record.category_id = Some(id.to_string());
        self
    }

    pub fn engagement(mut self, score: f64) -> Self {
        self.record.engagement_score = Some(score);
        self
    }

    pub fn viral(mut self, flag: bool) -> Self {
        self.record.viral = Some(if flag { 1 } else { 0 });
        self
    }

    pub fn build(self) -> TrendRecord {
        self.record
    }
}

/// A small, representative record set for end-to-end tests.
pub fn sample_trends() -> Vec<TrendRecord> {
    vec![
        TrendBuilder::new("Sunrise timelapse")
            .video_id("vid-001")
            .views(100)
            .likes(10)
            .comments(2)
            .published("2024-01-05T08:00:00Z")
            .region("IN")
            .language("hi")
            .category("19")
            .engagement(0.1)
            .viral(false)
            .build(),
        TrendBuilder::new("Speedrun world record")
            .video_id("vid-002")
            .views(5_000_000)
            .likes(400_000)
            .comments(52_000)
            .published("2024-02-11T16:30:00Z")
            .region("US")
            .language("en")
            .category("20")
            .engagement(0.9)
            .viral(true)
            .build(),
        TrendBuilder::new("Quiet cooking video")
            .video_id("vid-003")
            .views(2500)
            .likes(300)
            .comments(40)
            .published("2024-03-20T12:00:00Z")
            .region("US")
            .language("en")
            .category("26")
            .engagement(0.3)
            .viral(true)
            .build(),
    ]
}

/// JSON success envelope for the trends endpoints.
pub fn trends_body(records: &[TrendRecord]) -> String {
    serde_json::json!({ "trends": records, "count": records.len() }).to_string()
}

/// Minimal HTTP stub that answers every request with one canned response.
/// Runs on an OS-assigned localhost port; the serving thread is detached
/// and dies with the test process.
pub struct StubServer {
    base_url: String,
}

impl StubServer {
    pub fn serve(status: u16, reason: &'static str, body: String) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("stub server addr");

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                // Drain the request head; neither endpoint sends a body.
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self {
            base_url: format!("http://{}", addr),
        }
    }

    pub fn ok(body: String) -> Self {
        Self::serve(200, "OK", body)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
