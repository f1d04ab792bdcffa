pub mod tests {
    use std::net::SocketAddr;
    use std::sync::Arc;

    use serde_json::{Value, json};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use pavilion_app::roster::RosterClient;
    use pavilion_app::test_utils::tests::{MemoryBlobStore, MemoryProfileRepository};
    use pavilion_web::{AppState, WebRouter};

    pub const TEST_BUCKET: &str = "club-media";
    pub const TEST_ACCOUNT: &str = "testaccount";

    pub struct TestApp {
        pub base_url: String,
        pub client: reqwest::Client,
        pub profiles: Arc<MemoryProfileRepository>,
        pub store: Arc<MemoryBlobStore>,
    }

    /// Serves the full router on an ephemeral port with in-memory fakes for
    /// storage and persistence, pointing the roster client at
    /// `roster_base_url`.
    pub async fn setup_web_app(roster_base_url: &str) -> TestApp {
        let profiles = Arc::new(MemoryProfileRepository::new());
        let store = Arc::new(MemoryBlobStore::new(TEST_BUCKET, TEST_ACCOUNT));
        let roster = Arc::new(RosterClient::from_parts(
            roster_base_url,
            "4281",
            "test-token",
            false,
            false,
        ));

        let state = AppState {
            roster,
            store: store.clone(),
            profiles: profiles.clone(),
        };

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        let router = WebRouter::router(state);

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        TestApp {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
            profiles,
            store,
        }
    }

    /// One-shot mock roster upstream answering with the given status and
    /// JSON body.
    pub async fn mock_roster_server(status: u16, body: &str) -> (String, tokio::task::JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let url = format!("http://127.0.0.1:{port}");
        let body = body.to_string();

        let handle = tokio::spawn(async move {
            if let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = vec![0u8; 8192];
                let _ = stream.read(&mut buf).await;

                let resp = format!(
                    "HTTP/1.1 {status} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(resp.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        (url, handle)
    }

    /// A small but genuine PNG to feed through the upload endpoint.
    pub fn sample_png() -> Vec<u8> {
        use image::{DynamicImage, ImageFormat, RgbImage};
        use std::io::Cursor;

        let img = RgbImage::from_fn(96, 72, |x, y| image::Rgb([x as u8, y as u8, 200]));
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    pub fn sample_submission(member_id: &str) -> Value {
        json!({
            "member_id": member_id,
            "player_name": "Test Player",
            "nationality": "England",
            "role": "All-rounder",
            "birth_date": "1990-04-12",
            "batting_style": "Right-hand bat",
            "bowling_hand": "Right",
            "bowling_style": "Off break",
            "debut_year": "2015",
            "image_path": format!(
                "https://{TEST_BUCKET}.{TEST_ACCOUNT}.r2.cloudflarestorage.com/players/player_{member_id}.avif"
            ),
        })
    }

    pub fn multipart_form(
        file: Option<Vec<u8>>,
        member_id: Option<&str>,
        player_name: Option<&str>,
    ) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new();

        if let Some(bytes) = file {
            let part = reqwest::multipart::Part::bytes(bytes)
                .file_name("photo.png")
                .mime_str("image/png")
                .unwrap();
            form = form.part("file", part);
        }
        if let Some(id) = member_id {
            form = form.text("member_id", id.to_string());
        }
        if let Some(name) = player_name {
            form = form.text("player_name", name.to_string());
        }

        form
    }
}
