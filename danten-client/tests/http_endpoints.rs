// danten-client/tests/http_endpoints.rs
// Catalog fetch and order log POST against a throwaway local HTTP responder

use danten_client::{
    CatalogClient, CatalogProvider, CatalogSource, ClientConfig, ClientError, OrderLog,
    OrderLogClient, OrderLogEntry,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serve exactly one request, replying with `status` and `body`.
/// Resolves to the raw request text.
async fn serve_once(status: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|l| {
                        let lower = l.to_ascii_lowercase();
                        lower
                            .strip_prefix("content-length:")
                            .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                    })
                    .unwrap_or(0);
                if buf.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }
        let reply = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(reply.as_bytes()).await.unwrap();
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });

    (format!("http://{}", addr), rx)
}

fn entry() -> OrderLogEntry {
    OrderLogEntry {
        timestamp: "17/10/2026, 10.00.00".into(),
        nama: "Budi Santoso".into(),
        kelas: "X RPL 1".into(),
        nomor_telpon: "081234567890".into(),
        makanan: "Ayam Geprek".into(),
        jumlah_pesanan: 2,
        total_harga: 30000,
        notes: "pedas".into(),
        tipe_pembayaran: "cash".into(),
    }
}

#[tokio::test]
async fn test_order_log_posts_urlencoded_form() {
    let (url, request) = serve_once("200 OK", "Success").await;
    let http = ClientConfig::new().build_http_client().unwrap();
    let client = OrderLogClient::new(http, format!("{}/exec", url));

    client.submit(&entry()).await.unwrap();

    let request = request.await.unwrap();
    assert!(request.starts_with("POST /exec"));
    assert!(request.to_ascii_lowercase().contains("application/x-www-form-urlencoded"));
    assert!(request.contains("nama=Budi+Santoso"));
    assert!(request.contains("kelas=X+RPL+1"));
    assert!(request.contains("makanan=Ayam+Geprek"));
    assert!(request.contains("jumlah_pesanan=2"));
    assert!(request.contains("total_harga=30000"));
    assert!(request.contains("tipe_pembayaran=cash"));
}

#[tokio::test]
async fn test_order_log_non_success_status_is_error() {
    let (url, _request) = serve_once("500 Internal Server Error", "boom").await;
    let http = ClientConfig::new().build_http_client().unwrap();
    let client = OrderLogClient::new(http, url);

    let err = client.submit(&entry()).await.unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_catalog_fetch_json_array() {
    let (url, request) = serve_once(
        "200 OK",
        r#"[{"id":"1","name":"Ayam","price":"Rp 10.000","category":["ayam"]},{"id":2,"name":"Cireng","price":"Rp 5.000"}]"#,
    )
    .await;
    let http = ClientConfig::new().with_timeout_ms(5_000).build_http_client().unwrap();
    let client = CatalogClient::new(http, CatalogSource::Json(format!("{}/api/foods.json", url)));

    let items = client.fetch_catalog().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].id, "2");
    assert!(request.await.unwrap().starts_with("GET /api/foods.json"));
}

#[tokio::test]
async fn test_catalog_fetch_unreachable_is_http_error() {
    // Bind then drop to get a port nobody listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let http = ClientConfig::new().with_timeout_ms(2_000).build_http_client().unwrap();
    let client = CatalogClient::new(http, CatalogSource::Json(format!("http://{}/foods.json", addr)));
    assert!(matches!(client.fetch_catalog().await, Err(ClientError::Http(_))));
}
