use httpmock::prelude::*;
use site_stitch::core::year;
use site_stitch::{CliConfig, FooterPipeline, LocalStorage, StitchEngine};
use tempfile::TempDir;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Home</title></head>
<body>
  <main>Welcome</main>
  <div id="footer-placeholder"></div>
</body>
</html>
"#;

fn write_page(dir: &TempDir, name: &str, html: &str) {
    std::fs::write(dir.path().join(name), html).unwrap();
}

fn read_page(dir: &TempDir, name: &str) -> String {
    std::fs::read_to_string(dir.path().join(name)).unwrap()
}

fn config_for(site_root: &str, footer_url: String, pages: Vec<String>) -> CliConfig {
    CliConfig {
        footer_url,
        pages,
        placeholder_id: "footer-placeholder".to_string(),
        year_ids: vec!["currentYear".to_string()],
        site_root: site_root.to_string(),
        verbose: false,
    }
}

#[tokio::test]
async fn test_end_to_end_stitch_with_real_http() {
    let temp_dir = TempDir::new().unwrap();
    write_page(&temp_dir, "index.html", PAGE);

    let server = MockServer::start();
    let footer = "<footer>© <span id=\"currentYear\">2000</span> Jane Doe</footer>";

    let fragment_mock = server.mock(|when, then| {
        when.method(GET).path("/footer.html");
        then.status(200)
            .header("Content-Type", "text/html")
            .body(footer);
    });

    let site_root = temp_dir.path().to_str().unwrap().to_string();
    let config = config_for(
        &site_root,
        server.url("/footer.html"),
        vec!["index.html".to_string()],
    );

    let storage = LocalStorage::new(site_root.clone());
    let pipeline = FooterPipeline::new(storage, config);
    let engine = StitchEngine::new(pipeline);

    let written = engine.run().await.unwrap();
    fragment_mock.assert();
    assert_eq!(written, vec!["index.html".to_string()]);

    // placeholder 內容 = 抓到的 fragment，年份蓋成今年
    let stitched = read_page(&temp_dir, "index.html");
    let expected_inner = footer.replace("2000", &year::current_year().to_string());
    assert!(stitched.contains(&format!(
        "<div id=\"footer-placeholder\">{}</div>",
        expected_inner
    )));
    assert!(stitched.contains("<main>Welcome</main>"));
}

#[tokio::test]
async fn test_fragment_without_year_element_is_injected_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    write_page(&temp_dir, "index.html", PAGE);

    let server = MockServer::start();
    let footer = "<footer>plain footer <!-- no year here --></footer>";

    let fragment_mock = server.mock(|when, then| {
        when.method(GET).path("/footer.html");
        then.status(200).body(footer);
    });

    let site_root = temp_dir.path().to_str().unwrap().to_string();
    let config = config_for(
        &site_root,
        server.url("/footer.html"),
        vec!["index.html".to_string()],
    );

    let storage = LocalStorage::new(site_root.clone());
    let pipeline = FooterPipeline::new(storage, config);
    let engine = StitchEngine::new(pipeline);

    // 缺年份元素只是警告，不影響縫合
    let written = engine.run().await.unwrap();
    fragment_mock.assert();
    assert_eq!(written.len(), 1);

    let stitched = read_page(&temp_dir, "index.html");
    assert!(stitched.contains(&format!("<div id=\"footer-placeholder\">{}</div>", footer)));
}

#[tokio::test]
async fn test_http_404_leaves_pages_untouched() {
    let temp_dir = TempDir::new().unwrap();
    write_page(&temp_dir, "index.html", PAGE);

    let server = MockServer::start();
    let fragment_mock = server.mock(|when, then| {
        when.method(GET).path("/footer.html");
        then.status(404);
    });

    let site_root = temp_dir.path().to_str().unwrap().to_string();
    let config = config_for(
        &site_root,
        server.url("/footer.html"),
        vec!["index.html".to_string()],
    );

    let storage = LocalStorage::new(site_root.clone());
    let pipeline = FooterPipeline::new(storage, config);
    let engine = StitchEngine::new(pipeline);

    let err = engine.run().await.unwrap_err();
    fragment_mock.assert();

    // 錯誤訊息帶狀態碼，頁面原封不動
    assert!(err.to_string().contains("404"));
    assert_eq!(read_page(&temp_dir, "index.html"), PAGE);
}

#[tokio::test]
async fn test_network_failure_leaves_pages_untouched() {
    let temp_dir = TempDir::new().unwrap();
    write_page(&temp_dir, "index.html", PAGE);

    let site_root = temp_dir.path().to_str().unwrap().to_string();
    // 沒有服務在聽的端口
    let config = config_for(
        &site_root,
        "http://127.0.0.1:9/footer.html".to_string(),
        vec!["index.html".to_string()],
    );

    let storage = LocalStorage::new(site_root.clone());
    let pipeline = FooterPipeline::new(storage, config);
    let engine = StitchEngine::new(pipeline);

    let result = engine.run().await;

    assert!(result.is_err());
    assert_eq!(read_page(&temp_dir, "index.html"), PAGE);
}

#[tokio::test]
async fn test_missing_placeholder_leaves_pages_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let bare_page = "<html><body>no placeholder</body></html>";
    write_page(&temp_dir, "index.html", bare_page);

    let server = MockServer::start();
    let fragment_mock = server.mock(|when, then| {
        when.method(GET).path("/footer.html");
        then.status(200).body("<footer></footer>");
    });

    let site_root = temp_dir.path().to_str().unwrap().to_string();
    let config = config_for(
        &site_root,
        server.url("/footer.html"),
        vec!["index.html".to_string()],
    );

    let storage = LocalStorage::new(site_root.clone());
    let pipeline = FooterPipeline::new(storage, config);
    let engine = StitchEngine::new(pipeline);

    let result = engine.run().await;
    fragment_mock.assert();

    assert!(result.is_err());
    assert_eq!(read_page(&temp_dir, "index.html"), bare_page);
}

#[tokio::test]
async fn test_multi_page_stitch_updates_every_page() {
    let temp_dir = TempDir::new().unwrap();
    write_page(&temp_dir, "index.html", PAGE);
    write_page(
        &temp_dir,
        "about.html",
        "<html><body><p>About</p><div id=\"footer-placeholder\"></div></body></html>",
    );

    let server = MockServer::start();
    let footer = "<footer>© <span id=\"currentYear\">1999</span></footer>";

    let fragment_mock = server.mock(|when, then| {
        when.method(GET).path("/footer.html");
        then.status(200).body(footer);
    });

    let site_root = temp_dir.path().to_str().unwrap().to_string();
    let config = config_for(
        &site_root,
        server.url("/footer.html"),
        vec!["index.html".to_string(), "about.html".to_string()],
    );

    let storage = LocalStorage::new(site_root.clone());
    let pipeline = FooterPipeline::new(storage, config);
    let engine = StitchEngine::new(pipeline);

    let written = engine.run().await.unwrap();

    // fragment 只抓一次，塞進兩個頁面
    fragment_mock.assert_hits(1);
    assert_eq!(written.len(), 2);

    let year = year::current_year().to_string();
    for name in ["index.html", "about.html"] {
        let stitched = read_page(&temp_dir, name);
        assert!(stitched.contains(&year));
        assert!(stitched.contains("<footer>©"));
    }
}
