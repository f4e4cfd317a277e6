//! End-to-end crawl tests
//!
//! These tests use wiremock to create mock documentation sites and run the
//! full crawl cycle over HTTP.

use docs_harvest::config::{Config, OutputFormat, SectionLayout, SiteKind};
use docs_harvest::crawler::Coordinator;
use docs_harvest::output::save_results;
use docs_harvest::{CrawlStats, HarvestError};
use std::time::{Duration, Instant};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Python-docs preset pointed at the mock server, without pacing
fn python_docs_config(server: &MockServer, output_dir: &TempDir) -> Config {
    let mut config = SiteKind::PythonDocs.preset();
    config.site.root_url = format!("{}/3/", server.uri());
    config.crawler.request_interval_ms = 0;
    config.output.directory = output_dir
        .path()
        .join("save_data")
        .to_string_lossy()
        .into_owned();
    config
}

async fn mount_html(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

const INDEX: &str = r#"<html><body>
    <p><strong>Parts of the documentation:</strong></p>
    <table class="contentstable"><tr>
      <td><p class="biglink">
        <a class="biglink" href="tutorial/index.html">Tutorial</a>
      </p></td>
    </tr></table>
    <p><strong>Indices and tables:</strong></p>
    <table class="contentstable"><tr>
      <td><p class="biglink">
        <a class="biglink" href="library/index.html">Library Reference</a>
      </p></td>
    </tr></table>
</body></html>"#;

const TUTORIAL: &str = r#"<html><body><div class="body"><section>
    <p>Python is an easy to learn, powerful programming language.</p>
    <div class="toctree-wrapper"><ul>
      <li class="toctree-l1"><a href="appetite.html">1. Whetting Your Appetite</a></li>
      <li class="toctree-l1"><a href="interpreter.html">2. Using the Python Interpreter</a></li>
      <li class="toctree-l1"><a href="missing.html">3. Missing Chapter</a></li>
    </ul></div>
</section></div></body></html>"#;

const APPETITE: &str = r#"<html><body><div class="body"><section>
    <p>If you do much work on computers, eventually you find that there is some task.</p>
</section></div></body></html>"#;

const INTERPRETER: &str = r#"<html><body><div class="body"><section>
    <p>The interpreter is usually installed as /usr/local/bin/python3.</p>
    <div class="highlight"><pre>python3.12</pre></div>
</section></div></body></html>"#;

const GFG_BASICS: &str = r#"<html><body><article class="content">
    <div class="text">Python is a high-level language.</div>
</article></body></html>"#;

const GFG_LISTS: &str = r#"<html><body><article class="content">
    <div class="text">Lists, like arrays.</div>
</article></body></html>"#;

#[tokio::test]
async fn test_full_crawl_python_docs_layout() {
    let server = MockServer::start().await;
    mount_html(&server, "/3/", 200, INDEX).await;
    mount_html(&server, "/3/tutorial/index.html", 200, TUTORIAL).await;
    mount_html(&server, "/3/tutorial/appetite.html", 200, APPETITE).await;
    mount_html(&server, "/3/tutorial/interpreter.html", 200, INTERPRETER).await;
    mount_html(&server, "/3/tutorial/missing.html", 404, "not found").await;
    mount_html(&server, "/3/library/index.html", 404, "not found").await;

    let output_dir = TempDir::new().unwrap();
    let config = python_docs_config(&server, &output_dir);
    let mut coordinator = Coordinator::new(config).expect("Failed to create coordinator");

    let report = coordinator.run().await.expect("Crawl failed");

    // Tutorial, appetite, interpreter succeed; missing chapter and library fail
    assert_eq!(report.stats, CrawlStats::new(3, 2));
    assert_eq!(report.results.names().collect::<Vec<_>>(), vec!["Tutorial"]);

    let tutorial = report.results.get("Tutorial").unwrap();
    assert_eq!(tutorial.section, "Parts of the documentation:");
    let names: Vec<&str> = tutorial
        .body
        .children()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "1. Whetting Your Appetite",
            "2. Using the Python Interpreter",
        ]
    );

    let interpreter = &tutorial.body.children()[1];
    assert_eq!(
        interpreter.body.content.code_blocks,
        vec!["python3.12".to_string()]
    );
    assert_eq!(interpreter.body.children, None);

    // Persist and check the JSON shape
    let path = save_results(&report.results, &coordinator.config().output).unwrap();
    assert!(path.ends_with("save_data/pydoc_data.json"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["Tutorial"]["name"], "Tutorial");
    let appetite = &json["Tutorial"]["children"]["children"][0];
    assert_eq!(appetite["name"], "1. Whetting Your Appetite");
    assert!(appetite["data"].get("children").is_none());
    assert!(json.get("Library Reference").is_none());
}

#[tokio::test]
async fn test_root_failure_aborts_run() {
    let server = MockServer::start().await;
    mount_html(&server, "/3/", 500, "server error").await;

    let output_dir = TempDir::new().unwrap();
    let config = python_docs_config(&server, &output_dir);
    let mut coordinator = Coordinator::new(config).unwrap();

    let result = coordinator.run().await;

    match result {
        Err(HarvestError::RootUnavailable { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected RootUnavailable, got {:?}", other),
    }
    assert!(!output_dir.path().join("save_data").exists());
}

#[tokio::test]
async fn test_unreachable_root_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let mut config = SiteKind::PythonDocs.preset();
    config.site.root_url = format!("http://127.0.0.1:{}/3/", port);
    config.crawler.request_interval_ms = 0;
    let mut coordinator = Coordinator::new(config).unwrap();

    let result = coordinator.run().await;
    assert!(matches!(result, Err(HarvestError::Transport { .. })));
}

#[tokio::test]
async fn test_named_sections_csv_flow() {
    let server = MockServer::start().await;
    let uri = server.uri();

    let index = format!(
        r#"<html><body>
        <div class="Basics"><a href="{uri}/python-basics/">Introduction</a></div>
        <div class="Data Types">
          <a href="{uri}/python-lists/">Lists</a>
          <a href="{uri}/python-sets/">Sets</a>
        </div>
        </body></html>"#,
        uri = uri
    );
    mount_html(&server, "/python-programming-language/", 200, &index).await;
    mount_html(&server, "/python-basics/", 200, GFG_BASICS).await;
    mount_html(&server, "/python-lists/", 200, GFG_LISTS).await;
    // Article layout changed: the content node is missing
    mount_html(
        &server,
        "/python-sets/",
        200,
        r#"<html><body><main>Sets moved</main></body></html>"#,
    )
    .await;

    let output_dir = TempDir::new().unwrap();
    let mut config = SiteKind::GeeksForGeeks.preset();
    config.site.root_url = format!("{}/python-programming-language/", uri);
    config.site.layout = SectionLayout::NamedSections {
        sections: vec!["Basics".to_string(), "Data Types".to_string()],
        link_selector: "a".to_string(),
    };
    config.crawler.request_interval_ms = 0;
    config.output.directory = output_dir.path().to_string_lossy().into_owned();
    assert_eq!(config.output.format, OutputFormat::Csv);

    let mut coordinator = Coordinator::new(config).unwrap();
    let report = coordinator.run().await.unwrap();

    assert_eq!(report.stats, CrawlStats::new(2, 1));
    assert_eq!(
        report.results.names().collect::<Vec<_>>(),
        vec!["Introduction", "Lists"]
    );

    let path = save_results(&report.results, &coordinator.config().output).unwrap();
    let mut reader = csv::Reader::from_path(&path).unwrap();
    assert_eq!(
        reader.headers().unwrap().iter().collect::<Vec<_>>(),
        vec!["section", "subsection", "url", "data"]
    );
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[1][0], "Data Types");
    assert_eq!(&rows[1][1], "Lists");
    assert_eq!(rows[1][2], format!("{}/python-lists/", uri));
    assert_eq!(&rows[1][3], "Lists, like arrays.");
}

#[tokio::test]
async fn test_requests_are_paced() {
    let server = MockServer::start().await;
    mount_html(&server, "/3/", 200, INDEX).await;
    mount_html(&server, "/3/tutorial/index.html", 200, APPETITE).await;
    mount_html(&server, "/3/library/index.html", 200, APPETITE).await;

    let output_dir = TempDir::new().unwrap();
    let mut config = python_docs_config(&server, &output_dir);
    config.crawler.request_interval_ms = 100;

    let mut coordinator = Coordinator::new(config).unwrap();
    let start = Instant::now();
    let report = coordinator.run().await.unwrap();

    // Three fetches: root immediately, then two paced requests
    assert_eq!(report.stats, CrawlStats::new(2, 0));
    assert!(start.elapsed() >= Duration::from_millis(200));
}

#[tokio::test]
async fn test_recrawl_is_idempotent() {
    let server = MockServer::start().await;
    mount_html(&server, "/3/", 200, INDEX).await;
    mount_html(&server, "/3/tutorial/index.html", 200, TUTORIAL).await;
    mount_html(&server, "/3/tutorial/appetite.html", 200, APPETITE).await;
    mount_html(&server, "/3/tutorial/interpreter.html", 200, INTERPRETER).await;
    mount_html(&server, "/3/tutorial/missing.html", 404, "").await;
    mount_html(&server, "/3/library/index.html", 200, APPETITE).await;

    let output_dir = TempDir::new().unwrap();
    let first = Coordinator::new(python_docs_config(&server, &output_dir))
        .unwrap()
        .run()
        .await
        .unwrap();
    let second = Coordinator::new(python_docs_config(&server, &output_dir))
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.stats, CrawlStats::new(4, 1));
}
