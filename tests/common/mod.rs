use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::thread;
use tempfile::TempDir;

/// Querying this address yields a page without a result box.
pub const NO_RESULT_IP: &str = "203.0.113.9";

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub lookup_url: String,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        let lookup_url = spawn_lookup_server();
        Self {
            _tmp: tmp,
            home,
            lookup_url,
        }
    }

    /// Command with an isolated HOME but no lookup endpoint override,
    /// for exercising the config file path.
    pub fn cmd_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("iploc").expect("binary builds");
        cmd.env("HOME", &self.home)
            .env("IPLOC_BATCH_DELAY_MS", "0")
            .env("IPLOC_TIMEOUT_MS", "5000");
        for proxy in ["http_proxy", "HTTP_PROXY", "https_proxy", "HTTPS_PROXY", "ALL_PROXY"] {
            cmd.env_remove(proxy);
        }
        cmd
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = self.cmd_bare();
        cmd.env("IPLOC_LOOKUP_URL", &self.lookup_url);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.home.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(&path, contents).expect("write fixture");
        path
    }
}

fn lookup_page(ip: &str) -> String {
    format!(
        "<html><head><meta charset=\"utf-8\"></head><body>\
         <div class=\"result-box\">\
         <p>IP地址: {ip}</p>\
         <p>定位: 北京市 朝阳区</p>\
         <p>省份: 北京</p>\
         <p>城市: 北京市</p>\
         <p>运营商: 电信</p>\
         </div></body></html>"
    )
}

const EMPTY_PAGE: &str = "<html><body><p>暂无数据</p></body></html>";

/// Stands in for the upstream lookup form: answers every POST with a
/// canned result page for the submitted `ip` field.
pub fn spawn_lookup_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    let url = format!("http://{}/ip/", listener.local_addr().expect("local addr"));
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let _ = handle_lookup(stream);
        }
    });
    url
}

fn handle_lookup(stream: TcpStream) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream);
    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        let lower = line.to_ascii_lowercase();
        if let Some(v) = lower.strip_prefix("content-length:") {
            content_length = v.trim().parse().unwrap_or(0);
        }
    }
    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body)?;
    let body = String::from_utf8_lossy(&body);
    let ip = body
        .split('&')
        .find_map(|kv| kv.strip_prefix("ip="))
        .unwrap_or("");
    let page = if ip == NO_RESULT_IP {
        EMPTY_PAGE.to_string()
    } else {
        lookup_page(ip)
    };
    respond(reader.into_inner(), "text/html; charset=utf-8", &page)
}

/// Stands in for an IP-echo service: answers every request with `ip`.
pub fn spawn_echo_server(ip: &str) -> String {
    let ip = ip.to_string();
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind echo server");
    let url = format!("http://{}/", listener.local_addr().expect("local addr"));
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let _ = handle_echo(stream, &ip);
        }
    });
    url
}

fn handle_echo(stream: TcpStream, ip: &str) -> std::io::Result<()> {
    let mut reader = BufReader::new(stream);
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(());
        }
        if line.trim_end().is_empty() {
            break;
        }
    }
    respond(reader.into_inner(), "text/plain", ip)
}

/// A URL nothing listens on (bound then dropped), for failure paths.
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind throwaway port");
    let url = format!("http://{}/", listener.local_addr().expect("local addr"));
    drop(listener);
    url
}

fn respond(mut stream: TcpStream, content_type: &str, body: &str) -> std::io::Result<()> {
    let head = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    stream.write_all(head.as_bytes())?;
    stream.write_all(body.as_bytes())?;
    stream.flush()
}
