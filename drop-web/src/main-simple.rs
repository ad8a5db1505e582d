//! Static file server for the drop page
//!
//! Serves the built WASM bundle from the dist/ directory on port 8080.
//! Deliberately dependency-free so it builds fast on any machine.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

fn main() {
    let addr = "127.0.0.1:8080";
    let listener = match TcpListener::bind(addr) {
        Ok(listener) => listener,
        Err(err) => {
            eprintln!("Failed to bind {}: {}", addr, err);
            std::process::exit(1);
        }
    };

    println!("Drop page server running at http://{}", addr);
    println!("Serving from dist/ directory");
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(err) => eprintln!("Connection error: {}", err),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let request_line = match BufReader::new(&mut stream).lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = target.split('?').next().unwrap_or("/");

    let (body, content_type, status) = load_asset(path);

    let header = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(err) = stream
        .write_all(header.as_bytes())
        .and_then(|_| stream.write_all(&body))
    {
        eprintln!("Failed to write response: {}", err);
        return;
    }
    let _ = stream.flush();
}

/// Resolve a request path against dist/, falling back to index.html so the
/// page shell always loads on deep links and refreshes.
fn load_asset(path: &str) -> (Vec<u8>, &'static str, &'static str) {
    let file_path = resolve_path(path);
    match fs::read(&file_path) {
        Ok(body) => (body, content_type_for(&file_path), "200 OK"),
        Err(_) => match fs::read("dist/index.html") {
            Ok(body) => (body, "text/html; charset=utf-8", "200 OK"),
            Err(_) => {
                eprintln!("dist/index.html not found, was the bundle built?");
                (
                    b"<!DOCTYPE html><html><body><h1>Not Found</h1></body></html>".to_vec(),
                    "text/html; charset=utf-8",
                    "404 NOT FOUND",
                )
            }
        },
    }
}

fn resolve_path(path: &str) -> PathBuf {
    if path == "/" || path.is_empty() {
        return PathBuf::from("dist/index.html");
    }
    let mut file_path = PathBuf::from("dist");
    file_path.push(path.trim_start_matches('/'));
    file_path
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}
