//! Static file server for the Nearby Doctors web client
//!
//! Serves the built WASM app from the dist/ directory on port 8080. Handy
//! for trying the client against a locally running doctors backend without
//! pulling in a dev-server dependency.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;

fn main() {
    let addr = "127.0.0.1:8080";
    let listener = TcpListener::bind(addr).expect("Failed to bind to port 8080");

    println!("Nearby Doctors client running at http://{}", addr);
    println!("Serving from dist/ directory");
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn content_type(path: &PathBuf) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = full_path.split_once('?').map_or(full_path, |(p, _)| p);

    // Everything that isn't a real file falls back to the app shell
    let file_path = if path == "/" || path.is_empty() {
        PathBuf::from("dist/index.html")
    } else {
        let mut dist_path = PathBuf::from("dist");
        dist_path.push(path.strip_prefix('/').unwrap_or(path));
        if dist_path.is_file() {
            dist_path
        } else {
            PathBuf::from("dist/index.html")
        }
    };

    let (status, body, mime) = match fs::read(&file_path) {
        Ok(contents) => {
            let mime = content_type(&file_path);
            ("200 OK", contents, mime)
        }
        Err(e) => {
            eprintln!("Failed to read {}: {}", file_path.display(), e);
            (
                "404 NOT FOUND",
                b"<!DOCTYPE html><html><body><h1>Not found</h1></body></html>".to_vec(),
                "text/html; charset=utf-8",
            )
        }
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        mime,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write body: {}", e);
    }
    let _ = stream.flush();
}
