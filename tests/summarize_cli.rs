use assert_cmd::Command;
use std::io::Write;
use std::net::{TcpListener, TcpStream};
use std::thread::{self, JoinHandle};

// "Cats purr. Dogs bark." annotated the way the service would: two sentence
// spans (the first includes its trailing space), tokens with lemma analyses,
// no linked entities.
fn adm_body() -> String {
    serde_json::json!({
        "data": "Cats purr. Dogs bark.",
        "attributes": {
            "sentence": {"items": [
                {"startOffset": 0, "endOffset": 11},
                {"startOffset": 11, "endOffset": 21}
            ]},
            "token": {"items": [
                {"startOffset": 0, "endOffset": 4, "text": "Cats",
                 "analyses": [{"partOfSpeech": "NOUN", "lemma": "cat"}]},
                {"startOffset": 5, "endOffset": 9, "text": "purr",
                 "analyses": [{"partOfSpeech": "VERB", "lemma": "purr"}]},
                {"startOffset": 9, "endOffset": 10, "text": ".",
                 "analyses": [{"partOfSpeech": "PUNCT", "lemma": "."}]},
                {"startOffset": 11, "endOffset": 15, "text": "Dogs",
                 "analyses": [{"partOfSpeech": "NOUN", "lemma": "dog"}]},
                {"startOffset": 16, "endOffset": 20, "text": "bark",
                 "analyses": [{"partOfSpeech": "VERB", "lemma": "bark"}]},
                {"startOffset": 20, "endOffset": 21, "text": ".",
                 "analyses": [{"partOfSpeech": "PUNCT", "lemma": "."}]}
            ]},
            "entities": {"items": []}
        }
    })
    .to_string()
}

// Stub annotation service: answers `requests` connections with the canned
// ADM payload, closing each connection so the client reconnects per request.
fn spawn_stub(requests: usize) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind(("127.0.0.1", 0)).expect("bind");
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        for _ in 0..requests {
            if let Ok((stream, _)) = listener.accept() {
                respond(stream, &adm_body());
            }
        }
    });
    (format!("http://{}:{}", addr.ip(), addr.port()), handle)
}

fn respond(mut stream: TcpStream, body: &str) {
    let mut buf = [0u8; 8192];
    let _ = stream.peek(&mut buf);
    let resp = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nConnection: close\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    );
    let _ = stream.write_all(resp.as_bytes());
    let _ = stream.flush();
}

#[test]
fn summarizes_stdin_to_the_top_sentence() {
    let (api_url, handle) = spawn_stub(2);
    let output = Command::cargo_bin("summarize")
        .unwrap()
        .args(["--key", "test-key", "--api-url", &api_url])
        .write_stdin("Cats purr. Dogs bark.")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    // Default 15% budget keeps one of the two sentences; equal content means
    // the earlier one wins.
    assert!(stdout.contains("Cats purr."));
    assert!(!stdout.contains("Dogs"));
    let _ = handle.join();
}

#[test]
fn top_n_keeps_both_sentences_in_document_order() {
    let (api_url, handle) = spawn_stub(2);
    let output = Command::cargo_bin("summarize")
        .unwrap()
        .args(["--key", "test-key", "--api-url", &api_url, "--top-n", "2"])
        .write_stdin("Cats purr. Dogs bark.")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    let cats = stdout.find("Cats purr.").expect("first sentence");
    let dogs = stdout.find("Dogs bark.").expect("second sentence");
    assert!(cats < dogs);
    let _ = handle.join();
}

#[test]
fn verbose_emits_the_full_summary_object_as_json() {
    let (api_url, handle) = spawn_stub(2);
    let output = Command::cargo_bin("summarize")
        .unwrap()
        .args(["--key", "test-key", "--api-url", &api_url, "--verbose"])
        .write_stdin("Cats purr. Dogs bark.")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).expect("json output");
    assert_eq!(json["ranked"].as_array().unwrap().len(), 2);
    assert_eq!(
        json["info"].as_str().unwrap(),
        "maintained 1 sentences (50% of original sentences)"
    );
    assert!(json["summary"].as_str().unwrap().contains("Cats purr."));
    let _ = handle.join();
}

#[test]
fn invalid_budget_fails_without_calling_the_service() {
    let assert = Command::cargo_bin("summarize")
        .unwrap()
        .args([
            "--key",
            "test-key",
            "--api-url",
            "http://127.0.0.1:9",
            "--percent",
            "1.5",
        ])
        .write_stdin("irrelevant")
        .assert()
        .failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("percent"));
}
