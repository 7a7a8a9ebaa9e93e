//! Word-finder tool server over newline-delimited JSON-RPC.

use crate::error::Result;
use crate::letters::LetterConfiguration;
use crate::mcp::{
    InitializeResult, PROTOCOL_VERSION, Request, RequestId, Response, ServerCapabilities,
    ServerInfo, ToolDef, ToolsCapability, error_codes,
};
use crate::oracle::{Verdict, WordOracle};
use log::{debug, error, info, warn};
use serde::Deserialize;
use serde_json::{Value, json};
use std::io::{BufRead, Write};
use thiserror::Error;

const SERVER_NAME: &str = "SpellingBee Word Finder";

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] serde_json::Error),
}

impl ToolError {
    fn code(&self) -> i32 {
        match self {
            Self::UnknownTool(_) => error_codes::METHOD_NOT_FOUND,
            Self::InvalidArguments(_) => error_codes::INVALID_PARAMS,
        }
    }
}

#[derive(Deserialize)]
struct WordArgs {
    word: String,
}

#[derive(Deserialize)]
struct AnswerArgs {
    word: String,
    #[serde(default)]
    center: Option<String>,
    letters: Letters,
}

#[derive(Deserialize)]
struct FindArgs {
    letters: Letters,
}

#[derive(Deserialize)]
struct ConfigArgs {
    #[serde(default)]
    center: Option<String>,
    letters: Letters,
}

/// Letters arrive either as a list (`["P", "L"]`) or a plain string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Letters {
    List(Vec<String>),
    Joined(String),
}

impl Letters {
    fn joined(&self) -> String {
        match self {
            Self::List(list) => list.concat(),
            Self::Joined(s) => s.clone(),
        }
    }
}

/// Tools exposed by the server.
pub fn list_tools() -> Vec<ToolDef> {
    let letters_schema = json!({
        "description": "Allowed letters, as a list or a string. Example: [\"P\", \"L\", \"E\", \"A\", \"D\"]",
        "oneOf": [
            { "type": "array", "items": { "type": "string" } },
            { "type": "string" }
        ]
    });
    let center_schema = json!({
        "type": "string",
        "description": "Mandatory center letter"
    });

    vec![
        ToolDef {
            name: "is_word",
            description: "Check whether a word is in the dictionary.",
            input_schema: json!({
                "type": "object",
                "properties": { "word": { "type": "string" } },
                "required": ["word"]
            }),
        },
        ToolDef {
            name: "is_valid_answer",
            description: "Check a SpellingBee answer: at least 4 letters, uses the center letter, only allowed letters, and a dictionary word.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "word": { "type": "string" },
                    "center": center_schema,
                    "letters": letters_schema
                },
                "required": ["word", "center", "letters"]
            }),
        },
        ToolDef {
            name: "find_words",
            description: "Find all dictionary words of at least 4 letters that can be formed from the given letters, longest first.",
            input_schema: json!({
                "type": "object",
                "properties": { "letters": letters_schema },
                "required": ["letters"]
            }),
        },
        ToolDef {
            name: "all_valid_answers",
            description: "List every valid SpellingBee answer for a center letter and letter set.",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "center": center_schema,
                    "letters": letters_schema
                },
                "required": ["center", "letters"]
            }),
        },
    ]
}

/// Run a tool and return its JSON result.
pub fn call_tool(
    oracle: &WordOracle,
    name: &str,
    arguments: Value,
) -> std::result::Result<Value, ToolError> {
    match name {
        "is_word" => {
            let args: WordArgs = serde_json::from_value(arguments)?;
            Ok(json!(oracle.is_word(&args.word)))
        }
        "is_valid_answer" => {
            let args: AnswerArgs = serde_json::from_value(arguments)?;
            let config =
                LetterConfiguration::from_parts(args.center.as_deref(), &args.letters.joined());
            let verdict = oracle.check_answer(&args.word, &config);
            Ok(json!({
                "valid": verdict == Verdict::Accepted,
                "reason": verdict.to_string(),
            }))
        }
        "find_words" => {
            let args: FindArgs = serde_json::from_value(arguments)?;
            let letters = args.letters.joined();
            info!("Finding words with letters: {letters}");
            let words = oracle.find_words(&letters);
            info!("Found {} valid words", words.len());
            Ok(json!(words))
        }
        "all_valid_answers" => {
            let args: ConfigArgs = serde_json::from_value(arguments)?;
            let config =
                LetterConfiguration::from_parts(args.center.as_deref(), &args.letters.joined());
            Ok(json!(oracle.all_valid_answers(&config)))
        }
        _ => Err(ToolError::UnknownTool(name.to_string())),
    }
}

/// Dispatch one request. Notifications get no response.
pub fn handle_request(request: &Request, oracle: &WordOracle) -> Option<Response> {
    let Some(id) = request.id.clone() else {
        debug!("Notification: {}", request.method);
        return None;
    };

    let response = match request.method.as_str() {
        "initialize" => handle_initialize(id),
        "tools/list" => Response::success(id, json!({ "tools": list_tools() })),
        "tools/call" | "call_tool" => handle_tools_call(id, &request.params, oracle),
        "ping" => Response::success(id, json!({})),
        _ => Response::error(
            id,
            error_codes::METHOD_NOT_FOUND,
            format!("Method not found: {}", request.method),
        ),
    };
    Some(response)
}

fn handle_initialize(id: RequestId) -> Response {
    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: ToolsCapability {
                list_changed: false,
            },
        },
        server_info: ServerInfo {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    match serde_json::to_value(result) {
        Ok(value) => Response::success(id, value),
        Err(e) => Response::error(id, error_codes::INTERNAL_ERROR, e.to_string()),
    }
}

fn handle_tools_call(id: RequestId, params: &Value, oracle: &WordOracle) -> Response {
    #[derive(Deserialize)]
    struct ToolCallParams {
        name: String,
        #[serde(default, alias = "input")]
        arguments: Value,
    }

    let params: ToolCallParams = match serde_json::from_value(params.clone()) {
        Ok(p) => p,
        Err(e) => {
            return Response::error(
                id,
                error_codes::INVALID_PARAMS,
                format!("Invalid tool call params: {e}"),
            );
        }
    };

    match call_tool(oracle, &params.name, params.arguments) {
        Ok(value) => Response::success(
            id,
            json!({ "content": [{ "type": "text", "text": value.to_string() }] }),
        ),
        Err(e) => {
            warn!("Tool call '{}' failed: {e}", params.name);
            Response::error(id, e.code(), e.to_string())
        }
    }
}

/// Serve requests from `reader` until EOF, writing one response per line.
pub fn run<R: BufRead, W: Write>(oracle: &WordOracle, mut reader: R, mut writer: W) -> Result<()> {
    info!(
        "{SERVER_NAME} starting on stdio with {} words",
        oracle.vocabulary().len()
    );
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            info!("Client disconnected (EOF)");
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                error!("Skipping non-UTF-8 request line: {e}");
                continue;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        debug!("Received: {trimmed}");

        let request: Request = match serde_json::from_str(trimmed) {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to parse request: {e}");
                continue;
            }
        };

        if let Some(response) = handle_request(&request, oracle) {
            let response_json = serde_json::to_string(&response)?;
            debug!("Sending: {response_json}");
            writer.write_all(response_json.as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::Vocabulary;
    use std::io::Cursor;

    fn oracle() -> WordOracle {
        WordOracle::new(Vocabulary::from_words(["plead", "peal", "lead", "apple", "pleat"]))
    }

    fn request(id: i64, method: &str, params: Value) -> Request {
        Request {
            jsonrpc: "2.0".to_string(),
            id: Some(RequestId::Number(id)),
            method: method.to_string(),
            params,
        }
    }

    #[test]
    fn test_list_tools_names() {
        let names: Vec<&str> = list_tools().iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec!["is_word", "is_valid_answer", "find_words", "all_valid_answers"]
        );
    }

    #[test]
    fn test_call_tool_is_word() {
        let oracle = oracle();
        assert_eq!(
            call_tool(&oracle, "is_word", json!({ "word": " Plead " })).unwrap(),
            json!(true)
        );
        assert_eq!(
            call_tool(&oracle, "is_word", json!({ "word": "xyzzy" })).unwrap(),
            json!(false)
        );
    }

    #[test]
    fn test_call_tool_is_valid_answer_reports_reason() {
        let oracle = oracle();
        let result = call_tool(
            &oracle,
            "is_valid_answer",
            json!({ "word": "lead", "center": "p", "letters": ["P", "L", "E", "A", "D"] }),
        )
        .unwrap();
        assert_eq!(result["valid"], json!(false));
        assert_eq!(result["reason"], json!("does not use the center letter"));
    }

    #[test]
    fn test_call_tool_find_words_accepts_string_letters() {
        let oracle = oracle();
        let result = call_tool(&oracle, "find_words", json!({ "letters": "plead" })).unwrap();
        assert_eq!(result, json!(["apple", "plead", "lead", "peal"]));
    }

    #[test]
    fn test_call_tool_all_valid_answers() {
        let oracle = oracle();
        let result = call_tool(
            &oracle,
            "all_valid_answers",
            json!({ "center": "p", "letters": "plead" }),
        )
        .unwrap();
        assert_eq!(result, json!(["apple", "peal", "plead"]));
    }

    #[test]
    fn test_call_tool_errors() {
        let oracle = oracle();
        let unknown = call_tool(&oracle, "score", json!({})).unwrap_err();
        assert!(matches!(unknown, ToolError::UnknownTool(_)));
        assert_eq!(unknown.code(), error_codes::METHOD_NOT_FOUND);

        let invalid = call_tool(&oracle, "is_word", json!({ "text": "plead" })).unwrap_err();
        assert!(matches!(invalid, ToolError::InvalidArguments(_)));
        assert_eq!(invalid.code(), error_codes::INVALID_PARAMS);
    }

    #[test]
    fn test_handle_request_notification_has_no_response() {
        let oracle = oracle();
        let notification = Request {
            jsonrpc: "2.0".to_string(),
            id: None,
            method: "notifications/initialized".to_string(),
            params: Value::Null,
        };
        assert!(handle_request(&notification, &oracle).is_none());
    }

    #[test]
    fn test_handle_request_initialize() {
        let oracle = oracle();
        let response = handle_request(&request(1, "initialize", json!({})), &oracle).unwrap();
        let result = response.result.unwrap();
        assert_eq!(result["serverInfo"]["name"], json!(SERVER_NAME));
        assert_eq!(result["protocolVersion"], json!(PROTOCOL_VERSION));
    }

    #[test]
    fn test_handle_request_legacy_call_tool_with_input() {
        let oracle = oracle();
        let response = handle_request(
            &request(2, "call_tool", json!({ "name": "find_words", "input": { "letters": ["A", "P", "L", "E"] } })),
            &oracle,
        )
        .unwrap();
        let result = response.result.unwrap();
        assert_eq!(result["content"][0]["text"], json!(r#"["apple","peal"]"#));
    }

    #[test]
    fn test_handle_request_unknown_method() {
        let oracle = oracle();
        let response = handle_request(&request(3, "resources/list", json!({})), &oracle).unwrap();
        assert_eq!(response.error.unwrap().code, error_codes::METHOD_NOT_FOUND);
    }

    #[test]
    fn test_run_skips_garbage_and_stops_at_eof() {
        let oracle = oracle();
        let input = concat!(
            "not json\n",
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"is_word","arguments":{"word":"peal"}}}"#,
            "\n",
        );
        let mut output = Vec::new();
        run(&oracle, Cursor::new(input), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1);
        let response: Response = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(response.id, RequestId::Number(1));
        assert_eq!(response.result.unwrap()["content"][0]["text"], json!("true"));
    }

    #[test]
    fn test_run_skips_invalid_utf8_line() {
        let oracle = oracle();
        let mut input = b"\xff\xfe garbage\n".to_vec();
        input.extend_from_slice(br#"{"jsonrpc":"2.0","id":5,"method":"tools/list"}"#);
        input.push(b'\n');
        let mut output = Vec::new();
        run(&oracle, Cursor::new(input), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1);
        let response: Response = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(response.id, RequestId::Number(5));
        assert_eq!(response.result.unwrap()["tools"].as_array().unwrap().len(), 4);
    }
}
