//! Line-based wire protocol
//!
//! One request per line, one reply line per request. The command vocabulary
//! is deliberately tiny: `QUIT`, `GET_STUDENT_COUNT`, `ADD_STUDENT`, and
//! `GET_STUDENT_INFO`. Anything else earns an `ERROR:` reply without
//! disturbing the registry.

use crate::core::registry::Registry;

/// A single protocol reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// The reply line, without a trailing newline
    pub line: String,
    /// Whether the server should close the connection after sending it
    pub disconnect: bool,
}

impl Reply {
    fn keep(line: String) -> Self {
        Self {
            line,
            disconnect: false,
        }
    }
}

/// Handle one request line against the registry
///
/// The command word is everything before the first space; the remainder is
/// the argument string. Unknown or malformed commands reply with an error and
/// leave the registry untouched.
#[must_use]
pub fn handle_line(registry: &mut Registry, line: &str) -> Reply {
    let trimmed = line.trim();
    let (command, args) = match trimmed.split_once(' ') {
        Some((cmd, rest)) => (cmd, rest),
        None => (trimmed, ""),
    };

    match command {
        "QUIT" => Reply {
            line: "INFO: Disconnecting.".to_string(),
            disconnect: true,
        },
        "GET_STUDENT_COUNT" => Reply::keep(format!("COUNT: {}", registry.student_count())),
        "ADD_STUDENT" => Reply::keep(add_student(registry, args)),
        "GET_STUDENT_INFO" => Reply::keep(student_info(registry, args)),
        _ => Reply::keep("ERROR: Unknown command".to_string()),
    }
}

fn add_student(registry: &mut Registry, args: &str) -> String {
    let fields: Vec<&str> = args.split(',').map(str::trim).collect();
    let &[id, name, major, email] = fields.as_slice() else {
        return "ERROR: Invalid ADD_STUDENT format. Use id,name,major,email".to_string();
    };
    if registry.add_student(id, name, major, email).is_err() {
        return format!("ERROR: Student with ID {id} already exists.");
    }
    format!("SUCCESS: Student {name} added.")
}

fn student_info(registry: &Registry, args: &str) -> String {
    let id = args.trim();
    registry.student_info(id).map_or_else(
        || format!("ERROR: Student with ID {id} not found."),
        |info| {
            serde_json::to_string(&info)
                .unwrap_or_else(|err| format!("ERROR: Failed to serialize student info: {err}"))
        },
    )
}
